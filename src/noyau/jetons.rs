// src/noyau/jetons.rs

use super::erreur::Erreur;
use super::operateurs::{Operateur, SYMBOLES_ACCEPTES};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Valeur déjà lue : pas de re-lecture texte -> nombre plus loin.
    Num(f64),
    Op(Operateur),

    LPar,
    RPar,
}

/// Ce qui précède le caractère courant (hors espaces).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Etat {
    Debut,
    Nombre,
    Operateur,
    ParentheseFermante,
}

/// Tokenize une ligne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - signe '-' collé au nombre : en tête ("-3+5") ou après un opérateur ("3 * -2")
/// - opérateurs + - * / ^ V ! %
/// - parenthèses ( ) (le compte doit être équilibré)
/// - espaces (séparateurs, jamais émis)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, Erreur> {
    let mut out = Vec::new();
    let mut courant = String::new();
    let mut etat = Etat::Debut;
    let mut ouvrantes: usize = 0;
    let mut fermantes: usize = 0;

    for c in s.chars() {
        // 'V' est l’opérateur racine, pas une lettre.
        if c.is_alphabetic() && c != 'V' {
            return Err(Erreur::lexicale("contains letters"));
        }
        if !c.is_ascii_digit() && c != '.' && c != ' ' && !SYMBOLES_ACCEPTES.contains(c)
        {
            return Err(Erreur::lexicale("unsupported operator"));
        }

        if c.is_ascii_digit() || c == '.' {
            courant.push(c);
            etat = Etat::Nombre;
            continue;
        }

        if c == ' ' {
            vider_litteral(&mut courant, &mut out)?;
            continue;
        }

        // signe unaire : en tête ou juste après un opérateur / '('
        if c == '-' && courant.is_empty() && matches!(etat, Etat::Debut | Etat::Operateur) {
            courant.push(c);
            continue;
        }

        vider_litteral(&mut courant, &mut out)?;

        match c {
            '(' => {
                ouvrantes += 1;
                out.push(Tok::LPar);
                etat = Etat::Operateur;
            }
            ')' => {
                fermantes += 1;
                out.push(Tok::RPar);
                etat = Etat::ParentheseFermante;
            }
            _ => {
                let op = Operateur::depuis_char(c)
                    .ok_or_else(|| Erreur::lexicale("unsupported operator"))?;
                out.push(Tok::Op(op));
                etat = Etat::Operateur;
            }
        }
    }

    vider_litteral(&mut courant, &mut out)?;

    if ouvrantes != fermantes {
        return Err(Erreur::lexicale("parenthesis mismatch"));
    }

    Ok(out)
}

/// Pousse le littéral en attente (s’il y en a un) sous forme de Num.
/// "1.2.3", "." ou un signe seul ne sont pas des nombres.
fn vider_litteral(courant: &mut String, out: &mut Vec<Tok>) -> Result<(), Erreur> {
    if courant.is_empty() {
        return Ok(());
    }
    let x: f64 = courant
        .parse()
        .map_err(|_| Erreur::lexicale("invalid number"))?;
    out.push(Tok::Num(x));
    courant.clear();
    Ok(())
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(x) => format!("{x}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
