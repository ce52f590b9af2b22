// src/noyau/extension.rs
//
// Aiguillage des opérateurs d’extension (! ^ V %).
//
// Ces opérateurs sont exclusifs : "5!", "2^3", "2V9", "10%100", rien d’autre.
// On les calcule directement depuis les jetons, sans passer par la RPN.
// Tout le reste (> 2 jetons) part vers rpn.rs.

use num_bigint::BigUint;
use num_traits::One;

use super::erreur::Erreur;
use super::jetons::Tok;
use super::nombre::Nombre;
use super::operateurs::Operateur;
use super::reglages::FACTORIELLE_MAX;
use super::rpn::{eval_rpn, to_rpn};

const MSG_ARGUMENTS: &str = "invalid number or value of arguments";

/// Chemin emprunté par `perform` (pour la démarche).
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    /// Calcul direct d’un opérateur d’extension.
    Directe(Operateur),
    /// Shunting-yard puis pile RPN ; porte la forme postfixée.
    Postfixe(Vec<Tok>),
}

/// Évalue une suite de jetons : extension directe, sinon RPN.
pub fn perform(tokens: &[Tok]) -> Result<Nombre, Erreur> {
    perform_avec_route(tokens).map(|(n, _route)| n)
}

/// Comme `perform`, mais rend aussi la route suivie.
pub fn perform_avec_route(tokens: &[Tok]) -> Result<(Nombre, Route), Erreur> {
    if tokens.len() < 2 {
        return Err(Erreur::syntaxe("insufficient data"));
    }

    if !matches!(tokens[0], Tok::Num(_) | Tok::LPar) {
        return Err(Erreur::syntaxe("first argument must be a number"));
    }

    match tokens[1] {
        Tok::Op(op) if op.est_extension() => {
            // arité 1 => "x !" ; arité 2 => "x op y"
            if tokens.len() != op.arite() as usize + 1 {
                return Err(Erreur::syntaxe(MSG_ARGUMENTS));
            }
            let n = match op {
                Operateur::Factorielle => factorielle_jeton(&tokens[0])?,
                _ => binaire_direct(op, &tokens[0], &tokens[2])?,
            };
            Ok((n, Route::Directe(op)))
        }
        _ if tokens.len() > 2 => {
            let rpn = to_rpn(tokens)?;
            let x = eval_rpn(&rpn)?;
            Ok((Nombre::Reel(x), Route::Postfixe(rpn)))
        }
        _ => Err(Erreur::syntaxe("insufficient data")),
    }
}

fn factorielle_jeton(t: &Tok) -> Result<Nombre, Erreur> {
    let x = match t {
        Tok::Num(x) => *x,
        _ => return Err(Erreur::syntaxe(MSG_ARGUMENTS)),
    };
    if x < 0.0 || x.fract() != 0.0 {
        return Err(Erreur::domaine("factorial only defined for natural numbers"));
    }
    if x > FACTORIELLE_MAX as f64 {
        return Err(Erreur::domaine("factorial argument too large"));
    }
    Ok(Nombre::Entier(factorielle(x as u64)))
}

/// n! exact : 0! = 1! = 1, n! = n × (n-1)!
/// Produit itératif, argument borné par FACTORIELLE_MAX en amont.
pub fn factorielle(n: u64) -> BigUint {
    let mut acc = BigUint::one();
    for k in 2..=n {
        acc *= k;
    }
    acc
}

fn binaire_direct(op: Operateur, gauche: &Tok, droite: &Tok) -> Result<Nombre, Erreur> {
    let (x, y) = match (gauche, droite) {
        (Tok::Num(x), Tok::Num(y)) => (*x, *y),
        _ => return Err(Erreur::syntaxe(MSG_ARGUMENTS)),
    };

    let r = match op {
        Operateur::Puissance => x.powf(y),
        Operateur::Racine => {
            // x = degré, y = radicande
            if y <= 0.0 {
                return Err(Erreur::domaine("radicand must be positive"));
            }
            y.powf(1.0 / x)
        }
        // "x pour cent de y" : le taux d’abord
        Operateur::Pourcent => (x / 100.0) * y,
        _ => return Err(Erreur::syntaxe(MSG_ARGUMENTS)),
    };

    Ok(Nombre::Reel(r))
}
