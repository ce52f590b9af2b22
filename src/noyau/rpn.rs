// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfixe)
// - Puis réduire la RPN sur une pile de f64
//
// Règles:
// - Seuls + - * / et les parenthèses sont attendus ici : les extensions
//   (! ^ V %) sont interceptées avant par extension.rs.
// - Dépile tant que précédence(sommet) >= précédence(entrant) : associativité à gauche.

use super::erreur::Erreur;
use super::jetons::Tok;
use super::operateurs::Operateur;

fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::LPar => 0,
        Tok::Op(op) => op.precedence(),
        _ => 3,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [LPar, Num(1), Plus, Num(2), RPar, Fois, Num(3)]
///   rpn:    [Num(1), Num(2), Plus, Num(3), Fois]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, Erreur> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; le compte est équilibré (jetons.rs),
                // mais l’ordre peut ne pas l’être : ")2+3("
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(Erreur::syntaxe("misplaced parenthesis")),
                    }
                }
            }

            Tok::Op(_) => {
                while let Some(top) = ops.last() {
                    if precedence(top) >= precedence(&tok) {
                        out.extend(ops.pop());
                    } else {
                        break;
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            return Err(Erreur::syntaxe("misplaced parenthesis"));
        }
        out.push(top);
    }

    Ok(out)
}

/// Réduit une RPN : nombre => empile ; opérateur => dépile droite puis gauche.
/// RPN vide => 0 (convention).
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, Erreur> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(x) => st.push(*x),

            Tok::Op(op) => {
                // choix de l’opération avant de dépiler : `3!+2` n’a qu’un opérande sous `!`
                let f: fn(f64, f64) -> Result<f64, Erreur> = match op {
                    Operateur::Plus => |x: f64, y: f64| Ok(x + y),
                    Operateur::Moins => |x: f64, y: f64| Ok(x - y),
                    Operateur::Fois => |x: f64, y: f64| Ok(x * y),
                    Operateur::Divise => |x: f64, y: f64| {
                        if y == 0.0 {
                            return Err(Erreur::domaine("division by zero"));
                        }
                        Ok(x / y)
                    },
                    // ! ^ V % : calcul direct seulement, jamais dans une chaîne
                    _ => return Err(Erreur::syntaxe("extension operators cannot be combined")),
                };

                let y = st.pop().ok_or_else(|| Erreur::syntaxe("missing operand"))?;
                let x = st.pop().ok_or_else(|| Erreur::syntaxe("missing operand"))?;
                st.push(f(x, y)?);
            }

            Tok::LPar | Tok::RPar => return Err(Erreur::syntaxe("misplaced parenthesis")),
        }
    }

    match st.len() {
        0 => Ok(0.0),
        1 => Ok(st[0]),
        _ => Err(Erreur::syntaxe("missing operator")),
    }
}
