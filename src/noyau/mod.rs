//! Noyau de la calculatrice console
//!
//! Organisation interne :
//! - operateurs.rs : table des opérateurs (précédence, arité, famille)
//! - erreur.rs     : erreurs typées (lexicale / syntaxe / domaine)
//! - nombre.rs     : résultat (f64 ou factorielle exacte) + virgule fixe
//! - reglages.rs   : constantes bornées (décimales, factorielle)
//! - jetons.rs     : tokenisation + validation
//! - extension.rs  : aiguillage ! ^ V % (calcul direct)
//! - rpn.rs        : shunting-yard + pile RPN
//! - eval.rs       : pipeline complet

pub mod erreur;
pub mod eval;
pub mod extension;
pub mod jetons;
pub mod nombre;
pub mod operateurs;
pub mod reglages;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{eval_expression, evaluate, parse};
