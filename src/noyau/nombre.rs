// src/noyau/nombre.rs
//
// Résultat d’une évaluation.
// - Reel   : tout ce qui passe par f64 (+ - * /, ^, V, %)
// - Entier : factorielle exacte (BigUint), promue en f64 seulement à la demande

use std::fmt;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::reglages::DECIMALES_DEFAUT;

#[derive(Clone, Debug, PartialEq)]
pub enum Nombre {
    Reel(f64),
    Entier(BigUint),
}

impl Nombre {
    /// Promotion vers f64 (peut donner `inf` pour un très grand entier).
    pub fn en_f64(&self) -> f64 {
        match self {
            Nombre::Reel(x) => *x,
            Nombre::Entier(n) => n.to_f64().unwrap_or(f64::INFINITY),
        }
    }

    /// Écriture décimale à virgule fixe, `decimales` chiffres après le point.
    /// L’entier reste exact : on ajoute seulement les zéros.
    pub fn formater(&self, decimales: usize) -> String {
        match self {
            Nombre::Reel(x) => format!("{x:.decimales$}"),
            Nombre::Entier(n) => {
                if decimales == 0 {
                    format!("{n}")
                } else {
                    format!("{n}.{}", "0".repeat(decimales))
                }
            }
        }
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formater(DECIMALES_DEFAUT))
    }
}
