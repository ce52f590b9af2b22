//! Réglages du noyau et de l’affichage.
//!
//! Pas de fichier de config, pas de variable d’environnement : des constantes
//! bornées + une petite structure que l’UI peut ajuster.

/// Décimales affichées par défaut (équivalent du `fixed` C : 6 chiffres).
pub const DECIMALES_DEFAUT: usize = 6;

/// Garde-fou : au-delà, un f64 n’a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 17;

/// Garde-fou factorielle : 5000! a déjà plus de 16 000 chiffres.
pub const FACTORIELLE_MAX: u64 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub decimales: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
        }
    }
}

impl Reglages {
    /// Borne la précision demandée (anti-abus).
    pub fn avec_decimales(decimales: usize) -> Self {
        Self {
            decimales: decimales.clamp(0, DECIMALES_MAX),
        }
    }
}
