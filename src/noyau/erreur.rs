// src/noyau/erreur.rs
//
// Erreurs du noyau : un genre (lexicale / syntaxe / domaine) + un message lisible.
// Le message est ce que l’utilisateur voit ; le genre sert aux tests et au journal.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    /// Caractère interdit, parenthèses déséquilibrées, littéral illisible.
    Lexicale,
    /// Trop peu de jetons, premier jeton invalide, mauvaise arité.
    Syntaxe,
    /// Factorielle hors ℕ, radicande ≤ 0, division par zéro.
    Domaine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Erreur {
    pub genre: Genre,
    pub message: String,
}

impl Erreur {
    pub fn lexicale(message: impl Into<String>) -> Self {
        Self {
            genre: Genre::Lexicale,
            message: message.into(),
        }
    }

    pub fn syntaxe(message: impl Into<String>) -> Self {
        Self {
            genre: Genre::Syntaxe,
            message: message.into(),
        }
    }

    pub fn domaine(message: impl Into<String>) -> Self {
        Self {
            genre: Genre::Domaine,
            message: message.into(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Genre::Lexicale => write!(f, "lexical error"),
            Genre::Syntaxe => write!(f, "syntax error"),
            Genre::Domaine => write!(f, "domain error"),
        }
    }
}

/// Affichage : le message seul (c’est ce que la console montre).
impl fmt::Display for Erreur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Erreur {}
