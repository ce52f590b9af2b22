// src/noyau/operateurs.rs
//
// Table statique des opérateurs : symbole, précédence, arité, famille.
//
// Deux familles :
// - générale  : + - * /  (binaires, associatifs à gauche, enchaînables)
// - extension : ! ^ V %  (exclusifs : un seul par expression, rien d’autre autour)

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,

    Factorielle, // !  (unaire postfixé)
    Puissance,   // ^
    Racine,      // V  (degré V radicande)
    Pourcent,    // %  (taux % base)
}

/// Tous les symboles acceptés par le tokenizer (hors chiffres et '.').
pub const SYMBOLES_ACCEPTES: &str = "+-*/^V!%() ";

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            '!' => Some(Self::Factorielle),
            '^' => Some(Self::Puissance),
            'V' => Some(Self::Racine),
            '%' => Some(Self::Pourcent),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Factorielle => '!',
            Self::Puissance => '^',
            Self::Racine => 'V',
            Self::Pourcent => '%',
        }
    }

    /// Classe de précédence (la parenthèse ouvrante vaut 0, voir rpn.rs).
    /// Les extensions tombent dans le repli 3 : elles n’arrivent normalement
    /// jamais jusqu’au convertisseur.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise => 2,
            _ => 3,
        }
    }

    pub fn arite(self) -> u8 {
        match self {
            Self::Factorielle => 1,
            _ => 2,
        }
    }

    pub fn est_extension(self) -> bool {
        matches!(
            self,
            Self::Factorielle | Self::Puissance | Self::Racine | Self::Pourcent
        )
    }
}
