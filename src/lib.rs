//! Calculatrice console — noyau réutilisable.
//!
//! Lit une ligne d’expression arithmétique et la réduit à un nombre :
//! - + - * / avec parenthèses (shunting-yard + pile RPN)
//! - ! ^ V % en opérateurs exclusifs, calculés directement
//!
//! L’interface (egui, natif + web) vit dans le binaire.

pub mod noyau;
