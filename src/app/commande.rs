// src/app/commande.rs
//
// Boucle lecture-évaluation-affichage, une ligne à la fois.
//
// - "help"  => mode d’emploi
// - "exit"  => fermeture (app.rs envoie ViewportCommand::Close)
// - vide    => petit rappel
// - sinon   => noyau : "Result: <virgule fixe>" ou le message d’erreur
//
// Une expression fausse ne termine jamais la boucle : l’erreur est affichée, on continue.

use calculatrice_console::noyau::eval_expression;
use calculatrice_console::noyau::nombre::Nombre;

use super::etat::{AppCalc, Demarche, Sortie};

pub const INDICE: &str = "If you want to quit, type 'exit'. If you need help, type: 'help'";

pub const AIDE: &str = "\
The calculator solves arithmetic operations, which include:
  addition (+), subtraction (-), multiplication (*), division (/)
You can also use parentheses. For example: 2 * (10/2) - 2

The following operations must be used on their own, without any other operator:
  factorial   x!     e.g. 5!      = 120
  power       x^y    e.g. 2^3     = 8
  root        xVy    e.g. 2V9     = 3     (x is the degree, y the radicand)
  percent     x%y    e.g. 10%100  = 10    (x percent of y)

Negative numbers: -3+5, 3 * -2
Type 'help' to show this message again, 'exit' to quit.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande<'a> {
    Aide,
    Quitter,
    Vide,
    Expression(&'a str),
}

impl<'a> Commande<'a> {
    pub fn lire(ligne: &'a str) -> Self {
        match ligne.trim() {
            "help" => Commande::Aide,
            "exit" => Commande::Quitter,
            "" => Commande::Vide,
            s => Commande::Expression(s),
        }
    }
}

pub fn formater_resultat(n: &Nombre, decimales: usize) -> String {
    format!("Result: {}", n.formater(decimales))
}

impl AppCalc {
    /// Traite la ligne en cours d’entrée (Enter ou bouton "=").
    pub fn soumettre(&mut self) {
        let ligne = self.entree.clone();

        match Commande::lire(&ligne) {
            Commande::Aide => self.pousser(ligne.trim(), Sortie::Aide),
            Commande::Quitter => {
                log::info!("exit demandé");
                self.quitter = true;
            }
            Commande::Vide => self.pousser("", Sortie::Indice),
            Commande::Expression(s) => match eval_expression(s) {
                Ok((n, d)) => {
                    self.demarche = Demarche {
                        jetons: d.jetons,
                        route: d.route,
                        rpn: d.rpn,
                        note: d.note,
                    };
                    let txt = formater_resultat(&n, self.reglages.decimales);
                    self.pousser(s, Sortie::Resultat(txt));
                }
                Err(e) => self.pousser(s, Sortie::Erreur(e.to_string())),
            },
        }
    }
}
