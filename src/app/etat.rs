//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la console (entrée, journal, démarche, précision)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (voir commande.rs).
//! - Actions déterministes, sans effet de bord caché.
//! - Journal borné (JOURNAL_MAX lignes).

use calculatrice_console::noyau::reglages::Reglages;

/// Garde-fou : au-delà, on oublie les plus anciennes lignes.
const JOURNAL_MAX: usize = 200;

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub route: String,
    pub rpn: String,
    pub note: String,
}

/// Ce que la console a répondu à une ligne.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sortie {
    Resultat(String),
    Erreur(String),
    Aide,
    Indice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LigneJournal {
    pub entree: String,
    pub sortie: Sortie,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub journal: Vec<LigneJournal>,

    // --- démarche (panneau d’explication, dernière évaluation réussie) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
    // Posé par la commande "exit" ; app.rs ferme la fenêtre.
    pub quitter: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            // au démarrage : le mode d’emploi, comme une console
            journal: vec![LigneJournal {
                entree: String::new(),
                sortie: Sortie::Aide,
            }],
            demarche: Demarche::default(),
            reglages: Reglages::default(),
            focus_entree: true,
            quitter: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + journal + précision par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_journal();
        self.reglages = Reglages::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer journal + démarche (sans toucher à l’entrée).
    pub fn clear_journal(&mut self) {
        self.journal.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Ajoute une réponse au journal et vide l’entrée.
    pub fn pousser(&mut self, entree: impl Into<String>, sortie: Sortie) {
        if matches!(sortie, Sortie::Erreur(_)) {
            // démarche non fiable si l’évaluation échoue
            self.demarche = Demarche::default();
        }

        self.journal.push(LigneJournal {
            entree: entree.into(),
            sortie,
        });
        if self.journal.len() > JOURNAL_MAX {
            let trop = self.journal.len() - JOURNAL_MAX;
            self.journal.drain(..trop);
        }

        self.entree.clear();
        self.focus_entree = true;
    }

    /// Garde-fou : limite la précision affichée.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.reglages = Reglages::avec_decimales(decimales);
        self.focus_entree = true;
    }
}
