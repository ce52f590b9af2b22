// src/app.rs
//
// Calculatrice console — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + commande.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion Enter est faite dans vue.rs (quand le champ a le focus).
// - La commande "exit" pose `quitter` ; la fermeture se fait ici.

pub mod commande;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l’entrée (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        // "exit" : fin normale (sans effet côté web, l’onglet reste ouvert)
        if self.quitter {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
