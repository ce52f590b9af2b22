// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Une console : journal au-dessus, une seule ligne d’entrée en dessous
// - Clavier : Enter soumet la ligne (quand le champ est focus)
// - Tactile : pavé + opérateurs, focus redonné après clic (focus_entree)

use eframe::egui;

use calculatrice_console::noyau::reglages::DECIMALES_MAX;

use super::commande::{AIDE, INDICE};
use super::etat::{AppCalc, Sortie};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice console");
        ui.add_space(6.0);

        self.ui_journal(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_demarche(ui);
    }

    fn ui_journal(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("journal")
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .max_height(320.0)
                    .show(ui, |ui| {
                        for ligne in &self.journal {
                            if !ligne.entree.is_empty() {
                                ui.monospace(format!("> {}", ligne.entree));
                            }
                            match &ligne.sortie {
                                Sortie::Resultat(txt) => {
                                    ui.monospace(txt);
                                }
                                Sortie::Erreur(msg) => {
                                    ui.colored_label(ui.visuals().error_fg_color, msg);
                                }
                                Sortie::Aide => {
                                    ui.monospace(AIDE);
                                }
                                Sortie::Indice => {
                                    ui.weak(INDICE);
                                }
                            }
                            ui.add_space(4.0);
                        }
                    });
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2 * (10/2) - 2, 5!, 2V9, 10%100, help, exit")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter soumet (seulement si le champ est focus) ---
        // TextEdit singleline perd le focus sur Enter : on le redemande.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.soumettre();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Actions + précision
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = journal seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface journal + démarche", Action::ClearJournal);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Précision :");
            let mut d = self.reglages.decimales as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DECIMALES_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });

        ui.add_space(8.0);

        // Opérateurs + "="
        ui.horizontal_wrapped(|ui| {
            for s in ["(", ")", "+", "-", "*", "/"] {
                self.bouton_insert(ui, s);
            }

            ui.separator();

            // extensions : seules dans l’expression
            for s in ["!", "^", "V", "%"] {
                self.bouton_insert(ui, s);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.soumettre();
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7");
                self.bouton_insert(ui, "8");
                self.bouton_insert(ui, "9");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4");
                self.bouton_insert(ui, "5");
                self.bouton_insert(ui, "6");
                ui.label("");
                ui.end_row();

                self.bouton_insert(ui, "1");
                self.bouton_insert(ui, "2");
                self.bouton_insert(ui, "3");
                self.bouton_insert(ui, ".");
                ui.end_row();

                self.bouton_insert(ui, "0");
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Retire le dernier caractère (et les espaces qui le suivaient).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Route", "demarche_route", &self.demarche.route);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Affichage lecture seule, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearJournal => self.clear_journal(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if resp.clicked() {
            self.entree.push_str(symbole);
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearJournal,
    ResetTotal,
    Backspace,
}
