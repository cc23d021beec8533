// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter transmet l’entrée (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - La vue ne calcule rien : elle lit le moteur (description, historique, programme)

use eframe::egui;

use super::etat::{AppCalc, VARIABLE_MEMOIRE};
use crate::noyau::{format_programme, symboles};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice NPI");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pile(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 3 4 + √   ou   π 2 ÷ sin")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter transmet (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.valider_entree();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "⏎", "Empile l’entrée", Action::Valider);
            self.bouton_action(ui, "C", "Vide la pile (variables conservées)", Action::Reset);
            self.bouton_action(
                ui,
                "Charger",
                "Remplace la pile par l’entrée lue comme programme",
                Action::Charger,
            );
        });

        ui.add_space(8.0);

        // Opérateurs + constante (ordre du registre)
        ui.horizontal_wrapped(|ui| {
            for s in symboles() {
                let resp = ui.add_sized([46.0, 28.0], egui::Button::new(s));
                if resp.clicked() {
                    self.operation(s);
                }
            }
        });

        ui.add_space(8.0);

        // Mémoire
        ui.horizontal(|ui| {
            self.bouton_action(ui, "→M", "Lie M au résultat", Action::Memoriser);
            self.bouton_action(ui, "M", "Empile la variable M", Action::EmpilerMemoire);
            self.bouton_action(ui, "M∅", "Délie M", Action::OublierMemoire);
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        // absent => vide (le noyau ne prescrit aucune valeur de repli)
        let texte = self.resultat.map(|v| v.to_string()).unwrap_or_default();
        Self::champ_monospace(ui, "resultat_out", &texte, 1);

        ui.add_space(6.0);

        ui.label("Description :");
        let description = self.moteur.description();
        Self::champ_monospace(ui, "description_out", &description, 2);
    }

    fn ui_pile(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Pile")
            .default_open(true)
            .show(ui, |ui| {
                let historique = self.moteur.history();
                Self::champ_pile(ui, "Historique", "pile_historique", &historique);

                let programme = format_programme(&self.moteur.program());
                Self::champ_pile(ui, "Programme", "pile_programme", &programme);

                let mut variables: Vec<String> = self
                    .moteur
                    .variables
                    .iter()
                    .map(|(nom, v)| format!("{nom} = {v}"))
                    .collect();
                variables.sort();
                Self::champ_pile(ui, "Variables", "pile_variables", &variables.join("\n"));

                ui.add_space(4.0);
                ui.weak(format!("{} élément(s) sur la pile", self.moteur.pile().len()));
                let lie = self.moteur.variables.contains_key(VARIABLE_MEMOIRE);
                ui.weak(if lie {
                    "M est liée"
                } else {
                    "M n’est pas liée"
                });
            });
    }

    fn champ_pile(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
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
                Action::Valider => self.valider_entree(),
                Action::Reset => self.reset_total(),
                Action::Charger => self.charger_programme(),
                Action::Memoriser => self.memoriser(),
                Action::EmpilerMemoire => self.empiler_memoire(),
                Action::OublierMemoire => self.oublier_memoire(),
            }
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Valider,
    Reset,
    Charger,
    Memoriser,
    EmpilerMemoire,
    OublierMemoire,
}
