// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran en lecture seule (pas de TextEdit : toute saisie passe par le validateur)
// - Pavé tactile : gros boutons, glyphes ÷ × − ±
// - Panneau d’historique : clic = recharger, 🗑 = supprimer, bouton = tout vider
//
// Note :
// - Le clavier est lu dans app.rs (événements bruts), pas ici.

use eframe::egui;

use super::etat::AppCalc;
use calculette::noyau::Commande;

/// Action différée sur l’historique (on ne mute pas pendant qu’on l’itère).
#[derive(Clone, Copy, Debug)]
enum ActionHistorique {
    Charger(usize),
    Supprimer(usize),
    Vider,
}

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculette");
        ui.add_space(6.0);

        self.ui_ecran(ui, maintenant);

        ui.add_space(8.0);

        self.ui_pave(ui, maintenant);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let flash = self.flash_actif(maintenant);
        let texte = self.texte_ecran(maintenant).to_string();

        let couleur = if flash {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(texte)
                            .monospace()
                            .size(28.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_calculette")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Commande::Effacer, maintenant);
                self.bouton(ui, "DEL", Commande::SupprimerDernier, maintenant);
                self.bouton(ui, "%", Commande::Symbole('%'), maintenant);
                self.bouton(ui, "÷", Commande::Symbole('÷'), maintenant);
                ui.end_row();

                self.bouton(ui, "7", Commande::Symbole('7'), maintenant);
                self.bouton(ui, "8", Commande::Symbole('8'), maintenant);
                self.bouton(ui, "9", Commande::Symbole('9'), maintenant);
                self.bouton(ui, "×", Commande::Symbole('×'), maintenant);
                ui.end_row();

                self.bouton(ui, "4", Commande::Symbole('4'), maintenant);
                self.bouton(ui, "5", Commande::Symbole('5'), maintenant);
                self.bouton(ui, "6", Commande::Symbole('6'), maintenant);
                self.bouton(ui, "−", Commande::Symbole('−'), maintenant);
                ui.end_row();

                self.bouton(ui, "1", Commande::Symbole('1'), maintenant);
                self.bouton(ui, "2", Commande::Symbole('2'), maintenant);
                self.bouton(ui, "3", Commande::Symbole('3'), maintenant);
                self.bouton(ui, "+", Commande::Symbole('+'), maintenant);
                ui.end_row();

                self.bouton(ui, "±", Commande::BasculerSigne, maintenant);
                self.bouton(ui, "0", Commande::Symbole('0'), maintenant);
                self.bouton(ui, ".", Commande::Symbole('.'), maintenant);
                self.bouton(ui, "=", Commande::Evaluer, maintenant);
                ui.end_row();

                self.bouton(ui, "(", Commande::Symbole('('), maintenant);
                self.bouton(ui, ")", Commande::Symbole(')'), maintenant);
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, commande: Commande, maintenant: f64) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.executer(commande, maintenant);
        }
    }

    /// Panneau latéral : entrées (plus récente en tête) + actions.
    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.heading("Historique");
        ui.add_space(4.0);

        let mut action: Option<ActionHistorique> = None;

        if self.calc.historique().is_empty() {
            ui.weak("Aucun calcul pour l’instant");
        } else {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .max_height(ui.available_height() - 40.0)
                .show(ui, |ui| {
                    for (idx, e) in self.calc.historique().entrees().iter().enumerate() {
                        ui.horizontal(|ui| {
                            let expr = ui
                                .add(
                                    egui::Label::new(egui::RichText::new(&e.expression).monospace())
                                        .sense(egui::Sense::click())
                                        .truncate(),
                                )
                                .on_hover_text(&e.expression);
                            if expr.clicked() {
                                action = Some(ActionHistorique::Charger(idx));
                            }

                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                let del = ui
                                    .small_button("🗑")
                                    .on_hover_text(format!("Supprimer l’entrée {}", idx + 1));
                                if del.clicked() {
                                    action = Some(ActionHistorique::Supprimer(idx));
                                }
                                ui.monospace(&e.resultat);
                            });
                        });
                        ui.separator();
                    }
                });

            if ui.button("Effacer l’historique").clicked() {
                action = Some(ActionHistorique::Vider);
            }
        }

        match action {
            Some(ActionHistorique::Charger(i)) => self.charger_entree(i),
            Some(ActionHistorique::Supprimer(i)) => self.supprimer_entree(i),
            Some(ActionHistorique::Vider) => self.vider_historique(),
            None => {}
        }
    }
}
