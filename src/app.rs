// src/app.rs
//
// Calculette — module App (racine)
// --------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est lu ICI, une seule fois par frame (événements bruts).
//   L’écran n’est pas un TextEdit : aucun risque de double saisie.
// - Le retour du flash est piloté par request_repaint_after (pas de timer).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

use calculette::noyau::{Commande, ToucheNommee};

/// Événements clavier de la frame -> commandes (ordre conservé).
fn commandes_clavier(ctx: &egui::Context) -> Vec<Commande> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => {
                    out.extend(t.chars().filter_map(Commande::depuis_caractere));
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    let touche = match key {
                        egui::Key::Enter => Some(ToucheNommee::Entree),
                        egui::Key::Backspace => Some(ToucheNommee::Retour),
                        egui::Key::Escape => Some(ToucheNommee::Echap),
                        _ => None,
                    };
                    out.extend(touche.map(Commande::depuis_touche));
                }
                _ => {}
            }
        }
        out
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        for commande in commandes_clavier(ctx) {
            self.executer(commande, maintenant);
        }

        egui::SidePanel::right("panneau_historique")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                self.ui_historique(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant);
        });

        // Flash actif : on redemande une frame à son expiration.
        if let Some(restant) = self.purger_flash(maintenant) {
            ctx.request_repaint_after(Duration::from_secs_f64(restant));
        }
    }
}
