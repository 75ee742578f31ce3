//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le contrôleur `Calculette` + le flash d’erreur, et traduire
//! chaque refus en message éphémère. Aucune règle de grammaire ici.
//!
//! Contrats :
//! - Le flash ne touche jamais au tampon ni à l’historique.
//! - Un nouveau flash remplace (annule) le précédent.
//! - Le temps vient de l’appelant (horloge egui) : pas d’Instant, sûr en wasm.

use tracing::debug;

use calculette::noyau::{Calculette, Commande, Persistance, Reglages};

/// Message d’erreur affiché à la place de l’écran jusqu’à `expire_a`.
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub message: String,
    pub expire_a: f64,
}

pub struct AppCalc {
    pub calc: Calculette<Box<dyn Persistance>>,
    pub flash: Option<Flash>,

    /// Durée du flash, en secondes (horloge egui).
    pub delai_flash: f64,
}

impl AppCalc {
    pub fn new(reglages: &Reglages, stockage: Box<dyn Persistance>) -> Self {
        Self {
            calc: Calculette::new(reglages, stockage),
            flash: None,
            delai_flash: reglages.delai_flash_ms as f64 / 1000.0,
        }
    }

    /* ------------------------ Commandes ------------------------ */

    /// Exécute une commande ; un refus devient un flash.
    pub fn executer(&mut self, commande: Commande, maintenant: f64) {
        if let Err(e) = self.calc.executer(commande) {
            debug!(?commande, erreur = %e, "commande refusée");
            self.flasher(e.to_string(), maintenant);
        }
    }

    pub fn charger_entree(&mut self, index: usize) {
        self.calc.charger_entree(index);
    }

    pub fn supprimer_entree(&mut self, index: usize) {
        self.calc.supprimer_entree(index);
    }

    pub fn vider_historique(&mut self) {
        self.calc.vider_historique();
    }

    /* ------------------------ Flash ------------------------ */

    pub fn flasher(&mut self, message: impl Into<String>, maintenant: f64) {
        self.flash = Some(Flash {
            message: message.into(),
            expire_a: maintenant + self.delai_flash,
        });
    }

    /// Retire le flash s’il a expiré. Renvoie le temps restant sinon.
    pub fn purger_flash(&mut self, maintenant: f64) -> Option<f64> {
        let restant = self.flash.as_ref().map(|f| f.expire_a - maintenant);
        match restant {
            Some(r) if r > 0.0 => Some(r),
            Some(_) => {
                self.flash = None;
                None
            }
            None => None,
        }
    }

    /// Ce que l’écran montre : le flash s’il est actif, sinon le tampon (ou "0").
    pub fn texte_ecran(&self, maintenant: f64) -> &str {
        match &self.flash {
            Some(f) if f.expire_a > maintenant => f.message.as_str(),
            _ => self.calc.affichage(),
        }
    }

    pub fn flash_actif(&self, maintenant: f64) -> bool {
        matches!(&self.flash, Some(f) if f.expire_a > maintenant)
    }
}
