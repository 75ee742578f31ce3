//! src/noyau/calculette.rs
//!
//! Contrôleur unique : possède le tampon ET l’historique.
//!
//! Contrats :
//! - Aucun état global : tout passe par `&mut Calculette`.
//! - Chaque opération s’exécute jusqu’au bout (pas d’attente, pas de verrou).
//! - Évaluation réussie => historique(tampon, résultat) PUIS tampon := résultat.
//! - Évaluation ratée   => tampon intact.

use thiserror::Error;
use tracing::{debug, warn};

use super::commande::Commande;
use super::eval::{evaluer_expression, ErreurEval};
use super::historique::Historique;
use super::reglages::Reglages;
use super::stockage::Persistance;
use super::tampon::{Refus, Tampon};

/// Ce que l’UI doit flasher après une commande refusée.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalculette {
    #[error(transparent)]
    Refus(#[from] Refus),
    #[error(transparent)]
    Eval(#[from] ErreurEval),
}

pub struct Calculette<P: Persistance> {
    tampon: Tampon,
    historique: Historique<P>,
}

impl<P: Persistance> Calculette<P> {
    /// Charge l’historique depuis `stockage` (vide si absent ou illisible).
    pub fn new(reglages: &Reglages, stockage: P) -> Self {
        Self {
            tampon: Tampon::new(reglages.longueur_max),
            historique: Historique::charger_avec(
                stockage,
                &reglages.cle_historique,
                reglages.historique_max,
            ),
        }
    }

    pub fn tampon(&self) -> &Tampon {
        &self.tampon
    }

    pub fn historique(&self) -> &Historique<P> {
        &self.historique
    }

    /// Texte affiché : le tampon, ou "0" s’il est vide.
    pub fn affichage(&self) -> &str {
        if self.tampon.est_vide() {
            "0"
        } else {
            self.tampon.texte()
        }
    }

    /* ------------------------ Tampon ------------------------ */

    pub fn ajouter(&mut self, symbole: char) -> Result<(), Refus> {
        self.tampon.ajouter(symbole)
    }

    pub fn supprimer_dernier(&mut self) {
        self.tampon.supprimer_dernier();
    }

    pub fn effacer(&mut self) {
        self.tampon.effacer();
    }

    pub fn basculer_signe(&mut self) -> Result<(), Refus> {
        self.tampon.basculer_signe()
    }

    /// `Ok(None)` : tampon vide, rien ne se passe.
    pub fn evaluer(&mut self) -> Result<Option<String>, ErreurEval> {
        let resultat = match evaluer_expression(self.tampon.texte()) {
            Ok(Some(r)) => r,
            Ok(None) => return Ok(None),
            Err(e) => {
                debug!(expression = %self.tampon.texte(), erreur = ?e, "évaluation refusée");
                return Err(e);
            }
        };

        self.historique
            .enregistrer(self.tampon.texte(), resultat.as_str());
        self.tampon.remplacer(resultat.as_str());
        Ok(Some(resultat))
    }

    /* ------------------------ Historique ------------------------ */

    /// Recharge l’expression d’une entrée dans le tampon, SANS la réévaluer.
    /// Index hors bornes ou expression plus longue que le tampon (stockage
    /// modifié à la main) : `false`, tampon intact.
    pub fn charger_entree(&mut self, index: usize) -> bool {
        let Some(e) = self.historique.entree(index) else {
            return false;
        };

        if e.expression.chars().count() > self.tampon.longueur_max() {
            warn!(index, longueur = e.expression.len(), "entrée trop longue, non rechargée");
            return false;
        }

        let expression = e.expression.clone();
        self.tampon.remplacer(expression);
        true
    }

    pub fn supprimer_entree(&mut self, index: usize) {
        self.historique.supprimer(index);
    }

    pub fn vider_historique(&mut self) {
        self.historique.vider();
    }

    /* ------------------------ Entrée unifiée ------------------------ */

    /// Point d’entrée des deux canaux (boutons + clavier).
    pub fn executer(&mut self, commande: Commande) -> Result<(), ErreurCalculette> {
        match commande {
            Commande::Symbole(c) => self.ajouter(c)?,
            Commande::Effacer => self.effacer(),
            Commande::SupprimerDernier => self.supprimer_dernier(),
            Commande::BasculerSigne => self.basculer_signe()?,
            Commande::Evaluer => {
                self.evaluer()?;
            }
        }
        Ok(())
    }
}
