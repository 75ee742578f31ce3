//! src/noyau/historique.rs
//!
//! Registre des évaluations réussies (plus récente en tête, taille bornée).
//!
//! Contrats :
//! - Une entrée n’est créée QUE par une évaluation réussie ; jamais modifiée ensuite.
//! - Chaque mutation (enregistrer / supprimer / vider) est sauvegardée aussitôt.
//! - Un état persistant absent ou illisible donne un historique vide (jamais fatal).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::reglages::{CLE_HISTORIQUE_DEFAUT, HISTORIQUE_MAX_DEFAUT};
use super::stockage::{ErreurStockage, Persistance};

/// Noms de champs JSON courts : compatibles avec les historiques déjà enregistrés.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    #[serde(rename = "expr")]
    pub expression: String,
    #[serde(rename = "res")]
    pub resultat: String,
    #[serde(rename = "at")]
    pub horodatage: DateTime<Utc>,
}

pub struct Historique<P: Persistance> {
    entrees: Vec<EntreeHistorique>,
    max: usize,
    cle: String,
    stockage: P,
}

impl<P: Persistance> Historique<P> {
    /// Réglages par défaut (clé `calc_history_v1`, 50 entrées).
    pub fn charger(stockage: P) -> Self {
        Self::charger_avec(stockage, CLE_HISTORIQUE_DEFAUT, HISTORIQUE_MAX_DEFAUT)
    }

    /// Lecture initiale : toute erreur (E/S, JSON) dégrade en historique vide.
    pub fn charger_avec(stockage: P, cle: &str, max: usize) -> Self {
        let mut entrees = match lire_entrees(&stockage, cle) {
            Ok(v) => v,
            Err(e) => {
                warn!(cle, erreur = %e, "historique illisible, on repart de zéro");
                Vec::new()
            }
        };
        entrees.truncate(max);

        Self {
            entrees,
            max,
            cle: cle.to_string(),
            stockage,
        }
    }

    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn entree(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn stockage(&self) -> &P {
        &self.stockage
    }

    /// Ajoute en tête ; les plus anciennes (queue) sortent au-delà de `max`.
    pub fn enregistrer(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        let entree = EntreeHistorique {
            expression: expression.into(),
            resultat: resultat.into(),
            horodatage: Utc::now(),
        };
        info!(expression = %entree.expression, resultat = %entree.resultat, "évaluation enregistrée");

        self.entrees.insert(0, entree);
        self.entrees.truncate(self.max);
        self.sauver();
    }

    /// Hors bornes : no-op (mais on sauvegarde quand même, comme toute mutation demandée).
    pub fn supprimer(&mut self, index: usize) {
        if index < self.entrees.len() {
            self.entrees.remove(index);
            info!(index, "entrée d’historique supprimée");
        }
        self.sauver();
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
        info!("historique vidé");
        self.sauver();
    }

    /// Une sauvegarde ratée est journalisée, jamais remontée à l’UI.
    fn sauver(&mut self) {
        if let Err(e) = ecrire_entrees(&mut self.stockage, &self.cle, &self.entrees) {
            warn!(cle = %self.cle, erreur = %e, "sauvegarde de l’historique impossible");
        }
    }
}

fn lire_entrees<P: Persistance>(
    stockage: &P,
    cle: &str,
) -> Result<Vec<EntreeHistorique>, ErreurStockage> {
    match stockage.lire(cle)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

fn ecrire_entrees<P: Persistance>(
    stockage: &mut P,
    cle: &str,
    entrees: &[EntreeHistorique],
) -> Result<(), ErreurStockage> {
    let json = serde_json::to_string(entrees)?;
    stockage.ecrire(cle, &json)
}
