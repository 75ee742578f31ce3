// src/noyau/reglages.rs
//
// Réglages de la calculette (bornes + clé de persistance + délai du flash).
// Valeurs par défaut = comportement historique ; un fichier JSON peut
// surcharger tout ou partie des champs (#[serde(default)]).

use serde::{Deserialize, Serialize};

/// Longueur max du tampon (anti-saisie infinie).
pub const LONGUEUR_MAX_DEFAUT: usize = 120;

/// Nombre max d’entrées d’historique conservées.
pub const HISTORIQUE_MAX_DEFAUT: usize = 50;

/// Clé fixe (espace de noms) de l’historique dans le stockage.
pub const CLE_HISTORIQUE_DEFAUT: &str = "calc_history_v1";

/// Durée du flash d’erreur avant retour à l’affichage normal.
pub const DELAI_FLASH_MS_DEFAUT: u64 = 700;

/// Garde-fou : aucune borne configurable ne dépasse ceci.
const BORNE_ABSOLUE: usize = 10_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub longueur_max: usize,
    pub historique_max: usize,
    pub cle_historique: String,
    pub delai_flash_ms: u64,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            longueur_max: LONGUEUR_MAX_DEFAUT,
            historique_max: HISTORIQUE_MAX_DEFAUT,
            cle_historique: CLE_HISTORIQUE_DEFAUT.to_string(),
            delai_flash_ms: DELAI_FLASH_MS_DEFAUT,
        }
    }
}

impl Reglages {
    /// Lit des réglages JSON (champs absents => valeurs par défaut), puis borne.
    pub fn depuis_json(texte: &str) -> Result<Self, serde_json::Error> {
        let r: Reglages = serde_json::from_str(texte)?;
        Ok(r.bornes())
    }

    /// Bornes de sécurité (même esprit que `set_digits` : clamp, jamais d’erreur).
    pub fn bornes(mut self) -> Self {
        self.longueur_max = self.longueur_max.clamp(1, BORNE_ABSOLUE);
        self.historique_max = self.historique_max.clamp(1, BORNE_ABSOLUE);
        if self.cle_historique.trim().is_empty() {
            self.cle_historique = CLE_HISTORIQUE_DEFAUT.to_string();
        }
        self
    }
}
