// src/noyau/stockage.rs
//
// Capacité de persistance clé -> texte (abstraite).
// - StockageMemoire    : HashMap (tests, repli si aucun dossier n’est disponible)
// - StockageFichiers   : natif, un fichier "<clé>.json" par clé
// - StockageNavigateur : wasm32, window.localStorage
//
// L’historique ne connaît que le trait : il ne sait pas où vivent les octets.

use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErreurStockage {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("E/S sur {chemin:?}: {source}")]
    Io {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON invalide: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stockage navigateur: {0}")]
    Navigateur(String),

    #[error("clé invalide: {0:?}")]
    CleInvalide(String),
}

pub trait Persistance {
    /// `Ok(None)` si la clé n’a jamais été écrite.
    fn lire(&self, cle: &str) -> Result<Option<String>, ErreurStockage>;

    fn ecrire(&mut self, cle: &str, valeur: &str) -> Result<(), ErreurStockage>;
}

impl<P: Persistance + ?Sized> Persistance for Box<P> {
    fn lire(&self, cle: &str) -> Result<Option<String>, ErreurStockage> {
        (**self).lire(cle)
    }

    fn ecrire(&mut self, cle: &str, valeur: &str) -> Result<(), ErreurStockage> {
        (**self).ecrire(cle, valeur)
    }
}

/* ------------------------ Mémoire ------------------------ */

#[derive(Clone, Debug, Default)]
pub struct StockageMemoire {
    valeurs: HashMap<String, String>,
}

impl StockageMemoire {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistance for StockageMemoire {
    fn lire(&self, cle: &str) -> Result<Option<String>, ErreurStockage> {
        Ok(self.valeurs.get(cle).cloned())
    }

    fn ecrire(&mut self, cle: &str, valeur: &str) -> Result<(), ErreurStockage> {
        self.valeurs.insert(cle.to_string(), valeur.to_string());
        Ok(())
    }
}

/* ------------------------ Fichiers (natif) ------------------------ */

/// Une clé devient un nom de fichier : on refuse tout ce qui pourrait sortir du dossier.
#[cfg(not(target_arch = "wasm32"))]
fn verifier_cle(cle: &str) -> Result<(), ErreurStockage> {
    let ok = !cle.is_empty()
        && cle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(ErreurStockage::CleInvalide(cle.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct StockageFichiers {
    dossier: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl StockageFichiers {
    pub fn new(dossier: impl Into<PathBuf>) -> Self {
        Self {
            dossier: dossier.into(),
        }
    }

    /// `<données utilisateur>/calculette`, si la plateforme en fournit un.
    pub fn par_defaut() -> Option<Self> {
        dirs::data_dir().map(|d| Self::new(d.join("calculette")))
    }

    pub fn dossier(&self) -> &std::path::Path {
        &self.dossier
    }

    fn chemin(&self, cle: &str) -> Result<PathBuf, ErreurStockage> {
        verifier_cle(cle)?;
        Ok(self.dossier.join(format!("{cle}.json")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Persistance for StockageFichiers {
    fn lire(&self, cle: &str) -> Result<Option<String>, ErreurStockage> {
        let chemin = self.chemin(cle)?;
        match std::fs::read_to_string(&chemin) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ErreurStockage::Io { chemin, source }),
        }
    }

    fn ecrire(&mut self, cle: &str, valeur: &str) -> Result<(), ErreurStockage> {
        let chemin = self.chemin(cle)?;

        std::fs::create_dir_all(&self.dossier).map_err(|source| ErreurStockage::Io {
            chemin: self.dossier.clone(),
            source,
        })?;

        // écriture atomique : fichier temporaire puis rename
        let tmp = chemin.with_extension("json-");
        std::fs::write(&tmp, valeur).map_err(|source| ErreurStockage::Io {
            chemin: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &chemin).map_err(|source| ErreurStockage::Io {
            chemin: chemin.clone(),
            source,
        })?;
        Ok(())
    }
}

/* ------------------------ Navigateur (wasm32) ------------------------ */

#[cfg(target_arch = "wasm32")]
pub struct StockageNavigateur {
    local: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl StockageNavigateur {
    pub fn ouvrir() -> Result<Self, ErreurStockage> {
        let w = web_sys::window()
            .ok_or_else(|| ErreurStockage::Navigateur("window() indisponible".into()))?;
        let local = w
            .local_storage()
            .map_err(|e| ErreurStockage::Navigateur(format!("{e:?}")))?
            .ok_or_else(|| ErreurStockage::Navigateur("localStorage indisponible".into()))?;
        Ok(Self { local })
    }
}

#[cfg(target_arch = "wasm32")]
impl Persistance for StockageNavigateur {
    fn lire(&self, cle: &str) -> Result<Option<String>, ErreurStockage> {
        self.local
            .get_item(cle)
            .map_err(|e| ErreurStockage::Navigateur(format!("{e:?}")))
    }

    fn ecrire(&mut self, cle: &str, valeur: &str) -> Result<(), ErreurStockage> {
        self.local
            .set_item(cle, valeur)
            .map_err(|e| ErreurStockage::Navigateur(format!("{e:?}")))
    }
}
