// src/main.rs
//
// Calculette — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 journal tracing (RUST_LOG) + historique en fichiers
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//                                 historique dans localStorage
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée + choix du stockage seulement

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;
use tracing::{info, warn};

mod app;

use app::AppCalc;
use calculette::noyau;
use calculette::noyau::stockage::StockageMemoire;
use calculette::noyau::{Persistance, Reglages};

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculette";

/// Variable d’environnement : chemin d’un fichier JSON de réglages (optionnel).
#[cfg(not(target_arch = "wasm32"))]
const VAR_REGLAGES: &str = "CALCULETTE_REGLAGES";

/* ------------------------ Stockage de l’historique ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn ouvrir_stockage() -> Box<dyn Persistance> {
    match noyau::stockage::StockageFichiers::par_defaut() {
        Some(s) => {
            info!(dossier = ?s.dossier(), "historique sur disque");
            Box::new(s)
        }
        None => {
            warn!("aucun dossier de données : historique en mémoire seulement");
            Box::new(StockageMemoire::new())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn ouvrir_stockage() -> Box<dyn Persistance> {
    match noyau::stockage::StockageNavigateur::ouvrir() {
        Ok(s) => Box::new(s),
        Err(e) => {
            warn!(erreur = %e, "localStorage indisponible : historique en mémoire seulement");
            Box::new(StockageMemoire::new())
        }
    }
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal() {
    use tracing_subscriber::EnvFilter;

    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // déjà installé (tests, hôte) : on garde l’existant
    let _ = tracing_subscriber::fmt().with_env_filter(filtre).try_init();
}

/// Réglages par défaut, sauf fichier JSON désigné par CALCULETTE_REGLAGES.
/// Fichier illisible ou invalide : avertissement + défauts (jamais fatal).
#[cfg(not(target_arch = "wasm32"))]
fn charger_reglages() -> Reglages {
    let Ok(chemin) = std::env::var(VAR_REGLAGES) else {
        return Reglages::default();
    };

    let lu = std::fs::read_to_string(&chemin)
        .map_err(|e| e.to_string())
        .and_then(|t| Reglages::depuis_json(&t).map_err(|e| e.to_string()));

    match lu {
        Ok(r) => {
            info!(%chemin, ?r, "réglages chargés");
            r
        }
        Err(erreur) => {
            warn!(%chemin, %erreur, "réglages ignorés, valeurs par défaut");
            Reglages::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    installer_journal();

    let reglages = charger_reglages();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([620.0, 520.0])
            .with_min_inner_size([480.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(&reglages, ouvrir_stockage())))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{ouvrir_stockage, AppCalc, Reglages, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| {
                    Ok(Box::new(AppCalc::new(
                        &Reglages::default(),
                        ouvrir_stockage(),
                    )))
                }),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
