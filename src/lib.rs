//! Calculette — noyau sans UI (bibliothèque)
//!
//! Le binaire (src/main.rs + src/app/) n’est qu’une coque egui autour de
//! `noyau::Calculette` : toute la grammaire, l’évaluation et l’historique vivent ici.

pub mod noyau;
