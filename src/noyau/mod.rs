//! Noyau de la calculette (sans UI)
//!
//! Organisation interne :
//! - symboles.rs   : prédicats partagés (opérateurs, glyphes, compte des parenthèses)
//! - tampon.rs     : tampon d’expression + validation frappe par frappe + ±
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : AST + valeur
//! - format.rs     : résultat canonique (12 chiffres significatifs)
//! - eval.rs       : pipeline complet + classes d’erreurs
//! - stockage.rs   : persistance clé -> texte (mémoire / fichiers / navigateur)
//! - historique.rs : registre borné des évaluations
//! - reglages.rs   : bornes + clé + délai du flash
//! - commande.rs   : entrée unifiée (boutons + clavier)
//! - calculette.rs : contrôleur (seul propriétaire de l’état)

pub mod calculette;
pub mod commande;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod reglages;
pub mod rpn;
pub mod stockage;
pub mod symboles;
pub mod tampon;


#[cfg(test)]
mod tests_eval;

#[cfg(test)]
mod tests_historique;



// API publique minimale
pub use calculette::{Calculette, ErreurCalculette};
pub use commande::{Commande, ToucheNommee};
pub use eval::{evaluer_expression, ErreurEval};
pub use reglages::Reglages;
pub use stockage::Persistance;
pub use tampon::Refus;
