//! Noyau — évaluation (pipeline réel)
//!
//! normalisation (÷ × − %) -> filtre de caractères -> équilibre des () -> fin complète
//!        -> jetons -> RPN -> Expr -> valeur -> résultat canonique (12 chiffres)
//!
//! Aucune évaluation “texte comme code” : la grammaire est fermée
//! (+ - * / unaire - parenthèses nombres décimaux).

use thiserror::Error;
use tracing::debug;

use super::expr::Expr;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize, ErreurSyntaxe};
use super::rpn::{from_rpn, to_rpn};
use super::symboles::{est_operateur, normaliser_operateurs, parentheses_ouvertes};

/// Réécriture du pourcentage : "50%" -> "50*0.01".
const POURCENT: &str = "*0.01";

/// Classes d’erreurs d’évaluation (le tampon n’est jamais modifié).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("Erreur")]
    Malforme(#[from] ErreurSyntaxe),
    #[error("() déséquilibrées")]
    Desequilibre,
    #[error("Incomplet")]
    Incomplet,
    #[error("Erreur")]
    Arithmetique,
}

/// Étape 2 : glyphes -> ASCII, puis chaque `%` devient littéralement `*0.01`.
pub fn normaliser(texte: &str) -> String {
    normaliser_operateurs(texte).replace('%', POURCENT)
}

fn caractere_autorise(c: char) -> bool {
    c.is_ascii_digit() || est_operateur(c) || matches!(c, '(' | ')' | '.') || c.is_whitespace()
}

/// API publique : évalue le texte du tampon.
///
/// - `Ok(None)`        : tampon vide (no-op : ni erreur, ni historique)
/// - `Ok(Some(res))`   : résultat canonique
/// - `Err(_)`          : malformé / déséquilibré / incomplet / arithmétique
pub fn evaluer_expression(texte: &str) -> Result<Option<String>, ErreurEval> {
    let brut = texte.trim();
    if brut.is_empty() {
        return Ok(None);
    }

    let normalise = normaliser(texte);

    if let Some(c) = normalise.chars().find(|&c| !caractere_autorise(c)) {
        return Err(ErreurSyntaxe::CaractereInattendu(c).into());
    }

    // compté AVANT la réécriture du % (qui n’ajoute pas de parenthèses de toute façon)
    if parentheses_ouvertes(texte) != 0 {
        return Err(ErreurEval::Desequilibre);
    }

    // un '%' final est complet : il vient d’être réécrit en "*0.01"
    match normaliser_operateurs(brut).chars().last() {
        None | Some('(') | Some('.') => return Err(ErreurEval::Incomplet),
        Some(c) if est_operateur(c) => return Err(ErreurEval::Incomplet),
        Some(_) => {}
    }

    let valeur = calculer(&normalise)?;
    if !valeur.is_finite() {
        debug!(expression = %texte, %valeur, "résultat non fini");
        return Err(ErreurEval::Arithmetique);
    }

    Ok(Some(format_resultat(valeur)))
}

/// jetons -> RPN -> Expr -> valeur (texte déjà normalisé).
pub fn calculer(normalise: &str) -> Result<f64, ErreurSyntaxe> {
    let jetons = tokenize(normalise)?;
    let rpn = to_rpn(&jetons)?;
    let expr: Expr = from_rpn(&rpn)?;

    debug!(
        jetons = %format_tokens(&jetons),
        rpn = %format_tokens(&rpn),
        arbre = %expr,
        "expression analysée"
    );

    Ok(expr.valeur())
}
