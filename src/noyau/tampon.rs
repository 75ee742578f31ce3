//! src/noyau/tampon.rs
//!
//! Tampon d’expression + validation frappe par frappe.
//!
//! Contrat :
//! - Un symbole n’entre dans le tampon que s’il garde l’expression
//!   prolongeable ou évaluable (pas d’état “mort”, pas de reprise d’erreur).
//! - Un refus ne modifie JAMAIS le tampon ; la raison sert seulement au flash UI.
//! - `supprimer_dernier` est toujours permis (no-op sur tampon vide).

use thiserror::Error;
use tracing::trace;

use super::reglages::LONGUEUR_MAX_DEFAUT;
use super::symboles::{est_operateur, normaliser_symbole, parentheses_ouvertes};

/// Préfixe de l’enveloppe “négation de toute l’expression”.
pub const PREFIXE_ENVELOPPE: &str = "(-1)*(";

/// Raison d’un refus (affichée brièvement, jamais propagée plus loin).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Refus {
    #[error("Trop long")]
    TropLong,
    #[error("Invalide")]
    PointInvalide,
    #[error("% invalide")]
    PourcentInvalide,
    #[error("Utilisez * pour ×")]
    MultiplicationImplicite,
    #[error("Pas de ( ouvrante")]
    SansOuvrante,
    #[error("Invalide )")]
    FermanteInvalide,
    #[error("Commencez par un nombre")]
    DebutSansNombre,
    #[error("Opérateur invalide")]
    OperateurInvalide,
    #[error("Invalide après (")]
    ApresOuvrante,
    #[error("Invalide")]
    ApresPoint,
    #[error("Invalide")]
    Interdit(char),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tampon {
    texte: String,
    longueur_max: usize,
}

impl Default for Tampon {
    fn default() -> Self {
        Self::new(LONGUEUR_MAX_DEFAUT)
    }
}

impl Tampon {
    pub fn new(longueur_max: usize) -> Self {
        Self {
            texte: String::new(),
            longueur_max,
        }
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn est_vide(&self) -> bool {
        self.texte.is_empty()
    }

    /// Longueur en caractères (pas en octets).
    pub fn longueur(&self) -> usize {
        self.texte.chars().count()
    }

    pub fn longueur_max(&self) -> usize {
        self.longueur_max
    }

    fn dernier(&self) -> Option<char> {
        self.texte.chars().last()
    }

    /* ------------------------ Admission ------------------------ */

    /// Prédicat pur : le symbole (après normalisation ÷ × −) serait-il admis ?
    pub fn peut_ajouter(&self, symbole: char) -> bool {
        self.verifier(symbole).is_ok()
    }

    /// Même décision que `peut_ajouter`, avec la raison du refus.
    pub fn verifier(&self, symbole: char) -> Result<(), Refus> {
        let v = normaliser_symbole(symbole);

        if self.longueur() >= self.longueur_max {
            return Err(Refus::TropLong);
        }

        let dernier = self.dernier();

        match v {
            '0'..='9' => Ok(()),

            '.' => {
                // jeton numérique courant : on remonte jusqu’à un opérateur / parenthèse / espace
                let jeton_a_un_point = self
                    .texte
                    .chars()
                    .rev()
                    .take_while(|&c| !(est_operateur(c) || c == '(' || c == ')' || c == ' '))
                    .any(|c| c == '.');
                if jeton_a_un_point || dernier == Some(')') {
                    return Err(Refus::PointInvalide);
                }
                Ok(())
            }

            '%' => match dernier {
                None | Some('(') | Some('.') | Some('%') => Err(Refus::PourcentInvalide),
                Some(c) if est_operateur(c) => Err(Refus::PourcentInvalide),
                Some(_) => Ok(()),
            },

            '(' => match dernier {
                None | Some('(') => Ok(()),
                Some(c) if est_operateur(c) => Ok(()),
                // pas de multiplication implicite : "2(" est refusé
                Some(_) => Err(Refus::MultiplicationImplicite),
            },

            ')' => {
                if parentheses_ouvertes(&self.texte) <= 0 {
                    return Err(Refus::SansOuvrante);
                }
                match dernier {
                    None | Some('(') | Some('.') => Err(Refus::FermanteInvalide),
                    Some(c) if est_operateur(c) => Err(Refus::FermanteInvalide),
                    Some(_) => Ok(()),
                }
            }

            op if est_operateur(op) => match dernier {
                None if op == '-' => Ok(()),
                None => Err(Refus::DebutSansNombre),
                // moins unaire après opérateur ("5*-3"), mais jamais "--"
                Some(c) if est_operateur(c) => {
                    if op == '-' && c != '-' {
                        Ok(())
                    } else {
                        Err(Refus::OperateurInvalide)
                    }
                }
                Some('(') if op == '-' => Ok(()),
                Some('(') => Err(Refus::ApresOuvrante),
                Some('.') => Err(Refus::ApresPoint),
                // chiffre, ')' ou '%' : le '%' se comporte comme une valeur
                Some(_) => Ok(()),
            },

            autre => Err(Refus::Interdit(autre)),
        }
    }

    /// Ajoute le symbole s’il est admis ; sinon no-op et raison du refus.
    ///
    /// Un `.` qui ouvre un nouveau nombre (tampon vide ou après `(`) s’écrit `0.`.
    pub fn ajouter(&mut self, symbole: char) -> Result<(), Refus> {
        let v = normaliser_symbole(symbole);

        if let Err(refus) = self.verifier(v) {
            trace!(symbole = %v, tampon = %self.texte, %refus, "symbole refusé");
            return Err(refus);
        }

        if v == '.' && matches!(self.dernier(), None | Some('(')) {
            self.texte.push_str("0.");
        } else {
            self.texte.push(v);
        }

        trace!(symbole = %v, tampon = %self.texte, "symbole admis");
        Ok(())
    }

    /* ------------------------ Transformations ------------------------ */

    pub fn supprimer_dernier(&mut self) {
        self.texte.pop();
    }

    pub fn effacer(&mut self) {
        self.texte.clear();
    }

    /// Remplacement en bloc (résultat évalué, entrée d’historique rechargée).
    pub fn remplacer(&mut self, texte: impl Into<String>) {
        self.texte = texte.into();
    }

    /// ± : ordre des cas significatif (déballer AVANT d’envelopper).
    ///
    /// 1. vide            -> `-`
    /// 2. `(-1)*(x)`      -> `x`
    /// 3. nombre simple   -> ajoute / retire le `-` de tête
    /// 4. sinon           -> `(-1)*(` + tampon + `)`, même inachevé ("2+", "(", "-")
    ///
    /// Un tampon enveloppé se déballe toujours au ± suivant : pas d’état mort.
    pub fn basculer_signe(&mut self) -> Result<(), Refus> {
        if self.texte.is_empty() {
            self.texte.push('-');
            return Ok(());
        }

        if let Some(interieur) = interieur_enveloppe(&self.texte) {
            self.texte = interieur.to_string();
            return Ok(());
        }

        if est_nombre_simple(&self.texte) {
            if let Some(sans_signe) = self.texte.strip_prefix('-') {
                self.texte = sans_signe.to_string();
            } else {
                self.verifier_place(1)?;
                self.texte.insert(0, '-');
            }
            return Ok(());
        }

        self.verifier_place(PREFIXE_ENVELOPPE.len() + 1)?;
        self.texte = format!("{PREFIXE_ENVELOPPE}{})", self.texte);
        Ok(())
    }

    fn verifier_place(&self, ajout: usize) -> Result<(), Refus> {
        if self.longueur() + ajout > self.longueur_max {
            return Err(Refus::TropLong);
        }
        Ok(())
    }
}

/// `-?\d+(\.\d+)?%?` sans rien d’autre.
fn est_nombre_simple(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    let s = s.strip_suffix('%').unwrap_or(s);

    let (entier, fraction) = match s.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (s, None),
    };

    let chiffres = |t: &str| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit());

    chiffres(entier) && fraction.map_or(true, chiffres)
}

/// Contenu de l’enveloppe `(-1)*( … )`, seulement si la `(` du préfixe n’est
/// pas refermée avant la `)` finale. "(-1)*(2)+(3)" n’est PAS une enveloppe.
/// Un intérieur encore ouvert ("(-1)*(()" autour de "(") reste déballable.
fn interieur_enveloppe(s: &str) -> Option<&str> {
    let interieur = s.strip_prefix(PREFIXE_ENVELOPPE)?.strip_suffix(')')?;

    let mut profondeur: i64 = 0;
    for c in interieur.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur -= 1;
                if profondeur < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }

    Some(interieur)
}
