// src/noyau/jetons.rs

use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : jamais produit par tokenize(), injecté par to_rpn()
    Neg,

    LPar,
    RPar,
}

/// Erreurs de syntaxe (jetons / RPN / reconstruction de l’arbre).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),
    #[error("parenthèse fermante sans ouvrante")]
    FermanteOrpheline,
    #[error("parenthèses non fermées")]
    NonFermee,
    #[error("opérande manquant")]
    OperandeManquant,
    #[error("expression invalide")]
    ExpressionInvalide,
}

/// Tokenize une chaîne déjà normalisée (ASCII, `%` déjà réécrit).
/// Supporte:
/// - nombres décimaux (ex: 12, 0.5, 5., .5)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (ignorés)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurSyntaxe> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : chiffres, au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut vu_point = false;
            while i < chars.len() && (chars[i].is_ascii_digit() || (chars[i] == '.' && !vu_point)) {
                if chars[i] == '.' {
                    vu_point = true;
                }
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();

            // "." seul, ou "1.2.3" (le second point arrive ici comme début de nombre)
            let v: f64 = txt
                .parse()
                .map_err(|_| ErreurSyntaxe::NombreInvalide(txt.clone()))?;
            if i < chars.len() && chars[i] == '.' {
                return Err(ErreurSyntaxe::NombreInvalide(format!("{txt}.")));
            }

            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurSyntaxe::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (journal de debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
