// src/noyau/symboles.rs
//
// Petits prédicats partagés par le tampon (validation) et l’évaluation.

/// Opérateurs binaires de la grammaire (le `-` sert aussi de moins unaire).
pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Glyphes des boutons -> ASCII (`÷` `×` `−`). Tout le reste passe tel quel.
pub fn normaliser_symbole(c: char) -> char {
    match c {
        '÷' => '/',
        '×' => '*',
        '−' => '-',
        autre => autre,
    }
}

/// Version chaîne de `normaliser_symbole`.
pub fn normaliser_operateurs(s: &str) -> String {
    s.chars().map(normaliser_symbole).collect()
}

/// Nombre de `(` non refermées : count('(') - count(')').
/// Peut être négatif si le texte ferme plus qu’il n’ouvre.
pub fn parentheses_ouvertes(s: &str) -> i64 {
    s.chars().fold(0i64, |n, c| match c {
        '(' => n + 1,
        ')' => n - 1,
        _ => n,
    })
}
