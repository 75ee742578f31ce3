// src/noyau/expr.rs
//
// AST arithmétique (flottants IEEE-754, comme la calculette d’origine).
// - Nombre : littéral décimal
// - Neg    : moins unaire
// - Add/Sub/Mul/Div : binaires
//
// La division par zéro n’est PAS une erreur ici : elle donne ±inf ou NaN,
// c’est eval.rs qui décide de refuser un résultat non fini.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn valeur(&self) -> f64 {
        use Expr::*;

        match self {
            Nombre(v) => *v,
            Neg(x) => -x.valeur(),
            Add(a, b) => a.valeur() + b.valeur(),
            Sub(a, b) => a.valeur() - b.valeur(),
            Mul(a, b) => a.valeur() * b.valeur(),
            Div(a, b) => a.valeur() / b.valeur(),
        }
    }
}

/// Forme entièrement parenthésée (journal de debug).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Nombre(v) => write!(f, "{v}"),
            Neg(x) => write!(f, "-({x})"),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
        }
    }
}
