//! Tests de l’évaluation : résultats canoniques + classes d’erreurs.

use super::eval::{evaluer_expression, normaliser, ErreurEval};
use super::jetons::ErreurSyntaxe;

fn eval_ok(expr: &str) -> String {
    evaluer_expression(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e:?}"))
        .unwrap_or_else(|| panic!("expr={expr:?} : aucun résultat"))
}

fn eval_err(expr: &str) -> ErreurEval {
    match evaluer_expression(expr) {
        Err(e) => e,
        Ok(r) => panic!("expr={expr:?} aurait dû échouer, obtenu {r:?}"),
    }
}

/* ------------------------ Résultats ------------------------ */

#[test]
fn arithmetique_de_base() {
    assert_eq!(eval_ok("2+2"), "4");
    assert_eq!(eval_ok("10/4"), "2.5");
    assert_eq!(eval_ok("7-10"), "-3");
    assert_eq!(eval_ok("0.1+0.2"), "0.3");
}

#[test]
fn priorites_et_associativite_gauche() {
    assert_eq!(eval_ok("2+3*4"), "14");
    assert_eq!(eval_ok("(2+3)*4"), "20");
    assert_eq!(eval_ok("8-3-2"), "3");
    assert_eq!(eval_ok("64/4/2"), "8");
}

#[test]
fn moins_unaire() {
    assert_eq!(eval_ok("-5+2"), "-3");
    assert_eq!(eval_ok("5*-3"), "-15");
    assert_eq!(eval_ok("(-2)*(-3)"), "6");
    assert_eq!(eval_ok("(-1)*(1+2)"), "-3");
}

#[test]
fn egalite_parfaite_arrondie_vers_le_haut() {
    assert_eq!(eval_ok("100000000000.5"), "100000000001");
    assert_eq!(eval_ok("0.5+100000000000"), "100000000001");
    assert_eq!(eval_ok("-100000000000.5"), "-100000000001");
}

#[test]
fn enveloppe_d_un_moins_seul_malformee() {
    // "-" puis ± : évaluable seulement après un nouveau ±
    assert!(matches!(eval_err("(-1)*(-)"), ErreurEval::Malforme(_)));
}

#[test]
fn pourcentage() {
    assert_eq!(eval_ok("50%"), "0.5");
    assert_eq!(eval_ok("(20+30)%"), "0.5");
    assert_eq!(eval_ok("200*10%"), "20");
}

#[test]
fn pourcentage_reecrit_litteralement() {
    assert_eq!(normaliser("50%"), "50*0.01");
    assert_eq!(normaliser("6÷3×2−1%"), "6/3*2-1*0.01");
    // réécriture textuelle : "5%3" devient "5*0.013"
    assert_eq!(eval_ok("5%3"), "0.065");
}

#[test]
fn glyphes_unicode_acceptes() {
    assert_eq!(eval_ok("6÷3×2−1"), "3");
}

#[test]
fn espaces_toleres() {
    assert_eq!(eval_ok(" 1 + 2 "), "3");
}

#[test]
fn zeros_de_tete_acceptes() {
    assert_eq!(eval_ok("007+1"), "8");
}

/* ------------------------ No-op ------------------------ */

#[test]
fn vide_est_un_no_op() {
    assert_eq!(evaluer_expression(""), Ok(None));
    assert_eq!(evaluer_expression("   "), Ok(None));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn incomplet() {
    assert_eq!(eval_err("2+"), ErreurEval::Incomplet);
    assert_eq!(eval_err("-"), ErreurEval::Incomplet);
    assert_eq!(eval_err("3."), ErreurEval::Incomplet);
    assert_eq!(eval_err("2×"), ErreurEval::Incomplet);
}

#[test]
fn desequilibre() {
    assert_eq!(eval_err("(1+2"), ErreurEval::Desequilibre);
    assert_eq!(eval_err("1+2)"), ErreurEval::Desequilibre);
    // l’équilibre est vérifié avant la complétude
    assert_eq!(eval_err("(1+"), ErreurEval::Desequilibre);
}

#[test]
fn division_par_zero() {
    assert_eq!(eval_err("5/0"), ErreurEval::Arithmetique);
    assert_eq!(eval_err("0/0"), ErreurEval::Arithmetique);
    assert_eq!(eval_err("-1/(2-2)"), ErreurEval::Arithmetique);
}

#[test]
fn malforme_caractere() {
    assert_eq!(
        eval_err("2^3"),
        ErreurEval::Malforme(ErreurSyntaxe::CaractereInattendu('^'))
    );
    // un résultat exponentiel rechargé n’est pas dans la grammaire
    assert!(matches!(eval_err("1e+21*2"), ErreurEval::Malforme(_)));
}

#[test]
fn malforme_syntaxe() {
    assert!(matches!(eval_err("()"), ErreurEval::Malforme(_)));
    assert!(matches!(eval_err("(1)(2)"), ErreurEval::Malforme(_)));
    assert_eq!(
        eval_err("1)+(2"),
        ErreurEval::Malforme(ErreurSyntaxe::FermanteOrpheline)
    );
    assert!(matches!(eval_err("1.2.3"), ErreurEval::Malforme(_)));
}

#[test]
fn messages_pour_le_flash() {
    assert_eq!(ErreurEval::Incomplet.to_string(), "Incomplet");
    assert_eq!(ErreurEval::Desequilibre.to_string(), "() déséquilibrées");
    assert_eq!(ErreurEval::Arithmetique.to_string(), "Erreur");
}
