//! Tests de l’historique (registre borné + persistance) et du contrôleur.

use super::calculette::{Calculette, ErreurCalculette};
use super::commande::Commande;
use super::eval::ErreurEval;
use super::historique::{EntreeHistorique, Historique};
use super::reglages::{Reglages, CLE_HISTORIQUE_DEFAUT};
use super::stockage::{ErreurStockage, Persistance, StockageMemoire};
use super::tampon::Refus;

/// Stockage qui échoue toujours (lecture ET écriture).
struct StockageCasse;

impl Persistance for StockageCasse {
    fn lire(&self, _cle: &str) -> Result<Option<String>, ErreurStockage> {
        Err(ErreurStockage::Navigateur("cassé".into()))
    }

    fn ecrire(&mut self, _cle: &str, _valeur: &str) -> Result<(), ErreurStockage> {
        Err(ErreurStockage::Navigateur("cassé".into()))
    }
}

fn expressions<P: Persistance>(h: &Historique<P>) -> Vec<&str> {
    h.entrees().iter().map(|e| e.expression.as_str()).collect()
}

/* ------------------------ Registre ------------------------ */

#[test]
fn plus_recente_en_tete() {
    let mut h = Historique::charger(StockageMemoire::new());
    h.enregistrer("1+1", "2");
    h.enregistrer("2+2", "4");
    assert_eq!(expressions(&h), vec!["2+2", "1+1"]);
    assert_eq!(h.entree(0).map(|e| e.resultat.as_str()), Some("4"));
}

#[test]
fn borne_evince_les_plus_anciennes() {
    let mut h = Historique::charger(StockageMemoire::new());
    for i in 0..51 {
        h.enregistrer(format!("{i}+0"), i.to_string());
    }
    assert_eq!(h.len(), 50);
    assert_eq!(h.entree(0).map(|e| e.expression.as_str()), Some("50+0"));
    // "0+0" (la plus ancienne) est sortie
    assert_eq!(h.entree(49).map(|e| e.expression.as_str()), Some("1+0"));
}

#[test]
fn supprimer_hors_bornes_est_un_no_op() {
    let mut h = Historique::charger(StockageMemoire::new());
    h.enregistrer("1+1", "2");
    h.enregistrer("2+2", "4");
    let avant = h.entrees().to_vec();

    h.supprimer(2);
    h.supprimer(usize::MAX);
    assert_eq!(h.entrees(), avant.as_slice());

    h.supprimer(0);
    assert_eq!(expressions(&h), vec!["1+1"]);
}

#[test]
fn vider() {
    let mut h = Historique::charger(StockageMemoire::new());
    h.enregistrer("1+1", "2");
    h.vider();
    assert!(h.is_empty());
    let json = h.stockage().lire(CLE_HISTORIQUE_DEFAUT).unwrap();
    assert_eq!(json.as_deref(), Some("[]"));
}

/* ------------------------ Persistance ------------------------ */

#[test]
fn aller_retour_persistant() {
    let mut h = Historique::charger(StockageMemoire::new());
    h.enregistrer("10/4", "2.5");
    h.enregistrer("50%", "0.5");
    let avant = h.entrees().to_vec();

    // on "redémarre" sur le même stockage
    let stockage = h.stockage().clone();
    let h2 = Historique::charger(stockage);
    assert_eq!(h2.entrees(), avant.as_slice());
}

#[test]
fn format_json_compatible() {
    let mut s = StockageMemoire::new();
    s.ecrire(
        CLE_HISTORIQUE_DEFAUT,
        r#"[{"expr":"2+2","res":"4","at":"2024-05-01T10:20:30.000Z"}]"#,
    )
    .unwrap();

    let h = Historique::charger(s);
    assert_eq!(h.len(), 1);
    let e: &EntreeHistorique = h.entree(0).unwrap();
    assert_eq!(e.expression, "2+2");
    assert_eq!(e.resultat, "4");
    assert_eq!(e.horodatage.to_rfc3339(), "2024-05-01T10:20:30+00:00");
}

#[test]
fn etat_illisible_donne_historique_vide() {
    let mut s = StockageMemoire::new();
    s.ecrire(CLE_HISTORIQUE_DEFAUT, "{ pas un tableau").unwrap();
    assert!(Historique::charger(s).is_empty());

    assert!(Historique::charger(StockageCasse).is_empty());
}

#[test]
fn sauvegarde_ratee_non_fatale() {
    let mut h = Historique::charger(StockageCasse);
    h.enregistrer("1+1", "2");
    assert_eq!(h.len(), 1);
}

#[test]
fn etat_trop_long_tronque_au_chargement() {
    let mut h = Historique::charger_avec(StockageMemoire::new(), "k", 10);
    for i in 0..10 {
        h.enregistrer(i.to_string(), i.to_string());
    }
    let h2 = Historique::charger_avec(h.stockage().clone(), "k", 3);
    assert_eq!(expressions(&h2), vec!["9", "8", "7"]);
}

/* ------------------------ Contrôleur ------------------------ */

fn calculette() -> Calculette<StockageMemoire> {
    Calculette::new(&Reglages::default(), StockageMemoire::new())
}

fn tape(c: &mut Calculette<StockageMemoire>, s: &str) {
    for ch in s.chars() {
        c.ajouter(ch).unwrap();
    }
}

#[test]
fn affichage_zero_si_vide() {
    let c = calculette();
    assert_eq!(c.affichage(), "0");
}

#[test]
fn evaluation_enregistre_puis_remplace_le_tampon() {
    let mut c = calculette();
    tape(&mut c, "10/4");
    assert_eq!(c.evaluer(), Ok(Some("2.5".to_string())));
    assert_eq!(c.affichage(), "2.5");

    let e = c.historique().entree(0).unwrap();
    assert_eq!((e.expression.as_str(), e.resultat.as_str()), ("10/4", "2.5"));

    // calcul enchaîné
    tape(&mut c, "*2");
    assert_eq!(c.evaluer(), Ok(Some("5".to_string())));
    assert_eq!(c.historique().len(), 2);
}

#[test]
fn evaluation_ratee_laisse_tout_intact() {
    let mut c = calculette();
    tape(&mut c, "5/0");
    assert_eq!(c.evaluer(), Err(ErreurEval::Arithmetique));
    assert_eq!(c.affichage(), "5/0");
    assert!(c.historique().is_empty());
}

#[test]
fn evaluation_vide_sans_historique() {
    let mut c = calculette();
    assert_eq!(c.evaluer(), Ok(None));
    assert!(c.historique().is_empty());
}

#[test]
fn charger_une_entree_sans_reevaluer() {
    let mut c = calculette();
    tape(&mut c, "1+2");
    c.evaluer().unwrap();
    c.effacer();

    assert!(c.charger_entree(0));
    assert_eq!(c.affichage(), "1+2");
    assert_eq!(c.historique().len(), 1);

    assert!(!c.charger_entree(7));
    assert_eq!(c.affichage(), "1+2");
}

#[test]
fn entree_trop_longue_non_rechargee() {
    // stockage édité à la main : des milliers de '(' ne doivent jamais atteindre l’évaluation
    let profonde = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    let entrees = vec![EntreeHistorique {
        expression: profonde,
        resultat: "1".into(),
        horodatage: chrono::Utc::now(),
    }];
    let mut s = StockageMemoire::new();
    s.ecrire(CLE_HISTORIQUE_DEFAUT, &serde_json::to_string(&entrees).unwrap())
        .unwrap();

    let mut c = Calculette::new(&Reglages::default(), s);
    assert_eq!(c.historique().len(), 1);

    assert!(!c.charger_entree(0));
    assert_eq!(c.affichage(), "0");
    assert_eq!(c.evaluer(), Ok(None));
}

#[test]
fn supprimer_et_vider_via_le_controleur() {
    let mut c = calculette();
    for e in ["1+1", "2+2", "3+3"] {
        c.effacer();
        tape(&mut c, e);
        c.evaluer().unwrap();
    }
    c.supprimer_entree(1);
    let restantes: Vec<_> = c
        .historique()
        .entrees()
        .iter()
        .map(|e| e.expression.clone())
        .collect();
    assert_eq!(restantes, vec!["3+3", "1+1"]);

    c.vider_historique();
    assert!(c.historique().is_empty());
}

#[test]
fn commandes_unifiees() {
    let mut c = calculette();
    for cmd in [
        Commande::Symbole('('),
        Commande::Symbole('2'),
        Commande::Symbole('0'),
        Commande::Symbole('+'),
        Commande::Symbole('3'),
        Commande::Symbole('0'),
        Commande::Symbole(')'),
        Commande::Symbole('%'),
    ] {
        c.executer(cmd).unwrap();
    }
    assert_eq!(c.executer(Commande::Evaluer), Ok(()));
    assert_eq!(c.affichage(), "0.5");

    c.executer(Commande::BasculerSigne).unwrap();
    assert_eq!(c.affichage(), "-0.5");

    c.executer(Commande::SupprimerDernier).unwrap();
    assert_eq!(c.affichage(), "-0.");

    assert_eq!(
        c.executer(Commande::Symbole('.')),
        Err(ErreurCalculette::Refus(Refus::PointInvalide))
    );
    assert_eq!(
        c.executer(Commande::Evaluer),
        Err(ErreurCalculette::Eval(ErreurEval::Incomplet))
    );

    c.executer(Commande::Effacer).unwrap();
    assert_eq!(c.affichage(), "0");
}

#[test]
fn reglages_appliques() {
    let r = Reglages {
        longueur_max: 2,
        historique_max: 1,
        cle_historique: "autre_cle".into(),
        ..Reglages::default()
    };
    let mut c = Calculette::new(&r, StockageMemoire::new());
    c.ajouter('1').unwrap();
    c.ajouter('2').unwrap();
    assert_eq!(c.ajouter('3'), Err(Refus::TropLong));

    c.evaluer().unwrap();
    c.effacer();
    c.ajouter('7').unwrap();
    c.evaluer().unwrap();

    assert_eq!(c.historique().len(), 1);
    assert!(c.historique().stockage().lire("autre_cle").unwrap().is_some());
    assert!(c
        .historique()
        .stockage()
        .lire(CLE_HISTORIQUE_DEFAUT)
        .unwrap()
        .is_none());
}
