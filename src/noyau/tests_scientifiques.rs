//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés contractuelles du noyau sans faire chauffer
//! la machine.
//! - précédence et associativité des tiers (^ puis */% puis +-)
//! - domaines de chaque fonction scientifique
//! - formatage uniforme (seuil 12 caractères)
//! - stress borné (sommes longues, parenthésage profond raisonnable)

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval::evaluer;
use super::fonctions::ModeAngle;
use super::format::formater_resultat;

fn eval_deg(expr: &str) -> Result<f64, ErreurEval> {
    evaluer(expr, ModeAngle::Degres)
}

fn ok_deg(expr: &str) -> f64 {
    eval_deg(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = ok_deg(expr);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} attendu={attendu} obtenu={v}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Précédence et associativité ------------------------ */

#[test]
fn sci_precedence_bodmas() {
    assert_proche("2+3*4", 14.0);
    assert_proche("(2+3)*4", 20.0);
    assert_proche("2+3*4-6/2", 11.0);
    assert_proche("2^2*3", 12.0);
}

#[test]
fn sci_exposant_associatif_a_gauche() {
    // Convention assumée : tous les tiers se réduisent gauche->droite,
    // donc (2^3)^2 et non 2^(3^2).
    assert_proche("2^3", 8.0);
    assert_proche("2^3^1", 8.0);
    assert_proche("2^3^2", 64.0);
}

#[test]
fn sci_tiers_multiplicatif_gauche_droite() {
    assert_proche("100/5/2", 10.0);
    assert_proche("10%4*2", 4.0);
    assert_proche("7%3", 1.0);
    assert_proche("7.5%2", 1.5);
}

/* ------------------------ Erreurs typées ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_eq!(eval_deg("5/0"), Err(ErreurEval::DivisionParZero));
    assert_eq!(eval_deg("reciprocal(0)"), Err(ErreurEval::DivisionParZero));
}

#[test]
fn sci_domaines() {
    assert!(matches!(eval_deg("asin(2)"), Err(ErreurEval::HorsDomaine(_))));
    assert!(matches!(eval_deg("acos(-2)"), Err(ErreurEval::HorsDomaine(_))));
    assert!(matches!(eval_deg("sqrt(-4)"), Err(ErreurEval::HorsDomaine(_))));
    assert!(matches!(eval_deg("log(0)"), Err(ErreurEval::HorsDomaine(_))));
    assert!(matches!(eval_deg("ln(-1)"), Err(ErreurEval::HorsDomaine(_))));
    assert!(matches!(
        eval_deg("factorial(-1)"),
        Err(ErreurEval::HorsDomaine(_))
    ));
    assert!(matches!(
        eval_deg("factorial(2.5)"),
        Err(ErreurEval::HorsDomaine(_))
    ));
}

#[test]
fn sci_factorielle_geante_rend_la_main() {
    // argument entier-valué gigantesque : le domaine l'accepte, le produit
    // sature en +inf et l'évaluation doit rendre la main immédiatement au
    // lieu d'itérer jusqu'à n
    let t0 = Instant::now();
    assert_eq!(
        eval_deg("factorial(99999999999999999999)"),
        Err(ErreurEval::Calcul)
    );
    budget(t0, Duration::from_secs(2));
}

#[test]
fn sci_resultat_exponentiel_reinjectable() {
    // la sortie du formateur doit se réévaluer telle quelle (enchaînement)
    let graine = formater_resultat(ok_deg("1/3"));
    assert_eq!(graine, "3.333333e-1");
    let v = ok_deg(&format!("{graine}+2"));
    assert!((v - 2.3333333).abs() < 1e-6);
}

#[test]
fn sci_mal_forme_strict() {
    // Politique stricte : pas d'évaluation best-effort d'une entrée dégradée.
    assert!(matches!(eval_deg("(1+2"), Err(ErreurEval::MalFormee(_))));
    assert!(matches!(eval_deg("1+2)"), Err(ErreurEval::MalFormee(_))));
    assert!(matches!(eval_deg("1+"), Err(ErreurEval::MalFormee(_))));
    assert!(matches!(eval_deg("sin()"), Err(ErreurEval::MalFormee(_))));
}

/* ------------------------ Fonctions : valeurs de référence ------------------------ */

#[test]
fn sci_valeurs_de_reference() {
    assert_proche("sin(90)", 1.0);
    assert_proche("cos(0)", 1.0);
    assert_proche("tan(45)", 1.0);
    assert_proche("asin(1)", 90.0);
    assert_proche("acos(0)", 90.0);
    assert_proche("atan(1)", 45.0);
    assert_proche("log(1000)", 3.0);
    assert_proche("sqrt(144)", 12.0);
    assert_proche("cbrt(-27)", -3.0);
    assert_proche("exp(0)", 1.0);
    assert_proche("square(7)", 49.0);
    assert_proche("reciprocal(8)", 0.125);
    assert_proche("factorial(5)", 120.0);
}

#[test]
fn sci_ln_de_e() {
    let v = evaluer(
        &format!("ln({})", std::f64::consts::E),
        ModeAngle::Degres,
    )
    .unwrap();
    assert!((v - 1.0).abs() < 1e-9);
}

#[test]
fn sci_mode_radians() {
    let v = evaluer("sin(3.141592653589793/2)", ModeAngle::Radians).unwrap();
    assert!((v - 1.0).abs() < 1e-9);

    // en radians, pas de conversion du retour d'atan
    let v = evaluer("atan(1)", ModeAngle::Radians).unwrap();
    assert!((v - std::f64::consts::FRAC_PI_4).abs() < 1e-9);
}

#[test]
fn sci_appels_imbriques() {
    // la fermante de l'appel interne ne doit pas clore l'appel externe
    let v = ok_deg("sin(cos(30))");
    let attendu = (30.0_f64.to_radians().cos().to_radians()).sin();
    assert!((v - attendu).abs() < 1e-12);

    let v = ok_deg("sqrt(sqrt(16))");
    assert!((v - 2.0).abs() < 1e-12);
}

#[test]
fn sci_fonction_dans_expression_composee() {
    assert_proche("2*sin(90)+1", 3.0);
    assert_proche("sqrt(16)+cbrt(8)", 6.0);
    assert_proche("factorial(3)*factorial(4)", 144.0);
}

/* ------------------------ Formatage uniforme ------------------------ */

#[test]
fn sci_format_court_verbatim() {
    assert_eq!(formater_resultat(ok_deg("2+3*4")), "14");
    assert_eq!(formater_resultat(ok_deg("square(7)")), "49");
}

#[test]
fn sci_format_long_exponentiel() {
    // même règle pour résultat arithmétique et résultat de fonction
    assert_eq!(formater_resultat(ok_deg("1/3")), "3.333333e-1");
    assert_eq!(
        formater_resultat(ok_deg("factorial(20)")),
        formater_resultat(2432902008176640000.0)
    );
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut expr = String::new();
    for k in 0..500 {
        if k > 0 {
            expr.push('+');
        }
        expr.push('2');
        budget(t0, max);
    }

    assert_proche(&expr, 1000.0);
}

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // profondeur modérée : l'évaluation de l'arbre est récursive
    let profondeur = 60;
    let mut expr = "1".to_string();
    for _ in 0..profondeur {
        expr = format!("({expr}+1)");
        budget(t0, max);
    }

    assert_proche(&expr, 1.0 + profondeur as f64);
}

#[test]
fn sci_determinisme() {
    // deux évaluations successives rendent exactement la même valeur
    for expr in ["sin(37)+cos(11)*tan(3)", "2^3^2/7", "sqrt(2)*sqrt(2)"] {
        let a = ok_deg(expr);
        let b = ok_deg(expr);
        assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
    }
}
