//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique ; toute sortie est Ok(valeur finie)
//!   ou une erreur de la taxonomie ErreurEval

use std::time::{Duration, Instant};

use super::eval::evaluer;
use super::fonctions::ModeAngle;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits entiers et décimaux simples, zéro inclus (utile pour
    // déclencher les divisions par zéro)
    match rng.pick(8) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2".to_string(),
        3 => "3".to_string(),
        4 => "7".to_string(),
        5 => "0.5".to_string(),
        6 => "2.25".to_string(),
        _ => "10".to_string(),
    }
}

fn gen_fonction(rng: &mut Rng) -> &'static str {
    match rng.pick(11) {
        0 => "sin",
        1 => "cos",
        2 => "tan",
        3 => "asin",
        4 => "acos",
        5 => "atan",
        6 => "log",
        7 => "ln",
        8 => "sqrt",
        9 => "cbrt",
        _ => "exp",
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(6) {
        0 => '+',
        1 => '-',
        2 => '*',
        3 => '/',
        4 => '%',
        _ => '^',
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(8) {
        0 => gen_nombre(rng),
        1..=4 => format!(
            "({}{}{})",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
        5 => format!("-{}", gen_expr(rng, depth - 1)),
        _ => format!("{}({})", gen_fonction(rng), gen_expr(rng, depth - 1)),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_jamais_de_panique_et_finitude() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match evaluer(&expr, ModeAngle::Degres) {
            Ok(v) => {
                assert!(v.is_finite(), "valeur non finie acceptée: expr={expr:?}");
                seen_ok += 1;
            }
            Err(_) => {
                // toute erreur de la taxonomie est acceptable en fuzz
                // (division par zéro, hors domaine, débordement…)
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme_bit_a_bit() {
    let max = Duration::from_millis(300);
    let t0 = Instant::now();

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);

        let a = evaluer(&expr, ModeAngle::Degres);
        let b = evaluer(&expr, ModeAngle::Degres);

        match (a, b) {
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={expr:?}"),
            (Err(e1), Err(e2)) => assert_eq!(e1, e2, "expr={expr:?}"),
            (x, y) => panic!("non déterministe: expr={expr:?} a={x:?} b={y:?}"),
        }
    }
}

#[test]
fn fuzz_safe_saisies_cassees() {
    // entrées volontairement invalides : jamais de panique, toujours une
    // erreur typée
    let cas = [
        "", "   ", "(", ")", "()", "((", "))", "+", "-", "*", "/", "%", "^", "1+", "+1*",
        "..", "1..2", "sin", "sin(", "sin)", "sin()", "sin(1", "foo(1)", "1)(2", "2**3",
        "1 2", "π",
    ];

    for s in cas {
        let r = evaluer(s, ModeAngle::Degres);
        assert!(r.is_err(), "entrée cassée acceptée: {s:?} -> {r:?}");
    }
}

#[test]
fn fuzz_safe_modes_coherents() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFEED_u64);

    // une expression sans trig donne le même résultat dans les deux modes
    for _ in 0..60 {
        budget(t0, max);

        let expr = format!(
            "({}{}{})",
            gen_nombre(&mut rng),
            gen_op(&mut rng),
            gen_nombre(&mut rng)
        );

        let deg = evaluer(&expr, ModeAngle::Degres);
        let rad = evaluer(&expr, ModeAngle::Radians);
        assert_eq!(deg, rad, "expr={expr:?}");
    }
}
