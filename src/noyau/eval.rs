// src/noyau/eval.rs
//
// Noyau — évaluation (pipeline complet)
// -------------------------------------
// tokenize -> RPN -> Expr -> évaluation de l'arbre -> contrôle de finitude
//
// Tout passe par l'AST (pas de réécriture textuelle), ce qui rend les appels
// imbriqués et le moins unaire non ambigus. Tiers de précédence : ^ puis */%
// puis +-, réduits de gauche à droite.

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::fonctions::ModeAngle;
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};

/// API publique : évalue une expression texte et retourne sa valeur.
///
/// Le mode d'angle ne sert qu'aux fonctions trig rencontrées dans le texte.
pub fn evaluer(expr_str: &str, mode: ModeAngle) -> Result<f64, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::ExpressionInvalide("entrée vide".into()));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN (shunting-yard, moins unaire résolu ici)
    let rpn = to_rpn(&jetons)?;

    // 3) AST
    let expr: Expr = from_rpn(&rpn)?;

    // 4) Évaluation
    let v = expr.evaluer(mode)?;

    // 5) Contrôle final : NaN (ex: 5 % 0) et ±inf (débordement de ^ ou de
    //    la factorielle) deviennent une faute de calcul générique.
    if !v.is_finite() {
        return Err(ErreurEval::Calcul);
    }

    Ok(v)
}
