//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - erreur.rs    : taxonomie d'erreurs (thiserror)
//! - jetons.rs    : tokenisation
//! - rpn.rs       : shunting-yard + construction Expr
//! - expr.rs      : AST + évaluation en une passe
//! - fonctions.rs : bibliothèque scientifique + mode d'angle
//! - format.rs    : affichage (seuil 12 caractères / exponentielle)
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::evaluer;
pub use fonctions::{Fonction, ModeAngle};
pub use format::formater_resultat;
