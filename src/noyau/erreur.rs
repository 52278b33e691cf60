// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du noyau.
// Toute erreur est terminale pour l'expression courante : pas de résultat
// partiel, l'UI affiche la sentinelle et repart sur une entrée fraîche.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    /// Résidu non numérique, caractère inattendu, entrée vide.
    #[error("expression invalide : {0}")]
    ExpressionInvalide(String),

    /// Parenthèses non appariées, opérateur sans opérande, appel de fonction
    /// sans argument. Politique stricte : refus explicite, pas d'évaluation
    /// best-effort d'une entrée dégradée.
    #[error("expression mal formée : {0}")]
    MalFormee(String),

    /// Division par zéro (opérateur `/` ou fonction inverse).
    #[error("division par zéro")]
    DivisionParZero,

    /// Argument hors du domaine de la fonction (asin(2), sqrt(-1), log(0),
    /// factorielle non entière ou négative…).
    #[error("hors domaine : {0}")]
    HorsDomaine(String),

    /// Faute numérique générique : résultat non fini (NaN, ±inf).
    #[error("erreur de calcul (résultat non fini)")]
    Calcul,
}
