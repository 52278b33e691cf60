// src/noyau/format.rs
//
// Affichage des résultats (f64 -> String)
// ---------------------------------------
// Règle : représentation décimale ordinaire tant qu'elle tient en
// 12 caractères, sinon notation exponentielle à 6 chiffres après la
// virgule. Appliquée uniformément aux résultats arithmétiques et aux
// résultats de fonctions.

/// Longueur maximale de la forme décimale pleine.
const LONGUEUR_MAX: usize = 12;

/// Chiffres fractionnaires de la forme exponentielle.
const CHIFFRES_EXP: usize = 6;

pub fn formater_resultat(x: f64) -> String {
    let plein = format!("{x}");
    if plein.len() > LONGUEUR_MAX {
        format!("{x:.p$e}", p = CHIFFRES_EXP)
    } else {
        plein
    }
}
