// src/noyau/fonctions.rs
//
// Bibliothèque de fonctions scientifiques (unaire, f64)
// -----------------------------------------------------
// - Validation de domaine par fonction (asin/acos, log/ln, sqrt, factorielle)
// - Mode d'angle : conversion degrés<->radians pour la trig
// - Carre / Inverse / Factorielle : boutons dédiés, mais le parseur les
//   accepte aussi par leur nom (square, reciprocal, factorial)

use super::erreur::ErreurEval;

/// Mode d'angle pour la trigonométrie. Degrés par défaut.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    pub fn basculer(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    /// Libellé court pour le bouton DEG/RAD.
    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log, // base 10
    Ln,  // népérien
    Sqrt,
    Cbrt,
    Exp,
    Carre,
    Inverse,
    Factorielle,
}

impl Fonction {
    /// Nom tel qu'il apparaît dans une expression (`sin(...)`, `log(...)`).
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Sqrt => "sqrt",
            Fonction::Cbrt => "cbrt",
            Fonction::Exp => "exp",
            Fonction::Carre => "square",
            Fonction::Inverse => "reciprocal",
            Fonction::Factorielle => "factorial",
        }
    }

    /// Résolution inverse (identifiants normalisés en minuscules par jetons.rs).
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        Some(match nom {
            "sin" => Fonction::Sin,
            "cos" => Fonction::Cos,
            "tan" => Fonction::Tan,
            "asin" => Fonction::Asin,
            "acos" => Fonction::Acos,
            "atan" => Fonction::Atan,
            "log" => Fonction::Log,
            "ln" => Fonction::Ln,
            "sqrt" => Fonction::Sqrt,
            "cbrt" => Fonction::Cbrt,
            "exp" => Fonction::Exp,
            "square" => Fonction::Carre,
            "reciprocal" => Fonction::Inverse,
            "factorial" => Fonction::Factorielle,
            _ => return None,
        })
    }

    /// Applique la fonction à `x` en respectant le mode d'angle.
    pub fn appliquer(self, x: f64, mode: ModeAngle) -> Result<f64, ErreurEval> {
        // Argument trig : degrés -> radians si besoin
        let angle = |v: f64| match mode {
            ModeAngle::Degres => v.to_radians(),
            ModeAngle::Radians => v,
        };
        // Résultat trig inverse : radians -> degrés si besoin
        let retour = |v: f64| match mode {
            ModeAngle::Degres => v.to_degrees(),
            ModeAngle::Radians => v,
        };

        let v = match self {
            Fonction::Sin => angle(x).sin(),
            Fonction::Cos => angle(x).cos(),
            Fonction::Tan => angle(x).tan(),

            Fonction::Asin => {
                if !(-1.0..=1.0).contains(&x) {
                    return Err(ErreurEval::HorsDomaine(format!(
                        "asin attend un argument dans [-1, 1] (reçu {x})"
                    )));
                }
                retour(x.asin())
            }
            Fonction::Acos => {
                if !(-1.0..=1.0).contains(&x) {
                    return Err(ErreurEval::HorsDomaine(format!(
                        "acos attend un argument dans [-1, 1] (reçu {x})"
                    )));
                }
                retour(x.acos())
            }
            Fonction::Atan => retour(x.atan()),

            Fonction::Log => {
                if x <= 0.0 {
                    return Err(ErreurEval::HorsDomaine(format!(
                        "log attend un argument strictement positif (reçu {x})"
                    )));
                }
                x.log10()
            }
            Fonction::Ln => {
                if x <= 0.0 {
                    return Err(ErreurEval::HorsDomaine(format!(
                        "ln attend un argument strictement positif (reçu {x})"
                    )));
                }
                x.ln()
            }

            Fonction::Sqrt => {
                if x < 0.0 {
                    return Err(ErreurEval::HorsDomaine(format!(
                        "sqrt attend un argument positif ou nul (reçu {x})"
                    )));
                }
                x.sqrt()
            }
            Fonction::Cbrt => x.cbrt(), // racine cubique réelle, négatifs acceptés
            Fonction::Exp => x.exp(),

            Fonction::Carre => x * x,
            Fonction::Inverse => {
                if x == 0.0 {
                    return Err(ErreurEval::DivisionParZero);
                }
                1.0 / x
            }
            Fonction::Factorielle => {
                if x < 0.0 || x.fract() != 0.0 {
                    return Err(ErreurEval::HorsDomaine(format!(
                        "factorielle définie sur les entiers positifs ou nuls (reçu {x})"
                    )));
                }
                factorielle(x)
            }
        };

        Ok(v)
    }
}

/// Produit itératif 2..=n (1 pour n ∈ {0, 1}).
/// Au-delà de 170! le produit déborde en +inf ; le pipeline le convertit
/// en ErreurEval::Calcul au moment du contrôle final. On s'arrête dès la
/// saturation : `inf * k` resterait inf, et pour un n gigantesque (ex: 1e20,
/// entier-valué donc accepté par le contrôle de domaine) la boucle ne
/// terminerait sinon jamais en pratique.
fn factorielle(n: f64) -> f64 {
    let mut acc = 1.0_f64;
    let mut k = 2.0_f64;
    while k <= n {
        acc *= k;
        if !acc.is_finite() {
            break;
        }
        k += 1.0;
    }
    acc
}
