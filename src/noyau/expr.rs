// src/noyau/expr.rs
//
// AST numérique (f64) + évaluation en une passe
// ---------------------------------------------
// Les appels imbriqués (sin(cos(30))) et le moins unaire sont résolus au
// parsing : plus aucune ambiguïté à l'évaluation.

use super::erreur::ErreurEval;
use super::fonctions::{Fonction, ModeAngle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBin {
    Add,
    Sub,
    Mul,
    Div,
    Mod, // reste flottant
    Pow,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Binaire(OpBin, Box<Expr>, Box<Expr>),
    Appel(Fonction, Box<Expr>),
}

impl Expr {
    /// Évalue l'arbre. Le mode d'angle est transmis aux appels trig.
    ///
    /// Seules les fautes *détectables localement* sortent ici (division par
    /// zéro, domaines de fonctions) ; un NaN/inf silencieux (ex: `5 % 0`,
    /// débordement de `^`) est attrapé par le contrôle final du pipeline.
    pub fn evaluer(&self, mode: ModeAngle) -> Result<f64, ErreurEval> {
        match self {
            Expr::Nombre(v) => Ok(*v),

            Expr::Binaire(op, a, b) => {
                let x = a.evaluer(mode)?;
                let y = b.evaluer(mode)?;
                match op {
                    OpBin::Add => Ok(x + y),
                    OpBin::Sub => Ok(x - y),
                    OpBin::Mul => Ok(x * y),
                    OpBin::Div => {
                        if y == 0.0 {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        Ok(x / y)
                    }
                    OpBin::Mod => Ok(x % y),
                    OpBin::Pow => Ok(x.powf(y)),
                }
            }

            Expr::Appel(f, arg) => {
                let x = arg.evaluer(mode)?;
                f.appliquer(x, mode)
            }
        }
    }
}
