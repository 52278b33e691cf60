// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name): doit être une fonction connue (sin/cos/…), traitée comme un
//   opérateur “collé” à son argument, sortie après la parenthèse fermante.
// - Moins unaire: si '-' arrive quand on n'attend PAS une valeur, on
//   injecte 0 : "-x" => "0 x -". Donc "-5^2" vaut -(5^2) = -25.
// - `^` est associatif à GAUCHE : 2^3^2 = (2^3)^2 = 64, comme les autres
//   tiers. Convention assumée et testée (la droite-associativité est l'autre
//   convention courante).
// - Parenthèses non appariées => MalFormee (politique stricte).

use super::erreur::ErreurEval;
use super::expr::{Expr, OpBin};
use super::fonctions::Fonction;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Caret => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(90), RPar]
///   rpn:    [Num(90), Ident("sin")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if Fonction::depuis_nom(&name).is_none() {
                    return Err(ErreurEval::ExpressionInvalide(format!(
                        "fonction inconnue: {name:?}"
                    )));
                }
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(Tok::Ident(name));
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante_vue = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_vue = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_vue {
                    return Err(ErreurEval::MalFormee("parenthèse fermante en trop".into()));
                }

                // si une fonction est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Tok::Ident(_))) {
                    out.push(ops.pop().unwrap());
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                depiler_selon_precedence(&mut out, &mut ops, &tok);
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Minus => {
                if prev_was_value {
                    // soustraction binaire ordinaire
                    depiler_selon_precedence(&mut out, &mut ops, &Tok::Minus);
                } else {
                    // moins unaire : injecte 0 ("-x" => "0 x -") sans dépiler,
                    // sinon "2*-3" sortirait le '*' trop tôt
                    out.push(Tok::Num(0.0));
                }
                ops.push(Tok::Minus);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::MalFormee("parenthèses non fermées".into()));
        }
        out.push(op);
    }

    Ok(out)
}

/// Dépile tant que:
/// - on n'est pas bloqué par '('
/// - on ne traverse pas une fonction (elle reste collée à son argument)
/// - la précédence exige de sortir l'opérateur du haut
///   (tous les opérateurs sont associatifs à gauche : >=)
fn depiler_selon_precedence(out: &mut Vec<Tok>, ops: &mut Vec<Tok>, tok: &Tok) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar | Tok::Ident(_)) {
            break;
        }
        if precedence(top) >= precedence(tok) {
            out.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
}

/// Construit une Expr à partir d'une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.push(Expr::Nombre(v)),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                let b = st
                    .pop()
                    .ok_or_else(|| ErreurEval::MalFormee("opérateur sans opérande".into()))?;
                let a = st
                    .pop()
                    .ok_or_else(|| ErreurEval::MalFormee("opérateur sans opérande".into()))?;

                let op = match tok {
                    Tok::Plus => OpBin::Add,
                    Tok::Minus => OpBin::Sub,
                    Tok::Star => OpBin::Mul,
                    Tok::Slash => OpBin::Div,
                    Tok::Percent => OpBin::Mod,
                    Tok::Caret => OpBin::Pow,
                    _ => unreachable!(),
                };
                st.push(Expr::Binaire(op, Box::new(a), Box::new(b)));
            }

            Tok::Ident(name) => {
                // to_rpn a déjà validé le nom
                let f = Fonction::depuis_nom(&name).ok_or_else(|| {
                    ErreurEval::ExpressionInvalide(format!("fonction inconnue: {name:?}"))
                })?;
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurEval::MalFormee("fonction sans argument".into()))?;
                st.push(Expr::Appel(f, Box::new(x)));
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::MalFormee("parenthèse inattendue en RPN".into()))
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::MalFormee("expression incomplète".into()));
    }
    Ok(st.pop().unwrap())
}
