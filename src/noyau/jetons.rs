// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Noms de fonctions (sin, cos, log, …) ; rpn.rs vérifie qu'ils sont connus.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent, // reste flottant
    Caret,   // ^

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5) — au plus un point par nombre
/// - exposant optionnel (ex: 3.333333e-1, 1.234568e15) — c'est la forme
///   que produit format.rs, un résultat réinjecté doit donc se relire
/// - opérateurs + - * / % ^
/// - parenthèses ( )
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
///
/// Les espaces sont ignorés sans condition (l'UI en insère librement).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word.to_lowercase()));
            continue;
        }

        // Nombre décimal : chiffres + points, la validation finale est
        // déléguée à parse::<f64>() (refuse "1.2.3", "." isolé, etc.)
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            // Exposant : e/E, signe optionnel, puis au moins un chiffre.
            // Sans chiffre derrière, le 'e' n'est PAS consommé ("2e" reste
            // Num(2) suivi de Ident("e")).
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    i = j;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
            }
            let lit: String = chars[start..i].iter().collect();
            let n: f64 = lit
                .parse()
                .map_err(|_| ErreurEval::ExpressionInvalide(format!("nombre invalide: {lit:?}")))?;
            out.push(Tok::Num(n));
            continue;
        }

        return Err(ErreurEval::ExpressionInvalide(format!(
            "caractère inattendu: '{c}'"
        )));
    }

    Ok(out)
}
