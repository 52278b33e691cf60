//! src/app/etat.rs
//!
//! État calculatrice (sans vue).
//!
//! Rôle : porter l'état complet (opérande en cours, expression accumulée,
//! fonction en attente, mode d'angle, mémoire) et les transitions de la
//! calculatrice. Aucune dépendance d'affichage : le noyau rend une valeur ou
//! une erreur, la vue ne fait que montrer les champs.
//!
//! Contrats :
//! - Transitions par VALEUR (`self -> Self`) : pas de mutation cachée,
//!   chaque action rend l'état suivant, testable sans UI.
//! - L'opérande contient au plus un point décimal et vaut "0" par défaut.
//! - Toute erreur est terminale : opérande = sentinelle, message conservé
//!   dans la ligne auxiliaire, la prochaine saisie repart à neuf.
//! - Après un calcul réussi, le résultat devient la graine de l'expression
//!   suivante (enchaînement).

use crate::noyau::{evaluer, formater_resultat, ErreurEval, Fonction, ModeAngle};

/// Valeur affichée à la place de l'opérande quand l'évaluation échoue.
pub const SENTINELLE_ERREUR: &str = "Erreur";

/// Fonction scientifique invoquée sur l'opérande courant, pas encore résolue.
#[derive(Clone, Debug, PartialEq)]
pub struct FonctionEnAttente {
    pub fonction: Fonction,
    pub operande: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Calculatrice {
    // --- saisie ---
    pub operande: String,   // nombre en cours de frappe
    pub expression: String, // expression complète accumulée
    pub precedent: String,  // ligne auxiliaire (expression figée, message d'erreur)

    // --- fonction en attente ---
    pub fonction_en_attente: Option<FonctionEnAttente>,

    // après un "=" (ou une erreur), la prochaine saisie repart à neuf
    doit_reinitialiser: bool,

    // --- réglages ---
    pub mode: ModeAngle,

    // --- mémoire (indépendante de l'expression) ---
    pub memoire: f64,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            operande: "0".to_string(),
            expression: String::new(),
            precedent: String::new(),
            fonction_en_attente: None,
            doit_reinitialiser: false,
            mode: ModeAngle::default(),
            memoire: 0.0,
        }
    }
}

impl Calculatrice {
    pub fn en_erreur(&self) -> bool {
        self.operande == SENTINELLE_ERREUR
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un chiffre ou le point décimal à l'opérande courant.
    /// Ignore tout autre caractère, ainsi qu'un second point décimal.
    pub fn saisir_chiffre(mut self, c: char) -> Self {
        if !c.is_ascii_digit() && c != '.' {
            return self;
        }

        if self.doit_reinitialiser {
            self.operande = "0".to_string();
            self.expression.clear();
            self.fonction_en_attente = None;
            self.doit_reinitialiser = false;
        }

        if c == '.' && self.operande.contains('.') {
            return self;
        }

        if self.operande == "0" {
            self.operande = if c == '.' {
                "0.".to_string()
            } else {
                c.to_string()
            };
        } else {
            self.operande.push(c);
        }

        self.expression.push(c);
        self
    }

    /// Engage un opérateur binaire (ou une parenthèse tapée au clavier) dans
    /// l'expression et ouvre un nouveau segment d'opérande.
    pub fn choisir_operateur(mut self, op: char) -> Self {
        if self.en_erreur() {
            return self;
        }

        // un opérateur après "=" enchaîne sur le résultat (pas de reset)
        self.doit_reinitialiser = false;

        self.expression.push(op);
        self.precedent = self.expression.clone();
        self.operande = "0".to_string();
        self
    }

    /// Enveloppe l'opérande courant dans `f(...)` : mode fonction en attente.
    /// Sans opérande utile ("" ou "0"), ne fait rien.
    pub fn invoquer_fonction(mut self, f: Fonction) -> Self {
        if self.operande.is_empty() || self.operande == "0" || self.en_erreur() {
            return self;
        }

        let texte = format!("{}({})", f.nom(), self.operande);

        self.fonction_en_attente = Some(FonctionEnAttente {
            fonction: f,
            operande: std::mem::take(&mut self.operande),
        });

        // l'expression est remplacée par le rendu de l'appel
        self.precedent = texte.clone();
        self.expression = texte;
        self
    }

    /* ------------------------ Calcul ------------------------ */

    /// "=" : résout la fonction en attente s'il y en a une, sinon évalue
    /// l'expression complète via le noyau.
    pub fn calculer(mut self) -> Self {
        if let Some(attente) = self.fonction_en_attente.take() {
            return match resoudre_fonction(&attente, self.mode) {
                Ok(v) => self.deposer_resultat(v, String::new()),
                Err(e) => self.mettre_erreur(e),
            };
        }

        if self.expression.is_empty() || self.en_erreur() {
            return self;
        }

        match evaluer(&self.expression, self.mode) {
            Ok(v) => {
                let aux = format!("{} =", self.expression);
                self.deposer_resultat(v, aux)
            }
            Err(e) => self.mettre_erreur(e),
        }
    }

    /// Dépose un résultat : l'affichage formaté devient aussi la graine de
    /// l'expression suivante (enchaînement).
    fn deposer_resultat(mut self, v: f64, auxiliaire: String) -> Self {
        self.operande = formater_resultat(v);
        self.expression = self.operande.clone();
        self.precedent = auxiliaire;
        self.doit_reinitialiser = true;
        self
    }

    /// Erreur terminale : sentinelle + message en ligne auxiliaire.
    fn mettre_erreur(mut self, e: ErreurEval) -> Self {
        self.operande = SENTINELLE_ERREUR.to_string();
        self.precedent = e.to_string();
        self.expression.clear();
        self.fonction_en_attente = None;
        self.doit_reinitialiser = true;
        self
    }

    /* ------------------------ Édition ------------------------ */

    /// AC : remise à zéro de la saisie (mémoire et mode d'angle conservés).
    pub fn tout_effacer(mut self) -> Self {
        self.operande = "0".to_string();
        self.expression.clear();
        self.precedent.clear();
        self.fonction_en_attente = None;
        self.doit_reinitialiser = false;
        self
    }

    /// DEL : retire le dernier caractère. Sans effet sur "0" et sur la
    /// sentinelle d'erreur.
    pub fn effacer_dernier(mut self) -> Self {
        if self.operande == "0" || self.en_erreur() {
            return self;
        }

        if self.operande.chars().count() == 1 {
            self.operande = "0".to_string();
        } else {
            self.operande.pop();
        }

        self.expression.pop();
        self
    }

    /// ± : bascule le signe de l'opérande courant ("0" reste "0").
    pub fn basculer_signe(mut self) -> Self {
        if self.operande == "0" || self.en_erreur() {
            return self;
        }

        self.operande = match self.operande.strip_prefix('-') {
            Some(reste) => reste.to_string(),
            None => format!("-{}", self.operande),
        };
        self
    }

    /* ------------------------ Réglages ------------------------ */

    pub fn definir_mode(mut self, mode: ModeAngle) -> Self {
        self.mode = mode;
        self
    }

    pub fn basculer_mode(self) -> Self {
        let mode = self.mode.basculer();
        self.definir_mode(mode)
    }

    /* ------------------------ Mémoire ------------------------ */

    /// Valeur numérique de l'opérande courant (0 si non numérique,
    /// sentinelle d'erreur comprise).
    fn operande_numerique(&self) -> f64 {
        self.operande.parse().unwrap_or(0.0)
    }

    /// MS
    pub fn memoire_stocker(mut self) -> Self {
        self.memoire = self.operande_numerique();
        self
    }

    /// MR : la valeur mémorisée remplace l'opérande ET l'expression
    /// (les deux doivent rester synchrones).
    pub fn memoire_rappeler(mut self) -> Self {
        let s = formater_resultat(self.memoire);
        self.operande = s.clone();
        self.expression = s;
        self.doit_reinitialiser = false;
        self
    }

    /// MC
    pub fn memoire_effacer(mut self) -> Self {
        self.memoire = 0.0;
        self
    }

    /// M+
    pub fn memoire_ajouter(mut self) -> Self {
        self.memoire += self.operande_numerique();
        self
    }

    /// M-
    pub fn memoire_soustraire(mut self) -> Self {
        self.memoire -= self.operande_numerique();
        self
    }
}

/// Résout `f(operande)` : parse l'opérande, applique la fonction, contrôle
/// la finitude (même règle que le pipeline du noyau).
fn resoudre_fonction(attente: &FonctionEnAttente, mode: ModeAngle) -> Result<f64, ErreurEval> {
    let x: f64 = attente.operande.parse().map_err(|_| {
        ErreurEval::ExpressionInvalide(format!("opérande invalide: {:?}", attente.operande))
    })?;

    let v = attente.fonction.appliquer(x, mode)?;
    if !v.is_finite() {
        return Err(ErreurEval::Calcul);
    }
    Ok(v)
}
