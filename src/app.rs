// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Porter l'état `Calculatrice` et le fil des transitions par valeur
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - L'état est pur (etat.rs) : chaque action rend un nouvel état.
//   `appliquer` fait le raccord avec le monde &mut de egui.
// - Le clavier est global (pas de champ texte) : chiffres/opérateurs via les
//   événements texte, Enter évalue, Backspace efface, Escape remet à zéro.

pub mod etat;
pub mod vue;

use eframe::egui;

use etat::Calculatrice;

#[derive(Default)]
pub struct AppCalc {
    pub calc: Calculatrice,
}

impl AppCalc {
    /// Applique une transition par valeur à l'état courant.
    pub fn appliquer(&mut self, transition: impl FnOnce(Calculatrice) -> Calculatrice) {
        self.calc = transition(std::mem::take(&mut self.calc));
    }

    fn clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());

        for ev in evenements {
            if let egui::Event::Text(texte) = ev {
                for c in texte.chars() {
                    match c {
                        '0'..='9' | '.' => self.appliquer(|e| e.saisir_chiffre(c)),
                        '+' | '-' | '*' | '/' | '%' | '^' | '(' | ')' => {
                            self.appliquer(|e| e.choisir_operateur(c))
                        }
                        '=' => self.appliquer(|e| e.calculer()),
                        _ => {}
                    }
                }
            }
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.appliquer(|e| e.calculer());
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Backspace)) {
            self.appliquer(|e| e.effacer_dernier());
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.appliquer(|e| e.tout_effacer());
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
