// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (app.rs + etat.rs) pour natif + wasm
// - Affichage deux lignes : auxiliaire (expression figée / message d'erreur)
//   puis opérande courant, en rouge sur la sentinelle d'erreur
// - Tactile : gros boutons en trois blocs
//   (rangée mémoire, pavé scientifique, pavé numérique)

use eframe::egui;

use super::etat::Calculatrice;
use super::AppCalc;
use crate::noyau::Fonction;

const TAILLE_BOUTON: [f32; 2] = [58.0, 34.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);

                self.ui_rangee_memoire(ui);

                ui.add_space(4.0);
                ui.separator();
                ui.add_space(4.0);

                self.ui_pave_scientifique(ui);

                ui.add_space(4.0);
                ui.separator();
                ui.add_space(4.0);

                self.ui_pave_numerique(ui);
            });
    }

    /* ------------------------ Affichage ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    // ligne auxiliaire : expression figée ou message d'erreur
                    ui.monospace(self.calc.precedent.as_str());
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    let texte = egui::RichText::new(self.calc.operande.as_str())
                        .monospace()
                        .size(28.0);
                    if self.calc.en_erreur() {
                        ui.label(texte.color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(texte);
                    }
                });

                ui.horizontal(|ui| {
                    ui.small(self.calc.mode.libelle());
                    if self.calc.memoire != 0.0 {
                        ui.small("M");
                    }
                });
            });
    }

    /* ------------------------ Rangée mémoire ------------------------ */

    fn ui_rangee_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(ui, "MC", "Efface la mémoire", Calculatrice::memoire_effacer);
            self.bouton(ui, "MR", "Rappelle la mémoire", Calculatrice::memoire_rappeler);
            self.bouton(ui, "MS", "Mémorise l'opérande", Calculatrice::memoire_stocker);
            self.bouton(ui, "M+", "Ajoute à la mémoire", Calculatrice::memoire_ajouter);
            self.bouton(
                ui,
                "M-",
                "Soustrait de la mémoire",
                Calculatrice::memoire_soustraire,
            );
        });
    }

    /* ------------------------ Pavé scientifique ------------------------ */

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_fonction(ui, "sin", Fonction::Sin);
                self.bouton_fonction(ui, "cos", Fonction::Cos);
                self.bouton_fonction(ui, "tan", Fonction::Tan);
                let libelle = self.calc.mode.libelle();
                self.bouton(ui, libelle, "Bascule degrés/radians", Calculatrice::basculer_mode);
                ui.end_row();

                self.bouton_fonction(ui, "asin", Fonction::Asin);
                self.bouton_fonction(ui, "acos", Fonction::Acos);
                self.bouton_fonction(ui, "atan", Fonction::Atan);
                self.bouton_fonction(ui, "n!", Fonction::Factorielle);
                ui.end_row();

                self.bouton_fonction(ui, "log", Fonction::Log);
                self.bouton_fonction(ui, "ln", Fonction::Ln);
                self.bouton_fonction(ui, "exp", Fonction::Exp);
                self.bouton_fonction(ui, "x²", Fonction::Carre);
                ui.end_row();

                self.bouton_fonction(ui, "√x", Fonction::Sqrt);
                self.bouton_fonction(ui, "∛x", Fonction::Cbrt);
                self.bouton_fonction(ui, "1/x", Fonction::Inverse);
                self.bouton(ui, "±", "Change le signe", Calculatrice::basculer_signe);
                ui.end_row();
            });
    }

    /* ------------------------ Pavé numérique ------------------------ */

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Remise à zéro (Échap)", Calculatrice::tout_effacer);
                self.bouton(ui, "DEL", "Efface le dernier caractère", Calculatrice::effacer_dernier);
                self.bouton_operateur(ui, "(", '(');
                self.bouton_operateur(ui, ")", ')');
                self.bouton_operateur(ui, "%", '%');
                ui.end_row();

                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton_operateur(ui, "/", '/');
                self.bouton_operateur(ui, "^", '^');
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton_operateur(ui, "*", '*');
                ui.label("");
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton_operateur(ui, "-", '-');
                ui.label("");
                ui.end_row();

                self.bouton_chiffre(ui, '0');
                self.bouton_chiffre(ui, '.');
                self.bouton(ui, "=", "Évalue (Entrée)", Calculatrice::calculer);
                self.bouton_operateur(ui, "+", '+');
                ui.label("");
                ui.end_row();
            });
    }

    /* ------------------------ Helpers boutons ------------------------ */

    fn bouton(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        tip: &str,
        transition: fn(Calculatrice) -> Calculatrice,
    ) {
        let resp = ui
            .add_sized(TAILLE_BOUTON, egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.appliquer(transition);
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(c.to_string()));
        if resp.clicked() {
            self.appliquer(|e| e.saisir_chiffre(c));
        }
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, label: &str, op: char) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.appliquer(|e| e.choisir_operateur(op));
        }
    }

    fn bouton_fonction(&mut self, ui: &mut egui::Ui, label: &str, f: Fonction) {
        let resp = ui
            .add_sized(TAILLE_BOUTON, egui::Button::new(label))
            .on_hover_text(format!("{}(opérande courant)", f.nom()));
        if resp.clicked() {
            self.appliquer(|e| e.invoquer_fonction(f));
        }
    }
}
