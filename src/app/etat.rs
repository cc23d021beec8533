//! src/app/etat.rs
//!
//! État UI + transmission au noyau.
//!
//! Rôle : contenir l’entrée texte, le dernier résultat et le moteur NPI ;
//! relayer chaque jeton saisi vers le moteur, sans logique d’affichage.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par noyau::Moteur.
//! - Résultat absent (None) = “pas encore de valeur”, affiché vide, pas une erreur.
//! - Erreur UI = seulement un jeton que l’on ne sait pas transmettre.

use log::{debug, info};

use crate::noyau::Moteur;

/// Nom de la variable “mémoire” (boutons →M / M / M∅).
pub const VARIABLE_MEMOIRE: &str = "M";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- noyau ---
    pub moteur: Moteur,

    // --- sorties ---
    pub resultat: Option<f64>, // dernière évaluation renvoyée par le moteur
    pub erreur: String,        // jeton non transmis (si saisie invalide)

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            moteur: Moteur::new(),
            resultat: None,
            erreur: String::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

/// Identifiant de variable : [a-zA-Z_][a-zA-Z0-9_]*
fn est_identifiant(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// C : vide la pile + l’entrée (variables conservées).
    pub fn reset_total(&mut self) {
        self.moteur.reset();
        self.entree.clear();
        self.resultat = None;
        self.erreur.clear();
        self.focus_entree = true;
        info!("pile remise à zéro");
    }

    /// Esc : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Bouton opérateur : transmis tel quel au moteur.
    pub fn operation(&mut self, symbole: &str) {
        self.erreur.clear();
        self.resultat = self.moteur.perform_operation(symbole);
        self.focus_entree = true;
    }

    /// ⏎ : chaque jeton de l’entrée (séparés par des espaces) part au moteur.
    /// Arrêt au premier jeton non transmissible (les précédents restent empilés).
    pub fn valider_entree(&mut self) {
        self.erreur.clear();

        let entree = std::mem::take(&mut self.entree);
        for jeton in entree.split_whitespace() {
            match self.saisir_jeton(jeton) {
                Ok(r) => self.resultat = r,
                Err(msg) => {
                    self.set_erreur(msg);
                    break;
                }
            }
        }

        self.focus_entree = true;
    }

    /// Registre -> opération ; identifiant -> variable ; sinon nombre.
    fn saisir_jeton(&mut self, jeton: &str) -> Result<Option<f64>, String> {
        if self.moteur.est_operation(jeton) {
            return Ok(self.moteur.perform_operation(jeton));
        }
        if est_identifiant(jeton) {
            return Ok(self.moteur.push_variable(jeton));
        }
        let v = jeton
            .parse::<f64>()
            .map_err(|_| format!("jeton non reconnu: '{jeton}'"))?;
        Ok(self.moteur.push_operand(v))
    }

    /// Charger : l’entrée est relue comme un programme (remplace la pile).
    pub fn charger_programme(&mut self) {
        let jetons: Vec<&str> = self.entree.split_whitespace().collect();
        self.moteur.load_program(&jetons);
        self.resultat = self.moteur.evaluate();
        self.erreur.clear();
        self.entree.clear();
        self.focus_entree = true;
        info!("programme chargé depuis l’entrée");
    }

    /// →M : lie M au résultat courant (rien à lier si absent).
    pub fn memoriser(&mut self) {
        match self.resultat {
            Some(v) => {
                self.moteur
                    .variables
                    .insert(VARIABLE_MEMOIRE.to_string(), v);
                self.resultat = self.moteur.evaluate();
                debug!("{VARIABLE_MEMOIRE} = {v}");
            }
            None => self.set_erreur("aucun résultat à mémoriser"),
        }
        self.focus_entree = true;
    }

    /// M∅ : délie M.
    pub fn oublier_memoire(&mut self) {
        self.moteur.variables.remove(VARIABLE_MEMOIRE);
        self.resultat = self.moteur.evaluate();
        self.focus_entree = true;
    }

    /// M : empile la référence (résolue à l’évaluation).
    pub fn empiler_memoire(&mut self) {
        self.erreur.clear();
        self.resultat = self.moteur.push_variable(VARIABLE_MEMOIRE);
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur (le résultat affiché est conservé).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        debug!("saisie refusée: {}", self.erreur);
        self.focus_entree = true;
    }
}
