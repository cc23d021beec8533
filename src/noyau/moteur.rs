//! Moteur NPI : registre + pile + variables.
//!
//! Une instance = une session de calculatrice (pas de global).
//! Chaque mutation renvoie l’évaluation de la pile entière, pour un retour
//! immédiat à l’affichage. `None` n’est pas une erreur : c’est “pas encore
//! de valeur”.

use std::collections::HashMap;

use log::{debug, trace};

use super::eval::evaluer;
use super::format::{description_complete, historique};
use super::jetons::{depuis_programme, vers_programme};
use super::op::Op;
use super::registre::{construire_registre, Registre};

#[derive(Clone, Debug)]
pub struct Moteur {
    registre: Registre,
    pile: Vec<Op>,

    /// Liaisons nom -> valeur. Absence = variable non liée (≠ zéro).
    /// Modifiées directement par l’appelant (insert / remove).
    pub variables: HashMap<String, f64>,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::new()
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self {
            registre: construire_registre(),
            pile: Vec::new(),
            variables: HashMap::new(),
        }
    }

    /// Vue lecture seule de la pile (plus ancien d’abord).
    pub fn pile(&self) -> &[Op] {
        &self.pile
    }

    /// Vrai si `symbole` est une clé du registre.
    pub fn est_operation(&self, symbole: &str) -> bool {
        self.registre.contains_key(symbole)
    }

    pub fn push_operand(&mut self, valeur: f64) -> Option<f64> {
        self.pile.push(Op::Operande(valeur));
        self.evaluate_apres("operande")
    }

    pub fn push_variable(&mut self, nom: &str) -> Option<f64> {
        self.pile.push(Op::Variable(nom.to_string()));
        self.evaluate_apres("variable")
    }

    /// Symbole inconnu : pile inchangée, on réévalue quand même.
    pub fn perform_operation(&mut self, symbole: &str) -> Option<f64> {
        match self.registre.get(symbole) {
            Some(op) => self.pile.push(op.clone()),
            None => debug!("symbole inconnu ignoré: {symbole:?}"),
        }
        self.evaluate_apres(symbole)
    }

    /// Réévalue la pile courante sans la modifier.
    pub fn evaluate(&self) -> Option<f64> {
        evaluer(&self.pile, &self.variables).0
    }

    /// Vide la pile (variables conservées).
    pub fn reset(&mut self) {
        self.pile.clear();
    }

    /// Description infixe de toute la pile ("" si vide).
    pub fn description(&self) -> String {
        description_complete(&self.pile)
    }

    pub fn history(&self) -> String {
        historique(&self.pile)
    }

    /// Pile externalisée en jetons (voir jetons.rs).
    pub fn program(&self) -> Vec<String> {
        vers_programme(&self.pile)
    }

    /// Remplace la pile par le programme relu (jetons inconnus ignorés).
    pub fn load_program<S: AsRef<str>>(&mut self, programme: &[S]) {
        self.pile = depuis_programme(&self.registre, programme);
        debug!("programme chargé: {} élément(s)", self.pile.len());
    }

    fn evaluate_apres(&self, quoi: &str) -> Option<f64> {
        let resultat = self.evaluate();
        trace!(
            "push {quoi}: pile={} resultat={resultat:?}",
            self.pile.len()
        );
        resultat
    }
}
