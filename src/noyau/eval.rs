//! Noyau — évaluation de la pile NPI
//!
//! On consomme la pile par la fin (le plus récent d’abord), sur une tranche
//! empruntée : la pile stockée n’est jamais modifiée.
//!
//! Échec (None) = expression insuffisamment spécifiée :
//! pile vide, opérandes manquants, variable non liée.
//! L’échec se propage sans consommer davantage.
//!
//! Parcours sur une pile de cadres explicite (pas de récursion) :
//! la profondeur d’une chaîne d’opérateurs n’est bornée que par la mémoire.

use std::collections::HashMap;

use super::op::Op;

/// Opérateur en attente de son (ses) opérande(s).
/// La tranche mémorisée est le reste sous l’opérateur (rendu en cas d’échec).
enum Cadre<'a> {
    Unaire(fn(f64) -> f64, &'a [Op]),
    /// 1er dépilé en cours d’évaluation
    Premier(fn(f64, f64) -> f64, &'a [Op]),
    /// 2e dépilé en cours, 1er connu
    Second(fn(f64, f64) -> f64, &'a [Op], f64),
}

/// Évalue la pile à partir de la fin.
/// Retourne (résultat, reste non consommé).
pub fn evaluer<'a>(pile: &'a [Op], variables: &HashMap<String, f64>) -> (Option<f64>, &'a [Op]) {
    let mut cadres: Vec<Cadre<'a>> = Vec::new();
    let mut curseur = pile;

    loop {
        // descente jusqu’à une feuille (ou une pile vide)
        let mut retour = match curseur.split_last() {
            None => (None, curseur),
            Some((op, reste)) => match op {
                Op::Operande(v) | Op::Constante(_, v) => (Some(*v), reste),

                Op::Variable(nom) => (variables.get(nom).copied(), reste),

                Op::Unaire(_, f) => {
                    cadres.push(Cadre::Unaire(*f, reste));
                    curseur = reste;
                    continue;
                }

                Op::Binaire(_, f) => {
                    cadres.push(Cadre::Premier(*f, reste));
                    curseur = reste;
                    continue;
                }
            },
        };

        // remontée, jusqu’à un 2e opérande à évaluer
        loop {
            let Some(cadre) = cadres.pop() else {
                return retour;
            };

            retour = match (cadre, retour) {
                (Cadre::Unaire(f, _), (Some(v1), reste1)) => (Some(f(v1)), reste1),
                (Cadre::Unaire(_, reste), (None, _)) => (None, reste),

                (Cadre::Premier(f, reste), (Some(v1), reste1)) => {
                    cadres.push(Cadre::Second(f, reste, v1));
                    curseur = reste1;
                    break;
                }
                (Cadre::Premier(_, reste), (None, _)) => (None, reste),

                (Cadre::Second(f, _, v1), (Some(v2), reste2)) => (Some(f(v1, v2)), reste2),
                (Cadre::Second(_, reste, _), (None, _)) => (None, reste),
            };
        }
    }
}
