// src/noyau/jetons.rs
//
// Programme = pile externalisée en jetons texte (du plus ancien au plus récent).
//
// Règles:
// - Constante / opérateur / variable : symbole tel quel
// - Operande : Display de f64 (forme la plus courte qui relit la même valeur)
// - Relecture : registre d’abord, puis nombre ; le reste est ignoré (politique souple)
//
// NOTE: une variable n’est pas un symbole du registre ni un nombre,
// elle est donc ignorée à la relecture.

use log::debug;

use super::op::Op;
use super::registre::Registre;

/// Pile -> jetons.
pub fn vers_programme(pile: &[Op]) -> Vec<String> {
    pile.iter()
        .map(|op| match op {
            Op::Operande(v) => v.to_string(),
            Op::Constante(s, _) | Op::Unaire(s, _) | Op::Binaire(s, _) => s.to_string(),
            Op::Variable(nom) => nom.clone(),
        })
        .collect()
}

/// Jetons -> pile. Jetons non reconnus : ignorés.
pub fn depuis_programme<S: AsRef<str>>(registre: &Registre, programme: &[S]) -> Vec<Op> {
    let mut pile = Vec::with_capacity(programme.len());

    for jeton in programme {
        let jeton = jeton.as_ref().trim();

        if let Some(op) = registre.get(jeton) {
            pile.push(op.clone());
        } else if let Ok(v) = jeton.parse::<f64>() {
            pile.push(Op::Operande(v));
        } else {
            debug!("jeton de programme ignoré: {jeton:?}");
        }
    }

    pile
}

/// Format utilitaire (affichage) : programme en une ligne.
pub fn format_programme(programme: &[String]) -> String {
    programme.join(" ")
}
