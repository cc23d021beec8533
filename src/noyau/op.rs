// src/noyau/op.rs
//
// Élément de pile (NPI)
// Un Op est figé à la construction : on ne change jamais sa variante.
// Les fonctions portées par Unaire/Binaire sont pures.

use std::fmt;

#[derive(Clone, Debug)]
pub enum Op {
    /// Opérande littéral.
    Operande(f64),

    /// Constante nommée (π) avec sa valeur fixe.
    Constante(&'static str, f64),

    /// Opérateur à un argument.
    Unaire(&'static str, fn(f64) -> f64),

    /// Opérateur à deux arguments : f(1er dépilé, 2e dépilé).
    Binaire(&'static str, fn(f64, f64) -> f64),

    /// Référence de variable : résolue à l’évaluation, pas au push.
    Variable(String),
}

/// Format “2 décimales” (description + historique).
pub fn format_operande(v: f64) -> String {
    format!("{v:.2}")
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Operande(v) => f.write_str(&format_operande(*v)),
            Op::Constante(s, _) | Op::Unaire(s, _) | Op::Binaire(s, _) => f.write_str(s),
            Op::Variable(nom) => f.write_str(nom),
        }
    }
}
