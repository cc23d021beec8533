// src/noyau/registre.rs
//
// Registre symbole -> Op (construit une fois, jamais modifié ensuite).
//
// Ordre des opérandes (load-bearing) :
// - p1 = 1er dépilé (le plus récent), p2 = 2e dépilé
// - "a b -" doit donner a - b  => f(p1, p2) = p2 - p1
// - "a b ÷" doit donner a / b  => f(p1, p2) = p2 / p1

use std::collections::HashMap;
use std::f64::consts::PI;

use super::op::Op;

pub type Registre = HashMap<&'static str, Op>;

/// Entrées du registre, dans l’ordre d’affichage (pavé d’opérateurs).
/// Seule liste des symboles connus : le registre et le pavé en dérivent.
pub static OPERATIONS: [(&str, Op); 8] = [
    binaire("x", fois),
    binaire("÷", divise),
    binaire("+", plus),
    binaire("-", moins),
    unaire("√", f64::sqrt),
    unaire("sin", f64::sin),
    unaire("cos", f64::cos),
    constante("π", PI),
];

const fn binaire(s: &'static str, f: fn(f64, f64) -> f64) -> (&'static str, Op) {
    (s, Op::Binaire(s, f))
}

const fn unaire(s: &'static str, f: fn(f64) -> f64) -> (&'static str, Op) {
    (s, Op::Unaire(s, f))
}

const fn constante(s: &'static str, v: f64) -> (&'static str, Op) {
    (s, Op::Constante(s, v))
}

fn fois(p1: f64, p2: f64) -> f64 {
    p1 * p2
}

fn divise(p1: f64, p2: f64) -> f64 {
    p2 / p1
}

fn plus(p1: f64, p2: f64) -> f64 {
    p1 + p2
}

fn moins(p1: f64, p2: f64) -> f64 {
    p2 - p1
}

/// Symboles connus, dans l’ordre d’affichage.
pub fn symboles() -> impl Iterator<Item = &'static str> {
    OPERATIONS.iter().map(|(s, _)| *s)
}

pub fn construire_registre() -> Registre {
    OPERATIONS
        .iter()
        .map(|(s, op)| (*s, op.clone()))
        .collect()
}
