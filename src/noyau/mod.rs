//! Noyau NPI (notation polonaise inverse)
//!
//! Organisation interne :
//! - op.rs       : élément de pile (opérande, constante, opérateurs, variable)
//! - registre.rs : symboles connus (x ÷ + - √ sin cos π)
//! - eval.rs     : évaluation depuis la fin de la pile (pile de cadres)
//! - format.rs   : description infixe (miroir de eval) + historique plat
//! - jetons.rs   : programme (pile <-> jetons texte)
//! - moteur.rs   : état (pile + variables) et opérations publiques

pub mod eval;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod op;
pub mod registre;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use jetons::format_programme;
pub use moteur::Moteur;
pub use registre::symboles;
