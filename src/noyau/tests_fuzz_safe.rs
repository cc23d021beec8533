//! Tests fuzz safe : piles aléatoires, invariants de structure.
//!
//! - RNG déterministe (seed fixe)
//! - piles de longueur bornée
//! - budget temps global
//! - invariant clé : eval et description parcourent la pile de la même façon

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::eval::evaluer;
use super::format::decrire;
use super::registre::OPERATIONS;
use super::Moteur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de piles (bornée) ------------------------ */

/// Remplit un moteur avec `n` saisies aléatoires.
/// `avec_variables` : autorise "M" (liée ou non selon l’appelant).
fn remplir(rng: &mut Rng, m: &mut Moteur, n: usize, avec_variables: bool) {
    let choix = if avec_variables { 4 } else { 3 };
    for _ in 0..n {
        match rng.pick(choix) {
            0 | 1 => {
                let v = rng.pick(200) as f64 / 8.0 - 10.0;
                m.push_operand(v);
            }
            2 => {
                let s = OPERATIONS[rng.pick(OPERATIONS.len() as u32) as usize].0;
                m.perform_operation(s);
            }
            _ => {
                m.push_variable("M");
            }
        }
    }
}

fn meme_valeur(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => x.to_bits() == y.to_bits(),
        _ => false,
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_eval_et_description_meme_structure() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_absent = 0usize;

    for i in 0..300 {
        budget(t0, max);

        let mut m = Moteur::new();
        if i % 2 == 0 {
            m.variables.insert("M".into(), 1.5);
        }
        remplir(&mut rng, &mut m, 1 + (i % 12), true);

        let vars: &HashMap<String, f64> = &m.variables;
        let (v, reste_eval) = evaluer(m.pile(), vars);
        let (d, reste_desc) = decrire(m.pile());

        // pile non vide => description toujours disponible
        let d = d.unwrap_or_else(|| panic!("description absente: {}", m.history()));

        match v {
            Some(_) => {
                assert_eq!(reste_eval.len(), reste_desc.len(), "pile={}", m.history());
                assert!(!d.contains('?'), "trou inattendu: {d} pile={}", m.history());
                seen_ok += 1;
            }
            None => {
                // échec => il manque un opérande ou M n’est pas liée
                let m_non_liee = !m.variables.contains_key("M") && d.contains('M');
                assert!(
                    d.contains('?') || m_non_liee,
                    "échec sans trou visible: {d} pile={}",
                    m.history()
                );
                seen_absent += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_absent > 20, "trop peu d’échecs: {seen_absent}");
}

#[test]
fn fuzz_safe_programme_relu() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for i in 0..200 {
        budget(t0, max);

        let mut m = Moteur::new();
        remplir(&mut rng, &mut m, 1 + (i % 16), false);

        let mut copie = Moteur::new();
        copie.load_program(&m.program());

        assert!(
            meme_valeur(copie.evaluate(), m.evaluate()),
            "valeur différente: {}",
            m.history()
        );
        assert_eq!(copie.description(), m.description());
        assert_eq!(copie.history(), m.history());
    }
}

#[test]
fn fuzz_safe_evaluation_non_destructive() {
    let mut rng = Rng::new(0x5EED_u64);

    for i in 0..100 {
        let mut m = Moteur::new();
        m.variables.insert("M".into(), -2.0);
        remplir(&mut rng, &mut m, 1 + (i % 10), true);

        let avant = m.history();
        let v1 = m.evaluate();
        let d1 = m.description();
        let v2 = m.evaluate();

        assert!(meme_valeur(v1, v2));
        assert_eq!(d1, m.description());
        assert_eq!(avant, m.history());
    }
}

#[test]
fn fuzz_safe_symboles_inconnus() {
    let mut rng = Rng::new(0xFEED_u64);
    let inconnus = ["%", "^", "tan", "*", "/", "", "pi", "X"];

    for _ in 0..100 {
        let mut m = Moteur::new();
        remplir(&mut rng, &mut m, 6, false);

        let avant = m.evaluate();
        let longueur = m.pile().len();
        let s = inconnus[rng.pick(inconnus.len() as u32) as usize];

        assert!(meme_valeur(m.perform_operation(s), avant), "symbole={s:?}");
        assert_eq!(m.pile().len(), longueur);
    }
}
