// src/noyau/format.rs
//
// Description “infixe” de la pile NPI : même parcours que eval.rs,
// mais on produit du texte et on remplace toute partie manquante par "?".
// decrire() ne renvoie None que sur une pile vide.
//
// Deux passes, sans récursion :
// 1) construction d’un arbre (arène de noeuds) avec une pile de cadres
// 2) rendu en un seul String avec une pile de morceaux

use super::op::Op;

/// Marqueur d’opérande manquant.
const MANQUANT: &str = "?";

/// Noeud d’arène. None = opérande manquant.
enum Noeud<'a> {
    Feuille(&'a Op),
    Unaire(&'a str, Option<usize>),
    /// (symbole, gauche = 2e dépilé, droite = 1er dépilé)
    Binaire(&'a str, Option<usize>, Option<usize>),
}

enum Cadre<'a> {
    Unaire(&'a str),
    /// 1er dépilé (droite) en cours
    Premier(&'a str),
    /// 2e dépilé (gauche) en cours, droite connue
    Second(&'a str, Option<usize>),
}

enum Morceau<'a> {
    Noeud(Option<usize>),
    Texte(&'a str),
}

/// Décrit la pile à partir de la fin.
/// Retourne (texte, reste non consommé).
pub fn decrire(pile: &[Op]) -> (Option<String>, &[Op]) {
    let mut noeuds = Vec::new();
    let (racine, reste) = construire(pile, &mut noeuds);
    (racine.map(|id| rendre(&noeuds, id)), reste)
}

fn ajouter<'a>(noeuds: &mut Vec<Noeud<'a>>, noeud: Noeud<'a>) -> Option<usize> {
    noeuds.push(noeud);
    Some(noeuds.len() - 1)
}

fn construire<'a>(pile: &'a [Op], noeuds: &mut Vec<Noeud<'a>>) -> (Option<usize>, &'a [Op]) {
    let mut cadres: Vec<Cadre<'a>> = Vec::new();
    let mut curseur = pile;

    loop {
        let mut retour = match curseur.split_last() {
            None => (None, curseur),
            Some((op, reste)) => match op {
                Op::Unaire(s, _) => {
                    cadres.push(Cadre::Unaire(*s));
                    curseur = reste;
                    continue;
                }
                Op::Binaire(s, _) => {
                    cadres.push(Cadre::Premier(*s));
                    curseur = reste;
                    continue;
                }
                Op::Operande(_) | Op::Constante(..) | Op::Variable(_) => {
                    (ajouter(noeuds, Noeud::Feuille(op)), reste)
                }
            },
        };

        loop {
            let Some(cadre) = cadres.pop() else {
                return retour;
            };
            let (id, reste) = retour;

            retour = match cadre {
                Cadre::Unaire(s) => (ajouter(noeuds, Noeud::Unaire(s, id)), reste),
                Cadre::Premier(s) => {
                    cadres.push(Cadre::Second(s, id));
                    curseur = reste;
                    break;
                }
                Cadre::Second(s, droite) => (ajouter(noeuds, Noeud::Binaire(s, id, droite)), reste),
            };
        }
    }
}

fn rendre(noeuds: &[Noeud<'_>], racine: usize) -> String {
    let mut texte = String::new();
    let mut a_faire = vec![Morceau::Noeud(Some(racine))];

    while let Some(morceau) = a_faire.pop() {
        match morceau {
            Morceau::Texte(t) => texte.push_str(t),
            Morceau::Noeud(None) => texte.push_str(MANQUANT),
            Morceau::Noeud(Some(id)) => match &noeuds[id] {
                Noeud::Feuille(op) => texte.push_str(&op.to_string()),

                // s(interne) : empilé à l’envers
                Noeud::Unaire(s, interne) => a_faire.extend([
                    Morceau::Texte(")"),
                    Morceau::Noeud(*interne),
                    Morceau::Texte("("),
                    Morceau::Texte(*s),
                ]),

                // (gauche)s(droite)
                Noeud::Binaire(s, gauche, droite) => a_faire.extend([
                    Morceau::Texte(")"),
                    Morceau::Noeud(*droite),
                    Morceau::Texte("("),
                    Morceau::Texte(*s),
                    Morceau::Texte(")"),
                    Morceau::Noeud(*gauche),
                    Morceau::Texte("("),
                ]),
            },
        }
    }

    texte
}

/// Description complète : chaque expression indépendante de la pile,
/// dans l’ordre de saisie, séparées par ", ". Pile vide => "".
pub fn description_complete(pile: &[Op]) -> String {
    let mut morceaux: Vec<String> = Vec::new();
    let mut reste = pile;

    while let (Some(texte), suite) = decrire(reste) {
        morceaux.push(texte);
        reste = suite;
    }

    // decrire() part de la fin : on remet dans l’ordre de saisie
    morceaux.reverse();
    morceaux.join(", ")
}

/// Historique “plat” : symbole ou valeur de chaque élément, sans structure.
pub fn historique(pile: &[Op]) -> String {
    pile.iter()
        .map(|op| op.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
