// src/noyau/resolution.rs
//
// Résolution à deux piles (valeurs / opérateurs), récursive sur les groupes.
//
// Règles:
// - signe en tête ("-x", "+x") : on empile 0 d’abord, le signe devient binaire
// - opérateur : on réduit tant que sa précédence est <= celle du sommet (associativité à gauche)
// - "(" ... ")" et f(...) : le contenu est résolu par un appel récursif sur une tranche
// - multiplication implicite, insérée UNE seule fois entre deux termes voisins :
//     * nombre suivi de "(" ou d’une fonction
//     * groupe suivi d’un nombre, d’un "(" ou d’une fonction
//   Un groupe lie son voisin en posant "×" directement sur la pile (pas de comparaison),
//   une fonction collée à un nombre ("2√9") passe par la comparaison normale.
//
// Les tranches passées en récursion sont des vues immuables : rien n’est épissé en place.

use std::ops::Range;

use log::trace;

use super::classe::{Fonction, Op};
use super::config::{Options, PolitiqueParentheses};
use super::erreur::ErreurCalcul;
use super::fonctions::{applique_fonction, applique_op};
use super::jetons::{format_tokens, Tok};

/// Ce qui vient d’être consommé (sert à décider d’un "×" implicite).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dernier {
    Rien,
    Operateur,
    Valeur,
    // "×" déjà posé vers le terme suivant
    Lie,
}

/// Piles d’une passe. Jamais partagées entre appels récursifs.
#[derive(Default)]
struct Piles {
    valeurs: Vec<f64>,
    operateurs: Vec<Op>,
}

impl Piles {
    fn reduit_une_fois(&mut self) -> Result<(), ErreurCalcul> {
        let v2 = self.valeurs.pop().ok_or_else(ErreurCalcul::syntaxe)?;
        let v1 = self.valeurs.pop().ok_or_else(ErreurCalcul::syntaxe)?;
        let op = self.operateurs.pop().ok_or_else(ErreurCalcul::syntaxe)?;
        self.valeurs.push(applique_op(v1, v2, op)?);
        Ok(())
    }

    fn pousse_operateur(&mut self, op: Op) -> Result<(), ErreurCalcul> {
        // pas d’opérande gauche disponible : "^3", "2×-3"
        if self.valeurs.len() <= self.operateurs.len() {
            return Err(ErreurCalcul::syntaxe());
        }

        while let Some(&sommet) = self.operateurs.last() {
            if op.precedence() <= sommet.precedence() {
                self.reduit_une_fois()?;
            } else {
                break;
            }
        }

        self.operateurs.push(op);
        Ok(())
    }

    /// "×" implicite posé tel quel (lie le terme suivant).
    fn lie(&mut self) {
        self.operateurs.push(Op::Fois);
    }

    fn deroule(mut self) -> Result<f64, ErreurCalcul> {
        while !self.operateurs.is_empty() {
            self.reduit_une_fois()?;
        }
        match self.valeurs.as_slice() {
            [v] => Ok(*v),
            _ => Err(ErreurCalcul::syntaxe()),
        }
    }
}

/// Résout une suite de jetons en une valeur.
pub fn resoudre(tokens: &[Tok], options: &Options) -> Result<f64, ErreurCalcul> {
    resoudre_a(tokens, options, 0)
}

fn resoudre_a(tokens: &[Tok], options: &Options, profondeur: usize) -> Result<f64, ErreurCalcul> {
    if profondeur > options.profondeur_max {
        return Err(ErreurCalcul::ProfondeurDepassee(options.profondeur_max));
    }

    let mut piles = Piles::default();
    let mut dernier = Dernier::Rien;

    if let Some(Tok::Op(op)) = tokens.first() {
        if op.est_signe() {
            piles.valeurs.push(0.0);
        }
    }

    let mut i: usize = 0;
    while i < tokens.len() {
        match &tokens[i] {
            Tok::Num(texte) => {
                piles.valeurs.push(lit_nombre(texte)?);
                dernier = Dernier::Valeur;
                i += 1;
            }

            Tok::Fonc(f) => {
                let avant = dernier == Dernier::Valeur;

                match tokens.get(i + 1) {
                    // f suivie d’un nombre : f(nombre) remplace les deux jetons
                    Some(Tok::Num(texte)) => {
                        let v = applique_fonction(lit_nombre(texte)?, *f, options.mode)?;
                        if avant {
                            piles.pousse_operateur(Op::Fois)?;
                        }
                        piles.valeurs.push(v);
                        dernier = Dernier::Valeur;
                        i += 2;
                    }

                    Some(Tok::LPar) => {
                        if avant {
                            piles.lie();
                        }
                        let (dedans, suivant) = groupe(tokens, i + 1, options)?;
                        let v = resoudre_groupe(&tokens[dedans], options, profondeur, Some(*f))?;
                        piles.valeurs.push(v);
                        dernier = lie_apres_groupe(&mut piles, tokens.get(suivant));
                        i = suivant;
                    }

                    autre => return Err(non_reconnu(autre)),
                }
            }

            Tok::LPar => {
                if dernier == Dernier::Valeur {
                    piles.lie();
                }
                let (dedans, suivant) = groupe(tokens, i, options)?;
                let v = resoudre_groupe(&tokens[dedans], options, profondeur, None)?;
                piles.valeurs.push(v);
                dernier = lie_apres_groupe(&mut piles, tokens.get(suivant));
                i = suivant;
            }

            // fermante orpheline
            Tok::RPar => return Err(ErreurCalcul::parenthese()),

            Tok::Op(op) => {
                piles.pousse_operateur(*op)?;
                dernier = Dernier::Operateur;
                i += 1;
            }
        }
    }

    piles.deroule()
}

fn resoudre_groupe(
    dedans: &[Tok],
    options: &Options,
    profondeur: usize,
    fonction: Option<Fonction>,
) -> Result<f64, ErreurCalcul> {
    trace!(
        "sous-expression (profondeur {}) : {}",
        profondeur + 1,
        format_tokens(dedans)
    );

    let v = resoudre_a(dedans, options, profondeur + 1)?;
    match fonction {
        Some(f) => applique_fonction(v, f, options.mode),
        None => Ok(v),
    }
}

/// Après un groupe : "×" implicite si un terme suit immédiatement.
fn lie_apres_groupe(piles: &mut Piles, suivant: Option<&Tok>) -> Dernier {
    if suivant.is_some_and(Tok::ouvre_un_terme) {
        piles.lie();
        Dernier::Lie
    } else {
        Dernier::Valeur
    }
}

/// Délimite le groupe ouvert en `ouvrante`.
/// Renvoie (intérieur, index du jeton qui suit la fermante).
fn groupe(
    tokens: &[Tok],
    ouvrante: usize,
    options: &Options,
) -> Result<(Range<usize>, usize), ErreurCalcul> {
    let (dedans, suivant) = match fermeture(tokens, ouvrante) {
        Some(f) => (ouvrante + 1..f, f + 1),
        None => match options.parentheses {
            PolitiqueParentheses::Stricte => return Err(ErreurCalcul::parenthese()),
            PolitiqueParentheses::FermetureAuto => (ouvrante + 1..tokens.len(), tokens.len()),
        },
    };

    if dedans.is_empty() {
        return Err(ErreurCalcul::parenthese_vide());
    }
    Ok((dedans, suivant))
}

/// Index de la ")" appariée à la "(" en `ouvrante`, si elle existe.
pub fn fermeture(tokens: &[Tok], ouvrante: usize) -> Option<usize> {
    let mut profondeur: usize = 0;
    for (j, tok) in tokens.iter().enumerate().skip(ouvrante + 1) {
        match tok {
            Tok::LPar => profondeur += 1,
            Tok::RPar => {
                if profondeur == 0 {
                    return Some(j);
                }
                profondeur -= 1;
            }
            _ => {}
        }
    }
    None
}

fn lit_nombre(texte: &str) -> Result<f64, ErreurCalcul> {
    texte.parse::<f64>().map_err(|_| ErreurCalcul::syntaxe())
}

fn non_reconnu(tok: Option<&Tok>) -> ErreurCalcul {
    match tok {
        Some(t) => ErreurCalcul::Syntaxe(format!("{t} is unrecognized")),
        None => ErreurCalcul::Syntaxe("end of input is unrecognized".into()),
    }
}
