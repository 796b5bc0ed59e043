// src/noyau/jetons.rs

use std::fmt;

use super::classe::{est_numerique, Fonction, Op};
use super::erreur::ErreurCalcul;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Texte décimal tel que saisi (chiffres + au plus un point).
    Num(String),

    Op(Op),
    Fonc(Fonction),

    LPar,
    RPar,
}

impl Tok {
    /// Début d’un terme : nombre, groupe ou fonction.
    pub fn ouvre_un_terme(&self) -> bool {
        matches!(self, Tok::Num(_) | Tok::LPar | Tok::Fonc(_))
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(texte) => f.write_str(texte),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::Fonc(fonc) => write!(f, "{fonc}"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Tokenize une chaîne SANS espaces.
/// Supporte:
/// - nombres décimaux (ex: 12, 4.6, .5) : au plus un point et au moins un chiffre
/// - opérateurs + - × ÷ ^ %
/// - parenthèses ( )
/// - √
/// - sin cos tan csc sec cot (3 lettres), arcsin arccos arctan (6 lettres)
///
/// Tout le reste (espaces compris) => erreur "syntax".
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre : run maximal, un seul point
        if est_numerique(c) {
            let start = i;
            let mut point_vu = false;
            while i < chars.len() && est_numerique(chars[i]) {
                if chars[i] == '.' {
                    if point_vu {
                        break;
                    }
                    point_vu = true;
                }
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            // "." seul n’est pas un nombre
            if !texte.chars().any(|c| c.is_ascii_digit()) {
                return Err(ErreurCalcul::syntaxe());
            }
            out.push(Tok::Num(texte));
            continue;
        }

        // 1 caractère : opérateur, parenthèse, racine
        if let Some(op) = Op::depuis_char(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }
        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '√' => {
                out.push(Tok::Fonc(Fonction::Racine));
                i += 1;
                continue;
            }
            _ => {}
        }

        // Noms de fonctions : le plus long d’abord (arcsin avant un éventuel "arc")
        if let Some(f) = nom_de_fonction(&chars, i, 6).or_else(|| nom_de_fonction(&chars, i, 3)) {
            i += f.nom().chars().count();
            out.push(Tok::Fonc(f));
            continue;
        }

        return Err(ErreurCalcul::syntaxe());
    }

    Ok(out)
}

fn nom_de_fonction(chars: &[char], i: usize, longueur: usize) -> Option<Fonction> {
    let fin = i.checked_add(longueur)?;
    if fin > chars.len() {
        return None;
    }
    let mot: String = chars[i..fin].iter().collect();
    Fonction::depuis_nom(&mot)
}

/// Format utilitaire (debug/CLI) : liste de jetons séparés par des espaces.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Recolle le texte des jetons (inverse de `tokenize` sur une entrée minimale).
pub fn concat_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(Tok::to_string).collect()
}
