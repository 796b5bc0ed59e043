// src/noyau/classe.rs
//
// Classifieur : règles sans état sur caractères et jetons.
// - chiffres / point décimal
// - opérateurs binaires + rang de précédence
// - noms de fonctions (trig 3 lettres, trig inverse 6 lettres, √)

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,   // ×
    Divise, // ÷
    Puissance,
    Modulo, // %
}

impl Op {
    pub const TOUS: [Op; 6] = [
        Op::Plus,
        Op::Moins,
        Op::Fois,
        Op::Divise,
        Op::Puissance,
        Op::Modulo,
    ];

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '×',
            Op::Divise => '÷',
            Op::Puissance => '^',
            Op::Modulo => '%',
        }
    }

    /// Classe un caractère. `None` si ce n’est pas un des six opérateurs.
    pub fn depuis_char(c: char) -> Option<Op> {
        Op::TOUS.into_iter().find(|op| op.symbole() == c)
    }

    /// Ordre total : `+ -` < `× ÷ %` < `^`.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Divise | Op::Modulo => 2,
            Op::Puissance => 3,
        }
    }

    /// Signe placé en tête d’expression (traité comme binaire après un 0 implicite).
    pub fn est_signe(self) -> bool {
        matches!(self, Op::Plus | Op::Moins)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

impl FromStr for Op {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => {
                Op::depuis_char(c).ok_or_else(|| ErreurCalcul::OperateurInconnu(s.to_string()))
            }
            _ => Err(ErreurCalcul::OperateurInconnu(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
    ArcSin,
    ArcCos,
    ArcTan,
    Racine, // √
}

impl Fonction {
    pub const TOUTES: [Fonction; 10] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Csc,
        Fonction::Sec,
        Fonction::Cot,
        Fonction::ArcSin,
        Fonction::ArcCos,
        Fonction::ArcTan,
        Fonction::Racine,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Csc => "csc",
            Fonction::Sec => "sec",
            Fonction::Cot => "cot",
            Fonction::ArcSin => "arcsin",
            Fonction::ArcCos => "arccos",
            Fonction::ArcTan => "arctan",
            Fonction::Racine => "√",
        }
    }

    /// Nom exact (sensible à la casse, comme le clavier de la calculatrice).
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        Fonction::TOUTES.into_iter().find(|f| f.nom() == nom)
    }

    /// Trig directe : l’argument est un angle (converti en mode degrés).
    pub fn prend_un_angle(self) -> bool {
        matches!(
            self,
            Fonction::Sin
                | Fonction::Cos
                | Fonction::Tan
                | Fonction::Csc
                | Fonction::Sec
                | Fonction::Cot
        )
    }

    /// Trig inverse : le résultat est un angle.
    pub fn rend_un_angle(self) -> bool {
        matches!(self, Fonction::ArcSin | Fonction::ArcCos | Fonction::ArcTan)
    }
}

impl fmt::Display for Fonction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

/// Chiffre ou point décimal.
pub fn est_numerique(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

pub fn est_operateur(tok: &str) -> bool {
    tok.parse::<Op>().is_ok()
}

pub fn est_fonction(tok: &str) -> bool {
    Fonction::depuis_nom(tok).is_some()
}

pub fn precedence(op: Op) -> u8 {
    op.precedence()
}
