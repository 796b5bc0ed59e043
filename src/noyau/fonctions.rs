// src/noyau/fonctions.rs
//
// Bibliothèque de fonctions (pures, f64)
// --------------------------------------
// - opérateurs binaires + - × ÷ ^ %
// - trig directe / inverse avec conversion degrés
// - √
// - contrôles de domaine (tolérance absolue 1e-2 près des asymptotes)

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::classe::{Fonction, Op};
use super::erreur::ErreurCalcul;

/// Tolérance absolue pour les asymptotes (tan/sec : cos≈0 ; cot/csc : sin≈0).
pub const TOLERANCE_DOMAINE: f64 = 1e-2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    Degres,
    #[default]
    Radians,
}

impl FromStr for ModeAngle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deg" | "degres" | "degrees" => Ok(ModeAngle::Degres),
            "rad" | "radians" => Ok(ModeAngle::Radians),
            _ => Err(format!("mode d’angle inconnu: '{s}' (attendu: deg | rad)")),
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeAngle::Degres => f.write_str("deg"),
            ModeAngle::Radians => f.write_str("rad"),
        }
    }
}

fn presque_nul(x: f64) -> bool {
    x.abs() < TOLERANCE_DOMAINE
}

fn est_entier(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// Applique un opérateur binaire : `v1 op v2`.
pub fn applique_op(v1: f64, v2: f64, op: Op) -> Result<f64, ErreurCalcul> {
    if v1.is_nan() || v2.is_nan() {
        return Err(ErreurCalcul::syntaxe());
    }

    let r = match op {
        Op::Plus => v1 + v2,
        Op::Moins => v1 - v2,
        Op::Fois => v1 * v2,
        Op::Divise => v1 / v2,
        Op::Puissance => v1.powf(v2),
        Op::Modulo => {
            if !est_entier(v1) || !est_entier(v2) {
                return Err(ErreurCalcul::domaine("modulus requires integer operands"));
            }
            // reste tronqué : signe du dividende
            v1 % v2
        }
    };
    Ok(r)
}

/// Applique une fonction unaire selon le mode d’angle.
pub fn applique_fonction(valeur: f64, f: Fonction, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
    if valeur.is_nan() {
        return Err(ErreurCalcul::syntaxe());
    }

    // degrés -> radians : valeur × (π/180)
    let x = if f.prend_un_angle() && mode == ModeAngle::Degres {
        valeur * (PI / 180.0)
    } else {
        valeur
    };

    let r = match f {
        Fonction::Sin => x.sin(),
        Fonction::Cos => x.cos(),
        Fonction::Tan => {
            if presque_nul(x.cos()) {
                return Err(ErreurCalcul::domaine("domain error on tan"));
            }
            x.tan()
        }
        Fonction::Csc => {
            if presque_nul(x.sin()) {
                return Err(ErreurCalcul::domaine("domain error on csc"));
            }
            1.0 / x.sin()
        }
        Fonction::Sec => {
            if presque_nul(x.cos()) {
                return Err(ErreurCalcul::domaine("domain error on sec"));
            }
            1.0 / x.cos()
        }
        Fonction::Cot => {
            if presque_nul(x.sin()) {
                return Err(ErreurCalcul::domaine("domain error on cot"));
            }
            1.0 / x.tan()
        }

        Fonction::ArcSin => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(ErreurCalcul::domaine("domain error on arcsin"));
            }
            x.asin()
        }
        Fonction::ArcCos => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(ErreurCalcul::domaine("domain error on arccos"));
            }
            x.acos()
        }
        Fonction::ArcTan => x.atan(),

        Fonction::Racine => {
            if x < 0.0 {
                return Err(ErreurCalcul::domaine("square root of a negative"));
            }
            x.sqrt()
        }
    };

    if f.rend_un_angle() && mode == ModeAngle::Degres {
        Ok(r * 180.0 / PI)
    } else {
        Ok(r)
    }
}
