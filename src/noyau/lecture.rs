// src/noyau/lecture.rs
//
// Lecture finale : arrondi optionnel + texte décimal.
// - arrondi : round(x·10^d)/10^d, demi vers +∞ sur la valeur scalée
// - texte   : plus courte écriture qui relit le même f64,
//             notation exponentielle hors de [1e-6, 1e21)

use num_traits::ToPrimitive;

/// Au-delà de 2^52, tout f64 est déjà entier : arrondir ne change rien.
const ENTIER_EXACT: f64 = 4_503_599_627_370_496.0;

/// Exposant décimal (10^n, n = exposant + 1) au-delà duquel on passe en notation exponentielle.
const EXPOSANT_MAX_FIXE: i32 = 21;
const EXPOSANT_MIN_FIXE: i32 = -6;

/* ------------------------ Arrondi ------------------------ */

/// Demi vers +∞ : 2.5 -> 3, -2.5 -> -2.
fn arrondi_demi_haut(x: f64) -> f64 {
    let plancher = x.floor();
    if x - plancher >= 0.5 {
        plancher + 1.0
    } else {
        plancher
    }
}

/// Arrondit `x` à `chiffres` décimales (négatif : dizaines, centaines, ...).
pub fn arrondi(x: f64, chiffres: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let echelle = 10f64.powi(chiffres);
    // 10^chiffres sous le plus petit f64 : tout s’arrondit à 0
    if echelle == 0.0 {
        return 0.0;
    }
    let scale = x * echelle;

    // échelle infinie ou valeur déjà entière à cette échelle
    if !scale.is_finite() || scale.abs() >= ENTIER_EXACT {
        return x;
    }

    arrondi_demi_haut(scale) / echelle
}

/* ------------------------ Décimal (f64 -> texte) ------------------------ */

fn zeros(n: i32) -> String {
    "0".repeat(n.to_usize().unwrap_or(0))
}

/// Convertit un f64 en texte : "3", "0.5", "6.174192933294465e-9", "1e+21".
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // couvre aussi -0
    if x == 0.0 {
        return "0".to_string();
    }

    let neg = x < 0.0;

    // `{:e}` donne déjà la plus courte suite de chiffres : "d.ddde±x"
    let sci = format!("{:e}", x.abs());
    let (mantisse, exp_txt) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exposant: i32 = exp_txt.parse().unwrap_or(0);

    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    let Some(k) = chiffres.len().to_i32() else {
        return sci;
    };
    let n = exposant + 1; // x = 0.chiffres × 10^n

    let corps = if k <= n && n <= EXPOSANT_MAX_FIXE {
        // entier : chiffres + zéros
        format!("{chiffres}{}", zeros(n - k))
    } else if 0 < n && n <= EXPOSANT_MAX_FIXE {
        let (ent, frac) = chiffres.split_at(n.to_usize().unwrap_or(0));
        format!("{ent}.{frac}")
    } else if EXPOSANT_MIN_FIXE < n && n <= 0 {
        format!("0.{}{chiffres}", zeros(-n))
    } else {
        let signe = if n - 1 >= 0 { '+' } else { '-' };
        let e = (n - 1).abs();
        let (tete, reste) = chiffres.split_at(1);
        if reste.is_empty() {
            format!("{tete}e{signe}{e}")
        } else {
            format!("{tete}.{reste}e{signe}{e}")
        }
    };

    if neg {
        format!("-{corps}")
    } else {
        corps
    }
}
