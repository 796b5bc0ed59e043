//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> résolution (récursive) -> contrôle fini -> arrondi -> texte
//!
//! Aucun état entre deux appels : deux évaluations indépendantes peuvent
//! tourner en parallèle sans synchronisation.

use log::debug;

use super::config::Options;
use super::erreur::ErreurCalcul;
use super::fonctions::ModeAngle;
use super::jetons::{format_tokens, tokenize};
use super::lecture::{arrondi, format_nombre};
use super::resolution::resoudre;

/// Préfixe des sorties en échec.
pub const PREFIXE_ERREUR: &str = "Error: ";

/// Évalue une expression et retourne la valeur finale (arrondie si demandé).
pub fn evaluer(expr: &str, options: &Options) -> Result<f64, ErreurCalcul> {
    let jetons = tokenize(expr)?;
    debug!("jetons: {}", format_tokens(&jetons));

    let v = resoudre(&jetons, options)?;
    if !v.is_finite() {
        return Err(ErreurCalcul::domaine("undefined result"));
    }

    Ok(match options.arrondi {
        Some(chiffres) => arrondi(v, chiffres),
        None => v,
    })
}

/// Comme `evaluer`, mais rend le texte décimal.
pub fn evaluer_texte(expr: &str, options: &Options) -> Result<String, ErreurCalcul> {
    evaluer(expr, options).map(format_nombre)
}

/// API publique : texte du résultat, ou "Error: <message>".
///
/// `round_digits` peut être négatif (arrondi aux dizaines, centaines, ...).
pub fn evaluate(expression: &str, round_digits: Option<i32>, mode: ModeAngle) -> String {
    let options = Options::default()
        .avec_mode(mode)
        .avec_arrondi(round_digits);
    evaluate_avec(expression, &options)
}

/// Variante de `evaluate` avec toutes les options.
pub fn evaluate_avec(expression: &str, options: &Options) -> String {
    match evaluer_texte(expression, options) {
        Ok(texte) => texte,
        Err(e) => format!("{PREFIXE_ERREUR}{e}"),
    }
}
