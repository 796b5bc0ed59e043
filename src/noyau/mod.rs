//! Noyau de calcul flottant
//!
//! Organisation interne :
//! - classe.rs      : classifieur (chiffres, opérateurs, fonctions, précédence)
//! - jetons.rs      : tokenisation
//! - resolution.rs  : résolution à deux piles, récursive sur les groupes
//! - fonctions.rs   : opérateurs, trig / trig inverse / √ + domaines
//! - lecture.rs     : arrondi + texte décimal
//! - erreur.rs      : type d’erreur unique
//! - config.rs      : options d’évaluation
//! - eval.rs        : pipeline complet

pub mod classe;
pub mod config;
pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod jetons;
pub mod lecture;
pub mod resolution;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use config::{Options, PolitiqueParentheses};
pub use erreur::{ErreurCalcul, GenreErreur};
pub use eval::{evaluate, evaluate_avec, evaluer, evaluer_texte};
pub use fonctions::ModeAngle;
