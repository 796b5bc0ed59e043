// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// - Un seul type, propagé avec `?` du tokenizer jusqu’au pipeline.
// - Display = message lisible, sans le préfixe "Error: " (ajouté par eval.rs).
// - Aucune erreur n’est journalisée ici : le noyau reste une frontière de calcul pure.

use thiserror::Error;

/// Message unique pour tout ce qui relève de la syntaxe "pure".
pub const MSG_SYNTAXE: &str = "syntax";

/// Message pour une parenthèse impossible à apparier.
pub const MSG_PARENTHESE: &str = "parenthesis";

/// Message pour un groupe vide "()".
pub const MSG_PARENTHESE_VIDE: &str = "() with nothing inside";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("{0}")]
    Syntaxe(String),

    #[error("{0}")]
    Parenthese(String),

    #[error("{0}")]
    Domaine(String),

    // Ensemble d’opérateurs fermé : ne devrait jamais sortir d’une évaluation.
    #[error("Unrecognized operator: {0}")]
    OperateurInconnu(String),

    #[error("expression nested too deeply (max {0})")]
    ProfondeurDepassee(usize),
}

/// Genre d’erreur, pour filtrer sans comparer des chaînes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Syntaxe,
    Parenthese,
    Domaine,
    OperateurInconnu,
    Profondeur,
}

impl ErreurCalcul {
    pub fn syntaxe() -> Self {
        ErreurCalcul::Syntaxe(MSG_SYNTAXE.into())
    }

    pub fn parenthese() -> Self {
        ErreurCalcul::Parenthese(MSG_PARENTHESE.into())
    }

    pub fn parenthese_vide() -> Self {
        ErreurCalcul::Parenthese(MSG_PARENTHESE_VIDE.into())
    }

    pub fn domaine(msg: impl Into<String>) -> Self {
        ErreurCalcul::Domaine(msg.into())
    }

    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurCalcul::Syntaxe(_) => GenreErreur::Syntaxe,
            ErreurCalcul::Parenthese(_) => GenreErreur::Parenthese,
            ErreurCalcul::Domaine(_) => GenreErreur::Domaine,
            ErreurCalcul::OperateurInconnu(_) => GenreErreur::OperateurInconnu,
            ErreurCalcul::ProfondeurDepassee(_) => GenreErreur::Profondeur,
        }
    }
}
