// src/noyau/config.rs
//
// Paramètres d’une évaluation (fixés pour toute sa durée).

use super::fonctions::ModeAngle;

/// Garde-fou : profondeur d’imbrication (parenthèses / fonctions) par défaut.
pub const PROFONDEUR_MAX_DEFAUT: usize = 256;

/// Que faire d’une "(" jamais refermée.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolitiqueParentheses {
    /// Erreur "parenthesis".
    #[default]
    Stricte,
    /// La fin de l’entrée ferme tous les groupes encore ouverts.
    FermetureAuto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub mode: ModeAngle,
    /// Nombre de décimales de l’arrondi final (None = pas d’arrondi).
    /// Négatif : arrondi aux dizaines (-1), centaines (-2), etc.
    pub arrondi: Option<i32>,
    pub parentheses: PolitiqueParentheses,
    pub profondeur_max: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: ModeAngle::Radians,
            arrondi: None,
            parentheses: PolitiqueParentheses::Stricte,
            profondeur_max: PROFONDEUR_MAX_DEFAUT,
        }
    }
}

impl Options {
    pub fn avec_mode(mut self, mode: ModeAngle) -> Self {
        self.mode = mode;
        self
    }

    pub fn avec_arrondi(mut self, arrondi: Option<i32>) -> Self {
        self.arrondi = arrondi;
        self
    }

    pub fn avec_parentheses(mut self, parentheses: PolitiqueParentheses) -> Self {
        self.parentheses = parentheses;
        self
    }

    pub fn avec_profondeur_max(mut self, profondeur_max: usize) -> Self {
        self.profondeur_max = profondeur_max;
        self
    }
}
