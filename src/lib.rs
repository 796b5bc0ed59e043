//! Calculatrice trig — noyau de calcul
//!
//! Évalue une expression de calculatrice (chaîne sans espaces) :
//! nombres décimaux, `+ - × ÷ ^ %`, parenthèses, multiplication implicite,
//! `sin cos tan csc sec cot arcsin arccos arctan √`, en degrés ou radians.
//!
//! ```
//! use calculatrice_trig::{evaluate, ModeAngle};
//!
//! assert_eq!(evaluate("2(3+4)", None, ModeAngle::Radians), "14");
//! assert_eq!(evaluate("tan(90)", None, ModeAngle::Degres), "Error: domain error on tan");
//! ```

pub mod noyau;

pub use noyau::{
    evaluate, evaluate_avec, evaluer, evaluer_texte, ErreurCalcul, GenreErreur, ModeAngle,
    Options, PolitiqueParentheses,
};
