//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - tirages reproductibles (graine fixe)
//! - profondeur bornée
//! - chronomètre par test
//! - toute erreur doit appartenir à un genre connu (jamais de panique)
//! - invariant clé : même entrée => même sortie

use std::time::{Duration, Instant};

use super::config::{Options, PolitiqueParentheses, PROFONDEUR_MAX_DEFAUT};
use super::eval::{evaluate_avec, evaluer};
use super::fonctions::ModeAngle;
use super::{ErreurCalcul, GenreErreur};

/* ------------------------ Tirages reproductibles ------------------------ */

/// xorshift64* : même graine, même suite de tirages.
struct Graine(u64);

impl Graine {
    fn depuis(graine: u64) -> Self {
        // l’état nul est un point fixe de xorshift
        Graine(graine | 1)
    }

    fn suivant(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Entier dans 0..n (n > 0).
    fn tire(&mut self, n: usize) -> usize {
        (self.suivant() % n as u64) as usize
    }

    fn pile_ou_face(&mut self) -> bool {
        self.suivant() >> 63 == 1
    }

    fn parmi<T: Copy>(&mut self, choix: &[T]) -> T {
        choix[self.tire(choix.len())]
    }
}

/* ------------------------ Chronomètre ------------------------ */

struct Chrono {
    debut: Instant,
    limite: Duration,
}

impl Chrono {
    fn lance(millis: u64) -> Self {
        Chrono {
            debut: Instant::now(),
            limite: Duration::from_millis(millis),
        }
    }

    fn verifie(&self) {
        let ecoule = self.debut.elapsed();
        assert!(ecoule <= self.limite, "trop lent : {ecoule:?} > {:?}", self.limite);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

const ALPHABET: [&str; 22] = [
    "0", "1", "2", "7", ".", "+", "-", "×", "÷", "^", "%", "(", ")", "(", ")", "√", "sin", "cos",
    "tan", "arcsin", "arctan", "cot",
];

/// Soupe de symboles valides pour le tokenizer, mais souvent mal formée.
fn gen_soupe(rng: &mut Graine, longueur: usize) -> String {
    (0..longueur).map(|_| rng.parmi(&ALPHABET)).collect()
}

fn gen_nombre(rng: &mut Graine) -> String {
    let n = rng.tire(90) + 1;
    if rng.pile_ou_face() {
        format!("{n}.{}", rng.tire(10))
    } else {
        format!("{n}")
    }
}

fn gen_op(rng: &mut Graine) -> &'static str {
    rng.parmi(&["+", "-", "×", "÷", "^"])
}

/// Expression bien parenthésée (les domaines peuvent quand même échouer).
fn gen_expr(rng: &mut Graine, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.tire(6) {
        0 => gen_nombre(rng),
        1 => format!(
            "{}{}{}",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
        2 => format!("({})", gen_expr(rng, depth - 1)),
        3 => format!("{}({})", gen_nombre(rng), gen_expr(rng, depth - 1)),
        4 => {
            let f = rng.parmi(&["sin", "cos", "tan", "arctan", "√"]);
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        _ => format!("-{}", gen_nombre(rng)),
    }
}

fn genre_attendu(e: &ErreurCalcul) -> bool {
    // Ensemble fermé d’opérateurs : jamais d’opérateur inconnu en sortie d’évaluation.
    !matches!(e.genre(), GenreErreur::OperateurInconnu)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_soupe_sans_panique() {
    let chrono = Chrono::lance(500);
    let mut rng = Graine::depuis(0xC0FFEE);
    let strict = Options::default();
    let auto = Options::default().avec_parentheses(PolitiqueParentheses::FermetureAuto);

    let mut seen_err = 0usize;

    for _ in 0..400 {
        chrono.verifie();

        let longueur = rng.tire(14) + 1;
        let expr = gen_soupe(&mut rng, longueur);

        for o in [&strict, &auto] {
            match evaluer(&expr, o) {
                Ok(v) => assert!(v.is_finite(), "{expr:?} => {v}"),
                Err(e) => {
                    assert!(genre_attendu(&e), "erreur non attendue: expr={expr:?} err={e}");
                    seen_err += 1;
                }
            }
        }
    }

    // une soupe aléatoire doit bien produire des erreurs
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let chrono = Chrono::lance(500);
    let mut rng = Graine::depuis(0xBADC0DE);
    let o = Options::default().avec_mode(ModeAngle::Degres);

    let mut seen_ok = 0usize;

    for _ in 0..150 {
        chrono.verifie();

        let expr = gen_expr(&mut rng, 4);
        let a = evaluate_avec(&expr, &o);
        let b = evaluate_avec(&expr, &o);
        assert_eq!(a, b, "non déterministe: {expr:?}");

        // expression bien formée : jamais d’erreur de parenthèses
        assert_ne!(a, "Error: parenthesis", "expr={expr:?}");

        if !a.starts_with("Error: ") {
            seen_ok += 1;
        }
    }

    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_strict_equivaut_auto_si_equilibre() {
    let mut rng = Graine::depuis(0x5EED);
    let strict = Options::default();
    let auto = Options::default().avec_parentheses(PolitiqueParentheses::FermetureAuto);

    for _ in 0..100 {
        let expr = gen_expr(&mut rng, 4);
        assert_eq!(
            evaluate_avec(&expr, &strict),
            evaluate_avec(&expr, &auto),
            "expr={expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_imbrication_anti_pile() {
    let chrono = Chrono::lance(1000);

    // bien au-delà de la borne : erreur propre, pas de débordement de pile
    let n = PROFONDEUR_MAX_DEFAUT * 40;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    let e = evaluer(&expr, &Options::default()).unwrap_err();
    assert_eq!(e, ErreurCalcul::ProfondeurDepassee(PROFONDEUR_MAX_DEFAUT));

    // idem avec des fonctions et sans fermantes
    let expr = format!("{}1", "√(".repeat(n));
    let auto = Options::default().avec_parentheses(PolitiqueParentheses::FermetureAuto);
    let e = evaluer(&expr, &auto).unwrap_err();
    assert_eq!(e.genre(), GenreErreur::Profondeur);

    // sous la borne : ok
    let n = PROFONDEUR_MAX_DEFAUT / 2;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluer(&expr, &Options::default()).unwrap(), 1.0);

    chrono.verifie();
}

#[test]
fn fuzz_safe_somme_longue() {
    // longue chaîne plate : pas de récursion, piles bornées par la précédence
    let expr = vec!["1"; 2000].join("+");
    assert_eq!(evaluer(&expr, &Options::default()).unwrap(), 2000.0);
}
