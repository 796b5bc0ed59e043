// src/main.rs
//
// Calculatrice trig — point d’entrée en ligne de commande
// -------------------------------------------------------
// But:
// - Lire l’expression, retirer les espaces (glue de saisie, hors noyau)
// - Appeler le noyau et afficher le texte du résultat
// - Code de sortie 1 si le résultat est une erreur
//
// Journalisation : RUST_LOG=debug affiche les jetons, RUST_LOG=trace les sous-expressions.

use clap::Parser;

use calculatrice_trig::noyau::config::PROFONDEUR_MAX_DEFAUT;
use calculatrice_trig::noyau::eval::PREFIXE_ERREUR;
use calculatrice_trig::noyau::jetons::{format_tokens, tokenize};
use calculatrice_trig::{evaluate_avec, ModeAngle, Options, PolitiqueParentheses};

#[derive(Parser)]
#[command(author, version, about = "Calculatrice trig : évalue une expression", long_about = None)]
struct Cli {
    /// Expression à évaluer (ex: "2sin(30)+√(16)")
    expression: String,

    /// Mode d’angle des fonctions trigonométriques (deg | rad)
    #[arg(short, long, default_value = "rad")]
    mode: ModeAngle,

    /// Nombre de décimales de l’arrondi final (négatif : dizaines, centaines...)
    #[arg(short, long, allow_hyphen_values = true)]
    arrondi: Option<i32>,

    /// Ferme automatiquement les parenthèses restées ouvertes en fin d’entrée
    #[arg(long)]
    fermeture_auto: bool,

    /// Profondeur maximale d’imbrication
    #[arg(long, default_value_t = PROFONDEUR_MAX_DEFAUT)]
    profondeur_max: usize,

    /// Affiche aussi les jetons reconnus
    #[arg(long)]
    jetons: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let entree: String = cli
        .expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let parentheses = if cli.fermeture_auto {
        PolitiqueParentheses::FermetureAuto
    } else {
        PolitiqueParentheses::Stricte
    };
    let options = Options::default()
        .avec_mode(cli.mode)
        .avec_arrondi(cli.arrondi)
        .avec_parentheses(parentheses)
        .avec_profondeur_max(cli.profondeur_max);

    if cli.jetons {
        match tokenize(&entree) {
            Ok(t) => println!("{}", format_tokens(&t)),
            Err(e) => eprintln!("{PREFIXE_ERREUR}{e}"),
        }
    }

    let sortie = evaluate_avec(&entree, &options);
    println!("{sortie}");

    if sortie.starts_with(PREFIXE_ERREUR) {
        std::process::exit(1);
    }
}
