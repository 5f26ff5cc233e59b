// ABOUTME: Karenderia CLI - command-line front end for the allergen and nutrition engine
// ABOUTME: Analyzes ingredients and dishes, evaluates safety, filters menus, and exports the lexicon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors
//!
//! Usage:
//! ```bash
//! # Analyze a single ingredient
//! karenderia-cli ingredient "bagoong alamang"
//!
//! # Nutrition and health score for a dish, 250 g portion
//! karenderia-cli dish --portion 250 oxtail "peanut sauce" "string beans" eggplant
//!
//! # Safety check against an inline profile
//! karenderia-cli safety --allergen peanuts:severe --name Kare-Kare oxtail "peanut sauce"
//!
//! # Filter a menu file with a preset
//! karenderia-cli filter --dishes menu.json --preset budget-friendly
//!
//! # Export the built-in lexicon
//! karenderia-cli lexicon export --output lexicon.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use karenderia_engine::engine::KarenderiaEngine;
use karenderia_engine::lexicon::LexiconStore;
use karenderia_engine::logging::LoggingConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "karenderia-cli",
    about = "Karenderia allergen and nutrition engine CLI",
    long_about = "Matches free-text ingredients to allergens, nutrition, and food groups, and checks dishes against an allergen profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Custom lexicon JSON file (defaults to the built-in lexicon)
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze one ingredient
    Ingredient {
        /// Ingredient text (e.g. "bagoong alamang")
        text: String,
    },

    /// Aggregate nutrition and health score for a dish
    Dish {
        /// Portion weight in grams
        #[arg(long, default_value = "100")]
        portion: f64,

        /// Read ingredients from a JSON array file instead of arguments
        #[arg(long)]
        file: Option<PathBuf>,

        /// Ingredient strings
        ingredients: Vec<String>,
    },

    /// Evaluate a dish against an allergen profile
    Safety {
        /// Dish name used in warning messages
        #[arg(long)]
        name: Option<String>,

        /// Profile entry as `name[:severity]`, repeatable
        #[arg(long = "allergen", short = 'a')]
        allergens: Vec<String>,

        /// Profile JSON file (array of `{name, severity}`)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Ingredient strings
        ingredients: Vec<String>,
    },

    /// Evaluate many dishes against one profile
    Batch {
        /// JSON array of `{name, ingredients}`
        #[arg(long)]
        dishes: PathBuf,

        /// Profile entry as `name[:severity]`, repeatable
        #[arg(long = "allergen", short = 'a')]
        allergens: Vec<String>,

        /// Profile JSON file (array of `{name, severity}`)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Filter and sort a menu
    Filter {
        /// JSON array of dishes
        #[arg(long)]
        dishes: PathBuf,

        /// Filter specification JSON file
        #[arg(long, conflicts_with = "preset")]
        spec: Option<PathBuf>,

        /// Named preset (budget-friendly, low-calorie, allergen-safe, vegetarian, nearby)
        #[arg(long)]
        preset: Option<String>,

        /// Profile entry as `name[:severity]`, repeatable
        #[arg(long = "allergen", short = 'a')]
        allergens: Vec<String>,

        /// Profile JSON file (array of `{name, severity}`)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Format a nutrition record as a display label
    Label {
        /// Nutrition record JSON file
        #[arg(long, conflicts_with = "ingredient")]
        file: Option<PathBuf>,

        /// Label the lexicon's per-100g record for this ingredient
        #[arg(long)]
        ingredient: Option<String>,
    },

    /// Substitute suggestions for allergens found in the ingredients
    Alternatives {
        /// Ingredient strings
        ingredients: Vec<String>,
    },

    /// List every known allergen with its default severity
    Catalog,

    /// Lexicon management
    Lexicon {
        #[command(subcommand)]
        action: LexiconCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LexiconCommand {
    /// Write the active lexicon as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let engine = match &cli.lexicon {
        Some(path) => {
            info!(path = %path.display(), "Loading custom lexicon");
            KarenderiaEngine::with_lexicon(Arc::new(LexiconStore::from_file(path)?))
        }
        None => KarenderiaEngine::new(),
    };

    match cli.command {
        Command::Ingredient { text } => commands::analyze::ingredient(&engine, &text)?,
        Command::Dish {
            portion,
            file,
            ingredients,
        } => commands::analyze::dish(&engine, file.as_deref(), ingredients, portion)?,
        Command::Safety {
            name,
            allergens,
            profile,
            ingredients,
        } => commands::safety::evaluate(
            &engine,
            &ingredients,
            &allergens,
            profile.as_deref(),
            name.as_deref(),
        )?,
        Command::Batch {
            dishes,
            allergens,
            profile,
        } => commands::safety::batch(&engine, &dishes, &allergens, profile.as_deref())?,
        Command::Filter {
            dishes,
            spec,
            preset,
            allergens,
            profile,
        } => commands::filter::run(
            &engine,
            &dishes,
            spec.as_deref(),
            preset.as_deref(),
            &allergens,
            profile.as_deref(),
        )?,
        Command::Label { file, ingredient } => {
            commands::analyze::label(&engine, file.as_deref(), ingredient.as_deref())?;
        }
        Command::Alternatives { ingredients } => {
            commands::analyze::alternatives(&engine, &ingredients)?;
        }
        Command::Catalog => commands::lexicon::catalog(&engine)?,
        Command::Lexicon { action } => match action {
            LexiconCommand::Export { output } => {
                commands::lexicon::export(&engine, output.as_deref())?;
            }
        },
    }

    Ok(())
}
