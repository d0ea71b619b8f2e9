// SPDX-License-Identifier: PMPL-1.0-or-later

//! art-locales: maintenance CLI for the site's art-piece locale catalogs
//!
//! Converts array-shaped translation exports into keyed catalogs, validates
//! every `public/locales/<locale>/art-pieces.json`, and inspects JSON/HJSON
//! documents.

use anyhow::{Context, Result};
use art_locales::config::{DuplicatePolicy, PipelineConfig};
use art_locales::convert::{self, ConvertConfig};
use art_locales::loader;
use art_locales::report::{self, ReportFormatter, ReportOutputFormat};
use art_locales::validate::{self, ValidateConfig};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "art-locales")]
#[command(version)]
#[command(about = "Convert, validate and inspect art-piece locale catalogs")]
#[command(long_about = None)]
struct Cli {
    /// Pipeline configuration (default: ./art-locales.yaml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite array-shaped locale files into catalogs keyed by art id (destructive)
    Convert {
        /// Locales root directory (overrides config)
        #[arg(short, long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Locales to convert (default: the configured list)
        #[arg(short, long, value_delimiter = ',')]
        locale: Option<Vec<String>>,

        /// Convert without writing any file
        #[arg(long)]
        dry_run: bool,

        /// Keep the last record when an art id repeats instead of failing
        #[arg(long)]
        allow_duplicates: bool,
    },

    /// Check every locale catalog under the root
    Validate {
        /// Locales root directory (overrides config)
        #[arg(short, long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Write the report to a file (.json or .yaml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report file format (default: from the output extension)
        #[arg(short, long, value_enum)]
        format: Option<ReportOutputFormat>,

        /// Only print failures
        #[arg(short, long)]
        quiet: bool,
    },

    /// Parse a .json or .hjson file and print it as JSON
    Load {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the art pieces of one locale
    Show {
        #[arg(value_name = "LOCALE")]
        locale: String,

        /// Locales root directory (overrides config)
        #[arg(short, long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// List discovered locale catalogs
    Locales {
        /// Locales root directory (overrides config)
        #[arg(short, long, value_name = "DIR")]
        root: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>, root: Option<PathBuf>) -> Result<PipelineConfig> {
    let mut config = match path {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => PipelineConfig::load_default().context("loading art-locales.yaml")?,
    };
    if let Some(root) = root {
        config.locales_dir = root;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            root,
            locale,
            dry_run,
            allow_duplicates,
        } => {
            let pipeline = load_config(cli.config.as_ref(), root)?;
            let mut config = ConvertConfig::from_pipeline(&pipeline);
            if let Some(locales) = locale {
                config.locales = locales;
            }
            if allow_duplicates {
                config.duplicate_policy = DuplicatePolicy::LastWins;
            }
            config.dry_run = dry_run;

            println!(
                "Converting {} locale(s) under {}",
                config.locales.len(),
                config.locales_dir.display()
            );
            let summary = convert::run(&config).context("conversion aborted")?;
            convert::print_summary(&summary);
        }

        Commands::Validate {
            root,
            output,
            format,
            quiet,
        } => {
            let pipeline = load_config(cli.config.as_ref(), root)?;
            let config = ValidateConfig::from_pipeline(&pipeline);
            let validation = validate::validate_tree(&config)?;

            if !quiet || !validation.passed() {
                report::print_report(&validation);
            }
            if let Some(output_path) = output {
                report::save_report(&validation, output_path, format)?;
            }
            validation.into_result()?;
        }

        Commands::Load { file, output } => {
            let document = loader::load_document(&file)?;
            let json = convert::to_catalog_json(&document)?;
            match output {
                Some(output_path) => {
                    fs::write(&output_path, json)
                        .with_context(|| format!("writing {}", output_path.display()))?;
                    println!("Wrote {}", output_path.display());
                }
                None => print!("{}", json),
            }
        }

        Commands::Show { locale, root } => {
            let pipeline = load_config(cli.config.as_ref(), root)?;
            let path = pipeline.catalog_path(&locale);
            let catalog = loader::load_catalog(&path)?;
            ReportFormatter::new().print_catalog(&locale, &catalog);
        }

        Commands::Locales { root } => {
            let pipeline = load_config(cli.config.as_ref(), root)?;
            let files = validate::discover_locales(&pipeline.locales_dir, &pipeline.filename)?;
            println!(
                "{} locale catalog(s) under {}",
                files.len(),
                pipeline.locales_dir.display()
            );
            ReportFormatter::new().print_locales(&files);
        }
    }

    Ok(())
}
