//! MathOptFormat CLI
//!
//! Validates model documents against the MOF schema and prints the generated
//! schema documentation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mof_schema::{report, DocumentValidator, MofError, SchemaDocument};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mof")]
#[command(about = "Validate and document MathOptFormat models")]
struct Cli {
    /// Path to a MathOptFormat schema (defaults to the bundled schema)
    #[arg(short, long)]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a model file, or every *.json file in a directory
    Validate {
        /// Model file or directory of model files
        path: PathBuf,
    },

    /// Print the summary of the sets and functions supported by the schema
    Summarize {
        /// Validate every model in this directory before summarizing;
        /// any failure aborts without emitting the report
        #[arg(short, long)]
        models: Option<PathBuf>,
    },

    /// Render a README template, substituting the generated summary markers
    Readme {
        /// Template file containing the summary markers
        template: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if let MofError::Validation {
            document,
            violations,
        } = &e
        {
            eprintln!("{document} is not a valid MOF file. The errors are:");
            for violation in violations {
                eprintln!("  - {violation}");
            }
        } else {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), MofError> {
    let schema = match &cli.schema {
        Some(path) => SchemaDocument::from_path(path)?,
        None => SchemaDocument::bundled()?,
    };

    match cli.command {
        Commands::Validate { path } => {
            let validator = DocumentValidator::new(&schema)?;
            if path.is_dir() {
                let count = validator.validate_dir(&path)?;
                println!("Success! {count} file(s) conform to the MathOptFormat schema");
            } else {
                validator.validate_file(&path)?;
                println!(
                    "Success! {} conforms to the MathOptFormat schema",
                    path.display()
                );
            }
            Ok(())
        }

        Commands::Summarize { models } => {
            if let Some(dir) = models {
                let validator = DocumentValidator::new(&schema)?;
                validator.validate_dir(&dir)?;
            }
            println!("{}", report::summarize(&schema)?);
            Ok(())
        }

        Commands::Readme { template } => {
            let content = std::fs::read_to_string(&template)?;
            print!("{}", report::render_readme(&schema, &content)?);
            Ok(())
        }
    }
}
