//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::app::api::{self, ScaffoldOptions};
use crate::app::logging;
use crate::domain::AppError;

const GREETING: &str = "Let me scaffold a polymer component template for you!";

#[derive(Parser)]
#[command(name = "polygulp")]
#[command(version)]
#[command(
    about = "Scaffold a Polymer component with a gulp build pipeline",
    long_about = None
)]
struct Cli {
    /// Output directory (defaults to the current directory)
    dir: Option<PathBuf>,
    /// Skip npm/bower install after scaffolding
    #[arg(long)]
    skip_install: bool,
    /// Read answers from a TOML file instead of prompting
    #[arg(long, value_name = "FILE")]
    answers: Option<PathBuf>,
    /// Render from a template directory instead of the built-in templates
    #[arg(long, value_name = "DIR")]
    templates: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run_scaffold(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_scaffold(cli: Cli) -> Result<(), AppError> {
    println!("{}", GREETING);

    let options = ScaffoldOptions {
        skip_install: cli.skip_install,
        answers: cli.answers,
        templates: cli.templates,
    };
    let outcome = match cli.dir {
        Some(dir) => api::scaffold_at(dir, &options)?,
        None => api::scaffold(&options)?,
    };

    for file in &outcome.files {
        println!("   create {}", file.display());
    }
    println!(
        "✅ Scaffolded {} at {}",
        outcome.config.component_name(),
        outcome.root.display()
    );

    if api::install(&outcome)? {
        println!("✅ Installed npm and bower dependencies");
    } else {
        println!("Skipped install. Run `npm install && bower install` when ready.");
    }
    Ok(())
}
