use clap::{Parser, Subcommand};
use salut_core::config::{self, Config};
use salut_core::greet::greet;
use serde::Serialize;

/// Salut command-line interface
#[derive(Parser)]
#[command(name = "salut", author, version, about = "Salut CLI for printing greetings", long_about = None)]
struct Cli {
    /// Subcommands for the CLI
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a greeting for a name
    Greet {
        /// Name to greet (falls back to the config file, then "World")
        name: Option<String>,
        /// Greeting word (falls back to the config file, then "Hello")
        #[arg(long)]
        greeting: Option<String>,
        /// Output JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Run diagnostic checks and output a report
    Doctor {
        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct GreetingLine<'a> {
    greeting: &'a str,
    name: &'a str,
    result: &'a str,
}

// The config file is optional; only an existing-but-broken file is an error.
fn load_optional_config() -> Result<Config, String> {
    if !config::config_path().exists() {
        return Ok(Config::default());
    }
    let (cfg, path) = config::load_config()?;
    cfg.validate()
        .map_err(|e| format!("config validation failed ({}): {}", path.display(), e))?;
    Ok(cfg)
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Greet {
            name,
            greeting,
            json,
        }) => {
            let cfg = match load_optional_config() {
                Ok(cfg) => cfg,
                Err(err) => {
                    eprintln!("Failed to load config: {}", err);
                    std::process::exit(1);
                }
            };
            let greeting = greeting
                .as_deref()
                .unwrap_or_else(|| cfg.greeting_or_default());
            let name = name.as_deref().unwrap_or_else(|| cfg.name_or_default());
            let result = greet(greeting, name);
            if json {
                let line = GreetingLine {
                    greeting,
                    name,
                    result: &result,
                };
                match serde_json::to_string_pretty(&line) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize greeting: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", result);
            }
        }
        Some(Commands::Doctor { json }) => {
            // Invoke the doctor checks from salut_core and print the report
            let report = salut_core::doctor::doctor_check();
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("Failed to serialize doctor report: {}", e),
                }
            } else {
                println!("doctor: {}", report.overall);
                println!("version: {}", report.version);
                for check in report.checks {
                    println!("- [{}] {}: {}", check.status, check.id, check.summary);
                }
            }
        }
        None => {
            println!("No subcommand provided. Try `salut greet`.");
        }
    }
}
