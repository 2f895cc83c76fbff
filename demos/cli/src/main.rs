use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clinic_core::PasswordPolicy;
use clinic_forms::{
    evaluate_password_with, extract_date_string, extract_locked_field, extract_user_id,
    lock_deadline_text, normalize_gender, parse_disease_table_str, parse_lock_deadline,
    resolve_health_conditions,
};
use serde_json::{json, Value};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "clinic-cli",
    about = "Run the clinic form helpers over values and API responses."
)]
struct Args {
    /// Increase log detail (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a gender token.
    Gender { value: String },
    /// Show the password checklist.
    Password {
        value: String,
        /// Minimum password length.
        #[arg(long)]
        min_length: Option<usize>,
    },
    /// Resolve health conditions against a disease table response.
    Conditions {
        input: String,
        /// Path to the `/disease` JSON response.
        #[arg(short, long)]
        diseases: PathBuf,
    },
    /// Inspect a login response for user id and lock deadline.
    Login {
        /// Path to the login JSON response.
        #[arg(short, long)]
        response: PathBuf,
    },
    /// Find the first date-time in a piece of text.
    Date { text: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let output = match args.command {
        Command::Gender { value } => json!({ "gender": normalize_gender(Some(value.as_str())) }),
        Command::Password { value, min_length } => {
            let mut policy = PasswordPolicy::default();
            if let Some(min_length) = min_length {
                policy.min_length = min_length;
            }
            serde_json::to_value(evaluate_password_with(&value, &policy))?
        }
        Command::Conditions { input, diseases } => {
            let body = std::fs::read_to_string(&diseases)
                .with_context(|| format!("Could not read file {:?}", diseases))?;
            let table = parse_disease_table_str(&body)
                .with_context(|| format!("Could not parse disease table {:?}", diseases))?;
            tracing::info!(diseases = table.len(), "loaded disease table");
            json!({ "resolved": resolve_health_conditions(&input, &table) })
        }
        Command::Login { response } => {
            let body = std::fs::read_to_string(&response)
                .with_context(|| format!("Could not read file {:?}", response))?;
            let value: Value = serde_json::from_str(&body)
                .with_context(|| format!("Invalid JSON in {:?}", response))?;
            let deadline = lock_deadline_text(&value);
            json!({
                "userId": extract_user_id(&value),
                "lockedField": extract_locked_field(&value),
                "lockDeadline": &deadline,
                "lockDeadlineParsed": deadline
                    .as_deref()
                    .and_then(parse_lock_deadline)
                    .map(|at| at.to_string())
            })
        }
        Command::Date { text } => json!({ "date": extract_date_string(&text) }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,clinic_cli={level},clinic_forms={level}",
            level = level.to_string().to_lowercase()
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
