//! daypicker CLI entry point.

use anyhow::Result;
use clap::Parser;
use daypicker_cli::cli::{Cli, Commands, OutputFormat};
use daypicker_cli::commands::{apply_keys, navigate};
use daypicker_cli::config::build_picker;
use daypicker_cli::output::{json, pretty, PickerSnapshot, Report};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daypicker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut picker = build_picker(&cli.picker)?;

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => match cli.format {
            OutputFormat::Json => {
                println!("{}", json::format_json(&PickerSnapshot::capture(&picker)))
            }
            OutputFormat::Pretty => println!("{}", pretty::format_picker(&picker)),
        },
        Commands::Navigate { actions } => {
            let results = navigate(&mut picker, &actions);
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", json::format_json(&Report::new(results, &picker)))
                }
                OutputFormat::Pretty => println!(
                    "{}\n\n{}",
                    pretty::format_navigation(&results),
                    pretty::format_picker(&picker)
                ),
            }
        }
        Commands::Keys { focus, keys } => {
            let outcomes = apply_keys(&mut picker, focus, &keys);
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", json::format_json(&Report::new(outcomes, &picker)))
                }
                OutputFormat::Pretty => {
                    for (key, outcome) in keys.iter().zip(&outcomes) {
                        println!("{key:?}: {}", pretty::format_key_outcome(outcome));
                    }
                    println!("\n{}", pretty::format_picker(&picker));
                }
            }
        }
        Commands::Click { date } => {
            let activation = picker.click_day(date);
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", json::format_json(&Report::new(activation, &picker)))
                }
                OutputFormat::Pretty => println!(
                    "{}\n\n{}",
                    pretty::format_activation(activation.as_ref()),
                    pretty::format_picker(&picker)
                ),
            }
        }
    }

    Ok(())
}
