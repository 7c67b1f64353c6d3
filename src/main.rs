use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use graph_models::models::{AnyDeviceConfiguration, AnyDirectoryObject, AnyEntity, AnyRecipient};
use graph_models::{Payload, roundtrip};
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode and check Microsoft Graph JSON payloads", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode one payload and print its normalized re-encoding
    Decode {
        /// JSON file, or `-` for stdin
        #[arg(value_name = "PAYLOAD")]
        payload: String,

        /// Print a round-trip report instead of the payload
        #[arg(long)]
        summary: bool,
    },
    /// Round-trip every *.json file below a directory
    Check {
        #[arg(value_name = "DIR")]
        root: Utf8PathBuf,

        /// Print the per-file reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the discriminators each polymorphic type dispatches on
    Types,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(payload: &str) -> Result<String> {
    if payload == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(payload).with_context(|| format!("Failed to read {}", payload))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Decode { payload, summary } => {
            let text = read_input(&payload)?;
            if summary {
                let report = roundtrip::check_payload(&text)?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let decoded: Payload = text
                    .parse()
                    .with_context(|| format!("Failed to decode {}", payload))?;
                println!("{}", decoded.to_json_pretty()?);
            }
        }
        Command::Check { root, json } => {
            let reports = roundtrip::check_tree(&root)?;
            let failed = reports.iter().filter(|r| !r.passed()).count();
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for r in &reports {
                    match (&r.report, &r.error) {
                        (Some(report), _) if report.stable => {
                            println!("ok      {} ({})", r.path, report.type_name)
                        }
                        (Some(report), _) => println!("UNSTABLE {} ({})", r.path, report.type_name),
                        (None, error) => println!(
                            "FAILED  {}: {}",
                            r.path,
                            error.as_deref().unwrap_or("unknown error")
                        ),
                    }
                }
            }
            if failed > 0 {
                bail!("{} of {} payloads failed the round trip", failed, reports.len());
            }
        }
        Command::Types => {
            let unions: [(&str, &[&str]); 4] = [
                ("AnyEntity", AnyEntity::DISCRIMINATORS),
                ("AnyDirectoryObject", AnyDirectoryObject::DISCRIMINATORS),
                ("AnyDeviceConfiguration", AnyDeviceConfiguration::DISCRIMINATORS),
                ("AnyRecipient", AnyRecipient::DISCRIMINATORS),
            ];
            for (name, discriminators) in unions {
                println!("{}", name);
                for d in discriminators {
                    println!("  {}", d);
                }
            }
        }
    }
    Ok(())
}
