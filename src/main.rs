use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use feriados_ec::configuration::Configuration;
use feriados_ec::eligibility::withdrawaldate::WithdrawalDate;
use feriados_ec::logger;
use feriados_ec::{resolve, Province};

#[derive(Debug, Parser)]
#[command(name = "feriados-ec")]
#[command(about = "Ecuadorian holiday calendar and Bono de Desarrollo Humano date checks")]
struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every holiday observed in a year.
    List {
        #[arg(long)]
        year: i32,

        #[arg(long, default_value = "ON", help = "ISO 3166-2:EC province code")]
        province: Province,

        #[arg(long, help = "Print the calendar as a JSON object")]
        json: bool,
    },
    /// Tell whether a withdrawal date (YYYY-MM-DD) is a holiday.
    Check {
        #[arg(long)]
        date: WithdrawalDate,

        #[arg(long, help = "ISO 3166-2:EC province code, overrides the configuration")]
        province: Option<Province>,

        #[arg(long, help = "Ask the online holiday API instead of the local calendar")]
        online: bool,

        #[arg(long, help = "Path to a JSON configuration file")]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Command::List { year, province, json } => {
            let holidays = resolve(year, province)
                .with_context(|| format!("cannot resolve holidays for {} in {}", year, province))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&holidays)?);
            } else {
                for (date, label) in &holidays {
                    println!("{}  {}", date.format("%Y-%m-%d %a"), label);
                }
            }
        }
        Command::Check { date, province, online, config } => {
            let mut configuration = match config {
                Some(path) => Configuration::from_reader(&path)
                    .with_context(|| format!("cannot read configuration {}", path.display()))?,
                None => Configuration::default(),
            };
            if let Some(province) = province {
                configuration = configuration.with_province(province);
            }
            if online {
                configuration = configuration.online();
            }

            let oracle = configuration.build_oracle()?;
            let holiday = oracle
                .is_holiday(date.date())
                .with_context(|| format!("cannot tell whether {} is a holiday", date))?;
            tracing::info!(%date, holiday, "check finished");
            if holiday {
                println!("Feriado");
            } else {
                println!("No feriado");
            }
        }
    }

    Ok(())
}
