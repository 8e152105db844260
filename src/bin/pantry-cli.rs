#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use pantry_scheduler::{
    config::{export_config_json, load_config_from_file, LocationConfig},
    io,
    model::{weekday_name, Roster},
    scheduler::Scheduler,
};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planification des permanences bénévoles
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Configuration JSON des lieux (référence intégrée par défaut)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning à partir d'un CSV d'étudiants
    Schedule {
        /// header `name,weekly_hours,availability`
        #[arg(long)]
        students: String,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Export CSV des manques d'effectif
        #[arg(long)]
        gaps_csv: Option<String>,
    },

    /// Vérifier la configuration des lieux
    CheckConfig,

    /// Écrire la configuration courante en JSON (point de départ pour l'éditer)
    ExportConfig {
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let config = match &cli.config {
        Some(path) => {
            load_config_from_file(path).with_context(|| format!("loading config {path}"))?
        }
        None => LocationConfig::reference(),
    };

    let code = match cli.cmd {
        Commands::Schedule {
            students,
            out_json,
            out_csv,
            gaps_csv,
        } => {
            let mut roster = Roster::new();
            let count = io::import_students_csv(&students, &mut roster)
                .with_context(|| format!("importing {students}"))?;
            let scheduler = Scheduler::from_roster(roster, config);
            let report = scheduler.generate_schedule()?;

            if let Some(path) = out_json {
                io::export_schedule_json(path, &report)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &report.schedule)?;
            }
            if let Some(path) = gaps_csv {
                io::export_gaps_csv(path, &report.gaps)?;
            }

            println!("{count} student(s) loaded");
            for location in report.schedule.locations() {
                println!("{}:", location.location);
                for day in &location.days {
                    let shifts = day
                        .shifts
                        .iter()
                        .map(|s| format!("{} ({} - {})", s.student_name, s.start, s.end))
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("  {}: {}", weekday_name(day.weekday), shifts);
                }
            }

            if report.is_fully_staffed() {
                0
            } else {
                for gap in &report.gaps {
                    eprintln!("{gap}");
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::CheckConfig => {
            config.validate()?;
            println!("OK: {} location(s)", config.locations().len());
            0
        }
        Commands::ExportConfig { out } => {
            export_config_json(&out, &config)?;
            0
        }
    };

    std::process::exit(code);
}
