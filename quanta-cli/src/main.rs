use clap::{Parser, Subcommand, ValueEnum};
use quanta_core::{catalog, ConjugationType, Particle, ParticleRegistry, ParticleReport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "quanta")]
#[command(about = "Quanta - a pedagogical model of subatomic particles", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered preset identifiers
    List,
    /// Show presets (all of them when no id is given)
    Show {
        ids: Vec<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Resolve undetermined conjugations before rendering
        #[arg(long, value_enum)]
        resolve: Option<Resolution>,
    },
    /// Show every preset, then fix the electron neutrino as Dirac and show it again
    Demo {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Resolution {
    /// Dirac: distinct antiparticle
    Distinct,
    /// Majorana: its own antiparticle
    #[value(name = "self")]
    SelfConjugate,
}

impl From<Resolution> for ConjugationType {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Distinct => ConjugationType::Distinct,
            Resolution::SelfConjugate => ConjugationType::SelfConjugate,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "quanta_cli=debug,quanta_core=debug"
    } else {
        "quanta_cli=info,quanta_core=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ParticleRegistry::with_presets();

    match cli.command {
        Commands::List => {
            for id in registry.ids() {
                println!("{}", id);
            }
        }
        Commands::Show {
            ids,
            format,
            resolve,
        } => {
            let ids = if ids.is_empty() {
                registry.ids().map(str::to_string).collect()
            } else {
                ids
            };
            let mut particles = Vec::with_capacity(ids.len());
            for id in &ids {
                let mut particle = registry.create(id)?;
                if let Some(resolution) = resolve {
                    if !particle.conjugation().is_resolved() {
                        particle.resolve_conjugation(resolution.into())?;
                    }
                }
                particles.push(particle);
            }
            print_reports(&particles, format)?;
        }
        Commands::Demo { format } => {
            let mut particles = registry
                .ids()
                .map(|id| registry.create(id))
                .collect::<Result<Vec<_>, _>>()?;
            let mut neutrino = registry.create(catalog::ELECTRON_NEUTRINO)?;
            neutrino.set_as_dirac()?;
            tracing::info!(particle = neutrino.name(), "fixed neutrino hypothesis as Dirac");
            if format == Format::Text {
                print_reports(&particles, format)?;
                println!("--- neutrino hypothesis fixed: Dirac (distinct) ---");
                println!();
                print_reports(std::slice::from_ref(&neutrino), format)?;
            } else {
                particles.push(neutrino);
                print_reports(&particles, format)?;
            }
        }
    }

    Ok(())
}

fn print_reports(particles: &[Particle], format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let reports: Vec<ParticleReport> =
        particles.iter().map(ParticleReport::from_particle).collect();
    match format {
        Format::Text => {
            for report in &reports {
                println!("{}", report.render());
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }
    Ok(())
}
