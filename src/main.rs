use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wellspring::app::Wellness;
use wellspring::config::AppConfig;
use wellspring::db::Database;
use wellspring::environment::playback::{AmbientMix, Volume};
use wellspring::environment::{self, Route};
use wellspring::journal::{self, prompts};
use wellspring::models::*;
use wellspring::report;

#[derive(Parser)]
#[command(name = "wellspring")]
#[command(about = "Pain tracking, journaling and calming environments, kept on this device")]
struct Cli {
    /// Database file (overrides the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log and review pain check-ins
    #[command(subcommand)]
    Pain(PainCommand),
    /// Write and read journal entries
    #[command(subcommand)]
    Journal(JournalCommand),
    /// Browse guided environments
    #[command(subcommand)]
    Env(EnvCommand),
    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum PainCommand {
    /// Record a check-in
    Log(LogArgs),
    /// Record what helped, on the most recent check-in
    Helped {
        /// Relief strategy, optionally ranked 1-3 (e.g. `Heat=3`)
        #[arg(short, long = "strategy", value_parser = parse_strategy)]
        strategies: Vec<(String, Option<u8>)>,
    },
    /// List check-ins, newest first
    History,
    /// Averages, top relief strategies and the 14-day calendar
    Insights,
    /// List the pain types, context factors and relief strategies to pick from
    Choices,
}

#[derive(Args)]
struct LogArgs {
    /// Overall intensity, 0-10
    #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u8).range(0..=10))]
    intensity: u8,
    #[arg(short, long, value_parser = parse_quality)]
    quality: Vec<PainQuality>,
    #[arg(short, long)]
    location: Vec<String>,
    #[arg(short, long)]
    context: Vec<String>,
    #[arg(long, default_value = "0", value_parser = score)]
    activity: u8,
    #[arg(long, default_value = "0", value_parser = score)]
    mood: u8,
    #[arg(long, default_value = "0", value_parser = score)]
    sleep: u8,
    #[arg(long, value_parser = score)]
    concentration: Option<u8>,
    #[arg(short, long, default_value = "")]
    notes: String,
    /// Hours slept last night, 0-12 in half-hour steps
    #[arg(long, value_parser = parse_sleep_hours)]
    sleep_hours: Option<f32>,
    #[arg(long, value_parser = score)]
    stress: Option<u8>,
    #[arg(long, value_parser = score)]
    fatigue: Option<u8>,
    #[arg(long, value_parser = score)]
    brain_fog: Option<u8>,
    #[arg(long)]
    flare: bool,
}

#[derive(Subcommand)]
enum JournalCommand {
    /// Save an entry
    Write {
        text: String,
        /// Put a micro-prompt (see `journal prompts`) ahead of the text
        #[arg(short, long)]
        prompt: Option<usize>,
    },
    /// List entries, newest first
    List,
    /// List the micro-prompts with their numbers
    Prompts,
}

#[derive(Subcommand)]
enum EnvCommand {
    /// List environments
    List,
    /// Show what a session for an environment would play
    Open {
        id: String,
        /// Ambient volume, 0-100
        #[arg(short, long)]
        volume: Option<u8>,
        /// Show the mix while the body scan narration plays
        #[arg(long)]
        body_scan: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the current settings
    Show,
    /// Change settings and write them to the config file
    Set(SetArgs),
}

#[derive(Args)]
struct SetArgs {
    /// Ambient volume a session starts at, 0-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    volume: Option<u8>,
    /// Keep pain check-ins between runs
    #[arg(long)]
    persist_pain_log: Option<bool>,
    /// Database file
    #[arg(long)]
    database: Option<PathBuf>,
}

fn score(s: &str) -> Result<u8, String> {
    match s.parse::<u8>() {
        Ok(v) if v <= 5 => Ok(v),
        _ => Err(format!("'{}' is not a score from 0 to 5", s)),
    }
}

/// Hours of sleep, rounded to the nearest half hour.
fn parse_sleep_hours(s: &str) -> Result<f32, String> {
    match s.parse::<f32>() {
        Ok(h) if h.is_finite() && (0.0..=12.0).contains(&h) => Ok((h * 2.0).round() / 2.0),
        _ => Err(format!("'{}' is not a number of hours from 0 to 12", s)),
    }
}

fn parse_quality(s: &str) -> Result<PainQuality, String> {
    PainQuality::from_str(s).ok_or_else(|| {
        let known: Vec<&str> = PainQuality::ALL.iter().map(|q| q.as_str()).collect();
        format!("unknown pain type '{}', expected one of: {}", s, known.join(", "))
    })
}

fn parse_strategy(s: &str) -> Result<(String, Option<u8>), String> {
    match s.rsplit_once('=') {
        Some((label, rank)) => match rank.trim().parse::<u8>() {
            Ok(r @ 1..=3) => Ok((label.trim().to_string(), Some(r))),
            _ => Err(format!("rank for '{}' must be 1, 2 or 3", label.trim())),
        },
        None => Ok((s.trim().to_string(), None)),
    }
}

/// Initialize tracing on stderr so stdout carries only reports
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "wellspring=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_app(cli_db: Option<PathBuf>, config: AppConfig) -> Result<Wellness<Database>> {
    let db = match cli_db.or_else(|| config.database_path.clone()) {
        Some(path) => Database::open(path)?,
        None => Database::open_default()?,
    };
    db.migrate()?;
    Wellness::open(db, config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::load();

    match cli.command {
        Commands::Pain(command) => {
            let mut app = open_app(cli.db, config)?;
            run_pain(&mut app, command)?;
        }
        Commands::Journal(command) => {
            let mut app = open_app(cli.db, config)?;
            run_journal(&mut app, command)?;
        }
        Commands::Env(command) => run_env(&config, command),
        Commands::Config(command) => run_config(config, command)?,
    }

    Ok(())
}

fn run_pain(app: &mut Wellness<Database>, command: PainCommand) -> Result<()> {
    match command {
        PainCommand::Log(args) => {
            let input = RecordPainInput {
                intensity: args.intensity,
                location: args.location,
                quality: args.quality,
                impact: Impact {
                    activity: args.activity,
                    mood: args.mood,
                    sleep: args.sleep,
                    concentration: args.concentration,
                },
                context: args.context,
                notes: args.notes,
                wellbeing: Wellbeing {
                    sleep_hours: args.sleep_hours,
                    stress: args.stress,
                    fatigue: args.fatigue,
                    brain_fog: args.brain_fog,
                    flare: args.flare.then_some(true),
                    ..Wellbeing::default()
                },
            };
            let entry = app.record_pain(input)?;
            println!("Saved. Thank you for checking in with your body.\n");
            print!("{}", report::render_pain_entry(&entry));
            println!("\nWhat helped ease your pain today? Try: {}", RELIEF_SUGGESTIONS.join(", "));
        }
        PainCommand::Helped { strategies } => {
            let mut relief = ReliefInput::default();
            for (label, rank) in strategies {
                if let Some(rank) = rank {
                    relief.effectiveness.insert(label.clone(), rank);
                }
                relief.helped.push(label);
            }
            match app.amend_most_recent(relief)? {
                Some(entry) => print!("{}", report::render_pain_entry(&entry)),
                None => println!("Nothing to update yet. Log a check-in first."),
            }
        }
        PainCommand::History => print!("{}", report::render_pain_history(app.pain().entries())),
        PainCommand::Insights => print!("{}", report::render_insights(&app.insights())),
        PainCommand::Choices => {
            let qualities: Vec<&str> = PainQuality::ALL.iter().map(|q| q.as_str()).collect();
            println!("Pain types: {}", qualities.join(", "));
            println!("Context: {}", CONTEXT_SUGGESTIONS.join(", "));
            println!("Relief: {}", RELIEF_SUGGESTIONS.join(", "));
        }
    }
    Ok(())
}

fn run_journal(app: &mut Wellness<Database>, command: JournalCommand) -> Result<()> {
    match command {
        JournalCommand::Write { text, prompt } => {
            let draft = match prompt {
                Some(index) => {
                    let prompt = prompts::prompt(index)
                        .ok_or_else(|| anyhow::anyhow!("No prompt number {}", index))?;
                    journal::insert_prompt_into_draft(&text, prompt)
                }
                None => text,
            };
            match app.save_journal_entry(&draft)? {
                Some(_) => print!("{}", report::render_journal(app.journal().entries())),
                None => println!("Write a few lines first. Anything is welcome."),
            }
        }
        JournalCommand::List => print!("{}", report::render_journal(app.journal().entries())),
        JournalCommand::Prompts => {
            for (index, prompt) in journal::MICRO_PROMPTS.iter().enumerate() {
                println!("{:>3}. {}", index, prompt);
            }
        }
    }
    Ok(())
}

fn run_env(config: &AppConfig, command: EnvCommand) {
    match command {
        EnvCommand::List => {
            for env in environment::ENVIRONMENTS {
                let scenery = if env.video.is_some() { "video" } else { "still" };
                println!("{:>3}. {} ({})", env.id, env.name, scenery);
            }
        }
        EnvCommand::Open {
            id,
            volume,
            body_scan,
        } => match environment::resolve_route(&id) {
            Route::Home => println!("No environment '{}'. Back to the start.", id),
            Route::Session(env) => {
                let mut mix = AmbientMix::new(Volume::new(volume.unwrap_or(config.default_volume)));
                mix.ducked = body_scan;
                println!("{}", env.name);
                println!("  audio: {} (looping)", env.audio);
                match env.video {
                    Some(video) => println!("  video: {} (looping, muted)", video),
                    None => println!("  image: {}", env.image),
                }
                println!("  volume: {}% (gain {:.2})", mix.level.level(), mix.gain());
            }
        },
    }
}

fn apply_settings(mut config: AppConfig, args: SetArgs) -> AppConfig {
    if let Some(volume) = args.volume {
        config.default_volume = volume;
    }
    if let Some(persist) = args.persist_pain_log {
        config.persist_pain_log = persist;
    }
    if let Some(path) = args.database {
        config.database_path = Some(path);
    }
    config
}

fn run_config(config: AppConfig, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => println!("{}", serde_json::to_string_pretty(&config)?),
        ConfigCommand::Set(args) => {
            let config = apply_settings(config, args);
            config.save()?;
            tracing::info!("Saved settings");
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
