use clap::Parser;
use decisions::application::{
    demo, init, ConfigService, ExportService, NewDecision, RecordService, ReviewService,
};
use decisions::cli::{format_entry_list, format_pending, format_score, Cli, Commands};
use decisions::domain::{markdown, Journal};
use decisions::error::Result;
use decisions::infrastructure::Config;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the journal file: --file, then DECISIONS_FILE, then decisions.toml
fn journal_path(cwd: &Path, file: Option<PathBuf>, config: &Config) -> PathBuf {
    let path = file.unwrap_or_else(|| config.get_journal_file());
    cwd.join(path)
}

/// Load config from the working directory and open the journal it points at
fn open_journal(cwd: &Path, file: Option<PathBuf>) -> Result<(Config, Journal)> {
    let config = Config::load_from_dir(cwd)?;
    let journal = Journal::open(journal_path(cwd, file, &config))?;
    Ok((config, journal))
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { path } => {
            let journal = init::init(&cwd.join(path))?;
            println!("Initialized decision journal at {}", journal.display());
        }
        Commands::Config { key, value, list } => {
            run_config(ConfigService::new(cwd), key, value, list)?;
        }
        Commands::Demo => {
            println!("Decision Journal Template Generator");
            println!("More frameworks at: https://keeprule.com\n");
            print!("{}", markdown::render(&demo::sample_entry()));
        }
        Commands::New {
            title,
            context,
            expected,
            feeling,
        } => {
            let (_, journal) = open_journal(&cwd, cli.file)?;
            let mut service = RecordService::new(journal);
            let number = service.add(NewDecision {
                title,
                context,
                expected_outcome: expected,
                emotional_state: feeling,
            })?;
            println!("Recorded decision #{}", number);
        }
        Commands::AddOption {
            number,
            name,
            pros,
            cons,
        } => {
            let (_, journal) = open_journal(&cwd, cli.file)?;
            RecordService::new(journal).add_option(number, &name, pros, cons)?;
            println!("Added option '{}' to decision #{}", name, number);
        }
        Commands::Choose {
            number,
            option,
            reasoning,
            confidence,
        } => {
            let (_, journal) = open_journal(&cwd, cli.file)?;
            RecordService::new(journal).choose(number, &option, &reasoning, confidence)?;
            println!(
                "Decision #{}: chose '{}' ({} confident)",
                number,
                option,
                markdown::format_percent(confidence)
            );
        }
        Commands::Expect { number, outcome } => {
            let (_, journal) = open_journal(&cwd, cli.file)?;
            RecordService::new(journal).set_expected_outcome(number, &outcome)?;
            println!("Decision #{}: expected outcome updated", number);
        }
        Commands::Review {
            number,
            outcome,
            quality,
            lessons,
        } => {
            let (_, journal) = open_journal(&cwd, cli.file)?;
            ReviewService::new(journal).review(number, &outcome, &quality, &lessons)?;
            println!("Reviewed decision #{} as {}", number, quality);
        }
        Commands::List => {
            let (_, journal) = open_journal(&cwd, cli.file)?;
            println!("{}", format_entry_list(journal.entries()).trim_end());
        }
        Commands::Show { number } => {
            let (_, journal) = open_journal(&cwd, cli.file)?;
            print!("{}", ExportService::new(journal).markdown(number)?);
        }
        Commands::Export { json, dir } => {
            let (_, journal) = open_journal(&cwd, cli.file)?;
            let service = ExportService::new(journal);
            if json {
                println!("{}", service.json()?);
            } else if let Some(dir) = dir {
                let written = service.write_markdown_dir(&cwd.join(dir))?;
                println!("Exported {} decision(s)", written.len());
            } else {
                print!("{}", service.markdown_all());
            }
        }
        Commands::Pending { days } => {
            let (config, journal) = open_journal(&cwd, cli.file)?;
            let days = match days {
                Some(days) => days,
                None => config.get_review_after_days()?,
            };
            let service = ReviewService::new(journal);
            let pending = service.pending(days)?;
            println!("{}", format_pending(&pending, days).trim_end());
        }
        Commands::Score => {
            let (_, journal) = open_journal(&cwd, cli.file)?;
            let service = ReviewService::new(journal);
            println!(
                "{}",
                format_score(service.calibration(), service.reviewed_count())
            );
        }
    }

    Ok(())
}

fn run_config(
    service: ConfigService,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<()> {
    if list {
        let config = service.list()?;
        println!("journal_file = {}", config.journal_file.display());
        println!("review_after_days = {}", config.review_after_days);
        Ok(())
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
        } else {
            println!("{}", service.get(&k)?);
        }
        Ok(())
    } else {
        println!("Usage: decisions config [--list | <key> [<value>]]");
        println!("Valid keys: journal_file, review_after_days");
        Ok(())
    }
}
