//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "decisions")]
#[command(about = "Decision journal: record choices now, review them later", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal file (overrides decisions.toml and DECISIONS_FILE)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create decisions.toml and an empty journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record a new decision
    New {
        /// Short title of the decision
        title: String,

        /// Background for the decision
        #[arg(short, long, default_value = "")]
        context: String,

        /// What you expect to happen
        #[arg(short, long, default_value = "")]
        expected: String,

        /// How you feel while deciding
        #[arg(long, default_value = "")]
        feeling: String,
    },

    /// Add an option to a decision
    #[command(name = "option")]
    AddOption {
        /// Decision number (see `list`)
        number: usize,

        /// Option name
        name: String,

        /// Argument in favour (repeatable)
        #[arg(long = "pro")]
        pros: Vec<String>,

        /// Argument against (repeatable)
        #[arg(long = "con")]
        cons: Vec<String>,
    },

    /// Record which option was chosen
    Choose {
        /// Decision number
        number: usize,

        /// Chosen option name
        option: String,

        /// Why this option
        #[arg(short, long, default_value = "")]
        reasoning: String,

        /// Confidence between 0 and 1
        #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
        confidence: f64,
    },

    /// Set what you expect a decision to lead to
    Expect {
        /// Decision number
        number: usize,

        /// Expected outcome
        outcome: String,
    },

    /// Review how a decision turned out (replaces any earlier review)
    Review {
        /// Decision number
        number: usize,

        /// What actually happened
        #[arg(short, long)]
        outcome: String,

        /// Decision quality, e.g. good or bad
        #[arg(short, long)]
        quality: String,

        /// What you learned
        #[arg(short, long, default_value = "")]
        lessons: String,
    },

    /// List recorded decisions
    List,

    /// Print one decision as Markdown
    Show {
        /// Decision number
        number: usize,
    },

    /// Export every decision as Markdown or JSON
    Export {
        /// Print the JSON array instead of Markdown
        #[arg(long)]
        json: bool,

        /// Write one Markdown file per decision into this directory
        #[arg(short, long, conflicts_with = "json")]
        dir: Option<PathBuf>,
    },

    /// List unreviewed decisions older than the review window
    Pending {
        /// Review window in days (default: review_after_days from config)
        #[arg(short, long)]
        days: Option<i64>,
    },

    /// Share of reviewed decisions judged "good"
    Score,

    /// Print a sample decision as Markdown
    Demo,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
