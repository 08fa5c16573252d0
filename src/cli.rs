use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cards::Hand;
use crate::chart::StrategyIndex;
use crate::config::{Config, DEFAULT_DEBOUNCE_MS};
use crate::display::{render_cards, render_results, render_table, render_unresolvable, PROMPT_MESSAGE};
use crate::error::ChartResult;
use crate::rank_shape::classify;
use crate::search::search;
use crate::session::{load_failure_message, run_interactive};
use crate::suit_assign::assign;
use crate::suit_pattern::SuitPattern;

#[derive(Parser)]
#[command(name = "plochart")]
#[command(about = "Look up PLO preflop chart strategies by rank combination")]
#[command(version)]
struct Cli {
    /// Chart data file (JSON with hands, index and patterns)
    #[arg(long, global = true, env = "PLO_CHART_DATA")]
    data: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Quiet period for interactive input, in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find rank combinations containing the given ranks (e.g. "aa", "AKQJ")
    Search {
        /// Rank characters; four characters ask for an exact match
        query: String,
    },

    /// Show the rank shape of a hand (e.g. AAKQ -> AABC)
    Classify {
        /// Four ranks, e.g. AAKQ
        hand: String,
    },

    /// Show the suit assignment for a pattern and hand
    Assign {
        /// Pattern name (mono, double, trip_high, ...) or id 1-7
        pattern: String,
        /// Four ranks, e.g. AAKQ
        hand: String,
    },

    /// Print the full shape x pattern assignment table
    Table,

    /// Type queries line by line; "clear" resets, ":q" quits
    Interactive,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn fail(message: String) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), message);
    process::exit(1);
}

fn load_chart(config: &Config) -> StrategyIndex {
    match StrategyIndex::load(&config.data_path) {
        Ok(chart) => chart,
        Err(e) => {
            eprintln!("{}", load_failure_message(&e.to_string()));
            process::exit(1);
        }
    }
}

fn run_search(config: &Config, query: &str) {
    if query.trim().is_empty() {
        println!("{}", PROMPT_MESSAGE.dimmed());
        return;
    }
    let chart = load_chart(config);
    let matches = search(query, &chart);
    println!();
    println!(
        "  {} {} for \"{}\"",
        matches.len().to_string().bold(),
        if matches.len() == 1 { "match" } else { "matches" },
        query.trim()
    );
    println!();
    println!("{}", render_results(&matches, &chart));
    println!();
}

fn run_classify(hand: &str) -> ChartResult<()> {
    let hand = Hand::parse(hand)?;
    println!("{}  {}", hand.to_string().bold(), classify(&hand));
    Ok(())
}

fn run_assign(pattern: &str, hand: &str) -> ChartResult<()> {
    let pattern: SuitPattern = pattern.parse()?;
    let hand = Hand::parse(hand)?;
    match assign(pattern, &hand) {
        Ok(assignment) => {
            let suits: Vec<&str> = assignment.suits().iter().map(|s| s.name()).collect();
            println!(
                "{}  {}  {}  ({})",
                pattern.name().bold(),
                render_cards(&hand, &assignment),
                assignment.code(),
                suits.join(", ")
            );
        }
        Err(e) => {
            debug!(error = %e, "assignment failed");
            println!("{}  {}", pattern.name().bold(), render_unresolvable(&hand));
            println!("{}", e.to_string().red());
        }
    }
    Ok(())
}

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::new(cli.data, cli.debounce_ms, !cli.no_color);
    if !config.color {
        colored::control::set_override(false);
    }
    debug!(?config, "configuration");

    let result = match cli.command {
        Commands::Search { query } => {
            run_search(&config, &query);
            Ok(())
        }
        Commands::Classify { hand } => run_classify(&hand),
        Commands::Assign { pattern, hand } => run_assign(&pattern, &hand),
        Commands::Table => {
            println!("{}", render_table());
            Ok(())
        }
        Commands::Interactive => {
            if let Err(e) = run_interactive(&config) {
                fail(format!("terminal I/O failed: {}", e));
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        fail(e.to_string());
    }
}
