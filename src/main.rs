//! Wordle Filter - CLI
//!
//! Lists the words that fit your Wordle feedback, from prompts, flags or a TUI.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;
use wordle_filter::{
    commands::{run_filter, run_simple},
    config::{Config, DEFAULT_LOG_FILE, DictionarySettings, LogSettings},
    dictionary::{
        Dictionary, get_dictionary,
        source::{DEFAULT_WORD_LIST_URL, SourceLocation},
    },
    generator::Enumeration,
    input::{FeedbackSource, PromptFeedback, RawFeedback, StaticFeedback},
    output::print_filter_result,
    parser::{DEFAULT_PLACEHOLDER, parse_placeholder},
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "List every word consistent with your Wordle feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Upstream word list to refresh the cache from: an http(s) URL or a file path
    #[arg(long, global = true, default_value = DEFAULT_WORD_LIST_URL)]
    source: String,

    /// Directory holding the cached word list and its revalidation token
    #[arg(long, global = true, default_value = ".")]
    cache_dir: PathBuf,

    /// Use the cached word list without refreshing it
    #[arg(long, global = true)]
    offline: bool,

    /// Enumeration: pruned (default) or exhaustive
    #[arg(short, long, global = true, default_value = "pruned")]
    enumeration: String,

    /// Character marking unknown positions in the green pattern
    #[arg(short, long, global = true, default_value_t = DEFAULT_PLACEHOLDER, value_parser = parse_placeholder)]
    placeholder: char,

    /// Log file, overwritten on every run
    #[arg(long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Do not write a log file
    #[arg(long, global = true)]
    no_log_file: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for feedback and list candidates (default)
    Simple,

    /// Filter once using feedback given as flags
    Filter {
        /// Correct letters, e.g. '__a__'
        #[arg(short, long, default_value = "")]
        green: String,

        /// Misplaced letters with the position they are not in, e.g. 'a1 b3'
        #[arg(short, long, default_value = "")]
        yellow: String,

        /// Letters still available, e.g. 'xqz'
        #[arg(long, default_value = "")]
        gray: String,

        /// Show pool, position sets and search statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Interactive TUI mode with live results
    Play,
}

impl Cli {
    fn config(&self, command: &Commands) -> Config {
        Config {
            dictionary: DictionarySettings {
                source: Some(SourceLocation::from_arg(&self.source)),
                cache_dir: self.cache_dir.clone(),
                offline: self.offline,
                ..DictionarySettings::default()
            },
            placeholder: self.placeholder,
            enumeration: Enumeration::from_name(&self.enumeration),
            logging: LogSettings {
                // The TUI owns the terminal
                console: !matches!(command, Commands::Play),
                file: (!self.no_log_file).then(|| self.log_file.clone()),
                ..LogSettings::default()
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Simple mode if no command given
    let default = Commands::Simple;
    let command = cli.command.as_ref().unwrap_or(&default);
    let config = cli.config(command);
    wordle_filter::logging::init(&config.logging)?;

    info!("Starting operation...");
    let start = Instant::now();

    if let Err(e) = run(command, &config) {
        warn!("A fatal error has occurred: {e:?}");
        return Err(e);
    }

    info!(
        "Completed operation in {:.4}s.",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn run(command: &Commands, config: &Config) -> Result<()> {
    let dictionary = load_dictionary(config)?;

    match command {
        Commands::Simple => run_simple_command(config, &dictionary),
        Commands::Filter {
            green,
            yellow,
            gray,
            verbose,
        } => {
            let mut source = StaticFeedback::new(RawFeedback::new(green, yellow, gray));
            run_filter_command(config, &dictionary, &mut source, *verbose)
        }
        Commands::Play => run_play_command(config, &dictionary),
    }
}

fn load_dictionary(config: &Config) -> Result<Dictionary> {
    get_dictionary(&config.dictionary).context("Could not load the word list")
}

fn run_filter_command<S: FeedbackSource>(
    config: &Config,
    dictionary: &Dictionary,
    source: &mut S,
    verbose: bool,
) -> Result<()> {
    let Some(feedback) = source.read_constraints()? else {
        bail!("No feedback given");
    };

    let result = run_filter(&feedback, &config.parser(), &config.generator(dictionary))?;
    print_filter_result(&result, config.placeholder, verbose);
    Ok(())
}

fn run_simple_command(config: &Config, dictionary: &Dictionary) -> Result<()> {
    let mut prompt = PromptFeedback::stdio(config.placeholder);
    let rounds = run_simple(&mut prompt, &config.parser(), &config.generator(dictionary))?;
    info!("Finished after {rounds} rounds");
    Ok(())
}

fn run_play_command(config: &Config, dictionary: &Dictionary) -> Result<()> {
    use wordle_filter::interactive::{App, run_tui};

    let app = App::new(config.parser(), config.generator(dictionary));
    run_tui(app)
}
