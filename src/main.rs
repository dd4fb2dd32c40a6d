//! Caesar: shift cipher CLI

use anyhow::{Context, Result};
use caesar::analyzer::ScoringProfile;
use caesar::config::{load_config, DecodeStrategy, CONFIG_FILENAME};
use caesar::reporter::{ConsoleReporter, JsonReporter};
use caesar::{encode, CipherBreaker, Shift};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Caesar: shift cipher encoder and breaker
#[derive(Parser, Debug)]
#[command(name = "caesar")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (default: search .caesarrc.json in current dir and parents)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode text with a fixed shift
    Encode {
        /// Number of positions to shift (any integer, reduced mod 26)
        #[arg(long, short, allow_negative_numbers = true)]
        shift: i64,

        /// Text to encode (default: read one line from stdin)
        text: Option<String>,

        /// Output format as JSON
        #[arg(long, short)]
        json: bool,

        /// Print only the ciphertext
        #[arg(long, short)]
        quiet: bool,
    },

    /// Recover the shift of ciphertext
    Decode {
        /// Ciphertext to break (default: read one line from stdin)
        text: Option<String>,

        /// Strategy to run (default: config value, else both)
        #[arg(long, value_enum)]
        strategy: Option<DecodeStrategy>,

        /// Scoring profile (default: config value, else standard)
        #[arg(long, value_enum)]
        scoring: Option<ScoringProfile>,

        /// Also list the N best-scoring shifts
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Output format as JSON
        #[arg(long, short)]
        json: bool,

        /// Quiet mode (shift and plaintext only)
        #[arg(long, short)]
        quiet: bool,

        /// Verbose output
        #[arg(long, short)]
        verbose: bool,
    },

    /// Create .caesarrc.json with sensible defaults
    Init {
        /// Scoring profile to write
        #[arg(long, value_enum)]
        scoring: Option<ScoringProfile>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CAESAR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    match args.command {
        Commands::Encode {
            shift,
            text,
            json,
            quiet,
        } => run_encode(shift, text, json, quiet),
        Commands::Decode {
            text,
            strategy,
            scoring,
            top,
            json,
            quiet,
            verbose,
        } => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            let config = load_config(&cwd, args.config.as_deref())?.merge_with_cli(strategy, scoring);
            let breaker = CipherBreaker::from_config(&config);
            let ciphertext = text_or_stdin(text, "Enter ciphertext to break: ")?;

            let mut console = ConsoleReporter::new();
            if args.no_color {
                console = console.without_colors();
            }
            if verbose {
                console = console.verbose();
            }
            let options = DecodeOptions {
                strategy: config.strategy(),
                top,
                json,
                quiet,
            };
            tracing::debug!(
                scoring = ?breaker.scorer().profile(),
                strategy = ?options.strategy,
                "decoding"
            );
            run_decode(&breaker, &ciphertext, &options, &console)
        }
        Commands::Init { scoring, dir } => run_init(scoring, dir.as_deref()),
    }
}

struct DecodeOptions {
    strategy: DecodeStrategy,
    top: Option<usize>,
    json: bool,
    quiet: bool,
}

fn run_encode(shift: i64, text: Option<String>, json: bool, quiet: bool) -> Result<ExitCode> {
    let plaintext = text_or_stdin(text, "Enter plaintext: ")?;
    let ciphertext = encode(&plaintext, shift);

    if json {
        let reporter = JsonReporter::new().pretty();
        println!("{}", reporter.report_encoded(&plaintext, Shift::new(shift), &ciphertext));
    } else if quiet {
        println!("{}", ciphertext);
    } else {
        println!("{} {}", "Ciphertext:".bold(), ciphertext);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_decode(
    breaker: &CipherBreaker,
    ciphertext: &str,
    options: &DecodeOptions,
    console: &ConsoleReporter,
) -> Result<ExitCode> {
    let candidates = options
        .top
        .map(|n| breaker.rank(ciphertext).into_iter().take(n).collect::<Vec<_>>());

    match options.strategy.single() {
        None => {
            let report = breaker.decode_both(ciphertext);
            if options.json {
                let reporter = JsonReporter::new().pretty();
                println!("{}", reporter.report(&report, candidates.as_deref()));
            } else if options.quiet {
                console.report_quiet(&report.brute_force);
                if !report.agree() {
                    console.report_quiet(&report.frequency);
                }
            } else {
                console.report(&report);
                if let Some(ref candidates) = candidates {
                    console.report_candidates(candidates);
                }
            }
        }
        Some(strategy) => {
            let result = breaker.break_with(ciphertext, strategy);
            if options.json {
                let reporter = JsonReporter::new().pretty();
                println!("{}", reporter.report_result(&result, candidates.as_deref()));
            } else if options.quiet {
                console.report_quiet(&result);
            } else {
                console.report_result(&result);
                if let Some(ref candidates) = candidates {
                    console.report_candidates(candidates);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Use the argument if given, otherwise read one line from stdin
fn text_or_stdin(text: Option<String>, prompt: &str) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("{}", prompt);
        io::stderr().flush().ok();
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("Failed to read input from stdin")?;
    Ok(strip_line_ending(&line).to_string())
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

fn starter_config(scoring: ScoringProfile) -> String {
    let scoring_value = match scoring {
        ScoringProfile::Standard => "standard",
        ScoringProfile::Extended => "extended",
    };
    format!(
        r#"{{
  "scoring": "{}",
  "strategy": "both",
  "minFrequencyLetters": 5,
  "anchorLetter": "E",
  "extraWords": []
}}
"#,
        scoring_value
    )
}

fn run_init(scoring: Option<ScoringProfile>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let scoring = scoring.unwrap_or_default();
    std::fs::write(&config_path, starter_config(scoring))
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with scoring={:?}",
        "Done".green().bold(),
        config_path.display(),
        scoring
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use caesar::config::Config;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("abc\n"), "abc");
        assert_eq!(strip_line_ending("abc\r\n"), "abc");
        assert_eq!(strip_line_ending("abc"), "abc");
        assert_eq!(strip_line_ending(" abc \n"), " abc ");
        assert_eq!(strip_line_ending(""), "");
    }

    #[test]
    fn test_starter_config_parses() {
        let config: Config = serde_json::from_str(&starter_config(ScoringProfile::Extended)).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring(), ScoringProfile::Extended);
        assert_eq!(config.strategy(), DecodeStrategy::Both);
    }

    #[test]
    fn test_args_accept_negative_shift() {
        let args = Args::try_parse_from(["caesar", "encode", "--shift", "-3", "abc"]).unwrap();
        match args.command {
            Commands::Encode { shift, text, .. } => {
                assert_eq!(shift, -3);
                assert_eq!(text.as_deref(), Some("abc"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
