use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use kata::config::Config;
use kata::error::{Error, Result};
use kata::factorial::Engine;
use kata::namebook::Checker;
use kata::output::Reporter;
use kata::output::json::JsonReporter;
use kata::output::text::TextReporter;

#[derive(Parser)]
#[command(
    name = "kata",
    about = "Digit sums of large factorials and name-list prefix checking"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the digit sum of n!.
    Factorial {
        /// The number whose factorial to take (prompted for when omitted).
        n: Option<u64>,

        /// Integer representation to compute with.
        #[arg(long)]
        engine: Option<Engine>,

        /// Largest accepted input.
        #[arg(long)]
        max_n: Option<u64>,
    },
    /// Check a list of names for prefix collisions.
    Names {
        /// File with whitespace-separated names (prompted for when omitted).
        file: Option<PathBuf>,

        /// Consistency checker to run.
        #[arg(long)]
        checker: Option<Checker>,

        /// Exit with code 1 when the list is inconsistent.
        #[arg(long)]
        require_consistent: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = match Config::load(&cwd) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    let reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Text => Box::new(TextReporter::new()),
        OutputFormat::Json => Box::new(JsonReporter::new()),
    };

    match cli.command {
        Command::Factorial { n, engine, max_n } => {
            if let Some(v) = engine {
                config.engine = v;
            }
            if let Some(v) = max_n {
                config.max_n = v;
            }

            let n = n.unwrap_or_else(|| match prompt_number(config.max_n) {
                Ok(n) => n,
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(2);
                }
            });

            let report = match kata::run_factorial(n, config.engine, config.max_n) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(2);
                }
            };
            reporter.report_factorial(&report, &mut writer).unwrap();
        }
        Command::Names {
            file,
            checker,
            require_consistent,
        } => {
            if let Some(v) = checker {
                config.checker = v;
            }

            let file = file.unwrap_or_else(|| match prompt_file_name() {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(2);
                }
            });

            let report = match kata::check_names(&file, config.checker) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(2);
                }
            };
            reporter.report_names(&report, &mut writer).unwrap();

            if require_consistent && !report.consistent {
                writeln!(writer, "\nCheck FAILED: name list is inconsistent").unwrap();
                process::exit(1);
            }
        }
    }
}

fn prompt_number(max: u64) -> Result<u64> {
    print!("Enter a number within range [0,{max}]: ");
    std::io::stdout().flush()?;

    let line = read_stdin_line()?;
    line.parse::<u64>()
        .map_err(|_| Error::InvalidInput(format!("not a non-negative integer: {line:?}")))
}

fn prompt_file_name() -> Result<PathBuf> {
    print!("Enter file name with list of names: ");
    std::io::stdout().flush()?;

    let line = read_stdin_line()?;
    if line.is_empty() {
        return Err(Error::InvalidInput("no file name given".to_string()));
    }
    Ok(PathBuf::from(line))
}

fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
