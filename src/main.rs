use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use computor::{solve_equation, OutputFormat, Settings};
use env_logger::Env;
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// The equation to solve, e.g. "5 * X^0 + 4 * X^1 = 4 * X^0"
  #[arg(allow_hyphen_values = true)]
  equation: String,

  /// Only accept terms written as `a * X^p`
  #[arg(long, env = "COMPUTOR_STRICT")]
  strict: bool,

  /// Report a negative discriminant as having no solution
  #[arg(long, env = "COMPUTOR_REAL_ONLY")]
  real_only: bool,

  /// Output format
  #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "COMPUTOR_FORMAT")]
  format: OutputFormat,

  /// Log level
  #[arg(long, value_enum, default_value_t = LogLevel::Warn, env = "COMPUTOR_LOG")]
  log_level: LogLevel,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
  Error,
  Warn,
  Info,
  Debug,
  Trace,
}

impl From<LogLevel> for log::LevelFilter {
  fn from(level: LogLevel) -> Self {
    match level {
      LogLevel::Error => log::LevelFilter::Error,
      LogLevel::Warn => log::LevelFilter::Warn,
      LogLevel::Info => log::LevelFilter::Info,
      LogLevel::Debug => log::LevelFilter::Debug,
      LogLevel::Trace => log::LevelFilter::Trace,
    }
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
    .filter_level(cli.log_level.into())
    .format_timestamp(None)
    .init();

  let settings = Settings::default()
    .strict(cli.strict)
    .real_only(cli.real_only)
    .output(cli.format);
  info!("solving {:?} with {:?}", cli.equation, settings);

  match solve_equation(&cli.equation, &settings) {
    Ok(report) => match settings.output {
      OutputFormat::Text => println!("{report}"),
      OutputFormat::Json => println!(
        "{}",
        serde_json::to_string_pretty(&report.to_json())
          .context("failed to render the report as JSON")?
      ),
    },
    Err(e) => {
      eprintln!("Error: {e}");
      std::process::exit(1);
    }
  }

  Ok(())
}
