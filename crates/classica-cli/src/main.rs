use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use classica_cli::{
    AnalyzeArgs, BreakCommands, CipherArgs, Direction, OutputFormat, handle_analyze,
    handle_break, handle_cipher,
};

#[derive(Parser)]
#[command(
    name = "classica",
    about = "Vigenere + Playfair pipeline cipher and cryptanalysis toolkit",
    version,
    author,
    long_about = "Encrypt and decrypt with a two-stage Vigenere + Playfair cipher, and recover keys with frequency analysis, known plaintext, and dictionary attacks."
)]
struct Cli {
    /// Set the logging level (RUST_LOG takes precedence)
    #[arg(short, long, value_enum, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Output format
    #[arg(short = 'o', long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text
    Encrypt(CipherArgs),

    /// Decrypt text
    Decrypt(CipherArgs),

    /// Recover keys from ciphertext
    #[command(subcommand)]
    Break(BreakCommands),

    /// Show coincidence statistics and Kasiski evidence for ciphertext
    Analyze(AnalyzeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::from(cli.log_level).as_str())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Encrypt(args) => handle_cipher(args, Direction::Encrypt, cli.format)?,
        Commands::Decrypt(args) => handle_cipher(args, Direction::Decrypt, cli.format)?,
        Commands::Break(cmd) => handle_break(cmd, cli.format)?,
        Commands::Analyze(args) => handle_analyze(args, cli.format)?,
    }

    Ok(())
}
