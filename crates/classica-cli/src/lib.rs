//! Classica client library
//!
//! Argument types, command handlers and output helpers for the `classica`
//! binary.

pub mod commands;
pub mod output;

pub use crate::commands::{
    analyze::handle as handle_analyze, attack::handle as handle_break,
    cipher::handle as handle_cipher,
};

use clap::{Args, Subcommand, ValueEnum};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Cipher to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherStage {
    /// Vigenere followed by Playfair (key of at least ten letters)
    Pipeline,
    /// Vigenere stage only
    Vigenere,
    /// Playfair stage only
    Playfair,
    /// Caesar shift
    Caesar,
}

/// Direction of a cipher command
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

#[derive(Debug, Args)]
pub struct CipherArgs {
    /// Cipher stage
    #[arg(short, long, value_enum, default_value = "pipeline")]
    pub stage: CipherStage,

    /// Key for the pipeline, vigenere and playfair stages
    #[arg(short, long, env = "CLASSICA_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Shift for the caesar stage (0-25)
    #[arg(long)]
    pub shift: Option<u8>,

    /// Drop likely Playfair fillers when decrypting
    #[arg(long)]
    pub strip_fillers: bool,

    /// Input text (read from stdin when omitted)
    pub text: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum BreakCommands {
    /// Recover a Vigenere key from ciphertext alone
    Frequency {
        /// Longest key length to consider
        #[arg(short, long, env = "CLASSICA_MAX_KEY_LENGTH", default_value_t = 20)]
        max_key_length: usize,

        /// Skip estimation and assume this key length
        #[arg(long)]
        key_length: Option<usize>,

        /// Ciphertext (read from stdin when omitted)
        text: Option<String>,
    },

    /// Recover a Caesar shift from ciphertext alone
    Caesar {
        /// Ciphertext (read from stdin when omitted)
        text: Option<String>,
    },

    /// Recover a Vigenere key from matching plaintext and ciphertext
    KnownPlaintext {
        /// Known plaintext
        #[arg(short, long)]
        plaintext: String,

        /// Matching ciphertext
        #[arg(short, long)]
        ciphertext: String,
    },

    /// Search common key words against the full pipeline
    Dictionary {
        /// Known plaintext for the ciphertext, enabling the exact-match search
        #[arg(short, long)]
        plaintext: Option<String>,

        /// Ciphertext (read from stdin when omitted)
        text: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Longest key length to score
    #[arg(short, long, env = "CLASSICA_MAX_KEY_LENGTH", default_value_t = 20)]
    pub max_key_length: usize,

    /// Number of Kasiski factors to list
    #[arg(long, default_value_t = 5)]
    pub factors: usize,

    /// Draw tables with ASCII borders
    #[arg(long)]
    pub ascii: bool,

    /// Ciphertext (read from stdin when omitted)
    pub text: Option<String>,
}
