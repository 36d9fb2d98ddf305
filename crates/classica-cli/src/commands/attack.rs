use anyhow::Result;
use classica_analysis::{
    CaesarAttack, DictionaryAttack, FrequencyAttack, KeyLengthEstimator, PipelineRecovery,
    VigenereBreaker, break_caesar, break_vigenere,
};
use serde::Serialize;
use tracing::info;

use crate::commands::read_input;
use crate::output::{OutputStyle, format_key_value, format_warning, print_json};
use crate::{BreakCommands, OutputFormat};

pub fn handle(command: BreakCommands, format: OutputFormat) -> Result<()> {
    match command {
        BreakCommands::Frequency {
            max_key_length,
            key_length,
            text,
        } => frequency(&read_input(text)?, max_key_length, key_length, format),
        BreakCommands::Caesar { text } => caesar(&read_input(text)?, format),
        BreakCommands::KnownPlaintext {
            plaintext,
            ciphertext,
        } => known_plaintext(&plaintext, &ciphertext, format),
        BreakCommands::Dictionary { plaintext, text } => {
            dictionary(&read_input(text)?, plaintext.as_deref(), format)
        }
    }
}

fn frequency(
    ciphertext: &str,
    max_key_length: usize,
    key_length: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let breaker = VigenereBreaker::new(KeyLengthEstimator::new(max_key_length));
    let attack = match key_length {
        Some(length) => breaker.break_with_key_length(ciphertext, length),
        None => breaker.break_with_frequency(ciphertext),
    };
    info!(key = %attack.key, "frequency attack finished");

    if !print_json(&attack, format)? {
        print_frequency_attack(&attack, &OutputStyle::default());
    }
    Ok(())
}

fn print_frequency_attack(attack: &FrequencyAttack, style: &OutputStyle) {
    let estimate = &attack.key_length;
    let evidence = match estimate.best_score() {
        Some(score) if estimate.crossed_threshold => {
            format!("{} (average IoC {:.4})", estimate.length, score.average_ioc)
        }
        Some(score) => format!(
            "{} (average IoC {:.4}, below threshold)",
            estimate.length, score.average_ioc
        ),
        None => estimate.length.to_string(),
    };
    println!("{}", format_key_value("Key length", &evidence, style));
    println!("{}", format_key_value("Key", &attack.key, style));
    println!(
        "{}",
        format_key_value(
            "Mean chi-squared",
            &format!("{:.2}", attack.mean_chi_squared()),
            style
        )
    );
    println!("{}", format_key_value("Plaintext", &attack.plaintext, style));
}

fn caesar(ciphertext: &str, format: OutputFormat) -> Result<()> {
    let attack: CaesarAttack = break_caesar(ciphertext);
    if !print_json(&attack, format)? {
        let style = OutputStyle::default();
        println!("{}", format_key_value("Shift", &attack.shift.to_string(), &style));
        println!("{}", format_key_value("Plaintext", &attack.plaintext, &style));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct KeyOutput {
    key: String,
}

fn known_plaintext(plaintext: &str, ciphertext: &str, format: OutputFormat) -> Result<()> {
    let key = break_vigenere(plaintext, ciphertext)?;
    if !print_json(&KeyOutput { key: key.clone() }, format)? {
        println!("{}", format_key_value("Key", &key, &OutputStyle::default()));
    }
    Ok(())
}

fn dictionary(ciphertext: &str, plaintext: Option<&str>, format: OutputFormat) -> Result<()> {
    let attack = DictionaryAttack::default();
    let recovery: Option<PipelineRecovery> = match plaintext {
        Some(plaintext) => attack.break_known_plaintext(plaintext, ciphertext)?,
        None => attack.break_with_frequency(ciphertext)?,
    };

    if print_json(&recovery, format)? {
        return Ok(());
    }
    let style = OutputStyle::default();
    match recovery {
        Some(found) => {
            println!("{}", format_key_value("Key", &found.key, &style));
            let score = if plaintext.is_some() {
                format!("{:.0}% match", found.score * 100.0)
            } else {
                format!("{:.2} English score", found.score)
            };
            println!("{}", format_key_value("Score", &score, &style));
            println!("{}", format_key_value("Exact", &found.exact.to_string(), &style));
            println!("{}", format_key_value("Plaintext", &found.plaintext, &style));
        }
        None => eprintln!(
            "{}",
            format_warning("No candidate key met the acceptance threshold", &style)
        ),
    }
    Ok(())
}
