//! Command handlers.

pub mod analyze;
pub mod attack;
pub mod cipher;

use std::io::Read;

use anyhow::Context;

/// The positional text argument, or all of stdin when it was omitted.
pub fn read_input(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}
