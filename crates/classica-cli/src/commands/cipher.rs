use anyhow::{Context, Result};
use classica_cipher::{
    CaesarCipher, Pipeline, PlayfairCipher, VigenereCipher, normalize, strip_fillers,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::read_input;
use crate::output::print_json;
use crate::{CipherArgs, CipherStage, Direction, OutputFormat};

#[derive(Debug, Serialize)]
struct CipherOutput {
    stage: CipherStage,
    direction: Direction,
    input_letters: usize,
    output: String,
}

pub fn handle(mut args: CipherArgs, direction: Direction, format: OutputFormat) -> Result<()> {
    let input = read_input(args.text.take())?;
    let output = run(&args, direction, &input)?;
    debug!(stage = ?args.stage, ?direction, letters = output.len(), "cipher command finished");

    let report = CipherOutput {
        stage: args.stage,
        direction,
        input_letters: normalize(&input).len(),
        output,
    };
    if !print_json(&report, format)? {
        println!("{}", report.output);
    }
    Ok(())
}

fn run(args: &CipherArgs, direction: Direction, input: &str) -> Result<String> {
    if args.strip_fillers && direction == Direction::Encrypt {
        warn!("--strip-fillers only applies when decrypting");
    }

    match args.stage {
        CipherStage::Caesar => {
            let shift = args.shift.context("the caesar stage needs --shift")?;
            let cipher = CaesarCipher::new(shift)?;
            Ok(match direction {
                Direction::Encrypt => cipher.encrypt(input),
                Direction::Decrypt => cipher.decrypt(input),
            })
        }
        CipherStage::Vigenere => {
            let cipher = VigenereCipher::new(require_key(args)?)?;
            Ok(match direction {
                Direction::Encrypt => cipher.encrypt(input),
                Direction::Decrypt => cipher.decrypt(input),
            })
        }
        CipherStage::Playfair => {
            let cipher = PlayfairCipher::new(require_key(args)?)?;
            match direction {
                Direction::Encrypt => Ok(cipher.encrypt(input)),
                Direction::Decrypt => {
                    let plaintext = normalize(&cipher.decrypt(input)?);
                    Ok(if args.strip_fillers {
                        strip_fillers(&plaintext).into_string()
                    } else {
                        plaintext.into_string()
                    })
                }
            }
        }
        CipherStage::Pipeline => {
            let pipeline = Pipeline::new(require_key(args)?)
                .context("the pipeline needs a key of at least ten letters")?;
            match direction {
                Direction::Encrypt => Ok(pipeline.encrypt(input)),
                Direction::Decrypt if args.strip_fillers => Ok(pipeline.decrypt_stripped(input)?),
                Direction::Decrypt => {
                    let plaintext = pipeline.decrypt(input)?;
                    if plaintext != pipeline.decrypt_stripped(input)? {
                        warn!("output keeps digraph fillers; --strip-fillers removes them");
                    }
                    Ok(plaintext)
                }
            }
        }
    }
}

fn require_key(args: &CipherArgs) -> Result<&str> {
    args.key
        .as_deref()
        .context("this stage needs --key (or CLASSICA_KEY)")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn args(stage: CipherStage, key: Option<&str>, shift: Option<u8>) -> CipherArgs {
        CipherArgs {
            stage,
            key: key.map(String::from),
            shift,
            strip_fillers: false,
            text: None,
        }
    }

    #[test]
    fn test_run_each_stage() {
        let vigenere = args(CipherStage::Vigenere, Some("LEMON"), None);
        assert_eq!(
            run(&vigenere, Direction::Encrypt, "attack at dawn").unwrap(),
            "LXFOPVEFRNHR"
        );

        let caesar = args(CipherStage::Caesar, None, Some(3));
        assert_eq!(run(&caesar, Direction::Decrypt, "DEF").unwrap(), "ABC");

        let pipeline = args(
            CipherStage::Pipeline,
            Some("MYSECRETKEYWITHATLEASTTENCHARS"),
            None,
        );
        assert_eq!(
            run(&pipeline, Direction::Encrypt, "HELLOWORLD").unwrap(),
            "IYFDXHKLQL"
        );
    }

    #[test]
    fn test_missing_parameters() {
        assert!(run(&args(CipherStage::Caesar, None, None), Direction::Encrypt, "A").is_err());
        assert!(run(&args(CipherStage::Playfair, None, None), Direction::Encrypt, "A").is_err());
        let short = args(CipherStage::Pipeline, Some("SHORT"), None);
        assert!(run(&short, Direction::Encrypt, "A").is_err());
    }
}
