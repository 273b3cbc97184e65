//! CLI support for the `oidc` tool.
//!
//! Enabled by the `cli` feature.

pub mod args;

use std::io::Write;

use crate::error::Error;
use crate::oid::Oid;
use args::{Command, decode_config};

/// Errors reported by the `oidc` tool.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Oid(#[from] Error),

    #[error("invalid hex {input:?}: {source}")]
    Hex {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse hex content bytes, ignoring whitespace, colons and a `0x` prefix.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = body
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&digits).map_err(|source| CliError::Hex {
        input: input.to_string(),
        source,
    })
}

/// Run a subcommand, writing results to `out`.
///
/// Returns `Ok(false)` when a `check` with `--stem` finds the OID is not on
/// the stem.
pub fn run(command: &Command, out: &mut dyn Write) -> Result<bool, CliError> {
    match command {
        Command::Encode { oids } => {
            for text in oids {
                let oid = Oid::parse(text)?;
                writeln!(out, "{}", hex::encode(oid.to_ber()))?;
            }
            Ok(true)
        }
        Command::Decode { strict, hex } => {
            let config = decode_config(*strict);
            for input in hex {
                let oid = Oid::from_ber_with(&parse_hex(input)?, &config)?;
                writeln!(out, "{}", oid)?;
            }
            Ok(true)
        }
        Command::Check { oid, stem } => {
            let oid = Oid::parse(oid)?;
            match stem {
                Some(stem) => {
                    let stem = Oid::parse(stem)?;
                    let on = oid.is_on(&stem);
                    let verdict = if on { "is on" } else { "is not on" };
                    writeln!(out, "{} {} {}", oid, verdict, stem)?;
                    Ok(on)
                }
                None => {
                    writeln!(out, "{} ({} arcs, {} bytes)", oid, oid.arc_count(), oid.encoded_len())?;
                    Ok(true)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(command: Command) -> (Result<bool, CliError>, String) {
        let mut out = Vec::new();
        let result = run(&command, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_hex_formats() {
        assert_eq!(parse_hex("2b0601").unwrap(), vec![0x2B, 0x06, 0x01]);
        assert_eq!(parse_hex("0x2B0601").unwrap(), vec![0x2B, 0x06, 0x01]);
        assert_eq!(parse_hex("2b:06:01").unwrap(), vec![0x2B, 0x06, 0x01]);
        assert_eq!(parse_hex(" 2b 06 01 ").unwrap(), vec![0x2B, 0x06, 0x01]);
        assert!(matches!(parse_hex("2b0"), Err(CliError::Hex { .. })));
        assert!(matches!(parse_hex("zz"), Err(CliError::Hex { .. })));
    }

    #[test]
    fn test_run_encode() {
        let (result, out) = run_to_string(Command::Encode {
            oids: vec!["1.2.840.113549.1.1.1".into(), "2.999.3".into()],
        });
        assert!(result.unwrap());
        assert_eq!(out, "2a864886f70d010101\n883703\n");
    }

    #[test]
    fn test_run_encode_rejects_malformed() {
        let (result, out) = run_to_string(Command::Encode {
            oids: vec!["1..2".into()],
        });
        assert!(matches!(
            result,
            Err(CliError::Oid(Error::MalformedIdentifier { .. }))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_decode() {
        let (result, out) = run_to_string(Command::Decode {
            strict: false,
            hex: vec!["2b0601".into(), "55 04 03".into()],
        });
        assert!(result.unwrap());
        assert_eq!(out, "1.3.6.1\n2.5.4.3\n");
    }

    #[test]
    fn test_run_decode_truncated() {
        let (result, _) = run_to_string(Command::Decode {
            strict: false,
            hex: vec!["2a86".into()],
        });
        match result {
            Err(CliError::Oid(err)) => assert!(err.is_truncated()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_run_check() {
        let (result, out) = run_to_string(Command::Check {
            oid: "1.2.840".into(),
            stem: Some("1.2".into()),
        });
        assert!(result.unwrap());
        assert_eq!(out, "1.2.840 is on 1.2\n");

        let (result, out) = run_to_string(Command::Check {
            oid: "1.23".into(),
            stem: Some("1.2".into()),
        });
        assert!(!result.unwrap());
        assert_eq!(out, "1.23 is not on 1.2\n");

        let (result, out) = run_to_string(Command::Check {
            oid: "1.3.6.1".into(),
            stem: None,
        });
        assert!(result.unwrap());
        assert_eq!(out, "1.3.6.1 (4 arcs, 3 bytes)\n");
    }
}
