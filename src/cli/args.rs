//! Command-line argument structures for the `oidc` tool.

use clap::{Parser, Subcommand};

use crate::ber::DecodeConfig;

/// Logging flags shared by all subcommands.
#[derive(Debug, Parser)]
pub struct LogArgs {
    /// Enable debug logging (ber_oid=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Enable trace logging (ber_oid=trace).
    #[arg(short = 'D', long = "trace", global = true)]
    pub trace: bool,
}

impl LogArgs {
    /// Tracing filter directive for the selected level.
    pub fn filter(&self) -> &'static str {
        if self.trace {
            "ber_oid=trace"
        } else if self.debug {
            "ber_oid=debug"
        } else {
            "ber_oid=warn"
        }
    }

    /// Initialize tracing to stderr based on debug/trace flags.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(self.filter()))
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Convert object identifiers between dotted text and BER content bytes.
#[derive(Debug, Parser)]
#[command(name = "oidc", version, about)]
pub struct Args {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode dotted OIDs to hex content bytes.
    Encode {
        #[arg(required = true, value_name = "OID")]
        oids: Vec<String>,
    },

    /// Decode hex content bytes to dotted OIDs.
    Decode {
        /// Reject encodings with more than 128 arcs or an arc longer than 64 bytes.
        #[arg(long = "strict")]
        strict: bool,

        /// Content bytes; spaces, colons and a 0x prefix are ignored.
        #[arg(required = true, value_name = "HEX")]
        hex: Vec<String>,
    },

    /// Validate an OID, optionally testing whether it is on a stem.
    Check {
        #[arg(value_name = "OID")]
        oid: String,

        /// Stem OID to test against.
        #[arg(long = "stem", value_name = "OID")]
        stem: Option<String>,
    },
}

/// Decode configuration for the `--strict` flag.
pub fn decode_config(strict: bool) -> DecodeConfig {
    if strict {
        DecodeConfig::strict()
    } else {
        DecodeConfig::default()
    }
}
