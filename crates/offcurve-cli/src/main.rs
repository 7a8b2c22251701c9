//! Offcurve binary.
//!
//! # Usage
//!
//! ```bash
//! # Search for the address and bump
//! offcurve derive --authority FMgTFH3VJUfZVqGoqjjcskrxKWU3MUkCGV5NtnF6MYa1 \
//!     --seed utf8:coin-flip-vault \
//!     --seed address:So11111111111111111111111111111111111111112
//!
//! # Recompute it from a known bump
//! offcurve create --authority FMgTFH3VJUfZVqGoqjjcskrxKWU3MUkCGV5NtnF6MYa1 --bump 253 \
//!     --seed utf8:coin-flip-vault \
//!     --seed address:So11111111111111111111111111111111111111112
//!
//! # Is there possibly a private key for this address?
//! offcurve check 7iSTfbxiAbyntogaw1vQv6X5gtZpyuLr9gAwahJ6uxjj
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use offcurve_cli::{Command, OutputFormat, Request, SeedArg};
use offcurve_core::Address;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Program address derivation
#[derive(Parser, Debug)]
#[command(name = "offcurve")]
#[command(about = "Derive off-curve program addresses")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Cmd,

    /// Address output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Base58, global = true)]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Find the off-curve address and its bump
    Derive {
        /// Authority id (base58)
        #[arg(short, long)]
        authority: Address,

        /// Seed as <kind>:<value>, repeat in order
        #[arg(short, long = "seed")]
        seeds: Vec<SeedArg>,
    },

    /// Compute the address for an explicit bump
    Create {
        /// Authority id (base58)
        #[arg(short, long)]
        authority: Address,

        /// Bump byte appended after the seeds
        #[arg(short, long)]
        bump: u8,

        /// Seed as <kind>:<value>, repeat in order
        #[arg(short, long = "seed")]
        seeds: Vec<SeedArg>,
    },

    /// Report whether an address lies on the curve
    Check {
        /// Address (base58)
        address: Address,
    },
}

impl From<Args> for Request {
    fn from(args: Args) -> Self {
        let command = match args.command {
            Cmd::Derive { authority, seeds } => Command::Derive { authority, seeds },
            Cmd::Create { authority, bump, seeds } => Command::Create { authority, seeds, bump },
            Cmd::Check { address } => Command::Check { address },
        };

        Self { command, format: args.format }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    let request = Request::from(args);
    let stdout = std::io::stdout();

    match offcurve_cli::run(&request, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(err.exit_code())
        },
    }
}
