//! Offcurve command-line front end.
//!
//! Turns parsed arguments into calls on [`offcurve_core`] and writes the
//! results to an output stream. The binary in `main.rs` only parses
//! arguments, installs logging and hands a [`Request`] to [`run`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod seed_arg;

use std::io::Write;

pub use error::CliError;
use offcurve_core::{Address, AddressDeriver};
pub use seed_arg::{SeedArg, SeedArgError};

/// How addresses are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Base58 text
    #[default]
    Base58,
    /// Lowercase hex of the raw bytes
    Hex,
}

impl OutputFormat {
    fn render(self, address: &Address) -> String {
        match self {
            Self::Base58 => address.to_string(),
            Self::Hex => hex::encode(address),
        }
    }
}

/// Work requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search for the off-curve address and its bump.
    Derive {
        /// Authority namespace
        authority: Address,
        /// Seeds in order
        seeds: Vec<SeedArg>,
    },

    /// Compute the address for an explicit bump.
    Create {
        /// Authority namespace
        authority: Address,
        /// Seeds in order, without the bump
        seeds: Vec<SeedArg>,
        /// Bump byte
        bump: u8,
    },

    /// Report whether an address lies on the curve.
    Check {
        /// Address to test
        address: Address,
    },
}

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// What to do
    pub command: Command,
    /// How to print addresses
    pub format: OutputFormat,
}

/// Executes `request`, writing one result line to `out`.
pub fn run<W: Write>(request: &Request, out: &mut W) -> Result<(), CliError> {
    match &request.command {
        Command::Derive { authority, seeds } => {
            let seeds = seed_slices(seeds);
            tracing::info!(%authority, seed_count = seeds.len(), "deriving address");

            let derived = AddressDeriver::new(*authority).derive(&seeds)?;
            writeln!(out, "{} {}", request.format.render(&derived.address), derived.bump)?;
        },
        Command::Create { authority, seeds, bump } => {
            let seeds = seed_slices(seeds);
            tracing::info!(%authority, seed_count = seeds.len(), bump, "creating address");

            let address = AddressDeriver::new(*authority).create(&seeds, *bump)?;
            writeln!(out, "{}", request.format.render(&address))?;
        },
        Command::Check { address } => {
            let verdict = if address.is_on_curve() { "on-curve" } else { "off-curve" };
            tracing::debug!(%address, verdict, "checked curve membership");
            writeln!(out, "{verdict}")?;
        },
    }

    Ok(())
}

fn seed_slices(seeds: &[SeedArg]) -> Vec<&[u8]> {
    seeds.iter().map(SeedArg::as_bytes).collect()
}
