use crate::show::Format;
use anyhow::{Context, Result};
use clap_derive::{Args, Parser, Subcommand};
use grantham::{GranthamConstants, Method};
use std::fs;
use std::path::PathBuf;

/// Grantham distances between amino acids
#[derive(Parser, Debug)]
#[clap(version, about)]
pub(crate) struct Grantham {
    #[clap(subcommand)]
    pub(crate) command: Command,

    /// Output format
    #[clap(long, value_enum, default_value = "tsv", global = true)]
    pub(crate) format: Format,

    /// Path to the output file, stdout if omitted
    #[clap(short, long, global = true)]
    pub(crate) output: Option<PathBuf>,

    /// Verbosity: -v for info, -vv for debug and -vvv for trace
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbose: u8,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Grantham distances between the amino acids in x and y. If one of them
    /// holds a single code it is compared to every code of the other.
    Distance {
        /// Three-letter codes, comma separated or repeated
        #[clap(short, long, value_delimiter = ',', required = true)]
        x: Vec<String>,

        /// Three-letter codes, comma separated or repeated
        #[clap(short, long, value_delimiter = ',', required = true)]
        y: Vec<String>,

        /// Either `original` for the published table or `exact` for the equation
        #[clap(short, long, default_value = "original")]
        method: Method,

        #[clap(flatten)]
        constants: ConstantsArgs,
    },
    /// All pairs of the amino acids in x and y, the 20 standard amino acids by default
    Pairs {
        /// Three-letter codes, comma separated or repeated
        #[clap(short, long, value_delimiter = ',')]
        x: Vec<String>,

        /// Three-letter codes, comma separated or repeated
        #[clap(short, long, value_delimiter = ',')]
        y: Vec<String>,

        /// Drop pairs of an amino acid with itself
        #[clap(long)]
        drop_self: bool,

        /// Drop repeated pairs
        #[clap(long)]
        drop_duplicates: bool,

        /// Keep only the first of (x, y) and (y, x)
        #[clap(long)]
        drop_reverses: bool,
    },
    /// Translate three-letter codes to one-letter codes
    OneLetter {
        #[clap(required = true)]
        codes: Vec<String>,
    },
    /// Translate one-letter codes to three-letter codes
    ThreeLetter {
        #[clap(required = true)]
        codes: Vec<String>,
    },
    /// Distance matrix of the 20 standard amino acids
    Matrix {
        /// Either `original` for the published table or `exact` for the equation
        #[clap(short, long, default_value = "original")]
        method: Method,

        #[clap(flatten)]
        constants: ConstantsArgs,
    },
    /// Composition, polarity and volume of the 20 standard amino acids
    Properties,
    /// The 20 standard amino acids
    AminoAcids,
}

/// Weights of the Grantham equation, only used by the `exact` method
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct ConstantsArgs {
    /// JSON5 file with any of `alpha`, `beta`, `gamma` and `rho`. Flags take precedence.
    #[clap(long = "constants")]
    pub(crate) constants_file: Option<PathBuf>,

    /// Weight of the composition difference
    #[clap(long)]
    pub(crate) alpha: Option<f64>,

    /// Weight of the polarity difference
    #[clap(long)]
    pub(crate) beta: Option<f64>,

    /// Weight of the volume difference
    #[clap(long)]
    pub(crate) gamma: Option<f64>,

    /// Scaling factor
    #[clap(long)]
    pub(crate) rho: Option<f64>,
}

impl ConstantsArgs {
    /// True if any constant was given on the command line
    pub(crate) fn is_set(&self) -> bool {
        self.constants_file.is_some()
            || self.alpha.is_some()
            || self.beta.is_some()
            || self.gamma.is_some()
            || self.rho.is_some()
    }

    /// Builds the constants from the defaults, the configuration file and the flags, in that order
    pub(crate) fn resolve(&self) -> Result<GranthamConstants> {
        let mut constants = match &self.constants_file {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Could not read constants file {}", path.display()))?;
                json5::from_str(&content)
                    .with_context(|| format!("Invalid constants file {}", path.display()))?
            }
            None => GranthamConstants::default(),
        };
        if let Some(alpha) = self.alpha {
            constants.alpha = alpha;
        }
        if let Some(beta) = self.beta {
            constants.beta = beta;
        }
        if let Some(gamma) = self.gamma {
            constants.gamma = gamma;
        }
        if let Some(rho) = self.rho {
            constants.rho = rho;
        }
        Ok(constants)
    }
}
