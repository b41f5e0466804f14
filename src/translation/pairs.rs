use crate::errors::GranthamError;
use crate::translation::amino_acids::{parse_codes, AminoAcid};
use itertools::Itertools;
use log::info;
use serde::{Deserialize, Serialize};

/// An ordered pair of amino acids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AminoAcidPair {
    pub x: AminoAcid,
    pub y: AminoAcid,
}

impl AminoAcidPair {
    pub fn new(x: AminoAcid, y: AminoAcid) -> Self {
        AminoAcidPair { x, y }
    }

    /// Key shared by a pair and its reverse, the two codes sorted alphabetically
    fn symmetric_key(&self) -> (&'static str, &'static str) {
        let (a, b) = (self.x.abbreviation(), self.y.abbreviation());
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// Filters applied when generating pairs. All pairs are kept by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairOptions {
    /// Keep pairs of an amino acid with itself
    pub keep_self: bool,
    /// Keep repeated occurrences of the same ordered pair
    pub keep_duplicates: bool,
    /// Keep `(y, x)` after `(x, y)` has been generated
    pub keep_reverses: bool,
}

impl Default for PairOptions {
    fn default() -> Self {
        PairOptions {
            keep_self: true,
            keep_duplicates: true,
            keep_reverses: true,
        }
    }
}

/// Generates all pairs of `x` and `y`, all of `y` for the first element of `x` first.
pub fn pairs(x: &[AminoAcid], y: &[AminoAcid], options: &PairOptions) -> Vec<AminoAcidPair> {
    let mut pairs = x
        .iter()
        .cartesian_product(y.iter())
        .map(|(a, b)| AminoAcidPair::new(*a, *b))
        .collect_vec();
    let generated = pairs.len();

    if !options.keep_self {
        pairs.retain(|pair| pair.x != pair.y);
    }
    if !options.keep_duplicates {
        pairs = pairs.into_iter().unique().collect();
    }
    if !options.keep_reverses {
        pairs = pairs
            .into_iter()
            .unique_by(|pair| pair.symmetric_key())
            .collect();
    }

    info!("Kept {} of {generated} amino acid pairs", pairs.len());
    pairs
}

/// Generates pairs from three-letter codes, see [`pairs`].
///
/// # Examples
///
/// ```
/// use grantham::{amino_acid_pairs, PairOptions};
///
/// let codes = ["Ser", "Arg", "Leu"];
/// let options = PairOptions { keep_self: false, keep_reverses: false, ..Default::default() };
/// let pairs = amino_acid_pairs(&codes, &codes, &options).unwrap();
/// assert_eq!(pairs.len(), 3);
/// ```
///
/// # Errors
///
/// [`GranthamError::InvalidAminoAcidCode`] if `x` or `y` contain anything but
/// the 20 standard three-letter codes.
pub fn amino_acid_pairs<S: AsRef<str>, T: AsRef<str>>(
    x: &[S],
    y: &[T],
    options: &PairOptions,
) -> Result<Vec<AminoAcidPair>, GranthamError> {
    let x = parse_codes("x", x)?;
    let y = parse_codes("y", y)?;
    Ok(pairs(&x, &y, options))
}
