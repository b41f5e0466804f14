use crate::errors::GranthamError;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

/// The 20 standard amino acids
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    GlutamicAcid,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
}

// Order used by Grantham (1974). Rows and columns of both reference tables follow it.
const GRANTHAM_ORDER: [AminoAcid; 20] = [
    AminoAcid::Serine,
    AminoAcid::Arginine,
    AminoAcid::Leucine,
    AminoAcid::Proline,
    AminoAcid::Threonine,
    AminoAcid::Alanine,
    AminoAcid::Valine,
    AminoAcid::Glycine,
    AminoAcid::Isoleucine,
    AminoAcid::Phenylalanine,
    AminoAcid::Tyrosine,
    AminoAcid::Cysteine,
    AminoAcid::Histidine,
    AminoAcid::Glutamine,
    AminoAcid::Asparagine,
    AminoAcid::Lysine,
    AminoAcid::AsparticAcid,
    AminoAcid::GlutamicAcid,
    AminoAcid::Methionine,
    AminoAcid::Tryptophan,
];

static GRANTHAM_INDEX: LazyLock<HashMap<AminoAcid, usize>> = LazyLock::new(|| {
    GRANTHAM_ORDER
        .iter()
        .enumerate()
        .map(|(i, aa)| (*aa, i))
        .collect()
});

/// Returns the 20 standard amino acids in the order of Grantham (1974).
///
/// The order is stable and defines the row and column positions of the
/// distance and property tables.
pub fn standard_amino_acids() -> &'static [AminoAcid; 20] {
    &GRANTHAM_ORDER
}

/// Returns true if `code` is one of the 20 standard three-letter codes.
///
/// The check is case-sensitive: only the title-case form (`"Ser"`) is accepted.
pub fn is_amino_acid(code: &str) -> bool {
    AminoAcid::from_abbreviation(code).is_some()
}

/// Returns true if every element of `codes` is a standard three-letter code
pub fn all_amino_acids<S: AsRef<str>>(codes: &[S]) -> bool {
    codes.iter().all(|code| is_amino_acid(code.as_ref()))
}

/// Position of a three-letter code in [`standard_amino_acids`], `None` for unknown codes
pub fn index_of(code: &str) -> Option<usize> {
    AminoAcid::from_abbreviation(code).map(|aa| aa.index())
}

/// Validates `codes` against the registry, failing on the first unknown code.
/// `argument` names the offending input in the error.
pub(crate) fn parse_codes<S: AsRef<str>>(
    argument: &'static str,
    codes: &[S],
) -> Result<Vec<AminoAcid>, GranthamError> {
    let parsed = codes
        .iter()
        .map(|code| {
            let code = code.as_ref();
            AminoAcid::from_abbreviation(code).ok_or_else(|| {
                GranthamError::InvalidAminoAcidCode {
                    argument,
                    code: code.to_string(),
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Validated {} amino acid codes for `{argument}`", parsed.len());
    Ok(parsed)
}

impl AminoAcid {
    /// Position of the amino acid in [`standard_amino_acids`]
    pub fn index(&self) -> usize {
        GRANTHAM_INDEX[self]
    }

    /// Returns the 3 letter abbreviation of the amino acid
    pub fn abbreviation(&self) -> &'static str {
        match self {
            AminoAcid::Alanine => "Ala",
            AminoAcid::Arginine => "Arg",
            AminoAcid::Asparagine => "Asn",
            AminoAcid::AsparticAcid => "Asp",
            AminoAcid::Cysteine => "Cys",
            AminoAcid::GlutamicAcid => "Glu",
            AminoAcid::Glutamine => "Gln",
            AminoAcid::Glycine => "Gly",
            AminoAcid::Histidine => "His",
            AminoAcid::Isoleucine => "Ile",
            AminoAcid::Leucine => "Leu",
            AminoAcid::Lysine => "Lys",
            AminoAcid::Methionine => "Met",
            AminoAcid::Phenylalanine => "Phe",
            AminoAcid::Proline => "Pro",
            AminoAcid::Serine => "Ser",
            AminoAcid::Threonine => "Thr",
            AminoAcid::Tryptophan => "Trp",
            AminoAcid::Tyrosine => "Tyr",
            AminoAcid::Valine => "Val",
        }
    }

    /// Returns the uppercase 1 letter code of the amino acid
    pub fn one_letter(&self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Arginine => 'R',
            AminoAcid::Asparagine => 'N',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::Cysteine => 'C',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Leucine => 'L',
            AminoAcid::Lysine => 'K',
            AminoAcid::Methionine => 'M',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Proline => 'P',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::Valine => 'V',
        }
    }

    /// Strict lookup of a title-case three-letter code
    pub(crate) fn from_abbreviation(code: &str) -> Option<AminoAcid> {
        GRANTHAM_ORDER
            .iter()
            .find(|aa| aa.abbreviation() == code)
            .copied()
    }

    /// Lookup of an uppercase one-letter code
    pub(crate) fn from_one_letter(code: char) -> Option<AminoAcid> {
        GRANTHAM_ORDER
            .iter()
            .find(|aa| aa.one_letter() == code)
            .copied()
    }
}

impl FromStr for AminoAcid {
    type Err = GranthamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AminoAcid::from_abbreviation(s).ok_or_else(|| GranthamError::InvalidAminoAcidCode {
            argument: "code",
            code: s.to_string(),
        })
    }
}

impl Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl Serialize for AminoAcid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.abbreviation())
    }
}

impl<'de> Deserialize<'de> for AminoAcid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        AminoAcid::from_str(&string).map_err(serde::de::Error::custom)
    }
}
