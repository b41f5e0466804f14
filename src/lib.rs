//! Grantham distances between amino acids.
//!
//! Distances are either looked up in the table published by Grantham (1974)
//! or computed with the equation from the composition, polarity and volume of
//! the side chains. The crate also translates between one-letter and
//! three-letter codes and generates amino acid pairs.

pub mod errors;
pub mod translation;

pub use errors::GranthamError;
pub use translation::amino_acids::{
    all_amino_acids, index_of, is_amino_acid, standard_amino_acids, AminoAcid,
};
pub use translation::distance::equation::{
    amino_acids_properties, grantham_equation, GranthamConstants, Properties,
};
pub use translation::distance::grantham::grantham_distances_matrix;
pub use translation::distance::{
    distance_matrix, grantham_distance, grantham_distance_exact, grantham_distance_original,
    GranthamDistance, Method,
};
pub use translation::pairs::{amino_acid_pairs, pairs, AminoAcidPair, PairOptions};
pub use translation::{to_one_letter, to_three_letter};
