pub mod equation;
pub mod grantham;

use crate::errors::GranthamError;
use crate::translation::amino_acids::{parse_codes, standard_amino_acids, AminoAcid};
use equation::GranthamConstants;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy used to obtain a Grantham distance
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Look up the published, rounded distance table
    #[default]
    Original,
    /// Evaluate the Grantham equation on the side chain properties
    Exact,
}

impl Method {
    /// Computes the distance between two amino acids with this strategy.
    ///
    /// `constants` only affect [`Method::Exact`].
    pub fn compute(&self, a: &AminoAcid, b: &AminoAcid, constants: &GranthamConstants) -> f64 {
        match self {
            Method::Original => f64::from(grantham::compute(a, b)),
            Method::Exact => equation::compute(a, b, constants),
        }
    }
}

impl FromStr for Method {
    type Err = GranthamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Method::Original),
            "exact" => Ok(Method::Exact),
            _ => Err(GranthamError::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Method::Original => write!(f, "original"),
            Method::Exact => write!(f, "exact"),
        }
    }
}

/// Distance `d` between the amino acids `x` and `y`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GranthamDistance {
    pub x: AminoAcid,
    pub y: AminoAcid,
    pub d: f64,
}

/// Reconciles the lengths of `x` and `y` into a sequence of pairs.
///
/// Equal lengths are paired element-wise, a sequence of length 1 is repeated
/// to the length of the other one, anything else is an error.
pub(crate) fn recycle(
    x: &[AminoAcid],
    y: &[AminoAcid],
) -> Result<Vec<(AminoAcid, AminoAcid)>, GranthamError> {
    match (x, y) {
        (x, y) if x.len() == y.len() => Ok(x.iter().copied().zip(y.iter().copied()).collect()),
        ([single], y) => Ok(y.iter().map(|b| (*single, *b)).collect()),
        (x, [single]) => Ok(x.iter().map(|a| (*a, *single)).collect()),
        (x, y) => Err(GranthamError::IncompatibleLength {
            x: x.len(),
            y: y.len(),
        }),
    }
}

fn resolve(
    x: &[AminoAcid],
    y: &[AminoAcid],
    method: Method,
    constants: &GranthamConstants,
) -> Result<Vec<GranthamDistance>, GranthamError> {
    let pairs = recycle(x, y)?;
    info!(
        "Computing {} Grantham distances using the {method} method",
        pairs.len()
    );
    if method == Method::Exact {
        debug!("Using {constants:?}");
    }
    Ok(pairs
        .par_iter()
        .map(|(a, b)| GranthamDistance {
            x: *a,
            y: *b,
            d: method.compute(a, b, constants),
        })
        .collect())
}

/// Grantham distances between the amino acids in `x` and `y`.
///
/// `x` and `y` hold title-case three-letter codes. They are paired
/// element-wise; if one of them has a single element it is paired with every
/// element of the other. Results are returned in input order.
///
/// # Errors
///
/// [`GranthamError::InvalidAminoAcidCode`] if any code is not one of the 20
/// standard amino acids, [`GranthamError::IncompatibleLength`] if the lengths
/// cannot be reconciled.
///
/// # Examples
///
/// ```
/// use grantham::{grantham_distance, GranthamConstants, Method};
///
/// let distances = grantham_distance(
///     &["Ser"],
///     &["Phe", "Leu", "Arg"],
///     Method::Original,
///     &GranthamConstants::default(),
/// )
/// .unwrap();
/// assert_eq!(distances.len(), 3);
/// assert_eq!(distances[0].d, 155.0);
/// ```
pub fn grantham_distance<S: AsRef<str>, T: AsRef<str>>(
    x: &[S],
    y: &[T],
    method: Method,
    constants: &GranthamConstants,
) -> Result<Vec<GranthamDistance>, GranthamError> {
    let x = parse_codes("x", x)?;
    let y = parse_codes("y", y)?;
    resolve(&x, &y, method, constants)
}

/// Grantham distances looked up in the published table. See [`grantham_distance`].
pub fn grantham_distance_original<S: AsRef<str>, T: AsRef<str>>(
    x: &[S],
    y: &[T],
) -> Result<Vec<GranthamDistance>, GranthamError> {
    grantham_distance(x, y, Method::Original, &GranthamConstants::default())
}

/// Grantham distances computed with the equation. See [`grantham_distance`].
pub fn grantham_distance_exact<S: AsRef<str>, T: AsRef<str>>(
    x: &[S],
    y: &[T],
    constants: &GranthamConstants,
) -> Result<Vec<GranthamDistance>, GranthamError> {
    grantham_distance(x, y, Method::Exact, constants)
}

/// Full 20 x 20 distance matrix in the order of [`standard_amino_acids`]
pub fn distance_matrix(method: Method, constants: &GranthamConstants) -> [[f64; 20]; 20] {
    let mut matrix = [[0.0; 20]; 20];
    for (a, row) in standard_amino_acids().iter().zip(matrix.iter_mut()) {
        for (b, cell) in standard_amino_acids().iter().zip(row.iter_mut()) {
            *cell = method.compute(a, b, constants);
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::amino_acids::AminoAcid::*;
    use itertools::Itertools;

    fn original(x: &[&str], y: &[&str]) -> Result<Vec<GranthamDistance>, GranthamError> {
        grantham_distance_original(x, y)
    }

    #[test]
    fn expected_values() {
        assert_eq!(original(&["Ser"], &["Phe"]).unwrap()[0].d, 155.0);
        assert_eq!(original(&["Arg"], &["Leu"]).unwrap()[0].d, 102.0);
        assert_eq!(original(&["Ser"], &["Ser"]).unwrap()[0].d, 0.0);
    }

    #[test]
    fn original_is_symmetric_with_zero_diagonal() {
        let codes = standard_amino_acids()
            .iter()
            .map(|aa| aa.abbreviation())
            .collect_vec();
        for a in codes.iter().copied() {
            let forward = original(&[a], &codes).unwrap();
            let backward = original(&codes, &[a]).unwrap();
            for (f, b) in forward.iter().zip(backward.iter()) {
                assert_eq!(f.d, b.d);
            }
            assert_eq!(original(&[a], &[a]).unwrap()[0].d, 0.0);
        }
    }

    #[test]
    fn exact_is_within_one_of_original() {
        // Misprints in the published table
        let misprints = [(AsparticAcid, Tryptophan), (Asparagine, GlutamicAcid)];
        let constants = GranthamConstants::default();
        for (a, b) in standard_amino_acids()
            .iter()
            .cartesian_product(standard_amino_acids().iter())
        {
            if misprints.contains(&(*a, *b)) || misprints.contains(&(*b, *a)) {
                continue;
            }
            let original = Method::Original.compute(a, b, &constants);
            let exact = Method::Exact.compute(a, b, &constants);
            assert!(
                (original - exact).abs() <= 1.0,
                "{a} {b}: {original} vs {exact}"
            );
        }
    }

    #[test]
    fn misprinted_pairs_deviate_from_equation() {
        let constants = GranthamConstants::default();
        let d = Method::Exact.compute(&AsparticAcid, &Tryptophan, &constants);
        assert!((d - 190.55).abs() < 0.01);
        assert_eq!(
            Method::Original.compute(&AsparticAcid, &Tryptophan, &constants),
            181.0
        );
        let d = Method::Exact.compute(&Asparagine, &GlutamicAcid, &constants);
        assert!((d - 40.86).abs() < 0.01);
    }

    #[test]
    fn recycles_single_x() {
        let distances = original(&["Ser"], &["Phe", "Leu", "Arg"]).unwrap();
        assert_eq!(distances.len(), 3);
        assert!(distances.iter().all(|d| d.x == Serine));
        assert_eq!(
            distances.iter().map(|d| d.y).collect_vec(),
            vec![Phenylalanine, Leucine, Arginine]
        );
        assert_eq!(
            distances.iter().map(|d| d.d).collect_vec(),
            vec![155.0, 145.0, 110.0]
        );
    }

    #[test]
    fn recycles_single_y() {
        let distances = original(&["Ser", "Arg"], &["Phe"]).unwrap();
        assert_eq!(distances.len(), 2);
        assert!(distances.iter().all(|d| d.y == Phenylalanine));
        assert_eq!(distances[1].d, 97.0);
    }

    #[test]
    fn pairs_element_wise_when_lengths_match() {
        let distances = original(&["Ser", "Arg"], &["Phe", "Leu"]).unwrap();
        assert_eq!(
            distances,
            vec![
                GranthamDistance {
                    x: Serine,
                    y: Phenylalanine,
                    d: 155.0
                },
                GranthamDistance {
                    x: Arginine,
                    y: Leucine,
                    d: 102.0
                },
            ]
        );
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(original(&[], &[]).unwrap().is_empty());
        assert!(original(&["Ser"], &[]).unwrap().is_empty());
    }

    #[test]
    fn incompatible_lengths_fail() {
        let err = original(&["Ser", "Arg"], &["Phe", "Leu", "Gly"]).unwrap_err();
        assert_eq!(err, GranthamError::IncompatibleLength { x: 2, y: 3 });
    }

    #[test]
    fn invalid_codes_fail() {
        let err = original(&["Ser", "XXX"], &["Phe", "Leu"]).unwrap_err();
        assert!(matches!(
            err,
            GranthamError::InvalidAminoAcidCode { argument: "x", .. }
        ));
        let err = original(&["Ser"], &["phe"]).unwrap_err();
        assert!(matches!(
            err,
            GranthamError::InvalidAminoAcidCode { argument: "y", .. }
        ));
    }

    #[test]
    fn exact_uses_constants() {
        let constants = GranthamConstants {
            rho: 0.0,
            ..GranthamConstants::default()
        };
        let distances = grantham_distance_exact(&["Ser", "Trp"], &["Phe"], &constants).unwrap();
        assert!(distances.iter().all(|d| d.d == 0.0));

        let distances =
            grantham_distance_exact(&["Ser"], &["Phe"], &GranthamConstants::default()).unwrap();
        assert!((distances[0].d - 155.0).abs() <= 1.0);
        assert_ne!(distances[0].d, 155.0);
    }

    #[test]
    fn method_from_str() {
        assert_eq!("original".parse::<Method>().unwrap(), Method::Original);
        assert_eq!("exact".parse::<Method>().unwrap(), Method::Exact);
        assert_eq!(
            "Exact".parse::<Method>().unwrap_err(),
            GranthamError::InvalidMethod("Exact".to_string())
        );
        assert_eq!(Method::default(), Method::Original);
        assert_eq!(Method::Exact.to_string(), "exact");
    }

    #[test]
    fn original_matrix_matches_published_table() {
        let matrix = distance_matrix(Method::Original, &GranthamConstants::default());
        let published = grantham::grantham_distances_matrix();
        for i in 0..20 {
            for j in 0..20 {
                assert_eq!(matrix[i][j], f64::from(published[i][j]));
            }
        }
    }

    #[test]
    fn exact_matrix_has_zero_diagonal() {
        let matrix = distance_matrix(Method::Exact, &GranthamConstants::default());
        for (i, row) in matrix.iter().enumerate() {
            assert_eq!(row[i], 0.0);
        }
    }
}
