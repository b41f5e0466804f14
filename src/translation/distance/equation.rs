use crate::translation::amino_acids::AminoAcid;
use serde::{Deserialize, Serialize};

/// Side chain properties used by the Grantham equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    /// Atomic weight ratio of noncarbon elements in end groups or rings to carbons in the side chain
    pub composition: f64,
    /// Polarity
    pub polarity: f64,
    /// Molecular volume
    pub volume: f64,
}

const fn props(composition: f64, polarity: f64, volume: f64) -> Properties {
    Properties {
        composition,
        polarity,
        volume,
    }
}

// Grantham (1974), Table 1, same order as the distance table
static PROPERTIES: [Properties; 20] = [
    props(1.42, 9.2, 32.0),   // Ser
    props(0.65, 10.5, 124.0), // Arg
    props(0.0, 4.9, 111.0),   // Leu
    props(0.39, 8.0, 32.5),   // Pro
    props(0.71, 8.6, 61.0),   // Thr
    props(0.0, 8.1, 31.0),    // Ala
    props(0.0, 5.9, 84.0),    // Val
    props(0.74, 9.0, 3.0),    // Gly
    props(0.0, 5.2, 111.0),   // Ile
    props(0.0, 5.2, 132.0),   // Phe
    props(0.20, 6.2, 136.0),  // Tyr
    props(2.75, 5.5, 55.0),   // Cys
    props(0.58, 10.4, 96.0),  // His
    props(0.89, 10.5, 85.0),  // Gln
    props(1.33, 11.6, 56.0),  // Asn
    props(0.33, 11.3, 119.0), // Lys
    props(1.38, 13.0, 54.0),  // Asp
    props(0.92, 12.3, 83.0),  // Glu
    props(0.0, 5.7, 105.0),   // Met
    props(0.13, 5.4, 170.0),  // Trp
];

/// Composition, polarity and volume of the 20 standard amino acids,
/// in the order of [`standard_amino_acids`](crate::standard_amino_acids).
pub fn amino_acids_properties() -> &'static [Properties; 20] {
    &PROPERTIES
}

impl AminoAcid {
    /// Side chain properties of the amino acid
    pub fn properties(&self) -> &'static Properties {
        &PROPERTIES[self.index()]
    }
}

/// Weights of the Grantham equation.
///
/// `alpha`, `beta` and `gamma` weight the squared differences in composition,
/// polarity and volume. `rho` scales the result so that the mean distance over
/// all 190 pairs of distinct amino acids is 100. Missing fields in a
/// deserialized configuration fall back to the published values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GranthamConstants {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub rho: f64,
}

impl Default for GranthamConstants {
    fn default() -> Self {
        GranthamConstants {
            alpha: 1.833,
            beta: 0.1018,
            gamma: 0.000399,
            rho: 50.723,
        }
    }
}

/// Evaluates the Grantham equation
///
/// `rho * sqrt(alpha * (c_i - c_j)^2 + beta * (p_i - p_j)^2 + gamma * (v_i - v_j)^2)`
///
/// # Examples
///
/// ```
/// use grantham::{grantham_equation, GranthamConstants};
///
/// // Ser vs Phe
/// let d = grantham_equation(1.42, 0.0, 9.2, 5.2, 32.0, 132.0, &GranthamConstants::default());
/// assert!((d - 155.0).abs() < 1.0);
/// ```
pub fn grantham_equation(
    c_i: f64,
    c_j: f64,
    p_i: f64,
    p_j: f64,
    v_i: f64,
    v_j: f64,
    constants: &GranthamConstants,
) -> f64 {
    let GranthamConstants {
        alpha,
        beta,
        gamma,
        rho,
    } = *constants;
    rho * (alpha * (c_i - c_j).powi(2) + beta * (p_i - p_j).powi(2) + gamma * (v_i - v_j).powi(2))
        .sqrt()
}

/// Grantham distance between two amino acids computed from their properties
pub fn compute(a: &AminoAcid, b: &AminoAcid, constants: &GranthamConstants) -> f64 {
    let (i, j) = (a.properties(), b.properties());
    grantham_equation(
        i.composition,
        j.composition,
        i.polarity,
        j.polarity,
        i.volume,
        j.volume,
        constants,
    )
}
