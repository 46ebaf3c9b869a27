//! Physical dimension sets.
//!
//! OpenFOAM encodes the physical dimensions of a field as seven exponents
//! over the SI base quantities, in this fixed order:
//!
//! mass (kg), length (m), time (s), temperature (K), quantity (mol),
//! current (A), luminous intensity (cd).
//!
//! A `dimensions [0 2 -2 0 0 0 0];` entry therefore reads m²/s², the
//! kinematic pressure carried by incompressible solvers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed 7-exponent encoding of a physical quantity's units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionSet(pub [f64; 7]);

impl DimensionSet {
    /// Dimensionless quantity, `[0 0 0 0 0 0 0]`.
    pub const DIMENSIONLESS: DimensionSet = DimensionSet([0.0; 7]);

    /// Build a dimension set from raw exponents.
    pub fn new(exponents: [f64; 7]) -> Self {
        Self(exponents)
    }

    /// Velocity, m/s: `[0 1 -1 0 0 0 0]`.
    pub fn velocity() -> Self {
        Self([0.0, 1.0, -1.0, 0.0, 0.0, 0.0, 0.0])
    }

    /// Kinematic pressure, m²/s²: `[0 2 -2 0 0 0 0]`.
    ///
    /// Incompressible solvers store p divided by density.
    pub fn kinematic_pressure() -> Self {
        Self([0.0, 2.0, -2.0, 0.0, 0.0, 0.0, 0.0])
    }

    /// Static pressure, kg/(m·s²): `[1 -1 -2 0 0 0 0]`.
    pub fn pressure() -> Self {
        Self([1.0, -1.0, -2.0, 0.0, 0.0, 0.0, 0.0])
    }

    /// The raw exponents in solver order.
    pub fn exponents(&self) -> &[f64; 7] {
        &self.0
    }
}

impl fmt::Display for DimensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if e.fract() == 0.0 {
                write!(f, "{}", *e as i64)?;
            } else {
                write!(f, "{}", e)?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integral_exponents() {
        assert_eq!(
            DimensionSet::kinematic_pressure().to_string(),
            "[0 2 -2 0 0 0 0]"
        );
        assert_eq!(DimensionSet::velocity().to_string(), "[0 1 -1 0 0 0 0]");
    }

    #[test]
    fn test_display_fractional_exponent() {
        let d = DimensionSet::new([0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(d.to_string(), "[0 0.5 0 0 0 0 0]");
    }

    #[test]
    fn test_dimensionless() {
        assert_eq!(DimensionSet::DIMENSIONLESS.to_string(), "[0 0 0 0 0 0 0]");
    }
}
