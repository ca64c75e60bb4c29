use crate::core::forcefield::key::TypeKey;
use crate::core::forcefield::library::CoefficientVector;
use serde::Serialize;

/// One distinct canonical type tuple of an interaction class and its composed
/// coefficients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeEntry<C> {
    pub key: TypeKey,
    pub coefficients: C,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondCoeffs {
    /// `[r0, K2, K3, K4]`
    pub bond: CoefficientVector,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleCoeffs {
    /// `[theta0, K2, K3, K4]`
    pub angle: CoefficientVector,
    /// `[M, r1, r2]`
    pub bond_bond: CoefficientVector,
    /// `[N1, N2, r1, r2]`
    pub bond_angle: CoefficientVector,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DihedralCoeffs {
    /// `[K1, phi1, K2, phi2, K3, phi3]`
    pub torsion: CoefficientVector,
    pub middle_bond_torsion: CoefficientVector,
    pub end_bond_torsion: CoefficientVector,
    pub angle_torsion: CoefficientVector,
    pub angle_angle_torsion: CoefficientVector,
    pub bond_bond_13: CoefficientVector,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImproperCoeffs {
    /// `[K, chi0]`
    pub out_of_plane: CoefficientVector,
    pub angle_angle: CoefficientVector,
}

/// A distinct atom type of the system with its nonbond pair coefficients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomTypeEntry {
    pub key: String,
    pub mass: Option<f64>,
    pub element: Option<String>,
    /// `[epsilon, r0]`
    pub pair: CoefficientVector,
}
