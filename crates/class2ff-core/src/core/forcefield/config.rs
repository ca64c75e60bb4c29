use super::subterm::SubTerm;
use serde::Deserialize;

/// Per-run switches that change the coefficient layout of library rows.
///
/// Threaded explicitly through [`super::library::ParameterLibrary::parse`] and the
/// cross-term composer; there is no process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ForcefieldConfig {
    /// `#torsion_3` rows carry `K1 Φ1 K2 Φ2 K3 Φ3`. When false they carry `K1 K2 K3`.
    pub torsion_phases: bool,
    /// `#wilson_out_of_plane` rows carry `K χ0`. When false they carry `K`.
    pub out_of_plane_angle: bool,
}

impl Default for ForcefieldConfig {
    fn default() -> Self {
        Self {
            torsion_phases: true,
            out_of_plane_angle: true,
        }
    }
}

impl ForcefieldConfig {
    /// Coefficient counts a library row of `sub_term` may carry.
    pub fn row_coefficients(&self, sub_term: SubTerm) -> &'static [usize] {
        match sub_term {
            SubTerm::Bond | SubTerm::Angle => &[4],
            SubTerm::BondBond
            | SubTerm::AngleAngle
            | SubTerm::AngleAngleTorsion
            | SubTerm::BondBond13 => &[1],
            SubTerm::BondAngle => &[1, 2],
            SubTerm::Torsion if self.torsion_phases => &[6],
            SubTerm::Torsion => &[3],
            SubTerm::EndBondTorsion | SubTerm::AngleTorsion => &[3, 6],
            SubTerm::MiddleBondTorsion => &[3],
            SubTerm::OutOfPlane if self.out_of_plane_angle => &[2],
            SubTerm::OutOfPlane => &[1],
            SubTerm::NonBond => &[2],
        }
    }

    /// Length of a `sub_term` vector once it is in its complete form, i.e. after phase
    /// expansion and one-sided duplication. Used for zero-filled placeholders.
    pub fn full_len(&self, sub_term: SubTerm) -> usize {
        match sub_term {
            SubTerm::Bond | SubTerm::Angle => 4,
            SubTerm::BondBond
            | SubTerm::AngleAngle
            | SubTerm::AngleAngleTorsion
            | SubTerm::BondBond13 => 1,
            SubTerm::BondAngle | SubTerm::NonBond | SubTerm::OutOfPlane => 2,
            SubTerm::Torsion | SubTerm::EndBondTorsion | SubTerm::AngleTorsion => 6,
            SubTerm::MiddleBondTorsion => 3,
        }
    }

    /// Brings a parsed row into the stored layout: zero phases are interleaved into
    /// phase-less torsions and a zero angle is appended to angle-less out-of-plane rows.
    pub fn expand_row(&self, sub_term: SubTerm, coefficients: Vec<f64>) -> Vec<f64> {
        match sub_term {
            SubTerm::Torsion if !self.torsion_phases => coefficients
                .into_iter()
                .flat_map(|k| [k, 0.0])
                .collect(),
            SubTerm::OutOfPlane if !self.out_of_plane_angle => {
                let mut expanded = coefficients;
                expanded.push(0.0);
                expanded
            }
            _ => coefficients,
        }
    }
}
