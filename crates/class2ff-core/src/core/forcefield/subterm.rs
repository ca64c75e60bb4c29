use super::canonical::Symmetry;
use crate::core::models::term::InteractionKind;
use phf::{Map, phf_map};
use serde::{Serialize, Serializer};
use std::fmt;

/// One coefficient table of a class2 library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubTerm {
    Bond,
    Angle,
    BondBond,
    BondAngle,
    Torsion,
    EndBondTorsion,
    MiddleBondTorsion,
    AngleTorsion,
    AngleAngleTorsion,
    BondBond13,
    OutOfPlane,
    AngleAngle,
    NonBond,
}

static HEADERS: Map<&'static str, SubTerm> = phf_map! {
    "#quartic_bond" => SubTerm::Bond,
    "#quartic_angle" => SubTerm::Angle,
    "#bond-bond" => SubTerm::BondBond,
    "#bond-angle" => SubTerm::BondAngle,
    "#torsion_3" => SubTerm::Torsion,
    "#end_bond-torsion_3" => SubTerm::EndBondTorsion,
    "#middle_bond-torsion_3" => SubTerm::MiddleBondTorsion,
    "#angle-torsion_3" => SubTerm::AngleTorsion,
    "#angle-angle-torsion_1" => SubTerm::AngleAngleTorsion,
    "#bond-bond_1_3" => SubTerm::BondBond13,
    "#wilson_out_of_plane" => SubTerm::OutOfPlane,
    "#angle-angle" => SubTerm::AngleAngle,
    "#nonbond(9-6)" => SubTerm::NonBond,
};

impl SubTerm {
    pub const ALL: [SubTerm; 13] = [
        Self::Bond,
        Self::Angle,
        Self::BondBond,
        Self::BondAngle,
        Self::Torsion,
        Self::EndBondTorsion,
        Self::MiddleBondTorsion,
        Self::AngleTorsion,
        Self::AngleAngleTorsion,
        Self::BondBond13,
        Self::OutOfPlane,
        Self::AngleAngle,
        Self::NonBond,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Bond => "b",
            Self::Angle => "a",
            Self::BondBond => "bb",
            Self::BondAngle => "ba",
            Self::Torsion => "tor",
            Self::EndBondTorsion => "ebt",
            Self::MiddleBondTorsion => "mbt",
            Self::AngleTorsion => "at",
            Self::AngleAngleTorsion => "aat",
            Self::BondBond13 => "bb13",
            Self::OutOfPlane => "oop",
            Self::AngleAngle => "aa",
            Self::NonBond => "vdw",
        }
    }

    /// Section header introducing this sub-term's table in a library file.
    pub const fn header(self) -> &'static str {
        match self {
            Self::Bond => "#quartic_bond",
            Self::Angle => "#quartic_angle",
            Self::BondBond => "#bond-bond",
            Self::BondAngle => "#bond-angle",
            Self::Torsion => "#torsion_3",
            Self::EndBondTorsion => "#end_bond-torsion_3",
            Self::MiddleBondTorsion => "#middle_bond-torsion_3",
            Self::AngleTorsion => "#angle-torsion_3",
            Self::AngleAngleTorsion => "#angle-angle-torsion_1",
            Self::BondBond13 => "#bond-bond_1_3",
            Self::OutOfPlane => "#wilson_out_of_plane",
            Self::AngleAngle => "#angle-angle",
            Self::NonBond => "#nonbond(9-6)",
        }
    }

    /// Header without its leading `#`, for diagnostics.
    pub fn label(self) -> &'static str {
        &self.header()[1..]
    }

    pub fn from_header(header: &str) -> Option<Self> {
        HEADERS.get(header).copied()
    }

    pub const fn kind(self) -> InteractionKind {
        match self {
            Self::Bond => InteractionKind::Bond,
            Self::Angle | Self::BondBond | Self::BondAngle => InteractionKind::Angle,
            Self::Torsion
            | Self::EndBondTorsion
            | Self::MiddleBondTorsion
            | Self::AngleTorsion
            | Self::AngleAngleTorsion
            | Self::BondBond13 => InteractionKind::Torsion,
            Self::OutOfPlane | Self::AngleAngle => InteractionKind::OutOfPlane,
            Self::NonBond => InteractionKind::NonBond,
        }
    }

    pub const fn symmetry(self) -> Symmetry {
        match self {
            Self::AngleAngle => Symmetry::AngleAngle,
            other => other.kind().symmetry(),
        }
    }

    /// Number of atom-type tokens in a library row.
    pub const fn type_arity(self) -> usize {
        self.kind().arity()
    }

    /// Whether resolution may fall back to wildcard end atoms.
    pub const fn allows_wildcards(self) -> bool {
        matches!(self.kind(), InteractionKind::Torsion)
    }

    /// Whether the coefficient tail must follow a reversal of the type tuple, and how.
    pub const fn orientation(self) -> CoefficientOrientation {
        match self {
            Self::BondAngle => CoefficientOrientation::SwapScalars,
            Self::EndBondTorsion | Self::AngleTorsion => CoefficientOrientation::SwapHalves,
            _ => CoefficientOrientation::Symmetric,
        }
    }
}

/// How a coefficient tail is reordered when its type tuple is reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientOrientation {
    Symmetric,
    /// Two scalars, one per side (`ba`).
    SwapScalars,
    /// Two 3-value halves, one per side (`ebt`, `at`).
    SwapHalves,
}

impl CoefficientOrientation {
    /// Reorders `coefficients` to follow a reversed type tuple. Single-sided layouts
    /// (one `ba` scalar, three `ebt`/`at` values) are symmetric and stay untouched.
    pub fn reverse(self, coefficients: &mut [f64]) {
        match self {
            Self::Symmetric => {}
            Self::SwapScalars => {
                if coefficients.len() == 2 {
                    coefficients.swap(0, 1);
                }
            }
            Self::SwapHalves => {
                if coefficients.len() == 6 {
                    let (left, right) = coefficients.split_at_mut(3);
                    left.swap_with_slice(right);
                }
            }
        }
    }
}

impl fmt::Display for SubTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for SubTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_header_maps_back_to_its_sub_term() {
        for sub_term in SubTerm::ALL {
            assert_eq!(SubTerm::from_header(sub_term.header()), Some(sub_term));
        }
        assert_eq!(HEADERS.len(), SubTerm::ALL.len());
        assert_eq!(SubTerm::from_header("#bond-bond_1_3"), Some(SubTerm::BondBond13));
        assert_eq!(SubTerm::from_header("#morse_bond"), None);
        assert_eq!(SubTerm::from_header("quartic_bond"), None);
    }

    #[test]
    fn angle_angle_uses_its_own_symmetry() {
        assert_eq!(SubTerm::AngleAngle.symmetry(), Symmetry::AngleAngle);
        assert_eq!(SubTerm::OutOfPlane.symmetry(), Symmetry::OutOfPlane);
        assert_eq!(SubTerm::AngleAngle.kind(), InteractionKind::OutOfPlane);
    }

    #[test]
    fn only_torsion_family_allows_wildcards() {
        let wildcard: Vec<_> = SubTerm::ALL
            .into_iter()
            .filter(|s| s.allows_wildcards())
            .map(SubTerm::code)
            .collect();
        assert_eq!(wildcard, vec!["tor", "ebt", "mbt", "at", "aat", "bb13"]);
    }

    #[test]
    fn type_arities_follow_interaction_kind() {
        assert_eq!(SubTerm::Bond.type_arity(), 2);
        assert_eq!(SubTerm::BondAngle.type_arity(), 3);
        assert_eq!(SubTerm::BondBond13.type_arity(), 4);
        assert_eq!(SubTerm::AngleAngle.type_arity(), 4);
        assert_eq!(SubTerm::NonBond.type_arity(), 1);
    }

    #[test]
    fn label_strips_header_marker() {
        assert_eq!(SubTerm::Bond.label(), "quartic_bond");
        assert_eq!(SubTerm::NonBond.label(), "nonbond(9-6)");
    }

    #[test]
    fn orientation_swaps_two_sided_layouts_only() {
        let mut ba = [1.0, 2.0];
        CoefficientOrientation::SwapScalars.reverse(&mut ba);
        assert_eq!(ba, [2.0, 1.0]);

        let mut single = [1.0];
        CoefficientOrientation::SwapScalars.reverse(&mut single);
        assert_eq!(single, [1.0]);

        let mut ebt = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        CoefficientOrientation::SwapHalves.reverse(&mut ebt);
        assert_eq!(ebt, [4.0, 5.0, 6.0, 1.0, 2.0, 3.0]);

        let mut half = [1.0, 2.0, 3.0];
        CoefficientOrientation::SwapHalves.reverse(&mut half);
        assert_eq!(half, [1.0, 2.0, 3.0]);
    }
}
