use crate::core::forcefield::canonical::Symmetry;
use serde::{Serialize, Serializer};
use std::fmt;

/// The closed set of interaction classes in a class2 potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InteractionKind {
    Bond,
    Angle,
    Torsion,
    OutOfPlane,
    NonBond,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 5] = [
        Self::Bond,
        Self::Angle,
        Self::Torsion,
        Self::OutOfPlane,
        Self::NonBond,
    ];

    /// Number of atoms taking part in one interaction of this kind.
    pub const fn arity(self) -> usize {
        match self {
            Self::Bond => 2,
            Self::Angle => 3,
            Self::Torsion => 4,
            Self::OutOfPlane => 4,
            Self::NonBond => 1,
        }
    }

    /// Canonicalization rule shared by every sub-term of this kind, except `aa`
    /// which overrides it.
    pub const fn symmetry(self) -> Symmetry {
        match self {
            Self::Bond | Self::Angle => Symmetry::Reversible,
            Self::Torsion => Symmetry::Torsion,
            Self::OutOfPlane => Symmetry::OutOfPlane,
            Self::NonBond => Symmetry::Identity,
        }
    }

    /// Position of this kind's alias in an equivalence row
    /// (nonbond, bond, angle, torsion, out-of-plane).
    pub const fn equivalence_tier(self) -> usize {
        match self {
            Self::NonBond => 0,
            Self::Bond => 1,
            Self::Angle => 2,
            Self::Torsion => 3,
            Self::OutOfPlane => 4,
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bond => "Bond",
                Self::Angle => "Angle",
                Self::Torsion => "Torsion",
                Self::OutOfPlane => "OutOfPlane",
                Self::NonBond => "NonBond",
            }
        )
    }
}

/// An ordered tuple of atom indices as produced by the enumerator, before
/// canonicalization or parameter resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractionTerm<const N: usize> {
    pub atoms: [usize; N],
}

impl<const N: usize> InteractionTerm<N> {
    pub const fn new(atoms: [usize; N]) -> Self {
        Self { atoms }
    }
}

pub type BondTerm = InteractionTerm<2>;
pub type AngleTerm = InteractionTerm<3>;
/// `(a, b, c, d)` with `b`-`c` the central bond.
pub type DihedralTerm = InteractionTerm<4>;
/// `(wing1, center, wing2, wing3)`; the center always sits at position 1.
pub type ImproperTerm = InteractionTerm<4>;

/// A term after canonicalization: atoms in canonical order plus the index of its
/// type in the per-kind type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TopologyTerm<const N: usize> {
    #[serde(serialize_with = "serialize_indices")]
    pub atoms: [usize; N],
    pub type_index: usize,
}

fn serialize_indices<S: Serializer, const N: usize>(
    atoms: &[usize; N],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(atoms.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arities_match_interaction_classes() {
        assert_eq!(InteractionKind::Bond.arity(), 2);
        assert_eq!(InteractionKind::Angle.arity(), 3);
        assert_eq!(InteractionKind::Torsion.arity(), 4);
        assert_eq!(InteractionKind::OutOfPlane.arity(), 4);
        assert_eq!(InteractionKind::NonBond.arity(), 1);
    }

    #[test]
    fn equivalence_tiers_follow_row_layout() {
        let tiers: Vec<usize> = [
            InteractionKind::NonBond,
            InteractionKind::Bond,
            InteractionKind::Angle,
            InteractionKind::Torsion,
            InteractionKind::OutOfPlane,
        ]
        .iter()
        .map(|k| k.equivalence_tier())
        .collect();
        assert_eq!(tiers, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn symmetries_are_assigned_per_kind() {
        assert_eq!(InteractionKind::Bond.symmetry(), Symmetry::Reversible);
        assert_eq!(InteractionKind::Angle.symmetry(), Symmetry::Reversible);
        assert_eq!(InteractionKind::Torsion.symmetry(), Symmetry::Torsion);
        assert_eq!(InteractionKind::OutOfPlane.symmetry(), Symmetry::OutOfPlane);
        assert_eq!(InteractionKind::NonBond.symmetry(), Symmetry::Identity);
    }

    #[test]
    fn display_outputs_kind_names() {
        assert_eq!(InteractionKind::OutOfPlane.to_string(), "OutOfPlane");
        assert_eq!(InteractionKind::NonBond.to_string(), "NonBond");
    }
}
