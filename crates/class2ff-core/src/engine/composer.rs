use super::missing::MissingSet;
use super::resolver::Resolver;
use crate::core::forcefield::config::ForcefieldConfig;
use crate::core::forcefield::library::{CoefficientVector, ParameterLibrary};
use crate::core::forcefield::subterm::SubTerm;
use crate::core::models::topology::{AngleCoeffs, BondCoeffs, DihedralCoeffs, ImproperCoeffs};

/// Builds the coefficient vectors of every interaction type, including the class2 cross
/// terms assembled from several sub-queries.
///
/// All sub-queries of a composite are always made, so every failing one is recorded. If
/// any of them fails the composite becomes a zero-filled placeholder of its full length.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'l> {
    resolver: Resolver<'l>,
    config: ForcefieldConfig,
}

impl<'l> Composer<'l> {
    pub fn new(library: &'l ParameterLibrary, config: ForcefieldConfig) -> Self {
        Self {
            resolver: Resolver::new(library),
            config,
        }
    }

    /// Length of the vector produced for `sub_term`, placeholders included.
    pub const fn output_len(sub_term: SubTerm) -> usize {
        match sub_term {
            SubTerm::BondBond | SubTerm::AngleAngleTorsion | SubTerm::BondBond13 => 3,
            SubTerm::BondAngle | SubTerm::MiddleBondTorsion => 4,
            SubTerm::AngleAngle => 6,
            SubTerm::EndBondTorsion | SubTerm::AngleTorsion => 8,
            SubTerm::Bond | SubTerm::Angle => 4,
            SubTerm::Torsion => 6,
            SubTerm::OutOfPlane | SubTerm::NonBond => 2,
        }
    }

    fn placeholder(sub_term: SubTerm) -> CoefficientVector {
        vec![0.0; Self::output_len(sub_term)]
    }

    fn query(
        &self,
        sub_term: SubTerm,
        types: &[&str],
        missing: &mut MissingSet,
    ) -> Option<CoefficientVector> {
        self.resolver.resolve(sub_term, types, missing)
    }

    fn base(&self, sub_term: SubTerm, types: &[&str], missing: &mut MissingSet) -> CoefficientVector {
        self.query(sub_term, types, missing)
            .unwrap_or_else(|| vec![0.0; self.config.full_len(sub_term)])
    }

    pub fn bond(&self, types: [&str; 2], missing: &mut MissingSet) -> CoefficientVector {
        self.base(SubTerm::Bond, &types, missing)
    }

    pub fn angle(&self, types: [&str; 3], missing: &mut MissingSet) -> CoefficientVector {
        self.base(SubTerm::Angle, &types, missing)
    }

    pub fn torsion(&self, types: [&str; 4], missing: &mut MissingSet) -> CoefficientVector {
        self.base(SubTerm::Torsion, &types, missing)
    }

    pub fn out_of_plane(&self, types: [&str; 4], missing: &mut MissingSet) -> CoefficientVector {
        self.base(SubTerm::OutOfPlane, &types, missing)
    }

    /// Nonbond coefficients in pair-style order `[epsilon, r0]`.
    pub fn pair(&self, ff_type: &str, missing: &mut MissingSet) -> CoefficientVector {
        let mut pair = self.base(SubTerm::NonBond, &[ff_type], missing);
        pair.reverse();
        pair
    }

    /// `bb(ijk) ++ [b(ij)[0], b(jk)[0]]`
    pub fn bond_bond(&self, [i, j, k]: [&str; 3], missing: &mut MissingSet) -> CoefficientVector {
        let bb = self.query(SubTerm::BondBond, &[i, j, k], missing);
        let b1 = self.query(SubTerm::Bond, &[i, j], missing);
        let b2 = self.query(SubTerm::Bond, &[j, k], missing);
        match (bb, b1, b2) {
            (Some(bb), Some(b1), Some(b2)) => [&bb[..], &[b1[0], b2[0]][..]].concat(),
            _ => Self::placeholder(SubTerm::BondBond),
        }
    }

    /// `ba(ijk) ++ [b(ij)[0], b(jk)[0]]`, a single `ba` scalar standing for both sides.
    pub fn bond_angle(&self, [i, j, k]: [&str; 3], missing: &mut MissingSet) -> CoefficientVector {
        let ba = self.query(SubTerm::BondAngle, &[i, j, k], missing);
        let b1 = self.query(SubTerm::Bond, &[i, j], missing);
        let b2 = self.query(SubTerm::Bond, &[j, k], missing);
        match (ba, b1, b2) {
            (Some(ba), Some(b1), Some(b2)) => [&duplicated(&ba, 1)[..], &[b1[0], b2[0]][..]].concat(),
            _ => Self::placeholder(SubTerm::BondAngle),
        }
    }

    /// Improper `(i, j, k, l)` with center `j`:
    /// `aa(ijkl) ++ aa(kjil) ++ aa(ijlk) ++ [a(ijk)[0], a(ijl)[0], a(kjl)[0]]`.
    ///
    /// The three angle-angle keys only swap their outer positions when canonicalized.
    pub fn angle_angle(&self, [i, j, k, l]: [&str; 4], missing: &mut MissingSet) -> CoefficientVector {
        let aa1 = self.query(SubTerm::AngleAngle, &[i, j, k, l], missing);
        let aa2 = self.query(SubTerm::AngleAngle, &[k, j, i, l], missing);
        let aa3 = self.query(SubTerm::AngleAngle, &[i, j, l, k], missing);
        let a1 = self.query(SubTerm::Angle, &[i, j, k], missing);
        let a2 = self.query(SubTerm::Angle, &[i, j, l], missing);
        let a3 = self.query(SubTerm::Angle, &[k, j, l], missing);
        match (aa1, aa2, aa3, a1, a2, a3) {
            (Some(aa1), Some(aa2), Some(aa3), Some(a1), Some(a2), Some(a3)) => {
                [&aa1[..], &aa2[..], &aa3[..], &[a1[0], a2[0], a3[0]][..]].concat()
            }
            _ => Self::placeholder(SubTerm::AngleAngle),
        }
    }

    /// `aat(ijkl) ++ [a(ijk)[0], a(jkl)[0]]`
    pub fn angle_angle_torsion(
        &self,
        [i, j, k, l]: [&str; 4],
        missing: &mut MissingSet,
    ) -> CoefficientVector {
        let aat = self.query(SubTerm::AngleAngleTorsion, &[i, j, k, l], missing);
        let a1 = self.query(SubTerm::Angle, &[i, j, k], missing);
        let a2 = self.query(SubTerm::Angle, &[j, k, l], missing);
        match (aat, a1, a2) {
            (Some(aat), Some(a1), Some(a2)) => [&aat[..], &[a1[0], a2[0]][..]].concat(),
            _ => Self::placeholder(SubTerm::AngleAngleTorsion),
        }
    }

    /// `ebt(ijkl) ++ [b(ij)[0], b(kl)[0]]`, a 3-value `ebt` standing for both ends.
    pub fn end_bond_torsion(
        &self,
        [i, j, k, l]: [&str; 4],
        missing: &mut MissingSet,
    ) -> CoefficientVector {
        let ebt = self.query(SubTerm::EndBondTorsion, &[i, j, k, l], missing);
        let b1 = self.query(SubTerm::Bond, &[i, j], missing);
        let b3 = self.query(SubTerm::Bond, &[k, l], missing);
        match (ebt, b1, b3) {
            (Some(ebt), Some(b1), Some(b3)) => [&duplicated(&ebt, 3)[..], &[b1[0], b3[0]][..]].concat(),
            _ => Self::placeholder(SubTerm::EndBondTorsion),
        }
    }

    /// `mbt(ijkl) ++ [b(jk)[0]]`
    pub fn middle_bond_torsion(
        &self,
        [i, j, k, l]: [&str; 4],
        missing: &mut MissingSet,
    ) -> CoefficientVector {
        let mbt = self.query(SubTerm::MiddleBondTorsion, &[i, j, k, l], missing);
        let b2 = self.query(SubTerm::Bond, &[j, k], missing);
        match (mbt, b2) {
            (Some(mbt), Some(b2)) => [&mbt[..], &[b2[0]][..]].concat(),
            _ => Self::placeholder(SubTerm::MiddleBondTorsion),
        }
    }

    /// `bb13(ijkl) ++ [b(ij)[0], b(kl)[0]]`
    pub fn bond_bond_13(&self, [i, j, k, l]: [&str; 4], missing: &mut MissingSet) -> CoefficientVector {
        let bb13 = self.query(SubTerm::BondBond13, &[i, j, k, l], missing);
        let b1 = self.query(SubTerm::Bond, &[i, j], missing);
        let b3 = self.query(SubTerm::Bond, &[k, l], missing);
        match (bb13, b1, b3) {
            (Some(bb13), Some(b1), Some(b3)) => [&bb13[..], &[b1[0], b3[0]][..]].concat(),
            _ => Self::placeholder(SubTerm::BondBond13),
        }
    }

    /// `at(ijkl) ++ [a(ijk)[0], a(jkl)[0]]`, a 3-value `at` standing for both angles.
    pub fn angle_torsion(&self, [i, j, k, l]: [&str; 4], missing: &mut MissingSet) -> CoefficientVector {
        let at = self.query(SubTerm::AngleTorsion, &[i, j, k, l], missing);
        let a1 = self.query(SubTerm::Angle, &[i, j, k], missing);
        let a2 = self.query(SubTerm::Angle, &[j, k, l], missing);
        match (at, a1, a2) {
            (Some(at), Some(a1), Some(a2)) => [&duplicated(&at, 3)[..], &[a1[0], a2[0]][..]].concat(),
            _ => Self::placeholder(SubTerm::AngleTorsion),
        }
    }

    pub fn bond_type(&self, types: [&str; 2], missing: &mut MissingSet) -> BondCoeffs {
        BondCoeffs {
            bond: self.bond(types, missing),
        }
    }

    pub fn angle_type(&self, types: [&str; 3], missing: &mut MissingSet) -> AngleCoeffs {
        AngleCoeffs {
            angle: self.angle(types, missing),
            bond_bond: self.bond_bond(types, missing),
            bond_angle: self.bond_angle(types, missing),
        }
    }

    pub fn dihedral_type(&self, types: [&str; 4], missing: &mut MissingSet) -> DihedralCoeffs {
        DihedralCoeffs {
            torsion: self.torsion(types, missing),
            middle_bond_torsion: self.middle_bond_torsion(types, missing),
            end_bond_torsion: self.end_bond_torsion(types, missing),
            angle_torsion: self.angle_torsion(types, missing),
            angle_angle_torsion: self.angle_angle_torsion(types, missing),
            bond_bond_13: self.bond_bond_13(types, missing),
        }
    }

    pub fn improper_type(&self, types: [&str; 4], missing: &mut MissingSet) -> ImproperCoeffs {
        ImproperCoeffs {
            out_of_plane: self.out_of_plane(types, missing),
            angle_angle: self.angle_angle(types, missing),
        }
    }
}

/// Repeats a one-sided vector of length `half` so it covers both sides.
fn duplicated(values: &[f64], half: usize) -> CoefficientVector {
    if values.len() == half {
        [values, values].concat()
    } else {
        values.to_vec()
    }
}
