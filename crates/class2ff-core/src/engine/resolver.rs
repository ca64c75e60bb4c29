use super::missing::MissingSet;
use crate::core::forcefield::key::{TypeKey, WILDCARD};
use crate::core::forcefield::library::{CoefficientVector, ParameterLibrary};
use crate::core::forcefield::subterm::SubTerm;
use tracing::trace;

/// The fallback tier that satisfied a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Exact,
    Equivalence,
    Wildcard,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'l> {
    pub tier: Tier,
    /// Coefficients as stored, in the orientation of the matched library key.
    pub coefficients: &'l [f64],
    /// Whether the matched key runs opposite to the queried types.
    pub reversed: bool,
}

impl Resolution<'_> {
    /// The coefficients reordered to follow the queried types.
    pub fn oriented(&self, sub_term: SubTerm) -> CoefficientVector {
        let mut coefficients = self.coefficients.to_vec();
        if self.reversed {
            sub_term.orientation().reverse(&mut coefficients);
        }
        coefficients
    }
}

/// Tiered lookup of sub-term coefficients in a [`ParameterLibrary`].
///
/// Tiers are tried in order and the first hit wins:
///
/// 1. The canonical key of the literal types.
/// 2. The canonical key of the types replaced by their equivalence aliases for the
///    sub-term's tier.
/// 3. For torsion-class sub-terms only, the literal canonical types with wildcard ends:
///    `[t0, t1, t2, *]`, then `[*, t1, t2, t3]`, then `[*, t1, t2, *]`.
///
/// Aliased and wildcard candidates are built position by position from the tier-1 key
/// and canonicalized again, so a hit may be reversed relative to the query.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'l> {
    library: &'l ParameterLibrary,
}

impl<'l> Resolver<'l> {
    pub fn new(library: &'l ParameterLibrary) -> Self {
        Self { library }
    }

    /// Looks `types` up without recording anything.
    pub fn lookup(&self, sub_term: SubTerm, types: &[&str]) -> Option<Resolution<'l>> {
        self.search(sub_term, types).1
    }

    /// Resolves `types` for `sub_term`, recording `(sub_term, canonical key)` in `missing`
    /// when every tier fails. One-sided coefficients come back in the order of `types`.
    pub fn resolve(
        &self,
        sub_term: SubTerm,
        types: &[&str],
        missing: &mut MissingSet,
    ) -> Option<CoefficientVector> {
        let (key, resolution) = self.search(sub_term, types);
        match resolution {
            Some(resolution) => Some(resolution.oriented(sub_term)),
            None => {
                trace!(sub_term = sub_term.code(), key = %key, "No parameters found.");
                missing.record(sub_term, key);
                None
            }
        }
    }

    fn search(&self, sub_term: SubTerm, types: &[&str]) -> (TypeKey, Option<Resolution<'l>>) {
        let (exact, reversed) = TypeKey::canonical(sub_term.symmetry(), types);
        let resolution = self.find(sub_term, &exact).map(|(tier, coefficients, flipped)| {
            Resolution {
                tier,
                coefficients,
                reversed: reversed != flipped,
            }
        });
        (exact, resolution)
    }

    /// Returns the matching tier, the stored coefficients and whether the matched key
    /// is reversed relative to `exact`.
    fn find(&self, sub_term: SubTerm, exact: &TypeKey) -> Option<(Tier, &'l [f64], bool)> {
        let table = self.library.table(sub_term);
        let symmetry = sub_term.symmetry();

        if let Some(coefficients) = table.get(exact) {
            return Some((Tier::Exact, coefficients, false));
        }

        let tier = sub_term.kind().equivalence_tier();
        let equivalences = self.library.equivalences();
        let aliased: Vec<&str> = exact
            .types()
            .iter()
            .map(|t| equivalences.alias(t, tier))
            .collect();
        let (equivalent, flipped) = TypeKey::canonical(symmetry, &aliased);
        if let Some(coefficients) = table.get(&equivalent) {
            return Some((Tier::Equivalence, coefficients, flipped));
        }

        if !sub_term.allows_wildcards() || exact.len() != 4 {
            return None;
        }
        let t = exact.as_strs();
        [
            [t[0], t[1], t[2], WILDCARD],
            [WILDCARD, t[1], t[2], t[3]],
            [WILDCARD, t[1], t[2], WILDCARD],
        ]
        .iter()
        .find_map(|candidate| {
            let (wildcard, flipped) = TypeKey::canonical(symmetry, candidate);
            table
                .get(&wildcard)
                .map(|coefficients| (Tier::Wildcard, coefficients, flipped))
        })
    }
}
