/// Symmetry rule used to reduce a type tuple to canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Single-atom keys; nothing to reorder.
    Identity,
    /// `AB == BA`, `ABC == CBA`.
    Reversible,
    /// `ABCD == DCBA`.
    Torsion,
    /// `(wing1, center, wing2, wing3)` with the three wings interchangeable.
    OutOfPlane,
    /// Angle-angle quadruples: only the outer positions 0 and 3 may swap.
    AngleAngle,
}

/// Reorders `types` into canonical order under `symmetry`, applying the identical
/// permutation to the parallel `indices` slice.
///
/// Returns `true` if the tuple was reordered. For [`Symmetry::Reversible`] and
/// [`Symmetry::Torsion`] this means the tuple was reversed end to end, which is what
/// orientation-sensitive coefficient layouts key off.
///
/// The function is pure over its inputs and idempotent: a canonical tuple is left as is.
pub fn canonicalize<T: Ord, I>(symmetry: Symmetry, types: &mut [T], indices: &mut [I]) -> bool {
    debug_assert_eq!(types.len(), indices.len());
    match symmetry {
        Symmetry::Identity => false,
        Symmetry::Reversible => {
            let last = types.len() - 1;
            if types[0] > types[last] {
                types.reverse();
                indices.reverse();
                true
            } else {
                false
            }
        }
        Symmetry::Torsion => {
            debug_assert_eq!(types.len(), 4);
            if types[0] > types[3] || (types[0] == types[3] && types[1] > types[2]) {
                types.reverse();
                indices.reverse();
                true
            } else {
                false
            }
        }
        Symmetry::OutOfPlane => {
            debug_assert_eq!(types.len(), 4);
            // Descending order over the wings; the center at position 1 never moves.
            let mut reordered = false;
            for (i, j) in [(0, 2), (0, 3), (2, 3)] {
                if types[i] < types[j] {
                    types.swap(i, j);
                    indices.swap(i, j);
                    reordered = true;
                }
            }
            reordered
        }
        Symmetry::AngleAngle => {
            debug_assert_eq!(types.len(), 4);
            if types[0] > types[3] {
                types.swap(0, 3);
                indices.swap(0, 3);
                true
            } else {
                false
            }
        }
    }
}

/// Canonicalizes a type tuple on its own, discarding index bookkeeping.
pub fn canonical_types<'a>(symmetry: Symmetry, types: &[&'a str]) -> (Vec<&'a str>, bool) {
    let mut types = types.to_vec();
    let mut scratch = vec![(); types.len()];
    let reordered = canonicalize(symmetry, &mut types, &mut scratch);
    (types, reordered)
}
