use crate::core::models::graph::ConnectivityGraph;
use crate::core::models::term::{AngleTerm, BondTerm, DihedralTerm, ImproperTerm};

/// Raw bonded terms of a graph, in enumeration order and not yet canonicalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumeratedTerms {
    pub bonds: Vec<BondTerm>,
    pub angles: Vec<AngleTerm>,
    pub dihedrals: Vec<DihedralTerm>,
    pub impropers: Vec<ImproperTerm>,
}

impl EnumeratedTerms {
    pub fn total(&self) -> usize {
        self.bonds.len() + self.angles.len() + self.dihedrals.len() + self.impropers.len()
    }
}

pub fn enumerate(graph: &ConnectivityGraph) -> EnumeratedTerms {
    EnumeratedTerms {
        bonds: bonds(graph),
        angles: angles(graph),
        dihedrals: dihedrals(graph),
        impropers: impropers(graph),
    }
}

/// Each undirected bond once, as `(i, j)` with `i < j`.
pub fn bonds(graph: &ConnectivityGraph) -> Vec<BondTerm> {
    let mut terms = Vec::with_capacity(graph.bond_count());
    for i in 0..graph.len() {
        for &j in graph.neighbors(i) {
            if i < j {
                terms.push(BondTerm::new([i, j]));
            }
        }
    }
    terms
}

/// For every center `b`, each pair of neighbors `(i, k)` with `k` listed after `i`.
pub fn angles(graph: &ConnectivityGraph) -> Vec<AngleTerm> {
    let mut terms = Vec::new();
    for center in 0..graph.len() {
        let neighbors = graph.neighbors(center);
        for (p, &i) in neighbors.iter().enumerate() {
            for &k in &neighbors[p + 1..] {
                terms.push(AngleTerm::new([i, center, k]));
            }
        }
    }
    terms
}

/// Every `(a, b, c, d)` path around a central bond `b < c` where both central atoms have
/// at least two neighbors.
///
/// Paths are not filtered or deduplicated, so a three-membered ring contributes
/// quadruples with `a == d`.
pub fn dihedrals(graph: &ConnectivityGraph) -> Vec<DihedralTerm> {
    let mut terms = Vec::new();
    for b in 0..graph.len() {
        if graph.neighbors(b).len() < 2 {
            continue;
        }
        for &c in graph.neighbors(b) {
            if b >= c || graph.neighbors(c).len() < 2 {
                continue;
            }
            for &a in graph.neighbors(b) {
                if a == c {
                    continue;
                }
                for &d in graph.neighbors(c) {
                    if d == b {
                        continue;
                    }
                    terms.push(DihedralTerm::new([a, b, c, d]));
                }
            }
        }
    }
    terms
}

/// Out-of-plane terms with the center at position 1.
///
/// All three-neighbor centers come first, one term each. Four-neighbor centers follow,
/// four terms each, dropping neighbors 0, 1, 2 and 3 in turn. Other centers yield none.
pub fn impropers(graph: &ConnectivityGraph) -> Vec<ImproperTerm> {
    let mut terms = Vec::new();
    for center in 0..graph.len() {
        if let &[n0, n1, n2] = graph.neighbors(center) {
            terms.push(ImproperTerm::new([n0, center, n1, n2]));
        }
    }
    for center in 0..graph.len() {
        if let &[n0, n1, n2, n3] = graph.neighbors(center) {
            terms.extend([
                ImproperTerm::new([n1, center, n2, n3]),
                ImproperTerm::new([n0, center, n2, n3]),
                ImproperTerm::new([n0, center, n1, n3]),
                ImproperTerm::new([n0, center, n1, n2]),
            ]);
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::graph::{GraphAtom, GraphBuilder};

    fn graph(types: &[&str], bonds: &[(usize, usize)]) -> ConnectivityGraph {
        let mut builder = GraphBuilder::new();
        for t in types {
            builder.add_atom(*t);
        }
        for &(i, j) in bonds {
            builder.add_bond(i, j).unwrap();
        }
        builder.build().unwrap()
    }

    fn ethane() -> ConnectivityGraph {
        graph(
            &["c4", "c4", "h1", "h1", "h1", "h1", "h1", "h1"],
            &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (1, 6), (1, 7)],
        )
    }

    #[test]
    fn chain_of_three_yields_two_bonds_and_one_angle() {
        let g = graph(&["a", "b", "c"], &[(0, 1), (1, 2)]);
        let terms = enumerate(&g);
        assert_eq!(
            terms.bonds,
            vec![BondTerm::new([0, 1]), BondTerm::new([1, 2])]
        );
        assert_eq!(terms.angles, vec![AngleTerm::new([0, 1, 2])]);
        assert!(terms.dihedrals.is_empty());
        assert!(terms.impropers.is_empty());
    }

    #[test]
    fn bonds_are_emitted_once_with_lower_index_first() {
        let g = graph(&["a", "b", "c"], &[(2, 0), (1, 2)]);
        assert_eq!(
            bonds(&g),
            vec![BondTerm::new([0, 2]), BondTerm::new([1, 2])]
        );
    }

    #[test]
    fn angles_follow_neighbor_list_positions() {
        let atoms = vec![
            GraphAtom::new("c", vec![3, 1, 2]),
            GraphAtom::new("h", vec![0]),
            GraphAtom::new("h", vec![0]),
            GraphAtom::new("h", vec![0]),
        ];
        let g = ConnectivityGraph::new(atoms).unwrap();
        assert_eq!(
            angles(&g),
            vec![
                AngleTerm::new([3, 0, 1]),
                AngleTerm::new([3, 0, 2]),
                AngleTerm::new([1, 0, 2]),
            ]
        );
    }

    #[test]
    fn ethane_term_counts() {
        let terms = enumerate(&ethane());
        assert_eq!(terms.bonds.len(), 7);
        assert_eq!(terms.angles.len(), 12);
        assert_eq!(terms.dihedrals.len(), 9);
        assert_eq!(terms.impropers.len(), 8);
        assert_eq!(terms.total(), 36);
    }

    #[test]
    fn dihedrals_run_through_central_bond() {
        let g = graph(&["a", "b", "c", "d"], &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(dihedrals(&g), vec![DihedralTerm::new([0, 1, 2, 3])]);
    }

    #[test]
    fn dihedrals_skip_terminal_central_atoms() {
        let g = graph(&["a", "b", "c"], &[(0, 1), (1, 2)]);
        assert!(dihedrals(&g).is_empty());
    }

    #[test]
    fn three_membered_ring_emits_degenerate_dihedrals() {
        let g = graph(&["a", "a", "a"], &[(0, 1), (1, 2), (2, 0)]);
        let terms = dihedrals(&g);
        assert_eq!(terms.len(), 3);
        assert!(terms.contains(&DihedralTerm::new([2, 0, 1, 2])));
        assert!(terms.iter().all(|t| t.atoms[0] == t.atoms[3]));
    }

    #[test]
    fn four_membered_ring_visits_each_central_bond() {
        let g = graph(&["a"; 4], &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(
            dihedrals(&g),
            vec![
                DihedralTerm::new([3, 0, 1, 2]),
                DihedralTerm::new([1, 0, 3, 2]),
                DihedralTerm::new([0, 1, 2, 3]),
                DihedralTerm::new([1, 2, 3, 0]),
            ]
        );
    }

    #[test]
    fn improper_counts_depend_on_neighbor_count() {
        let trigonal = graph(&["c", "h", "h", "h"], &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(
            impropers(&trigonal),
            vec![ImproperTerm::new([1, 0, 2, 3])]
        );

        let tetrahedral = graph(
            &["c", "h", "h", "h", "h"],
            &[(0, 1), (0, 2), (0, 3), (0, 4)],
        );
        assert_eq!(
            impropers(&tetrahedral),
            vec![
                ImproperTerm::new([2, 0, 3, 4]),
                ImproperTerm::new([1, 0, 3, 4]),
                ImproperTerm::new([1, 0, 2, 4]),
                ImproperTerm::new([1, 0, 2, 3]),
            ]
        );

        let linear = graph(&["c", "h", "h"], &[(0, 1), (0, 2)]);
        assert!(impropers(&linear).is_empty());
    }

    #[test]
    fn three_neighbor_impropers_precede_four_neighbor_impropers() {
        let g = graph(
            &["c", "h", "h", "h", "n", "h", "h"],
            &[(0, 1), (0, 2), (0, 3), (0, 4), (4, 5), (4, 6)],
        );
        assert_eq!(
            impropers(&g),
            vec![
                ImproperTerm::new([0, 4, 5, 6]),
                ImproperTerm::new([2, 0, 3, 4]),
                ImproperTerm::new([1, 0, 3, 4]),
                ImproperTerm::new([1, 0, 2, 4]),
                ImproperTerm::new([1, 0, 2, 3]),
            ]
        );
    }

    #[test]
    fn centers_with_five_neighbors_yield_no_impropers() {
        let g = graph(
            &["p", "f", "f", "f", "f", "f"],
            &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)],
        );
        assert!(impropers(&g).is_empty());
    }

    #[test]
    fn empty_graph_yields_no_terms() {
        let g = ConnectivityGraph::new(Vec::new()).unwrap();
        assert_eq!(enumerate(&g), EnumeratedTerms::default());
    }
}
