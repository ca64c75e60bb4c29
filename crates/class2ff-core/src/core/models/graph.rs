use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Atom {atom} lists neighbor {neighbor}, but the graph only has {n_atoms} atoms")]
    NeighborOutOfRange {
        atom: usize,
        neighbor: usize,
        n_atoms: usize,
    },
    #[error("Atom {atom} is bonded to itself")]
    SelfBond { atom: usize },
    #[error("Atom {atom} lists neighbor {neighbor} more than once")]
    DuplicateNeighbor { atom: usize, neighbor: usize },
    #[error("Atom {atom} lists neighbor {neighbor}, but atom {neighbor} does not list {atom}")]
    AsymmetricBond { atom: usize, neighbor: usize },
}

/// A single atom of the connectivity graph.
///
/// Only the force-field type and the ordered neighbor list matter for topology
/// synthesis; coordinates are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphAtom {
    /// Force-field atom type, e.g. `"c3'"`.
    #[serde(rename = "type")]
    pub ff_type: String,
    /// Indices of bonded atoms, in the order the source supplied them.
    #[serde(default)]
    pub neighbors: Vec<usize>,
}

impl GraphAtom {
    pub fn new(ff_type: impl Into<String>, neighbors: Vec<usize>) -> Self {
        Self {
            ff_type: ff_type.into(),
            neighbors,
        }
    }
}

/// Validated, read-only molecular connectivity.
///
/// Adjacency is guaranteed to be symmetric, in range, free of self-bonds and free of
/// repeated neighbors, which is what the topology enumerator relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectivityGraph {
    atoms: Vec<GraphAtom>,
}

impl ConnectivityGraph {
    pub fn new(atoms: Vec<GraphAtom>) -> Result<Self, GraphError> {
        let n_atoms = atoms.len();
        for (atom, a) in atoms.iter().enumerate() {
            let mut seen = HashSet::with_capacity(a.neighbors.len());
            for &neighbor in &a.neighbors {
                if neighbor >= n_atoms {
                    return Err(GraphError::NeighborOutOfRange {
                        atom,
                        neighbor,
                        n_atoms,
                    });
                }
                if neighbor == atom {
                    return Err(GraphError::SelfBond { atom });
                }
                if !seen.insert(neighbor) {
                    return Err(GraphError::DuplicateNeighbor { atom, neighbor });
                }
                if !atoms[neighbor].neighbors.contains(&atom) {
                    return Err(GraphError::AsymmetricBond { atom, neighbor });
                }
            }
        }
        Ok(Self { atoms })
    }

    pub fn atoms(&self) -> &[GraphAtom] {
        &self.atoms
    }

    pub fn atom(&self, index: usize) -> Option<&GraphAtom> {
        self.atoms.get(index)
    }

    #[inline]
    pub fn ff_type(&self, index: usize) -> &str {
        &self.atoms[index].ff_type
    }

    #[inline]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.atoms[index].neighbors
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn bond_count(&self) -> usize {
        self.atoms.iter().map(|a| a.neighbors.len()).sum::<usize>() / 2
    }
}

/// Incremental construction of a [`ConnectivityGraph`] from atoms and undirected bonds.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    atoms: Vec<GraphAtom>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_atom(&mut self, ff_type: impl Into<String>) -> usize {
        self.atoms.push(GraphAtom::new(ff_type, Vec::new()));
        self.atoms.len() - 1
    }

    /// Bonds `i` and `j`. A bond that already exists is ignored.
    pub fn add_bond(&mut self, i: usize, j: usize) -> Result<&mut Self, GraphError> {
        let n_atoms = self.atoms.len();
        for (atom, neighbor) in [(i, j), (j, i)] {
            if neighbor >= n_atoms {
                return Err(GraphError::NeighborOutOfRange {
                    atom,
                    neighbor,
                    n_atoms,
                });
            }
        }
        if i == j {
            return Err(GraphError::SelfBond { atom: i });
        }
        if !self.atoms[i].neighbors.contains(&j) {
            self.atoms[i].neighbors.push(j);
            self.atoms[j].neighbors.push(i);
        }
        Ok(self)
    }

    pub fn build(self) -> Result<ConnectivityGraph, GraphError> {
        ConnectivityGraph::new(self.atoms)
    }
}
