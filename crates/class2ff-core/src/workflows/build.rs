use crate::core::forcefield::canonical::canonicalize;
use crate::core::forcefield::config::ForcefieldConfig;
use crate::core::forcefield::key::TypeKey;
use crate::core::forcefield::library::ParameterLibrary;
use crate::core::io::read_graph_from_path;
use crate::core::models::graph::ConnectivityGraph;
use crate::core::models::term::{InteractionKind, InteractionTerm, TopologyTerm};
use crate::core::models::topology::{
    AngleCoeffs, AtomTypeEntry, BondCoeffs, DihedralCoeffs, ImproperCoeffs, TypeEntry,
};
use crate::core::topology::enumerate::enumerate;
use crate::core::topology::registry::TypeRegistry;
use crate::engine::composer::Composer;
use crate::engine::error::EngineError;
use crate::engine::missing::{MissingRecord, MissingSet};
use crate::engine::progress::{Progress, ProgressReporter};
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fully parameterized bonded topology of one system.
///
/// Every term carries the index of its canonical type in the matching `*_types` table.
/// Type tables are numbered in first-seen order. Coefficients that could not be resolved
/// are zero-filled at their full length and reported in `missing`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParameterizedTopology {
    /// Atom-type index of each atom.
    pub atoms: Vec<usize>,
    pub atom_types: Vec<AtomTypeEntry>,
    pub bonds: Vec<TopologyTerm<2>>,
    pub angles: Vec<TopologyTerm<3>>,
    pub dihedrals: Vec<TopologyTerm<4>>,
    pub impropers: Vec<TopologyTerm<4>>,
    pub bond_types: Vec<TypeEntry<BondCoeffs>>,
    pub angle_types: Vec<TypeEntry<AngleCoeffs>>,
    pub dihedral_types: Vec<TypeEntry<DihedralCoeffs>>,
    pub improper_types: Vec<TypeEntry<ImproperCoeffs>>,
    pub missing: Vec<MissingRecord>,
}

impl ParameterizedTopology {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn term_count(&self) -> usize {
        self.bonds.len() + self.angles.len() + self.dihedrals.len() + self.impropers.len()
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

/// Canonical terms of one interaction class plus the type tuple behind each type index.
struct TypedTerms<'g, const N: usize> {
    terms: Vec<TopologyTerm<N>>,
    keys: Vec<TypeKey>,
    types: Vec<[&'g str; N]>,
}

fn assign_types<'g, const N: usize>(
    graph: &'g ConnectivityGraph,
    terms: &[InteractionTerm<N>],
    kind: InteractionKind,
) -> TypedTerms<'g, N> {
    let mut registry = TypeRegistry::new();
    let mut types_by_index: Vec<[&'g str; N]> = Vec::new();
    let symmetry = kind.symmetry();

    let terms = terms
        .iter()
        .map(|term| {
            let mut atoms = term.atoms;
            let mut types = atoms.map(|atom| graph.ff_type(atom));
            canonicalize(symmetry, &mut types, &mut atoms);
            let type_index = registry.register(TypeKey::from_types(types.as_slice()));
            if type_index == types_by_index.len() {
                types_by_index.push(types);
            }
            TopologyTerm { atoms, type_index }
        })
        .collect();

    TypedTerms {
        terms,
        keys: registry.into_keys(),
        types: types_by_index,
    }
}

/// Composes one value per type tuple. Each tuple gets its own [`MissingSet`]; the sets are
/// merged in type order so the report does not depend on scheduling.
fn compose_all<'t, T, const N: usize, F>(
    types: &[[&'t str; N]],
    compose: F,
) -> (Vec<T>, MissingSet)
where
    T: Send,
    F: Fn([&'t str; N], &mut MissingSet) -> T + Send + Sync,
{
    #[cfg(not(feature = "parallel"))]
    let iterator = types.iter();

    #[cfg(feature = "parallel")]
    let iterator = types.par_iter();

    let results: Vec<(T, MissingSet)> = iterator
        .map(|&t| {
            let mut local = MissingSet::new();
            let value = compose(t, &mut local);
            (value, local)
        })
        .collect();

    let mut missing = MissingSet::new();
    let values = results
        .into_iter()
        .map(|(value, local)| {
            missing.merge(local);
            value
        })
        .collect();
    (values, missing)
}

fn with_keys<C>(keys: Vec<TypeKey>, coefficients: Vec<C>) -> Vec<TypeEntry<C>> {
    keys.into_iter()
        .zip(coefficients)
        .map(|(key, coefficients)| TypeEntry { key, coefficients })
        .collect()
}

/// Enumerates, types and parameterizes every bonded term of `graph`.
///
/// Never fails: unresolved parameters are zero-filled and listed in
/// [`ParameterizedTopology::missing`].
#[instrument(skip_all, name = "build_workflow")]
pub fn run(
    graph: &ConnectivityGraph,
    library: &ParameterLibrary,
    config: &ForcefieldConfig,
    reporter: &ProgressReporter,
) -> ParameterizedTopology {
    reporter.report(Progress::PhaseStart {
        name: "Enumeration",
    });
    let enumerated = enumerate(graph);
    info!(
        atoms = graph.len(),
        bonds = enumerated.bonds.len(),
        angles = enumerated.angles.len(),
        dihedrals = enumerated.dihedrals.len(),
        impropers = enumerated.impropers.len(),
        "Enumerated bonded terms."
    );

    let mut atom_registry = TypeRegistry::new();
    let mut atom_types: Vec<[&str; 1]> = Vec::new();
    let atoms: Vec<usize> = (0..graph.len())
        .map(|i| {
            let ff_type = graph.ff_type(i);
            let index = atom_registry.register(TypeKey::from_types(&[ff_type]));
            if index == atom_types.len() {
                atom_types.push([ff_type]);
            }
            index
        })
        .collect();

    let bonds = assign_types(graph, &enumerated.bonds, InteractionKind::Bond);
    let angles = assign_types(graph, &enumerated.angles, InteractionKind::Angle);
    let dihedrals = assign_types(graph, &enumerated.dihedrals, InteractionKind::Torsion);
    let impropers = assign_types(graph, &enumerated.impropers, InteractionKind::OutOfPlane);
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Resolution" });
    let composer = Composer::new(library, *config);

    let (pairs, mut missing) = compose_all(&atom_types, |[t], m| composer.pair(t, m));
    let (bond_coeffs, bond_missing) = compose_all(&bonds.types, |t, m| composer.bond_type(t, m));
    let (angle_coeffs, angle_missing) =
        compose_all(&angles.types, |t, m| composer.angle_type(t, m));
    let (dihedral_coeffs, dihedral_missing) =
        compose_all(&dihedrals.types, |t, m| composer.dihedral_type(t, m));
    let (improper_coeffs, improper_missing) =
        compose_all(&impropers.types, |t, m| composer.improper_type(t, m));
    for local in [bond_missing, angle_missing, dihedral_missing, improper_missing] {
        missing.merge(local);
    }

    let atom_types = atom_types
        .iter()
        .zip(pairs)
        .map(|(&[name], pair)| {
            let record = library.atom_type(name);
            if record.is_none() {
                warn!(atom_type = name, "No mass found for atom type.");
            }
            AtomTypeEntry {
                key: name.to_string(),
                mass: record.map(|r| r.mass),
                element: record.map(|r| r.element.clone()),
                pair,
            }
        })
        .collect();
    reporter.report(Progress::PhaseFinish);

    let topology = ParameterizedTopology {
        atoms,
        atom_types,
        bonds: bonds.terms,
        angles: angles.terms,
        dihedrals: dihedrals.terms,
        impropers: impropers.terms,
        bond_types: with_keys(bonds.keys, bond_coeffs),
        angle_types: with_keys(angles.keys, angle_coeffs),
        dihedral_types: with_keys(dihedrals.keys, dihedral_coeffs),
        improper_types: with_keys(impropers.keys, improper_coeffs),
        missing: missing.into_records(),
    };
    info!(
        atom_types = topology.atom_types.len(),
        bond_types = topology.bond_types.len(),
        angle_types = topology.angle_types.len(),
        dihedral_types = topology.dihedral_types.len(),
        improper_types = topology.improper_types.len(),
        missing = topology.missing.len(),
        "Topology parameterized."
    );
    topology
}

/// Loads the library and the connectivity graph from disk, then runs [`run`].
///
/// The graph reader is chosen by file extension (`.bgf` or `.toml`).
#[instrument(skip_all, name = "build_from_paths")]
pub fn run_from_paths(
    graph_path: &Path,
    library_path: &Path,
    config: &ForcefieldConfig,
    reporter: &ProgressReporter,
) -> Result<ParameterizedTopology, EngineError> {
    let library = reporter.phase("Loading", || -> Result<_, EngineError> {
        info!(path = %library_path.display(), "Loading parameter library.");
        Ok(ParameterLibrary::load(library_path, config)?)
    })?;
    let graph = read_graph_from_path(graph_path)?;
    info!(atoms = graph.len(), bonds = graph.bond_count(), "Connectivity graph loaded.");
    Ok(run(&graph, &library, config, reporter))
}
