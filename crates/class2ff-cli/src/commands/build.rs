use crate::cli::BuildArgs;
use crate::config::{PartialRunConfig, RunConfig};
use crate::error::{CliError, Result};
use crate::progress::CliProgressHandler;
use class2ff::engine::missing::write_missing_csv;
use class2ff::engine::progress::ProgressReporter;
use class2ff::workflows::build::{self, ParameterizedTopology};
use std::fs::{self, File};
use std::io::BufWriter;
use tracing::{info, warn};

pub fn run(args: BuildArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialRunConfig::from_file(path)?,
        None => PartialRunConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;
    let topology = execute(&config)?;
    print_summary(&topology);
    Ok(())
}

/// Runs the build workflow and writes every requested output.
pub fn execute(config: &RunConfig) -> Result<ParameterizedTopology> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        graph = %config.graph_path.display(),
        library = %config.library_path.display(),
        "Invoking the build workflow..."
    );
    let topology = build::run_from_paths(
        &config.graph_path,
        &config.library_path,
        &config.forcefield,
        &reporter,
    )?;

    for record in &topology.missing {
        warn!("{}", record);
    }

    if let Some(path) = &config.topology_output {
        let text = topology
            .to_toml_string()
            .map_err(|e| CliError::FileWriting {
                path: path.clone(),
                source: e.into(),
            })?;
        fs::write(path, text)?;
        info!("Topology written to {:?}", path);
    }

    if let Some(path) = &config.missing_report {
        let file = File::create(path)?;
        write_missing_csv(&topology.missing, BufWriter::new(file)).map_err(|e| {
            CliError::FileWriting {
                path: path.clone(),
                source: e.into(),
            }
        })?;
        info!(
            records = topology.missing.len(),
            "Missing-parameter report written to {:?}", path
        );
    }

    Ok(topology)
}

fn print_summary(topology: &ParameterizedTopology) {
    println!(
        "Parameterized {} atoms ({} atom types).",
        topology.atoms.len(),
        topology.atom_types.len()
    );
    println!(
        "  bonds:     {:>6} terms, {:>4} types",
        topology.bonds.len(),
        topology.bond_types.len()
    );
    println!(
        "  angles:    {:>6} terms, {:>4} types",
        topology.angles.len(),
        topology.angle_types.len()
    );
    println!(
        "  dihedrals: {:>6} terms, {:>4} types",
        topology.dihedrals.len(),
        topology.dihedral_types.len()
    );
    println!(
        "  impropers: {:>6} terms, {:>4} types",
        topology.impropers.len(),
        topology.improper_types.len()
    );
    if topology.is_complete() {
        println!("All parameters resolved.");
    } else {
        println!(
            "Warning: {} parameter lookups failed and were zero-filled.",
            topology.missing.len()
        );
    }
}
