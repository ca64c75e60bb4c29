use crate::cli::{BuildArgs, LayoutArgs};
use crate::error::{CliError, Result};
use class2ff::core::forcefield::config::ForcefieldConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialLibraryConfig {
    path: Option<PathBuf>,
    #[serde(rename = "torsion-phases")]
    torsion_phases: Option<bool>,
    #[serde(rename = "out-of-plane-angle")]
    out_of_plane_angle: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    topology: Option<PathBuf>,
    #[serde(rename = "missing-report")]
    missing_report: Option<PathBuf>,
}

/// Run configuration as read from a TOML file; every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRunConfig {
    library: Option<PartialLibraryConfig>,
    output: Option<PartialOutputConfig>,
}

/// Fully resolved settings of one `build` run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub graph_path: PathBuf,
    pub library_path: PathBuf,
    pub forcefield: ForcefieldConfig,
    pub topology_output: Option<PathBuf>,
    pub missing_report: Option<PathBuf>,
}

/// Applies the layout flags on top of file values; a flag can only switch a feature off.
pub fn merge_layout(
    flags: LayoutArgs,
    torsion_phases: Option<bool>,
    out_of_plane_angle: Option<bool>,
) -> ForcefieldConfig {
    let defaults = ForcefieldConfig::default();
    ForcefieldConfig {
        torsion_phases: !flags.no_torsion_phases
            && torsion_phases.unwrap_or(defaults.torsion_phases),
        out_of_plane_angle: !flags.no_oop_angle
            && out_of_plane_angle.unwrap_or(defaults.out_of_plane_angle),
    }
}

impl PartialRunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn merge_with_cli(mut self, args: &BuildArgs) -> Result<RunConfig> {
        let library_config = self.library.take().unwrap_or_default();
        let output_config = self.output.take().unwrap_or_default();

        let library_path = args
            .library
            .clone()
            .or(library_config.path)
            .ok_or_else(|| {
                CliError::Config(
                    "A value for 'library.path' is required either in the config file or via --library."
                        .to_string(),
                )
            })?;

        let forcefield = merge_layout(
            args.layout,
            library_config.torsion_phases,
            library_config.out_of_plane_angle,
        );

        Ok(RunConfig {
            graph_path: args.graph.clone(),
            library_path,
            forcefield,
            topology_output: args.output.clone().or(output_config.topology),
            missing_report: args.missing_report.clone().or(output_config.missing_report),
        })
    }
}
