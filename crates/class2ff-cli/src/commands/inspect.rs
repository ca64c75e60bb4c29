use crate::cli::InspectArgs;
use crate::config::merge_layout;
use crate::error::Result;
use class2ff::core::forcefield::library::{
    ATOM_TYPES_HEADER, EQUIVALENCE_HEADER, ParameterLibrary,
};
use class2ff::core::forcefield::subterm::SubTerm;
use tracing::info;

/// Section header and entry count, in library file order.
pub fn section_counts(library: &ParameterLibrary) -> Vec<(&'static str, usize)> {
    let mut counts = vec![
        (ATOM_TYPES_HEADER, library.atom_type_count()),
        (EQUIVALENCE_HEADER, library.equivalences().len()),
    ];
    counts.extend(
        SubTerm::ALL
            .iter()
            .map(|&sub_term| (sub_term.header(), library.table(sub_term).len())),
    );
    counts
}

pub fn run(args: InspectArgs) -> Result<()> {
    let config = merge_layout(args.layout, None, None);
    info!("Loading parameter library from {:?}", &args.library);
    let library = ParameterLibrary::load(&args.library, &config)?;

    println!("{}", args.library.display());
    for (header, count) in section_counts(&library) {
        println!("  {:<26} {:>6}", header, count);
    }
    println!("  {:<26} {:>6}", "total sub-term entries", library.entry_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::fixtures::WATER_LIBRARY;
    use class2ff::core::forcefield::config::ForcefieldConfig;
    use class2ff::core::forcefield::library::LibraryError;
    use std::path::PathBuf;

    #[test]
    fn counts_follow_section_order() {
        let library = ParameterLibrary::parse(WATER_LIBRARY, &ForcefieldConfig::default()).unwrap();
        let counts = section_counts(&library);
        assert_eq!(counts.len(), 2 + SubTerm::ALL.len());
        assert_eq!(counts[0], ("#atom_types", 2));
        assert_eq!(counts[1], ("#equivalence", 2));
        assert!(counts.contains(&("#quartic_bond", 1)));
        assert!(counts.contains(&("#torsion_3", 0)));
        assert!(counts.contains(&("#nonbond(9-6)", 1)));
    }

    #[test]
    fn missing_library_file_is_an_io_error() {
        let args = InspectArgs {
            library: PathBuf::from("/nonexistent/compass.frc"),
            layout: Default::default(),
        };
        assert!(matches!(
            run(args),
            Err(CliError::Library(LibraryError::Io { .. }))
        ));
    }
}
