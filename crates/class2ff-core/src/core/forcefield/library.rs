use super::config::ForcefieldConfig;
use super::key::{TypeKey, WILDCARD};
use super::subterm::SubTerm;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

pub const ATOM_TYPES_HEADER: &str = "#atom_types";
pub const EQUIVALENCE_HEADER: &str = "#equivalence";

/// Atom-type rows are fixed-column; anything past this column is commentary.
const ATOM_TYPE_COLUMNS: usize = 39;

/// Ordered coefficients of one library entry.
pub type CoefficientVector = Vec<f64>;

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("Library is missing required section '{section}'")]
    MissingSection { section: &'static str },
    #[error("Malformed row in section '{section}' on line {line}: {kind}")]
    InvalidRow {
        section: &'static str,
        line: usize,
        kind: RowErrorKind,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum RowErrorKind {
    #[error("expected {expected} atom types, found {found}")]
    TypeCount { expected: usize, found: usize },
    #[error("unexpected atom type '{token}' after {expected} types")]
    ExtraTypeToken { expected: usize, token: String },
    #[error("invalid number '{value}'")]
    InvalidNumber { value: String },
    #[error("expected {expected:?} coefficients, found {found}")]
    CoefficientCount {
        expected: &'static [usize],
        found: usize,
    },
    #[error("expected 8 columns in an equivalence row, found {found}")]
    EquivalenceColumns { found: usize },
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtomTypeRecord {
    pub name: String,
    pub element: String,
    pub mass: f64,
}

/// Per-type aliases, one per resolution tier (nonbond, bond, angle, torsion, oop).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceTable {
    entries: HashMap<String, [String; 5]>,
}

impl EquivalenceTable {
    pub fn get(&self, ff_type: &str) -> Option<&[String; 5]> {
        self.entries.get(ff_type)
    }

    /// The alias of `ff_type` for `tier`. A type without an equivalence row, and the
    /// wildcard, stand in for themselves.
    pub fn alias<'a>(&'a self, ff_type: &'a str, tier: usize) -> &'a str {
        if ff_type == WILDCARD {
            return ff_type;
        }
        self.entries
            .get(ff_type)
            .map_or(ff_type, |aliases| aliases[tier].as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Canonical [`TypeKey`] to coefficients for a single sub-term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterTable {
    entries: HashMap<TypeKey, CoefficientVector>,
}

impl ParameterTable {
    pub fn get(&self, key: &TypeKey) -> Option<&[f64]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &TypeKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeKey, &[f64])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

/// Immutable, parsed class2 parameter library.
#[derive(Debug, Clone)]
pub struct ParameterLibrary {
    atom_types: HashMap<String, AtomTypeRecord>,
    equivalences: EquivalenceTable,
    tables: [ParameterTable; SubTerm::ALL.len()],
}

impl ParameterLibrary {
    pub fn load(path: &Path, config: &ForcefieldConfig) -> Result<Self, LibraryError> {
        let bytes = std::fs::read(path).map_err(|e| LibraryError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(Self::parse(&text, config)?)
    }

    /// Parses the sectioned text of a library.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingSection`] if the atom-type, equivalence or any
    /// sub-term section is absent, and [`FormatError::InvalidRow`] for a row that does
    /// not match its sub-term's declared layout.
    pub fn parse(text: &str, config: &ForcefieldConfig) -> Result<Self, FormatError> {
        let sections = split_sections(text);
        let mut builder = LibraryBuilder::new(*config);

        for (line, row) in required(&sections, Section::AtomTypes)? {
            let head = truncate_chars(row, ATOM_TYPE_COLUMNS);
            let fields: Vec<&str> = head.split_whitespace().collect();
            if fields.len() != 5 {
                debug!(line, "Skipping atom-type row without five leading fields.");
                continue;
            }
            let mass = parse_number(fields[3]).map_err(|kind| FormatError::InvalidRow {
                section: ATOM_TYPES_HEADER,
                line: *line,
                kind,
            })?;
            builder.atom_type(fields[2], fields[4], mass);
        }

        for (line, row) in required(&sections, Section::Equivalence)? {
            let fields: Vec<&str> = row.split_whitespace().collect();
            if fields.len() < 8 {
                return Err(FormatError::InvalidRow {
                    section: EQUIVALENCE_HEADER,
                    line: *line,
                    kind: RowErrorKind::EquivalenceColumns {
                        found: fields.len(),
                    },
                });
            }
            builder.equivalence(
                fields[2],
                [fields[3], fields[4], fields[5], fields[6], fields[7]],
            );
        }

        for sub_term in SubTerm::ALL {
            let rows = required(&sections, Section::SubTerm(sub_term))?;
            for (line, row) in rows {
                let invalid = |kind| FormatError::InvalidRow {
                    section: sub_term.header(),
                    line: *line,
                    kind,
                };
                let (types, coefficients) = split_sub_term_row(sub_term, row).map_err(invalid)?;
                builder
                    .entry(sub_term, &types, coefficients)
                    .map_err(invalid)?;
            }
            debug!(
                sub_term = sub_term.code(),
                entries = builder.tables[sub_term as usize].len(),
                "Parsed library section."
            );
        }

        let library = builder.build();
        info!(
            atom_types = library.atom_types.len(),
            equivalences = library.equivalences.len(),
            entries = library.entry_count(),
            "Parameter library parsed."
        );
        Ok(library)
    }

    pub fn table(&self, sub_term: SubTerm) -> &ParameterTable {
        &self.tables[sub_term as usize]
    }

    pub fn equivalences(&self) -> &EquivalenceTable {
        &self.equivalences
    }

    pub fn atom_type(&self, name: &str) -> Option<&AtomTypeRecord> {
        self.atom_types.get(name)
    }

    pub fn atom_type_count(&self) -> usize {
        self.atom_types.len()
    }

    pub fn entry_count(&self) -> usize {
        self.tables.iter().map(ParameterTable::len).sum()
    }
}

/// Programmatic construction of a [`ParameterLibrary`].
///
/// Entries go through the same canonicalization and coefficient reordering as parsed
/// rows, so a library built here behaves exactly like one read from text.
#[derive(Debug)]
pub struct LibraryBuilder {
    config: ForcefieldConfig,
    atom_types: HashMap<String, AtomTypeRecord>,
    equivalences: EquivalenceTable,
    tables: [ParameterTable; SubTerm::ALL.len()],
}

impl LibraryBuilder {
    pub fn new(config: ForcefieldConfig) -> Self {
        Self {
            config,
            atom_types: HashMap::new(),
            equivalences: EquivalenceTable::default(),
            tables: std::array::from_fn(|_| ParameterTable::default()),
        }
    }

    pub fn atom_type(&mut self, name: &str, element: &str, mass: f64) -> &mut Self {
        self.atom_types.insert(
            name.to_string(),
            AtomTypeRecord {
                name: name.to_string(),
                element: element.to_string(),
                mass,
            },
        );
        self
    }

    pub fn equivalence(&mut self, primary: &str, aliases: [&str; 5]) -> &mut Self {
        self.equivalences
            .entries
            .insert(primary.to_string(), aliases.map(str::to_string));
        self
    }

    /// Adds a row. A later row with the same canonical key replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`RowErrorKind::TypeCount`] or [`RowErrorKind::CoefficientCount`] if the
    /// row does not match the sub-term's declared layout under this builder's config.
    pub fn entry(
        &mut self,
        sub_term: SubTerm,
        types: &[&str],
        coefficients: Vec<f64>,
    ) -> Result<&mut Self, RowErrorKind> {
        let arity = sub_term.type_arity();
        if types.len() != arity {
            return Err(RowErrorKind::TypeCount {
                expected: arity,
                found: types.len(),
            });
        }
        let expected = self.config.row_coefficients(sub_term);
        if !expected.contains(&coefficients.len()) {
            return Err(RowErrorKind::CoefficientCount {
                expected,
                found: coefficients.len(),
            });
        }

        let (key, reordered) = TypeKey::canonical(sub_term.symmetry(), types);
        let mut coefficients = self.config.expand_row(sub_term, coefficients);
        if reordered {
            sub_term.orientation().reverse(&mut coefficients);
        }
        self.tables[sub_term as usize]
            .entries
            .insert(key, coefficients);
        Ok(self)
    }

    pub fn build(self) -> ParameterLibrary {
        ParameterLibrary {
            atom_types: self.atom_types,
            equivalences: self.equivalences,
            tables: self.tables,
        }
    }
}

type SectionRows<'a> = Vec<(usize, &'a str)>;

/// A recognized library section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Section {
    AtomTypes,
    Equivalence,
    SubTerm(SubTerm),
}

impl Section {
    fn from_header(header: &str) -> Option<Self> {
        match header {
            ATOM_TYPES_HEADER => Some(Self::AtomTypes),
            EQUIVALENCE_HEADER => Some(Self::Equivalence),
            other => SubTerm::from_header(other).map(Self::SubTerm),
        }
    }

    fn header(self) -> &'static str {
        match self {
            Self::AtomTypes => ATOM_TYPES_HEADER,
            Self::Equivalence => EQUIVALENCE_HEADER,
            Self::SubTerm(sub_term) => sub_term.header(),
        }
    }
}

/// Groups data rows under the section header that precedes them. Rows of unknown
/// sections and of repeated headers are dropped.
fn split_sections(text: &str) -> HashMap<Section, SectionRows<'_>> {
    let mut sections: HashMap<Section, SectionRows<'_>> = HashMap::new();
    let mut current: Option<Section> = None;

    for (index, line) in text.lines().enumerate() {
        if line.starts_with('#') {
            let name = line.split_whitespace().next().unwrap_or("#");
            current = match Section::from_header(name) {
                None => {
                    debug!(section = name, line = index + 1, "Skipping unknown section.");
                    None
                }
                Some(section) if sections.contains_key(&section) => {
                    debug!(section = name, line = index + 1, "Ignoring repeated section.");
                    None
                }
                Some(section) => {
                    sections.insert(section, Vec::new());
                    Some(section)
                }
            };
            continue;
        }
        if is_skipped(line) {
            continue;
        }
        if let Some(rows) = current.and_then(|section| sections.get_mut(&section)) {
            rows.push((index + 1, line));
        }
    }
    sections
}

fn required<'s, 'a>(
    sections: &'s HashMap<Section, SectionRows<'a>>,
    section: Section,
) -> Result<&'s SectionRows<'a>, FormatError> {
    sections.get(&section).ok_or(FormatError::MissingSection {
        section: section.header(),
    })
}

fn is_skipped(line: &str) -> bool {
    match line.trim_start().chars().next() {
        None => true,
        Some(c) => matches!(c, '!' | '@' | '>'),
    }
}

fn truncate_chars(line: &str, columns: usize) -> &str {
    match line.char_indices().nth(columns) {
        Some((offset, _)) => &line[..offset],
        None => line,
    }
}

fn is_type_token(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '*')
}

fn parse_number(token: &str) -> Result<f64, RowErrorKind> {
    token.parse().map_err(|_| RowErrorKind::InvalidNumber {
        value: token.to_string(),
    })
}

/// Splits `[ver, ref, type_1..type_k, coeff_1..coeff_n]` using the sub-term's declared
/// type count `k`.
fn split_sub_term_row(
    sub_term: SubTerm,
    row: &str,
) -> Result<(Vec<&str>, CoefficientVector), RowErrorKind> {
    let tokens: Vec<&str> = row.split_whitespace().collect();
    let arity = sub_term.type_arity();
    let found = tokens
        .iter()
        .skip(2)
        .take_while(|t| is_type_token(t))
        .count();

    if found < arity {
        return Err(RowErrorKind::TypeCount {
            expected: arity,
            found,
        });
    }
    if found > arity {
        return Err(RowErrorKind::ExtraTypeToken {
            expected: arity,
            token: tokens[2 + arity].to_string(),
        });
    }

    let types = tokens[2..2 + arity].to_vec();
    let coefficients = tokens[2 + arity..]
        .iter()
        .map(|t| parse_number(t))
        .collect::<Result<CoefficientVector, _>>()?;
    Ok((types, coefficients))
}
