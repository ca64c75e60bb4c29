use super::canonical::{Symmetry, canonical_types};
use serde::{Serialize, Serializer};
use std::fmt;

/// Match-any placeholder used by wildcard library entries.
pub const WILDCARD: &str = "*";

/// A sequence of atom-type strings used as a parameter lookup key.
///
/// Keys built through [`TypeKey::canonical`] are invariant under the relabelings their
/// interaction class permits, so two occurrences of the same physical interaction map to
/// equal keys. Displayed (and serialized) as the `:`-joined type list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(Box<[String]>);

impl TypeKey {
    /// Builds a key from `types` exactly as given.
    pub fn from_types<S: AsRef<str>>(types: &[S]) -> Self {
        Self(types.iter().map(|t| t.as_ref().to_string()).collect())
    }

    /// Canonicalizes `types` under `symmetry` and builds the key. The flag reports
    /// whether canonicalization reordered the tuple.
    pub fn canonical(symmetry: Symmetry, types: &[&str]) -> (Self, bool) {
        let (types, reordered) = canonical_types(symmetry, types);
        (Self::from_types(types.as_slice()), reordered)
    }

    pub fn types(&self) -> &[String] {
        &self.0
    }

    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(":"))
    }
}

impl Serialize for TypeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
