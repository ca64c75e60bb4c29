use crate::core::forcefield::key::TypeKey;
use std::collections::HashMap;

/// Ordered set of canonical type tuples for one interaction class.
///
/// Indices are assigned in first-registration order and never change, so the numbering
/// of an output topology does not depend on hash iteration order.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    keys: Vec<TypeKey>,
    index: HashMap<TypeKey, usize>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `key`, appending it if it has not been seen.
    pub fn register(&mut self, key: TypeKey) -> usize {
        if let Some(&index) = self.index.get(&key) {
            return index;
        }
        let index = self.keys.len();
        self.index.insert(key.clone(), index);
        self.keys.push(key);
        index
    }

    pub fn keys(&self) -> &[TypeKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn into_keys(self) -> Vec<TypeKey> {
        self.keys
    }
}
