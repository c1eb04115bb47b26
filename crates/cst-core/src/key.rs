use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Content-derived key for a parameter tuple.
///
/// Two keys are equal exactly when every input fed to [`KeyBuilder`] was
/// bit-identical, so `0.0` and `-0.0` produce different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ParamKey(u64);

impl ParamKey {
    pub fn builder() -> KeyBuilder {
        KeyBuilder::default()
    }
}

impl std::fmt::Display for ParamKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:016x}", self.0)
    }
}

/// Incrementally hashes scalars and slices into a [`ParamKey`].
#[derive(Default)]
pub struct KeyBuilder {
    hasher: DefaultHasher,
}

impl KeyBuilder {
    pub fn scalar(mut self, v: f64) -> Self {
        v.to_bits().hash(&mut self.hasher);
        self
    }

    pub fn count(mut self, n: usize) -> Self {
        n.hash(&mut self.hasher);
        self
    }

    /// Slices are length-prefixed so `[a, b] + [c]` and `[a] + [b, c]` differ.
    pub fn slice(mut self, values: &[f64]) -> Self {
        values.len().hash(&mut self.hasher);
        for v in values {
            v.to_bits().hash(&mut self.hasher);
        }
        self
    }

    /// Fold an existing key in, for composing keys across layers.
    pub fn key(mut self, key: ParamKey) -> Self {
        key.0.hash(&mut self.hasher);
        self
    }

    pub fn finish(self) -> ParamKey {
        ParamKey(self.hasher.finish())
    }
}
