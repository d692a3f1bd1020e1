//! Interned names for declared entities.
//!
//! Registry lookups and structural comparisons only ever need identity, so
//! names are interned once and carried as a `u32` key. The evaluator and the
//! model run single-threaded, hence the plain (non-threaded) `Rodeo`.

use lasso::Rodeo;
use serde::{Deserialize, Serialize};

/// An interned name.
///
/// Compares and hashes in O(1). The raw index is only meaningful together
/// with the [`Interner`] that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Ident(u32);

impl Ident {
    /// Builds an `Ident` from a raw interner index (deserialization, tests).
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw interner index.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: the key is a plain u32 index; try_from_usize rejects anything that
// does not fit.
unsafe impl lasso::Key for Ident {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(Ident)
    }
}

/// String interner backing all [`Ident`]s of one model.
pub struct Interner {
    rodeo: Rodeo<Ident>,
}

impl Interner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self {
            rodeo: Rodeo::new(),
        }
    }

    /// Interns `name`, reusing the existing key if it was seen before.
    pub fn intern(&mut self, name: &str) -> Ident {
        self.rodeo.get_or_intern(name)
    }

    /// Looks up `name` without interning it.
    pub fn get(&self, name: &str) -> Option<Ident> {
        self.rodeo.get(name)
    }

    /// Resolves an [`Ident`] back to its string.
    ///
    /// # Panics
    ///
    /// Panics if the ident came from a different interner.
    pub fn resolve(&self, ident: Ident) -> &str {
        self.rodeo.resolve(&ident)
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
