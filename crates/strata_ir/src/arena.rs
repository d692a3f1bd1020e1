//! Append-only, ID-indexed storage for IR nodes.
//!
//! Every node kind (expressions, statements, declarations, actions) lives in
//! an [`Arena`] owned by the [`ModelIr`](crate::ModelIr). Nodes are never
//! removed or reordered, so an ID stays valid for the model's lifetime.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Key trait for arena IDs: a bijection with `u32` indices.
pub trait ArenaId: Copy {
    /// Builds an ID from a raw index.
    fn from_raw(index: u32) -> Self;

    /// Returns the raw index.
    fn as_raw(self) -> u32;
}

/// A dense container indexed by an opaque [`ArenaId`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena<I: ArenaId, T> {
    nodes: Vec<T>,
    #[serde(skip)]
    _key: PhantomData<I>,
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            _key: PhantomData,
        }
    }

    /// Appends a node and returns its ID.
    pub fn alloc(&mut self, node: T) -> I {
        let id = I::from_raw(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates `(id, node)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (I::from_raw(i as u32), node))
    }

    /// Iterates node references in allocation order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter()
    }
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the ID was not allocated by this arena.
    fn index(&self, id: I) -> &T {
        &self.nodes[id.as_raw() as usize]
    }
}

impl<I: ArenaId, T> IndexMut<I> for Arena<I, T> {
    fn index_mut(&mut self, id: I) -> &mut T {
        &mut self.nodes[id.as_raw() as usize]
    }
}
