//! Resolution table from syntax nodes to type handles.

use rustc_hash::FxHashMap;
use typegate_ir::NodeId;

use crate::Idx;

/// The loader's answer to "what type is this node?".
///
/// Records the canonical [`Idx`] of every type expression and of every
/// top-level declaration the loader resolved. Nodes that failed to resolve
/// are simply absent.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    types: FxHashMap<NodeId, Idx>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the type of `node`. A later record for the same node replaces
    /// the earlier one.
    pub fn record(&mut self, node: NodeId, idx: Idx) {
        self.types.insert(node, idx);
    }

    /// Type of `node`, if the loader resolved it.
    #[inline]
    pub fn type_of(&self, node: NodeId) -> Option<Idx> {
        self.types.get(&node).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
