//! Flat-arena mirror tree.
//!
//! The tree mirrors the input's nested dimension structure: depth equals
//! rank, internal nodes at depth `d` hold `shape[d]` children, and the last
//! level holds one leaf per input element, in row-major order. Nodes never
//! own what they point at; every cross-reference is an arena index, and a
//! leaf references its scalar by flat index into the caller's buffer.

use std::ops::Range;

use crate::error::PadError;

mod apply;
mod flatten;
mod validate;


pub(crate) use apply::apply_padding;
pub(crate) use flatten::fill_output;
pub(crate) use validate::validate_padding;

#[derive(Debug)]
pub(crate) enum PadNode {
    /// One scalar of the input buffer, referenced by flat index.
    Leaf { source: usize },
    /// A run of children in the arena, plus the mirror selections of the
    /// current pad call. Mirrors are back-references into `children`, built
    /// by `apply_padding` and overwritten on every call.
    Internal {
        children: Range<usize>,
        left_mirrors: Vec<usize>,
        right_mirrors: Vec<usize>,
    },
}

/// Node arena for one input shape. Node 0 is the root; each tree level
/// occupies one contiguous run of the arena, leaves last.
#[derive(Debug)]
pub(crate) struct PadTree {
    nodes: Vec<PadNode>,
    shape: Vec<usize>,
}

impl PadTree {
    /// Nodes needed for `shape`: one per index tuple of every prefix length,
    /// leaves included. Computed up front so the arena never reallocates
    /// mid-build.
    fn node_count(shape: &[usize]) -> usize {
        let mut total = 1;
        let mut level_len = 1;
        for &size in shape {
            level_len *= size;
            total += level_len;
        }
        total
    }

    /// Allocates the tree level by level: every frontier node at depth `d`
    /// receives `shape[d]` children, and the next frontier is the run of
    /// children just allocated, in order.
    pub(crate) fn build(shape: &[usize]) -> PadTree {
        let mut nodes = Vec::with_capacity(Self::node_count(shape));
        let mut frontier_start = 0;
        let mut frontier_len = 1;
        for &size in shape {
            let next_start = frontier_start + frontier_len;
            for nth in 0..frontier_len {
                let first_child = next_start + nth * size;
                nodes.push(PadNode::Internal {
                    children: first_child..first_child + size,
                    left_mirrors: Vec::new(),
                    right_mirrors: Vec::new(),
                });
            }
            frontier_start = next_start;
            frontier_len *= size;
        }
        // the final frontier is the leaf level; sources are attached by `bind`
        for _ in 0..frontier_len {
            nodes.push(PadNode::Leaf { source: 0 });
        }
        PadTree {
            nodes,
            shape: shape.to_vec(),
        }
    }

    /// Binds leaves, in row-major order, 1:1 to the input buffer's elements.
    /// `element_count` is the length of the caller's buffer.
    pub(crate) fn bind(&mut self, element_count: usize) -> Result<(), PadError> {
        let expected = self.shape.iter().product::<usize>();
        if element_count != expected {
            return Err(PadError::ElementCountMismatch {
                expected,
                actual: element_count,
            });
        }
        let leaf_start = self.nodes.len() - expected;
        for (flat_index, node) in self.nodes[leaf_start..].iter_mut().enumerate() {
            match node {
                PadNode::Leaf { source } => *source = flat_index,
                PadNode::Internal { .. } => {
                    return Err(PadError::InternalConsistency(
                        "internal node in the leaf level",
                    ));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn root(&self) -> usize {
        0
    }

    pub(crate) fn node(&self, index: usize) -> &PadNode {
        &self.nodes[index]
    }

    pub(crate) fn shape(&self) -> &[usize] {
        &self.shape
    }
}

impl Default for PadTree {
    fn default() -> Self {
        PadTree::build(&[])
    }
}
