use super::{PadNode, PadTree};
use crate::{dtype::Element, error::PadError};

/// Emits `index`'s subtree into `output` starting at `cursor`: left mirrors
/// first, then the original children, then right mirrors, each recursively.
/// Returns the advanced cursor.
///
/// With a consistent build/bind/validate/apply sequence behind it this
/// writes exactly the padded shape's worth of elements; landing outside the
/// buffers means the engine is broken, not the caller's input.
pub(crate) fn fill_output<T: Element>(
    tree: &PadTree,
    index: usize,
    input: &[T],
    output: &mut [T],
    cursor: usize,
) -> Result<usize, PadError> {
    match tree.node(index) {
        PadNode::Leaf { source } => {
            let value = *input
                .get(*source)
                .ok_or(PadError::InternalConsistency("leaf bound past the input"))?;
            let slot = output
                .get_mut(cursor)
                .ok_or(PadError::InternalConsistency("write past the output"))?;
            *slot = value;
            Ok(cursor + 1)
        }
        PadNode::Internal {
            children,
            left_mirrors,
            right_mirrors,
        } => {
            let mut cursor = cursor;
            for &mirror in left_mirrors {
                cursor = fill_output(tree, mirror, input, output, cursor)?;
            }
            for child in children.clone() {
                cursor = fill_output(tree, child, input, output, cursor)?;
            }
            for &mirror in right_mirrors {
                cursor = fill_output(tree, mirror, input, output, cursor)?;
            }
            Ok(cursor)
        }
    }
}
