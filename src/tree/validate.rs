use super::{PadNode, PadTree};
use crate::{error::PadError, shape::PadSpec};

/// Checks that every requested pad amount leaves enough siblings to mirror
/// from: `pad + offset <= child count`, both sides, every dimension.
///
/// All internal nodes at a given depth share one child count, so checking a
/// single representative per dimension suffices; the recursion descends
/// through first children only.
pub(crate) fn validate_padding(
    tree: &PadTree,
    spec: &PadSpec,
    offset: usize,
) -> Result<(), PadError> {
    validate_node(tree, tree.root(), spec, offset, 0)
}

fn validate_node(
    tree: &PadTree,
    index: usize,
    spec: &PadSpec,
    offset: usize,
    dimension: usize,
) -> Result<(), PadError> {
    if dimension >= spec.rank() {
        return Ok(());
    }
    let children = match tree.node(index) {
        PadNode::Leaf { .. } => return Ok(()),
        PadNode::Internal { children, .. } => children.clone(),
    };

    let available = children.len();
    let required = spec.left(dimension) + offset;
    if required > available {
        return Err(PadError::InsufficientPadData {
            dimension,
            required,
            available,
        });
    }
    let required = spec.right(dimension) + offset;
    if required > available {
        return Err(PadError::InsufficientPadData {
            dimension,
            required,
            available,
        });
    }

    if !children.is_empty() {
        validate_node(tree, children.start, spec, offset, dimension + 1)?;
    }
    Ok(())
}
