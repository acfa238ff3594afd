use super::{PadNode, PadTree};
use crate::{error::PadError, shape::PadSpec};

/// Attaches the per-node mirror selections, every internal node at every
/// dimension. Mirrors differ per node (they reference that node's own
/// children), so unlike validation this walks the whole tree.
///
/// Must run after `validate_padding`; the bounds check here only guards
/// against engine bugs, not caller input.
pub(crate) fn apply_padding(
    tree: &mut PadTree,
    spec: &PadSpec,
    offset: usize,
) -> Result<(), PadError> {
    let root = tree.root();
    apply_node(tree, root, spec, offset, 0)
}

fn apply_node(
    tree: &mut PadTree,
    index: usize,
    spec: &PadSpec,
    offset: usize,
    dimension: usize,
) -> Result<(), PadError> {
    if dimension >= spec.rank() {
        return Ok(());
    }
    let children = match &mut tree.nodes[index] {
        PadNode::Leaf { .. } => return Ok(()),
        PadNode::Internal {
            children,
            left_mirrors,
            right_mirrors,
        } => {
            let children = children.clone();
            let count = children.len();
            let left_pad = spec.left(dimension);
            let right_pad = spec.right(dimension);
            if left_pad + offset > count || right_pad + offset > count {
                return Err(PadError::InternalConsistency(
                    "mirror selection out of range",
                ));
            }

            // emission order: farthest-from-border first, so positions walk
            // downward toward the border element (exclusive when offset is 1)
            left_mirrors.clear();
            left_mirrors.extend(
                (offset..offset + left_pad)
                    .rev()
                    .map(|position| children.start + position),
            );
            right_mirrors.clear();
            right_mirrors.extend(
                (count - offset - right_pad..count - offset)
                    .rev()
                    .map(|position| children.start + position),
            );

            children
        }
    };

    for child in children {
        apply_node(tree, child, spec, offset, dimension + 1)?;
    }
    Ok(())
}
