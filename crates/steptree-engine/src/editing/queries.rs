use crate::editing::locate::{NodeMetadata, get_node_metadata};
use crate::model::{AddType, StepId, StepTree};

/// Subtree rooted at `target_step_id`, if present. Depth-first: self, then
/// primary, then secondary.
pub fn find_subtree(tree: &StepTree, target_step_id: StepId) -> Option<&StepTree> {
    if tree.step_id == target_step_id {
        return Some(tree);
    }
    tree.primary_input
        .as_deref()
        .and_then(|primary| find_subtree(primary, target_step_id))
        .or_else(|| {
            tree.secondary_input
                .as_deref()
                .and_then(|secondary| find_subtree(secondary, target_step_id))
        })
}

/// The step that will receive the added step's output: for an append, the
/// parent of the appended-to strategy root (`None` when that root is the
/// tree's own root or absent); for an insert-before, the target step itself.
pub fn get_output_step(tree: &StepTree, add_type: AddType) -> Option<&StepTree> {
    match add_type {
        AddType::Append {
            primary_input_step_id,
        } => match get_node_metadata(tree, primary_input_step_id) {
            NodeMetadata::NotInTree | NodeMetadata::Root { .. } => None,
            NodeMetadata::PrimaryInput { parent, .. }
            | NodeMetadata::SecondaryInput { parent, .. } => Some(parent),
        },
        AddType::InsertBefore { output_step_id } => match get_node_metadata(tree, output_step_id)
        {
            NodeMetadata::NotInTree => None,
            NodeMetadata::Root { node }
            | NodeMetadata::PrimaryInput { node, .. }
            | NodeMetadata::SecondaryInput { node, .. } => Some(node),
        },
    }
}

/// The step the added step will run after on its primary chain: for an
/// append, the appended-to subtree; for an insert-before, the target's
/// current primary input.
pub fn get_previous_step(tree: &StepTree, add_type: AddType) -> Option<&StepTree> {
    match add_type {
        AddType::Append {
            primary_input_step_id,
        } => find_subtree(tree, primary_input_step_id),
        AddType::InsertBefore { output_step_id } => find_subtree(tree, output_step_id)
            .and_then(|insertion_point| insertion_point.primary_input.as_deref()),
    }
}

/// Number of primary-input hops from the root to the primary-chain leaf.
/// Zero for a single-node tree.
pub fn find_primary_branch_height(tree: &StepTree) -> usize {
    let mut height = 0;
    let mut node = tree;
    while let Some(primary) = node.primary_input.as_deref() {
        node = primary;
        height += 1;
    }
    height
}

/// The node at the end of the primary chain.
pub fn find_primary_branch_leaf(tree: &StepTree) -> &StepTree {
    let mut node = tree;
    while let Some(primary) = node.primary_input.as_deref() {
        node = primary;
    }
    node
}

/// Every step id in the tree, pre-order (self, primary, secondary). By the
/// uniqueness invariant this is a set.
pub fn get_step_ids(tree: &StepTree) -> Vec<StepId> {
    tree.iter().map(|node| node.step_id).collect()
}
