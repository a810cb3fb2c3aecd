use crate::editing::locate::{NodeMetadata, get_node_metadata};
use crate::model::{AddType, StepId, StepTree};

/// Dispatches an add request to [`append`] or [`insert_before`].
pub fn add_step(
    tree: &StepTree,
    add_type: AddType,
    new_step_id: StepId,
    new_step_secondary_input: Option<&StepTree>,
) -> StepTree {
    match add_type {
        AddType::Append {
            primary_input_step_id,
        } => append(tree, primary_input_step_id, new_step_id, new_step_secondary_input),
        AddType::InsertBefore { output_step_id } => {
            insert_before(tree, output_step_id, new_step_id, new_step_secondary_input)
        }
    }
}

/// Adds a new step whose primary input is the existing step `primary_step_id`,
/// pushing that step's chain down one position.
///
/// Appending is only defined at the root of a strategy, main or nested. If
/// `primary_step_id` is absent or sits in a primary slot the request is
/// invalid and the input tree is returned unchanged.
pub fn append(
    tree: &StepTree,
    primary_step_id: StepId,
    new_step_id: StepId,
    new_secondary: Option<&StepTree>,
) -> StepTree {
    match get_node_metadata(tree, primary_step_id) {
        // Absent target, or a node which is not the root of a strategy
        NodeMetadata::NotInTree | NodeMetadata::PrimaryInput { .. } => tree.clone(),

        // Appending to the root of the main strategy
        NodeMetadata::Root { .. } => StepTree {
            step_id: new_step_id,
            primary_input: Some(Box::new(tree.clone())),
            secondary_input: new_secondary.cloned().map(Box::new),
        },

        // Appending to the root of a nested strategy extends that nested
        // strategy's chain, not the main line
        NodeMetadata::SecondaryInput { parent, .. } => {
            let parent_id = parent.step_id;
            rewrite_slot(tree, parent_id, Slot::Secondary, &|old_head| StepTree {
                step_id: new_step_id,
                primary_input: Some(Box::new(old_head.clone())),
                secondary_input: new_secondary.cloned().map(Box::new),
            })
        }
    }
}

/// Inserts a new step immediately upstream of the existing step
/// `output_step_id` on its primary chain.
///
/// When the target still has a primary input, the new step is spliced between
/// the two and takes `new_secondary` as its secondary input. When the target
/// is a chain leaf, the roles deliberately swap: the supplied subtree becomes
/// the new step's *primary* input and the old leaf is demoted to its
/// secondary input, so the supplied branch is the main line from then on.
pub fn insert_before(
    tree: &StepTree,
    output_step_id: StepId,
    new_step_id: StepId,
    new_secondary: Option<&StepTree>,
) -> StepTree {
    match get_node_metadata(tree, output_step_id) {
        // Absent target
        NodeMetadata::NotInTree => tree.clone(),

        // Target is mid-chain: splice between it and its primary input
        NodeMetadata::Root { node }
        | NodeMetadata::PrimaryInput { node, .. }
        | NodeMetadata::SecondaryInput { node, .. }
            if node.primary_input.is_some() =>
        {
            rewrite_slot(tree, node.step_id, Slot::Primary, &|old_primary| StepTree {
                step_id: new_step_id,
                primary_input: Some(Box::new(old_primary.clone())),
                secondary_input: new_secondary.cloned().map(Box::new),
            })
        }

        // Target is the sole step of the main strategy
        NodeMetadata::Root { node } => demote_leaf(new_step_id, new_secondary, node),

        // Target is a chain leaf with siblings elsewhere in the tree
        NodeMetadata::PrimaryInput { parent, .. } => {
            let parent_id = parent.step_id;
            rewrite_slot(tree, parent_id, Slot::Primary, &|old_leaf| {
                demote_leaf(new_step_id, new_secondary, old_leaf)
            })
        }

        // Target is the sole step of a nested strategy
        NodeMetadata::SecondaryInput { parent, .. } => {
            let parent_id = parent.step_id;
            rewrite_slot(tree, parent_id, Slot::Secondary, &|old_leaf| {
                demote_leaf(new_step_id, new_secondary, old_leaf)
            })
        }
    }
}

/// Leaf-position insert: the supplied subtree takes the primary slot and the
/// old leaf moves to the secondary slot.
fn demote_leaf(
    new_step_id: StepId,
    new_secondary: Option<&StepTree>,
    old_leaf: &StepTree,
) -> StepTree {
    StepTree {
        step_id: new_step_id,
        primary_input: new_secondary.cloned().map(Box::new),
        secondary_input: Some(Box::new(old_leaf.clone())),
    }
}

#[derive(Clone, Copy)]
enum Slot {
    Primary,
    Secondary,
}

/// Copies `node`, replacing the given child slot of the node with id
/// `parent_id` by `build` applied to the slot's current occupant. Slots left
/// empty stay empty.
fn rewrite_slot(
    node: &StepTree,
    parent_id: StepId,
    slot: Slot,
    build: &impl Fn(&StepTree) -> StepTree,
) -> StepTree {
    if node.step_id == parent_id {
        let (primary_input, secondary_input) = match slot {
            Slot::Primary => (
                node.primary_input.as_deref().map(build).map(Box::new),
                node.secondary_input.clone(),
            ),
            Slot::Secondary => (
                node.primary_input.clone(),
                node.secondary_input.as_deref().map(build).map(Box::new),
            ),
        };
        StepTree {
            step_id: node.step_id,
            primary_input,
            secondary_input,
        }
    } else {
        StepTree {
            step_id: node.step_id,
            primary_input: node
                .primary_input
                .as_deref()
                .map(|child| Box::new(rewrite_slot(child, parent_id, slot, build))),
            secondary_input: node
                .secondary_input
                .as_deref()
                .map(|child| Box::new(rewrite_slot(child, parent_id, slot, build))),
        }
    }
}
