use crate::model::{StepId, StepTree};

/// Structural copy with every occurrence of `old_step_id` rewritten to
/// `new_step_id`.
///
/// By the uniqueness invariant at most one occurrence exists; the service
/// reassigns ids on some edits and the caller patches the tree to match.
pub fn replace_step(tree: &StepTree, old_step_id: StepId, new_step_id: StepId) -> StepTree {
    StepTree {
        step_id: if tree.step_id == old_step_id {
            new_step_id
        } else {
            tree.step_id
        },
        primary_input: tree
            .primary_input
            .as_deref()
            .map(|child| Box::new(replace_step(child, old_step_id, new_step_id))),
        secondary_input: tree
            .secondary_input
            .as_deref()
            .map(|child| Box::new(replace_step(child, old_step_id, new_step_id))),
    }
}
