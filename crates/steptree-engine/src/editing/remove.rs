use crate::model::{StepId, StepTree};

/// Builds a new tree with the target step, and any step structurally tied to
/// it, removed.
///
/// Removal rewrites the link in the target's *parent*, so each node checks
/// two levels ahead before recursing:
///
/// - A node whose own id or whose secondary input's root id matches is
///   dropped entirely (its nested input with it) and its primary input is
///   promoted into its position.
/// - A node whose primary input (or that input's secondary head) matches
///   either splices the chain past the matched step, or, when the matched
///   step is a chain leaf, collapses down to its own secondary input.
///
/// Returns `None` when the last step is removed; an empty strategy is a
/// valid result, not an error. No semantic validation is performed here: the
/// caller decides whether the removal is allowed, this only keeps the
/// structure well formed.
pub fn remove_step(tree: &StepTree, target_step_id: StepId) -> Option<StepTree> {
    recurse(Some(tree), target_step_id)
}

fn recurse(node: Option<&StepTree>, target_step_id: StepId) -> Option<StepTree> {
    let node = node?;

    let matches = |candidate: &StepTree| candidate.step_id == target_step_id;
    let secondary_head_matches = |candidate: &StepTree| {
        candidate
            .secondary_input
            .as_deref()
            .is_some_and(|secondary| secondary.step_id == target_step_id)
    };

    // Target is this node, or the head of this node's nested input: drop the
    // node (and its nested input) and promote its primary input.
    if matches(node) || secondary_head_matches(node) {
        return node.primary_input.as_deref().cloned();
    }

    // Target is one level down the primary chain.
    if let Some(primary) = node.primary_input.as_deref() {
        if matches(primary) || secondary_head_matches(primary) {
            return match primary.primary_input.as_deref() {
                // The matched step was the chain leaf: collapse this node
                // down to its secondary side.
                None => node.secondary_input.as_deref().cloned(),
                // Splice the chain past the matched step.
                Some(grandchild) => Some(StepTree {
                    step_id: node.step_id,
                    primary_input: Some(Box::new(grandchild.clone())),
                    secondary_input: node.secondary_input.clone(),
                }),
            };
        }
    }

    Some(StepTree {
        step_id: node.step_id,
        primary_input: recurse(node.primary_input.as_deref(), target_step_id).map(Box::new),
        secondary_input: recurse(node.secondary_input.as_deref(), target_step_id).map(Box::new),
    })
}
