use crate::model::{StepId, StepTree};

/// Structural role of a step within a tree.
///
/// The role alone determines edit policy, so every caller matches on this
/// exhaustively rather than probing for a parent by hand. Ownership
/// guarantees a node sits in at most one parent slot, so the variants are
/// mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMetadata<'a> {
    /// No node in the tree has the target id.
    NotInTree,
    /// The target is the tree's root.
    Root { node: &'a StepTree },
    /// The target is the `primary_input` of `parent`.
    PrimaryInput {
        node: &'a StepTree,
        parent: &'a StepTree,
    },
    /// The target is the `secondary_input` of `parent`.
    SecondaryInput {
        node: &'a StepTree,
        parent: &'a StepTree,
    },
}

/// Finds the step with `target_id` and classifies its structural role.
///
/// Depth-first, root first, primary side before secondary. Absence is a
/// normal return variant, not an error.
pub fn get_node_metadata(tree: &StepTree, target_id: StepId) -> NodeMetadata<'_> {
    find_target(tree, None, target_id)
}

fn find_target<'a>(
    node: &'a StepTree,
    parent: Option<&'a StepTree>,
    target_id: StepId,
) -> NodeMetadata<'a> {
    if node.step_id == target_id {
        return match parent {
            None => NodeMetadata::Root { node },
            Some(parent)
                if parent
                    .primary_input
                    .as_ref()
                    .is_some_and(|primary| primary.step_id == target_id) =>
            {
                NodeMetadata::PrimaryInput { node, parent }
            }
            Some(parent) => NodeMetadata::SecondaryInput { node, parent },
        };
    }

    let in_primary = match node.primary_input.as_deref() {
        Some(primary) => find_target(primary, Some(node), target_id),
        None => NodeMetadata::NotInTree,
    };
    if !matches!(in_primary, NodeMetadata::NotInTree) {
        return in_primary;
    }

    match node.secondary_input.as_deref() {
        Some(secondary) => find_target(secondary, Some(node), target_id),
        None => NodeMetadata::NotInTree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn leaf(id: u64) -> StepTree {
        StepTree::leaf(StepId(id))
    }

    /// 1 ── 2 ── 3 on the main line, nested strategy head 4 on 1's secondary.
    fn sample_tree() -> StepTree {
        StepTree::new(
            StepId(1),
            Some(StepTree::new(StepId(2), Some(leaf(3)), None)),
            Some(leaf(4)),
        )
    }

    #[test]
    fn classifies_root() {
        let tree = sample_tree();
        assert_eq!(
            get_node_metadata(&tree, StepId(1)),
            NodeMetadata::Root { node: &tree }
        );
    }

    #[test]
    fn classifies_primary_input() {
        let tree = sample_tree();
        let NodeMetadata::PrimaryInput { node, parent } = get_node_metadata(&tree, StepId(3))
        else {
            panic!("expected primary-input role");
        };
        assert_eq!(node.step_id, StepId(3));
        assert_eq!(parent.step_id, StepId(2));
    }

    #[test]
    fn classifies_secondary_input() {
        let tree = sample_tree();
        let NodeMetadata::SecondaryInput { node, parent } = get_node_metadata(&tree, StepId(4))
        else {
            panic!("expected secondary-input role");
        };
        assert_eq!(node.step_id, StepId(4));
        assert_eq!(parent.step_id, StepId(1));
    }

    #[test]
    fn absent_id_is_not_in_tree() {
        let tree = sample_tree();
        assert_eq!(
            get_node_metadata(&tree, StepId(99)),
            NodeMetadata::NotInTree
        );
    }

    #[test]
    fn single_node_tree_is_its_own_root() {
        let tree = leaf(5);
        assert_eq!(
            get_node_metadata(&tree, StepId(5)),
            NodeMetadata::Root { node: &tree }
        );
    }

    #[test]
    fn finds_nodes_deep_in_a_nested_strategy() {
        // Nested strategy 4 ── 5 hanging off the main-line root
        let nested = StepTree::new(StepId(4), Some(leaf(5)), None);
        let tree = StepTree::new(StepId(1), Some(leaf(2)), Some(nested));
        let NodeMetadata::PrimaryInput { node, parent } = get_node_metadata(&tree, StepId(5))
        else {
            panic!("expected primary-input role");
        };
        assert_eq!(node.step_id, StepId(5));
        assert_eq!(parent.step_id, StepId(4));
    }
}
