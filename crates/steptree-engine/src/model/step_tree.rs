use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of one step within a strategy.
///
/// Step ids are opaque integers assigned by the persistence service. They are
/// unique within a single tree at any given time, but not across the
/// application's lifetime: structural edits reuse and reassign ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for StepId {
    fn from(id: u64) -> Self {
        StepId(id)
    }
}

/// Violation of a structural step-tree invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("step id {0} appears more than once in the tree")]
    DuplicateStepId(StepId),
}

/// One search step within a strategy, plus the inputs feeding it.
///
/// A strategy is a binary-ish tree of steps. The chain of `primary_input`
/// links from the root is the strategy's "main line": the linear sequence of
/// steps the user built up. A `secondary_input` is only present on combiner
/// steps and holds the head of a nested strategy grafted in at that point; a
/// node carrying only a `secondary_input` is itself such a nested head.
///
/// Trees are plain owned values. The editing operations in
/// [`crate::editing`] never mutate a tree in place; they return new trees and
/// leave the caller's value untouched, so the caller can keep the old tree
/// around (e.g. for undo) or swap in the new one as the single source of
/// truth.
///
/// The serde representation matches the persisted strategy record: camelCase
/// keys, absent children omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTree {
    pub step_id: StepId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_input: Option<Box<StepTree>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_input: Option<Box<StepTree>>,
}

impl StepTree {
    /// A single step with no inputs.
    pub fn leaf(step_id: StepId) -> Self {
        Self {
            step_id,
            primary_input: None,
            secondary_input: None,
        }
    }

    pub fn new(
        step_id: StepId,
        primary_input: Option<StepTree>,
        secondary_input: Option<StepTree>,
    ) -> Self {
        Self {
            step_id,
            primary_input: primary_input.map(Box::new),
            secondary_input: secondary_input.map(Box::new),
        }
    }

    /// Pre-order iterator over the nodes of this tree: self, then the primary
    /// subtree, then the secondary subtree.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Number of steps in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// A step tree always holds at least its root step.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, step_id: StepId) -> bool {
        self.iter().any(|node| node.step_id == step_id)
    }

    /// Checks the id-uniqueness invariant: no step id may appear twice in one
    /// tree. Run this after deserializing persisted strategy state; the edit
    /// operations preserve it.
    pub fn validate(&self) -> Result<(), TreeError> {
        let mut seen = HashSet::new();
        for node in self.iter() {
            if !seen.insert(node.step_id) {
                return Err(TreeError::DuplicateStepId(node.step_id));
            }
        }
        Ok(())
    }
}

/// Borrowed pre-order traversal, see [`StepTree::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a StepTree>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a StepTree;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push secondary first so primary is visited first.
        if let Some(secondary) = node.secondary_input.as_deref() {
            self.stack.push(secondary);
        }
        if let Some(primary) = node.primary_input.as_deref() {
            self.stack.push(primary);
        }
        Some(node)
    }
}

impl<'a> IntoIterator for &'a StepTree {
    type Item = &'a StepTree;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn leaf(id: u64) -> StepTree {
        StepTree::leaf(StepId(id))
    }

    fn combiner(id: u64, primary: StepTree, secondary: StepTree) -> StepTree {
        StepTree::new(StepId(id), Some(primary), Some(secondary))
    }

    #[test]
    fn iter_visits_self_then_primary_then_secondary() {
        let tree = combiner(1, leaf(2), leaf(3));
        let ids: Vec<u64> = tree.iter().map(|node| node.step_id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn iter_descends_primary_chain_before_secondary_branches() {
        // 1 ── 2 ── 4, with nested strategy (3 ── 5) on 1's secondary slot
        let nested = StepTree::new(StepId(3), Some(leaf(5)), None);
        let tree = combiner(1, StepTree::new(StepId(2), Some(leaf(4)), None), nested);
        let ids: Vec<u64> = tree.iter().map(|node| node.step_id.0).collect();
        assert_eq!(ids, vec![1, 2, 4, 3, 5]);
    }

    #[test]
    fn len_counts_every_node() {
        let tree = combiner(1, combiner(2, leaf(3), leaf(4)), leaf(5));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn contains_finds_nested_ids() {
        let tree = combiner(1, leaf(2), leaf(3));
        assert!(tree.contains(StepId(3)));
        assert!(!tree.contains(StepId(4)));
    }

    #[test]
    fn validate_accepts_unique_ids() {
        let tree = combiner(1, leaf(2), leaf(3));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let tree = combiner(1, leaf(2), leaf(2));
        assert_eq!(tree.validate(), Err(TreeError::DuplicateStepId(StepId(2))));
    }

    #[test]
    fn serializes_to_persisted_record_shape() {
        let tree = StepTree::new(StepId(1), Some(leaf(2)), None);
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stepId": 1,
                "primaryInput": { "stepId": 2 }
            })
        );
    }

    #[test]
    fn deserializes_with_absent_children() {
        let tree: StepTree = serde_json::from_str(r#"{"stepId": 7}"#).unwrap();
        assert_eq!(tree, leaf(7));
    }

    #[test]
    fn round_trips_through_json() {
        let tree = combiner(1, combiner(2, leaf(3), leaf(4)), leaf(5));
        let json = serde_json::to_string(&tree).unwrap();
        let back: StepTree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
