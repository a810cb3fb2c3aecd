/*!
 * # Step-tree editing core
 *
 * This module is the edit algebra for strategy step trees. A strategy is a
 * tree of [`StepTree`](crate::model::StepTree) nodes: the `primary_input`
 * chain from the root is the main line of steps, and each `secondary_input`
 * holds the head of a nested strategy combined in at that point.
 *
 * ## Architecture
 *
 * ### 1. Pure values in, new values out
 * - Every operation reads a borrowed tree and returns a freshly built tree
 * - The caller's tree is never mutated; untouched subtrees are cloned in
 * - The surrounding application applies the returned tree as the new single
 *   source of truth before computing the next edit (last writer wins; no
 *   locking here because no state is retained between calls)
 *
 * ### 2. Locate, then rewrite
 * - [`get_node_metadata`] classifies a target step's structural role as a sum
 *   type: `NotInTree`, `Root`, `PrimaryInput`, or `SecondaryInput`
 * - Each edit operation matches exhaustively on that role to pick its rewrite
 *   policy, then rebuilds the path from the root to the edit point
 *
 * ### 3. Absence is data, not an error
 * - A missing or invalid target degrades to an identity copy of the input
 * - [`remove_step`] returns `None` when the last step is removed; an empty
 *   strategy is a valid terminal state
 * - Callers are expected to check whether an edit is semantically allowed
 *   before requesting it; these operations only keep the structure valid
 *
 * ## Usage Pattern
 *
 * ```rust
 * use steptree_engine::{AddType, StepId, StepTree, add_step, get_step_ids, remove_step};
 *
 * // One-step strategy loaded from persisted state
 * let strategy = StepTree::leaf(StepId(1));
 *
 * // Combine a two-step nested strategy onto the root
 * let nested = StepTree::new(StepId(3), Some(StepTree::leaf(StepId(4))), None);
 * let add = AddType::Append {
 *     primary_input_step_id: StepId(1),
 * };
 * let combined = add_step(&strategy, add, StepId(2), Some(&nested));
 * assert_eq!(
 *     get_step_ids(&combined),
 *     vec![StepId(2), StepId(1), StepId(3), StepId(4)]
 * );
 *
 * // Removing the combiner drops its nested input with it
 * let back = remove_step(&combined, StepId(2));
 * assert_eq!(back, Some(strategy));
 * ```
 */

pub mod add;
pub mod locate;
pub mod queries;
pub mod remove;
pub mod replace;

pub use add::{add_step, append, insert_before};
pub use locate::{NodeMetadata, get_node_metadata};
pub use queries::{
    find_primary_branch_height, find_primary_branch_leaf, find_subtree, get_output_step,
    get_previous_step, get_step_ids,
};
pub use remove::remove_step;
pub use replace::replace_step;
