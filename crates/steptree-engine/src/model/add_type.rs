use serde::{Deserialize, Serialize};

use crate::model::StepId;

/// Where a new step is being added to a strategy.
///
/// This is the request shape the surrounding application hands to the editing
/// core, serialized as a discriminated union on `type`:
/// `{"type": "append", "primaryInputStepId": n}` or
/// `{"type": "insert-before", "outputStepId": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AddType {
    /// Add onto an existing strategy root (main or nested), pushing the
    /// current root down the primary chain.
    #[serde(rename_all = "camelCase")]
    Append { primary_input_step_id: StepId },
    /// Add immediately upstream of an existing step.
    #[serde(rename_all = "camelCase")]
    InsertBefore { output_step_id: StepId },
}
