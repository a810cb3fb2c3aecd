pub mod add_type;
pub mod step_tree;

pub use add_type::AddType;
pub use step_tree::{StepId, StepTree, TreeError};
