pub mod editing;
pub mod model;

// Re-export key types for easier usage
pub use editing::*;
pub use model::{add_type::*, step_tree::*};
