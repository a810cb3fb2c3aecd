use steptree_engine::{StepId, StepTree};

// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn deep_chain(len: u64) -> StepTree {
    let mut tree = StepTree::leaf(StepId(1));
    for id in 2..=len {
        tree = StepTree::new(StepId(id), Some(tree), None);
    }
    tree
}

// A main line of combiners, each carrying a nested three-step strategy.
#[allow(dead_code)]
pub fn combined_strategy(combiners: u64) -> StepTree {
    let mut next_id = 1;
    let mut fresh = || {
        let id = StepId(next_id);
        next_id += 1;
        id
    };

    let mut tree = StepTree::leaf(fresh());
    for _ in 0..combiners {
        let nested = StepTree::new(
            fresh(),
            Some(StepTree::new(
                fresh(),
                Some(StepTree::leaf(fresh())),
                None,
            )),
            None,
        );
        tree = StepTree::new(fresh(), Some(tree), Some(nested));
    }
    tree
}
