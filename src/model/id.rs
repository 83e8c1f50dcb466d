use crate::model::{NodeId, WorkflowTree};
use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated node ids, matching the ids produced by typical
/// browser-side editors.
const ID_LEN: usize = 9;

/// Generates a random nine-character lowercase alphanumeric id.
pub fn random_id() -> NodeId {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}

/// Generates an id guaranteed not to collide with any node in `tree`.
/// Collisions are vanishingly rare at this id length, but the retry keeps
/// id uniqueness an invariant rather than a probability.
pub fn fresh_id(tree: &WorkflowTree) -> NodeId {
    loop {
        let id = random_id();
        if !tree.contains(&id) {
            return id;
        }
    }
}
