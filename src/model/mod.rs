pub mod id;
pub mod node;
pub mod tree;

pub use id::*;
pub use node::*;
pub use tree::*;
