pub mod document;
pub mod frontend;

pub use document::*;
pub use frontend::*;
