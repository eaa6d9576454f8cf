//! Digit-tree node structure and the public set type.

mod node;
mod set;

pub use node::Node;
pub use set::TrieSet;
