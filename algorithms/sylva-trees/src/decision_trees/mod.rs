mod algorithm;
mod hyperparams;
mod iter;
mod node;
pub mod pruning;
pub mod splitting;
mod tikz;

pub use algorithm::*;
pub use hyperparams::*;
pub use iter::*;
pub use node::TreeNode;
pub use tikz::*;
