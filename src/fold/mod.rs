pub mod chain;
pub mod command;
pub mod dual;
pub mod partition;
pub mod plane;
pub mod single;

pub use chain::{FoldChainState, PendingBone};
pub use command::{FoldCommand, FoldOutcome};
pub use dual::DualFold;
pub use partition::{partition_vertices, partition_vertices_default, VertexGroups};
pub use plane::FoldPlane;
pub use single::SingleFold;
