pub mod error;
pub mod fold;
pub mod math;
pub mod mesh;
pub mod rig;

pub use error::{PlicaError, Result};
