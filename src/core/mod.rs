pub mod gallery;
pub mod transform;

pub use gallery::*;
pub use transform::*;
