mod get;
mod post;
mod visibility;

pub use get::*;
pub use post::*;
pub use visibility::*;
