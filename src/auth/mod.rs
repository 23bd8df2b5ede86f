mod authenticator;
mod diagnostic;

pub use authenticator::*;
pub use diagnostic::*;
