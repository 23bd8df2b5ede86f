mod native_constraints;
mod sign_in_request;
mod sign_in_state;

pub use native_constraints::NativeConstraints;
pub use sign_in_request::SignInRequest;
pub use sign_in_state::{FormEvent, SignInState};
