mod health_check;
mod home;
mod login;

// re-export
pub use health_check::*;
pub use home::*;
pub use login::*;
