mod response_util;

pub use response_util::*;
