mod sign_in_data;

pub use sign_in_data::SignInData;
