pub mod sign_out;
pub mod tokens;
