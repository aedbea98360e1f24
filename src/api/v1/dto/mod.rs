pub mod auth;
pub mod companies;
