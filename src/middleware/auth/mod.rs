pub mod access;

pub use access::{ACCESS_TOKEN_COOKIE, access_cookie, authenticate};
