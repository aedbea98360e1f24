pub mod company_service;
pub mod token;

pub use company_service::{CompanyService, CompanyStore};
pub use token::TokenService;
