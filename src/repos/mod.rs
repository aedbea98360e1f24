pub mod company_repo;
pub mod error;

pub use company_repo::CompanyRepo;
pub use error::{RepoError, RepoResult};
