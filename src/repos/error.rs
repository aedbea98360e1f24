/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 * - "not found" と "conflict" は Db から切り離して返す (上位で分類できるように)
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("company not found")]
    NotFound,
    #[error("company with that name already exists")]
    Conflict,
    #[error("db error")]
    Db(#[source] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl RepoError {
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if matches!(e, sqlx::Error::RowNotFound) {
            return RepoError::NotFound;
        }
        if let sqlx::Error::Database(dbe) = &e
            && dbe.code().as_deref() == Some("23505")
        {
            return RepoError::Conflict;
        }
        RepoError::Db(e)
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(e: sqlx::Error) -> Self {
        Self::from_sqlx(e)
    }
}
