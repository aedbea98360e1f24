/*
 * Responsibility
 * - companies テーブル向け SQLx 操作
 * - PgPool を受け取り get/create/update/delete を提供
 * - 0 行ヒットは RepoError::NotFound、name 重複は RepoError::Conflict
 */
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::{Company, CompanyInput, CompanyType};
use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub employees: i32,
    pub registered: bool,
    #[sqlx(rename = "type")]
    pub company_type: String,
}

impl TryFrom<CompanyRow> for Company {
    type Error = RepoError;

    fn try_from(row: CompanyRow) -> Result<Self, Self::Error> {
        // The CHECK constraint should make this unreachable.
        let company_type = row
            .company_type
            .parse::<CompanyType>()
            .map_err(|e| RepoError::Db(sqlx::Error::Decode(Box::new(e))))?;

        Ok(Company {
            id: row.id,
            name: row.name,
            description: row.description,
            employees: row.employees,
            registered: row.registered,
            company_type,
        })
    }
}

#[derive(Clone, Debug)]
pub struct CompanyRepo {
    pool: PgPool,
}

impl CompanyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: Uuid) -> RepoResult<Company> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, name, description, employees, registered, type
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Company::try_from(row)
    }

    pub async fn create(&self, input: &CompanyInput) -> RepoResult<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO companies (name, description, employees, registered, type)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.employees)
        .bind(input.registered)
        .bind(input.company_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(id)
    }

    pub async fn update(&self, id: Uuid, input: &CompanyInput) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE companies
            SET
                name = $2,
                description = $3,
                employees = $4,
                registered = $5,
                type = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.employees)
        .bind(input.registered)
        .bind(input.company_type.as_str())
        .execute(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
