// src/repositories/personal_repository.rs
use async_trait::async_trait;
use deadpool_postgres::{Pool, PoolError};
use thiserror::Error;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

use crate::models::personal::{
    FieldUpdate, NewPersonalInformation, PersonalInformation, TABLE_NAME,
};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    Pool(#[from] PoolError),
    #[error("{}", postgres_message(.0))]
    Postgres(#[from] tokio_postgres::Error),
}

// prefer the server's own message over the driver's generic "db error"
fn postgres_message(err: &tokio_postgres::Error) -> String {
    match err.as_db_error() {
        Some(db) => db.message().to_string(),
        None => err.to_string(),
    }
}

/// One method per statement against `personal_information`.
///
/// Mutations report the number of affected rows; deciding what zero means is
/// left to the caller.
#[async_trait]
pub trait PersonalRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<PersonalInformation>, RepoError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<PersonalInformation>, RepoError>;
    /// Returns the store-assigned id.
    async fn insert(&self, record: &NewPersonalInformation) -> Result<i32, RepoError>;
    async fn update_all(&self, id: i32, record: &NewPersonalInformation) -> Result<u64, RepoError>;
    async fn update_fields(&self, id: i32, updates: &[FieldUpdate]) -> Result<u64, RepoError>;
    async fn delete(&self, id: i32) -> Result<u64, RepoError>;
}

/// PostgreSQL implementation. Every call checks out its own connection,
/// which goes back to the pool when the guard drops.
#[derive(Clone)]
pub struct PgPersonalRepository {
    pool: Pool,
}

impl PgPersonalRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = "id, first_name, last_name, date_of_birth, gender";

fn select_all_sql() -> String {
    format!("SELECT {} FROM {}", SELECT_COLUMNS, TABLE_NAME)
}

fn select_by_id_sql() -> String {
    format!("SELECT {} FROM {} WHERE id = $1", SELECT_COLUMNS, TABLE_NAME)
}

fn insert_sql() -> String {
    format!(
        "INSERT INTO {} (first_name, last_name, date_of_birth, gender) VALUES ($1, $2, $3, $4) RETURNING id",
        TABLE_NAME
    )
}

fn update_all_sql() -> String {
    format!(
        "UPDATE {} SET first_name = $1, last_name = $2, date_of_birth = $3, gender = $4 WHERE id = $5",
        TABLE_NAME
    )
}

fn delete_sql() -> String {
    format!("DELETE FROM {} WHERE id = $1", TABLE_NAME)
}

/// `UPDATE ... SET a = $1, b = $2 WHERE id = $3`. Column names come from
/// `Column`, never from the request.
pub fn update_fields_sql(updates: &[FieldUpdate]) -> String {
    let set_clause = updates
        .iter()
        .enumerate()
        .map(|(i, u)| format!("{} = ${}", u.column(), i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE id = ${}",
        TABLE_NAME,
        set_clause,
        updates.len() + 1
    )
}

fn sql_value(update: &FieldUpdate) -> &(dyn ToSql + Sync) {
    match update {
        FieldUpdate::FirstName(v) | FieldUpdate::LastName(v) | FieldUpdate::Gender(v) => {
            v as &(dyn ToSql + Sync)
        }
        FieldUpdate::DateOfBirth(v) => v as &(dyn ToSql + Sync),
    }
}

/// Bound values for `update_fields_sql`: one per update in slice order, then the id.
fn update_fields_params<'a>(updates: &'a [FieldUpdate], id: &'a i32) -> Vec<&'a (dyn ToSql + Sync)> {
    let mut params: Vec<&(dyn ToSql + Sync)> = updates.iter().map(sql_value).collect();
    params.push(id);
    params
}

fn row_to_record(row: &Row) -> Result<PersonalInformation, tokio_postgres::Error> {
    Ok(PersonalInformation {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        date_of_birth: row.try_get("date_of_birth")?,
        gender: row.try_get("gender")?,
    })
}

#[async_trait]
impl PersonalRepository for PgPersonalRepository {
    async fn list(&self) -> Result<Vec<PersonalInformation>, RepoError> {
        let client = self.pool.get().await?;
        let rows = client.query(select_all_sql().as_str(), &[]).await?;
        let records = rows
            .iter()
            .map(row_to_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PersonalInformation>, RepoError> {
        let client = self.pool.get().await?;
        let row = client.query_opt(select_by_id_sql().as_str(), &[&id]).await?;
        match row {
            Some(row) => Ok(Some(row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, record: &NewPersonalInformation) -> Result<i32, RepoError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                insert_sql().as_str(),
                &[
                    &record.first_name,
                    &record.last_name,
                    &record.date_of_birth,
                    &record.gender,
                ],
            )
            .await?;
        Ok(row.try_get("id")?)
    }

    async fn update_all(&self, id: i32, record: &NewPersonalInformation) -> Result<u64, RepoError> {
        let client = self.pool.get().await?;
        let affected = client
            .execute(
                update_all_sql().as_str(),
                &[
                    &record.first_name,
                    &record.last_name,
                    &record.date_of_birth,
                    &record.gender,
                    &id,
                ],
            )
            .await?;
        Ok(affected)
    }

    async fn update_fields(&self, id: i32, updates: &[FieldUpdate]) -> Result<u64, RepoError> {
        let sql = update_fields_sql(updates);
        let params = update_fields_params(updates, &id);

        let client = self.pool.get().await?;
        let affected = client.execute(sql.as_str(), &params).await?;
        Ok(affected)
    }

    async fn delete(&self, id: i32) -> Result<u64, RepoError> {
        let client = self.pool.get().await?;
        let affected = client.execute(delete_sql().as_str(), &[&id]).await?;
        Ok(affected)
    }
}
