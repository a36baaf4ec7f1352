// In-memory stand-in for the PostgreSQL repository, used by handler and service tests.
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use deadpool_postgres::PoolError;

use super::personal_repository::{PersonalRepository, RepoError};
use crate::models::personal::{FieldUpdate, NewPersonalInformation, PersonalInformation};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, PersonalInformation>,
    last_id: i32,
}

#[derive(Default)]
pub struct MemoryPersonalRepository {
    table: Mutex<Table>,
    closed: bool,
}

impl MemoryPersonalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails the way a closed pool does.
    pub fn closed() -> Self {
        Self { closed: true, ..Self::default() }
    }

    fn check_open(&self) -> Result<(), RepoError> {
        if self.closed {
            return Err(RepoError::Pool(PoolError::Closed));
        }
        Ok(())
    }
}

#[async_trait]
impl PersonalRepository for MemoryPersonalRepository {
    async fn list(&self) -> Result<Vec<PersonalInformation>, RepoError> {
        self.check_open()?;
        let table = self.table.lock().unwrap();
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PersonalInformation>, RepoError> {
        self.check_open()?;
        let table = self.table.lock().unwrap();
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, record: &NewPersonalInformation) -> Result<i32, RepoError> {
        self.check_open()?;
        let mut table = self.table.lock().unwrap();
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, record.clone().with_id(id));
        Ok(id)
    }

    async fn update_all(&self, id: i32, record: &NewPersonalInformation) -> Result<u64, RepoError> {
        self.check_open()?;
        let mut table = self.table.lock().unwrap();
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = record.clone().with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_fields(&self, id: i32, updates: &[FieldUpdate]) -> Result<u64, RepoError> {
        self.check_open()?;
        let mut table = self.table.lock().unwrap();
        match table.rows.get_mut(&id) {
            Some(row) => {
                for update in updates {
                    update.apply_to(row);
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, RepoError> {
        self.check_open()?;
        let mut table = self.table.lock().unwrap();
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }
}
