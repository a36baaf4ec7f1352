// src/services/personal_services.rs
use std::sync::Arc;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use log::{error, info};
use serde_json::Value;
use thiserror::Error;

use crate::dtos::personal::{
    DeletedOut, ErrorOut, PersonalInformationIn, ValidationError, parse_patch, patch_echo,
};
use crate::models::personal::PersonalInformation;
use crate::repositories::personal_repository::{PersonalRepository, RepoError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Record not found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Store(#[from] RepoError),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::BadRequest(err.0)
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ServiceError::Store(e) = self {
            error!("store failure: {}", e);
        }
        HttpResponse::build(self.status_code()).json(ErrorOut {
            error: self.to_string(),
        })
    }
}

/// Stateless CRUD over `personal_information`. Each call issues exactly one
/// statement through the repository.
#[derive(Clone)]
pub struct PersonalService {
    repo: Arc<dyn PersonalRepository>,
}

impl PersonalService {
    pub fn new(repo: Arc<dyn PersonalRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<PersonalInformation>, ServiceError> {
        Ok(self.repo.list().await?)
    }

    pub async fn get_by_id(&self, raw_id: &str) -> Result<PersonalInformation, ServiceError> {
        let id = parse_id(raw_id)?;
        self.repo.find_by_id(id).await?.ok_or(ServiceError::NotFound)
    }

    pub async fn create(&self, body: PersonalInformationIn) -> Result<PersonalInformation, ServiceError> {
        let new = body.into_new()?;
        let id = self.repo.insert(&new).await?;
        info!("created personal_information id={}", id);
        Ok(new.with_id(id))
    }

    /// Overwrites all four columns. The response echoes the input rather than re-reading the row.
    pub async fn full_update(
        &self,
        raw_id: &str,
        body: PersonalInformationIn,
    ) -> Result<PersonalInformation, ServiceError> {
        let record = body.into_new()?;
        let id = parse_id(raw_id)?;
        match self.repo.update_all(id, &record).await? {
            0 => Err(ServiceError::NotFound),
            _ => Ok(record.with_id(id)),
        }
    }

    /// Body validation runs before the id is considered, so an empty map is
    /// a 400 whether or not the record exists.
    pub async fn partial_update(&self, raw_id: &str, body: Value) -> Result<Value, ServiceError> {
        let updates = parse_patch(body)?;
        let id = parse_id(raw_id)?;
        match self.repo.update_fields(id, &updates).await? {
            0 => Err(ServiceError::NotFound),
            _ => Ok(patch_echo(id, &updates)),
        }
    }

    pub async fn delete(&self, raw_id: &str) -> Result<DeletedOut, ServiceError> {
        let id = parse_id(raw_id)?;
        match self.repo.delete(id).await? {
            0 => Err(ServiceError::NotFound),
            _ => {
                info!("deleted personal_information id={}", id);
                Ok(DeletedOut::for_id(id))
            }
        }
    }
}

// A non-integer id can never match a row.
fn parse_id(raw: &str) -> Result<i32, ServiceError> {
    raw.trim().parse::<i32>().map_err(|_| ServiceError::NotFound)
}
