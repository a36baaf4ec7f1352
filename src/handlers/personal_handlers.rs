// src/handlers/personal_handlers.rs
use actix_web::error::InternalError;
use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde_json::Value;

use crate::dtos::personal::{ErrorOut, PersonalInformationIn};
use crate::services::personal_services::{PersonalService, ServiceError};

/// Registers the `/personal_information` routes and a JSON extractor config
/// whose rejections use the same `{"error": ...}` body as everything else.
/// Bodies are read as JSON whether or not the client sent a JSON content type.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_cfg = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(ErrorOut {
                error: err.to_string(),
            });
            InternalError::from_response(err, response).into()
        });

    cfg.app_data(json_cfg)
        .service(list_records)
        .service(get_record)
        .service(create_record)
        .service(replace_record)
        .service(patch_record)
        .service(delete_record);
}

/// GET /personal_information
#[get("/personal_information")]
pub async fn list_records(svc: web::Data<PersonalService>) -> Result<HttpResponse, ServiceError> {
    let records = svc.list_all().await?;
    Ok(HttpResponse::Ok().json(records))
}

/// GET /personal_information/{id}
#[get("/personal_information/{id}")]
pub async fn get_record(
    svc: web::Data<PersonalService>,
    id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let record = svc.get_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// POST /personal_information
#[post("/personal_information")]
pub async fn create_record(
    svc: web::Data<PersonalService>,
    body: web::Json<PersonalInformationIn>,
) -> Result<HttpResponse, ServiceError> {
    let created = svc.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /personal_information/{id}
#[put("/personal_information/{id}")]
pub async fn replace_record(
    svc: web::Data<PersonalService>,
    id: web::Path<String>,
    body: web::Json<PersonalInformationIn>,
) -> Result<HttpResponse, ServiceError> {
    let updated = svc.full_update(&id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// PATCH /personal_information/{id}
#[patch("/personal_information/{id}")]
pub async fn patch_record(
    svc: web::Data<PersonalService>,
    id: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ServiceError> {
    let echo = svc.partial_update(&id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(echo))
}

/// DELETE /personal_information/{id}
#[delete("/personal_information/{id}")]
pub async fn delete_record(
    svc: web::Data<PersonalService>,
    id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let out = svc.delete(&id).await?;
    Ok(HttpResponse::Ok().json(out))
}
