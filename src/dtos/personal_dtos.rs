use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::personal::{Column, FieldUpdate, NewPersonalInformation};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rejection of a request body at the boundary; surfaces as HTTP 400.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Body of POST and PUT. Every field may be absent or null.
#[derive(Debug, Default, Deserialize)]
pub struct PersonalInformationIn {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// "YYYY-MM-DD"
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl PersonalInformationIn {
    pub fn into_new(self) -> Result<NewPersonalInformation, ValidationError> {
        Ok(NewPersonalInformation {
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: parse_date(self.date_of_birth.as_deref())?,
            gender: self.gender,
        })
    }
}

/// Response of DELETE.
#[derive(Debug, Serialize)]
pub struct DeletedOut {
    pub message: String,
}

impl DeletedOut {
    pub fn for_id(id: i32) -> Self {
        Self { message: format!("Record with ID {} deleted", id) }
    }
}

/// Uniform error body: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorOut {
    pub error: String,
}

/// Validates a PATCH body into typed column assignments.
///
/// Keys must name a writable column; anything else is rejected so that only
/// known column names ever reach statement text.
pub fn parse_patch(body: Value) -> Result<Vec<FieldUpdate>, ValidationError> {
    let fields = match body {
        Value::Object(map) => map,
        _ => return Err(ValidationError("Request body must be a JSON object".to_string())),
    };

    if fields.is_empty() {
        return Err(ValidationError("No fields provided for update".to_string()));
    }

    fields
        .into_iter()
        .map(|(key, value)| {
            if key == "id" {
                return Err(ValidationError("Field 'id' cannot be updated".to_string()));
            }
            let column: Column = key
                .parse()
                .map_err(|_| ValidationError(format!("Unknown field: {}", key)))?;
            field_update(column, value)
        })
        .collect()
}

/// Echo for a successful PATCH: the id plus the supplied fields.
pub fn patch_echo(id: i32, updates: &[FieldUpdate]) -> Value {
    let mut out = Map::new();
    out.insert("id".to_string(), Value::from(id));
    for update in updates {
        out.insert(update.column().to_string(), update.to_json());
    }
    Value::Object(out)
}

fn field_update(column: Column, value: Value) -> Result<FieldUpdate, ValidationError> {
    let text = match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        _ => {
            return Err(ValidationError(format!(
                "Field '{}' must be a string or null",
                column
            )));
        }
    };

    Ok(match column {
        Column::FirstName => FieldUpdate::FirstName(text),
        Column::LastName => FieldUpdate::LastName(text),
        Column::DateOfBirth => FieldUpdate::DateOfBirth(parse_date(text.as_deref())?),
        Column::Gender => FieldUpdate::Gender(text),
    })
}

// blank strings are stored as NULL
fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| {
                ValidationError(format!(
                    "Invalid date_of_birth: '{}'. Use YYYY-MM-DD",
                    s
                ))
            }),
    }
}
