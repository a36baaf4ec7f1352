// src/models/personal.rs

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const TABLE_NAME: &str = "personal_information";

/// One row of `personal_information`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInformation {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>, // serialized as "YYYY-MM-DD"
    pub gender: Option<String>,
}

/// Writable fields of a record, without the store-assigned id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPersonalInformation {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

impl NewPersonalInformation {
    pub fn with_id(self, id: i32) -> PersonalInformation {
        PersonalInformation {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
        }
    }
}

/// The columns a client may write. `id` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FirstName,
    LastName,
    DateOfBirth,
    Gender,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::FirstName,
        Column::LastName,
        Column::DateOfBirth,
        Column::Gender,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Column::FirstName => "first_name",
            Column::LastName => "last_name",
            Column::DateOfBirth => "date_of_birth",
            Column::Gender => "gender",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// A single column assignment with its typed value. `None` writes NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FirstName(Option<String>),
    LastName(Option<String>),
    DateOfBirth(Option<NaiveDate>),
    Gender(Option<String>),
}

impl FieldUpdate {
    pub fn column(&self) -> Column {
        match self {
            FieldUpdate::FirstName(_) => Column::FirstName,
            FieldUpdate::LastName(_) => Column::LastName,
            FieldUpdate::DateOfBirth(_) => Column::DateOfBirth,
            FieldUpdate::Gender(_) => Column::Gender,
        }
    }

    pub fn apply_to(&self, record: &mut PersonalInformation) {
        match self {
            FieldUpdate::FirstName(v) => record.first_name = v.clone(),
            FieldUpdate::LastName(v) => record.last_name = v.clone(),
            FieldUpdate::DateOfBirth(v) => record.date_of_birth = *v,
            FieldUpdate::Gender(v) => record.gender = v.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldUpdate::FirstName(v) | FieldUpdate::LastName(v) | FieldUpdate::Gender(v) => {
                serde_json::json!(v)
            }
            FieldUpdate::DateOfBirth(v) => serde_json::json!(v),
        }
    }
}
