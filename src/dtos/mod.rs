pub mod personal_dtos;
// alias so callers can write `crate::dtos::personal`
pub use personal_dtos as personal;
