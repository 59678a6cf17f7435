//! Row models and DTOs for the catalog tables.
//!
//! Rows are decoded by column name (`sqlx::FromRow`), never by position, so
//! adding a column to a table cannot shift values into the wrong field.

pub mod bike;
pub mod brand;
