//! Request body plumbing shared by every resource.
//!
//! Each resource defines its own typed create body and update patch. They
//! are wrapped in [`CrudRequest`] to add the `crud_mode` discriminator the
//! server expects regardless of the HTTP verb used.

use clap::Args;
use serde::{Serialize, Serializer};

use crate::utils::time::now_millis;

/// Discriminator sent inside create and edit bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudMode {
    Create = 1,
    Edit = 2,
}

impl Serialize for CrudMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// A resource body tagged with its `crud_mode`.
#[derive(Debug, Serialize)]
pub struct CrudRequest<'a, T: Serialize> {
    pub crud_mode: CrudMode,

    #[serde(flatten)]
    pub fields: &'a T,
}

impl<'a, T: Serialize> CrudRequest<'a, T> {
    pub fn create(fields: &'a T) -> Self {
        Self {
            crud_mode: CrudMode::Create,
            fields,
        }
    }

    pub fn edit(fields: &'a T) -> Self {
        Self {
            crud_mode: CrudMode::Edit,
            fields,
        }
    }
}

/// Audit fields sent on create.
#[derive(Debug, Clone, Args, Serialize)]
pub struct CreatedBy {
    #[arg(long, default_value = "admin", help = "Creator's name")]
    pub created_by: String,

    #[arg(long, help = "Created time in milliseconds (UTC), defaults to now")]
    #[serde(serialize_with = "millis_or_now")]
    pub created_time: Option<i64>,
}

/// Audit fields sent on update.
#[derive(Debug, Clone, Args, Serialize)]
pub struct UpdatedBy {
    #[arg(long, default_value = "admin", help = "Updater's name")]
    pub updated_by: String,

    #[arg(long, help = "Updated time in milliseconds (UTC), defaults to now")]
    #[serde(serialize_with = "millis_or_now")]
    pub updated_time: Option<i64>,
}

impl Default for UpdatedBy {
    fn default() -> Self {
        Self {
            updated_by: "admin".to_string(),
            updated_time: None,
        }
    }
}

/// Pagination flags for list commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    #[arg(long, short, default_value_t = 1, help = "Page number")]
    pub page: u32,

    #[arg(long, short, default_value_t = 100, help = "Page size")]
    pub size: u32,
}

impl Default for PageArgs {
    fn default() -> Self {
        Self { page: 1, size: 100 }
    }
}

fn millis_or_now<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(value.unwrap_or_else(now_millis))
}

/// Serialize a list as a newline-joined string.
pub fn join_lines<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&values.join("\n"))
}

/// Same as [`join_lines`] for patch fields; pair with
/// `skip_serializing_if = "Option::is_none"`.
pub fn join_lines_opt<S: Serializer>(
    values: &Option<Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match values {
        Some(values) => join_lines(values, serializer),
        None => serializer.serialize_none(),
    }
}

/// Serialize a flag as the string `"true"` or `"false"`.
pub fn bool_as_string<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "false" })
}
