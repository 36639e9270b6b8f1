mod attribute;
mod config;
mod format;
mod request;
pub mod resource;
mod response;

pub use attribute::{parse_attribute, parse_attributes};
pub use config::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_VERSION, ENV_ACCESS_TOKEN, ENV_ENDPOINT,
    ENV_TIMEOUT, ENV_VERSION, FileConfig, Settings,
};
pub use format::OutputFormat;
pub use request::{
    CreatedBy, CrudMode, CrudRequest, PageArgs, UpdatedBy, bool_as_string, join_lines,
    join_lines_opt,
};
pub use resource::{CellFormat, Column, Resource, ResourceKind};
pub use response::{ApiResponse, HealthData, HealthResponse, Record};
