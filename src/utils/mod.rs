pub mod files;
pub mod sanitize;
