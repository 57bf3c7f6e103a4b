pub mod input;
pub mod loader;
pub mod report;
pub mod schema;
