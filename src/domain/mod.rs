pub mod chart;
pub mod error;
pub mod schema;
pub mod summary;
