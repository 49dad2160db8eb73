pub mod aggregate;
pub mod loader;
pub mod output;
pub mod records;
pub mod report;
