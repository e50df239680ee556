pub mod location;
pub mod repository;
pub mod sample;
pub mod schema;
pub mod sqlite;
pub mod workbook;
