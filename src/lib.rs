// Library for tests and demos to access modules

pub mod collector_repo;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod sample_repo;
pub mod summary;
pub mod worker;
