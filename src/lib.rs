pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod screens;
