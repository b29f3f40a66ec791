pub mod api;
pub mod catalog;
pub mod config;
pub mod data_models;
pub mod encyclopedia;
pub mod error;
pub mod lookup;
pub mod search;
