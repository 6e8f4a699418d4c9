#[macro_use]
extern crate rocket;

pub mod app_config;
pub mod routes;
pub mod utils;
