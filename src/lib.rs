pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod helpers;
pub mod models;
pub mod repositories;
pub mod views;
