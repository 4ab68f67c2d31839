//! Crop advisor
//!
//! Collects soil parameters from a form, submits them to a crop
//! recommendation service and renders the recommendation, suggestions or
//! error back onto the page.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod ui;
