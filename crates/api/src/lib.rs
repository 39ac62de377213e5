//! HTTP API: routing, request/response mapping, configuration and bootstrap
//! helpers for the product catalog.

pub mod app;
pub mod config;
pub mod middleware;
pub mod seed;
