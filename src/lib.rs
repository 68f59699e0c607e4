//! hanbai-api library
//!
//! Record-management backend for sales operations. Every section follows the
//! same pattern: authenticate through the session guard, load rows, validate
//! input, write rows back.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;

use axum::Router;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<db::DbPool>,
    pub config: config::AppConfig,
    pub services: services::AppServices,
    pub auth: Arc<auth::AuthService>,
}

/// The protected API surface: one router per navigation section, mounted in
/// the shell's order. The session guard is layered over the whole tree by
/// the binary, not repeated per section.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", handlers::auth::session_routes())
        .nest("/dashboard", handlers::dashboard::routes())
        .nest("/customers", handlers::customers::routes())
        .nest("/suppliers", handlers::suppliers::routes())
        .nest("/projects", handlers::projects::routes())
        .nest("/quotes", handlers::quotes::routes())
        .nest("/sales-orders", handlers::sales_orders::routes())
        .nest("/invoices", handlers::invoices::routes())
        .nest("/delivery-notes", handlers::delivery_notes::routes())
        .nest("/delivery-logs", handlers::delivery_logs::routes())
        .nest("/navigation", handlers::navigation::routes())
}
