//! Oficina API Library
//!
//! Client registry and product catalog for the shop backend, behind a
//! validated CRUD HTTP surface.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;

use services::clients::ClientService;
use services::products::ProductService;

/// Shared application state handed to every handler.
///
/// Services are constructed once at startup and injected here; nothing in
/// the crate reaches for a process-global connection handle.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub clients: ClientService,
    pub products: ProductService,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let clients = ClientService::new(db.clone());
        let products = ProductService::new(db.clone());
        Self {
            db,
            config,
            clients,
            products,
        }
    }
}

/// Versioned API surface: clients and products CRUD.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", handlers::clients::clients_routes())
        .nest("/products", handlers::products::products_routes())
}
