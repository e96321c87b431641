//! Vehicle tracker
//!
//! Autoriza el acceso a vehículos conectados vía OAuth, sincroniza sus
//! atributos y odómetro, y guarda los registros de mantenimiento que
//! introduce el usuario, todo servido como páginas HTML.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

pub use routes::create_router;
pub use state::AppState;

/// Abrir el listener HTTP; `server_url` admite nombres de host (`localhost:3000`)
pub async fn bind_listener(server_url: &str) -> std::io::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(server_url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_listener_resolves_hostname() {
        let listener = bind_listener("localhost:0").await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
