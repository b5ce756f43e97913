use super::{catalog_config::CatalogConfig, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            catalog: CatalogConfig::from_env(),
        }
    }
}
