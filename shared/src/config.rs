use std::path::PathBuf;

use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env_or("DATABASE_HOST", "localhost"),
            port: env_or("DATABASE_PORT", "5432").parse()?,
            username: env_or("DATABASE_USERNAME", "app"),
            password: env_or("DATABASE_PASSWORD", "passwd"),
            database: env_or("DATABASE_NAME", "app"),
        };
        let redis = RedisConfig {
            host: env_or("REDIS_HOST", "localhost"),
            port: env_or("REDIS_PORT", "6379").parse()?,
        };
        let auth = AuthConfig {
            ttl: env_or("AUTH_TOKEN_TTL", "86400").parse()?,
        };
        let storage = StorageConfig {
            image_dir: PathBuf::from(env_or("IMAGE_STORAGE_DIR", "./uploads")),
        };
        let admin = AdminConfig {
            email: env_or("ADMIN_EMAIL", "admin@ezyevents.com"),
            password: env_or("ADMIN_PASSWORD", "admin"),
        };
        Ok(Self {
            database,
            redis,
            auth,
            storage,
            admin,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    /// Access token lifetime in seconds.
    pub ttl: u64,
}

pub struct StorageConfig {
    pub image_dir: PathBuf,
}

/// The admin account is created at startup when missing, so a fresh
/// deployment always has one operator login.
#[derive(Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
}
