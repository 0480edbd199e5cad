use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub backend: String,
    pub mongodb: MongoDbSettings,
    pub price_min: Decimal,
    pub price_max: Decimal,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Clone)]
pub struct MongoDbSettings {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl MongoDbSettings {
    pub fn connection_string(&self) -> String {
        match (&self.user, &self.password) {
            (Some(user), Some(password)) => {
                format!("mongodb://{}:{}@{}:{}", user, password, self.host, self.port)
            }
            _ => format!("mongodb://{}:{}", self.host, self.port),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mongodb = MongoDbSettings {
            host: env::var("MONGODB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env::var("MONGODB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(27017),
            user: env::var("MONGODB_USER").ok().filter(|u| !u.is_empty()),
            password: env::var("MONGODB_PASSWORD").ok().filter(|p| !p.is_empty()),
        };

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            backend: env::var("REPOSITORY_BACKEND").unwrap_or_else(|_| "mongodb".to_string()),
            mongodb,
            price_min: env::var("PRICE_MIN")
                .ok()
                .and_then(|v| Decimal::from_str(&v).ok())
                .unwrap_or_else(|| Decimal::from(1)),
            price_max: env::var("PRICE_MAX")
                .ok()
                .and_then(|v| Decimal::from_str(&v).ok())
                .unwrap_or_else(|| Decimal::from(1000)),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
        }
    }
}
