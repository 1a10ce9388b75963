//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

use aquawash_auth::Credentials;
use aquawash_invoicing::{ShareSettings, is_valid_share_number};

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: invalid socket address '{value}'")]
    InvalidAddr { key: &'static str, value: String },

    #[error("{key}: expected a positive whole number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("SHARE_NUMBER: expected digits only, got '{value}'")]
    InvalidShareNumber { value: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub admin: Credentials,
    pub token_ttl: chrono::Duration,
    pub share: ShareSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup("AQUAWASH_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidAddr {
            key: "AQUAWASH_BIND",
            value: bind_raw.clone(),
        })?;

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let username = lookup("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string());
        let password = lookup("ADMIN_PASSWORD").unwrap_or_else(|| {
            tracing::warn!("ADMIN_PASSWORD not set; using built-in default");
            "admin123".to_string()
        });

        let token_ttl = match lookup("TOKEN_TTL_MINUTES") {
            None => chrono::Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(minutes) if minutes > 0 => chrono::Duration::minutes(minutes),
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: "TOKEN_TTL_MINUTES",
                        value: raw,
                    });
                }
            },
        };

        let defaults = ShareSettings::default();
        let share_number = match lookup("SHARE_NUMBER") {
            None => defaults.share_number,
            Some(raw) if is_valid_share_number(raw.trim()) => raw.trim().to_string(),
            Some(raw) => return Err(ConfigError::InvalidShareNumber { value: raw }),
        };
        let share = ShareSettings {
            business_name: lookup("BUSINESS_NAME").unwrap_or(defaults.business_name),
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            share_number,
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            admin: Credentials::new(username, password),
            token_ttl,
            share,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.admin, Credentials::new("admin", "admin123"));
        assert_eq!(config.token_ttl, chrono::Duration::minutes(60));
        assert_eq!(config.share, ShareSettings::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("AQUAWASH_BIND", "127.0.0.1:9000"),
            ("JWT_SECRET", "s3cret"),
            ("ADMIN_USERNAME", "owner"),
            ("ADMIN_PASSWORD", "hunter2"),
            ("TOKEN_TTL_MINUTES", "15"),
            ("BUSINESS_NAME", "Spotless"),
            ("SHARE_NUMBER", "923001234567"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.admin, Credentials::new("owner", "hunter2"));
        assert_eq!(config.token_ttl, chrono::Duration::minutes(15));
        assert_eq!(config.share.business_name, "Spotless");
        assert_eq!(config.share.currency_symbol, "₹");
        assert_eq!(config.share.share_number, "923001234567");
    }

    #[test]
    fn bad_values_are_reported_by_key() {
        let err = AppConfig::from_lookup(lookup(&[("AQUAWASH_BIND", "nowhere")]))
            .err()
            .unwrap();
        assert_eq!(
            err,
            ConfigError::InvalidAddr {
                key: "AQUAWASH_BIND",
                value: "nowhere".to_string()
            }
        );

        let err = AppConfig::from_lookup(lookup(&[("TOKEN_TTL_MINUTES", "0")]))
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::InvalidNumber { key: "TOKEN_TTL_MINUTES", .. }));
    }

    #[test]
    fn share_number_must_be_digits() {
        for value in ["evil.example/chat", "123?text=x", "https://evil.example", ""] {
            let err = AppConfig::from_lookup(lookup(&[("SHARE_NUMBER", value)]))
                .err()
                .unwrap();
            assert_eq!(
                err,
                ConfigError::InvalidShareNumber {
                    value: value.to_string()
                }
            );
        }

        let config = AppConfig::from_lookup(lookup(&[("SHARE_NUMBER", " 923001234567 ")])).unwrap();
        assert_eq!(config.share.share_number, "923001234567");
    }
}
