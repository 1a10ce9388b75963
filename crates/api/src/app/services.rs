use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use aquawash_auth::{Credentials, Hs256Tokens};
use aquawash_engine::OrderEngine;
use aquawash_invoicing::ShareSettings;

use crate::config::AppConfig;

/// Everything the handlers share: one counter session plus the admin gate.
pub struct AppServices {
    engine: Mutex<OrderEngine>,
    pub admin: Credentials,
    pub tokens: Arc<Hs256Tokens>,
    pub share: ShareSettings,
}

impl AppServices {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            engine: Mutex::new(OrderEngine::default()),
            admin: config.admin.clone(),
            tokens: Arc::new(Hs256Tokens::new(
                config.jwt_secret.as_bytes(),
                config.token_ttl,
            )),
            share: config.share.clone(),
        }
    }

    /// Lock the counter session.
    ///
    /// Engine operations never panic part-way, so a poisoned lock still holds
    /// a consistent session.
    pub fn engine(&self) -> MutexGuard<'_, OrderEngine> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
