/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/
use crate::application::interfaces::domain::DomainService;
use crate::application::services::pagination::fetch_all_pages;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::PddHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the domain service
pub struct DomainServiceImpl<T: PddHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: PddHttpClient> DomainServiceImpl<T> {
    /// Creates a new instance of the domain service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: PddHttpClient + 'static> DomainService for DomainServiceImpl<T> {
    async fn list_domains(&self) -> Result<Vec<Value>, AppError> {
        fetch_all_pages(
            &*self.client,
            "/api2/admin/domain/domains",
            &[],
            "domains",
            self.config.page_size,
        )
        .await
    }

    async fn register(&self, domain: &str) -> Result<Value, AppError> {
        debug!("Registering domain {}", domain);
        self.client
            .get_data(
                "/api2/admin/domain/register",
                &[],
                &[("domain", domain.to_string())],
            )
            .await
    }

    async fn registration_status(&self, domain: &str) -> Result<Value, AppError> {
        self.client
            .get_data(
                "/api2/admin/domain/registration_status",
                &[("domain", domain.to_string())],
                &[],
            )
            .await
    }

    async fn set_country(&self, domain: &str, country: &str) -> Result<Value, AppError> {
        debug!("Setting country of {} to {}", domain, country);
        self.client
            .get_data(
                "/api2/admin/domain/settings/set_country",
                &[],
                &[
                    ("domain", domain.to_string()),
                    ("country", country.to_string()),
                ],
            )
            .await
    }
}
