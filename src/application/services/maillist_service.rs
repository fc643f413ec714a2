/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/
use crate::application::interfaces::maillist::MaillistService;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::PddHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Encodes a yes/no flag the way the API expects it
fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

/// Implementation of the mailing-list service
pub struct MaillistServiceImpl<T: PddHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: PddHttpClient> MaillistServiceImpl<T> {
    /// Creates a new instance of the mailing-list service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: PddHttpClient + 'static> MaillistService for MaillistServiceImpl<T> {
    async fn list(&self, domain: &str) -> Result<Value, AppError> {
        self.client
            .get_data(
                "/api2/admin/email/ml/list",
                &[("domain", domain.to_string())],
                &[],
            )
            .await
    }

    async fn create(&self, domain: &str, maillist: &str) -> Result<Value, AppError> {
        debug!("Creating mailing list {}@{}", maillist, domain);
        self.client
            .get_data(
                "/api2/admin/email/ml/add",
                &[],
                &[
                    ("domain", domain.to_string()),
                    ("maillist", maillist.to_string()),
                ],
            )
            .await
    }

    async fn delete(&self, domain: &str, maillist: &str) -> Result<Value, AppError> {
        debug!("Removing mailing list {}@{}", maillist, domain);
        self.client
            .get_data(
                "/api2/admin/email/ml/del",
                &[],
                &[
                    ("domain", domain.to_string()),
                    ("maillist", maillist.to_string()),
                ],
            )
            .await
    }

    async fn subscribers(&self, domain: &str, maillist: &str) -> Result<Value, AppError> {
        self.client
            .get_data(
                "/api2/admin/email/ml/subscribers",
                &[
                    ("domain", domain.to_string()),
                    ("maillist", maillist.to_string()),
                ],
                &[],
            )
            .await
    }

    async fn subscribe(
        &self,
        domain: &str,
        maillist: &str,
        subscriber: &str,
        can_send_on_behalf: bool,
    ) -> Result<Value, AppError> {
        debug!("Subscribing {} to {}@{}", subscriber, maillist, domain);
        self.client
            .get_data(
                "/api2/admin/email/ml/subscribe",
                &[],
                &[
                    ("domain", domain.to_string()),
                    ("maillist", maillist.to_string()),
                    ("subscriber", subscriber.to_string()),
                    ("can_send_on_behalf", yes_no(can_send_on_behalf)),
                ],
            )
            .await
    }

    async fn unsubscribe(
        &self,
        domain: &str,
        maillist: &str,
        subscriber: &str,
    ) -> Result<Value, AppError> {
        debug!("Unsubscribing {} from {}@{}", subscriber, maillist, domain);
        self.client
            .get_data(
                "/api2/admin/email/ml/unsubscribe",
                &[],
                &[
                    ("domain", domain.to_string()),
                    ("maillist", maillist.to_string()),
                    ("subscriber", subscriber.to_string()),
                ],
            )
            .await
    }
}
