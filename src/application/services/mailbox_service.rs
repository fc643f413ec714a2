/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/
use crate::application::interfaces::mailbox::MailboxService;
use crate::application::services::pagination::fetch_all_pages;
use crate::config::Config;
use crate::error::AppError;
use crate::model::requests::MailboxEditRequest;
use crate::transport::PddHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the mailbox service
pub struct MailboxServiceImpl<T: PddHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: PddHttpClient> MailboxServiceImpl<T> {
    /// Creates a new instance of the mailbox service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl<T: PddHttpClient + 'static> MailboxService for MailboxServiceImpl<T> {
    async fn list_mailboxes(&self, domain: &str) -> Result<Vec<Value>, AppError> {
        fetch_all_pages(
            &*self.client,
            "/api2/admin/email/list",
            &[("domain", domain.to_string())],
            "accounts",
            self.config.page_size,
        )
        .await
    }

    async fn add(&self, domain: &str, login: &str, password: &str) -> Result<Value, AppError> {
        debug!("Adding mailbox {}@{}", login, domain);
        self.client
            .get_data(
                "/api2/admin/email/add",
                &[],
                &[
                    ("domain", domain.to_string()),
                    ("login", login.to_string()),
                    ("password", password.to_string()),
                ],
            )
            .await
    }

    async fn edit(
        &self,
        domain: &str,
        login: &str,
        request: MailboxEditRequest,
        autofill: bool,
    ) -> Result<Value, AppError> {
        debug!("Editing mailbox {}@{} (autofill: {})", login, domain, autofill);
        let params = request.into_params(domain, login, autofill);
        self.client
            .get_data("/api2/admin/email/edit", &[], &params)
            .await
    }

    async fn delete(&self, domain: &str, login: &str) -> Result<Value, AppError> {
        debug!("Removing mailbox {}@{}", login, domain);
        self.client
            .get_data(
                "/api2/admin/email/del",
                &[],
                &[("domain", domain.to_string()), ("login", login.to_string())],
            )
            .await
    }
}
