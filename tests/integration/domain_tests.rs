use crate::common::{create_live_client, has_token};
use pdd_client::prelude::*;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_list_domains_live() {
    assert!(has_token(), "PDD_TOKEN must be set for live tests");
    let client = create_live_client();

    let domains = client
        .domains()
        .list_domains()
        .await
        .expect("Listing should succeed");
    info!("Account has {} domains", domains.len());

    for domain in &domains {
        assert!(domain.get("name").is_some(), "Domain entry without name: {domain}");
    }
}

#[tokio::test]
#[ignore]
async fn test_registration_status_live() {
    assert!(has_token(), "PDD_TOKEN must be set for live tests");
    let client = create_live_client();

    let domains = client
        .domains()
        .list_domains()
        .await
        .expect("Listing should succeed");
    let Some(first) = domains.first().and_then(|d| d["name"].as_str()) else {
        info!("No domains in account, skipping status check");
        return;
    };

    let status = client
        .domains()
        .registration_status(first)
        .await
        .expect("Status should succeed");
    info!("{} registration status: {}", first, status);
}
