use crate::di::UseCases;
use crate::page::extract_hostname;
use anyhow::bail;
use nextdns_allow_domain::{sanitize_domain, DispatchRequest};

pub async fn run(use_cases: &UseCases, target: &str, json: bool) -> anyhow::Result<()> {
    let hostname = extract_hostname(target);
    let Some(domain) = sanitize_domain(&hostname) else {
        bail!("Invalid domain format");
    };

    let response = use_cases
        .add_to_allowlist
        .dispatch(DispatchRequest::add_to_allowlist(domain.as_str()))
        .await;

    if json {
        println!("{}", serde_json::to_string(&response)?);
    }

    if !response.success {
        bail!(response.error.unwrap_or_else(|| "Unknown error".to_string()));
    }

    if !json {
        println!("Added {} to allowlist", domain);
    }
    Ok(())
}
