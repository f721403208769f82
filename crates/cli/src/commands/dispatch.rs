use crate::di::UseCases;
use nextdns_allow_domain::{DispatchRequest, DispatchResponse};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Serves the dispatcher contract over stdin/stdout, one JSON object per line.
///
/// Messages are answered in arrival order. The rate limiter persists across messages,
/// so two requests inside the minimum interval get a throttling answer.
pub async fn run(use_cases: &UseCases) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut handled = 0u64;

    info!("Dispatcher listening on stdin");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(use_cases, line).await;
        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        stdout.write_all(&encoded).await?;
        stdout.flush().await?;
        handled += 1;
    }

    info!(messages = handled, "Dispatcher input closed");
    Ok(())
}

async fn handle_line(use_cases: &UseCases, line: &str) -> DispatchResponse {
    match serde_json::from_str::<DispatchRequest>(line) {
        Ok(request) => {
            debug!(action = %request.action, "Dispatching message");
            use_cases.add_to_allowlist.dispatch(request).await
        }
        Err(e) => {
            warn!(error = %e, "Malformed dispatcher message");
            DispatchResponse::failure(format!("Malformed request: {}", e))
        }
    }
}
