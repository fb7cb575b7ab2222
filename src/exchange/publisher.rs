use std::fs;

use crate::error::{BobMcpError, Result};
use crate::exchange::{ExchangePaths, ExchangeRequest};

/// Publish a request into the exchange directory: write the request
/// artifact, then the lock marker. The lock's presence tells the
/// responder (and the waiter) that an exchange is outstanding.
///
/// A lock left behind by a previous exchange means the channel is still
/// occupied; publishing over it would silently clobber the stale
/// request, so it is rejected instead.
pub fn publish(paths: &ExchangePaths, request: &ExchangeRequest) -> Result<()> {
    let lock_path = paths.lock();
    if lock_path.exists() {
        return Err(BobMcpError::ExchangeBusy { path: lock_path });
    }

    paths.ensure();

    let request_path = paths.request();
    let json = serde_json::to_string_pretty(request)?;
    fs::write(&request_path, json)?;
    fs::write(&lock_path, "processing")?;

    tracing::info!(path = %request_path.display(), "request written for Bob");
    tracing::info!("waiting for Bob's response...");
    tracing::info!(
        "INSTRUCTIONS: open {}, process the request with Bob, save the answer \
         to {}, then remove {}",
        request_path.display(),
        paths.response().display(),
        lock_path.display()
    );

    Ok(())
}
