use crate::exchange::ExchangePaths;

/// Delete the request and response artifacts. Best effort: the exchange
/// is logically complete regardless of whether cleanup succeeds, so
/// every failure is ignored. Reaping already-absent artifacts is a
/// no-op.
pub fn reap(paths: &ExchangePaths) {
    if let Err(e) = std::fs::remove_file(paths.request()) {
        tracing::debug!(error = %e, "request artifact not removed");
    }
    if let Err(e) = std::fs::remove_file(paths.response()) {
        tracing::debug!(error = %e, "response artifact not removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn reap_on_empty_directory_is_silent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let paths = ExchangePaths::new(tmp.path().to_path_buf());
        reap(&paths);
        reap(&paths);
    }

    #[test]
    fn reap_on_missing_directory_is_silent() {
        let paths = ExchangePaths::new(PathBuf::from("/nonexistent/bob-exchange"));
        reap(&paths);
    }
}
