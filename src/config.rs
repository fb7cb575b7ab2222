use std::path::PathBuf;

/// Environment variable overriding the exchange directory location.
pub const EXCHANGE_DIR_ENV: &str = "BOB_EXCHANGE_DIR";

/// Default exchange directory: `~/.local/share/bob-mcp/exchange`
pub fn default_exchange_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("bob-mcp")
        .join("exchange")
}

/// Resolve the exchange directory: CLI flag, then `BOB_EXCHANGE_DIR`,
/// then the default location.
pub fn resolve_exchange_dir(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = cli_override {
        return dir;
    }
    if let Ok(dir) = std::env::var(EXCHANGE_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    default_exchange_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_override_wins() {
        let dir = resolve_exchange_dir(Some(PathBuf::from("/tmp/override")));
        assert_eq!(dir, PathBuf::from("/tmp/override"));
    }

    #[test]
    fn default_ends_with_exchange() {
        let dir = default_exchange_dir();
        assert!(dir.ends_with("bob-mcp/exchange"));
    }
}
