use tracing::warn;

const DEFAULT_MAX_LENGTH: usize = 400;

/// Read-only state shared across workers.
pub struct AppState {
    /// Chunk size applied when a request does not supply one.
    pub default_max_length: usize,
}

impl AppState {
    /// Builds the state from the environment. A missing or malformed
    /// `SPLITTER_DEFAULT_MAX_LENGTH` falls back to the built-in default
    /// instead of failing startup.
    pub fn from_env() -> Self {
        let default_max_length = match std::env::var("SPLITTER_DEFAULT_MAX_LENGTH") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(
                        "Ignoring invalid SPLITTER_DEFAULT_MAX_LENGTH {:?}, using {}",
                        raw, DEFAULT_MAX_LENGTH
                    );
                    DEFAULT_MAX_LENGTH
                }
            },
            Err(_) => DEFAULT_MAX_LENGTH,
        };

        AppState { default_max_length }
    }
}
