use thiserror::Error;

/// Canonical result for sortstream.
pub type Result<T> = std::result::Result<T, Error>;

/// Exhaustion is not an error: streams report it through `None` from `pull`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("handoff consumer disconnected")]
    Disconnected,

    #[error("failed to spawn stage thread '{name}': {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_error_keeps_source() {
        let err = Error::Spawn {
            name: "stage-1".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "no threads"),
        };
        assert_eq!(
            err.to_string(),
            "failed to spawn stage thread 'stage-1': no threads"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
