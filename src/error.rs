use std::path::PathBuf;

/// Errors surfaced to the host. The simulation itself never fails; these only
/// come from loading settings and talking to the terminal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
