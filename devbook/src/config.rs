use clap::Parser;
use std::{io, path::PathBuf};

/// A terminal client for registering with and logging into devbook
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Where the devbook web application lives
    #[clap(long, env = "DEVBOOK_SERVER", default_value = "http://localhost:3000")]
    pub server: String,

    /// Where should we write logs?
    #[clap(long)]
    data_dir: Option<PathBuf>,
}

impl Config {
    /// Get either the configured or a default data directory. If no data
    /// directory can be found (e.g. because `$HOME` is unset) we will use the
    /// current directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("com", "devbook", "devbook")
                    .map(|dirs| dirs.data_local_dir().to_owned())
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Make sure the data directory exists, returning it.
    ///
    /// ## Errors
    ///
    /// Fails if the directory can't be created.
    pub async fn ensure_data_dir(&self) -> io::Result<PathBuf> {
        let dir = self.data_dir();
        tokio::fs::create_dir_all(&dir).await?;

        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_defaults_to_localhost() {
        let config = Config::parse_from(["devbook"]);

        assert_eq!(config.server, "http://localhost:3000");
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = Config::parse_from(["devbook", "--data-dir", "/tmp/devbook"]);

        assert_eq!(config.data_dir(), PathBuf::from("/tmp/devbook"));
    }

    #[tokio::test]
    async fn ensure_data_dir_creates_nested_directories() {
        let dir = std::env::temp_dir()
            .join(format!("devbook-config-test-{}", std::process::id()))
            .join("logs");
        let config = Config::parse_from(["devbook", "--data-dir", dir.to_str().unwrap()]);

        assert_eq!(config.ensure_data_dir().await.unwrap(), dir);
        assert!(dir.is_dir());

        std::fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }
}
