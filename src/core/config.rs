use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use crate::core::error::{Error, Result};

pub const ENV_STOP_WORDS: &str = "UZTEXT_STOP_WORDS";
pub const ENV_OUTPUT_DIR: &str = "UZTEXT_OUTPUT_DIR";
pub const ENV_BIND: &str = "UZTEXT_BIND";
pub const ENV_FREQUENCY_LIMIT: &str = "UZTEXT_FREQUENCY_LIMIT";
pub const ENV_MAX_UPLOAD_BYTES: &str = "UZTEXT_MAX_UPLOAD_BYTES";
pub const ENV_UPLOAD_DIR: &str = "UZTEXT_UPLOAD_DIR";

#[derive(Debug, Clone)]
pub struct Config {
    pub stop_words_path: PathBuf,
    pub output_dir: PathBuf,           // output.json / output.txt land here
    pub bind_addr: SocketAddr,
    pub frequency_limit: usize,        // length of most/least frequent lists
    pub max_upload_bytes: usize,
    pub upload_dir: Option<PathBuf>,   // spooled uploads; system temp dir if unset
    pub extra_modifiers: Vec<char>,    // word-internal chars on top of ‘ and '
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stop_words_path: PathBuf::from("uz.txt"),
            output_dir: PathBuf::from("."),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            frequency_limit: 5,
            max_upload_bytes: 20 * 1024 * 1024,   // 20MB
            upload_dir: None,
            extra_modifiers: Vec::new(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `UZTEXT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Config::from_vars(std::env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Config::default();

        for (key, value) in vars {
            let value = value.as_ref();
            match key.as_ref() {
                ENV_STOP_WORDS => config.stop_words_path = PathBuf::from(value),
                ENV_OUTPUT_DIR => config.output_dir = PathBuf::from(value),
                ENV_BIND => config.bind_addr = parse_var(ENV_BIND, value)?,
                ENV_FREQUENCY_LIMIT => config.frequency_limit = parse_var(ENV_FREQUENCY_LIMIT, value)?,
                ENV_MAX_UPLOAD_BYTES => config.max_upload_bytes = parse_var(ENV_MAX_UPLOAD_BYTES, value)?,
                ENV_UPLOAD_DIR => config.upload_dir = Some(PathBuf::from(value)),
                _ => {}
            }
        }

        Ok(config)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| {
        Error::invalid_argument(format!("{}={:?}: {}", name, value, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.stop_words_path, PathBuf::from("uz.txt"));
        assert_eq!(config.frequency_limit, 5);
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(config.upload_dir.is_none());
    }

    #[test]
    fn test_vars_override_defaults() {
        let config = Config::from_vars(vec![
            (ENV_STOP_WORDS, "/etc/uztext/stop.txt"),
            (ENV_BIND, "0.0.0.0:9000"),
            (ENV_FREQUENCY_LIMIT, "10"),
            (ENV_UPLOAD_DIR, "/var/tmp/uztext"),
            ("UNRELATED", "ignored"),
        ])
        .unwrap();

        assert_eq!(config.stop_words_path, PathBuf::from("/etc/uztext/stop.txt"));
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.frequency_limit, 10);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.upload_dir, Some(PathBuf::from("/var/tmp/uztext")));
    }

    #[test]
    fn test_unparsable_var_is_rejected() {
        let err = Config::from_vars(vec![(ENV_FREQUENCY_LIMIT, "five")]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
        assert!(err.context.contains(ENV_FREQUENCY_LIMIT));
    }
}
