use std::{env, str::FromStr, time::Duration};

use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::audio::config::AudioConfig;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_ADMIN_PASSCODE: &str = "EUSTASS6";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    /// Shared secret for the admin gate. Checked on the client only.
    pub admin_passcode: String,
    pub http_timeout: Duration,
    pub audio: AudioConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            admin_passcode: DEFAULT_ADMIN_PASSCODE.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            audio: AudioConfig::default(),
        }
    }
}

impl Config {
    /// Reads overrides from `SONGDECK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup("SONGDECK_API_BASE") {
            config.api_base = base;
        }
        if let Some(passcode) = lookup("SONGDECK_ADMIN_PASSCODE") {
            if passcode.is_empty() {
                return Err(eyre!("SONGDECK_ADMIN_PASSCODE must not be empty"));
            }
            config.admin_passcode = passcode;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "SONGDECK_HTTP_TIMEOUT_SECS")? {
            config.http_timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(volume) = parse_var::<u8, _>(&lookup, "SONGDECK_VOLUME")? {
            config.audio.volume = volume.min(100);
        }
        if let Some(step) = parse_var::<u64, _>(&lookup, "SONGDECK_SEEK_STEP_SECS")? {
            config.audio.seek_step_secs = step;
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .wrap_err_with(|| format!("invalid value for {key}: {raw:?}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.admin_passcode, DEFAULT_ADMIN_PASSCODE);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.audio.volume, 100);
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            ("SONGDECK_API_BASE", "https://music.example.com/api"),
            ("SONGDECK_ADMIN_PASSCODE", "letmein"),
            ("SONGDECK_HTTP_TIMEOUT_SECS", "3"),
            ("SONGDECK_VOLUME", "250"),
            ("SONGDECK_SEEK_STEP_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "https://music.example.com/api");
        assert_eq!(config.admin_passcode, "letmein");
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.audio.volume, 100);
        assert_eq!(config.audio.seek_step_secs, 15);
    }

    #[test]
    fn malformed_numbers_are_errors() {
        assert!(Config::from_lookup(lookup(&[("SONGDECK_HTTP_TIMEOUT_SECS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SONGDECK_ADMIN_PASSCODE", "")])).is_err());
    }
}
