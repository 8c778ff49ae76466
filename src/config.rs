//! Runtime settings, read from the environment (and `.env` when present).

use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDRESS_VAR: &str = "RELAY_BIND_ADDRESS";
pub const POSITIONS_DIR_VAR: &str = "POSITIONS_DIR";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_POSITIONS_DIR: &str = "positions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address the HTTP server listens on.
    pub bind_address: SocketAddr,
    /// Directory the position images are served from.
    pub positions_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Settings> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source, falling back to defaults for anything
    /// unset or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Settings> {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_address = value(BIND_ADDRESS_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned())
            .trim()
            .parse()
            .with_context(|| format!("{BIND_ADDRESS_VAR} must be a socket address"))?;

        let positions_dir = match value(POSITIONS_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir()
                .context("cannot determine the working directory")?
                .join(DEFAULT_POSITIONS_DIR),
        };

        Ok(Settings {
            bind_address,
            positions_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings.bind_address, "0.0.0.0:5000".parse().unwrap());
        assert!(settings.positions_dir.ends_with("positions"));
        assert!(settings.positions_dir.is_absolute());
    }

    #[test]
    fn overrides_are_used() {
        let settings = settings_from(&[
            (BIND_ADDRESS_VAR, "127.0.0.1:8080"),
            (POSITIONS_DIR_VAR, "/srv/images"),
        ])
        .unwrap();

        assert_eq!(settings.bind_address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(settings.positions_dir, PathBuf::from("/srv/images"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings = settings_from(&[(BIND_ADDRESS_VAR, "  "), (POSITIONS_DIR_VAR, "")]).unwrap();

        assert_eq!(settings.bind_address, "0.0.0.0:5000".parse().unwrap());
        assert!(settings.positions_dir.ends_with("positions"));
    }

    #[test]
    fn bad_bind_address_is_reported() {
        let err = settings_from(&[(BIND_ADDRESS_VAR, "localhost")]).unwrap_err();

        assert!(err.to_string().contains(BIND_ADDRESS_VAR));
    }
}
