// config
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use tracing::info;

pub static CONFIG_MANAGER: Lazy<ConfigManager> = Lazy::new(|| ConfigManager::from_env());

/// Provider base used when `LRCLIB_URL` is not set.
pub const DEFAULT_LRCLIB_URL: &str = "https://lrclib.net";
const DEFAULT_PORT: &str = "8000";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

#[derive(Debug, PartialEq)]
enum Mode {
    Dev,
    Prod,
}

impl Mode {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(mode) if mode.to_lowercase() == "prod" => Mode::Prod,
            _ => Mode::Dev,
        }
    }
}

pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    fn from_env() -> Self {
        let vars: HashMap<String, String> = env::vars().collect();
        let manager = Self::from_vars(&vars);

        // Log which keys are configured, values stay out of the logs
        let mut configured: Vec<&str> = manager
            .values
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.as_str())
            .collect();
        configured.sort_unstable();
        info!("Config keys set: {:?}", configured);

        manager
    }

    fn from_vars(vars: &HashMap<String, String>) -> Self {
        let mut values: HashMap<String, String> = HashMap::new();
        let lookup = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();

        let mode = Mode::parse(vars.get("MODE").map(String::as_str));
        match mode {
            Mode::Dev => {
                values.insert("PORT".to_string(), DEFAULT_PORT.to_string());
                values.insert(
                    "BIND_ADDRESS".to_string(),
                    DEFAULT_BIND_ADDRESS.to_string(),
                );
            }
            Mode::Prod => {
                values.insert(
                    "PORT".to_string(),
                    lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string()),
                );
                values.insert(
                    "BIND_ADDRESS".to_string(),
                    lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
                );
            }
        }

        let lrclib_url = lookup("LRCLIB_URL").unwrap_or_else(|| DEFAULT_LRCLIB_URL.to_string());
        values.insert(
            "LRCLIB_URL".to_string(),
            lrclib_url.trim_end_matches('/').to_string(),
        );

        ConfigManager { values }
    }

    pub fn get(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }
}
