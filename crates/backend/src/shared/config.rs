use contracts::shared::menu::BundleSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub business: BusinessConfig,
    pub bundle: BundleConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory with pizzas.csv, accompaniments.csv, clients.csv and orders.jsonl
    pub data_dir: String,
}

/// Шапка чека
#[derive(Debug, Deserialize, Clone)]
pub struct BusinessConfig {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Ширина строки чека в символах
    #[serde(default = "default_receipt_width")]
    pub receipt_width: usize,
}

/// What a promotion bundle adds to the order
#[derive(Debug, Deserialize, Clone)]
pub struct BundleConfig {
    pub accompaniment: String,
    pub accompaniment_price: f64,
    pub drink: String,
    pub drink_price: f64,
}

impl BundleConfig {
    pub fn to_settings(&self) -> BundleSettings {
        BundleSettings {
            accompaniment: self.accompaniment.clone(),
            accompaniment_price: self.accompaniment_price,
            drink: self.drink.clone(),
            drink_price: self.drink_price,
        }
    }
}

fn default_receipt_width() -> usize {
    42
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[storage]
data_dir = "data"

[business]
name = "Pizzería"
receipt_width = 42

[bundle]
accompaniment = "Palitos de ajo"
accompaniment_price = 2500
drink = "Bebida 1.5L"
drink_price = 2000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for development)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }
    candidates.push(PathBuf::from("config.toml"));

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the data directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_data_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.storage.data_dir);

    // If absolute path, use as is
    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    // If relative path, resolve it relative to the executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(&config.storage.data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.data_dir, "data");
        assert_eq!(config.business.receipt_width, 42);
        assert_eq!(config.bundle.to_settings(), BundleSettings::default());
    }

    #[test]
    fn test_absolute_data_dir_is_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let absolute = std::env::temp_dir().join("pizzeria-data");
        config.storage.data_dir = absolute.to_string_lossy().into_owned();
        assert_eq!(get_data_dir(&config), absolute);
    }

    #[test]
    fn test_receipt_width_defaults_when_missing() {
        let config = parse_config(
            r#"
[server]
port = 8080
[storage]
data_dir = "/tmp/x"
[business]
name = "La Nonna"
[bundle]
accompaniment = "Palitos de ajo"
accompaniment_price = 2000
drink = "Bebida"
drink_price = 1500
"#,
        )
        .unwrap();
        assert_eq!(config.business.receipt_width, 42);
        assert_eq!(config.business.address, None);
        assert_eq!(config.bundle.drink_price, 1500.0);
    }
}
