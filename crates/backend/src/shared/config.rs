use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory with the built frontend, served for every non-API path
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// CSV with columns date,region,revenue,customers,churned
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    /// Empty list means any origin is allowed
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[data]
path = "data/sales.csv"

[cors]
allowed_origins = ["http://localhost:8080", "http://127.0.0.1:8080"]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the dataset path from configuration
///
/// Relative paths are looked up next to the executable first, then in the
/// current directory.
pub fn get_data_path(config: &Config) -> PathBuf {
    let data_path = Path::new(&config.data.path);

    if data_path.is_absolute() {
        return data_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(data_path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    PathBuf::from(&config.data.path)
}

/// Allowed CORS origins: configured list plus `FRONTEND_ORIGIN` when set
pub fn allowed_origins(config: &Config) -> Vec<String> {
    let mut origins = config.cors.allowed_origins.clone();
    if let Ok(origin) = std::env::var("FRONTEND_ORIGIN") {
        if !origin.is_empty() && !origins.contains(&origin) {
            origins.push(origin);
        }
    }
    origins
}
