use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub core: CoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог со сборкой фронтенда (trunk dist)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CoreConfig {
    /// Базовый URL core API, например `http://bunkerweb-api:8888`
    pub api_url: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[core]
api_url = "http://127.0.0.1:8888"
"#;

pub const ENV_CORE_API_URL: &str = "CORE_API_URL";
pub const ENV_SERVER_PORT: &str = "SERVER_PORT";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment variables `CORE_API_URL` and `SERVER_PORT` override the file.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
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

fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_CORE_API_URL).filter(|v| !v.trim().is_empty()) {
        config.core.api_url = url.trim().to_string();
    }
    if let Some(port) = lookup(ENV_SERVER_PORT) {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {ENV_SERVER_PORT} '{port}': {e}"))?;
    }
    Ok(())
}

/// Resolve the static directory.
/// Relative paths are resolved against the executable directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    PathBuf::from(&config.server.static_dir)
}
