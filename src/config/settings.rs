use std::env;
use std::path::PathBuf;

use crate::utils::LayoutConfig;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub max_tree_size: usize,
    /// JSON seed for new sessions; the built-in sample is used when unset.
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            max_tree_size: 1000,
            seed_file: None,
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| *v > 0.0)
        .unwrap_or(default)
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        let layout_defaults = LayoutConfig::default();

        Ok(Settings {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .map_err(|e| format!("Invalid SERVER_PORT: {}", e))?,
            },
            app: AppConfig {
                max_tree_size: env::var("MAX_TREE_SIZE")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .unwrap_or(1000),
                seed_file: env::var("SEED_FILE").ok().map(PathBuf::from),
            },
            layout: LayoutConfig {
                card_width: env_f64("LAYOUT_CARD_WIDTH", layout_defaults.card_width),
                card_height: env_f64("LAYOUT_CARD_HEIGHT", layout_defaults.card_height),
                column_spacing: env_f64("LAYOUT_COLUMN_SPACING", layout_defaults.column_spacing),
                vertical_spacing: env_f64(
                    "LAYOUT_VERTICAL_SPACING",
                    layout_defaults.vertical_spacing,
                ),
            },
        })
    }
}
