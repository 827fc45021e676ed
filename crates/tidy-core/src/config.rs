use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TidyConfig {
    pub css: CssConfig,
    pub json: JsonConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CssConfig {
    /// Attempt the safe fix passes when validation fails.
    pub auto_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonConfig {
    pub indent_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for TidyConfig {
    fn default() -> Self {
        Self {
            css: CssConfig { auto_correct: true },
            json: JsonConfig { indent_width: 2 },
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
            },
        }
    }
}
