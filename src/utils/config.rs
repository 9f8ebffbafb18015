use crate::ergast;

#[derive(Debug, Clone)]
pub struct Config {
    pub ergast_base_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn init() -> Self {
        Config {
            ergast_base_url: std::env::var("ERGAST_BASE_URL")
                .unwrap_or_else(|_| ergast::DEFAULT_BASE_URL.to_string()),
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
        }
    }
}
