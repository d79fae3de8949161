use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TokenStoreKind {
    #[default]
    Keyring,
    File,
    Memory,
}

impl TokenStoreKind {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "keyring" => Some(TokenStoreKind::Keyring),
            "file" => Some(TokenStoreKind::File),
            "memory" => Some(TokenStoreKind::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub editor: EditorConfig,
    pub cache: CacheConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub public_timeout_secs: u64,
    pub admin_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    pub mutation_timeout_secs: u64,
    pub experience_page_limit: u32,
    pub project_page_limit: u32,
    pub tag_page_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub token_store: TokenStoreKind,
    pub access_token_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080/api/v1".to_string(),
                public_timeout_secs: 20,
                admin_timeout_secs: 30,
            },
            editor: EditorConfig::default(),
            cache: CacheConfig { ttl_secs: 60 },
            auth: AuthConfig {
                token_store: TokenStoreKind::Keyring,
                access_token_name: "portfolio_admin_at".to_string(),
            },
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            mutation_timeout_secs: 30,
            experience_page_limit: 50,
            project_page_limit: 12,
            tag_page_limit: 100,
        }
    }
}

impl ApiConfig {
    pub fn public_timeout(&self) -> Duration {
        Duration::from_secs(self.public_timeout_secs)
    }

    pub fn admin_timeout(&self) -> Duration {
        Duration::from_secs(self.admin_timeout_secs)
    }
}

impl EditorConfig {
    pub fn mutation_timeout(&self) -> Duration {
        Duration::from_secs(self.mutation_timeout_secs)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("PORTFOLIO_API_URL") {
            let trimmed = v.trim().trim_end_matches('/');
            if !trimmed.is_empty() {
                cfg.api.base_url = trimmed.to_string();
            }
        }
        if let Some(value) = env_u64("PORTFOLIO_PUBLIC_TIMEOUT_SECS") {
            cfg.api.public_timeout_secs = value.max(1);
        }
        if let Some(value) = env_u64("PORTFOLIO_ADMIN_TIMEOUT_SECS") {
            cfg.api.admin_timeout_secs = value.max(1);
        }
        if let Some(value) = env_u64("PORTFOLIO_MUTATION_TIMEOUT_SECS") {
            cfg.editor.mutation_timeout_secs = value.max(1);
        }
        if let Some(value) = env_u64("PORTFOLIO_CACHE_TTL_SECS") {
            cfg.cache.ttl_secs = value;
        }
        if let Some(value) = env_u32("PORTFOLIO_EXPERIENCE_PAGE_LIMIT") {
            cfg.editor.experience_page_limit = value.max(1);
        }
        if let Some(value) = env_u32("PORTFOLIO_PROJECT_PAGE_LIMIT") {
            cfg.editor.project_page_limit = value.max(1);
        }
        if let Some(value) = env_u32("PORTFOLIO_TAG_PAGE_LIMIT") {
            cfg.editor.tag_page_limit = value.max(1);
        }
        if let Ok(v) = std::env::var("PORTFOLIO_TOKEN_STORE") {
            if let Some(kind) = TokenStoreKind::parse(&v) {
                cfg.auth.token_store = kind;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        let base = self.api.base_url.trim();
        if base.is_empty() {
            return Err("API base_url must not be empty".to_string());
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(format!("API base_url must be an http(s) URL: {base}"));
        }
        if self.api.public_timeout_secs == 0 || self.api.admin_timeout_secs == 0 {
            return Err("API timeouts must be greater than 0".to_string());
        }
        if self.editor.mutation_timeout_secs == 0 {
            return Err("Editor mutation_timeout_secs must be greater than 0".to_string());
        }
        if self.auth.access_token_name.trim().is_empty() {
            return Err("Auth access_token_name must not be empty".to_string());
        }
        Ok(())
    }
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| parse_u64(&v))
}

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|v| parse_u32(&v))
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvGuard {
        key: &'static str,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            env::remove_var(self.key);
        }
    }

    fn set_env(key: &'static str, value: &str) -> EnvGuard {
        env::set_var(key, value);
        EnvGuard { key }
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.editor.experience_page_limit, 50);
        assert_eq!(cfg.auth.access_token_name, "portfolio_admin_at");
    }

    #[test]
    fn from_env_applies_overrides() {
        let _lock = env_lock();
        let _url = set_env("PORTFOLIO_API_URL", "https://api.example.com/api/v1/");
        let _timeout = set_env("PORTFOLIO_MUTATION_TIMEOUT_SECS", "0");
        let _store = set_env("PORTFOLIO_TOKEN_STORE", "File");

        let cfg = AppConfig::from_env();
        assert_eq!(cfg.api.base_url, "https://api.example.com/api/v1");
        assert_eq!(cfg.editor.mutation_timeout_secs, 1);
        assert_eq!(cfg.auth.token_store, TokenStoreKind::File);
    }

    #[test]
    fn from_env_ignores_garbage() {
        let _lock = env_lock();
        let _limit = set_env("PORTFOLIO_TAG_PAGE_LIMIT", "lots");
        let _store = set_env("PORTFOLIO_TOKEN_STORE", "cookie");

        let cfg = AppConfig::from_env();
        assert_eq!(cfg.editor.tag_page_limit, 100);
        assert_eq!(cfg.auth.token_store, TokenStoreKind::Keyring);
    }

    #[test]
    fn validate_rejects_non_http_base_url() {
        let mut cfg = AppConfig::default();
        cfg.api.base_url = "ftp://example.com".to_string();
        assert!(cfg.validate().is_err());
    }
}
