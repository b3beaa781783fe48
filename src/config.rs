use crate::error::{BrowserError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 環境変数でAPIのベースURLを上書き
pub const API_URL_ENV: &str = "ARTWORK_API_URL";

pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";
pub const DEFAULT_PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub page_size: u32,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_seconds: 30,
            user_agent: concat!("artwork-browser/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 設定ファイルを読み込み（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BrowserError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("artwork-browser").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(BrowserError::Config("page_size は1以上を指定してください".into()));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(BrowserError::Config("api_base_url が空です".into()));
        }
        Ok(())
    }

    /// APIのベースURL（環境変数を優先）
    pub fn api_base_url(&self) -> String {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.api_base_url.clone(),
        }
    }

    pub fn set_api_base_url(&mut self, url: String) -> Result<()> {
        let updated = Self { api_base_url: url, ..self.clone() };
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    pub fn set_page_size(&mut self, page_size: u32) -> Result<()> {
        let updated = Self { page_size, ..self.clone() };
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}
