//! 配置服务

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use folio_core::types::CommentQuery;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 站点地址，fragment 用作启动深链接（如 `#Comments`）
    pub site_url: String,
    /// 评论列表查询参数
    pub comments: CommentQuery,
    /// 主题索引：0 = Dark, 1 = Light
    pub theme_index: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_url: "https://folio.esaps.net/".to_string(),
            comments: CommentQuery::default(),
            theme_index: 0,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务，读写 `{config_dir}/folio/config.json`
pub struct LocalConfigService;

impl LocalConfigService {
    fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("无法定位系统配置目录")?;
        Ok(dir.join("folio").join("config.json"))
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;

        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(e) => {
                // 配置损坏时回退默认值，不拦着应用启动
                log::warn!("配置文件解析失败，使用默认配置: {e}");
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("创建配置目录失败: {}", parent.display()))?;
        }

        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&path, raw).with_context(|| format!("写入配置文件失败: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::types::SortOrder;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.site_url, AppConfig::default().site_url);
        assert_eq!(config.comments.count, CommentQuery::default().count);
    }

    #[test]
    fn round_trips_through_json() {
        let mut config = AppConfig::default();
        config.site_url = "https://example.com/#Comments".to_string();
        config.comments.sort = SortOrder::Oldest;

        let raw = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.site_url, config.site_url);
        assert_eq!(back.comments.sort, SortOrder::Oldest);
    }
}
