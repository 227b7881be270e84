// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::MethodSet;
use crate::domain::services::ClassifierSettings;
use crate::utils::errors::ConfigurationError;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// 应用程序配置设置
///
/// 包含目标、分类、传输和并发等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 目标配置
    pub target: TargetSettings,
    /// 响应分类配置
    pub triage: TriageSettings,
    /// 传输配置
    pub transport: TransportSettings,
    /// 并发控制配置
    pub concurrency: ConcurrencySettings,
}

/// 目标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSettings {
    /// 基础URL列表
    #[serde(default)]
    pub urls: Vec<String>,
    /// 字典文件路径
    pub wordlist: Option<String>,
    /// 方法描述，例如 `get,post` 或 `all`
    pub methods: String,
}

/// 响应分类配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TriageSettings {
    /// 基线响应长度
    pub baseline_length: u64,
    /// 匹配字符串
    pub match_strings: Option<Vec<String>>,
    /// 详细模式
    pub verbose: bool,
}

/// 传输配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TransportSettings {
    /// 单个请求超时时间（秒）
    pub timeout_secs: f64,
    /// 是否校验TLS证书
    pub verify_tls: bool,
}

/// 并发控制配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ConcurrencySettings {
    /// 并行工作器数量
    pub workers: u64,
}

/// 命令行覆盖项，`None`表示沿用下层配置
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub urls: Option<Vec<String>>,
    pub wordlist: Option<String>,
    pub methods: Option<String>,
    pub baseline_length: Option<u64>,
    pub match_strings: Option<Vec<String>>,
    pub timeout_secs: Option<f64>,
    pub verbose: Option<bool>,
    pub verify_tls: Option<bool>,
    pub workers: Option<u64>,
}

/// 校验后的运行配置
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 基础URL，已去除末尾的`/`
    pub base_urls: Vec<String>,
    pub methods: MethodSet,
    pub classifier: ClassifierSettings,
    pub timeout: Duration,
    pub verify_tls: bool,
    pub workers: usize,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、配置文件和环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(SettingsOverrides::default())
    }

    /// 加载配置并应用命令行覆盖项
    ///
    /// 优先级从低到高：默认值、`config/default`、`config/{FUZZRS_ENVIRONMENT}`、
    /// `FUZZRS__*`环境变量、命令行
    pub fn load(overrides: SettingsOverrides) -> Result<Self, ConfigError> {
        let env = std::env::var("FUZZRS_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("target.urls", Vec::<String>::new())?
            .set_default("target.methods", "get")?
            // Default triage settings
            .set_default("triage.baseline_length", 0)?
            .set_default("triage.verbose", false)?
            // Default transport settings
            .set_default("transport.timeout_secs", 5.0)?
            .set_default("transport.verify_tls", true)?
            // Default concurrency settings
            .set_default("concurrency.workers", 1)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("FUZZRS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("target.urls")
                    .with_list_parse_key("triage.match_strings"),
            )
            .set_override_option("target.urls", overrides.urls)?
            .set_override_option("target.wordlist", overrides.wordlist)?
            .set_override_option("target.methods", overrides.methods)?
            .set_override_option("triage.baseline_length", overrides.baseline_length)?
            .set_override_option("triage.match_strings", overrides.match_strings)?
            .set_override_option("triage.verbose", overrides.verbose)?
            .set_override_option("transport.timeout_secs", overrides.timeout_secs)?
            .set_override_option("transport.verify_tls", overrides.verify_tls)?
            .set_override_option("concurrency.workers", overrides.workers)?;

        builder.build()?.try_deserialize()
    }

    /// 校验配置，生成运行配置
    ///
    /// 方法集合在此处一次性解析，之后不会再按请求校验
    pub fn validate(&self) -> Result<RunConfig, ConfigurationError> {
        let methods = MethodSet::parse(&self.target.methods)?;

        if self.target.urls.is_empty() {
            return Err(ConfigurationError::MissingUrl);
        }
        let base_urls = self
            .target
            .urls
            .iter()
            .map(|raw| validate_base_url(raw))
            .collect::<Result<Vec<_>, _>>()?;

        if self.concurrency.workers == 0 {
            return Err(ConfigurationError::ZeroWorkers);
        }

        let secs = self.transport.timeout_secs;
        if !secs.is_finite() || secs <= 0.0 {
            return Err(ConfigurationError::InvalidTimeout(secs));
        }
        let timeout = Duration::try_from_secs_f64(secs)
            .map_err(|_| ConfigurationError::InvalidTimeout(secs))?;

        Ok(RunConfig {
            base_urls,
            methods,
            classifier: ClassifierSettings {
                baseline_length: self.triage.baseline_length as usize,
                match_strings: self.triage.match_strings.clone(),
                verbose: self.triage.verbose,
            },
            timeout,
            verify_tls: self.transport.verify_tls,
            workers: self.concurrency.workers as usize,
        })
    }
}

fn validate_base_url(raw: &str) -> Result<String, ConfigurationError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|source| ConfigurationError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        scheme => Err(ConfigurationError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
