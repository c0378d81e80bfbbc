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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 目标测试环境
///
/// 由 `API_ENV` 环境变量选择，每个环境对应一组固定的配置档案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnv {
    /// 本地环境
    Local,
    /// 开发环境
    Dev,
    /// 预发布环境
    Staging,
    /// 生产环境
    Production,
}

impl ApiEnv {
    /// 获取环境名称
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiEnv::Local => "local",
            ApiEnv::Dev => "dev",
            ApiEnv::Staging => "staging",
            ApiEnv::Production => "production",
        }
    }
}

/// API测试配置
///
/// 在进程启动时解析一次，之后通过构造函数显式传递，
/// 避免在运行期间隐式读取全局环境变量
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// 当前环境
    pub environment: ApiEnv,
    /// API基础URL
    pub base_url: String,
    /// 站点UI基础URL
    pub web_url: String,
    /// 单个请求超时时间（毫秒）
    pub timeout_ms: u64,
    /// 响应时间预算（毫秒）
    pub max_response_time_ms: u64,
    /// 可重试操作的重试次数
    pub retry_attempts: u32,
}

/// 每个环境的固定配置档案 (base_url, web_url, timeout_ms, max_response_time_ms, retry_attempts)
fn profile(env: &str) -> Result<(&'static str, &'static str, u64, u64, u32), ConfigError> {
    match env {
        "local" => Ok((
            "http://localhost:8091",
            "http://localhost:4200",
            5_000,
            1_000,
            0,
        )),
        "dev" => Ok((
            "https://api-dev.practicesoftwaretesting.com",
            "https://dev.practicesoftwaretesting.com",
            10_000,
            2_000,
            1,
        )),
        "staging" => Ok((
            "https://api-staging.practicesoftwaretesting.com",
            "https://staging.practicesoftwaretesting.com",
            15_000,
            3_000,
            2,
        )),
        "production" => Ok((
            "https://api.practicesoftwaretesting.com",
            "https://practicesoftwaretesting.com",
            20_000,
            5_000,
            3,
        )),
        other => Err(ConfigError::Message(format!(
            "unknown API_ENV `{}` (expected local|dev|staging|production)",
            other
        ))),
    }
}

impl ApiConfig {
    /// 解析当前配置
    ///
    /// 从 `API_ENV` 选择配置档案，支持 `config/{env}.toml` 文件
    /// 和 `SHOPCHECK__` 前缀环境变量覆盖
    ///
    /// # Returns
    ///
    /// * `Ok(ApiConfig)` - 成功解析的配置
    /// * `Err(ConfigError)` - 未知环境或配置解析失败
    pub fn resolve() -> Result<Self, ConfigError> {
        let env = std::env::var("API_ENV").unwrap_or_else(|_| "local".to_string());
        let (base_url, web_url, timeout_ms, max_response_time_ms, retry_attempts) =
            profile(&env)?;

        let builder = Config::builder()
            .set_default("environment", env.clone())?
            .set_default("base_url", base_url)?
            .set_default("web_url", web_url)?
            .set_default("timeout_ms", timeout_ms)?
            .set_default("max_response_time_ms", max_response_time_ms)?
            .set_default("retry_attempts", retry_attempts)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("SHOPCHECK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
