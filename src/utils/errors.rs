// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 测试套件错误类型
///
/// 重试资格是结构化属性而不是消息子串匹配，
/// 调用方通过 `is_retryable` 判断是否可重试
#[derive(Error, Debug)]
pub enum ApiError {
    /// 状态码超出 [200, 300) 范围
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// 模式校验失败，枚举全部违规项
    #[error("Schema validation failed ({} violation(s)): {}; offending payload: {payload}", violations.len(), violations.join("; "))]
    SchemaValidation {
        violations: Vec<String>,
        payload: serde_json::Value,
    },

    /// 响应时间超出预算
    #[error("Response took {elapsed_ms}ms, exceeding the {limit_ms}ms limit")]
    ResponseTime { elapsed_ms: u64, limit_ms: u64 },

    /// UI元素的所有候选定位器均未命中
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// 浏览器操作失败
    #[error("Browser error: {0}")]
    Browser(String),

    /// 显式标记的瞬态错误
    #[error("Transient error: {0}")]
    Transient(String),

    /// 请求失败
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON解析失败
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL解析失败
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ApiError {
    /// 判断错误是否可重试
    ///
    /// # 返回值
    ///
    /// 瞬态错误、连接/超时类请求失败、429以及5xx状态返回true，其余返回false
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transient(_) => true,
            ApiError::Http(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            ApiError::UnexpectedStatus { status, .. } => {
                *status == 429 || (500..=599).contains(status)
            }
            _ => false,
        }
    }
}

/// 测试套件结果类型
pub type ApiResult<T> = Result<T, ApiError>;
