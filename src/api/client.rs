// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ApiConfig;
use crate::schema::SchemaDescriptor;
use crate::utils::errors::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;
use url::Url;

/// 单次请求的配置选项
#[derive(Debug, Default, Clone)]
pub struct RequestOptions<'a> {
    /// 是否校验状态码在 [200, 300) 内；`None` 视为开启
    pub validate_status: Option<bool>,
    /// 响应体模式校验
    pub schema: Option<&'a SchemaDescriptor>,
    /// 响应时间预算（毫秒），覆盖整个请求含状态和模式检查
    pub max_response_time_ms: Option<u64>,
    /// 附加请求头，覆盖同名默认头
    pub headers: HashMap<String, String>,
}

impl<'a> RequestOptions<'a> {
    fn validate_status(&self) -> bool {
        self.validate_status.unwrap_or(true)
    }
}

/// API响应
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// 解析后的JSON响应体；空或无法解析的DELETE响应为 `None`
    pub data: Option<Value>,
    /// HTTP状态码
    pub status: u16,
    /// 响应头
    pub headers: HashMap<String, String>,
}

/// API客户端
///
/// 持有共享的reqwest客户端和环境配置档案；
/// 登录后自动为后续请求附加Bearer令牌
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// 创建新的API客户端
    ///
    /// # 参数
    ///
    /// * `config` - 已解析的环境配置档案
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; shopcheck/1.0)")
            .timeout(Duration::from_millis(config.timeout_ms))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(&config.base_url)?,
            token: None,
        })
    }

    /// 解析端点
    ///
    /// 绝对URL原样透传，相对路径拼接到基础URL之后
    fn resolve_endpoint(&self, endpoint: &str) -> ApiResult<Url> {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return Ok(Url::parse(endpoint)?);
        }
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }

    fn build_headers(&self, extra: &HashMap<String, String>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        // 调用方提供的同名头覆盖默认头
        for (k, v) in extra {
            if let (Ok(k), Ok(v)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                headers.insert(k, v);
            }
        }
        headers
    }

    /// 执行一次HTTP请求
    ///
    /// # 参数
    ///
    /// * `method` - HTTP方法
    /// * `endpoint` - 绝对URL或相对路径
    /// * `query` - 查询参数
    /// * `body` - JSON请求体
    /// * `options` - 请求选项
    ///
    /// # 返回值
    ///
    /// * `Ok(ApiResponse)` - 通过全部启用校验的响应
    /// * `Err(ApiError)` - 状态/模式/响应时间校验失败或传输错误
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&Value>,
        options: &RequestOptions<'_>,
    ) -> ApiResult<ApiResponse> {
        let url = self.resolve_endpoint(endpoint)?;
        let started = Instant::now();
        debug!(method = %method, url = %url, "dispatching request");

        let mut builder = self
            .http
            .request(method.clone(), url)
            .headers(self.build_headers(&options.headers));
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        let mut headers = HashMap::new();
        for (k, v) in response.headers() {
            if let Ok(v) = v.to_str() {
                headers.insert(k.as_str().to_string(), v.to_string());
            }
        }

        let text = response.text().await?;
        let parsed: Result<Value, _> = serde_json::from_str(&text);

        if options.validate_status() && !status.is_success() {
            let body = match &parsed {
                Ok(value) => value.to_string(),
                Err(_) => text.clone(),
            };
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let data = match parsed {
            Ok(value) => Some(value),
            // DELETE响应可能没有响应体，解析失败静默容忍
            Err(_) if method == Method::DELETE || text.trim().is_empty() => None,
            Err(e) => return Err(ApiError::Json(e)),
        };

        if let Some(schema) = options.schema {
            let payload = data.clone().unwrap_or(Value::Null);
            schema
                .validate(&payload)
                .map_err(|violations| ApiError::SchemaValidation {
                    violations,
                    payload,
                })?;
        }

        // 预算覆盖整个请求，包含状态和模式检查
        if let Some(limit_ms) = options.max_response_time_ms {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            if elapsed_ms > limit_ms {
                return Err(ApiError::ResponseTime {
                    elapsed_ms,
                    limit_ms,
                });
            }
        }

        Ok(ApiResponse {
            data,
            status: status.as_u16(),
            headers,
        })
    }

    /// GET请求
    pub async fn get(
        &self,
        endpoint: &str,
        options: &RequestOptions<'_>,
    ) -> ApiResult<ApiResponse> {
        self.request(Method::GET, endpoint, None, None, options).await
    }

    /// 带查询参数的GET请求
    pub async fn get_with_query(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        options: &RequestOptions<'_>,
    ) -> ApiResult<ApiResponse> {
        self.request(Method::GET, endpoint, Some(query), None, options)
            .await
    }

    /// POST请求
    pub async fn post(
        &self,
        endpoint: &str,
        body: &Value,
        options: &RequestOptions<'_>,
    ) -> ApiResult<ApiResponse> {
        self.request(Method::POST, endpoint, None, Some(body), options)
            .await
    }

    /// PUT请求
    pub async fn put(
        &self,
        endpoint: &str,
        body: &Value,
        options: &RequestOptions<'_>,
    ) -> ApiResult<ApiResponse> {
        self.request(Method::PUT, endpoint, None, Some(body), options)
            .await
    }

    /// DELETE请求
    pub async fn delete(
        &self,
        endpoint: &str,
        options: &RequestOptions<'_>,
    ) -> ApiResult<ApiResponse> {
        self.request(Method::DELETE, endpoint, None, None, options)
            .await
    }

    /// 登录并保存Bearer令牌供后续请求使用
    pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<()> {
        let response = self
            .post(
                "/users/login",
                &json!({"email": email, "password": password}),
                &RequestOptions::default(),
            )
            .await?;

        let payload = response.data.clone().unwrap_or(Value::Null);
        let token = payload
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::SchemaValidation {
                violations: vec!["missing required field `access_token`".to_string()],
                payload: payload.clone(),
            })?;

        self.token = Some(token.to_string());
        Ok(())
    }

    /// 清除已保存的令牌
    pub fn logout(&mut self) {
        self.token = None;
    }

    /// 是否持有令牌
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
