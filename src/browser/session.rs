// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::browser::locator::Locator;
use crate::browser::report::{InteractionReport, Outcome};
use crate::utils::errors::{ApiError, ApiResult};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chromiumoxide::cdp::browser_protocol::fetch::{
    ContinueRequestParams, EnableParams, EventRequestPaused, FulfillRequestParams, HeaderEntry,
};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use regex::Regex;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

// Global browser instance to avoid re-launching Chrome for every scenario.
static BROWSER_INSTANCE: OnceCell<Browser> = OnceCell::const_new();

// Asynchronously gets or initializes the shared browser instance.
// This function ensures that the browser is launched only once.
pub async fn get_browser() -> Result<&'static Browser, ApiError> {
    BROWSER_INSTANCE
        .get_or_try_init(|| async {
            let remote_debugging_url = std::env::var("CHROMIUM_REMOTE_DEBUGGING_URL").ok();

            let (browser, mut handler) = if let Some(ref url) = remote_debugging_url {
                tracing::info!("Connecting to remote Chrome instance at: {}", url);
                Browser::connect(url).await.map_err(|e| {
                    ApiError::Browser(format!("Failed to connect to remote Chrome: {}", e))
                })?
            } else {
                let builder = BrowserConfig::builder()
                    .no_sandbox()
                    .request_timeout(Duration::from_secs(30))
                    .arg("--disable-gpu")
                    .arg("--disable-dev-shm-usage");

                Browser::launch(
                    builder
                        .build()
                        .map_err(|e| ApiError::Browser(e.to_string()))?,
                )
                .await
                .map_err(|e| ApiError::Browser(e.to_string()))?
            };

            // Spawn a handler to process browser events
            tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            Ok(browser)
        })
        .await
}

/// 浏览器会话
///
/// 封装一个chromiumoxide页面：导航、基于定位器的交互和路由拦截。
/// 每次交互结果写入共享的 `InteractionReport`
pub struct BrowserSession {
    page: Page,
    report: InteractionReport,
}

impl BrowserSession {
    /// 在共享浏览器实例上打开新页面
    pub async fn new() -> ApiResult<Self> {
        let browser = get_browser().await?;
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ApiError::Browser(e.to_string()))?;

        Ok(Self {
            page,
            report: InteractionReport::new(),
        })
    }

    /// 底层页面
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 会话的交互结果报告
    pub fn report(&self) -> &InteractionReport {
        &self.report
    }

    /// 导航到URL并等待加载完成
    pub async fn goto(&self, url: &str) -> ApiResult<()> {
        debug!(url, "navigating");
        self.page
            .goto(url)
            .await
            .map_err(|e| ApiError::Browser(format!("Navigation failed: {}", e)))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| ApiError::Browser(format!("Navigation wait failed: {}", e)))?;
        Ok(())
    }

    /// 点击定位器命中的元素
    ///
    /// 所有候选落空时记录软失败并继续，不中断场景
    pub async fn click(&self, locator: &Locator) -> Outcome {
        match locator.resolve_first_match(&self.page).await {
            Some(element) => {
                if let Err(e) = element.click().await {
                    warn!(element = %locator.name, error = %e, "click failed");
                    self.report.record(&locator.name, "click", Outcome::SoftFail);
                    return Outcome::SoftFail;
                }
                self.report.record(&locator.name, "click", Outcome::Hit);
                Outcome::Hit
            }
            None => {
                warn!(element = %locator.name, "no locator candidate matched, continuing");
                self.report.record(&locator.name, "click", Outcome::SoftFail);
                Outcome::SoftFail
            }
        }
    }

    /// 填充输入框
    pub async fn fill(&self, locator: &Locator, value: &str) -> Outcome {
        match locator.resolve_first_match(&self.page).await {
            Some(element) => {
                let typed = async {
                    element.click().await?;
                    element.type_str(value).await
                }
                .await;
                match typed {
                    Ok(_) => {
                        self.report.record(&locator.name, "fill", Outcome::Hit);
                        Outcome::Hit
                    }
                    Err(e) => {
                        warn!(element = %locator.name, error = %e, "fill failed");
                        self.report.record(&locator.name, "fill", Outcome::SoftFail);
                        Outcome::SoftFail
                    }
                }
            }
            None => {
                warn!(element = %locator.name, "no locator candidate matched, continuing");
                self.report.record(&locator.name, "fill", Outcome::SoftFail);
                Outcome::SoftFail
            }
        }
    }

    /// 读取元素文本
    pub async fn text_of(&self, locator: &Locator) -> Option<String> {
        match locator.resolve_first_match(&self.page).await {
            Some(element) => {
                let text = element.inner_text().await.ok().flatten();
                let outcome = if text.is_some() {
                    Outcome::Hit
                } else {
                    Outcome::SoftFail
                };
                self.report.record(&locator.name, "read", outcome);
                text
            }
            None => {
                warn!(element = %locator.name, "no locator candidate matched, continuing");
                self.report.record(&locator.name, "read", Outcome::SoftFail);
                None
            }
        }
    }

    /// 严格点击：软失败转换为 `ElementNotFound` 错误
    pub async fn require_click(&self, locator: &Locator) -> ApiResult<()> {
        match self.click(locator).await {
            Outcome::Hit => Ok(()),
            Outcome::SoftFail => Err(ApiError::ElementNotFound(locator.name.clone())),
        }
    }

    /// 严格填充
    pub async fn require_fill(&self, locator: &Locator, value: &str) -> ApiResult<()> {
        match self.fill(locator, value).await {
            Outcome::Hit => Ok(()),
            Outcome::SoftFail => Err(ApiError::ElementNotFound(locator.name.clone())),
        }
    }

    /// 读取CSS选择器命中的全部元素文本
    pub async fn texts(&self, selector: &str) -> ApiResult<Vec<String>> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|e| ApiError::Browser(e.to_string()))?;

        let mut texts = Vec::with_capacity(elements.len());
        for element in elements {
            if let Ok(Some(text)) = element.inner_text().await {
                texts.push(text.trim().to_string());
            }
        }
        Ok(texts)
    }

    /// 设置下拉框的值并触发change事件
    pub async fn select(&self, selector: &str, value: &str) -> ApiResult<()> {
        let script = format!(
            r#"(() => {{
                const el = document.querySelector('{selector}');
                if (!el) return false;
                el.value = '{value}';
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()"#,
        );
        self.page
            .evaluate(script)
            .await
            .map_err(|e| ApiError::Browser(format!("Select failed: {}", e)))?;
        Ok(())
    }

    /// 拦截匹配模式的请求并以脚本化响应完成
    ///
    /// # 参数
    ///
    /// * `pattern` - glob模式，如 `**/api/products**`
    /// * `status` - 响应状态码
    /// * `body` - JSON响应体
    ///
    /// 不匹配的请求原样放行
    pub async fn mock_route(&self, pattern: &str, status: u16, body: &Value) -> ApiResult<()> {
        let matcher = glob_to_regex(pattern)?;
        let body_b64 = BASE64.encode(serde_json::to_vec(body)?);

        self.page
            .execute(EnableParams::default())
            .await
            .map_err(|e| ApiError::Browser(format!("Fetch.enable failed: {}", e)))?;

        let mut events = self
            .page
            .event_listener::<EventRequestPaused>()
            .await
            .map_err(|e| ApiError::Browser(e.to_string()))?;

        let page = self.page.clone();
        let pattern = pattern.to_string();
        tokio::spawn(async move {
            while let Some(event) = events.next().await {
                let request_id = event.request_id.clone();
                if matcher.is_match(&event.request.url) {
                    debug!(url = %event.request.url, pattern = %pattern, "fulfilling mocked route");
                    let fulfill = FulfillRequestParams::builder()
                        .request_id(request_id)
                        .response_code(status as i64)
                        .response_header(HeaderEntry {
                            name: "content-type".to_string(),
                            value: "application/json".to_string(),
                        })
                        .body(body_b64.clone())
                        .build();
                    match fulfill {
                        Ok(params) => {
                            if let Err(e) = page.execute(params).await {
                                warn!(error = %e, "failed to fulfill mocked route");
                                break;
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, "invalid fulfill parameters");
                            break;
                        }
                    }
                } else if let Err(e) = page.execute(ContinueRequestParams::new(request_id)).await {
                    warn!(error = %e, "failed to continue intercepted request");
                    break;
                }
            }
        });

        Ok(())
    }
}

/// 将glob路由模式转换为正则：`**` 匹配任意字符，`*` 匹配单个路径段
fn glob_to_regex(pattern: &str) -> ApiResult<Regex> {
    let mut regex = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    regex.push_str(".*");
                } else {
                    regex.push_str("[^/]*");
                }
            }
            '?' => regex.push('.'),
            other => regex.push_str(&regex::escape(&other.to_string())),
        }
    }

    Regex::new(&regex).map_err(|e| ApiError::Browser(format!("Invalid route pattern: {}", e)))
}
