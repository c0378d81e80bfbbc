// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 登录场景
///
/// 错误凭据必须出现错误提示；表单元素缺失视为硬失败

#[cfg(test)]
mod tests {
    use shopcheck::browser::BrowserSession;
    use shopcheck::config::settings::ApiConfig;
    use shopcheck::fixtures;
    use shopcheck::pages::{LoginPage, PageObject};

    use crate::skip_unless_e2e;

    #[tokio::test]
    async fn test_invalid_credentials_show_error_banner() {
        skip_unless_e2e!();

        let config = ApiConfig::resolve().expect("profile should resolve");
        let session = BrowserSession::new().await.expect("browser session");

        let page = LoginPage::new(session);
        page.open(&config.web_url).await.expect("open login page");
        page.login(&fixtures::unique_email(), "DefinitelyWrong@1")
            .await
            .expect("login form interaction");

        // 提示渲染是异步的，稍作等待
        tokio::time::sleep(std::time::Duration::from_millis(1_000)).await;
        let message = page.error_message().await;
        assert!(
            message.is_some(),
            "expected an error banner after failed login"
        );
    }
}
