// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::browser::{BrowserSession, Locator, LocatorStrategy};
use crate::pages::PageObject;
use crate::utils::errors::ApiResult;
use async_trait::async_trait;

/// 登录页
pub struct LoginPage {
    session: BrowserSession,
}

impl LoginPage {
    pub fn new(session: BrowserSession) -> Self {
        Self { session }
    }

    pub fn into_session(self) -> BrowserSession {
        self.session
    }

    fn email_input() -> Locator {
        Locator::new(
            "email input",
            vec![
                LocatorStrategy::TestAttr("email".into()),
                LocatorStrategy::Id("email".into()),
                LocatorStrategy::Css("input[type=\"email\"]".into()),
            ],
        )
    }

    fn password_input() -> Locator {
        Locator::new(
            "password input",
            vec![
                LocatorStrategy::TestAttr("password".into()),
                LocatorStrategy::Id("password".into()),
                LocatorStrategy::Css("input[type=\"password\"]".into()),
            ],
        )
    }

    fn submit_button() -> Locator {
        Locator::new(
            "login submit button",
            vec![
                LocatorStrategy::TestAttr("login-submit".into()),
                LocatorStrategy::Css("input[type=\"submit\"]".into()),
                LocatorStrategy::Text {
                    selector: "button".into(),
                    needle: "Login".into(),
                },
            ],
        )
    }

    fn error_banner() -> Locator {
        Locator::new(
            "login error banner",
            vec![
                LocatorStrategy::TestAttr("login-error".into()),
                LocatorStrategy::Css(".alert-danger".into()),
                LocatorStrategy::Css(".help-block".into()),
            ],
        )
    }

    /// 执行登录流程
    ///
    /// 使用严格交互：登录表单缺失应中止场景而不是降级
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        self.session.require_fill(&Self::email_input(), email).await?;
        self.session
            .require_fill(&Self::password_input(), password)
            .await?;
        self.session.require_click(&Self::submit_button()).await
    }

    /// 读取登录错误提示
    pub async fn error_message(&self) -> Option<String> {
        self.session.text_of(&Self::error_banner()).await
    }
}

#[async_trait]
impl PageObject for LoginPage {
    fn path(&self) -> &'static str {
        "/auth/login"
    }

    fn session(&self) -> &BrowserSession {
        &self.session
    }
}
