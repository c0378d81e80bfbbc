// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 页面对象模块
///
/// 每个页面对象封装一个UI区域的定位器和交互序列
pub mod cart_page;
pub mod checkout_page;
pub mod login_page;
pub mod products_page;

use crate::browser::BrowserSession;
use crate::utils::errors::ApiResult;
use async_trait::async_trait;

pub use cart_page::CartPage;
pub use checkout_page::{BillingAddress, CheckoutPage, PaymentMethod};
pub use login_page::LoginPage;
pub use products_page::ProductsPage;

/// 页面对象公共接口
#[async_trait]
pub trait PageObject {
    /// 页面相对路径
    fn path(&self) -> &'static str;

    /// 底层浏览器会话
    fn session(&self) -> &BrowserSession;

    /// 从站点基础URL打开页面
    async fn open(&self, web_url: &str) -> ApiResult<()> {
        let url = format!("{}{}", web_url.trim_end_matches('/'), self.path());
        self.session().goto(&url).await
    }
}
