// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::browser::{BrowserSession, Locator, LocatorStrategy, Outcome};
use crate::pages::PageObject;
use crate::utils::errors::ApiResult;
use async_trait::async_trait;

/// 购物车页
pub struct CartPage {
    session: BrowserSession,
}

impl CartPage {
    pub fn new(session: BrowserSession) -> Self {
        Self { session }
    }

    pub fn into_session(self) -> BrowserSession {
        self.session
    }

    fn add_to_cart_button() -> Locator {
        Locator::new(
            "add to cart button",
            vec![
                LocatorStrategy::TestAttr("add-to-cart".into()),
                LocatorStrategy::Id("btn-add-to-cart".into()),
                LocatorStrategy::Text {
                    selector: "button".into(),
                    needle: "Add to cart".into(),
                },
            ],
        )
    }

    fn quantity_input() -> Locator {
        Locator::new(
            "quantity input",
            vec![
                LocatorStrategy::TestAttr("quantity".into()),
                LocatorStrategy::Id("quantity-input".into()),
            ],
        )
    }

    fn cart_icon() -> Locator {
        Locator::new(
            "cart icon",
            vec![
                LocatorStrategy::TestAttr("nav-cart".into()),
                LocatorStrategy::Id("lblCartItemCount".into()),
                LocatorStrategy::Css("a[href=\"/checkout\"]".into()),
            ],
        )
    }

    fn cart_total() -> Locator {
        Locator::new(
            "cart total",
            vec![
                LocatorStrategy::TestAttr("cart-total".into()),
                LocatorStrategy::Css(".cart-total".into()),
            ],
        )
    }

    /// 在商品详情页设置数量并加入购物车
    pub async fn add_current_product(&self, quantity: u32) -> ApiResult<()> {
        if quantity != 1 {
            self.session
                .require_fill(&Self::quantity_input(), &quantity.to_string())
                .await?;
        }
        self.session.require_click(&Self::add_to_cart_button()).await
    }

    /// 打开购物车
    pub async fn open_cart(&self) -> ApiResult<()> {
        self.session.require_click(&Self::cart_icon()).await
    }

    /// 读取购物车总价文本
    pub async fn total(&self) -> Option<String> {
        self.session.text_of(&Self::cart_total()).await
    }

    /// 读取购物车行条目的商品名称
    pub async fn line_item_names(&self) -> ApiResult<Vec<String>> {
        let names = self.session.texts("[data-test=\"product-title\"]").await?;
        if !names.is_empty() {
            return Ok(names);
        }
        self.session.texts("td.col-md-6, .product-title").await
    }

    /// 删除指定行条目；条目缺失记录为软失败
    pub async fn remove_line_item(&self, index: usize) -> Outcome {
        let locator = Locator::new(
            "line item delete button",
            vec![
                LocatorStrategy::Css(format!(
                    "tbody tr:nth-child({}) .btn-danger",
                    index + 1
                )),
                LocatorStrategy::Css(format!(
                    "tbody tr:nth-child({}) [data-test=\"line-item-delete\"]",
                    index + 1
                )),
            ],
        );
        self.session.click(&locator).await
    }
}

#[async_trait]
impl PageObject for CartPage {
    fn path(&self) -> &'static str {
        "/checkout"
    }

    fn session(&self) -> &BrowserSession {
        &self.session
    }
}
