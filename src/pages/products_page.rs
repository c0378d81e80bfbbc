// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::browser::{BrowserSession, Locator, LocatorStrategy, Outcome};
use crate::pages::PageObject;
use crate::utils::errors::ApiResult;
use async_trait::async_trait;
use std::time::Duration;

/// 商品总览页
///
/// 搜索、分类/品牌过滤、排序和结果读取
pub struct ProductsPage {
    session: BrowserSession,
}

impl ProductsPage {
    pub fn new(session: BrowserSession) -> Self {
        Self { session }
    }

    pub fn into_session(self) -> BrowserSession {
        self.session
    }

    fn search_input() -> Locator {
        Locator::new(
            "search input",
            vec![
                LocatorStrategy::TestAttr("search-query".into()),
                LocatorStrategy::Id("search-query".into()),
                LocatorStrategy::Css("input[placeholder=\"Search\"]".into()),
            ],
        )
    }

    fn search_submit() -> Locator {
        Locator::new(
            "search submit button",
            vec![
                LocatorStrategy::TestAttr("search-submit".into()),
                LocatorStrategy::Css("button[type=\"submit\"]".into()),
                LocatorStrategy::Text {
                    selector: "button".into(),
                    needle: "Search".into(),
                },
            ],
        )
    }

    fn sort_select() -> &'static str {
        "[data-test=\"sort\"], select.form-select"
    }

    /// 搜索商品
    ///
    /// 提交后短暂等待结果网格刷新
    pub async fn search(&self, term: &str) -> ApiResult<()> {
        self.session.require_fill(&Self::search_input(), term).await?;
        self.session.require_click(&Self::search_submit()).await?;
        tokio::time::sleep(Duration::from_millis(500)).await;
        Ok(())
    }

    /// 读取当前列出的商品名称
    pub async fn listed_product_names(&self) -> ApiResult<Vec<String>> {
        let names = self.session.texts("[data-test=\"product-name\"]").await?;
        if !names.is_empty() {
            return Ok(names);
        }
        // 标记漂移回退
        self.session.texts(".card-title").await
    }

    /// 按分类名勾选过滤器
    pub async fn filter_by_category(&self, category: &str) -> Outcome {
        let locator = Locator::new(
            "category filter",
            vec![
                LocatorStrategy::Text {
                    selector: "label".into(),
                    needle: category.into(),
                },
                LocatorStrategy::Css(format!(
                    "input[name=\"category_id\"][data-label=\"{}\"]",
                    category
                )),
            ],
        );
        self.session.click(&locator).await
    }

    /// 按品牌名勾选过滤器
    pub async fn filter_by_brand(&self, brand: &str) -> Outcome {
        let locator = Locator::new(
            "brand filter",
            vec![LocatorStrategy::Text {
                selector: "label".into(),
                needle: brand.into(),
            }],
        );
        self.session.click(&locator).await
    }

    /// 按给定方式排序，如 `name,asc` 或 `price,desc`
    pub async fn sort_by(&self, order: &str) -> ApiResult<()> {
        self.session.select(Self::sort_select(), order).await?;
        tokio::time::sleep(Duration::from_millis(500)).await;
        Ok(())
    }

    /// 打开名称包含给定文本的商品详情
    pub async fn open_product(&self, name: &str) -> ApiResult<()> {
        let locator = Locator::new(
            "product card",
            vec![LocatorStrategy::Text {
                selector: ".card".into(),
                needle: name.into(),
            }],
        );
        self.session.require_click(&locator).await
    }
}

#[async_trait]
impl PageObject for ProductsPage {
    fn path(&self) -> &'static str {
        "/"
    }

    fn session(&self) -> &BrowserSession {
        &self.session
    }
}
