// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chromiumoxide::{Element, Page};
use tracing::debug;

/// 定位策略
///
/// 站点版本之间标记会漂移，同一元素可能需要多种寻址方式
#[derive(Debug, Clone)]
pub enum LocatorStrategy {
    /// `data-test` 属性
    TestAttr(String),
    /// 元素ID
    Id(String),
    /// CSS选择器
    Css(String),
    /// 按文本内容匹配：在 `selector` 命中的元素中查找包含 `needle` 的第一个
    Text { selector: String, needle: String },
}

impl LocatorStrategy {
    /// 策略描述，用于日志
    pub fn describe(&self) -> String {
        match self {
            LocatorStrategy::TestAttr(v) => format!("data-test={}", v),
            LocatorStrategy::Id(v) => format!("#{}", v),
            LocatorStrategy::Css(v) => format!("css({})", v),
            LocatorStrategy::Text { selector, needle } => {
                format!("text({} ~ {})", selector, needle)
            }
        }
    }

    fn css(&self) -> Option<String> {
        match self {
            LocatorStrategy::TestAttr(v) => Some(format!("[data-test=\"{}\"]", v)),
            LocatorStrategy::Id(v) => Some(format!("#{}", v)),
            LocatorStrategy::Css(v) => Some(v.clone()),
            LocatorStrategy::Text { .. } => None,
        }
    }
}

/// 按固定优先级排序的候选定位器
///
/// 所有页面对象共用同一个通用的首个命中解析逻辑，
/// 不在每个页面对象里重复回退链
#[derive(Debug, Clone)]
pub struct Locator {
    /// 逻辑元素名称，用于报告和日志
    pub name: String,
    /// 候选策略，优先级从高到低
    pub candidates: Vec<LocatorStrategy>,
}

impl Locator {
    /// 创建定位器
    pub fn new(name: impl Into<String>, candidates: Vec<LocatorStrategy>) -> Self {
        Self {
            name: name.into(),
            candidates,
        }
    }

    /// 依次尝试候选策略，返回第一个存在且可见的元素
    ///
    /// # 返回值
    ///
    /// * `Some(Element)` - 第一个命中的元素
    /// * `None` - 所有候选均落空
    pub async fn resolve_first_match(&self, page: &Page) -> Option<Element> {
        for strategy in &self.candidates {
            let found = match strategy.css() {
                Some(selector) => page.find_element(selector).await.ok(),
                None => {
                    let LocatorStrategy::Text { selector, needle } = strategy else {
                        unreachable!()
                    };
                    find_by_text(page, selector, needle).await
                }
            };

            if let Some(element) = found {
                if is_visible(&element).await {
                    debug!(
                        element = %self.name,
                        strategy = %strategy.describe(),
                        "locator candidate matched"
                    );
                    return Some(element);
                }
            }
        }
        None
    }
}

/// 在 `selector` 命中的元素中查找文本包含 `needle` 的第一个（忽略大小写）
async fn find_by_text(page: &Page, selector: &str, needle: &str) -> Option<Element> {
    let needle = needle.to_lowercase();
    let elements = page.find_elements(selector).await.ok()?;
    for element in elements {
        if let Ok(Some(text)) = element.inner_text().await {
            if text.to_lowercase().contains(&needle) {
                return Some(element);
            }
        }
    }
    None
}

/// 可见性检查：没有可点击坐标的元素视为不可见
async fn is_visible(element: &Element) -> bool {
    element.clickable_point().await.is_ok()
}
