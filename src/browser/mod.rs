// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 浏览器模块
///
/// 浏览器会话、定位策略、交互结果报告和路由拦截
pub mod locator;
pub mod report;
pub mod session;

pub use locator::{Locator, LocatorStrategy};
pub use report::{InteractionReport, Outcome};
pub use session::BrowserSession;
