// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 端到端测试模块
///
/// 需要可用的Chrome/Chromium；设置 `SHOPCHECK_E2E=1` 启用，
/// 未设置时各场景直接跳过，保证无浏览器环境下套件仍然通过。
/// 远程浏览器通过 `CHROMIUM_REMOTE_DEBUGGING_URL` 接入
pub mod checkout_test;
pub mod login_test;
pub mod product_search_test;

/// 浏览器场景是否启用
pub fn e2e_enabled() -> bool {
    std::env::var("SHOPCHECK_E2E").is_ok()
}

/// 标准跳过提示
#[macro_export]
macro_rules! skip_unless_e2e {
    () => {
        if !$crate::e2e::e2e_enabled() {
            eprintln!("SHOPCHECK_E2E not set, skipping browser scenario");
            return;
        }
    };
}
