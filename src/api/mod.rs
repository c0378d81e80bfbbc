// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// API客户端模块
///
/// 封装对目标站点HTTP API的请求和响应校验
pub mod client;

pub use client::{ApiClient, ApiResponse, RequestOptions};
