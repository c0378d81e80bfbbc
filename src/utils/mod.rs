// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供错误类型、重试策略、响应时间断言和遥测等通用功能
pub mod errors;
pub mod retry;
pub mod telemetry;
pub mod timing;
