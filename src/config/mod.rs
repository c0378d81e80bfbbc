// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理测试环境配置档案，包括基础URL、超时和重试配置
pub mod settings;
