// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// API客户端模块
///
/// 封装对目标站点HTTP API的请求、状态码校验、模式校验和响应时间断言
pub mod api;

/// 浏览器模块
///
/// 基于chromiumoxide的浏览器会话、定位策略和路由拦截
pub mod browser;

/// 配置模块
///
/// 处理测试环境配置档案和环境变量
pub mod config;

/// 夹具模块
///
/// 提供静态测试数据，用作模拟响应和断言期望值
pub mod fixtures;

/// 页面对象模块
///
/// 封装登录、商品浏览、购物车和结算等UI工作流
pub mod pages;

/// 模式模块
///
/// 声明式JSON模式描述符及用户/商品/订单模式目录
pub mod schema;

/// 工具模块
///
/// 提供错误类型、重试策略、响应时间断言和遥测等通用功能
pub mod utils;
