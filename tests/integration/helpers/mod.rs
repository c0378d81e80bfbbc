// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试辅助模块
///
/// 启动本地wiremock服务器并构造指向它的客户端，
/// 避免集成测试触达真实演示站点
use shopcheck::api::ApiClient;
use shopcheck::config::settings::{ApiConfig, ApiEnv};
use wiremock::MockServer;

/// 构造指向给定地址的测试配置档案
pub fn test_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        environment: ApiEnv::Local,
        base_url: base_url.to_string(),
        web_url: "http://localhost:4200".to_string(),
        timeout_ms: 5_000,
        max_response_time_ms: 1_000,
        retry_attempts: 0,
    }
}

/// 启动模拟API服务器并返回绑定到它的客户端
pub async fn mock_api() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let config = test_config(&server.uri());
    let client = ApiClient::new(&config).expect("client should build");
    (server, client)
}
