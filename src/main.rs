// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use shopcheck::api::{ApiClient, RequestOptions};
use shopcheck::config::settings::ApiConfig;
use shopcheck::schema::catalog;
use shopcheck::utils::retry::{retry_on_error, RetryPolicy};
use shopcheck::utils::telemetry;
use shopcheck::utils::timing::assert_within_budget;
use tracing::info;

/// 主函数
///
/// 对选定环境执行API冒烟检查：状态探测和带模式校验的商品列表请求
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting shopcheck smoke check...");

    // 2. Load configuration
    let config = ApiConfig::resolve()?;
    info!(
        environment = config.environment.as_str(),
        base_url = %config.base_url,
        "Configuration loaded"
    );

    let client = ApiClient::new(&config)?;
    let policy = RetryPolicy::from_config(&config);

    // 3. Status probe with retry
    let default_options = RequestOptions::default();
    let status = retry_on_error(&policy, || client.get("/status", &default_options)).await?;
    info!(status = status.status, "status endpoint reachable");

    // 4. Product list with schema validation inside the response-time budget
    let list_schema = catalog::product_list_schema();
    let options = RequestOptions {
        schema: Some(&list_schema),
        ..RequestOptions::default()
    };
    let products = assert_within_budget(&config, || {
        retry_on_error(&policy, || client.get("/products", &options))
    })
    .await?;

    let total = products
        .data
        .as_ref()
        .and_then(|d| d.get("total"))
        .and_then(|t| t.as_u64())
        .unwrap_or(0);
    info!(total, "product listing validated against schema");

    info!("Smoke check passed");
    Ok(())
}
