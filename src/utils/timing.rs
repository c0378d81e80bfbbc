// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ApiConfig;
use crate::utils::errors::{ApiError, ApiResult};
use std::future::Future;
use tokio::time::Instant;

/// 断言异步操作的墙钟耗时不超过给定预算
///
/// 计时覆盖从调用前到完成后的整个过程；若操作本身失败则原样透传其错误。
/// 与重试组合时，本函数包裹整个重试调用，重试耗时计入预算。
///
/// # 参数
///
/// * `limit_ms` - 响应时间预算（毫秒）
/// * `op` - 被测异步操作
///
/// # 返回值
///
/// * `Ok(T)` - 操作结果，未经修改
/// * `Err(ApiError::ResponseTime)` - 超出预算，消息包含实测耗时和预算
pub async fn assert_response_time<T, F, Fut>(limit_ms: u64, op: F) -> ApiResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    let start = Instant::now();
    let result = op().await?;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if elapsed_ms > limit_ms {
        return Err(ApiError::ResponseTime {
            elapsed_ms,
            limit_ms,
        });
    }

    Ok(result)
}

/// 使用环境配置档案的响应时间预算执行断言
pub async fn assert_within_budget<T, F, Fut>(config: &ApiConfig, op: F) -> ApiResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    assert_response_time(config.max_response_time_ms, op).await
}
