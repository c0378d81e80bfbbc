// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置解析的进程级行为测试
///
/// 档案表本身在 `src/config` 内部测试中覆盖；
/// 这里验证默认回退和环境变量覆盖，全部在单个测试函数内顺序执行

#[cfg(test)]
mod tests {
    use shopcheck::config::settings::{ApiConfig, ApiEnv};

    #[test]
    fn test_resolution_fallback_and_overrides() {
        // 未设置 API_ENV 时回退到 local
        std::env::remove_var("API_ENV");
        std::env::remove_var("SHOPCHECK__TIMEOUT_MS");
        let cfg = ApiConfig::resolve().expect("default profile should resolve");
        assert_eq!(cfg.environment, ApiEnv::Local);
        assert_eq!(cfg.base_url, "http://localhost:8091");
        assert_eq!(cfg.timeout_ms, 5_000);

        // SHOPCHECK_ 前缀的环境变量覆盖档案默认值
        std::env::set_var("SHOPCHECK__TIMEOUT_MS", "1234");
        let cfg = ApiConfig::resolve().expect("override should resolve");
        assert_eq!(cfg.timeout_ms, 1_234);
        // 其余字段保持档案默认
        assert_eq!(cfg.max_response_time_ms, 1_000);
        std::env::remove_var("SHOPCHECK__TIMEOUT_MS");

        // 未知环境被拒绝，错误信息点名违规值
        std::env::set_var("API_ENV", "qa");
        let err = ApiConfig::resolve().unwrap_err();
        assert!(err.to_string().contains("unknown API_ENV"));
        assert!(err.to_string().contains("qa"));
        std::env::remove_var("API_ENV");
    }
}
