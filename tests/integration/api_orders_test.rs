// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 订单API测试
///
/// 覆盖订单模式校验以及针对抖动端点的重试行为

#[cfg(test)]
mod tests {
    use shopcheck::api::RequestOptions;
    use shopcheck::fixtures;
    use shopcheck::schema::catalog;
    use shopcheck::utils::retry::{retry_on_error, RetryPolicy};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    use crate::integration::helpers::mock_api;

    #[tokio::test]
    async fn test_order_detail_conforms_to_schema() {
        let (server, client) = mock_api().await;
        Mock::given(method("GET"))
            .and(path("/invoices/01HQXWB2T6KD8M3RJ5PV1B9S4C"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ORDER_DETAIL.clone()))
            .mount(&server)
            .await;

        let schema = catalog::order_schema();
        let options = RequestOptions {
            schema: Some(&schema),
            ..RequestOptions::default()
        };
        let response = client
            .get("/invoices/01HQXWB2T6KD8M3RJ5PV1B9S4C", &options)
            .await
            .unwrap();

        let data = response.data.unwrap();
        assert_eq!(data["invoice_number"], "INV-2025000042");
        assert_eq!(data["items"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_flaky_endpoint_succeeds_with_retry() {
        let (server, client) = mock_api().await;
        // 前两次返回503，之后恢复
        Mock::given(method("GET"))
            .and(path("/invoices"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/invoices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ORDER_LIST.clone()))
            .mount(&server)
            .await;

        let policy = RetryPolicy {
            max_retries: 2,
            ..RetryPolicy::default()
        };
        let options = RequestOptions::default();
        let response = retry_on_error(&policy, || client.get("/invoices", &options))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.data.unwrap()["total"], 1);
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let (server, client) = mock_api().await;
        Mock::given(method("GET"))
            .and(path("/invoices/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(fixtures::NOT_FOUND_ERROR.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let policy = RetryPolicy {
            max_retries: 3,
            ..RetryPolicy::default()
        };
        let options = RequestOptions::default();
        let err = retry_on_error(&policy, || client.get("/invoices/missing", &options))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("404"));
        // expect(1) 由服务器在析构时校验：仅发出一次请求
    }
}
