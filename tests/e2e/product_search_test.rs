// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 商品搜索场景
///
/// 路由拦截返回固定的钳类商品列表，校验搜索结果、
/// 交互报告以及同一环境下API层的交叉一致性

#[cfg(test)]
mod tests {
    use shopcheck::api::{ApiClient, RequestOptions};
    use shopcheck::browser::BrowserSession;
    use shopcheck::config::settings::ApiConfig;
    use shopcheck::fixtures;
    use shopcheck::pages::{PageObject, ProductsPage};
    use shopcheck::schema::catalog;

    use crate::skip_unless_e2e;

    #[tokio::test]
    async fn test_search_shows_only_matching_products() {
        skip_unless_e2e!();

        let config = ApiConfig::resolve().expect("profile should resolve");
        let session = BrowserSession::new().await.expect("browser session");
        session
            .mock_route("**/products**", 200, &fixtures::PRODUCT_LIST_PLIERS)
            .await
            .expect("route mock");

        let page = ProductsPage::new(session);
        page.open(&config.web_url).await.expect("open overview page");
        page.search("pliers").await.expect("search");

        let names = page.listed_product_names().await.expect("product names");
        assert!(!names.is_empty(), "search should list mocked products");
        assert!(
            names
                .iter()
                .all(|n| n.to_lowercase().contains("pliers")),
            "unexpected names in search results: {names:?}"
        );

        let report = page.session().report();
        assert!(
            report.is_clean(),
            "soft failures during scenario: {:?}",
            report.soft_fails()
        );
    }

    #[tokio::test]
    async fn test_filter_and_sort_keep_scenario_alive() {
        skip_unless_e2e!();

        let config = ApiConfig::resolve().expect("profile should resolve");
        let session = BrowserSession::new().await.expect("browser session");

        let page = ProductsPage::new(session);
        page.open(&config.web_url).await.expect("open overview page");

        // 过滤器缺失降级为软失败而不是中断
        let outcome = page.filter_by_category("Pliers").await;
        page.sort_by("name,asc").await.expect("sort");

        let names = page.listed_product_names().await.expect("product names");
        assert!(!names.is_empty(), "grid should keep listing products");

        if !outcome.is_hit() {
            assert_eq!(
                page.session().report().soft_fails(),
                vec!["click:category filter"]
            );
        }
    }

    #[tokio::test]
    async fn test_api_layer_agrees_with_ui_environment() {
        skip_unless_e2e!();

        let config = ApiConfig::resolve().expect("profile should resolve");
        let client = ApiClient::new(&config).expect("client");

        let schema = catalog::product_list_schema();
        let options = RequestOptions {
            schema: Some(&schema),
            max_response_time_ms: Some(config.max_response_time_ms),
            ..RequestOptions::default()
        };
        let response = client.get("/products", &options).await.expect("product list");
        assert_eq!(response.status, 200);
    }
}
