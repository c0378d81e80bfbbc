// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 模式目录交叉校验测试
///
/// 每个固定数据样本必须通过与其对应的模式校验
/// 防止固定数据与模式描述符各自演化后彼此脱节

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shopcheck::fixtures;
    use shopcheck::schema::catalog;

    #[test]
    fn test_registered_user_fixture_matches_user_schema() {
        let result = catalog::user_schema().validate(&fixtures::REGISTERED_USER);
        assert!(result.is_ok(), "violations: {:?}", result.unwrap_err());
    }

    #[test]
    fn test_product_detail_fixture_matches_product_schema() {
        let result = catalog::product_schema().validate(&fixtures::PRODUCT_DETAIL);
        assert!(result.is_ok(), "violations: {:?}", result.unwrap_err());
    }

    #[test]
    fn test_product_list_fixture_matches_list_schema() {
        let result = catalog::product_list_schema().validate(&fixtures::PRODUCT_LIST_PLIERS);
        assert!(result.is_ok(), "violations: {:?}", result.unwrap_err());
    }

    /// 商品列表固定数据同时包含数值与字符串两种价格表示
    /// 联合类型字段必须同时接受两者
    #[test]
    fn test_price_union_covers_both_fixture_variants() {
        let items = fixtures::PRODUCT_LIST_PLIERS["data"]
            .as_array()
            .expect("fixture data array");
        assert!(items.iter().any(|p| p["price"].is_number()));
        assert!(items.iter().any(|p| p["price"].is_string()));

        for item in items {
            let result = catalog::product_schema().validate(item);
            assert!(result.is_ok(), "violations: {:?}", result.unwrap_err());
        }
    }

    #[test]
    fn test_order_fixtures_match_order_schema() {
        let result = catalog::order_schema().validate(&fixtures::ORDER_DETAIL);
        assert!(result.is_ok(), "violations: {:?}", result.unwrap_err());

        for order in fixtures::ORDER_LIST["data"]
            .as_array()
            .expect("order list data array")
        {
            let result = catalog::order_schema().validate(order);
            assert!(result.is_ok(), "violations: {:?}", result.unwrap_err());
        }
    }

    #[test]
    fn test_error_fixtures_match_error_schema() {
        assert!(catalog::error_schema()
            .validate(&fixtures::NOT_FOUND_ERROR)
            .is_ok());
        assert!(catalog::error_schema()
            .validate(&fixtures::UNAUTHORIZED_ERROR)
            .is_ok());
    }

    /// 缺失必填字段时列出全部违规项而非只报第一个
    #[test]
    fn test_product_schema_reports_every_violation() {
        let broken = json!({
            "id": "01HGW",
            "description": 42
        });

        let violations = catalog::product_schema()
            .validate(&broken)
            .expect_err("broken product should fail");

        assert!(violations
            .iter()
            .any(|v| v.contains("missing required field `name`")));
        assert!(violations
            .iter()
            .any(|v| v.contains("missing required field `price`")));
        assert!(violations.iter().any(|v| v.contains("`description`")));
        assert!(violations.len() >= 3);
    }
}
