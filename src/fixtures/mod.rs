// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 静态测试夹具
//!
//! 命名的不可变JSON负载，既用作模拟API响应，也用作断言期望值。
//! 每个声称满足某个模式的夹具都由单元测试与模式交叉校验。

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use uuid::Uuid;

/// 注册新用户的请求负载
pub static NEW_USER_DATA: Lazy<Value> = Lazy::new(|| {
    json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "address": {
            "street": "Test street 98",
            "city": "Vienna",
            "state": "Vienna",
            "country": "Austria",
            "postal_code": "1010"
        },
        "phone": "0987654321",
        "dob": "1996-03-14",
        "password": "SuperSecure@017",
        "email": "jane.doe@example.com"
    })
});

/// 已注册用户的API响应
pub static REGISTERED_USER: Lazy<Value> = Lazy::new(|| {
    json!({
        "id": "01HQXW9VJ5GT1C8N6YD2B4S3KF",
        "first_name": "Jane",
        "last_name": "Doe",
        "email": "jane.doe@example.com",
        "address": {
            "street": "Test street 98",
            "city": "Vienna",
            "state": "Vienna",
            "country": "Austria",
            "postal_code": "1010"
        },
        "phone": "0987654321",
        "dob": "1996-03-14",
        "created_at": "2025-01-07T09:14:32.000000Z"
    })
});

/// 单个商品详情响应
pub static PRODUCT_DETAIL: Lazy<Value> = Lazy::new(|| {
    json!({
        "id": "01HQXWA4R8ZT3M2K7PD9B5S1VN",
        "name": "Combination Pliers",
        "description": "Sturdy combination pliers with insulated grip.",
        "price": 14.15,
        "in_stock": true,
        "is_location_offer": false,
        "is_rental": false,
        "category": {
            "id": "01HQXWA4QX0FJ6T8M3KD2B9S7C",
            "name": "Pliers",
            "slug": "pliers"
        },
        "brand": {
            "id": "01HQXWA4QN5RD8K2M7TJ3B1S9V",
            "name": "ForgeFlex Tools"
        },
        "product_image": {
            "file_name": "pliers01.avif",
            "title": "Combination pliers"
        }
    })
});

/// 两件钳类商品的分页列表，供搜索场景模拟 `**/api/products**` 使用
pub static PRODUCT_LIST_PLIERS: Lazy<Value> = Lazy::new(|| {
    json!({
        "current_page": 1,
        "per_page": 9,
        "total": 2,
        "data": [
            {
                "id": "01HQXWA4R8ZT3M2K7PD9B5S1VN",
                "name": "Combination Pliers",
                "description": "Sturdy combination pliers with insulated grip.",
                "price": 14.15,
                "in_stock": true,
                "category": { "id": "01HQXWA4QX0FJ6T8M3KD2B9S7C", "name": "Pliers", "slug": "pliers" },
                "brand": { "id": "01HQXWA4QN5RD8K2M7TJ3B1S9V", "name": "ForgeFlex Tools" }
            },
            {
                "id": "01HQXWA4RD2V9K4M6TP1B8S3JC",
                "name": "Long Nose Pliers",
                "description": "Long nose pliers for precision work.",
                "price": "12.33",
                "in_stock": true,
                "category": { "id": "01HQXWA4QX0FJ6T8M3KD2B9S7C", "name": "Pliers", "slug": "pliers" },
                "brand": { "id": "01HQXWA4QN5RD8K2M7TJ3B1S9V", "name": "ForgeFlex Tools" }
            }
        ]
    })
});

/// 订单详情响应
pub static ORDER_DETAIL: Lazy<Value> = Lazy::new(|| {
    json!({
        "id": "01HQXWB2T6KD8M3RJ5PV1B9S4C",
        "invoice_number": "INV-2025000042",
        "billing_address": {
            "street": "Test street 98",
            "city": "Vienna",
            "state": "Vienna",
            "country": "Austria",
            "postal_code": "1010"
        },
        "payment_method": "cash-on-delivery",
        "status": "AWAITING_FULFILLMENT",
        "total": 26.48,
        "created_at": "2025-01-07T10:02:11.000000Z",
        "items": [
            {
                "product_id": "01HQXWA4R8ZT3M2K7PD9B5S1VN",
                "name": "Combination Pliers",
                "quantity": 1,
                "unit_price": 14.15
            },
            {
                "product_id": "01HQXWA4RD2V9K4M6TP1B8S3JC",
                "name": "Long Nose Pliers",
                "quantity": 1,
                "unit_price": "12.33"
            }
        ]
    })
});

/// 订单列表响应
pub static ORDER_LIST: Lazy<Value> = Lazy::new(|| {
    json!({
        "current_page": 1,
        "total": 1,
        "data": [ORDER_DETAIL.clone()]
    })
});

/// 用户不存在的错误负载
pub static NOT_FOUND_ERROR: Lazy<Value> = Lazy::new(|| json!({"error": "User not found"}));

/// 未授权的错误负载
pub static UNAUTHORIZED_ERROR: Lazy<Value> = Lazy::new(|| json!({"error": "Unauthorized"}));

/// 登录成功响应
pub static LOGIN_RESPONSE: Lazy<Value> = Lazy::new(|| {
    json!({
        "access_token": "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9.e30.t-IDcSemACt8x4iTMCda8Yhe3iZaWbvV5XKSTbuAn0M",
        "token_type": "bearer",
        "expires_in": 300
    })
});

/// 生成对共享演示站点安全的唯一注册邮箱
pub fn unique_email() -> String {
    format!("shopcheck+{}@example.com", Uuid::new_v4().simple())
}
