// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::schema::descriptor::{FieldKind, SchemaDescriptor};

/// 用户响应模式
pub fn user_schema() -> SchemaDescriptor {
    SchemaDescriptor::new("user")
        .field("id", FieldKind::StringOrNumber)
        .field("first_name", FieldKind::String)
        .field("last_name", FieldKind::String)
        .field("email", FieldKind::String)
        .optional("address", FieldKind::Object(Box::new(address_schema())))
        .optional("phone", FieldKind::String)
        .optional("dob", FieldKind::String)
        .optional("created_at", FieldKind::String)
}

/// 地址子模式
pub fn address_schema() -> SchemaDescriptor {
    SchemaDescriptor::new("address")
        .field("street", FieldKind::String)
        .field("city", FieldKind::String)
        .field("country", FieldKind::String)
        .optional("state", FieldKind::String)
        .optional("postal_code", FieldKind::String)
}

/// 分类子模式
pub fn category_schema() -> SchemaDescriptor {
    SchemaDescriptor::new("category")
        .field("id", FieldKind::StringOrNumber)
        .field("name", FieldKind::String)
        .optional("slug", FieldKind::String)
}

/// 品牌子模式
pub fn brand_schema() -> SchemaDescriptor {
    SchemaDescriptor::new("brand")
        .field("id", FieldKind::StringOrNumber)
        .field("name", FieldKind::String)
        .optional("slug", FieldKind::String)
}

/// 商品响应模式
///
/// 价格字段在不同环境下可能是字符串或数字，使用联合类型约束
pub fn product_schema() -> SchemaDescriptor {
    SchemaDescriptor::new("product")
        .field("id", FieldKind::StringOrNumber)
        .field("name", FieldKind::String)
        .field("description", FieldKind::String)
        .field("price", FieldKind::StringOrNumber)
        .field("category", FieldKind::Object(Box::new(category_schema())))
        .field("brand", FieldKind::Object(Box::new(brand_schema())))
        .optional("in_stock", FieldKind::Bool)
        .optional("is_location_offer", FieldKind::Bool)
        .optional("is_rental", FieldKind::Bool)
        .optional("product_image", FieldKind::Object(Box::new(image_schema())))
}

/// 商品图片子模式
pub fn image_schema() -> SchemaDescriptor {
    SchemaDescriptor::new("product_image")
        .field("file_name", FieldKind::String)
        .optional("title", FieldKind::String)
        .optional("source_url", FieldKind::String)
}

/// 商品列表（分页）响应模式
pub fn product_list_schema() -> SchemaDescriptor {
    SchemaDescriptor::new("product_list")
        .field("data", FieldKind::Array(Some(Box::new(product_schema()))))
        .field("total", FieldKind::Integer)
        .optional("current_page", FieldKind::Integer)
        .optional("per_page", FieldKind::Integer)
}

/// 订单行项目子模式
pub fn order_item_schema() -> SchemaDescriptor {
    SchemaDescriptor::new("order_item")
        .field("name", FieldKind::String)
        .field("quantity", FieldKind::Integer)
        .field("unit_price", FieldKind::StringOrNumber)
        .optional("product_id", FieldKind::StringOrNumber)
}

/// 订单响应模式
pub fn order_schema() -> SchemaDescriptor {
    SchemaDescriptor::new("order")
        .field("id", FieldKind::StringOrNumber)
        .field("invoice_number", FieldKind::StringOrNumber)
        .field("billing_address", FieldKind::Object(Box::new(address_schema())))
        .field("total", FieldKind::StringOrNumber)
        .field("items", FieldKind::Array(Some(Box::new(order_item_schema()))))
        .optional("payment_method", FieldKind::String)
        .optional("status", FieldKind::String)
        .optional("created_at", FieldKind::String)
}

/// 错误响应模式
pub fn error_schema() -> SchemaDescriptor {
    SchemaDescriptor::new("error")
        .field("error", FieldKind::String)
        .optional("details", FieldKind::Object(Box::new(SchemaDescriptor::new("details"))))
}
