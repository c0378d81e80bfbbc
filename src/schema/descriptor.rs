// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;

/// 字段类型约束
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// 字符串
    String,
    /// 任意数字
    Number,
    /// 整数
    Integer,
    /// 布尔值
    Bool,
    /// 字符串或数字联合（价格类字段在不同环境下类型不一致）
    StringOrNumber,
    /// 数组，元素可选地按嵌套模式校验
    Array(Option<Box<SchemaDescriptor>>),
    /// 嵌套对象
    Object(Box<SchemaDescriptor>),
}

/// 单个字段约束
#[derive(Debug, Clone)]
struct FieldSpec {
    name: String,
    kind: FieldKind,
    required: bool,
}

/// 模式描述符
///
/// 枚举必填字段和每个字段的类型约束，仅用于校验，从不持久化。
/// `validate` 收集全部违规项而不是在第一处失败即停止。
#[derive(Debug, Clone)]
pub struct SchemaDescriptor {
    name: String,
    fields: Vec<FieldSpec>,
}

impl SchemaDescriptor {
    /// 创建空模式
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// 模式名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 添加必填字段
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            kind,
            required: true,
        });
        self
    }

    /// 添加可选字段（缺失不违规，存在则校验类型）
    pub fn optional(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            kind,
            required: false,
        });
        self
    }

    /// 校验JSON负载
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 负载满足全部约束
    /// * `Err(Vec<String>)` - 全部违规项，路径使用点号分隔
    pub fn validate(&self, value: &Value) -> Result<(), Vec<String>> {
        let mut violations = Vec::new();
        self.check(value, "", &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    fn check(&self, value: &Value, path: &str, out: &mut Vec<String>) {
        let Some(object) = value.as_object() else {
            out.push(format!(
                "expected object for `{}`, got {}",
                display_path(path, &self.name),
                json_type_name(value)
            ));
            return;
        };

        for spec in &self.fields {
            let field_path = join_path(path, &spec.name);
            match object.get(&spec.name) {
                None | Some(Value::Null) if spec.required => {
                    out.push(format!("missing required field `{}`", field_path));
                }
                None | Some(Value::Null) => {}
                Some(field_value) => check_kind(&spec.kind, field_value, &field_path, out),
            }
        }
    }
}

fn check_kind(kind: &FieldKind, value: &Value, path: &str, out: &mut Vec<String>) {
    let mismatch = |expected: &str, out: &mut Vec<String>| {
        out.push(format!(
            "field `{}` expected {}, got {}",
            path,
            expected,
            json_type_name(value)
        ));
    };

    match kind {
        FieldKind::String => {
            if !value.is_string() {
                mismatch("string", out);
            }
        }
        FieldKind::Number => {
            if !value.is_number() {
                mismatch("number", out);
            }
        }
        FieldKind::Integer => {
            if !value.is_i64() && !value.is_u64() {
                mismatch("integer", out);
            }
        }
        FieldKind::Bool => {
            if !value.is_boolean() {
                mismatch("boolean", out);
            }
        }
        FieldKind::StringOrNumber => {
            if !value.is_string() && !value.is_number() {
                mismatch("string or number", out);
            }
        }
        FieldKind::Array(item_schema) => match value.as_array() {
            None => mismatch("array", out),
            Some(items) => {
                if let Some(schema) = item_schema {
                    for (index, item) in items.iter().enumerate() {
                        schema.check(item, &format!("{}[{}]", path, index), out);
                    }
                }
            }
        },
        FieldKind::Object(nested) => nested.check(value, path, out),
    }
}

fn join_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn display_path<'a>(path: &'a str, schema_name: &'a str) -> &'a str {
    if path.is_empty() {
        schema_name
    } else {
        path
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
