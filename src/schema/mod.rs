// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 模式模块
///
/// 声明式JSON模式描述符及目标站点响应的模式目录
pub mod catalog;
pub mod descriptor;

pub use descriptor::{FieldKind, SchemaDescriptor};
