// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::Mutex;
use std::sync::Arc;

/// 单次UI交互的结果
///
/// 定位器链全部落空不会静默通过：结果被记录为 `SoftFail`，
/// 测试在场景结束时对报告断言，回归无法伪装成通过
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 某个候选定位器命中并完成交互
    Hit,
    /// 所有候选定位器落空，场景降级继续
    SoftFail,
}

impl Outcome {
    /// 是否命中
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit)
    }
}

/// 单条交互记录
#[derive(Debug, Clone)]
pub struct InteractionRecord {
    /// 逻辑元素名称
    pub element: String,
    /// 执行的动作
    pub action: String,
    /// 交互结果
    pub outcome: Outcome,
}

/// 交互结果报告
///
/// 会话内共享的记录集合；克隆共享同一底层存储
#[derive(Debug, Clone, Default)]
pub struct InteractionReport {
    records: Arc<Mutex<Vec<InteractionRecord>>>,
}

impl InteractionReport {
    /// 创建空报告
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次交互
    pub fn record(&self, element: &str, action: &str, outcome: Outcome) {
        self.records.lock().push(InteractionRecord {
            element: element.to_string(),
            action: action.to_string(),
            outcome,
        });
    }

    /// 软失败的元素名称列表
    pub fn soft_fails(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.outcome == Outcome::SoftFail)
            .map(|r| format!("{}:{}", r.action, r.element))
            .collect()
    }

    /// 是否不存在任何软失败
    pub fn is_clean(&self) -> bool {
        self.records
            .lock()
            .iter()
            .all(|r| r.outcome == Outcome::Hit)
    }

    /// 记录总数
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// 是否没有任何记录
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// 生成人类可读的汇总，用于测试输出
    pub fn summary(&self) -> String {
        let records = self.records.lock();
        let hits = records.iter().filter(|r| r.outcome == Outcome::Hit).count();
        let soft_fails = records.len() - hits;
        format!(
            "{} interaction(s): {} hit, {} soft-failed",
            records.len(),
            hits,
            soft_fails
        )
    }
}
