//! 人員名冊模型

use serde::{Deserialize, Serialize};

/// 單一班次最多可配置的人數
pub const MAX_CREW: usize = 6;

/// 名冊成員
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// 成員ID（穩定，不隨增刪變動）
    pub id: u32,

    /// 姓名
    pub name: String,
}

/// 人員名冊（有序，ID 穩定）
///
/// 成員可被零或多筆班次記錄引用；移除成員時由擁有記錄的計劃
/// 負責清理引用。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManpowerRoster {
    workers: Vec<Worker>,
    next_id: u32,
}

impl ManpowerRoster {
    /// 創建空名冊
    pub fn new() -> Self {
        Self {
            workers: Vec::new(),
            next_id: 1,
        }
    }

    /// 以既有成員建立名冊（載入快照用）
    pub fn from_workers(workers: Vec<Worker>) -> Self {
        let next_id = workers.iter().map(|w| w.id + 1).max().unwrap_or(1);
        Self { workers, next_id }
    }

    /// 新增成員，返回其 ID
    pub fn add(&mut self, name: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.workers.push(Worker {
            id,
            name: name.into(),
        });
        id
    }

    /// 移除成員；返回成員是否存在
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.workers.len();
        self.workers.retain(|w| w.id != id);
        self.workers.len() != before
    }

    /// 檢查成員是否存在
    pub fn contains(&self, id: u32) -> bool {
        self.workers.iter().any(|w| w.id == id)
    }

    /// 依 ID 查找成員
    pub fn get(&self, id: u32) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// 依名冊順序走訪成員
    pub fn iter(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter()
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

impl Default for ManpowerRoster {
    fn default() -> Self {
        Self::new()
    }
}
