//! 人員配置草稿

use std::collections::BTreeSet;

use shiftplan_core::{ShiftRecord, MAX_CREW};

use crate::edits::EditCommand;

/// 多選人員配置草稿
///
/// 勾選狀態只存在於草稿內，已提交的配置不被途中修改：`commit`
/// 產生一道編輯指令，丟棄草稿即取消。
#[derive(Debug, Clone)]
pub struct CrewDraft {
    record_id: String,
    selected: BTreeSet<u32>,
}

impl CrewDraft {
    /// 以記錄現有配置開啟草稿
    pub fn begin(record: &ShiftRecord) -> Self {
        Self {
            record_id: record.id.clone(),
            selected: record.manpower_ids.iter().copied().collect(),
        }
    }

    /// 勾選／取消勾選成員；超出人數上限時拒絕並返回 false
    pub fn toggle(&mut self, worker_id: u32) -> bool {
        if self.selected.remove(&worker_id) {
            true
        } else if self.selected.len() < MAX_CREW {
            self.selected.insert(worker_id);
            true
        } else {
            false
        }
    }

    /// 成員是否已勾選
    pub fn is_selected(&self, worker_id: u32) -> bool {
        self.selected.contains(&worker_id)
    }

    /// 目前勾選的成員
    pub fn selected(&self) -> impl Iterator<Item = u32> + '_ {
        self.selected.iter().copied()
    }

    /// 提交為編輯指令；草稿隨之結束
    pub fn commit(self) -> EditCommand {
        EditCommand::SetManpower {
            id: self.record_id,
            ids: self.selected.into_iter().collect(),
        }
    }
}
