//! 生產計劃模型

use serde::{Deserialize, Serialize};

use crate::record::ShiftRecord;
use crate::roster::{ManpowerRoster, MAX_CREW};
use crate::{PlanConfig, PlanError, Result};

/// 生產計劃
///
/// 記錄序列的唯一擁有者：記錄不在計劃之外存在，序列恆依
/// (day, shift) 排序，加班（溢出／補產）記錄整張計劃至多一筆。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 生成此計劃所用的配置
    pub config: PlanConfig,

    /// 人員名冊
    pub roster: ManpowerRoster,

    records: Vec<ShiftRecord>,
}

impl ProductionPlan {
    /// 創建空計劃
    pub fn new(config: PlanConfig, roster: ManpowerRoster) -> Self {
        Self {
            config,
            roster,
            records: Vec::new(),
        }
    }

    /// 以既有記錄建立計劃（載入快照用）
    pub fn with_records(
        config: PlanConfig,
        roster: ManpowerRoster,
        mut records: Vec<ShiftRecord>,
    ) -> Self {
        records.sort_by_key(ShiftRecord::sort_key);
        Self {
            config,
            roster,
            records,
        }
    }

    /// 記錄序列（排序後）
    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    /// 取代整個記錄序列
    ///
    /// 重算是整體替換而非增量修補：下游的累計與庫存欄位依賴
    /// 上游狀態，逐筆修補會留下不一致的中間態。
    pub fn replace_records(&mut self, mut records: Vec<ShiftRecord>) {
        records.sort_by_key(ShiftRecord::sort_key);
        self.records = records;
    }

    /// 可變借用整個序列（重算管線用）；呼叫端負責維持排序
    pub fn records_mut(&mut self) -> &mut Vec<ShiftRecord> {
        &mut self.records
    }

    /// 依 ID 查找記錄
    pub fn record(&self, id: &str) -> Result<&ShiftRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| PlanError::RecordNotFound(id.to_string()))
    }

    /// 依 ID 查找記錄（可變）
    pub fn record_mut(&mut self, id: &str) -> Result<&mut ShiftRecord> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| PlanError::RecordNotFound(id.to_string()))
    }

    /// 加班（溢出／補產）記錄
    pub fn overtime_record(&self) -> Option<&ShiftRecord> {
        self.records.iter().find(|r| r.is_overtime())
    }

    /// 插入記錄並維持排序
    pub fn push_record(&mut self, record: ShiftRecord) -> Result<()> {
        if record.is_overtime() && self.overtime_record().is_some() {
            return Err(PlanError::Other("加班記錄已存在".to_string()));
        }
        self.records.push(record);
        self.records.sort_by_key(ShiftRecord::sort_key);
        Ok(())
    }

    /// 顯示用記錄：排除月份範圍外與休息日，加班記錄恆保留
    pub fn display_records(&self) -> Vec<&ShiftRecord> {
        match self.config.plan_month() {
            Ok(month) => self
                .records
                .iter()
                .filter(|r| r.is_overtime() || month.is_display_day(r.day))
                .collect(),
            Err(_) => self.records.iter().collect(),
        }
    }

    /// 指派班次人員
    ///
    /// 未知成員靜默剔除（引用清理），重複 ID 去重，人數上限
    /// `MAX_CREW`。
    pub fn assign_manpower(&mut self, record_id: &str, ids: Vec<u32>) -> Result<()> {
        let mut kept: Vec<u32> = Vec::new();
        for id in ids {
            if self.roster.contains(id) && !kept.contains(&id) {
                kept.push(id);
            }
        }
        kept.truncate(MAX_CREW);
        self.record_mut(record_id)?.manpower_ids = kept;
        Ok(())
    }

    /// 移除名冊成員並清理所有引用
    ///
    /// 引用清理只移除 ID，不刪除引用它的記錄。
    pub fn remove_worker(&mut self, worker_id: u32) -> Result<()> {
        if !self.roster.remove(worker_id) {
            return Err(PlanError::WorkerNotFound(worker_id));
        }
        for record in &mut self.records {
            record.manpower_ids.retain(|&id| id != worker_id);
        }
        Ok(())
    }
}
