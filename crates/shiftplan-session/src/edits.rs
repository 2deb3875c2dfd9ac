//! 編輯指令與輸入收斂

use rust_decimal::Decimal;
use shiftplan_core::{ProductionPlan, RecordStatus, Result};

/// 對單筆記錄的編輯指令
///
/// 負值輸入一律維持原值（不報錯），與外部輸入層的收斂規則
/// 一致。
#[derive(Debug, Clone)]
pub enum EditCommand {
    /// 設置實際產出；None 表示清除回報（回到視同目標產出）
    SetActualPcs { id: String, pcs: Option<i64> },

    /// 設置班次狀態
    SetStatus { id: String, status: RecordStatus },

    /// 設置備註
    SetNotes { id: String, notes: String },

    /// 設置實際生產工時
    SetActualHours { id: String, hours: Decimal },

    /// 設置本班交付量
    SetDelivery { id: String, delivery: i64 },

    /// 設置人員配置（未知成員靜默剔除）
    SetManpower { id: String, ids: Vec<u32> },
}

impl EditCommand {
    /// 套用到計劃；僅在記錄不存在時返回錯誤
    pub(crate) fn apply_to(self, plan: &mut ProductionPlan) -> Result<()> {
        match self {
            EditCommand::SetActualPcs { id, pcs } => {
                let record = plan.record_mut(&id)?;
                match pcs {
                    Some(value) if value < 0 => {} // 負值維持原值
                    other => record.pcs = other,
                }
            }
            EditCommand::SetStatus { id, status } => {
                plan.record_mut(&id)?.status = status;
            }
            EditCommand::SetNotes { id, notes } => {
                plan.record_mut(&id)?.notes = notes;
            }
            EditCommand::SetActualHours { id, hours } => {
                let record = plan.record_mut(&id)?;
                if hours >= Decimal::ZERO {
                    record.actual_hours = hours;
                }
            }
            EditCommand::SetDelivery { id, delivery } => {
                let record = plan.record_mut(&id)?;
                if delivery >= 0 {
                    record.delivery = delivery;
                }
            }
            EditCommand::SetManpower { id, ids } => {
                plan.assign_manpower(&id, ids)?;
            }
        }
        Ok(())
    }
}

/// 外部文字輸入收斂為件數：非數字 → 0，負值 → 維持原值
pub fn coerce_pcs(raw: &str, prior: i64) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(value) if value < 0 => prior,
        Ok(value) => value,
        Err(_) => 0,
    }
}

/// 外部文字輸入收斂為工時：非數字 → 0，負值 → 維持原值
pub fn coerce_hours(raw: &str, prior: Decimal) -> Decimal {
    match raw.trim().parse::<Decimal>() {
        Ok(value) if value < Decimal::ZERO => prior,
        Ok(value) => value,
        Err(_) => Decimal::ZERO,
    }
}
