//! 計劃快照模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ManpowerRoster, PlanConfig, ProductionPlan, ShiftRecord};

/// 具名計劃快照
///
/// 無版本號；持久化由外部協作層負責。快照只保存輸入狀態，
/// 衍生欄位一律在載入後重新推導，確保同一份快照重現一致的
/// 結果。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    /// 快照ID
    pub id: Uuid,

    /// 快照名稱
    pub name: String,

    /// 存檔日期
    pub saved_at: NaiveDate,

    /// 生成配置
    pub config: PlanConfig,

    /// 人員名冊
    pub roster: ManpowerRoster,

    /// 班次記錄
    pub records: Vec<ShiftRecord>,
}

impl PlanSnapshot {
    /// 擷取計劃快照
    pub fn capture(name: impl Into<String>, saved_at: NaiveDate, plan: &ProductionPlan) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            saved_at,
            config: plan.config.clone(),
            roster: plan.roster.clone(),
            records: plan.records().to_vec(),
        }
    }

    /// 還原為生產計劃
    pub fn restore(&self) -> ProductionPlan {
        ProductionPlan::with_records(
            self.config.clone(),
            self.roster.clone(),
            self.records.clone(),
        )
    }
}
