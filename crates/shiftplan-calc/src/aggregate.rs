//! 全計劃彙總

use rust_decimal::Decimal;
use serde::Serialize;
use shiftplan_core::ShiftRecord;

use crate::derive::DerivedFields;

/// 全計劃彙總值
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanTotals {
    /// 總交付（pcs）
    pub delivery: i64,

    /// 總計劃產出（pcs）
    pub planning_pcs: i64,

    /// 總加班產出（pcs）
    pub overtime_pcs: i64,

    /// 總實際產出（pcs）
    pub output_actual: i64,

    /// 總實際生產工時（時）
    pub actual_hours: Decimal,
}

/// 彙總器
///
/// 逐欄位加總收到的序列；加班補產記錄與一般記錄一視同仁。
/// 月份範圍與休息日的排除由顯示投影負責，呼叫端彙總它所顯示
/// 的那份切片。
pub struct Aggregator;

impl Aggregator {
    /// 計算序列的彙總值
    pub fn totals(records: &[ShiftRecord], derived: &[DerivedFields]) -> PlanTotals {
        let mut totals = PlanTotals::default();
        for (record, fields) in records.iter().zip(derived) {
            totals.delivery += record.delivery;
            totals.planning_pcs += fields.planning_pcs;
            totals.overtime_pcs += fields.overtime_pcs;
            totals.output_actual += fields.actual_output;
            totals.actual_hours += record.actual_hours;
        }
        totals
    }
}
