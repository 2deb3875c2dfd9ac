//! 匯出投影
//!
//! 供外部表格／報表層消費的平面列與按日分組視圖。試算表檔案
//! 的編碼不在此層。

use rust_decimal::Decimal;
use serde::Serialize;
use shiftplan_core::{PlanMonth, Shift, ShiftRecord};

use crate::derive::DerivedFields;

/// 平面匯出列（每筆記錄一列）
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    /// 序號（1 起算）
    pub seq: usize,

    /// 日
    pub day: u32,

    /// 班別代碼
    pub shift: &'static str,

    /// 時段標籤
    pub window: String,

    /// 狀態標籤
    pub status: &'static str,

    /// 期初庫存（負值以 0 呈現）
    pub opening_stock: i64,

    /// 交付量
    pub delivery: i64,

    /// 計劃工時
    pub planning_hour: Decimal,

    /// 加班工時
    pub overtime_hour: Decimal,

    /// 計劃產出
    pub planning_pcs: i64,

    /// 加班產出
    pub overtime_pcs: i64,

    /// 實際產出
    pub output_actual: i64,

    /// 實際庫存（負值以 0 呈現）
    pub actual_stock: i64,

    /// 實際生產工時
    pub actual_hours: Decimal,

    /// 備註
    pub notes: String,
}

/// 產生平面匯出列
pub fn export_rows(
    records: &[ShiftRecord],
    derived: &[DerivedFields],
    windows: &[String; 2],
) -> Vec<ExportRow> {
    records
        .iter()
        .zip(derived)
        .enumerate()
        .map(|(idx, (record, fields))| ExportRow {
            seq: idx + 1,
            day: record.day,
            shift: record.shift.code(),
            window: match record.shift {
                Shift::First => windows[0].clone(),
                Shift::Second => windows[1].clone(),
                Shift::Overtime => "加班".to_string(),
            },
            status: record.status.label(),
            opening_stock: fields.opening_stock.max(0),
            delivery: record.delivery,
            planning_hour: record.planning_hour,
            overtime_hour: record.overtime_hour,
            planning_pcs: fields.planning_pcs,
            overtime_pcs: fields.overtime_pcs,
            output_actual: fields.actual_output,
            actual_stock: fields.reported_stock(),
            actual_hours: record.actual_hours,
            notes: record.notes.clone(),
        })
        .collect()
}

/// 按日分組（兩班一組的顯示視圖）
#[derive(Debug, Clone)]
pub struct DayGroup {
    /// 日
    pub day: u32,

    /// 該日各記錄在序列中的索引
    pub indices: Vec<usize>,
}

/// 依日分組，套用月份範圍與休息日排除；加班記錄恆保留
///
/// 排除僅影響顯示與彙總視圖，底層序列不刪除任何記錄。索引指回
/// 原序列，分組讀取的是同一份推導結果，沒有第二條累計路徑。
pub fn day_groups(records: &[ShiftRecord], month: &PlanMonth) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        if !record.is_overtime() && !month.is_display_day(record.day) {
            continue;
        }
        match groups.last_mut() {
            Some(group) if group.day == record.day => group.indices.push(idx),
            _ => groups.push(DayGroup {
                day: record.day,
                indices: vec![idx],
            }),
        }
    }
    groups
}
