//! 排程生成器

use rust_decimal::Decimal;
use shiftplan_core::{PlanConfig, Shift, ShiftRecord};

use crate::capacity::floor_pcs;

/// 溢出記錄備註
const OVERFLOW_NOTE: &str = "加班補產以達成交付目標";

/// 排程生成器
///
/// 貪婪裝填：先填早班再填晚班，需求未盡前不留空產能；月底仍
/// 排不完的需求集中為單一加班溢出記錄。不做任何最佳化。
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// 由交付目標與配置生成初始班次序列
    ///
    /// `need = delivery_target - initial_stock`；`need <= 0` 表示庫存
    /// 已足，返回空序列（訊號，非錯誤）。
    pub fn generate(delivery_target: i64, config: &PlanConfig) -> Vec<ShiftRecord> {
        let need = delivery_target - config.initial_stock;
        if need <= 0 {
            tracing::info!(delivery_target, initial_stock = config.initial_stock, "庫存已足，無需生產");
            return Vec::new();
        }

        let tpp = config.base_piece_time;
        if tpp <= Decimal::ZERO {
            tracing::warn!("單件基準工時非正值，無法生成排程");
            return Vec::new();
        }

        let month = match config.plan_month() {
            Ok(month) => month,
            Err(err) => {
                tracing::warn!("計劃月份無效: {err}");
                return Vec::new();
            }
        };

        let mut records = Vec::new();
        let mut remaining = need;

        'days: for day in 1..=month.days() {
            if month.is_off_day(day) {
                continue;
            }
            for (slot, shift) in [Shift::First, Shift::Second].into_iter().enumerate() {
                let cap_pcs = floor_pcs(config.shift_capacity_secs[slot] / tpp);
                if cap_pcs <= 0 {
                    continue;
                }
                let alloc = cap_pcs.min(remaining);
                records.push(
                    ShiftRecord::new(day, shift)
                        .with_planning_hour(Decimal::from(alloc) * tpp / Decimal::from(3600)),
                );
                remaining -= alloc;
                if remaining <= 0 {
                    break 'days;
                }
            }
        }

        // 月底仍未排完的需求折入單一加班溢出記錄；尚無中斷，
        // 實際產出即計劃產出
        if remaining > 0 {
            records.push(
                ShiftRecord::new(month.days() + 1, Shift::Overtime)
                    .with_overtime_hour(Decimal::from(remaining) * tpp / Decimal::from(3600))
                    .with_pcs(remaining)
                    .with_notes(OVERFLOW_NOTE),
            );
            tracing::info!(remaining, "需求溢出至加班記錄");
        }

        tracing::info!(need, records = records.len(), "初始排程生成完成");
        records
    }
}
