//! 中斷補產重編

use shiftplan_core::{RecordStatus, Shift, ShiftRecord};

use crate::derive::FieldCalculator;

/// 補產記錄備註
const COMPENSATION_NOTE: &str = "中斷短缺補產加班";

/// 中斷補產重編器
///
/// 對狀態的處理：Normal 與 Completed 原樣通過，僅 Disrupted 觸發
/// 補產。補產量以「加班記錄自身目標 + 總短缺」絕對值寫入，而非
/// 逐次累加，因此對同一序列重複呼叫結果不變（冪等）。加班記錄
/// 本身是唯一的補產桶，不納入短缺彙總。
pub struct DisruptionRecompiler;

impl DisruptionRecompiler {
    /// 重編整個序列，返回序列是否被修改
    ///
    /// 不變量：重編後全計劃實際產出（含補產）總和不低於原計劃
    /// 目標產出總和，無論多少班次被個別中斷。
    pub fn recompile(records: &mut Vec<ShiftRecord>, calc: &FieldCalculator) -> bool {
        let derived = calc.derive_all(records);

        let mut total_shortfall: i64 = 0;
        for (record, fields) in records.iter().zip(&derived) {
            if record.status != RecordStatus::Disrupted || record.is_overtime() {
                continue;
            }
            total_shortfall += (fields.target_output - fields.actual_output).max(0);
        }

        if total_shortfall <= 0 {
            return false;
        }

        if let Some(pos) = records.iter().position(ShiftRecord::is_overtime) {
            let compensated = derived[pos].target_output + total_shortfall;
            if records[pos].pcs == Some(compensated) {
                return false;
            }
            tracing::info!(total_shortfall, compensated, "中斷短缺折入既有加班記錄");
            records[pos].pcs = Some(compensated);
        } else {
            let day = records.iter().map(|r| r.day).max().unwrap_or(0) + 1;
            tracing::info!(total_shortfall, day, "新增加班補產記錄");
            records.push(
                ShiftRecord::new(day, Shift::Overtime)
                    .with_pcs(total_shortfall)
                    .with_notes(COMPENSATION_NOTE),
            );
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use shiftplan_core::PlanConfig;

    fn calc() -> FieldCalculator {
        FieldCalculator::from_config(&PlanConfig::new(Decimal::from(257), 0, 2026, 8))
    }

    /// 目標 56 pcs 的一般班次
    fn shift_56(day: u32, shift: Shift) -> ShiftRecord {
        ShiftRecord::new(day, shift).with_planning_hour(Decimal::from(4))
    }

    #[test]
    fn test_no_disruption_is_noop() {
        let mut records = vec![shift_56(1, Shift::First), shift_56(1, Shift::Second)];
        let before = records.clone();

        assert!(!DisruptionRecompiler::recompile(&mut records, &calc()));
        assert_eq!(records, before);
    }

    #[test]
    fn test_disruption_without_shortfall_is_noop() {
        // 中斷但實際不低於目標：短缺為 0，不觸發補產
        let mut records = vec![shift_56(1, Shift::First)
            .with_pcs(60)
            .with_status(RecordStatus::Disrupted)];
        let before = records.clone();

        assert!(!DisruptionRecompiler::recompile(&mut records, &calc()));
        assert_eq!(records, before);
    }

    #[test]
    fn test_creates_compensation_record() {
        // 目標 56、實際 40 → 短缺 16
        let mut records = vec![
            shift_56(1, Shift::First)
                .with_pcs(40)
                .with_status(RecordStatus::Disrupted),
            shift_56(1, Shift::Second),
        ];

        assert!(DisruptionRecompiler::recompile(&mut records, &calc()));

        let overtime = records.last().unwrap();
        assert!(overtime.is_overtime());
        assert_eq!(overtime.day, 2);
        assert_eq!(overtime.pcs, Some(16));
        assert_eq!(overtime.notes, COMPENSATION_NOTE);

        // 補產記錄的產出時間隨實際件數推導：16 × 257 / 60 分
        let derived = calc().derive_all(&records);
        assert_eq!(
            derived.last().unwrap().time_minutes,
            Decimal::from(16 * 257) / Decimal::from(60)
        );
    }

    #[test]
    fn test_augments_existing_overflow() {
        // 既有溢出記錄自身目標 20（加班工時 20×257/3600 時）
        let mut records = vec![
            shift_56(1, Shift::First)
                .with_pcs(40)
                .with_status(RecordStatus::Disrupted),
            ShiftRecord::new(32, Shift::Overtime)
                .with_overtime_hour(Decimal::from(20 * 257) / Decimal::from(3600))
                .with_pcs(20),
        ];

        assert!(DisruptionRecompiler::recompile(&mut records, &calc()));

        // 自身目標 20 + 短缺 16 = 36
        assert_eq!(records[1].pcs, Some(36));
        let derived = calc().derive_all(&records);
        assert_eq!(
            derived[1].time_minutes,
            Decimal::from(36 * 257) / Decimal::from(60)
        );
    }

    #[test]
    fn test_recompile_is_idempotent() {
        let mut records = vec![
            shift_56(1, Shift::First)
                .with_pcs(40)
                .with_status(RecordStatus::Disrupted),
            shift_56(1, Shift::Second)
                .with_pcs(50)
                .with_status(RecordStatus::Disrupted),
        ];

        assert!(DisruptionRecompiler::recompile(&mut records, &calc()));
        let after_first = records.clone();

        // 第二次呼叫不得再疊加
        assert!(!DisruptionRecompiler::recompile(&mut records, &calc()));
        assert_eq!(records, after_first);
    }

    #[test]
    fn test_completed_passes_through() {
        let mut records = vec![
            shift_56(1, Shift::First)
                .with_pcs(40)
                .with_status(RecordStatus::Completed),
            shift_56(1, Shift::Second)
                .with_pcs(40)
                .with_status(RecordStatus::Normal),
        ];
        let before = records.clone();

        // 低於目標但非 Disrupted：不補產
        assert!(!DisruptionRecompiler::recompile(&mut records, &calc()));
        assert_eq!(records, before);
    }

    proptest! {
        /// 補產守恆：每筆短缺可補時，重編後實際總產出等於原目標總產出
        #[test]
        fn prop_compensation_conserves_output(
            shortfalls in proptest::collection::vec(0i64..56, 1..20),
        ) {
            let calc = calc();
            let mut records: Vec<ShiftRecord> = shortfalls
                .iter()
                .enumerate()
                .map(|(i, &short)| {
                    let day = (i as u32) / 2 + 1;
                    let shift = if i % 2 == 0 { Shift::First } else { Shift::Second };
                    shift_56(day, shift)
                        .with_pcs(56 - short)
                        .with_status(RecordStatus::Disrupted)
                })
                .collect();

            let target_total: i64 = calc
                .derive_all(&records)
                .iter()
                .map(|d| d.target_output)
                .sum();

            DisruptionRecompiler::recompile(&mut records, &calc);
            let actual_total: i64 = calc
                .derive_all(&records)
                .iter()
                .map(|d| d.actual_output)
                .sum();

            prop_assert_eq!(actual_total, target_total);

            // 冪等：再編一次結果不變
            let before = records.clone();
            DisruptionRecompiler::recompile(&mut records, &calc);
            prop_assert_eq!(records, before);
        }
    }
}
