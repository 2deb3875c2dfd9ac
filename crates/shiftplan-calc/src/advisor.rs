//! 規則檢核建議

use rust_decimal::Decimal;
use serde::Serialize;
use shiftplan_core::ShiftRecord;

use crate::derive::{DerivedFields, FieldCalculator};

/// 建議類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdvisoryKind {
    /// 庫存已足以涵蓋本班交付
    StockSufficient,

    /// 可用工時不足
    InsufficientTime,
}

/// 檢核建議
///
/// 僅供提示；不阻斷生成、推導或重編。
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    /// 類別
    pub kind: AdvisoryKind,

    /// 記錄ID
    pub record_id: String,

    /// 提示訊息
    pub message: String,
}

/// 無狀態規則檢核器
pub struct ValidationAdvisor;

impl ValidationAdvisor {
    /// 檢核單筆記錄；兩條規則獨立評估，可同時成立
    pub fn check(
        record: &ShiftRecord,
        derived: &DerivedFields,
        cycle_time: Decimal,
    ) -> Vec<Advisory> {
        let mut advisories = Vec::new();

        // 規則一：庫存已足以涵蓋本班交付，無需生產
        if record.delivery > 0 && derived.actual_stock >= record.delivery {
            advisories.push(Advisory {
                kind: AdvisoryKind::StockSufficient,
                record_id: record.id.clone(),
                message: format!(
                    "庫存 {} 已足以涵蓋交付 {}，本班無需生產",
                    derived.actual_stock, record.delivery
                ),
            });
        }

        // 規則二：時間預算不足以涵蓋「交付 - 庫存 + 實際產出」
        let available_secs =
            (record.planning_hour + record.overtime_hour) * Decimal::from(3600);
        let required_pcs = record.delivery - derived.actual_stock + derived.actual_output;
        let required_secs = Decimal::from(required_pcs) * cycle_time;
        if available_secs < required_secs {
            advisories.push(Advisory {
                kind: AdvisoryKind::InsufficientTime,
                record_id: record.id.clone(),
                message: format!(
                    "可用工時 {available_secs} 秒不足，需求工時 {required_secs} 秒"
                ),
            });
        }

        advisories
    }

    /// 檢核整個序列
    pub fn check_all(
        records: &[ShiftRecord],
        derived: &[DerivedFields],
        calc: &FieldCalculator,
    ) -> Vec<Advisory> {
        records
            .iter()
            .zip(derived)
            .flat_map(|(record, fields)| Self::check(record, fields, calc.cycle_time_for(record)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftplan_core::{PlanConfig, Shift};

    fn calc(initial_stock: i64) -> FieldCalculator {
        FieldCalculator::from_config(&PlanConfig::new(Decimal::from(257), initial_stock, 2026, 8))
    }

    #[test]
    fn test_stock_sufficient_advisory() {
        // 期初 500、產出 56、交付 100 → 庫存 456 ≥ 100
        let record = ShiftRecord::new(1, Shift::First)
            .with_planning_hour(Decimal::from(4))
            .with_delivery(100);
        let calc = calc(500);
        let derived = calc.derive(&record, None);

        let advisories = ValidationAdvisor::check(&record, &derived, calc.cycle_time_for(&record));
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].kind, AdvisoryKind::StockSufficient);
        assert_eq!(advisories[0].record_id, "01-1");
    }

    #[test]
    fn test_no_advisory_for_zero_delivery() {
        let record = ShiftRecord::new(1, Shift::First).with_planning_hour(Decimal::from(4));
        let calc = calc(500);
        let derived = calc.derive(&record, None);

        assert!(ValidationAdvisor::check(&record, &derived, calc.cycle_time_for(&record))
            .is_empty());
    }

    #[test]
    fn test_insufficient_time_advisory() {
        // 1 時預算，交付 600、期初 0：需求工時遠超預算
        let record = ShiftRecord::new(1, Shift::First)
            .with_planning_hour(Decimal::from(1))
            .with_delivery(600);
        let calc = calc(0);
        let derived = calc.derive(&record, None);

        let advisories = ValidationAdvisor::check(&record, &derived, calc.cycle_time_for(&record));
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].kind, AdvisoryKind::InsufficientTime);
    }

    #[test]
    fn test_rules_are_non_exclusive() {
        // 庫存足以涵蓋交付（500+150-300=350 ≥ 300），但工時預算為 0
        let record = ShiftRecord::new(1, Shift::First)
            .with_delivery(300)
            .with_pcs(150);
        let calc = calc(500);
        let derived = calc.derive(&record, None);

        let advisories = ValidationAdvisor::check(&record, &derived, calc.cycle_time_for(&record));
        let kinds: Vec<AdvisoryKind> = advisories.iter().map(|a| a.kind).collect();
        assert!(kinds.contains(&AdvisoryKind::StockSufficient));
        assert!(kinds.contains(&AdvisoryKind::InsufficientTime));
    }
}
