//! 產能模型

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shiftplan_core::PlanConfig;

/// 件數取整
///
/// Decimal 除法在 28 位有效數字處收斂，真值為整數的結果可能落
/// 在邊界下方一個極小量；先作小數第 9 位收斂再向下取整。
pub(crate) fn floor_pcs(value: Decimal) -> i64 {
    value.round_dp(9).floor().to_i64().unwrap_or(0)
}

/// 產能模型
///
/// 由單件基準工時與人員數換算有效節拍與時產。件數一律向下
/// 取整，不回報小數件；任何輸入組合下不返回負值或無窮大。
#[derive(Debug, Clone, Copy)]
pub struct CapacityModel {
    pieces_per_person_hour: Decimal,
}

impl CapacityModel {
    /// 創建產能模型
    pub fn new(pieces_per_person_hour: Decimal) -> Self {
        Self {
            pieces_per_person_hour,
        }
    }

    /// 從計劃配置創建
    pub fn from_config(config: &PlanConfig) -> Self {
        Self::new(config.pieces_per_person_hour)
    }

    /// 有效節拍（秒/pcs）
    ///
    /// 有人員配置時為 3600 / (人數 × 每人時產)；無人員配置時退回
    /// 單件基準工時；兩者皆無效時為 0。
    pub fn effective_cycle_time(&self, base_piece_time: Decimal, roster_size: u32) -> Decimal {
        let rate = Decimal::from(roster_size) * self.pieces_per_person_hour;
        if roster_size > 0 && rate > Decimal::ZERO {
            Decimal::from(3600) / rate
        } else if base_piece_time > Decimal::ZERO {
            base_piece_time
        } else {
            Decimal::ZERO
        }
    }

    /// 時產（pcs/時，向下取整）
    pub fn output_per_hour(&self, base_piece_time: Decimal, roster_size: u32) -> i64 {
        let cycle = self.effective_cycle_time(base_piece_time, roster_size);
        if cycle <= Decimal::ZERO {
            return 0;
        }
        floor_pcs(Decimal::from(3600) / cycle)
    }

    /// 時間窗內產出（pcs，向下取整）
    pub fn output_over_window(
        &self,
        hours: Decimal,
        base_piece_time: Decimal,
        roster_size: u32,
    ) -> i64 {
        if hours <= Decimal::ZERO {
            return 0;
        }
        let cycle = self.effective_cycle_time(base_piece_time, roster_size);
        if cycle <= Decimal::ZERO {
            return 0;
        }
        floor_pcs(hours * Decimal::from(3600) / cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn model() -> CapacityModel {
        CapacityModel::new(Decimal::from(5))
    }

    #[test]
    fn test_effective_cycle_time_with_crew() {
        // 3 人 × 5 pcs/人/時 = 15 pcs/時 → 240 秒/pcs
        let cycle = model().effective_cycle_time(Decimal::from(257), 3);
        assert_eq!(cycle, Decimal::from(240));
    }

    #[test]
    fn test_fallback_to_base_time_without_crew() {
        let cycle = model().effective_cycle_time(Decimal::from(257), 0);
        assert_eq!(cycle, Decimal::from(257));
    }

    #[rstest]
    #[case(Decimal::ZERO, 0)]
    #[case(Decimal::from(-60), 0)]
    fn test_degenerate_inputs_yield_zero(#[case] base: Decimal, #[case] crew: u32) {
        assert_eq!(model().effective_cycle_time(base, crew), Decimal::ZERO);
        assert_eq!(model().output_per_hour(base, crew), 0);
        assert_eq!(model().output_over_window(Decimal::from(8), base, crew), 0);
    }

    #[test]
    fn test_output_per_hour_floors() {
        // 257 秒/pcs → 3600/257 = 14.007…，取 14
        assert_eq!(model().output_per_hour(Decimal::from(257), 0), 14);
        // 3 人編制 → 15 pcs/時整
        assert_eq!(model().output_per_hour(Decimal::from(257), 3), 15);
    }

    #[test]
    fn test_output_over_window_floors() {
        // 7 時 × 3600 / 257 = 98.05… → 98
        let pcs = model().output_over_window(Decimal::from(7), Decimal::from(257), 0);
        assert_eq!(pcs, 98);
    }

    #[test]
    fn test_window_round_trip_is_stable() {
        // 節拍由 7 人編制導出（非終止小數），1 小時應回到整數 35
        let pcs = model().output_over_window(Decimal::from(1), Decimal::from(257), 7);
        assert_eq!(pcs, 35);
    }

    #[test]
    fn test_negative_hours_yield_zero() {
        assert_eq!(
            model().output_over_window(Decimal::from(-2), Decimal::from(257), 3),
            0
        );
    }
}
