//! 計劃月份日曆

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

/// 計劃月份
///
/// 界定記錄的有效日期範圍與每週休息日。範圍外或休息日的記錄
/// 只從顯示與彙總視圖排除，底層序列不刪除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMonth {
    /// 年份
    pub year: i32,

    /// 月份（1-12）
    pub month: u32,

    days: u32,
    off_weekday: Option<Weekday>,
}

impl PlanMonth {
    /// 創建計劃月份
    pub fn new(year: i32, month: u32, off_weekday: Option<Weekday>) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| PlanError::InvalidMonth(format!("{year}-{month}")))?;
        // 下月首日的前一天即本月最後一天
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| PlanError::InvalidMonth(format!("{year}-{month}")))?;
        let days = (next_first - first).num_days() as u32;

        Ok(Self {
            year,
            month,
            days,
            off_weekday,
        })
    }

    /// 當月天數
    pub fn days(&self) -> u32 {
        self.days
    }

    /// 日期是否落在本月範圍內
    pub fn contains(&self, day: u32) -> bool {
        (1..=self.days).contains(&day)
    }

    /// 取得當月某日的完整日期
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// 是否為每週休息日
    pub fn is_off_day(&self, day: u32) -> bool {
        match (self.off_weekday, self.date(day)) {
            (Some(off), Some(date)) => date.weekday() == off,
            _ => false,
        }
    }

    /// 是否納入顯示與彙總（範圍內且非休息日）
    pub fn is_display_day(&self, day: u32) -> bool {
        self.contains(day) && !self.is_off_day(day)
    }

    /// 月份標籤（YYYY-MM）
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2026, 8, 31)]
    #[case(2026, 2, 28)]
    #[case(2028, 2, 29)] // 閏年
    #[case(2026, 12, 31)] // 跨年
    fn test_month_lengths(#[case] year: i32, #[case] month: u32, #[case] days: u32) {
        assert_eq!(PlanMonth::new(year, month, None).unwrap().days(), days);
    }

    #[test]
    fn test_invalid_month() {
        assert!(PlanMonth::new(2026, 0, None).is_err());
        assert!(PlanMonth::new(2026, 13, None).is_err());
    }

    #[test]
    fn test_contains_bounds() {
        let month = PlanMonth::new(2026, 2, None).unwrap();
        assert!(month.contains(1));
        assert!(month.contains(28));
        assert!(!month.contains(0));
        assert!(!month.contains(29));
    }

    #[test]
    fn test_off_weekday_exclusion() {
        // 2026-08-02 為週日
        let month = PlanMonth::new(2026, 8, Some(Weekday::Sun)).unwrap();

        assert!(month.is_off_day(2));
        assert!(!month.is_off_day(3));
        assert!(!month.is_display_day(2));
        assert!(month.is_display_day(3));

        // 範圍外的日子不算休息日，但也不納入顯示
        assert!(!month.is_off_day(40));
        assert!(!month.is_display_day(40));
    }

    #[test]
    fn test_label() {
        let month = PlanMonth::new(2026, 8, None).unwrap();
        assert_eq!(month.label(), "2026-08");
    }
}
