//! 計劃配置模型

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::PlanMonth;
use crate::Result;

/// 生產計劃參數配置
///
/// 生成排程所需的全部輸入；原始系統散落的全域常數（每人時產、
/// 預設人數）在此成為顯式配置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// 單件基準工時（秒/pcs）
    pub base_piece_time: Decimal,

    /// 期初庫存（pcs）
    pub initial_stock: i64,

    /// 計劃年份
    pub year: i32,

    /// 計劃月份（1-12）
    pub month: u32,

    /// 兩班各自的班次時間預算（秒）
    pub shift_capacity_secs: [Decimal; 2],

    /// 每人每小時產出（pcs/人/時）
    ///
    /// 原始系統兩個呼叫點分別使用 5 與 14/3，此處統一為單一
    /// 配置值，預設 5。
    pub pieces_per_person_hour: Decimal,

    /// 無人員配置時假定的人數；0 表示直接使用單件基準工時
    pub default_roster_size: u32,

    /// 每週固定休息日；None 表示整月無休
    pub off_weekday: Option<Weekday>,

    /// 兩班的時段標籤（匯出顯示用）
    pub shift_windows: [String; 2],
}

impl PlanConfig {
    /// 創建新的計劃配置
    pub fn new(base_piece_time: Decimal, initial_stock: i64, year: i32, month: u32) -> Self {
        Self {
            base_piece_time,
            initial_stock,
            year,
            month,
            shift_capacity_secs: [Decimal::from(14400), Decimal::from(14400)],
            pieces_per_person_hour: Decimal::from(5),
            default_roster_size: 0,
            off_weekday: None,
            shift_windows: ["07:00-15:00".to_string(), "15:00-23:00".to_string()],
        }
    }

    /// 建構器模式：設置兩班的時間預算（秒）
    pub fn with_shift_capacity(mut self, secs: [Decimal; 2]) -> Self {
        self.shift_capacity_secs = secs;
        self
    }

    /// 建構器模式：設置每人時產
    pub fn with_pieces_per_person_hour(mut self, rate: Decimal) -> Self {
        self.pieces_per_person_hour = rate;
        self
    }

    /// 建構器模式：設置無人員配置時的預設人數
    pub fn with_default_roster_size(mut self, size: u32) -> Self {
        self.default_roster_size = size;
        self
    }

    /// 建構器模式：設置每週休息日
    pub fn with_off_weekday(mut self, weekday: Weekday) -> Self {
        self.off_weekday = Some(weekday);
        self
    }

    /// 建構器模式：設置班次時段標籤
    pub fn with_shift_windows(mut self, windows: [String; 2]) -> Self {
        self.shift_windows = windows;
        self
    }

    /// 取得計劃月份日曆
    pub fn plan_month(&self) -> Result<PlanMonth> {
        PlanMonth::new(self.year, self.month, self.off_weekday)
    }
}
