//! 班次記錄模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 班別
///
/// `Overtime` 是整張計劃唯一的溢出／補產班，同時作為補產記錄的
/// 識別標記。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    /// 第一班
    First,
    /// 第二班
    Second,
    /// 加班班（溢出／補產）
    Overtime,
}

impl Shift {
    /// 班別代碼（記錄 ID 與匯出用）
    pub fn code(&self) -> &'static str {
        match self {
            Shift::First => "1",
            Shift::Second => "2",
            Shift::Overtime => "OT",
        }
    }

    /// 同一天內的排序權重：第一班先於第二班，加班班最後
    pub fn order(&self) -> u8 {
        match self {
            Shift::First => 1,
            Shift::Second => 2,
            Shift::Overtime => 3,
        }
    }
}

/// 班次狀態
///
/// 重編時只有 `Disrupted` 觸發補產，其餘狀態原樣通過。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    /// 正常
    Normal,
    /// 生產中斷（實際產出低於目標）
    Disrupted,
    /// 已完成
    Completed,
}

impl RecordStatus {
    /// 顯示用標籤
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Normal => "正常",
            RecordStatus::Disrupted => "生產中斷",
            RecordStatus::Completed => "已完成",
        }
    }
}

/// 班次記錄（單一班次的計劃與實績）
///
/// 衍生欄位（計劃產出、累計值、庫存投影）不存放在記錄上，
/// 由計算層另行推導。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// 記錄ID（由 day + shift 導出，全計劃唯一）
    pub id: String,

    /// 日（月內 1 起算）
    pub day: u32,

    /// 班別
    pub shift: Shift,

    /// 計劃工時（時）
    pub planning_hour: Decimal,

    /// 加班工時（時）
    pub overtime_hour: Decimal,

    /// 本班應交付量（pcs）
    pub delivery: i64,

    /// 人員配置（名冊成員 ID，0–6 人，有序）
    pub manpower_ids: Vec<u32>,

    /// 實際產出（pcs）；None 表示尚未回報，視同目標產出
    pub pcs: Option<i64>,

    /// 班次狀態
    pub status: RecordStatus,

    /// 實際生產工時（時）
    pub actual_hours: Decimal,

    /// 備註
    pub notes: String,
}

impl ShiftRecord {
    /// 由日與班別導出記錄 ID
    pub fn record_id(day: u32, shift: Shift) -> String {
        format!("{:02}-{}", day, shift.code())
    }

    /// 創建新的班次記錄
    pub fn new(day: u32, shift: Shift) -> Self {
        Self {
            id: Self::record_id(day, shift),
            day,
            shift,
            planning_hour: Decimal::ZERO,
            overtime_hour: Decimal::ZERO,
            delivery: 0,
            manpower_ids: Vec::new(),
            pcs: None,
            status: RecordStatus::Normal,
            actual_hours: Decimal::ZERO,
            notes: String::new(),
        }
    }

    /// 建構器模式：設置計劃工時
    pub fn with_planning_hour(mut self, hour: Decimal) -> Self {
        self.planning_hour = hour;
        self
    }

    /// 建構器模式：設置加班工時
    pub fn with_overtime_hour(mut self, hour: Decimal) -> Self {
        self.overtime_hour = hour;
        self
    }

    /// 建構器模式：設置交付量
    pub fn with_delivery(mut self, delivery: i64) -> Self {
        self.delivery = delivery;
        self
    }

    /// 建構器模式：設置實際產出
    pub fn with_pcs(mut self, pcs: i64) -> Self {
        self.pcs = Some(pcs);
        self
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: RecordStatus) -> Self {
        self.status = status;
        self
    }

    /// 建構器模式：設置人員配置
    pub fn with_manpower(mut self, ids: Vec<u32>) -> Self {
        self.manpower_ids = ids;
        self
    }

    /// 建構器模式：設置備註
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// 全計劃排序鍵：(日, 班別)
    pub fn sort_key(&self) -> (u32, u8) {
        (self.day, self.shift.order())
    }

    /// 是否為加班（溢出／補產）記錄
    pub fn is_overtime(&self) -> bool {
        self.shift == Shift::Overtime
    }
}
