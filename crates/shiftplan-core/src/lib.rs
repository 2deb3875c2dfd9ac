//! # Shiftplan Core
//!
//! 核心資料模型與類型定義

pub mod calendar;
pub mod config;
pub mod plan;
pub mod record;
pub mod roster;
pub mod snapshot;

// Re-export 主要類型
pub use calendar::PlanMonth;
pub use config::PlanConfig;
pub use plan::ProductionPlan;
pub use record::{RecordStatus, Shift, ShiftRecord};
pub use roster::{ManpowerRoster, Worker, MAX_CREW};
pub use snapshot::PlanSnapshot;

/// 排程引擎錯誤類型
///
/// 僅涵蓋呼叫端的真正錯誤；規格列舉的異常輸入（負值、月份範圍
/// 外的日期、失效的人員引用、無需生產的需求）都是可就地恢復的
/// 訊號，不會走到這裡。
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("找不到班次記錄: {0}")]
    RecordNotFound(String),

    #[error("找不到名冊成員: {0}")]
    WorkerNotFound(u32),

    #[error("無效的計劃月份: {0}")]
    InvalidMonth(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
