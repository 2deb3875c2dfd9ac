//! # Shiftplan Calculation Engine
//!
//! 班次排程核心計算引擎
//!
//! 推導順序固定：生成 → 逐筆推導（升冪）→ 檢核 → 彙總；任何
//! 編輯後由重編器先行，再全量重跑推導與彙總。

pub mod advisor;
pub mod aggregate;
pub mod capacity;
pub mod derive;
pub mod export;
pub mod generator;
pub mod recompile;

// Re-export 主要類型
pub use advisor::{Advisory, AdvisoryKind, ValidationAdvisor};
pub use aggregate::{Aggregator, PlanTotals};
pub use capacity::CapacityModel;
pub use derive::{DerivedFields, FieldCalculator};
pub use export::{day_groups, export_rows, DayGroup, ExportRow};
pub use generator::ScheduleGenerator;
pub use recompile::DisruptionRecompiler;
