//! # Shiftplan
//!
//! 班次生產排程計算引擎
//!
//! 由交付目標與產能模型生成整月兩班制的初始排程，為每筆班次
//! 記錄推導計劃產出、累計交付、庫存投影等衍生欄位，並在班次
//! 被標記為生產中斷時重編整個序列，以補產加班維持交付承諾。

pub use shiftplan_calc::*;
pub use shiftplan_core::*;
pub use shiftplan_session::*;
