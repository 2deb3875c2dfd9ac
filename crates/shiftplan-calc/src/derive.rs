//! 衍生欄位推導

use rust_decimal::Decimal;
use serde::Serialize;
use shiftplan_core::{PlanConfig, ShiftRecord};

use crate::capacity::{floor_pcs, CapacityModel};

/// 單筆班次記錄的衍生欄位
///
/// 純輸出結構，不回寫到記錄上；重算永遠整批重新產生。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedFields {
    /// 計劃產出（pcs）
    pub planning_pcs: i64,

    /// 加班產出（pcs）
    pub overtime_pcs: i64,

    /// 目標產出 = 計劃 + 加班
    pub target_output: i64,

    /// 實際產出；未回報時視同目標產出
    pub actual_output: i64,

    /// 累計交付（全計劃起算，不按日重置）
    pub cum_delivery: i64,

    /// 累計產出（全計劃起算）
    pub cum_output: i64,

    /// 期初庫存：首筆為計劃期初庫存，其後為前一筆的實際庫存
    pub opening_stock: i64,

    /// 實際庫存 = 期初 + 實際產出 - 交付
    pub actual_stock: i64,

    /// 理論庫存 = 期初 + 目標產出（未扣交付，僅供檢核）
    pub planned_stock: i64,

    /// 節拍工時（時）= 實際產出 × 節拍 / 3600，進位至一位小數
    pub cycle_time_hours: Decimal,

    /// 工時差異 = 實際生產工時 - 節拍工時
    pub hour_variance: Decimal,

    /// 產出時間（分）= 實際產出 × 節拍 / 60
    pub time_minutes: Decimal,
}

impl DerivedFields {
    /// 報表用庫存：負值以 0 呈現（庫存鏈本身保留原值）
    pub fn reported_stock(&self) -> i64 {
        self.actual_stock.max(0)
    }
}

/// 衍生欄位計算器
///
/// 庫存公式的唯一出處：理論庫存與實際庫存是同一次推導的兩個
/// 輸出欄位，不存在第二條推導路徑。按日分組的兩班視圖也讀同
/// 一份結果（首班承接前一日晚班，等價於序列順序走訪）。
#[derive(Debug, Clone)]
pub struct FieldCalculator {
    capacity: CapacityModel,
    base_piece_time: Decimal,
    initial_stock: i64,
    default_roster_size: u32,
}

impl FieldCalculator {
    /// 從計劃配置創建
    pub fn from_config(config: &PlanConfig) -> Self {
        Self {
            capacity: CapacityModel::from_config(config),
            base_piece_time: config.base_piece_time,
            initial_stock: config.initial_stock,
            default_roster_size: config.default_roster_size,
        }
    }

    /// 記錄的有效節拍（秒/pcs），依其人員配置換算
    pub fn cycle_time_for(&self, record: &ShiftRecord) -> Decimal {
        let mut crew = record.manpower_ids.len() as u32;
        if crew == 0 {
            crew = self.default_roster_size;
        }
        self.capacity.effective_cycle_time(self.base_piece_time, crew)
    }

    /// 推導單筆記錄
    ///
    /// `prev` 為序列中前一筆的推導結果；呼叫端必須依 (day, shift)
    /// 升冪逐筆推導，累計值與庫存鏈才會正確。
    pub fn derive(&self, record: &ShiftRecord, prev: Option<&DerivedFields>) -> DerivedFields {
        let tpp = self.cycle_time_for(record);

        let planning_pcs = Self::hours_to_pcs(record.planning_hour, tpp);
        let overtime_pcs = Self::hours_to_pcs(record.overtime_hour, tpp);
        let target_output = planning_pcs + overtime_pcs;
        let actual_output = record.pcs.unwrap_or(target_output);

        let (prev_cum_delivery, prev_cum_output, opening_stock) = match prev {
            Some(p) => (p.cum_delivery, p.cum_output, p.actual_stock),
            None => (0, 0, self.initial_stock),
        };

        let cycle_time_hours =
            ceil_one_dp(Decimal::from(actual_output) * tpp / Decimal::from(3600));

        DerivedFields {
            planning_pcs,
            overtime_pcs,
            target_output,
            actual_output,
            cum_delivery: prev_cum_delivery + record.delivery,
            cum_output: prev_cum_output + actual_output,
            opening_stock,
            actual_stock: opening_stock + actual_output - record.delivery,
            planned_stock: opening_stock + target_output,
            cycle_time_hours,
            hour_variance: record.actual_hours - cycle_time_hours,
            time_minutes: Decimal::from(actual_output) * tpp / Decimal::from(60),
        }
    }

    /// 依序推導整個序列
    pub fn derive_all(&self, records: &[ShiftRecord]) -> Vec<DerivedFields> {
        let mut results: Vec<DerivedFields> = Vec::with_capacity(records.len());
        for record in records {
            let derived = self.derive(record, results.last());
            results.push(derived);
        }
        results
    }

    /// 工時換算產出：floor(時 × 3600 / 節拍)；工時或節拍非正值時為 0
    fn hours_to_pcs(hour: Decimal, tpp: Decimal) -> i64 {
        if hour <= Decimal::ZERO || tpp <= Decimal::ZERO {
            return 0;
        }
        floor_pcs(hour * Decimal::from(3600) / tpp)
    }
}

/// 無條件進位至一位小數（顯示規則）
fn ceil_one_dp(value: Decimal) -> Decimal {
    (value * Decimal::from(10)).ceil() / Decimal::from(10)
}
