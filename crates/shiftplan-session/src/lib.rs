//! # Shiftplan Session
//!
//! 計劃會話：單一寫入者對單一計劃的全量重算管線

pub mod draft;
pub mod edits;

// Re-export 主要類型
pub use draft::CrewDraft;
pub use edits::{coerce_hours, coerce_pcs, EditCommand};

use chrono::NaiveDate;
use shiftplan_calc::{
    export_rows, Advisory, Aggregator, DerivedFields, DisruptionRecompiler, ExportRow,
    FieldCalculator, PlanTotals, ScheduleGenerator, ValidationAdvisor,
};
use shiftplan_core::{
    ManpowerRoster, PlanConfig, PlanSnapshot, ProductionPlan, Result, ShiftRecord,
};

/// 計劃會話
///
/// 擁有唯一一份生產計劃。所有修改經由 `apply` 進入，重算管線
/// （重編 → 推導 → 彙總 → 檢核）在返回前跑完；衍生狀態整體替
/// 換，不做增量修補。同一計劃的重算由 `&mut self` 天然序列化。
#[derive(Debug)]
pub struct PlanSession {
    plan: ProductionPlan,
    calc: FieldCalculator,
    derived: Vec<DerivedFields>,
    totals: PlanTotals,
    advisories: Vec<Advisory>,
}

impl PlanSession {
    /// 由交付目標生成新計劃並完成首次推導
    pub fn generate(delivery_target: i64, config: PlanConfig, roster: ManpowerRoster) -> Self {
        let records = ScheduleGenerator::generate(delivery_target, &config);
        let mut plan = ProductionPlan::new(config, roster);
        plan.replace_records(records);
        Self::from_plan(plan)
    }

    /// 接管既有計劃
    pub fn from_plan(plan: ProductionPlan) -> Self {
        let calc = FieldCalculator::from_config(&plan.config);
        let mut session = Self {
            plan,
            calc,
            derived: Vec::new(),
            totals: PlanTotals::default(),
            advisories: Vec::new(),
        };
        session.recompute();
        session
    }

    /// 載入快照
    ///
    /// 快照只存輸入狀態；這裡的重新推導必須重現存檔當下的衍生
    /// 欄位。
    pub fn from_snapshot(snapshot: &PlanSnapshot) -> Self {
        Self::from_plan(snapshot.restore())
    }

    /// 套用編輯指令並全量重算
    pub fn apply(&mut self, command: EditCommand) -> Result<()> {
        tracing::debug!(?command, "套用編輯指令");
        command.apply_to(&mut self.plan)?;
        self.recompute();
        Ok(())
    }

    /// 全量重算管線：重編 → 推導 → 彙總 → 檢核
    pub fn recompute(&mut self) {
        if DisruptionRecompiler::recompile(self.plan.records_mut(), &self.calc) {
            tracing::debug!("補產記錄已更新");
        }
        self.derived = self.calc.derive_all(self.plan.records());
        self.totals = Aggregator::totals(self.plan.records(), &self.derived);
        self.advisories =
            ValidationAdvisor::check_all(self.plan.records(), &self.derived, &self.calc);
    }

    /// 移除名冊成員並清理引用，隨後重算
    pub fn remove_worker(&mut self, worker_id: u32) -> Result<()> {
        self.plan.remove_worker(worker_id)?;
        self.recompute();
        Ok(())
    }

    /// 擷取具名快照
    pub fn snapshot(&self, name: impl Into<String>, saved_at: NaiveDate) -> PlanSnapshot {
        PlanSnapshot::capture(name, saved_at, &self.plan)
    }

    /// 匯出平面列
    pub fn export_rows(&self) -> Vec<ExportRow> {
        export_rows(
            self.plan.records(),
            &self.derived,
            &self.plan.config.shift_windows,
        )
    }

    /// 計劃（唯讀）
    pub fn plan(&self) -> &ProductionPlan {
        &self.plan
    }

    /// 記錄序列
    pub fn records(&self) -> &[ShiftRecord] {
        self.plan.records()
    }

    /// 衍生欄位（與記錄序列等長、同序）
    pub fn derived(&self) -> &[DerivedFields] {
        &self.derived
    }

    /// 彙總值
    pub fn totals(&self) -> &PlanTotals {
        &self.totals
    }

    /// 檢核建議
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }
}
