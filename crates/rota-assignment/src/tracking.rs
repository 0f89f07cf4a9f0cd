use rota_scheduling_environment::calendar::DutyDate;

/// Running per-member state for one scheduling run. Built fresh on every
/// invocation and dropped with it; nothing in here survives a run, which
/// is what makes concurrent runs over different inputs independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackingState {
    /// Points accumulated during this run. Only ever grows.
    pub session_points: f64,
    pub shifts_this_week: u32,
    pub shifts_this_month: u32,
    /// Diagnostic only; scoring does not consume it.
    pub last_assigned_date: Option<DutyDate>,
}

impl TrackingState {
    pub fn record_assignment(&mut self, points_value: f64, date: DutyDate) {
        self.session_points += points_value;
        self.shifts_this_week += 1;
        self.shifts_this_month += 1;
        self.last_assigned_date = Some(date);
    }

    pub fn reset_week(&mut self) {
        self.shifts_this_week = 0;
    }

    pub fn reset_month(&mut self) {
        self.shifts_this_month = 0;
    }
}
