//! Meeting scheduler. Bookings are not stored anywhere.

use super::Tool;

/// Confirmation returned for every scheduling request.
pub const CONFIRMATION: &str = "Meeting scheduled successfully for tomorrow at 11 AM.";

#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler;

impl Tool for Scheduler {
    fn name(&self) -> &'static str {
        "scheduler"
    }

    fn description(&self) -> &'static str {
        "Schedule meetings or appointments"
    }

    fn run(&self, _query: &str) -> String {
        CONFIRMATION.into()
    }
}
