use crate::confirmation::format_appointment;
use crate::navigation::{Navigation, Route};
use crate::screens::ScreenSettings;
use tracing::warn;

pub struct AppointmentCreatedScreen {
    date: i64,
    settings: ScreenSettings,
}

impl AppointmentCreatedScreen {
    /// `date` is the navigation parameter: the booked time in epoch milliseconds.
    pub fn new(date: i64, settings: ScreenSettings) -> Self {
        Self { date, settings }
    }

    pub fn title(&self) -> &'static str {
        self.settings.locale.appointment_created()
    }

    /// Falls back to the raw timestamp when it is outside chrono's range.
    pub fn description(&self) -> String {
        format_appointment(self.date, self.settings.offset, self.settings.locale).unwrap_or_else(
            || {
                warn!(date = self.date, "Appointment date cannot be formatted");
                self.date.to_string()
            },
        )
    }

    /// Back to a fresh dashboard; the booking flow is not kept in history.
    pub fn acknowledge(&self) -> Navigation {
        Navigation::Reset(Route::Dashboard)
    }
}
