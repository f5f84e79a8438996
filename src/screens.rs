//! Screen controllers. Each one owns its backend handle and state, and
//! answers user actions with a [`Navigation`](crate::navigation::Navigation)
//! or an [`Alert`](crate::messages::Alert).

use crate::configuration::Configuration;
use crate::messages::Locale;
use crate::selection::DatePickerMode;
use chrono::{FixedOffset, NaiveDate, Utc};

pub mod appointment_created;
pub mod create_appointment;
pub mod dashboard;
pub mod profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSettings {
    pub locale: Locale,
    pub offset: FixedOffset,
    pub date_picker_mode: DatePickerMode,
}

impl ScreenSettings {
    pub fn from_configuration<C: Configuration>(configuration: &C) -> Self {
        Self {
            locale: configuration.locale(),
            offset: configuration.utc_offset(),
            date_picker_mode: configuration.date_picker_mode(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}
