use crate::types::AvailabilitySlot;
use chrono::NaiveDate;

const AFTERNOON_START: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSlot {
    pub hour: u32,
    pub available: bool,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    pub morning: Vec<LabeledSlot>,
    pub afternoon: Vec<LabeledSlot>,
}

/// Splits a day's slots at noon and labels each one as "HH:00" on `date`.
pub fn partition(availability: &[AvailabilitySlot], date: NaiveDate) -> DaySchedule {
    let (morning, afternoon): (Vec<_>, Vec<_>) = availability
        .iter()
        .map(|slot| LabeledSlot {
            hour: slot.hour,
            available: slot.available,
            label: hour_label(date, slot.hour),
        })
        .partition(|slot| slot.hour < AFTERNOON_START);

    DaySchedule { morning, afternoon }
}

fn hour_label(date: NaiveDate, hour: u32) -> String {
    match date.and_hms_opt(hour, 0, 0) {
        Some(datetime) => datetime.format("%H:00").to_string(),
        None => format!("{hour:02}:00"),
    }
}
