use crate::availability::{partition, DaySchedule};
use crate::types::AvailabilitySlot;
use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use tracing::{debug, warn};

/// Hour used while the user has not picked one.
pub const UNSELECTED_HOUR: u32 = 0;

/// How the date picker reacts to a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatePickerMode {
    /// Dialog picker: any event closes it.
    CloseOnChange,
    /// Inline picker: stays visible until toggled.
    StayOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerEvent {
    Set(NaiveDate),
    Dismissed,
}

/// Snapshot of what gets submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub provider_id: String,
    pub date: NaiveDate,
    pub hour: u32,
}

impl Selection {
    /// The selected date at the selected hour, minutes and seconds zeroed.
    pub fn appointment_time(&self) -> Option<NaiveDateTime> {
        self.date.and_hms_opt(self.hour, 0, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub sequence: u64,
    pub provider_id: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityResponse {
    pub sequence: u64,
    pub slots: Vec<AvailabilitySlot>,
}

#[derive(Debug, Clone)]
pub struct SelectionState {
    selection: Selection,
    hour_chosen: bool,
    date_picker_visible: bool,
    date_picker_mode: DatePickerMode,
    availability: Vec<AvailabilitySlot>,
    latest_request: u64,
}

impl SelectionState {
    pub fn new(provider_id: String, today: NaiveDate, date_picker_mode: DatePickerMode) -> Self {
        Self {
            selection: Selection {
                provider_id,
                date: today,
                hour: UNSELECTED_HOUR,
            },
            hour_chosen: false,
            date_picker_visible: false,
            date_picker_mode,
            availability: vec![],
            latest_request: 0,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn hour_chosen(&self) -> bool {
        self.hour_chosen
    }

    pub fn date_picker_visible(&self) -> bool {
        self.date_picker_visible
    }

    pub fn availability(&self) -> &[AvailabilitySlot] {
        &self.availability
    }

    /// Morning and afternoon slots for the selected date.
    pub fn schedule(&self) -> DaySchedule {
        partition(&self.availability, self.selection.date)
    }

    /// Issues a request for the current provider and date, superseding
    /// every request issued before.
    pub fn request_availability(&mut self) -> AvailabilityRequest {
        self.latest_request += 1;
        AvailabilityRequest {
            sequence: self.latest_request,
            provider_id: self.selection.provider_id.clone(),
            date: self.selection.date,
        }
    }

    pub fn select_provider(&mut self, provider_id: &str) -> Option<AvailabilityRequest> {
        if self.selection.provider_id == provider_id {
            return None;
        }
        self.selection.provider_id = provider_id.to_string();
        Some(self.request_availability())
    }

    pub fn toggle_date_picker(&mut self) {
        self.date_picker_visible = !self.date_picker_visible;
    }

    /// Every confirmed date issues a request, including the one already
    /// selected. A dismissal never does.
    pub fn date_picker_changed(&mut self, event: DatePickerEvent) -> Option<AvailabilityRequest> {
        if self.date_picker_mode == DatePickerMode::CloseOnChange {
            self.date_picker_visible = false;
        }

        match event {
            DatePickerEvent::Set(date) => {
                self.selection.date = date;
                Some(self.request_availability())
            }
            DatePickerEvent::Dismissed => None,
        }
    }

    /// Returns false when `hour` is not an hour of the day.
    pub fn select_hour(&mut self, hour: u32) -> bool {
        if hour > 23 {
            warn!(hour, "Ignoring selection of an hour outside the day");
            return false;
        }
        self.selection.hour = hour;
        self.hour_chosen = true;
        true
    }

    /// Applies the response only if it answers the latest request.
    pub fn apply_availability(&mut self, response: AvailabilityResponse) -> bool {
        if response.sequence != self.latest_request {
            debug!(
                sequence = response.sequence,
                latest = self.latest_request,
                "Discarding stale availability response"
            );
            return false;
        }
        self.availability = response.slots;
        true
    }
}
