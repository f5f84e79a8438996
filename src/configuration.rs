use crate::messages::Locale;
use crate::selection::DatePickerMode;
use chrono::FixedOffset;
use std::time::Duration;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn api_url(&self) -> String;
    fn api_token(&self) -> Option<String>;
    fn timeout(&self) -> Option<Duration>;
    fn locale(&self) -> Locale;
    fn date_picker_mode(&self) -> DatePickerMode;
    fn utc_offset(&self) -> FixedOffset;
    fn offline(&self) -> bool;
}
