use crate::messages::Locale;
use chrono::{DateTime, Datelike, FixedOffset, Timelike};

const PT_BR_WEEKDAYS: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Long-form description of an appointment time given in epoch
/// milliseconds. `None` if the timestamp is out of range.
pub fn format_appointment(timestamp_millis: i64, offset: FixedOffset, locale: Locale) -> Option<String> {
    let datetime = DateTime::from_timestamp_millis(timestamp_millis)?.with_timezone(&offset);
    Some(format_datetime(&datetime, locale))
}

pub fn format_datetime(datetime: &DateTime<FixedOffset>, locale: Locale) -> String {
    match locale {
        Locale::PtBr => {
            let weekday = PT_BR_WEEKDAYS[datetime.weekday().num_days_from_monday() as usize];
            let month = PT_BR_MONTHS[datetime.month0() as usize];
            capitalize(&format!(
                "{weekday}, dia {:02} de {month} de {} às {:02}:{:02}h",
                datetime.day(),
                datetime.year(),
                datetime.hour(),
                datetime.minute(),
            ))
        }
        Locale::En => datetime.format("%A, %B %d, %Y at %H:%M").to_string(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
