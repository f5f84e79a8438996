use crate::backend::BookingBackend;
use crate::messages::{Alert, Locale};
use crate::navigation::{Navigation, Route};
use crate::selection::Selection;
use crate::types::NewAppointment;
use chrono::{FixedOffset, TimeZone};
use tracing::{error, info};

#[derive(Clone)]
pub struct AppointmentSubmitter<B: BookingBackend> {
    backend: B,
    offset: FixedOffset,
    locale: Locale,
}

impl<B: BookingBackend> AppointmentSubmitter<B> {
    pub fn new(backend: B, offset: FixedOffset, locale: Locale) -> Self {
        Self {
            backend,
            offset,
            locale,
        }
    }

    /// Request body for `selection`, anchored in the configured offset.
    pub fn payload(&self, selection: &Selection) -> Option<NewAppointment> {
        let time = selection.appointment_time()?;
        let date = self.offset.from_local_datetime(&time).single()?;
        Some(NewAppointment {
            provider_id: selection.provider_id.clone(),
            date,
        })
    }

    /// Books `selection`. On success navigates to the confirmation with the
    /// booked time; on failure returns an alert and nothing is retried.
    pub async fn submit(&self, selection: &Selection) -> Result<Navigation, Alert> {
        let Some(appointment) = self.payload(selection) else {
            error!(?selection, "Selection does not name a valid time");
            return Err(self.locale.appointment_failed());
        };

        match self.backend.create_appointment(&appointment).await {
            Ok(created) => {
                info!(id = %created.id, date = %created.date, "Appointment created");
                Ok(Navigation::Push(Route::AppointmentCreated {
                    date: appointment.date.timestamp_millis(),
                }))
            }
            Err(err) => {
                error!(?err, provider_id = %appointment.provider_id, "Failed to create appointment");
                Err(self.locale.appointment_failed())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testutils::MockBookingBackend;
    use chrono::NaiveDate;
    use std::sync::atomic::Ordering;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn selection(hour: u32) -> Selection {
        Selection {
            provider_id: "P1".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            hour,
        }
    }

    #[test]
    fn test_payload() {
        let submitter = AppointmentSubmitter::new(MockBookingBackend::new(), utc(), Locale::En);
        let payload = submitter.payload(&selection(14)).unwrap();

        assert_eq!(payload.provider_id, "P1");
        assert_eq!(
            payload.date.naive_local(),
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap()
        );
        assert_eq!(payload.date.to_rfc3339(), "2024-05-01T14:00:00+00:00");
    }

    #[test]
    fn test_payload_keeps_wall_clock_in_offset() {
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        let submitter = AppointmentSubmitter::new(MockBookingBackend::new(), brasilia, Locale::En);
        let payload = submitter.payload(&selection(9)).unwrap();

        assert_eq!(payload.date.to_rfc3339(), "2024-05-01T09:00:00-03:00");
    }

    #[tokio::test]
    async fn test_submit_navigates_to_confirmation() {
        let backend = MockBookingBackend::new();
        let submitter = AppointmentSubmitter::new(backend.clone(), utc(), Locale::En);

        let navigation = submitter.submit(&selection(14)).await.unwrap();

        let expected = submitter.payload(&selection(14)).unwrap();
        assert_eq!(
            navigation,
            Navigation::Push(Route::AppointmentCreated {
                date: expected.date.timestamp_millis()
            })
        );
        assert_eq!(
            backend.0.created_appointments.lock().unwrap().as_slice(),
            &[expected]
        );
    }

    #[tokio::test]
    async fn test_submit_with_unselected_hour_is_permitted() {
        let backend = MockBookingBackend::new();
        let submitter = AppointmentSubmitter::new(backend.clone(), utc(), Locale::En);

        submitter.submit(&selection(0)).await.unwrap();
        assert_eq!(
            backend
                .0
                .calls_to_create_appointment
                .load(Ordering::SeqCst),
            1
        );
    }

    #[tokio::test]
    async fn test_failed_submit_alerts_without_retry() {
        let backend = MockBookingBackend::new();
        backend.0.success.store(false, Ordering::SeqCst);
        let submitter = AppointmentSubmitter::new(backend.clone(), utc(), Locale::PtBr);

        let alert = submitter.submit(&selection(14)).await.unwrap_err();

        assert_eq!(alert, Locale::PtBr.appointment_failed());
        assert_eq!(
            backend
                .0
                .calls_to_create_appointment
                .load(Ordering::SeqCst),
            1
        );
    }

    #[tokio::test]
    async fn test_invalid_hour_is_not_sent() {
        let backend = MockBookingBackend::new();
        let submitter = AppointmentSubmitter::new(backend.clone(), utc(), Locale::En);

        submitter.submit(&selection(24)).await.unwrap_err();
        assert_eq!(
            backend
                .0
                .calls_to_create_appointment
                .load(Ordering::SeqCst),
            0
        );
    }
}
