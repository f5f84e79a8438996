use crate::availability::DaySchedule;
use crate::backend::BookingBackend;
use crate::error::ClientError;
use crate::messages::Alert;
use crate::navigation::Navigation;
use crate::screens::ScreenSettings;
use crate::selection::{
    AvailabilityRequest, AvailabilityResponse, DatePickerEvent, SelectionState,
};
use crate::submitter::AppointmentSubmitter;
use crate::types::Provider;
use chrono::NaiveDate;
use std::future::Future;
use tracing::{debug, error, warn};

pub struct CreateAppointmentScreen<B: BookingBackend> {
    backend: B,
    state: SelectionState,
    providers: Vec<Provider>,
    submitter: AppointmentSubmitter<B>,
}

impl<B: BookingBackend> CreateAppointmentScreen<B> {
    /// `date` is the day shown first, normally today.
    pub fn new(backend: B, provider_id: String, date: NaiveDate, settings: ScreenSettings) -> Self {
        Self {
            submitter: AppointmentSubmitter::new(backend.clone(), settings.offset, settings.locale),
            state: SelectionState::new(provider_id, date, settings.date_picker_mode),
            providers: vec![],
            backend,
        }
    }

    /// Loads the provider list and the first day of availability.
    pub async fn open(&mut self) -> Result<(), ClientError> {
        match self.backend.providers().await {
            Ok(providers) => self.providers = providers,
            Err(err) => error!(?err, "Failed to load providers"),
        }
        let request = self.state.request_availability();
        self.refresh(request).await
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn schedule(&self) -> DaySchedule {
        self.state.schedule()
    }

    pub async fn select_provider(&mut self, provider_id: &str) -> Result<(), ClientError> {
        match self.state.select_provider(provider_id) {
            Some(request) => self.refresh(request).await,
            None => Ok(()),
        }
    }

    pub fn toggle_date_picker(&mut self) {
        self.state.toggle_date_picker();
    }

    pub async fn change_date(&mut self, event: DatePickerEvent) -> Result<(), ClientError> {
        match self.state.date_picker_changed(event) {
            Some(request) => self.refresh(request).await,
            None => Ok(()),
        }
    }

    pub fn select_hour(&mut self, hour: u32) -> bool {
        self.state.select_hour(hour)
    }

    /// Fetch detached from the screen, so several can be in flight; only
    /// the latest one is accepted by [`Self::apply_availability`].
    pub fn fetch_availability(
        &self,
        request: AvailabilityRequest,
    ) -> impl Future<Output = Result<AvailabilityResponse, ClientError>> + Send + 'static {
        let backend = self.backend.clone();
        async move {
            let slots = backend
                .day_availability(&request.provider_id, request.date)
                .await?;
            Ok(AvailabilityResponse {
                sequence: request.sequence,
                slots,
            })
        }
    }

    pub fn apply_availability(&mut self, response: AvailabilityResponse) -> bool {
        self.state.apply_availability(response)
    }

    async fn refresh(&mut self, request: AvailabilityRequest) -> Result<(), ClientError> {
        debug!(?request, "Fetching availability");
        match self.fetch_availability(request).await {
            Ok(response) => {
                self.apply_availability(response);
                Ok(())
            }
            Err(err) => {
                error!(?err, "Failed to load availability");
                Err(err)
            }
        }
    }

    /// Submits the current selection. A failure leaves the selection as it is.
    pub async fn create_appointment(&self) -> Result<Navigation, Alert> {
        if !self.state.hour_chosen() {
            warn!(
                selection = ?self.state.selection(),
                "Submitting without an explicitly chosen hour"
            );
        }
        self.submitter.submit(self.state.selection()).await
    }

    pub fn go_back(&self) -> Navigation {
        Navigation::Back
    }
}
