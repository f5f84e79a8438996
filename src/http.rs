use crate::backend::BookingBackend;
use crate::error::ClientError;
use crate::types::{
    Appointment, AvailabilitySlot, AvatarUpload, NewAppointment, ProfileUpdate, Provider, User,
};
use chrono::{Datelike, NaiveDate};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize)]
struct DayQuery {
    year: i32,
    month: u32,
    day: u32,
}

/// Error body returned by the booking service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: Url,
    client: Client,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|err| ClientError::Http(format!("{base_url}: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Http(format!("{base_url} cannot be a base URL")));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ClientError::Http(err.to_string()))?;

        Ok(Self {
            base_url,
            client,
            token,
        })
    }

    /// Appends `segments` to the base URL, each percent-encoded as a single
    /// path segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let request = self.client.request(method, self.url(segments));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn map_reqwest_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Connection(self.base_url.to_string())
        } else if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else {
            ClientError::Http(err.to_string())
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|err| self.map_reqwest_error(err))?;

        let status = response.status();
        debug!(url = %response.url(), %status, "Booking service responded");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|error| error.message)
                .unwrap_or(body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|err| self.map_reqwest_error(err))
    }
}

impl BookingBackend for HttpBackend {
    async fn providers(&self) -> Result<Vec<Provider>, ClientError> {
        self.send(self.request(Method::GET, &["providers"])).await
    }

    async fn day_availability(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, ClientError> {
        let query = DayQuery {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        };
        let request = self
            .request(Method::GET, &["providers", provider_id, "day-availability"])
            .query(&query);
        let slots: Vec<AvailabilitySlot> = self.send(request).await?;

        if let Some(slot) = slots.iter().find(|slot| slot.hour > 23) {
            warn!(provider_id, hour = slot.hour, "Availability contains an invalid hour");
            return Err(ClientError::InvalidResponse(format!(
                "hour {} is not an hour of the day",
                slot.hour
            )));
        }
        Ok(slots)
    }

    async fn create_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, ClientError> {
        self.send(self.request(Method::POST, &["appointments"]).json(appointment))
            .await
    }

    async fn profile(&self) -> Result<User, ClientError> {
        self.send(self.request(Method::GET, &["profile"])).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ClientError> {
        self.send(self.request(Method::PUT, &["profile"]).json(update))
            .await
    }

    async fn update_avatar(&self, avatar: AvatarUpload) -> Result<User, ClientError> {
        let part = Part::bytes(avatar.bytes)
            .file_name(avatar.file_name)
            .mime_str(avatar.mime)
            .map_err(|err| ClientError::Http(err.to_string()))?;
        let form = Form::new().part("avatar", part);

        self.send(self.request(Method::PATCH, &["users", "avatar"]).multipart(form))
            .await
    }
}
