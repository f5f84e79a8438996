use crate::backend::BookingBackend;
use crate::error::ClientError;
use crate::messages::{Alert, Locale};
use crate::navigation::Navigation;
use crate::profile_form::{field_errors, FieldErrors, ProfileForm};
use crate::types::{AvatarUpload, User};
use std::path::Path;
use tracing::{debug, error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Nothing was sent; show these next to the inputs.
    Invalid(FieldErrors),
    Failed(Alert),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSaved {
    pub notice: Alert,
    pub navigation: Navigation,
}

pub struct ProfileScreen<B: BookingBackend> {
    backend: B,
    locale: Locale,
    user: User,
}

impl<B: BookingBackend> ProfileScreen<B> {
    pub async fn open(backend: B, locale: Locale) -> Result<Self, Alert> {
        match backend.profile().await {
            Ok(user) => Ok(Self {
                backend,
                locale,
                user,
            }),
            Err(err) => {
                error!(?err, "Failed to load profile");
                Err(locale.profile_failed())
            }
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Form prefilled with the current name and e-mail.
    pub fn form(&self) -> ProfileForm {
        ProfileForm {
            name: self.user.name.clone(),
            email: self.user.email.clone(),
            ..Default::default()
        }
    }

    pub async fn submit(&mut self, form: &ProfileForm) -> Result<ProfileSaved, ProfileError> {
        if let Err(errors) = form.check() {
            debug!(?errors, "Profile form rejected");
            return Err(ProfileError::Invalid(field_errors(&errors, self.locale)));
        }

        match self.backend.update_profile(&form.to_update()).await {
            Ok(user) => {
                info!(id = %user.id, "Profile updated");
                self.user = user;
                Ok(ProfileSaved {
                    notice: self.locale.profile_updated(),
                    navigation: Navigation::Back,
                })
            }
            Err(err) => {
                error!(?err, "Failed to update profile");
                Err(ProfileError::Failed(self.locale.profile_failed()))
            }
        }
    }

    pub async fn update_avatar(&mut self, path: &Path) -> Result<(), Alert> {
        let result = match read_avatar(path).await {
            Ok(avatar) => self.backend.update_avatar(avatar).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(user) => {
                info!(avatar_url = ?user.avatar_url, "Avatar updated");
                self.user = user;
                Ok(())
            }
            Err(err) => {
                error!(?err, path = %path.display(), "Failed to update avatar");
                Err(self.locale.avatar_failed(&err.to_string()))
            }
        }
    }

    pub fn go_back(&self) -> Navigation {
        Navigation::Back
    }
}

pub async fn read_avatar(path: &Path) -> Result<AvatarUpload, ClientError> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "avatar".into());
    let extension = path
        .extension()
        .map(|extension| extension.to_string_lossy().to_lowercase());
    let mime = match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };

    Ok(AvatarUpload {
        file_name,
        mime,
        bytes,
    })
}
