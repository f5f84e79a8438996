//! User-facing text in the supported languages.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    PtBr,
    En,
}

/// A blocking, user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl Locale {
    pub fn appointment_failed(self) -> Alert {
        match self {
            Locale::PtBr => Alert::new(
                "Erro ao criar agendamento",
                "Ocorreu um erro ao tentar criar o agendamento, tente novamente.",
            ),
            Locale::En => Alert::new(
                "Could not create appointment",
                "Something went wrong while creating the appointment, please try again.",
            ),
        }
    }

    pub fn profile_updated(self) -> Alert {
        match self {
            Locale::PtBr => Alert::new("Perfil atualizado com sucesso!", ""),
            Locale::En => Alert::new("Profile updated successfully!", ""),
        }
    }

    pub fn profile_failed(self) -> Alert {
        match self {
            Locale::PtBr => Alert::new(
                "Erro na atualização do perfil",
                "Ocorreu um erro ao atualizar seu perfil, tente novamente.",
            ),
            Locale::En => Alert::new(
                "Could not update profile",
                "Something went wrong while updating your profile, please try again.",
            ),
        }
    }

    pub fn avatar_failed(self, reason: &str) -> Alert {
        match self {
            Locale::PtBr => Alert::new("Erro ao atualizar avatar.", reason),
            Locale::En => Alert::new("Could not update avatar.", reason),
        }
    }

    pub fn morning(self) -> &'static str {
        match self {
            Locale::PtBr => "Manhã",
            Locale::En => "Morning",
        }
    }

    pub fn afternoon(self) -> &'static str {
        match self {
            Locale::PtBr => "Tarde",
            Locale::En => "Afternoon",
        }
    }

    pub fn appointment_created(self) -> &'static str {
        match self {
            Locale::PtBr => "Agendamento concluído",
            Locale::En => "Appointment booked",
        }
    }

    pub fn welcome(self, name: &str) -> String {
        match self {
            Locale::PtBr => format!("Bem vindo, {name}"),
            Locale::En => format!("Welcome, {name}"),
        }
    }

    /// Message for a failed profile form check, by field and validation code.
    pub fn field_error(self, field: &str, code: &str) -> &'static str {
        match (self, field, code) {
            (Locale::PtBr, "name", _) => "Nome obrigatório",
            (Locale::PtBr, "email", "required") => "Email obrigatório",
            (Locale::PtBr, "email", _) => "Digite um email válido",
            (Locale::PtBr, _, "min_length") => "No mínimo 6 dígitos",
            (Locale::PtBr, _, "mismatch") => "Confirmação incorreta",
            (Locale::PtBr, _, _) => "Campo obrigatório",
            (Locale::En, "name", _) => "Name is required",
            (Locale::En, "email", "required") => "E-mail is required",
            (Locale::En, "email", _) => "Enter a valid e-mail",
            (Locale::En, _, "min_length") => "At least 6 characters",
            (Locale::En, _, "mismatch") => "Confirmation does not match",
            (Locale::En, _, _) => "Required field",
        }
    }
}
