//! User-facing status text.

use serde::{Deserialize, Serialize};

/// Language of the status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Portuguese, the language of the manifest generator page.
    #[default]
    Pt,
    En,
}

/// Status messages for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub invalid_app_id: &'static str,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Pt => Self {
                invalid_app_id: "Por favor, insira um App ID válido (apenas números).",
            },
            Locale::En => Self {
                invalid_app_id: "Please enter a valid App ID (numbers only).",
            },
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
