//! Localization errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Invalid locale code: {0:?}")]
    InvalidLocale(String),

    #[error("Invalid messages for locale {locale}: {message}")]
    InvalidMessages { locale: String, message: String },
}
