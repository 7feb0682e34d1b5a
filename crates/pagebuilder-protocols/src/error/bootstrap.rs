//! Bootstrap errors.
//!
//! Any of these aborts application startup.

use thiserror::Error;

use super::{LocaleError, RealtimeError, RegistryError, StateError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    #[error("Registry configuration error: {0}")]
    Registry(#[from] RegistryError),

    #[error("State registration error: {0}")]
    State(#[from] StateError),

    #[error("Locale merge error: {0}")]
    Locale(#[from] LocaleError),

    #[error("Realtime registration error: {0}")]
    Realtime(#[from] RealtimeError),

    #[error("Module already installed: {0}")]
    ModuleAlreadyInstalled(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::Namespace;

    #[test]
    fn test_from_registry_error() {
        let err: BootstrapError = RegistryError::DuplicateNamespace(Namespace::Element).into();
        assert!(matches!(err, BootstrapError::Registry(_)));
        assert!(err.to_string().contains("element"));
    }

    #[test]
    fn test_from_state_error() {
        let err: BootstrapError = StateError::DuplicateModule("page".to_string()).into();
        assert!(matches!(err, BootstrapError::State(_)));
    }

    #[test]
    fn test_all_error_variants_display() {
        let errors: Vec<BootstrapError> = vec![
            RegistryError::Frozen.into(),
            StateError::InvalidModuleName("".to_string()).into(),
            LocaleError::InvalidLocale("x".to_string()).into(),
            RealtimeError::InvalidEvent("e".to_string()).into(),
            BootstrapError::ModuleAlreadyInstalled("builder".to_string()),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
