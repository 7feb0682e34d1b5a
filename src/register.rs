//! Module installation for the page builder host.

use anyhow::{bail, Context};
use tracing::{info, warn};

use pagebuilder_builder::BuilderModule;
use pagebuilder_config::{Config, ConfigValidator};
use pagebuilder_core::HostApp;
use pagebuilder_protocols::{AppInfo, EnvironmentFlags, Module};

/// Build a host from `config`, install the enabled modules and, unless
/// disabled, freeze the registry.
pub(crate) fn build_host(config: &Config) -> anyhow::Result<HostApp> {
    let validation = ConfigValidator::validate(config)?;
    for warning in &validation.warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }
    validation.into_error().context("Invalid configuration")?;

    let app = AppInfo {
        name: config.app.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        public_url: config.app.public_url.clone(),
    };
    let env = EnvironmentFlags {
        dev: config.environment.dev,
        feature_flags: config.environment.feature_flags.clone(),
    };

    let host = HostApp::new(app, env, &config.locale.active)?;
    for name in &config.modules.enabled {
        let module = create_module(name, config)?;
        host.install(module.as_ref())
            .with_context(|| format!("Failed to bootstrap module {}", name))?;
    }

    if config.registry.freeze_after_startup {
        host.finish_startup();
    } else {
        info!("Registry left writable after startup");
    }
    Ok(host)
}

fn create_module(name: &str, config: &Config) -> anyhow::Result<Box<dyn Module>> {
    match name {
        "builder" => Ok(Box::new(
            BuilderModule::new().with_merge_locales(config.locale.merge_builder_locales),
        )),
        other => bail!("Unknown module: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebuilder_protocols::Namespace;

    #[test]
    fn test_build_host_default_config() {
        let host = build_host(&Config::default()).unwrap();
        assert_eq!(host.installed_modules(), vec!["builder"]);
        assert!(host.registry().is_frozen());
        assert!(host.registry().has(&Namespace::Device, "tablet"));
    }

    #[test]
    fn test_build_host_without_freeze() {
        let mut config = Config::default();
        config.registry.freeze_after_startup = false;
        let host = build_host(&config).unwrap();
        assert!(!host.registry().is_frozen());
    }

    #[test]
    fn test_build_host_unknown_module() {
        let mut config = Config::default();
        config.modules.enabled = vec!["shop".to_string()];
        assert!(build_host(&config).is_err());
    }

    #[test]
    fn test_build_host_invalid_config() {
        let mut config = Config::default();
        config.app.public_url = "nowhere".to_string();
        assert!(build_host(&config).is_err());
    }

    #[test]
    fn test_build_host_uses_locale_setting() {
        let mut config = Config::default();
        config.locale.merge_builder_locales = false;
        let host = build_host(&config).unwrap();
        let heading = host.registry().element("heading").unwrap();
        assert_eq!(heading.label(), "elementType.heading");
    }
}
