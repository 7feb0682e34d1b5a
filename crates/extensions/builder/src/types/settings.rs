//! Builder settings panels.

use pagebuilder_protocols::{BuilderSettingsType, ExecutionContext, Registerable};

/// A panel of the builder settings modal.
pub struct BuilderSettingsPanel {
    ctx: ExecutionContext,
    key: &'static str,
    label_key: &'static str,
    icon_class: &'static str,
    component: &'static str,
    order: i32,
}

impl BuilderSettingsPanel {
    pub fn integrations(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "integrations",
            label_key: "builderSettings.integrations",
            icon_class: "iconoir-ev-plug",
            component: "IntegrationSettings",
            order: 10,
        }
    }

    pub fn theme(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "theme",
            label_key: "builderSettings.theme",
            icon_class: "iconoir-fill-color",
            component: "ThemeSettings",
            order: 20,
        }
    }

    pub fn domains(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "domains",
            label_key: "builderSettings.domains",
            icon_class: "iconoir-globe",
            component: "DomainsSettings",
            order: 30,
        }
    }
}

impl Registerable for BuilderSettingsPanel {
    fn type_key(&self) -> &str {
        self.key
    }

    fn label(&self) -> String {
        self.ctx.t(self.label_key)
    }

    fn order(&self) -> i32 {
        self.order
    }
}

impl BuilderSettingsType for BuilderSettingsPanel {
    fn icon_class(&self) -> &str {
        self.icon_class
    }

    fn component(&self) -> &str {
        self.component
    }
}
