//! The builder application type.

use pagebuilder_protocols::{ApplicationType, ExecutionContext, Registerable};

/// A website built with the page builder.
pub struct BuilderApplicationType {
    ctx: ExecutionContext,
}

impl BuilderApplicationType {
    pub fn new(ctx: ExecutionContext) -> Self {
        Self { ctx }
    }
}

impl Registerable for BuilderApplicationType {
    fn type_key(&self) -> &str {
        "builder"
    }

    fn label(&self) -> String {
        self.ctx.t("applicationType.builder")
    }
}

impl ApplicationType for BuilderApplicationType {
    fn icon_class(&self) -> &str {
        "iconoir-app-window"
    }

    fn select_route(&self) -> &str {
        "builder-page"
    }

    fn default_name(&self) -> String {
        self.ctx.t("applicationType.builderDefaultName")
    }
}
