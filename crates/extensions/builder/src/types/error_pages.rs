//! Error pages.

use pagebuilder_protocols::{ErrorContext, ErrorPageType, ExecutionContext, Registerable};

/// Route prefix of pages served by a published site.
const PUBLIC_SITE_ROUTE_PREFIX: &str = "application-builder-page";

/// Error page shown by published builder sites.
pub struct PublicSiteErrorPageType {
    ctx: ExecutionContext,
}

impl PublicSiteErrorPageType {
    pub fn new(ctx: ExecutionContext) -> Self {
        Self { ctx }
    }
}

impl Registerable for PublicSiteErrorPageType {
    fn type_key(&self) -> &str {
        "public_site"
    }

    fn label(&self) -> String {
        self.ctx.t("errorPage.publicSite")
    }

    fn order(&self) -> i32 {
        10
    }
}

impl ErrorPageType for PublicSiteErrorPageType {
    fn component(&self) -> &str {
        "PublicSiteErrorPage"
    }

    fn is_applicable(&self, error: &ErrorContext) -> bool {
        error
            .route_name
            .as_deref()
            .is_some_and(|route| route.starts_with(PUBLIC_SITE_ROUTE_PREFIX))
    }
}
