//! Concrete types contributed by the builder module.

mod application;
mod devices;
mod elements;
mod error_pages;
mod jobs;
mod page_header;
mod page_side_panels;
mod settings;

use std::sync::Arc;

use pagebuilder_protocols::{ExecutionContext, Namespace, TypeEntry};

pub use application::BuilderApplicationType;
pub use devices::BuilderDevice;
pub use elements::{HeadingElementType, ParagraphElementType};
pub use error_pages::PublicSiteErrorPageType;
pub use jobs::DuplicatePageJobType;
pub use page_header::PageHeaderItem;
pub use page_side_panels::PageSidePanel;
pub use settings::BuilderSettingsPanel;

/// Every type of the module, in registration order.
pub fn declared_types(ctx: &ExecutionContext) -> Vec<(Namespace, TypeEntry)> {
    vec![
        (
            Namespace::Application,
            TypeEntry::Application(Arc::new(BuilderApplicationType::new(ctx.clone()))),
        ),
        (
            Namespace::Job,
            TypeEntry::Job(Arc::new(DuplicatePageJobType::new(ctx.clone()))),
        ),
        (
            Namespace::BuilderSettings,
            TypeEntry::BuilderSettings(Arc::new(BuilderSettingsPanel::integrations(ctx.clone()))),
        ),
        (
            Namespace::BuilderSettings,
            TypeEntry::BuilderSettings(Arc::new(BuilderSettingsPanel::theme(ctx.clone()))),
        ),
        (
            Namespace::BuilderSettings,
            TypeEntry::BuilderSettings(Arc::new(BuilderSettingsPanel::domains(ctx.clone()))),
        ),
        (
            Namespace::ErrorPage,
            TypeEntry::ErrorPage(Arc::new(PublicSiteErrorPageType::new(ctx.clone()))),
        ),
        (
            Namespace::Element,
            TypeEntry::Element(Arc::new(HeadingElementType::new(ctx.clone()))),
        ),
        (
            Namespace::Element,
            TypeEntry::Element(Arc::new(ParagraphElementType::new(ctx.clone()))),
        ),
        (
            Namespace::Device,
            TypeEntry::Device(Arc::new(BuilderDevice::desktop(ctx.clone()))),
        ),
        (
            Namespace::Device,
            TypeEntry::Device(Arc::new(BuilderDevice::tablet(ctx.clone()))),
        ),
        (
            Namespace::Device,
            TypeEntry::Device(Arc::new(BuilderDevice::smartphone(ctx.clone()))),
        ),
        (
            Namespace::PageHeaderItem,
            TypeEntry::PageHeaderItem(Arc::new(PageHeaderItem::elements(ctx.clone()))),
        ),
        (
            Namespace::PageHeaderItem,
            TypeEntry::PageHeaderItem(Arc::new(PageHeaderItem::data_sources(ctx.clone()))),
        ),
        (
            Namespace::PageHeaderItem,
            TypeEntry::PageHeaderItem(Arc::new(PageHeaderItem::settings(ctx.clone()))),
        ),
        (
            Namespace::PageSidePanel,
            TypeEntry::PageSidePanel(Arc::new(PageSidePanel::general(ctx.clone()))),
        ),
        (
            Namespace::PageSidePanel,
            TypeEntry::PageSidePanel(Arc::new(PageSidePanel::style(ctx.clone()))),
        ),
        (
            Namespace::PageSidePanel,
            TypeEntry::PageSidePanel(Arc::new(PageSidePanel::visibility(ctx.clone()))),
        ),
        (
            Namespace::PageSidePanel,
            TypeEntry::PageSidePanel(Arc::new(PageSidePanel::events(ctx.clone()))),
        ),
    ]
}
