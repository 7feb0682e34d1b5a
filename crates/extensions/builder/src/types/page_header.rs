//! Items of the page editor header bar.

use pagebuilder_protocols::{ExecutionContext, PageHeaderItemType, Registerable};

/// A button in the page header that opens a context or modal.
pub struct PageHeaderItem {
    ctx: ExecutionContext,
    key: &'static str,
    label_key: &'static str,
    icon_class: &'static str,
    component: &'static str,
}

impl PageHeaderItem {
    pub fn elements(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "elements",
            label_key: "pageHeaderItem.elements",
            icon_class: "iconoir-white-flag",
            component: "ElementsContext",
        }
    }

    pub fn data_sources(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "data_sources",
            label_key: "pageHeaderItem.dataSources",
            icon_class: "iconoir-multiple-pages-empty",
            component: "DataSourceContext",
        }
    }

    pub fn settings(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "settings",
            label_key: "pageHeaderItem.settings",
            icon_class: "iconoir-settings",
            component: "PageSettingsModal",
        }
    }
}

impl Registerable for PageHeaderItem {
    fn type_key(&self) -> &str {
        self.key
    }

    fn label(&self) -> String {
        self.ctx.t(self.label_key)
    }
}

impl PageHeaderItemType for PageHeaderItem {
    fn icon_class(&self) -> &str {
        self.icon_class
    }

    fn component(&self) -> &str {
        self.component
    }
}
