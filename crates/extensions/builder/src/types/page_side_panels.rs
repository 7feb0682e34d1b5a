//! Side panel tabs for the selected element.

use pagebuilder_protocols::{ExecutionContext, PageSidePanelType, Registerable};

/// A tab of the page editor side panel.
pub struct PageSidePanel {
    ctx: ExecutionContext,
    key: &'static str,
    label_key: &'static str,
    icon_class: &'static str,
    component: &'static str,
    order: i32,
}

impl PageSidePanel {
    pub fn general(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "general",
            label_key: "pageSidePanel.general",
            icon_class: "iconoir-settings",
            component: "GeneralSidePanel",
            order: 10,
        }
    }

    pub fn style(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "style",
            label_key: "pageSidePanel.style",
            icon_class: "iconoir-design-pencil",
            component: "StyleSidePanel",
            order: 20,
        }
    }

    pub fn visibility(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "visibility",
            label_key: "pageSidePanel.visibility",
            icon_class: "iconoir-eye-empty",
            component: "VisibilitySidePanel",
            order: 30,
        }
    }

    pub fn events(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "events",
            label_key: "pageSidePanel.events",
            icon_class: "iconoir-flash",
            component: "EventsSidePanel",
            order: 40,
        }
    }
}

impl Registerable for PageSidePanel {
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

impl PageSidePanelType for PageSidePanel {
    fn icon_class(&self) -> &str {
        self.icon_class
    }

    fn component(&self) -> &str {
        self.component
    }

    fn deactivated_text(&self) -> String {
        self.ctx.t("pageSidePanel.noElementSelected")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::context;
    use serde_json::Map;
    use pagebuilder_protocols::ElementRecord;

    #[test]
    fn test_deactivated_without_selection() {
        let ctx = context(&[(
            "pageSidePanel.noElementSelected",
            "Select an element to edit its properties",
        )]);
        let panel = PageSidePanel::general(ctx);
        assert!(panel.is_deactivated(None));
        assert_eq!(
            panel.deactivated_text(),
            "Select an element to edit its properties"
        );

        let selected = ElementRecord {
            id: 1,
            page_id: 1,
            element_type: "heading".to_string(),
            order: 0,
            values: Map::new(),
        };
        assert!(!panel.is_deactivated(Some(&selected)));
    }

    #[test]
    fn test_panel_keys() {
        let ctx = context(&[]);
        let keys: Vec<String> = [
            PageSidePanel::general(ctx.clone()),
            PageSidePanel::style(ctx.clone()),
            PageSidePanel::visibility(ctx.clone()),
            PageSidePanel::events(ctx),
        ]
        .iter()
        .map(|p| p.type_key().to_string())
        .collect();
        assert_eq!(keys, vec!["general", "style", "visibility", "events"]);
    }
}
