//! Preview devices.

use pagebuilder_protocols::{DeviceType, ExecutionContext, Registerable};

/// A viewport the editor can preview a page in.
pub struct BuilderDevice {
    ctx: ExecutionContext,
    key: &'static str,
    label_key: &'static str,
    icon_class: &'static str,
    max_width: Option<u32>,
    order: i32,
}

impl BuilderDevice {
    pub fn desktop(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "desktop",
            label_key: "deviceType.desktop",
            icon_class: "iconoir-computer",
            max_width: None,
            order: 1,
        }
    }

    pub fn tablet(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "tablet",
            label_key: "deviceType.tablet",
            icon_class: "iconoir-ipad",
            max_width: Some(768),
            order: 2,
        }
    }

    pub fn smartphone(ctx: ExecutionContext) -> Self {
        Self {
            ctx,
            key: "smartphone",
            label_key: "deviceType.smartphone",
            icon_class: "iconoir-smartphone-device",
            max_width: Some(420),
            order: 3,
        }
    }
}

impl Registerable for BuilderDevice {
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

impl DeviceType for BuilderDevice {
    fn icon_class(&self) -> &str {
        self.icon_class
    }

    fn max_width(&self) -> Option<u32> {
        self.max_width
    }
}
