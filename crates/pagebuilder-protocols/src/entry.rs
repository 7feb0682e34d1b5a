//! Tagged type entries.
//!
//! A [`TypeEntry`] is what a namespace stores: the instance behind the
//! capability trait of its home namespace. Plugin namespaces hold
//! [`TypeEntry::Custom`] entries that only expose [`Registerable`].

use std::sync::Arc;

use serde_json::Value;

use crate::kinds::*;
use crate::namespace::Namespace;
use crate::registerable::{base_descriptor, Registerable};

macro_rules! type_entries {
    ($( $variant:ident($capability:ident) => $as_fn:ident, $kind:literal; )*) => {
        /// A registered type instance, tagged by capability.
        #[derive(Clone)]
        pub enum TypeEntry {
            $( $variant(Arc<dyn $capability>), )*
            /// Entry of a plugin-supplied namespace.
            Custom(Arc<dyn Registerable>),
        }

        impl TypeEntry {
            /// Returns the key the entry is registered under.
            pub fn type_key(&self) -> &str {
                match self {
                    $( Self::$variant(inner) => inner.type_key(), )*
                    Self::Custom(inner) => inner.type_key(),
                }
            }

            pub fn label(&self) -> String {
                match self {
                    $( Self::$variant(inner) => inner.label(), )*
                    Self::Custom(inner) => inner.label(),
                }
            }

            pub fn order(&self) -> i32 {
                match self {
                    $( Self::$variant(inner) => inner.order(), )*
                    Self::Custom(inner) => inner.order(),
                }
            }

            /// The type's own descriptor extended with the capability fields of its
            /// namespace. Capability fields win on key collisions.
            pub fn describe(&self) -> Value {
                match self {
                    $(
                        Self::$variant(inner) => {
                            let mut map = match inner.describe() {
                                Value::Object(map) => map,
                                _ => base_descriptor(inner.as_ref()),
                            };
                            map.extend(inner.capabilities());
                            Value::Object(map)
                        }
                    )*
                    Self::Custom(inner) => inner.describe(),
                }
            }

            /// Whether this entry may be registered into `namespace`.
            pub fn accepts(&self, namespace: &Namespace) -> bool {
                match (self, namespace) {
                    $( (Self::$variant(_), Namespace::$variant) => true, )*
                    (Self::Custom(_), Namespace::Custom(_)) => true,
                    _ => false,
                }
            }

            /// Short name of the entry's capability, used in error messages.
            pub fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $kind, )*
                    Self::Custom(_) => "custom",
                }
            }

            $(
                pub fn $as_fn(&self) -> Option<&Arc<dyn $capability>> {
                    match self {
                        Self::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            )*

            pub fn as_custom(&self) -> Option<&Arc<dyn Registerable>> {
                match self {
                    Self::Custom(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

type_entries! {
    Application(ApplicationType) => as_application, "application";
    Job(JobType) => as_job, "job";
    BuilderSettings(BuilderSettingsType) => as_builder_settings, "builderSettings";
    ErrorPage(ErrorPageType) => as_error_page, "errorPage";
    Element(ElementType) => as_element, "element";
    Device(DeviceType) => as_device, "device";
    PageHeaderItem(PageHeaderItemType) => as_page_header_item, "pageHeaderItem";
    PageSidePanel(PageSidePanelType) => as_page_side_panel, "pageSidePanel";
}

impl std::fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeEntry")
            .field("kind", &self.kind())
            .field("type_key", &self.type_key())
            .finish()
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
