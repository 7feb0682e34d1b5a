//! Typed accessors for the built-in namespaces.

use std::sync::Arc;

use pagebuilder_protocols::error::RegistryError;
use pagebuilder_protocols::{
    ApplicationType, BuilderSettingsType, DeviceType, ElementType, ErrorContext, ErrorPageType,
    JobType, Namespace, PageHeaderItemType, PageSidePanelType,
};

use super::Registry;

macro_rules! typed_accessors {
    ($( $namespace:ident($capability:ident, $as_fn:ident) => $all_fn:ident, $one_fn:ident; )*) => {
        impl Registry {
            $(
                #[doc = concat!("All `", stringify!($capability), "` entries in registration order.")]
                pub fn $all_fn(&self) -> Result<Vec<Arc<dyn $capability>>, RegistryError> {
                    Ok(self
                        .get_all(&Namespace::$namespace)?
                        .iter()
                        .filter_map(|entry| entry.$as_fn().cloned())
                        .collect())
                }

                #[doc = concat!("One `", stringify!($capability), "` entry by key.")]
                pub fn $one_fn(&self, key: &str) -> Result<Arc<dyn $capability>, RegistryError> {
                    let entry = self.get(&Namespace::$namespace, key)?;
                    entry.$as_fn().cloned().ok_or_else(|| RegistryError::TypeNotFound {
                        namespace: Namespace::$namespace,
                        key: key.to_string(),
                    })
                }
            )*
        }
    };
}

typed_accessors! {
    Application(ApplicationType, as_application) => application_types, application_type;
    Job(JobType, as_job) => job_types, job_type;
    BuilderSettings(BuilderSettingsType, as_builder_settings) => builder_settings_types, builder_settings_type;
    ErrorPage(ErrorPageType, as_error_page) => error_page_types, error_page_type;
    Element(ElementType, as_element) => elements, element;
    Device(DeviceType, as_device) => devices, device;
    PageHeaderItem(PageHeaderItemType, as_page_header_item) => page_header_items, page_header_item;
    PageSidePanel(PageSidePanelType, as_page_side_panel) => page_side_panels, page_side_panel;
}

impl Registry {
    /// First error page, in display order, that handles `error`.
    pub fn resolve_error_page(
        &self,
        error: &ErrorContext,
    ) -> Result<Option<Arc<dyn ErrorPageType>>, RegistryError> {
        Ok(self
            .get_ordered_list(&Namespace::ErrorPage)?
            .iter()
            .filter_map(|entry| entry.as_error_page())
            .find(|page| page.is_applicable(error))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebuilder_protocols::{Registerable, TypeEntry};

    struct CodePage {
        key: &'static str,
        status: u16,
        order: i32,
    }

    impl Registerable for CodePage {
        fn type_key(&self) -> &str {
            self.key
        }

        fn label(&self) -> String {
            self.key.to_string()
        }

        fn order(&self) -> i32 {
            self.order
        }
    }

    impl ErrorPageType for CodePage {
        fn component(&self) -> &str {
            "CodePage"
        }

        fn is_applicable(&self, error: &ErrorContext) -> bool {
            error.status_code == self.status
        }
    }

    fn registry_with_pages() -> Registry {
        let registry = Registry::new();
        registry.create_namespace(Namespace::ErrorPage).unwrap();
        for (key, status, order) in [("late_404", 404, 10), ("early_404", 404, 1), ("e500", 500, 0)] {
            registry
                .register(
                    Namespace::ErrorPage,
                    TypeEntry::ErrorPage(Arc::new(CodePage { key, status, order })),
                )
                .unwrap();
        }
        registry
    }

    fn error(status_code: u16) -> ErrorContext {
        ErrorContext {
            status_code,
            route_name: None,
            message: String::new(),
        }
    }

    #[test]
    fn test_typed_all_and_one() {
        let registry = registry_with_pages();
        let pages = registry.error_page_types().unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].type_key(), "late_404");

        let page = registry.error_page_type("e500").unwrap();
        assert_eq!(page.component(), "CodePage");
    }

    #[test]
    fn test_typed_unknown_namespace() {
        let registry = Registry::new();
        assert_eq!(
            registry.devices().err(),
            Some(RegistryError::UnknownNamespace(Namespace::Device))
        );
    }

    #[test]
    fn test_typed_not_found() {
        let registry = registry_with_pages();
        assert!(matches!(
            registry.error_page_type("missing"),
            Err(RegistryError::TypeNotFound { .. })
        ));
    }

    #[test]
    fn test_resolve_error_page_uses_order() {
        let registry = registry_with_pages();
        let page = registry.resolve_error_page(&error(404)).unwrap().unwrap();
        assert_eq!(page.type_key(), "early_404");
        assert!(registry.resolve_error_page(&error(403)).unwrap().is_none());
    }
}
