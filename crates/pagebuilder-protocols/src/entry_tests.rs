use super::*;

struct TestDevice {
    key: &'static str,
    width: Option<u32>,
}

impl Registerable for TestDevice {
    fn type_key(&self) -> &str {
        self.key
    }

    fn label(&self) -> String {
        format!("Device {}", self.key)
    }

    fn order(&self) -> i32 {
        5
    }
}

impl DeviceType for TestDevice {
    fn icon_class(&self) -> &str {
        "iconoir-laptop"
    }

    fn max_width(&self) -> Option<u32> {
        self.width
    }
}

struct TestWidget;

impl Registerable for TestWidget {
    fn type_key(&self) -> &str {
        "widget"
    }

    fn label(&self) -> String {
        "Widget".to_string()
    }
}

fn device(key: &'static str, width: Option<u32>) -> TypeEntry {
    TypeEntry::Device(Arc::new(TestDevice { key, width }))
}

#[test]
fn test_delegates_registerable() {
    let entry = device("tablet", Some(768));
    assert_eq!(entry.type_key(), "tablet");
    assert_eq!(entry.label(), "Device tablet");
    assert_eq!(entry.order(), 5);
    assert_eq!(entry.kind(), "device");
}

#[test]
fn test_describe_includes_capabilities() {
    let described = device("tablet", Some(768)).describe();
    assert_eq!(described["type"], "tablet");
    assert_eq!(described["icon_class"], "iconoir-laptop");
    assert_eq!(described["max_width"], 768);

    let described = device("desktop", None).describe();
    assert!(described["max_width"].is_null());
}

#[test]
fn test_accepts_home_namespace_only() {
    let entry = device("desktop", None);
    assert!(entry.accepts(&Namespace::Device));
    assert!(!entry.accepts(&Namespace::Element));
    assert!(!entry.accepts(&Namespace::custom("devices2").unwrap()));
}

#[test]
fn test_custom_accepts_custom_namespaces() {
    let entry = TypeEntry::Custom(Arc::new(TestWidget));
    assert!(entry.accepts(&Namespace::custom("widgets").unwrap()));
    assert!(!entry.accepts(&Namespace::Element));
    assert_eq!(entry.kind(), "custom");
    assert_eq!(entry.describe()["type"], "widget");
}

#[test]
fn test_typed_accessors() {
    let entry = device("desktop", None);
    assert!(entry.as_device().is_some());
    assert!(entry.as_element().is_none());
    assert!(entry.as_custom().is_none());
    assert_eq!(entry.as_device().unwrap().max_width(), None);
}

#[test]
fn test_debug() {
    let debug = format!("{:?}", device("smartphone", Some(420)));
    assert!(debug.contains("smartphone"));
    assert!(debug.contains("device"));
}

struct DecoratedDevice;

impl Registerable for DecoratedDevice {
    fn type_key(&self) -> &str {
        "fancy"
    }

    fn label(&self) -> String {
        "Fancy".to_string()
    }

    fn describe(&self) -> Value {
        serde_json::json!({"type": "fancy", "extra": true})
    }
}

impl DeviceType for DecoratedDevice {
    fn icon_class(&self) -> &str {
        "i"
    }

    fn max_width(&self) -> Option<u32> {
        None
    }
}

#[test]
fn test_describe_keeps_overridden_fields() {
    let described = TypeEntry::Device(Arc::new(DecoratedDevice)).describe();
    assert_eq!(described["type"], "fancy");
    assert_eq!(described["extra"], true);
    assert_eq!(described["icon_class"], "i");
    assert!(described["max_width"].is_null());
}
