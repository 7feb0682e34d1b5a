use super::*;

#[test]
fn test_builtin_wire_names() {
    let builtin = Namespace::builtin();
    let names: Vec<&str> = builtin.iter().map(|ns| ns.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "application",
            "job",
            "builderSettings",
            "errorPage",
            "element",
            "device",
            "pageHeaderItem",
            "pageSidePanel",
        ]
    );
}

#[test]
fn test_parse_builtin() {
    let ns: Namespace = "pageSidePanel".parse().unwrap();
    assert_eq!(ns, Namespace::PageSidePanel);
    let ns: Namespace = " device ".parse().unwrap();
    assert_eq!(ns, Namespace::Device);
}

#[test]
fn test_parse_custom() {
    let ns: Namespace = "dataSource".parse().unwrap();
    assert!(ns.is_custom());
    assert_eq!(ns.as_str(), "dataSource");
}

#[test]
fn test_parse_invalid() {
    assert!(matches!(
        "".parse::<Namespace>(),
        Err(RegistryError::InvalidNamespace(_))
    ));
    assert!(matches!(
        "9lives".parse::<Namespace>(),
        Err(RegistryError::InvalidNamespace(_))
    ));
    assert!(matches!(
        "has space".parse::<Namespace>(),
        Err(RegistryError::InvalidNamespace(_))
    ));
}

#[test]
fn test_custom_cannot_shadow_builtin() {
    let result = NamespaceName::new("element");
    assert!(matches!(result, Err(RegistryError::InvalidNamespace(_))));
}

#[test]
fn test_custom_length_limit() {
    let long = "a".repeat(65);
    assert!(NamespaceName::new(&long).is_err());
    let ok = "a".repeat(64);
    assert!(NamespaceName::new(&ok).is_ok());
}

#[test]
fn test_display() {
    assert_eq!(Namespace::BuilderSettings.to_string(), "builderSettings");
    assert_eq!(Namespace::custom("widgets").unwrap().to_string(), "widgets");
}

#[test]
fn test_serde_roundtrip_as_string() {
    let json = serde_json::to_string(&Namespace::PageHeaderItem).unwrap();
    assert_eq!(json, "\"pageHeaderItem\"");
    let parsed: Namespace = serde_json::from_str("\"errorPage\"").unwrap();
    assert_eq!(parsed, Namespace::ErrorPage);
}

#[test]
fn test_deserialize_rejects_invalid() {
    let result: Result<Namespace, _> = serde_json::from_str("\"bad name\"");
    assert!(result.is_err());
}
