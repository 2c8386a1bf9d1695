//! Unit tests for CodeEntity and EntityKind

use docgen_domain::{CodeEntity, EntityKind};

#[test]
fn test_method_name_is_qualified_by_class() {
    let entity = CodeEntity::method("Foo", "bar", "def bar(self):\n        pass");

    assert_eq!(entity.name, "Foo.bar");
    assert_eq!(entity.kind, EntityKind::Method);
    assert_eq!(entity.source_text, "def bar(self):\n        pass");
}

#[test]
fn test_entity_kind_wire_names() {
    assert_eq!(EntityKind::Function.as_str(), "function");
    assert_eq!(EntityKind::Class.to_string(), "class");
    assert_eq!(
        serde_json::to_value(EntityKind::Method).unwrap(),
        serde_json::json!("method")
    );
}

#[test]
fn test_entity_serializes_with_wire_field_names() {
    let entity = CodeEntity::function("add", "def add(a, b):\n    return a + b");
    let value = serde_json::to_value(&entity).unwrap();

    assert_eq!(value["entity_name"], "add");
    assert_eq!(value["entity_type"], "function");
    assert_eq!(value["original_code"], "def add(a, b):\n    return a + b");
}

#[test]
fn test_entity_accepts_camel_case_fields() {
    let entity: CodeEntity = serde_json::from_value(serde_json::json!({
        "entityName": "Foo",
        "entityType": "class",
        "originalCode": "class Foo:\n    pass"
    }))
    .unwrap();

    assert_eq!(entity, CodeEntity::class("Foo", "class Foo:\n    pass"));
}
