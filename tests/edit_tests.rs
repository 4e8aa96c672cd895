use yaml_path_edit::{Document, EditError, Value};

fn parse(yaml: &str) -> Document {
    yaml.parse().unwrap()
}

#[test]
fn test_get_scalar() {
    let doc = parse("spec:\n  name: oldName\n  value: 42\n");
    assert_eq!(
        doc.get("spec.name").unwrap(),
        Value::String("oldName".to_string())
    );
    assert_eq!(
        doc.get("spec.value").unwrap(),
        Value::String("42".to_string())
    );
}

#[test]
fn test_get_sequence() {
    let doc = parse("dependencies:\n  - rowan\n  - regex\n");
    assert_eq!(
        doc.get("dependencies").unwrap(),
        Value::Sequence(vec![
            Value::String("rowan".to_string()),
            Value::String("regex".to_string())
        ])
    );
}

#[test]
fn test_get_mapping_keeps_entry_order() {
    let doc = parse("server:\n  zeta: 1\n  alpha: 2\n");
    let value = doc.get("server").unwrap();
    let pairs = value.as_mapping().unwrap();
    assert_eq!(pairs[0].0, "zeta");
    assert_eq!(pairs[1].0, "alpha");
}

#[test]
fn test_get_path_not_found() {
    let doc = parse("spec:\n  name: x\n");
    assert_eq!(
        doc.get("spec.missing"),
        Err(EditError::PathNotFound("spec.missing".to_string()))
    );
    assert_eq!(
        doc.get("absent.deeper"),
        Err(EditError::PathNotFound("absent.deeper".to_string()))
    );
}

#[test]
fn test_get_through_scalar_is_an_error() {
    let doc = parse("a: 1\n");
    assert_eq!(
        doc.get("a.b"),
        Err(EditError::ExpectedMapping("a.b".to_string()))
    );
}

#[test]
fn test_set_then_get_round_trips_scalars() {
    let mut doc = parse("spec:\n  field: placeholder\n");

    doc.set("spec.field", "text").unwrap();
    assert_eq!(doc.get("spec.field").unwrap(), Value::String("text".to_string()));

    doc.set("spec.field", true).unwrap();
    assert_eq!(doc.get("spec.field").unwrap(), Value::String("true".to_string()));

    doc.set("spec.field", 42i64).unwrap();
    assert_eq!(doc.get("spec.field").unwrap(), Value::String("42".to_string()));

    doc.set("spec.field", 3.5f64).unwrap();
    assert_eq!(doc.get("spec.field").unwrap(), Value::String("3.5".to_string()));

    doc.set("spec.field", Value::Null).unwrap();
    assert_eq!(doc.get("spec.field").unwrap(), Value::String("null".to_string()));
}

#[test]
fn test_set_float_special_values() {
    let mut doc = parse("metrics:\n  ratio: 0\n");

    doc.set("metrics.ratio", f64::NAN).unwrap();
    assert_eq!(
        doc.get("metrics.ratio").unwrap(),
        Value::String(".nan".to_string())
    );

    doc.set("metrics.ratio", f64::INFINITY).unwrap();
    assert_eq!(
        doc.get("metrics.ratio").unwrap(),
        Value::String(".inf".to_string())
    );

    doc.set("metrics.ratio", f64::NEG_INFINITY).unwrap();
    assert_eq!(
        doc.get("metrics.ratio").unwrap(),
        Value::String("-.inf".to_string())
    );
    assert!(doc.to_yaml_string().unwrap().contains("ratio: -.inf"));
}

#[test]
fn test_set_requires_existing_path() {
    let mut doc = parse("spec:\n  name: x\n");
    assert_eq!(
        doc.set("spec.missing", "y"),
        Err(EditError::PathNotFound("spec.missing".to_string()))
    );
    assert_eq!(doc.get("spec.name").unwrap(), Value::String("x".to_string()));
}

#[test]
fn test_set_sequence_value() {
    let mut doc = parse("spec:\n  items: none\n");
    doc.set("spec.items", vec!["a", "b"]).unwrap();
    assert_eq!(
        doc.get("spec.items").unwrap(),
        Value::Sequence(vec![
            Value::String("a".to_string()),
            Value::String("b".to_string())
        ])
    );
    let text = doc.to_yaml_string().unwrap();
    assert!(text.contains("- a"));
    assert!(text.contains("- b"));
}

#[test]
fn test_set_mapping_value_keeps_pair_order() {
    let mut doc = parse("spec:\n  limits: none\n");
    doc.set(
        "spec.limits",
        Value::Mapping(vec![
            ("memory".to_string(), Value::String("512Mi".to_string())),
            ("cpu".to_string(), Value::Int(2)),
        ]),
    )
    .unwrap();

    let text = doc.to_yaml_string().unwrap();
    let memory = text.find("memory:").unwrap();
    let cpu = text.find("cpu: 2").unwrap();
    assert!(memory < cpu);
}

#[test]
fn test_delete_then_get_is_not_found() {
    let mut doc = parse("spec:\n  name: x\n  keep: y\n");
    doc.delete("spec.name").unwrap();
    assert_eq!(
        doc.get("spec.name"),
        Err(EditError::PathNotFound("spec.name".to_string()))
    );
    assert_eq!(doc.get("spec.keep").unwrap(), Value::String("y".to_string()));
}

#[test]
fn test_delete_preserves_sibling_order() {
    let mut doc = parse("a: 1\nb: 2\nc: 3\n");
    doc.delete("b").unwrap();

    let text = doc.to_yaml_string().unwrap();
    assert!(!text.contains("b: 2"));
    let a = text.find("a: 1").unwrap();
    let c = text.find("c: 3").unwrap();
    assert!(a < c);
}

#[test]
fn test_delete_missing_path_fails() {
    let mut doc = parse("a: 1\n");
    assert_eq!(
        doc.delete("missing"),
        Err(EditError::PathNotFound("missing".to_string()))
    );
}

#[test]
fn test_rename_key_preserves_value_and_order() {
    let mut doc = parse("name: my-app\nversion: 1.0\nauthor: Alice\n");
    doc.rename_key("version", "app_version").unwrap();

    assert_eq!(
        doc.get("app_version").unwrap(),
        Value::String("1.0".to_string())
    );
    assert_eq!(
        doc.get("version"),
        Err(EditError::PathNotFound("version".to_string()))
    );

    let text = doc.to_yaml_string().unwrap();
    let name = text.find("name:").unwrap();
    let renamed = text.find("app_version:").unwrap();
    let author = text.find("author:").unwrap();
    assert!(name < renamed && renamed < author);
}

#[test]
fn test_rename_nested_key() {
    let mut doc = parse("spec:\n  serviceName: billing\n");
    doc.rename_key("spec.serviceName", "service").unwrap();
    assert_eq!(
        doc.get("spec.service").unwrap(),
        Value::String("billing".to_string())
    );
}

#[test]
fn test_rename_missing_path_fails() {
    let mut doc = parse("a: 1\n");
    assert_eq!(
        doc.rename_key("missing", "x"),
        Err(EditError::PathNotFound("missing".to_string()))
    );
}

#[test]
fn test_empty_path_is_rejected() {
    let doc = parse("a: 1\n");
    assert_eq!(doc.get(""), Err(EditError::EmptyPath));
}

#[test]
fn test_operations_on_empty_document_fail() {
    let mut doc: Document = "".parse().unwrap();
    assert_eq!(doc.get("a"), Err(EditError::EmptyDocument));
    assert_eq!(doc.set("a", 1i64), Err(EditError::EmptyDocument));
    assert_eq!(doc.delete("a"), Err(EditError::EmptyDocument));
    assert_eq!(doc.rename_key("a", "b"), Err(EditError::EmptyDocument));
}

#[test]
fn test_string_level_api() {
    let yaml = "spec:\n  name: oldName\n  value: 42\n";

    let updated = yaml_path_edit::set_value(yaml, "spec.name", "newName").unwrap();
    assert!(updated.contains("name: newName"));

    let removed = yaml_path_edit::delete_field(&updated, "spec.value").unwrap();
    assert!(!removed.contains("value: 42"));

    let renamed = yaml_path_edit::rename_key(&removed, "spec.name", "title").unwrap();
    assert!(renamed.contains("title: newName"));

    assert_eq!(
        yaml_path_edit::get_value(&renamed, "spec.title").unwrap(),
        Value::String("newName".to_string())
    );
}
