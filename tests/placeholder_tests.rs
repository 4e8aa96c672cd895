use yaml_path_edit::fill_placeholder;

#[test]
fn test_matching_placeholder_is_replaced() {
    assert_eq!(fill_placeholder("name: {{ Foo }}", "foo", "bar"), "name: bar");
}

#[test]
fn test_non_matching_placeholder_passes_through() {
    assert_eq!(
        fill_placeholder("name: {{Baz}}", "foo", "bar"),
        "name: {{Baz}}"
    );
}

#[test]
fn test_fills_only_matching_lines_of_a_template() {
    let template = "\
apiVersion: v1
metadata:
  name: {{ serviceName }}
  namespace: {{ namespace }}
";
    let filled = fill_placeholder(template, "servicename", "billing");
    assert_eq!(
        filled,
        "\
apiVersion: v1
metadata:
  name: billing
  namespace: {{ namespace }}
"
    );
}

#[test]
fn test_first_placeholder_per_line_only() {
    assert_eq!(
        fill_placeholder("{{app}}-{{app}}", "app", "x"),
        "x-{{app}}"
    );
}

#[test]
fn test_reversed_braces_pass_through() {
    assert_eq!(fill_placeholder("}} not {{", "x", "y"), "}} not {{");
}

#[test]
fn test_filled_template_parses_as_yaml() {
    let template = "name: {{ app }}\nreplicas: 2\n";
    let filled = fill_placeholder(template, "app", "frontend");

    assert_eq!(
        yaml_path_edit::get_value(&filled, "name").unwrap(),
        yaml_path_edit::Value::String("frontend".to_string())
    );
}
