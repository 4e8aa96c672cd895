fn main() {
    let manifest = "\
spec:
  name: oldName
  value: 42
";

    match yaml_path_edit::set_value(manifest, "spec.name", "newName") {
        Ok(updated) => println!("{}", updated),
        Err(err) => println!("Failed to edit YAML: {}", err),
    }

    let template = "serviceName: {{ name }}";
    println!("{}", yaml_path_edit::fill_placeholder(template, "name", "billing"));
}
