use openscad_customizer::{
    extract_parameters, Parameter, ParameterOption, ParameterRange, ParameterType, ParameterValue,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn find<'a>(params: &'a [Parameter], name: &str) -> &'a Parameter {
    params
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("parameter {name} not extracted"))
}

#[test]
fn same_input_gives_same_output() {
    init_logging();
    let src = "/* [A] */\n// doc\nx = 1; // 1:5\ny = \"s\";\n/* [B] */\nz = false;\n";
    assert_eq!(extract_parameters(src), extract_parameters(src));
}

#[test]
fn duplicate_name_keeps_later_definition() {
    init_logging();
    let src = "size = 10; // 1:20\nsize = \"big\"; // [big,small]\n";
    let params = extract_parameters(src);
    assert_eq!(params.len(), 1);
    let size = &params[0];
    assert_eq!(size.kind, ParameterType::String);
    assert_eq!(size.value, ParameterValue::String("big".into()));
    assert!(size.range.is_none());
    assert_eq!(size.options.as_ref().map(Vec::len), Some(2));
}

#[test]
fn ungrouped_script_has_no_groups() {
    init_logging();
    let params = extract_parameters("a = 1;\nb = true;\nc = \"x\";\n");
    assert_eq!(params.len(), 3);
    assert!(params.iter().all(|p| p.group.is_none()));
}

#[test]
fn headings_assign_groups() {
    init_logging();
    let params =
        extract_parameters("/* [Size] */\nwidth = 10; // 1:20\n/* [Color] */\ncolor = \"red\";");
    assert_eq!(params.len(), 2);

    let width = find(&params, "width");
    assert_eq!(width.group.as_deref(), Some("Size"));
    assert_eq!(width.kind, ParameterType::Number);
    assert_eq!(width.value, ParameterValue::Number(10.0));
    assert_eq!(
        width.range,
        Some(ParameterRange {
            min: Some(1.0),
            max: Some(20.0),
            step: None
        })
    );

    let color = find(&params, "color");
    assert_eq!(color.group.as_deref(), Some("Color"));
    assert_eq!(color.kind, ParameterType::String);
    assert_eq!(color.value, ParameterValue::String("red".into()));
}

#[test]
fn bracketed_list_gives_options() {
    init_logging();
    let params = extract_parameters("shape = \"circle\"; // [circle:Circle,square:Square]");
    assert_eq!(
        params[0].options,
        Some(vec![
            ParameterOption {
                value: ParameterValue::String("circle".into()),
                label: "Circle".into()
            },
            ParameterOption {
                value: ParameterValue::String("square".into()),
                label: "Square".into()
            },
        ])
    );
    assert!(params[0].range.is_none());
}

#[test]
fn bare_number_on_string_is_max_length() {
    init_logging();
    let params = extract_parameters("label = \"hi\"; // 10");
    assert_eq!(params[0].max_length, Some(10.0));
    assert!(params[0].range.is_none());
}

#[test]
fn bare_number_on_number_is_step() {
    init_logging();
    let params = extract_parameters("angle = 0; // 5");
    assert_eq!(
        params[0].range,
        Some(ParameterRange {
            min: None,
            max: None,
            step: Some(5.0)
        })
    );
    assert!(params[0].max_length.is_none());
}

#[test]
fn boolean_literal() {
    init_logging();
    let params = extract_parameters("enabled = true;");
    assert_eq!(params[0].kind, ParameterType::Boolean);
    assert_eq!(params[0].value, ParameterValue::Boolean(true));
}

#[test]
fn preceding_comment_is_description() {
    init_logging();
    let params = extract_parameters("// Number of teeth\nteeth = 12;\n// Detached\n\nbore = 5;\n");
    assert_eq!(
        find(&params, "teeth").description.as_deref(),
        Some("Number of teeth")
    );
    assert_eq!(find(&params, "bore").description, None);
}

#[test]
fn text_after_definition_is_ignored() {
    init_logging();
    let src = "a = 1;\nmodule part() {\n}\nb = 2; // 1:3\nfunction f() = 1;\nc = 3;\n";
    let params = extract_parameters(src);
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a"]);
}

#[test]
fn dimensions_scenario() {
    init_logging();
    let src = "/* [Dimensions] */\n// Width of the box\nwidth = 20; // 1:0.5:50\nheight = 15;\n";
    let params = extract_parameters(src);

    let mut width = Parameter::new("width", 20.0);
    width.group = Some("Dimensions".into());
    width.description = Some("Width of the box".into());
    width.range = Some(ParameterRange {
        min: Some(1.0),
        max: Some(50.0),
        step: Some(0.5),
    });

    let mut height = Parameter::new("height", 15.0);
    height.group = Some("Dimensions".into());

    assert_eq!(params, vec![width, height]);
}

#[test]
fn dimensions_scenario_json() {
    init_logging();
    let src = "/* [Dimensions] */\n// Width of the box\nwidth = 20; // 1:0.5:50\nheight = 15;\n";
    let json = serde_json::to_value(extract_parameters(src)).unwrap();
    assert_eq!(json[0]["type"], "number");
    assert_eq!(json[0]["range"]["step"], 0.5);
    assert!(json[1].get("description").is_none());
    assert!(json[1].get("range").is_none());
}
