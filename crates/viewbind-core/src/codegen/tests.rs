// Copyright 2026 Viewbind Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for member generation.

use super::*;
use crate::class_model::{Classification, Method, Statement};
use crate::element::Element;

fn activity() -> ClassModel {
    ClassModel::new("LoginActivity", Classification::Activity)
}

fn fragment() -> ClassModel {
    ClassModel::new("LoginFragment", Classification::Fragment)
}

fn login_elements() -> Vec<Element> {
    vec![
        Element::new("EditText", "et_user_name", "m").with_input(true),
        Element::new("EditText", "et_password", "m")
            .with_input(true)
            .with_hint("Enter your password"),
        Element::new("Button", "btn_login", "m").with_clickable(true),
    ]
}

fn lookup_count(method: &Method) -> usize {
    method
        .body
        .iter()
        .filter(|s| matches!(s, Statement::Simple(text) if text.contains("findViewById")))
        .count()
}

#[test]
fn unselected_descriptor_produces_no_field() {
    let mut class = activity();
    let elements = vec![
        Element::new("TextView", "tv_title", "m").with_selected(false),
        Element::new("Button", "btn_ok", "m"),
    ];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    assert!(!class.has_field("mTvTitle"));
    assert!(class.has_field("mBtnOk"));
}

#[test]
fn unselected_descriptor_reaches_no_pass() {
    let mut class = activity();
    let elements = vec![
        Element::new("EditText", "et_name", "m")
            .with_input(true)
            .with_clickable(true)
            .with_selected(false),
    ];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    assert!(class.find_method("submit").is_none());
    assert!(class.find_method("onClick").is_none());
    assert!(!class.implements("OnClickListener"));
    let find_id = class.find_method("findId").unwrap();
    assert!(find_id.body.is_empty());
}

#[test]
fn field_pass_is_idempotent() {
    let mut class = activity();
    let elements = login_elements();
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    for name in ["mEtUserName", "mEtPassword", "mBtnLogin"] {
        let count = class.fields.iter().filter(|f| f.name == name).count();
        assert_eq!(count, 1, "expected exactly one field named {name}");
    }
}

#[test]
fn no_inputs_means_no_submit() {
    let mut class = activity();
    let elements = vec![Element::new("Button", "btn_ok", "m").with_clickable(true)];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    assert!(class.find_method("submit").is_none());
    assert!(class.find_method("onClick").is_some());
}

#[test]
fn conformance_added_exactly_once_across_runs() {
    let mut class = activity();
    let elements = vec![Element::new("Button", "btn_ok", "m").with_clickable(true)];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let count = class
        .interfaces
        .iter()
        .filter(|i| i.contains("OnClickListener"))
        .count();
    assert_eq!(count, 1);
}

#[test]
fn conformance_not_duplicated_when_already_declared() {
    let mut class = activity();
    class.add_interface("View.OnClickListener");
    let elements = vec![Element::new("Button", "btn_ok", "m").with_clickable(true)];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    assert_eq!(class.interfaces.len(), 1);
}

#[test]
fn activity_lookup_has_no_view_receiver() {
    let mut class = activity();
    let elements = vec![Element::new("TextView", "tv_title", "m")];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let method = class.find_method("findId").unwrap();
    assert_eq!(method.signature, "private void findId()");
    assert_eq!(
        method.body[0],
        Statement::Simple("mTvTitle = (TextView) findViewById(R.id.tv_title);".into())
    );
}

#[test]
fn fragment_lookup_goes_through_view_parameter() {
    let mut class = fragment();
    let elements = vec![Element::new("TextView", "tv_title", "m")];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let method = class.find_method("findId").unwrap();
    assert_eq!(method.signature, "private void findId(View view)");
    assert_eq!(
        method.body[0],
        Statement::Simple("mTvTitle = (TextView) view.findViewById(R.id.tv_title);".into())
    );
}

#[test]
fn unknown_classification_defaults_to_view_parameter() {
    let mut class = ClassModel::new("SomeHelper", Classification::Unknown);
    let elements = vec![Element::new("TextView", "tv_title", "m")];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let method = class.find_method("findId").unwrap();
    assert_eq!(method.signature, "private void findId(View view)");
}

#[test]
fn clickable_gets_listener_registration_and_switch_case() {
    let mut class = activity();
    let elements = vec![Element::new("Button", "btn_login", "m").with_clickable(true)];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let find_id = class.find_method("findId").unwrap();
    assert!(find_id.body.iter().any(
        |s| matches!(s, Statement::Simple(text) if text == "mBtnLogin.setOnClickListener(this);")
    ));

    let on_click = class.find_method("onClick").unwrap();
    let Statement::Switch { scrutinee, arms } = &on_click.body[0] else {
        panic!("expected a switch dispatch body");
    };
    assert_eq!(scrutinee, "v.getId()");
    assert_eq!(arms.len(), 1);
    assert_eq!(arms[0].label, "R.id.btn_login");
    assert_eq!(arms[0].body, vec![Statement::Simple("break;".into())]);
}

#[test]
fn item_clickable_gets_anonymous_listener() {
    let mut class = activity();
    let elements = vec![Element::new("ListView", "lv_items", "m").with_item_clickable(true)];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let find_id = class.find_method("findId").unwrap();
    assert_eq!(find_id.body.len(), 2);
    let Statement::Simple(registration) = &find_id.body[1] else {
        panic!("expected simple statement");
    };
    assert!(registration.starts_with("mLvItems.setOnItemClickListener("));
    assert!(registration.contains("onItemClick(AdapterView<?> parent"));
}

#[test]
fn submit_uses_hint_or_fallback_message() {
    let mut class = activity();
    generate(&mut class, &login_elements(), &GeneratorOptions::new()).unwrap();

    let submit = class.find_method("submit").unwrap();
    let body_text = submit
        .body
        .iter()
        .map(|s| match s {
            Statement::Simple(text) => text.to_string(),
            Statement::Switch { .. } => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n");

    // et_user_name has no hint: derived fallback message.
    assert!(body_text.contains("String name = mEtUserName.getText().toString().trim();"));
    assert!(body_text.contains("\"name must not be empty\""));
    // et_password carries a literal hint.
    assert!(body_text.contains("\"Enter your password\""));
    // Success-path placeholder trails the checks.
    assert!(body_text.contains("// TODO validate success, do something"));
}

#[test]
fn resource_indirection_hint_falls_back() {
    let mut class = activity();
    let elements = vec![
        Element::new("EditText", "et_city", "m")
            .with_input(true)
            .with_hint("@string/city_hint"),
    ];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let submit = class.find_method("submit").unwrap();
    let Statement::Simple(check) = &submit.body[2] else {
        panic!("expected emptiness check");
    };
    assert!(check.contains("\"city must not be empty\""));
    assert!(!check.contains("@string"));
}

#[test]
fn submit_is_reinserted_on_every_run() {
    let mut class = activity();
    let elements = vec![Element::new("EditText", "et_name", "m").with_input(true)];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let count = class.methods.iter().filter(|m| m.name == "submit").count();
    assert_eq!(count, 2);
}

#[test]
fn merge_appends_lookups_into_existing_find_id() {
    let mut class = activity();
    class
        .add_method_from_text(
            "private void findId() {\nmTvTitle = (TextView) findViewById(R.id.tv_title);\n}",
        )
        .unwrap();

    let elements = vec![
        Element::new("Button", "btn_ok", "m"),
        Element::new("Button", "btn_cancel", "m"),
    ];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let find_id_count = class.methods.iter().filter(|m| m.name == "findId").count();
    assert_eq!(find_id_count, 1, "no second findId may be created");

    let method = class.find_method("findId").unwrap();
    assert_eq!(lookup_count(method), 3, "two new lookups appended to the existing one");
    // The merge path registers a click listener per appended descriptor.
    assert!(method.body.iter().any(
        |s| matches!(s, Statement::Simple(text) if text == "mBtnOk.setOnClickListener(this);")
    ));
}

#[test]
fn merge_appends_cases_into_existing_on_click_switch() {
    let mut class = activity();
    class.add_interface("View.OnClickListener");
    class
        .add_method_from_text(
            "@Override public void onClick(View v) {\n\
             switch (v.getId()) {\n\
             case R.id.btn_old:\nbreak;\n\
             }\n}",
        )
        .unwrap();

    let elements = vec![Element::new("Button", "btn_new", "m").with_clickable(true)];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let on_click_count = class.methods.iter().filter(|m| m.name == "onClick").count();
    assert_eq!(on_click_count, 1);

    let mut on_click = class.find_method("onClick").unwrap().clone();
    let arms = on_click.first_switch_mut().unwrap();
    assert_eq!(arms.len(), 2);
    assert_eq!(arms[0].label, "R.id.btn_old");
    assert_eq!(arms[1].label, "R.id.btn_new");
}

#[test]
fn existing_on_click_without_switch_is_left_untouched() {
    let mut class = activity();
    class
        .add_method_from_text("@Override public void onClick(View v) {\nhandle(v);\n}")
        .unwrap();

    let elements = vec![Element::new("Button", "btn_new", "m").with_clickable(true)];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let on_click = class.find_method("onClick").unwrap();
    assert_eq!(on_click.body, vec![Statement::Simple("handle(v);".into())]);
}

#[test]
fn holder_mode_builds_nested_class() {
    let mut class = activity();
    let elements = vec![
        Element::new("TextView", "tv_title", ""),
        Element::new("TextView", "tv_subtitle", ""),
        Element::new("ImageView", "iv_icon", ""),
    ];
    let options = GeneratorOptions::new().with_create_holder(true);
    generate(&mut class, &elements, &options).unwrap();

    assert!(class.fields.is_empty());
    assert!(class.methods.is_empty());
    assert_eq!(class.nested.len(), 1);

    let holder = &class.nested[0];
    assert_eq!(holder.name, "ViewHolder");
    assert_eq!(holder.modifiers, "public static");
    assert_eq!(holder.fields.len(), 4, "rootView plus three members");
    assert_eq!(holder.fields[0].name, "rootView");

    let constructor = &holder.methods[0];
    assert_eq!(constructor.name, "ViewHolder");
    assert_eq!(constructor.signature, "public ViewHolder(View rootView)");
    assert_eq!(constructor.body.len(), 4, "rootView plus three assignments");
    assert_eq!(
        constructor.body[0],
        Statement::Simple("this.rootView = rootView;".into())
    );
    assert_eq!(
        constructor.body[1],
        Statement::Simple("this.tvTitle = (TextView) rootView.findViewById(R.id.tv_title);".into())
    );
}

#[test]
fn holder_mode_skips_unselected_and_never_merges() {
    let mut class = activity();
    let elements = vec![
        Element::new("TextView", "tv_title", "").with_selected(false),
        Element::new("Button", "btn_ok", ""),
    ];
    let options = GeneratorOptions::new().with_create_holder(true);
    generate(&mut class, &elements, &options).unwrap();
    generate(&mut class, &elements, &options).unwrap();

    // No dedup guard in holder mode: two nested types with the same name.
    assert_eq!(class.nested.len(), 2);
    for holder in &class.nested {
        assert_eq!(holder.fields.len(), 2, "rootView plus the selected member");
    }
}

#[test]
fn empty_descriptor_list_degrades_to_inert_output() {
    let mut class = activity();
    generate(&mut class, &[], &GeneratorOptions::new()).unwrap();

    assert!(class.fields.is_empty());
    assert!(class.find_method("submit").is_none());
    assert!(class.find_method("onClick").is_none());
    let find_id = class.find_method("findId").unwrap();
    assert!(find_id.body.is_empty());
}

#[test]
fn emission_order_follows_descriptor_order() {
    let mut class = activity();
    let elements = vec![
        Element::new("Button", "btn_b", "m"),
        Element::new("Button", "btn_a", "m"),
        Element::new("Button", "btn_c", "m"),
    ];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let names: Vec<&str> = class.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["mBtnB", "mBtnA", "mBtnC"]);
}

#[test]
fn generated_class_renders_to_source() {
    let mut class = activity();
    let elements = vec![
        Element::new("EditText", "et_password", "m")
            .with_input(true)
            .with_hint("Enter your password"),
        Element::new("Button", "btn_login", "m").with_clickable(true),
    ];
    generate(&mut class, &elements, &GeneratorOptions::new()).unwrap();

    let source = class.to_source();
    assert!(source.starts_with(
        "public class LoginActivity implements View.OnClickListener {"
    ));
    assert!(source.contains("private EditText mEtPassword;"));
    assert!(source.contains("private Button mBtnLogin;"));
    assert!(source.contains("mEtPassword = (EditText) findViewById(R.id.et_password);"));
    assert!(source.contains("mBtnLogin.setOnClickListener(this);"));
    assert!(source.contains("switch (v.getId()) {"));
    assert!(source.contains("case R.id.btn_login:"));
    assert!(source.contains("Toast.makeText(this, \"Enter your password\", Toast.LENGTH_SHORT).show();"));
}
