use keyform_core::{AliasSpec, Error, ErrorKind, FieldDef, ModelConfig, ModelSchema};
use rstest::rstest;
use serde_json::{Value, json};

// Scenarios for a field carrying only a plain alias: the alias is the
// accepted key for construction and parsing, and the emitted key when
// dumping by alias.

fn model_with_plain_alias() -> ModelSchema {
    ModelSchema::build(
        "ModelWithPlainAlias",
        ModelConfig::new(),
        vec![FieldDef::required("first_name").with_alias(AliasSpec::plain("firstName"))],
    )
}

fn model_with_plain_alias_pop_by_name() -> ModelSchema {
    ModelSchema::build(
        "ModelWithPlainAliasPopByName",
        ModelConfig::new().with_populate_by_name(true),
        vec![FieldDef::required("first_name").with_alias(AliasSpec::plain("firstName"))],
    )
}

fn assert_single_missing(result: keyform_core::Result<keyform_core::ModelInstance>, loc: &str, input: &Value) {
    match result {
        Err(Error::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            let item = &errors.errors()[0];
            assert_eq!(item.kind, ErrorKind::Missing);
            assert_eq!(item.loc, [loc]);
            assert_eq!(item.msg, "Field required");
            assert_eq!(&item.input, input);
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[rstest]
#[case(json!({"firstName": "Mickey"}), true)]
#[case(json!({"first_name": "Mickey"}), false)]
#[case(json!({"FirstName": "Mickey"}), false)]
fn construct_accepts_only_the_plain_alias(#[case] kwargs: Value, #[case] ok: bool) {
    let schema = model_with_plain_alias();
    let result = schema.construct(&kwargs);
    if ok {
        let instance = result.unwrap();
        assert_eq!(instance.get("first_name"), Some(&json!("Mickey")));
    } else {
        assert_single_missing(result, "firstName", &kwargs);
    }
}

#[rstest]
#[case(json!({"firstName": "Mickey"}), true)]
#[case(json!({"first_name": "Mickey"}), false)]
fn parse_accepts_only_the_plain_alias(#[case] doc: Value, #[case] ok: bool) {
    let schema = model_with_plain_alias();
    let result = schema.parse(&doc);
    if ok {
        assert_eq!(result.unwrap().get("first_name"), Some(&json!("Mickey")));
    } else {
        assert_single_missing(result, "firstName", &doc);
    }
}

#[test]
fn parse_json_mirrors_parse() {
    let schema = model_with_plain_alias();
    let instance = schema.parse_json(r#"{"firstName": "Mickey"}"#).unwrap();
    assert_eq!(instance.get("first_name"), Some(&json!("Mickey")));

    let doc = json!({"first_name": "Mickey"});
    assert_single_missing(schema.parse_json(r#"{"first_name": "Mickey"}"#), "firstName", &doc);
}

#[test]
fn dump_by_field_name() {
    let schema = model_with_plain_alias();
    let instance = schema.construct(&json!({"firstName": "Mickey"})).unwrap();
    let dumped = schema.dump(&instance, false);
    assert_eq!(dumped.get("first_name"), Some(&json!("Mickey")));
    assert!(!dumped.contains_key("firstName"));
    assert_eq!(
        schema.dump_json(&instance, false).unwrap(),
        r#"{"first_name":"Mickey"}"#
    );
}

#[test]
fn dump_by_alias() {
    let schema = model_with_plain_alias();
    let instance = schema.construct(&json!({"firstName": "Mickey"})).unwrap();
    let dumped = schema.dump(&instance, true);
    assert_eq!(dumped.get("firstName"), Some(&json!("Mickey")));
    assert!(!dumped.contains_key("first_name"));
    assert_eq!(
        schema.dump_json(&instance, true).unwrap(),
        r#"{"firstName":"Mickey"}"#
    );
}

#[test]
fn instance_is_addressed_by_canonical_name_only() {
    let schema = model_with_plain_alias();
    let instance = schema.construct(&json!({"firstName": "Mickey"})).unwrap();
    assert!(instance.contains("first_name"));
    assert!(!instance.contains("firstName"));

    let rendered = instance.to_string();
    assert!(rendered.contains("first_name"));
    assert!(!rendered.contains("firstName"));
}

#[rstest]
#[case(json!({"firstName": "Mickey"}), true)]
#[case(json!({"first_name": "Mickey"}), true)]
#[case(json!({"f_name": "Mickey"}), false)]
fn construct_with_populate_by_name_accepts_alias_or_canonical(#[case] kwargs: Value, #[case] ok: bool) {
    let schema = model_with_plain_alias_pop_by_name();
    let result = schema.construct(&kwargs);
    if ok {
        assert_eq!(result.unwrap().get("first_name"), Some(&json!("Mickey")));
    } else {
        assert_single_missing(result, "firstName", &kwargs);
    }
}

#[rstest]
#[case(json!({"firstName": "Mickey"}), true)]
#[case(json!({"first_name": "Mickey"}), true)]
#[case(json!({"f_name": "Mickey"}), false)]
fn parse_with_populate_by_name_accepts_alias_or_canonical(#[case] doc: Value, #[case] ok: bool) {
    let schema = model_with_plain_alias_pop_by_name();
    let result = schema.parse(&doc);
    if ok {
        assert_eq!(result.unwrap().get("first_name"), Some(&json!("Mickey")));
    } else {
        assert_single_missing(result, "firstName", &doc);
    }
}

#[test]
fn parse_with_populate_by_name_yields_equal_instances_for_either_key() {
    let schema = model_with_plain_alias_pop_by_name();
    let by_alias = schema.parse(&json!({"firstName": "Mickey"})).unwrap();
    let by_name = schema.parse(&json!({"first_name": "Mickey"})).unwrap();
    assert_eq!(by_alias, by_name);
}

#[test]
fn populate_by_name_does_not_change_dump_keys() {
    let schema = model_with_plain_alias_pop_by_name();
    let instance = schema.construct(&json!({"first_name": "Mickey"})).unwrap();
    assert_eq!(
        schema.dump_json(&instance, false).unwrap(),
        r#"{"first_name":"Mickey"}"#
    );
    assert_eq!(
        schema.dump_json(&instance, true).unwrap(),
        r#"{"firstName":"Mickey"}"#
    );
}
