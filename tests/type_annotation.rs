use phpantom_reflection::{PRIMITIVE_TYPES, PhpValue, TypeAnnotation, TypeError};

fn parse(raw: &str) -> TypeAnnotation {
    TypeAnnotation::parse(raw, None).expect("annotation should parse")
}

// ─── Primary type selection ─────────────────────────────────────────────────

#[test]
fn nullable_primitive() {
    let t = parse("string|null");
    assert_eq!(t.primary_type(), Some("string"));
    assert!(t.is_nullable());
    assert!(t.is_resolved_type());
    assert!(t.is_string());
}

#[test]
fn three_member_union_is_unknown() {
    let t = parse("Foo|Bar|null");
    assert_eq!(t.primary_type(), None);
    assert!(t.is_nullable());
    assert!(t.is_unknown_type());
    assert!(!t.is_resolved_type());
    assert!(!t.is_array_type());
}

#[test]
fn null_alone_is_rejected() {
    assert_eq!(
        TypeAnnotation::parse("null", None),
        Err(TypeError::NullOnlyType)
    );
    assert_eq!(
        TypeAnnotation::parse("NULL description", None),
        Err(TypeError::NullOnlyType)
    );
}

#[test]
fn empty_annotation_is_rejected() {
    for raw in ["", "   ", "|", "||"] {
        assert_eq!(
            TypeAnnotation::parse(raw, None),
            Err(TypeError::MissingType),
            "raw annotation {:?}",
            raw
        );
    }
}

#[test]
fn single_tokens_become_primary() {
    for raw in ["int", "Foo", "\\App\\Model", "Item[]", "mixed"] {
        let t = parse(raw);
        assert_eq!(t.primary_type(), Some(raw));
        assert!(!t.is_nullable());
    }
}

#[test]
fn null_may_come_first() {
    let t = parse("null|Foo");
    assert_eq!(t.primary_type(), Some("Foo"));
    assert!(t.is_nullable());
    assert!(!t.is_resolved_type());
}

#[test]
fn two_non_null_members_are_unknown() {
    let t = parse("int|string");
    assert!(t.is_unknown_type());
    assert!(!t.is_nullable());
    assert!(!t.is_int());
    assert!(!t.is_string());
}

#[test]
fn description_after_whitespace_is_ignored() {
    let t = parse("  int|null   The number of retries | not a type");
    assert_eq!(t.types(), ["int", "null"]);
    assert_eq!(t.primary_type(), Some("int"));
    assert!(t.is_int());
}

// ─── Token casing and rendering ─────────────────────────────────────────────

#[test]
fn primitives_are_lower_cased_classes_keep_case() {
    let t = parse("STRING|Null");
    assert_eq!(t.types(), ["string", "null"]);
    assert_eq!(t.primary_type(), Some("string"));

    let t = parse("UserModel|NULL");
    assert_eq!(t.types(), ["UserModel", "null"]);
    assert_eq!(t.primary_type(), Some("UserModel"));
}

#[test]
fn render_joins_tokens_as_parsed() {
    assert_eq!(parse("Foo|BOOL|null").render_types(), "Foo|bool|null");
    assert_eq!(parse("\\Carbon\\Carbon").to_string(), "\\Carbon\\Carbon");
}

// ─── Classification ─────────────────────────────────────────────────────────

#[test]
fn every_primitive_is_resolved() {
    for primitive in PRIMITIVE_TYPES.iter().filter(|p| **p != "null") {
        let t = parse(primitive);
        assert!(t.is_primitive_type(), "{} should be primitive", primitive);
        assert!(t.is_resolved_type(), "{} should be resolved", primitive);
    }
}

#[test]
fn fully_qualified_classes_are_resolved() {
    let t = parse("\\App\\Models\\User|null");
    assert!(t.is_resolved_type());
    assert!(!t.is_primitive_type());

    assert!(!parse("App\\Models\\User").is_resolved_type());
}

#[test]
fn array_types() {
    assert!(parse("array").is_array_type());
    assert!(parse("Item[]").is_array_type());
    assert!(parse("string[][]").is_array_type());
    assert!(parse("Item[]|null").is_array_type());
    assert!(!parse("string").is_array_type());
    assert!(!parse("[]").is_array_type());
}

// ─── Default values ─────────────────────────────────────────────────────────

#[test]
fn default_value_is_carried() {
    let t = TypeAnnotation::parse("int", Some(PhpValue::Int(3))).expect("should parse");
    assert_eq!(t.default_value(), Some(&PhpValue::Int(3)));
    assert_eq!(parse("int").default_value(), None);
}
