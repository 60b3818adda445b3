//! Attributes attached to schema nodes: descriptions, ranges and defaults.

use pretty_assertions::assert_eq;
use rstest::rstest;
use structure::attributes::{AttributeError, Range, mk_range};
use structure::prelude::*;
use structure::stock::UInt8Kind;

// ============================================================================
// RANGE: construction and conversion between storage widths
// ============================================================================

#[test]
fn range_conversions() {
    let auto = mk_range(-10, 10).unwrap();

    let as_i8: Range<i8> = auto.cast().unwrap();
    let as_i32: Range<i32> = as_i8.into();
    let as_i16: Range<i16> = auto.cast().unwrap();
    assert_eq!(as_i32, auto);
    assert_eq!(*as_i16.min(), -10);

    let err = auto.cast::<u8>().unwrap_err();
    assert!(matches!(err, AttributeError::RangeOverflow { target: "u8", .. }));

    let err = mk_range(20, 10).unwrap_err();
    assert!(matches!(err, AttributeError::EmptyRange { .. }));
}

#[test]
fn one_sided_ranges() {
    assert_eq!(Range::<i8>::at_least(5), Range::new(5, i8::MAX));
    assert_eq!(Range::<i8>::at_most(5), Range::new(i8::MIN, 5));
}

// ============================================================================
// FIELD ATTRIBUTES: range checks through the string path
// ============================================================================

#[rstest]
#[case("10", true)]
#[case("-10", true)]
#[case("11", false)]
#[case("-11", false)]
fn int8_with_description_and_range(#[case] raw: &str, #[case] accepted: bool) {
    let field = Int8::new("name")
        .with_description("Description")
        .try_with_range(mk_range(-10, 10).unwrap())
        .unwrap();
    assert_eq!(field.description(), "Description");
    assert_eq!(field.with_str(raw).is_ok(), accepted);
}

#[test]
fn uint16_with_string_range() {
    let field = UInt16::new("").with_range_str("3", "3").unwrap();
    assert_eq!(field.name(), "");
    assert!(field.with_str("3").is_ok());
    assert!(field.with_str("4").is_err());
}

#[test]
fn float_with_range() {
    let field = Float::new("name")
        .try_with_range(mk_range(-1.0, 1.0).unwrap())
        .unwrap();
    assert!(field.with_str("1").is_ok());
    assert!(field.with_str("-1.1").is_err());
}

#[test]
fn range_wider_than_storage_is_rejected_up_front() {
    let err = UInt8::new("u").try_with_range(mk_range(-10, 10).unwrap()).unwrap_err();
    assert_eq!(err.code(), "STRUCT_ATTRIBUTE");
}

// ============================================================================
// DESCRIPTION: defaults to empty on every node kind
// ============================================================================

#[test]
fn descriptions_default_to_empty() {
    let block = Block::new("root")
        .with_field(UInt8::new("u8"))
        .with_field(VarArray::new("list", UInt8::new("u8")))
        .with_field(PrefixedArray::<UInt8Kind>::new("bytes", UInt8::new("u8"), "count"));

    assert_eq!(block.description(), "");
    for field in block.fields() {
        assert_eq!(field.description(), "", "{}", field.name());
    }
}

#[test]
fn descriptions_attach_to_every_node_kind() {
    let block = Block::new("root")
        .with_description("Description")
        .with_field(UInt8::new("u8").with_description("Description"))
        .with_field(VarArray::new("list", UInt8::new("u8")).with_description("Description"))
        .with_field(
            PrefixedArray::<UInt8Kind>::new("name", UInt8::new("u8"), "count")
                .with_description("Description"),
        );

    assert_eq!(block.description(), "Description");
    assert!(block.fields().iter().all(|f| f.description() == "Description"));
    assert_eq!(
        block.field("name").map(Structure::type_name).as_deref(),
        Some("PrefixedArray<UInt8>")
    );
}

#[test]
fn free_form_attributes() {
    let mut block = Block::new("root");
    block.set_attribute("version", "1");
    block.set_attribute("version", "2");
    assert_eq!(block.attributes().get("version").map(String::as_str), Some("2"));

    let field = UInt8::new("a").with_attribute("unit", "ms");
    assert_eq!(field.attributes()["unit"], "ms");
}

// ============================================================================
// DEFAULT: the builder literal and validation of the default itself
// ============================================================================

#[test]
fn default_literal_on_a_block() {
    let schema = Block::new("root")
        .with_field(UInt8::new("a").with_default(42))
        .with_field(Float::new("b"));

    assert!(
        schema
            .with(&ValueBuilder::new(vec![Literal::Default, Literal::from(2.5)]))
            .is_ok()
    );
    assert!(
        schema
            .with(&ValueBuilder::new(vec![Literal::from(42), Literal::from(2.5)]))
            .is_ok()
    );

    let err = schema
        .with(&ValueBuilder::new(vec![Literal::Default, Literal::Default]))
        .unwrap_err();
    assert_eq!(err.location(), Some("root/b"));
}

#[test]
fn default_outside_the_range_fails_when_used() {
    let field = UInt8::new("a")
        .with_range(Range::new(0, 10).unwrap())
        .with_default(42);
    assert_eq!(field.default_value(), Some(&42));
    let err = field.with(&ValueBuilder::new(Literal::Default)).unwrap_err();
    assert_eq!(err.root_cause().code(), "STRUCT_RANGE");
}

#[test]
fn ranges_round_trip_through_json() {
    let range: Range<i8> = serde_json::from_str(r#"{"min": -10, "max": 10}"#).unwrap();
    assert_eq!(range, mk_range(-10, 10).unwrap().cast().unwrap());
    assert!(serde_json::from_str::<Range<i8>>(r#"{"min": 20, "max": 10}"#).is_err());
}
