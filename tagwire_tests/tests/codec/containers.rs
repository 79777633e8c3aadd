use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tagwire_codec::{BinaryCodec, CodecError};
use tagwire_types::schema::{
    FieldDescriptor, LogicalType, MessageDescriptor, MessageShape, Requirement, SchemaRegistry,
};
use tagwire_types::value::Value;

fn map_schema() -> Result<Arc<MessageDescriptor>> {
    let mut registry = SchemaRegistry::new();
    let descriptor = registry.define_message(
        "demo.Ranks",
        MessageShape::Struct,
        vec![FieldDescriptor::new(
            1,
            "ranks",
            Requirement::Optional,
            LogicalType::Map(Box::new(LogicalType::I32), Box::new(LogicalType::Str)),
        )],
    )?;
    Ok(descriptor)
}

#[test]
fn map_entries_survive_any_wire_order() -> Result<()> {
    let descriptor = map_schema()?;

    // Hand-laid envelope with the two entries in descending key order.
    #[rustfmt::skip]
    let buf = [
        0x0d, 0x00, 0x01,       // map field, id 1
        0x08, 0x0b,             // key tag i32, value tag binary
        0x00, 0x00, 0x00, 0x02, // two entries
        0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x62, // 2 -> "b"
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x61, // 1 -> "a"
        0x00,                   // STOP
    ];

    let decoded = BinaryCodec::strict().from_bytes(&buf, &descriptor)?;
    let expected = Value::Map(BTreeMap::from([
        (Value::I32(1), Value::Str(String::from("a"))),
        (Value::I32(2), Value::Str(String::from("b"))),
    ]));
    assert_eq!(decoded.get(1), Some(&expected));

    // And our own encoding of the same value round-trips.
    let buf = BinaryCodec::strict().to_bytes(&decoded)?;
    let again = BinaryCodec::strict().from_bytes(&buf, &descriptor)?;
    assert_eq!(again, decoded);
    Ok(())
}

#[test]
fn set_deduplicates_repeated_wire_items() -> Result<()> {
    let mut registry = SchemaRegistry::new();
    let descriptor = registry.define_message(
        "demo.Tags",
        MessageShape::Struct,
        vec![FieldDescriptor::new(
            1,
            "tags",
            Requirement::Optional,
            LogicalType::Set(Box::new(LogicalType::Str)),
        )],
    )?;

    #[rustfmt::skip]
    let buf = [
        0x0e, 0x00, 0x01,       // set field, id 1
        0x0b,                   // item tag binary
        0x00, 0x00, 0x00, 0x02, // two items
        0x00, 0x00, 0x00, 0x01, 0x78, // "x"
        0x00, 0x00, 0x00, 0x01, 0x78, // "x" again
        0x00,                   // STOP
    ];

    let decoded = BinaryCodec::strict().from_bytes(&buf, &descriptor)?;
    let expected = Value::Set(BTreeSet::from([Value::Str(String::from("x"))]));
    assert_eq!(decoded.get(1), Some(&expected));
    Ok(())
}

#[test]
fn null_container_entries_fail_strict_and_drop_lenient() -> Result<()> {
    let mut registry = SchemaRegistry::new();
    let role = registry.define_enum("demo.Role", vec![(1, "USER")])?;
    let descriptor = registry.define_message(
        "demo.RoleMap",
        MessageShape::Struct,
        vec![
            FieldDescriptor::new(
                1,
                "by_rank",
                Requirement::Optional,
                LogicalType::Map(
                    Box::new(LogicalType::I32),
                    Box::new(LogicalType::Enum(Arc::clone(&role))),
                ),
            ),
            FieldDescriptor::new(
                2,
                "all",
                Requirement::Optional,
                LogicalType::List(Box::new(LogicalType::Enum(role))),
            ),
        ],
    )?;

    // Map value carries enum id 9, which this schema does not know.
    #[rustfmt::skip]
    let map_buf = [
        0x0d, 0x00, 0x01,
        0x08, 0x08,
        0x00, 0x00, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x01, // key 1
        0x00, 0x00, 0x00, 0x09, // value: unknown enum id
        0x00,
    ];

    let err = BinaryCodec::strict()
        .from_bytes(&map_buf, &descriptor)
        .unwrap_err();
    assert!(matches!(err, CodecError::NullMapValue));

    let decoded = BinaryCodec::lenient().from_bytes(&map_buf, &descriptor)?;
    assert_eq!(decoded.get(1), Some(&Value::Map(BTreeMap::new())));

    // Same story for a list item.
    #[rustfmt::skip]
    let list_buf = [
        0x0f, 0x00, 0x02,
        0x08,
        0x00, 0x00, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x09, // unknown enum id
        0x00,
    ];

    let err = BinaryCodec::strict()
        .from_bytes(&list_buf, &descriptor)
        .unwrap_err();
    assert!(matches!(err, CodecError::NullContainerItem("list")));

    let decoded = BinaryCodec::lenient().from_bytes(&list_buf, &descriptor)?;
    assert_eq!(decoded.get(2), Some(&Value::List(vec![])));
    Ok(())
}
