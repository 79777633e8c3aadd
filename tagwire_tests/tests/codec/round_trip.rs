use super::fixtures;
use anyhow::Result;
use std::collections::BTreeMap;
use tagwire_codec::BinaryCodec;
use tagwire_types::value::{Message, Value};

fn full_person() -> Result<Message> {
    let schema = fixtures::person_v1()?;
    let mut builder = schema.person.builder();
    builder
        .set(1, Value::Str(String::from("Ada")))
        .set(2, Value::I32(7))
        .set(3, Value::Str(String::from("ada@example.com")))
        .set(
            4,
            Value::List(vec![
                Value::Str(String::from("ops")),
                Value::Str(String::from("dev")),
            ]),
        )
        .set(
            5,
            Value::Map(BTreeMap::from([
                (Value::I32(1), Value::Str(String::from("a"))),
                (Value::I32(2), Value::Str(String::from("b"))),
            ])),
        )
        .set(6, Value::Enum(schema.role.value_by_name_err("ADMIN")?));
    Ok(builder.build())
}

#[test]
fn strict_round_trip_preserves_everything() -> Result<()> {
    let schema = fixtures::person_v1()?;
    let message = full_person()?;

    let codec = BinaryCodec::strict();
    let buf = codec.to_bytes(&message)?;
    let decoded = codec.from_bytes(&buf, &schema.person)?;

    assert_eq!(message, decoded);
    Ok(())
}

#[test]
fn serialize_reports_exact_byte_count() -> Result<()> {
    let message = full_person()?;

    let codec = BinaryCodec::strict();
    let mut buf = vec![];
    let w_len = codec.serialize(&mut buf, &message)?;
    assert_eq!(*w_len, buf.len());
    // STOP is included in the count.
    assert_eq!(buf.last(), Some(&0x00));
    Ok(())
}

#[test]
fn consecutive_envelopes_share_one_stream() -> Result<()> {
    let schema = fixtures::person_v1()?;
    let message = full_person()?;

    let codec = BinaryCodec::strict();
    let mut buf = vec![];
    codec.serialize(&mut buf, &message)?;
    codec.serialize(&mut buf, &message)?;

    let mut r = std::io::Cursor::new(&buf[..]);
    let first = codec.deserialize(&mut r, &schema.person)?;
    let second = codec.deserialize(&mut r, &schema.person)?;
    assert_eq!(first, message);
    assert_eq!(second, message);
    assert_eq!(r.position(), buf.len() as u64);
    Ok(())
}
