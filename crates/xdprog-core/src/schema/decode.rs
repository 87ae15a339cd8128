use super::descriptor::{Constraint, FieldDescriptor, FieldKind, Schema};
use super::error::DecodeError;
use super::reader::RecordReader;
use super::value::{Record, Value};

/// Decode one record from `buf` by walking `schema` in catalog order.
///
/// Each field is extracted, type-converted and validated before it is stored
/// under its catalog name. Decoding is all-or-nothing: the first failure
/// aborts the whole record and names the offending field. The function is a
/// pure map from (buffer, schema) to a record and may be called concurrently
/// on independent buffers.
pub fn decode(buf: &[u8], schema: &Schema) -> Result<Record, DecodeError> {
    let reader = RecordReader::new(buf);
    let mut record = Record::with_capacity(schema.name, schema.fields.len());
    for field in schema.fields {
        let value = decode_field(&reader, buf, field)?;
        if let Some(constraint) = &field.constraint {
            check_constraint(field.name, &value, constraint)?;
        }
        record.push(field.name, value);
    }
    Ok(record)
}

fn decode_field(
    reader: &RecordReader<'_>,
    buf: &[u8],
    field: &FieldDescriptor,
) -> Result<Value, DecodeError> {
    match &field.kind {
        FieldKind::Bool => {
            let raw = read_scalar_byte(reader, field)?;
            match raw {
                0 => Ok(Value::Bool(false)),
                1 => Ok(Value::Bool(true)),
                value => Err(DecodeError::InvalidBoolean {
                    field: field.name,
                    value,
                }),
            }
        }
        FieldKind::UInt(width) => {
            if field.bits.is_some() {
                if *width != 1 {
                    return Err(DecodeError::UnsupportedFieldType {
                        field: field.name,
                        detail: "bit ranges only apply to single-byte fields",
                    });
                }
                Ok(Value::UInt(u64::from(read_scalar_byte(reader, field)?)))
            } else {
                Ok(Value::UInt(reader.read_uint_le(
                    field.name,
                    field.offset,
                    *width,
                )?))
            }
        }
        FieldKind::Int(width) => {
            if field.bits.is_some() {
                return Err(DecodeError::UnsupportedFieldType {
                    field: field.name,
                    detail: "bit ranges only apply to single-byte unsigned fields",
                });
            }
            Ok(Value::Int(reader.read_int_le(
                field.name,
                field.offset,
                *width,
            )?))
        }
        FieldKind::Enum { spec, width } => {
            let code = if field.bits.is_some() {
                if *width != 1 {
                    return Err(DecodeError::UnsupportedFieldType {
                        field: field.name,
                        detail: "bit ranges only apply to single-byte fields",
                    });
                }
                u64::from(read_scalar_byte(reader, field)?)
            } else {
                reader.read_uint_le(field.name, field.offset, *width)?
            };
            match (spec.label)(code) {
                Some(label) => Ok(Value::Enum { code, label }),
                None => Err(DecodeError::UndefinedEnumValue {
                    field: field.name,
                    enum_name: spec.name,
                    code,
                }),
            }
        }
        FieldKind::Text { max_len } => {
            if field.bits.is_some() {
                return Err(DecodeError::UnsupportedFieldType {
                    field: field.name,
                    detail: "bit ranges do not apply to text fields",
                });
            }
            let len = max_len.ok_or(DecodeError::MissingLengthSpec { field: field.name })?;
            Ok(Value::Text(reader.read_ascii(field.name, field.offset, len)?))
        }
        FieldKind::Record { schema, overlay } => {
            if field.bits.is_some() {
                return Err(DecodeError::UnsupportedFieldType {
                    field: field.name,
                    detail: "bit ranges do not apply to sub-records",
                });
            }
            let nested = if *overlay {
                buf
            } else {
                buf.get(field.offset..).ok_or(DecodeError::OutOfBounds {
                    field: field.name,
                    needed: field.offset,
                    actual: buf.len(),
                })?
            };
            Ok(Value::Record(decode(nested, schema)?))
        }
    }
}

fn read_scalar_byte(
    reader: &RecordReader<'_>,
    field: &FieldDescriptor,
) -> Result<u8, DecodeError> {
    match field.bits {
        Some((start, end)) => reader.read_bits(field.name, field.offset, start, end),
        None => reader.read_u8(field.name, field.offset),
    }
}

fn check_constraint(
    field: &'static str,
    value: &Value,
    constraint: &Constraint,
) -> Result<(), DecodeError> {
    let violation = || DecodeError::ConstraintViolation {
        field,
        value: value.clone(),
        constraint: constraint.clone(),
    };
    match constraint {
        Constraint::Range { min, max } => {
            let numeric = match value {
                Value::UInt(v) => i64::try_from(*v).map_err(|_| violation())?,
                Value::Int(v) => *v,
                Value::Enum { code, .. } => i64::try_from(*code).map_err(|_| violation())?,
                _ => {
                    return Err(DecodeError::UnsupportedFieldType {
                        field,
                        detail: "range constraints only apply to numeric fields",
                    });
                }
            };
            if numeric < *min || numeric > *max {
                return Err(violation());
            }
            Ok(())
        }
        Constraint::Exact(expected) => match value {
            Value::Text(text) if text == expected => Ok(()),
            Value::Text(_) => Err(violation()),
            _ => Err(DecodeError::UnsupportedFieldType {
                field,
                detail: "exact constraints only apply to text fields",
            }),
        },
        Constraint::Charset(allowed) => match value {
            Value::Text(text) => {
                if text.chars().all(|c| allowed.contains(c)) {
                    Ok(())
                } else {
                    Err(violation())
                }
            }
            _ => Err(DecodeError::UnsupportedFieldType {
                field,
                detail: "charset constraints only apply to text fields",
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::descriptor::EnumSpec;

    static WAVE: EnumSpec = EnumSpec {
        name: "wave",
        label: |code| match code {
            0 => Some("SQR"),
            1 => Some("TRI"),
            2 => Some("SAW"),
            _ => None,
        },
    };

    static POINT: Schema = Schema {
        name: "point",
        fields: &[
            FieldDescriptor::uint("x", 0, 2),
            FieldDescriptor::uint("y", 2, 2),
        ],
    };

    static SAMPLE: Schema = Schema {
        name: "sample",
        fields: &[
            FieldDescriptor::marker("header", 0, "AB"),
            FieldDescriptor::boolean("enabled", 2),
            FieldDescriptor::ranged("depth", 3, 2, 0, 1023),
            FieldDescriptor::enumeration("wave", 5, &WAVE),
            FieldDescriptor::bit("low_flag", 6, 0),
            FieldDescriptor::bit_range("mid", 6, 2, 4),
            FieldDescriptor::record("point", 7, &POINT),
            FieldDescriptor::int("trim", 11, 1),
            FieldDescriptor::uint("stamp", 12, 4),
            FieldDescriptor::uint("serial", 16, 8),
        ],
    };

    fn sample_buf() -> Vec<u8> {
        let mut buf = vec![0u8; 24];
        buf[0..2].copy_from_slice(b"AB");
        buf[2] = 1;
        buf[3..5].copy_from_slice(&600u16.to_le_bytes());
        buf[5] = 2;
        buf[6] = 0b0001_0101; // low_flag = 1, mid (bits 2..=4) = 0b101
        buf[7..9].copy_from_slice(&7u16.to_le_bytes());
        buf[9..11].copy_from_slice(&9u16.to_le_bytes());
        buf[11] = 0xFE; // trim = -2
        buf[12..16].copy_from_slice(&0xDEAD_BEEFu32.to_le_bytes());
        buf[16..24].copy_from_slice(&0x0102_0304_0506_0708u64.to_le_bytes());
        buf
    }

    #[test]
    fn decodes_every_field_kind() {
        let record = decode(&sample_buf(), &SAMPLE).expect("decode sample");
        assert_eq!(record.text("header"), "AB");
        assert!(record.flag("enabled"));
        assert_eq!(record.uint("depth"), 600);
        assert_eq!(record.enum_code("wave"), 2);
        assert!(record.flag("low_flag"));
        assert_eq!(record.uint("mid"), 0b101);
        assert_eq!(record.record("point").uint("x"), 7);
        assert_eq!(record.record("point").uint("y"), 9);
        assert_eq!(record.int("trim"), -2);
        assert_eq!(record.uint("stamp"), 0xDEAD_BEEF);
        assert_eq!(record.uint("serial"), 0x0102_0304_0506_0708);
    }

    #[test]
    fn decode_is_deterministic() {
        let buf = sample_buf();
        let first = decode(&buf, &SAMPLE).expect("first decode");
        let second = decode(&buf, &SAMPLE).expect("second decode");
        assert_eq!(first, second);
    }

    #[test]
    fn boolean_rejects_codes_above_one() {
        let mut buf = sample_buf();
        buf[2] = 2;
        let err = decode(&buf, &SAMPLE).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidBoolean {
                field: "enabled",
                value: 2
            }
        ));
    }

    #[test]
    fn enum_rejects_unmapped_code() {
        let mut buf = sample_buf();
        buf[5] = 9;
        let err = decode(&buf, &SAMPLE).unwrap_err();
        match err {
            DecodeError::UndefinedEnumValue {
                field,
                enum_name,
                code,
            } => {
                assert_eq!(field, "wave");
                assert_eq!(enum_name, "wave");
                assert_eq!(code, 9);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn range_violation_reports_field_and_value() {
        let mut buf = sample_buf();
        buf[3..5].copy_from_slice(&2000u16.to_le_bytes());
        let err = decode(&buf, &SAMPLE).unwrap_err();
        match err {
            DecodeError::ConstraintViolation {
                field,
                value,
                constraint,
            } => {
                assert_eq!(field, "depth");
                assert_eq!(value, Value::UInt(2000));
                assert_eq!(constraint, Constraint::Range { min: 0, max: 1023 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn marker_mismatch_is_a_constraint_violation() {
        let mut buf = sample_buf();
        buf[0..2].copy_from_slice(b"XY");
        let err = decode(&buf, &SAMPLE).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::ConstraintViolation { field: "header", .. }
        ));
    }

    #[test]
    fn first_overrunning_field_aborts_the_record() {
        let buf = sample_buf();
        let err = decode(&buf[..6], &SAMPLE).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::OutOfBounds {
                field: "low_flag",
                needed: 7,
                actual: 6
            }
        ));
    }

    #[test]
    fn text_without_length_is_a_schema_defect() {
        static BROKEN: Schema = Schema {
            name: "broken",
            fields: &[FieldDescriptor {
                name: "name",
                offset: 0,
                bits: None,
                kind: FieldKind::Text { max_len: None },
                constraint: None,
            }],
        };
        let err = decode(&[0u8; 4], &BROKEN).unwrap_err();
        assert!(matches!(err, DecodeError::MissingLengthSpec { field: "name" }));
    }

    #[test]
    fn bit_range_on_text_is_a_schema_defect() {
        static BROKEN: Schema = Schema {
            name: "broken",
            fields: &[FieldDescriptor {
                name: "name",
                offset: 0,
                bits: Some((0, 3)),
                kind: FieldKind::Text { max_len: Some(4) },
                constraint: None,
            }],
        };
        let err = decode(&[0u8; 4], &BROKEN).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnsupportedFieldType { field: "name", .. }
        ));
    }

    #[test]
    fn bit_range_on_wide_integer_is_a_schema_defect() {
        static BROKEN: Schema = Schema {
            name: "broken",
            fields: &[FieldDescriptor {
                name: "wide",
                offset: 0,
                bits: Some((0, 3)),
                kind: FieldKind::UInt(2),
                constraint: None,
            }],
        };
        let err = decode(&[0u8; 4], &BROKEN).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnsupportedFieldType { field: "wide", .. }
        ));
    }

    #[test]
    fn charset_constraint_rejects_foreign_characters() {
        static NAMED: Schema = Schema {
            name: "named",
            fields: &[FieldDescriptor::text("name", 0, 4)
                .with(Constraint::Charset("ABCD"))],
        };
        assert!(decode(b"ABBA", &NAMED).is_ok());
        let err = decode(b"AB!A", &NAMED).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::ConstraintViolation { field: "name", .. }
        ));
    }
}
