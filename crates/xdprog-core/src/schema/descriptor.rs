use std::fmt;

/// One hardware enumeration: a diagnostic name plus a total code -> label
/// lookup. A `None` label marks an unmapped code, which the decoder rejects.
pub struct EnumSpec {
    pub name: &'static str,
    pub label: fn(u64) -> Option<&'static str>,
}

impl fmt::Debug for EnumSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumSpec").field("name", &self.name).finish()
    }
}

/// Semantic type of one field, sized per the wire format.
#[derive(Debug)]
pub enum FieldKind {
    /// Single byte (or bit range) accepting only the raw codes 0 and 1.
    Bool,
    /// Little-endian unsigned integer of the given byte width (1, 2, 4 or 8).
    UInt(u8),
    /// Little-endian signed integer of the given byte width (1, 2, 4 or 8).
    Int(u8),
    /// Enumerated code of the given byte width, validated against `spec`.
    Enum { spec: &'static EnumSpec, width: u8 },
    /// Fixed-length 7-bit text; embedded NUL bytes are stripped.
    Text { max_len: Option<usize> },
    /// Embedded sub-record. With `overlay` set the nested schema addresses
    /// the parent buffer directly instead of a slice at the field offset.
    Record {
        schema: &'static Schema,
        overlay: bool,
    },
}

/// Per-field validation applied after type conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Inclusive numeric range.
    Range { min: i64, max: i64 },
    /// Exact text match (format markers).
    Exact(&'static str),
    /// Every character must come from the allowed set.
    Charset(&'static str),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Range { min, max } => write!(f, "range {min}..={max}"),
            Constraint::Exact(text) => write!(f, "exact marker {text:?}"),
            Constraint::Charset(_) => write!(f, "allowed character set"),
        }
    }
}

/// Static metadata describing how to locate, interpret and validate one
/// record field. Catalogs of these drive the generic decoder; the tables in
/// `records::*::layout` are the source of truth for the wire format.
#[derive(Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub offset: usize,
    /// Sub-byte bit range, least-significant bit first. Only legal on
    /// single-byte fields.
    pub bits: Option<(u8, u8)>,
    pub kind: FieldKind,
    pub constraint: Option<Constraint>,
}

/// Ordered field catalog for one record type.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

const fn assert_bit_range(start: u8, end: u8) {
    assert!(start <= end && end <= 7, "bit range must satisfy start <= end <= 7");
}

impl FieldDescriptor {
    pub const fn boolean(name: &'static str, offset: usize) -> Self {
        Self {
            name,
            offset,
            bits: None,
            kind: FieldKind::Bool,
            constraint: None,
        }
    }

    /// Single-bit boolean flag.
    pub const fn bit(name: &'static str, offset: usize, bit: u8) -> Self {
        assert_bit_range(bit, bit);
        Self {
            name,
            offset,
            bits: Some((bit, bit)),
            kind: FieldKind::Bool,
            constraint: None,
        }
    }

    /// Unsigned sub-byte field covering `start..=end` bits.
    pub const fn bit_range(name: &'static str, offset: usize, start: u8, end: u8) -> Self {
        assert_bit_range(start, end);
        Self {
            name,
            offset,
            bits: Some((start, end)),
            kind: FieldKind::UInt(1),
            constraint: None,
        }
    }

    pub const fn uint(name: &'static str, offset: usize, width: u8) -> Self {
        Self {
            name,
            offset,
            bits: None,
            kind: FieldKind::UInt(width),
            constraint: None,
        }
    }

    pub const fn int(name: &'static str, offset: usize, width: u8) -> Self {
        Self {
            name,
            offset,
            bits: None,
            kind: FieldKind::Int(width),
            constraint: None,
        }
    }

    /// Unsigned field with an inclusive range constraint.
    pub const fn ranged(name: &'static str, offset: usize, width: u8, min: i64, max: i64) -> Self {
        Self {
            name,
            offset,
            bits: None,
            kind: FieldKind::UInt(width),
            constraint: Some(Constraint::Range { min, max }),
        }
    }

    pub const fn enumeration(name: &'static str, offset: usize, spec: &'static EnumSpec) -> Self {
        Self {
            name,
            offset,
            bits: None,
            kind: FieldKind::Enum { spec, width: 1 },
            constraint: None,
        }
    }

    /// Enumerated code stored in the bits `start..=end` of a single byte.
    pub const fn enum_bits(
        name: &'static str,
        offset: usize,
        start: u8,
        end: u8,
        spec: &'static EnumSpec,
    ) -> Self {
        assert_bit_range(start, end);
        Self {
            name,
            offset,
            bits: Some((start, end)),
            kind: FieldKind::Enum { spec, width: 1 },
            constraint: None,
        }
    }

    pub const fn text(name: &'static str, offset: usize, max_len: usize) -> Self {
        Self {
            name,
            offset,
            bits: None,
            kind: FieldKind::Text {
                max_len: Some(max_len),
            },
            constraint: None,
        }
    }

    /// Fixed ASCII marker: a text field that must match `tag` exactly.
    pub const fn marker(name: &'static str, offset: usize, tag: &'static str) -> Self {
        Self {
            name,
            offset,
            bits: None,
            kind: FieldKind::Text {
                max_len: Some(tag.len()),
            },
            constraint: Some(Constraint::Exact(tag)),
        }
    }

    pub const fn record(name: &'static str, offset: usize, schema: &'static Schema) -> Self {
        Self {
            name,
            offset,
            bits: None,
            kind: FieldKind::Record {
                schema,
                overlay: false,
            },
            constraint: None,
        }
    }

    /// Sub-record whose schema addresses the parent buffer directly.
    pub const fn overlay(name: &'static str, offset: usize, schema: &'static Schema) -> Self {
        Self {
            name,
            offset,
            bits: None,
            kind: FieldKind::Record {
                schema,
                overlay: true,
            },
            constraint: None,
        }
    }

    pub const fn with(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }
}
