//! Delimited record codec.
//!
//! A record is stored as a single string whose fields are joined by a
//! separator character (`@` unless the record type says otherwise):
//!
//! ```text
//! Goblin@1d4      -> TypeAndAmount { kind: "Goblin", roll: "1d4" }
//! 3@18            -> RangeSelection { lower: 3, upper: 18 }
//! ```
//!
//! The codec itself is a pair of free functions, [`parse_record`] and
//! [`format_record`], parameterized by a decode/encode function. Record types
//! implement [`DataSelection`] to bundle their own pair together with their
//! separator and field count.
//!
//! Fields must not contain the separator. [`format_record`] rejects such
//! values instead of producing a string that would not decode back.

mod error;

use std::str::FromStr;

pub use error::CodecError;

/// Separator used when a record type does not declare its own.
pub const DEFAULT_SEPARATOR: char = '@';

/// A typed record with a fixed, ordered set of delimited fields.
///
/// Implementations must satisfy the round-trip law
/// `T::decode(&fields_of(x.encode())) == Ok(x)` and must always return exactly
/// [`FIELD_COUNT`](Self::FIELD_COUNT) fields from [`encode`](Self::encode).
/// Derived values are never part of the encoding.
pub trait DataSelection: Sized {
    /// Field delimiter.
    const SEPARATOR: char = DEFAULT_SEPARATOR;

    /// Number of fields produced by `encode` and expected by `decode`.
    const FIELD_COUNT: usize;

    /// Builds a record from its ordered fields.
    ///
    /// Called with exactly `FIELD_COUNT` fields when reached through
    /// [`parse`](Self::parse).
    fn decode(fields: &[&str]) -> Result<Self, CodecError>;

    /// Produces the ordered fields of this record.
    fn encode(&self) -> Vec<String>;

    /// Decodes a raw delimited string, checking the field count first.
    fn parse(raw: &str) -> Result<Self, CodecError> {
        parse_record(
            raw,
            |fields| {
                expect_fields(fields, Self::FIELD_COUNT)?;
                Self::decode(fields)
            },
            Self::SEPARATOR,
        )
    }

    /// Encodes this record into its delimited string form.
    fn format(&self) -> Result<String, CodecError> {
        format_record(
            self,
            |value| {
                let fields = value.encode();
                debug_assert_eq!(
                    fields.len(),
                    Self::FIELD_COUNT,
                    "encode must produce FIELD_COUNT fields"
                );
                fields
            },
            Self::SEPARATOR,
        )
    }
}

/// Splits `raw` on every occurrence of `separator` and hands the ordered
/// fields to `decode`.
///
/// Empty fields are preserved, so `"a@@b"` yields three fields.
pub fn parse_record<T, F>(raw: &str, decode: F, separator: char) -> Result<T, CodecError>
where
    F: FnOnce(&[&str]) -> Result<T, CodecError>,
{
    let fields: Vec<&str> = raw.split(separator).collect();
    decode(&fields)
}

/// Encodes `value` with `encode` and joins the fields with `separator`.
///
/// # Errors
///
/// Returns [`CodecError::SeparatorInField`] if any field contains the
/// separator.
pub fn format_record<T, F>(value: &T, encode: F, separator: char) -> Result<String, CodecError>
where
    F: FnOnce(&T) -> Vec<String>,
{
    let fields = encode(value);

    if let Some((index, field)) = fields
        .iter()
        .enumerate()
        .find(|(_, field)| field.contains(separator))
    {
        return Err(CodecError::SeparatorInField {
            index,
            value: field.clone(),
            separator,
        });
    }

    let mut buf = [0u8; 4];
    Ok(fields.join(separator.encode_utf8(&mut buf)))
}

/// Fails with [`CodecError::FieldCount`] unless `fields` has exactly
/// `expected` entries.
pub fn expect_fields(fields: &[&str], expected: usize) -> Result<(), CodecError> {
    if fields.len() == expected {
        Ok(())
    } else {
        Err(CodecError::FieldCount {
            expected,
            found: fields.len(),
            fields: fields.iter().map(|f| (*f).to_owned()).collect(),
        })
    }
}

/// Parses a single field into `N`, naming the field in the error.
pub fn parse_field<N>(field: &'static str, value: &str) -> Result<N, CodecError>
where
    N: FromStr,
    N::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: N::Err| CodecError::invalid_field(field, value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair {
        left: String,
        right: String,
    }

    fn decode_pair(fields: &[&str]) -> Result<Pair, CodecError> {
        expect_fields(fields, 2)?;
        Ok(Pair {
            left: fields[0].to_owned(),
            right: fields[1].to_owned(),
        })
    }

    fn encode_pair(pair: &Pair) -> Vec<String> {
        vec![pair.left.clone(), pair.right.clone()]
    }

    #[test]
    fn parse_splits_on_every_separator() {
        let fields = parse_record("a@b@c", |f| Ok(f.len()), '@').unwrap();
        assert_eq!(fields, 3);

        let empty = parse_record("a@@b", |f| Ok(f[1].is_empty()), '@').unwrap();
        assert!(empty);
    }

    #[test]
    fn parse_with_custom_separator() {
        let pair = parse_record("left/right", decode_pair, '/').unwrap();
        assert_eq!(pair.left, "left");
        assert_eq!(pair.right, "right");
    }

    #[test]
    fn parse_with_too_few_fields_fails() {
        let err = parse_record("lonely", decode_pair, '@').unwrap_err();
        assert_eq!(
            err,
            CodecError::FieldCount {
                expected: 2,
                found: 1,
                fields: vec!["lonely".to_owned()],
            }
        );
    }

    #[test]
    fn format_joins_fields() {
        let pair = Pair {
            left: "x".into(),
            right: "y".into(),
        };
        assert_eq!(format_record(&pair, encode_pair, '@').unwrap(), "x@y");
        assert_eq!(format_record(&pair, encode_pair, ',').unwrap(), "x,y");
    }

    #[test]
    fn format_rejects_separator_inside_field() {
        let pair = Pair {
            left: "x@z".into(),
            right: "y".into(),
        };
        let err = format_record(&pair, encode_pair, '@').unwrap_err();
        assert!(matches!(
            err,
            CodecError::SeparatorInField {
                index: 0,
                separator: '@',
                ..
            }
        ));
    }

    #[test]
    fn parse_field_reports_field_name() {
        let err = parse_field::<i32>("Lower", "ten").unwrap_err();
        assert!(matches!(err, CodecError::InvalidField { field: "Lower", .. }));
        assert_eq!(parse_field::<i32>("Lower", " 10 ").unwrap(), 10);
    }
}
