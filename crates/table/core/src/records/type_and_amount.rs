use crate::codec::{CodecError, DataSelection};
use crate::roll::{Dice, Roll};

/// A named thing together with how many of it to generate.
///
/// Encoded as `Type@Roll`, e.g. `Goblin@1d4` or `Gold@250`.
///
/// `amount` is derived from `roll` on access and is not part of the encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTypeAndAmount", into = "RawTypeAndAmount")
)]
pub struct TypeAndAmount {
    kind: String,
    roll: String,
    expression: Roll,
}

/// Serialized form of [`TypeAndAmount`]; deserialization goes through
/// [`TypeAndAmount::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawTypeAndAmount {
    kind: String,
    roll: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTypeAndAmount> for TypeAndAmount {
    type Error = CodecError;

    fn try_from(raw: RawTypeAndAmount) -> Result<Self, Self::Error> {
        Self::new(raw.kind, raw.roll)
    }
}

#[cfg(feature = "serde")]
impl From<TypeAndAmount> for RawTypeAndAmount {
    fn from(record: TypeAndAmount) -> Self {
        Self {
            kind: record.kind,
            roll: record.roll,
        }
    }
}

impl TypeAndAmount {
    /// Creates a record, validating that `roll` is a roll expression.
    pub fn new(kind: impl Into<String>, roll: impl Into<String>) -> Result<Self, CodecError> {
        let roll = roll.into();
        let expression = roll
            .parse::<Roll>()
            .map_err(|e| CodecError::invalid_field("Roll", &roll, e))?;
        Ok(Self {
            kind: kind.into(),
            roll,
            expression,
        })
    }

    /// The `Type` field.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The `Roll` field exactly as stored.
    pub fn roll(&self) -> &str {
        &self.roll
    }

    /// Parsed form of the `Roll` field.
    pub fn roll_expression(&self) -> Roll {
        self.expression
    }

    /// Rolls the amount. Constant rolls always return the same value.
    pub fn amount<D: Dice + ?Sized>(&self, dice: &D) -> i64 {
        self.roll_expression().evaluate(dice)
    }

    /// Smallest and largest amount this record can produce.
    pub fn amount_range(&self) -> (i64, i64) {
        let roll = self.roll_expression();
        (roll.min(), roll.max())
    }
}

impl DataSelection for TypeAndAmount {
    const FIELD_COUNT: usize = 2;

    fn decode(fields: &[&str]) -> Result<Self, CodecError> {
        crate::codec::expect_fields(fields, Self::FIELD_COUNT)?;
        Self::new(fields[0], fields[1])
    }

    fn encode(&self) -> Vec<String> {
        vec![self.kind.clone(), self.roll.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::SeededDice;

    #[test]
    fn decodes_goblin_row() {
        let record = TypeAndAmount::parse("Goblin@1d4").unwrap();
        assert_eq!(record.kind(), "Goblin");
        assert_eq!(record.roll(), "1d4");
        assert_eq!(record.format().unwrap(), "Goblin@1d4");
    }

    #[test]
    fn non_canonical_roll_text_is_preserved() {
        let record = TypeAndAmount::parse("Orc@d6").unwrap();
        assert_eq!(record.format().unwrap(), "Orc@d6");
        assert_eq!(record.roll_expression().to_string(), "1d6");
    }

    #[test]
    fn rejects_bad_roll() {
        let err = TypeAndAmount::parse("Goblin@lots").unwrap_err();
        assert!(matches!(err, CodecError::InvalidField { field: "Roll", .. }));
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            TypeAndAmount::parse("Goblin"),
            Err(CodecError::FieldCount {
                expected: 2,
                found: 1,
                ..
            })
        ));
        assert!(matches!(
            TypeAndAmount::parse("Goblin@1d4@extra"),
            Err(CodecError::FieldCount {
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn amount_is_derived_from_roll() {
        let dice = SeededDice::new(3);
        let fixed = TypeAndAmount::new("Gold", "250").unwrap();
        assert_eq!(fixed.amount(&dice), 250);
        assert_eq!(fixed.amount_range(), (250, 250));

        let rolled = TypeAndAmount::new("Goblin", "2d4+1").unwrap();
        assert_eq!(rolled.amount_range(), (3, 9));
        for _ in 0..100 {
            let amount = rolled.amount(&dice);
            assert!((3..=9).contains(&amount));
        }
    }

    #[test]
    fn rejects_roll_whose_bounds_would_overflow() {
        let err = TypeAndAmount::parse("Gold@1d6+9223372036854775807").unwrap_err();
        assert!(matches!(err, CodecError::InvalidField { field: "Roll", .. }));
    }

    #[test]
    fn kind_containing_separator_cannot_be_formatted() {
        let record = TypeAndAmount::new("Goblin@Chief", "1").unwrap();
        assert!(matches!(
            record.format(),
            Err(CodecError::SeparatorInField { index: 0, .. })
        ));
    }
}
