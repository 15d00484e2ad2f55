use crate::codec::{CodecError, DataSelection, parse_field};

/// An inclusive numeric range, encoded as `Lower@Upper`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRangeSelection")
)]
pub struct RangeSelection {
    pub lower: i32,
    pub upper: i32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRangeSelection {
    lower: i32,
    upper: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRangeSelection> for RangeSelection {
    type Error = CodecError;

    fn try_from(raw: RawRangeSelection) -> Result<Self, Self::Error> {
        Self::checked(raw.lower, raw.upper)
    }
}

impl RangeSelection {
    pub const fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    pub const fn contains(&self, value: i32) -> bool {
        self.lower <= value && value <= self.upper
    }

    fn checked(lower: i32, upper: i32) -> Result<Self, CodecError> {
        if lower > upper {
            return Err(CodecError::invalid_field(
                "Upper",
                &upper.to_string(),
                format!("must not be below lower bound {lower}"),
            ));
        }
        Ok(Self { lower, upper })
    }
}

impl DataSelection for RangeSelection {
    const FIELD_COUNT: usize = 2;

    fn decode(fields: &[&str]) -> Result<Self, CodecError> {
        crate::codec::expect_fields(fields, Self::FIELD_COUNT)?;
        let lower: i32 = parse_field("Lower", fields[0])?;
        let upper: i32 = parse_field("Upper", fields[1])?;
        Self::checked(lower, upper)
    }

    fn encode(&self) -> Vec<String> {
        vec![self.lower.to_string(), self.upper.to_string()]
    }
}
