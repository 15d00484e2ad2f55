//! Concrete record types decoded from table rows.
//!
//! Each type implements [`DataSelection`](crate::codec::DataSelection) and
//! declares its own field order.

mod range;
mod type_and_amount;

pub use range::RangeSelection;
pub use type_and_amount::TypeAndAmount;
