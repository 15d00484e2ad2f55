//! Command implementations for table-cli
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod decode;
mod results;
mod roll;
mod show;

pub use decode::Decode;
pub use results::Results;
pub use roll::RollOn;
pub use show::Show;
