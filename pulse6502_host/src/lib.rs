mod clock;
mod program;
mod system;

pub use clock::{Clock, ClockListener, RunSummary, StopReason};
pub use program::{parse_address_range, parse_program, read_program_file};
pub use system::{System, SystemConfiguration, SystemHost};

pub type AppResult<T> = anyhow::Result<T>;
