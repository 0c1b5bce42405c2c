mod allowance;
mod schedule;
mod tax_bracket;

pub use allowance::{AllowanceClaim, AllowanceType};
pub use schedule::{ScheduleError, TaxSchedule};
pub use tax_bracket::TaxBracket;
