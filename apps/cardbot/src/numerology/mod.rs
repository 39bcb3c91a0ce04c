// Numerology: personal-day calculation from a birth day and the current day.
// Pure computation; handlers only validate query input and look up forecasts.

pub mod handlers;
pub mod reducer;

pub use reducer::{parse_birth_day, personal_day, today_day_of_month, NumerologyError, PersonalDayResult};
