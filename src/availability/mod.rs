//! Weekly availability model.
//!
//! A week is seven day masks (Sunday first). Each day covers 09:00 to
//! 24:00 in half-hour slots, so bit `i` of a mask marks the slot starting
//! at `9:00 + 30*i` minutes and only the low [`SLOTS_PER_DAY`] bits are
//! meaningful.

mod slots;
mod week;

pub use slots::{
    decode_day, encode_day, Weekday, DAYS_PER_WEEK, DAY_MASK, SLOTS_PER_DAY, SLOT_LABELS,
};
pub use week::Availability;
