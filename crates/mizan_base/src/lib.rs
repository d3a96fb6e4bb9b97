//! Closed vocabularies shared by the mizan timing engine.
//!
//! This crate provides:
//! - The four elements and their oppositions
//! - The seven classical planets, their elements and the Chaldean order
//! - Burj (zodiac sign) lookup, triplicity and rulership
//! - Essential dignity of a planet in a burj
//! - The five-point favorability scale
//! - Planetary hours (weekday rulers, hour rulers, unequal-hour index)
//!
//! Everything here is pure, `Copy`, and free of I/O.

pub mod burj;
pub mod dignity;
pub mod element;
pub mod error;
pub mod level;
pub mod planet;
pub mod planetary_hour;
pub mod util;

pub use burj::{ALL_BURJ, Burj, BurjInfo, burj_from_longitude};
pub use dignity::{
    Dignity, dignity_in_burj, domicile_burj, exaltation_burj, exaltation_degree, fall_burj,
};
pub use element::{ALL_ELEMENTS, Element};
pub use error::ParseError;
pub use level::{LEVEL_ORDER, MAX_LEVEL_INDEX, OrdinalLevel};
pub use planet::{ALL_PLANETS, CHALDEAN_ORDER, Planet};
pub use planetary_hour::{
    ALL_WEEKDAYS, HOURS_PER_DAY, Weekday, day_ruler, hour_element, hour_ruler,
    planetary_hour_index, weekday_at_offset, weekday_from_jd,
};
pub use util::{angular_distance, normalize_360};
