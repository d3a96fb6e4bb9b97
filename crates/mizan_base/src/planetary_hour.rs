//! Planetary hours (sa'at al-kawakib).
//!
//! The day from sunrise to the next sunrise is split into 12 day hours and
//! 12 night hours. Day and night hours have different lengths (unequal
//! hours). The first hour after sunrise belongs to the ruler of the
//! weekday; each later hour steps one place along the Chaldean order.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::element::Element;
use crate::error::ParseError;
use crate::planet::{CHALDEAN_ORDER, Planet};

/// Planetary hours per day (12 day + 12 night).
pub const HOURS_PER_DAY: u8 = 24;

/// Day of the week, counted from sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All 7 weekdays in order (0 = Sunday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// 0-based index (Sunday=0 .. Saturday=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Weekday for a 0-based index. Returns None if index >= 7.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 7 {
            Some(ALL_WEEKDAYS[index as usize])
        } else {
            None
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    /// Case-insensitive on the full English name or its first three letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_WEEKDAYS
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(t) || d.name()[..3].eq_ignore_ascii_case(t))
            .ok_or_else(|| ParseError::UnknownWeekday(s.to_string()))
    }
}

/// Weekday lord: Sunday Sun, Monday Moon, Tuesday Mars, Wednesday Mercury,
/// Thursday Jupiter, Friday Venus, Saturday Saturn.
pub const fn day_ruler(weekday: Weekday) -> Planet {
    match weekday {
        Weekday::Sunday => Planet::Sun,
        Weekday::Monday => Planet::Moon,
        Weekday::Tuesday => Planet::Mars,
        Weekday::Wednesday => Planet::Mercury,
        Weekday::Thursday => Planet::Jupiter,
        Weekday::Friday => Planet::Venus,
        Weekday::Saturday => Planet::Saturn,
    }
}

/// Ruler of the planetary hour `hour_index` (0 = first hour after sunrise).
///
/// Indices 0..11 are day hours, 12..23 night hours. Larger values wrap.
pub fn hour_ruler(weekday: Weekday, hour_index: u8) -> Planet {
    let start = day_ruler(weekday).chaldean_index() as usize;
    let step = (hour_index % HOURS_PER_DAY) as usize;
    CHALDEAN_ORDER[(start + step) % 7]
}

/// Element of a planetary hour: the ruling element of its ruler.
pub fn hour_element(weekday: Weekday, hour_index: u8) -> Element {
    hour_ruler(weekday, hour_index).element()
}

/// Weekday of the UT civil date containing a Julian Date (UT).
///
/// JD 2451545.0 (2000-01-01 12:00 UT) is a Saturday. East of Greenwich a
/// local sunrise can fall on the previous UT date; use
/// [`weekday_at_offset`] for the local date.
pub fn weekday_from_jd(jd: f64) -> Weekday {
    let day = (jd + 1.5).floor() as i64;
    let idx = day.rem_euclid(7) as u8;
    ALL_WEEKDAYS[idx as usize]
}

/// Weekday of the local civil date containing `jd`, for a zone
/// `utc_offset_hours` ahead of UT (negative west of Greenwich).
pub fn weekday_at_offset(jd: f64, utc_offset_hours: f64) -> Weekday {
    weekday_from_jd(jd + utc_offset_hours / 24.0)
}

/// Planetary hour index (0..23) of instant `jd` using unequal hours.
///
/// `sunrise`, `sunset` and `next_sunrise` are Julian Dates of the bounding
/// events. Returns None if they are not strictly increasing or if `jd`
/// lies outside `[sunrise, next_sunrise)`.
pub fn planetary_hour_index(jd: f64, sunrise: f64, sunset: f64, next_sunrise: f64) -> Option<u8> {
    if !(sunrise < sunset && sunset < next_sunrise) {
        return None;
    }
    if !(jd >= sunrise && jd < next_sunrise) {
        return None;
    }
    let idx = if jd < sunset {
        let hour_len = (sunset - sunrise) / 12.0;
        ((jd - sunrise) / hour_len).floor() as u8
    } else {
        let hour_len = (next_sunrise - sunset) / 12.0;
        12 + ((jd - sunset) / hour_len).floor() as u8
    };
    // Floating point edge just below a boundary
    Some(idx.min(HOURS_PER_DAY - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_rulers_follow_weekdays() {
        for d in ALL_WEEKDAYS {
            assert_eq!(day_ruler(d).index(), d.index());
        }
    }

    #[test]
    fn first_hour_is_day_ruler() {
        for d in ALL_WEEKDAYS {
            assert_eq!(hour_ruler(d, 0), day_ruler(d));
        }
    }

    #[test]
    fn sunday_sequence() {
        assert_eq!(hour_ruler(Weekday::Sunday, 1), Planet::Venus);
        assert_eq!(hour_ruler(Weekday::Sunday, 2), Planet::Mercury);
        assert_eq!(hour_ruler(Weekday::Sunday, 3), Planet::Moon);
        assert_eq!(hour_ruler(Weekday::Sunday, 4), Planet::Saturn);
    }

    #[test]
    fn day_after_24_hours_is_next_day_ruler() {
        // The 25th hour from Sunday sunrise is the first hour of Monday.
        for d in ALL_WEEKDAYS {
            let next = ALL_WEEKDAYS[((d.index() + 1) % 7) as usize];
            let start = day_ruler(d).chaldean_index() as usize;
            assert_eq!(CHALDEAN_ORDER[(start + 24) % 7], day_ruler(next));
        }
    }

    #[test]
    fn hour_index_wraps() {
        assert_eq!(hour_ruler(Weekday::Friday, 24), hour_ruler(Weekday::Friday, 0));
    }

    #[test]
    fn hour_element_from_ruler() {
        assert_eq!(hour_element(Weekday::Tuesday, 0), Element::Fire);
        assert_eq!(hour_element(Weekday::Saturday, 0), Element::Earth);
    }

    #[test]
    fn weekday_j2000_saturday() {
        assert_eq!(weekday_from_jd(2_451_545.0), Weekday::Saturday);
        assert_eq!(weekday_from_jd(2_451_545.6), Weekday::Sunday);
    }

    #[test]
    fn local_date_east_of_greenwich() {
        // Jakarta (UTC+7) sunrise on Friday 2024-03-22 is 22:55 UT Thursday.
        let sunrise = 2_460_391.5 - 1.0833 / 24.0;
        assert_eq!(weekday_from_jd(sunrise), Weekday::Thursday);
        assert_eq!(weekday_at_offset(sunrise, 0.0), Weekday::Thursday);
        assert_eq!(weekday_at_offset(sunrise, 7.0), Weekday::Friday);
        assert_eq!(day_ruler(weekday_at_offset(sunrise, 7.0)), Planet::Venus);
    }

    #[test]
    fn local_date_west_of_greenwich() {
        // 02:00 UT Saturday is still Friday evening at UTC-5.
        let jd = 2_460_392.5 + 2.0 / 24.0;
        assert_eq!(weekday_from_jd(jd), Weekday::Saturday);
        assert_eq!(weekday_at_offset(jd, -5.0), Weekday::Friday);
    }

    #[test]
    fn hour_index_equal_hours() {
        // Sunrise 0.25, sunset 0.75, next sunrise 1.25: every hour 1/24 day.
        let h = 1.0 / 24.0;
        assert_eq!(planetary_hour_index(0.25, 0.25, 0.75, 1.25), Some(0));
        assert_eq!(planetary_hour_index(0.25 + 1.5 * h, 0.25, 0.75, 1.25), Some(1));
        assert_eq!(planetary_hour_index(0.75, 0.25, 0.75, 1.25), Some(12));
        assert_eq!(planetary_hour_index(1.25 - 0.1 * h, 0.25, 0.75, 1.25), Some(23));
    }

    #[test]
    fn hour_index_unequal_hours() {
        // 16h day, 8h night: day hour = 80 min, night hour = 40 min.
        let sunrise = 0.0;
        let sunset = 16.0 / 24.0;
        let next = 1.0;
        let min = 1.0 / 1440.0;
        assert_eq!(planetary_hour_index(79.0 * min, sunrise, sunset, next), Some(0));
        assert_eq!(planetary_hour_index(81.0 * min, sunrise, sunset, next), Some(1));
        assert_eq!(planetary_hour_index(sunset + 41.0 * min, sunrise, sunset, next), Some(13));
    }

    #[test]
    fn hour_index_out_of_range() {
        assert_eq!(planetary_hour_index(0.1, 0.25, 0.75, 1.25), None);
        assert_eq!(planetary_hour_index(1.25, 0.25, 0.75, 1.25), None);
    }

    #[test]
    fn hour_index_rejects_unordered_events() {
        assert_eq!(planetary_hour_index(0.5, 0.75, 0.25, 1.25), None);
    }

    #[test]
    fn parse_weekday() {
        assert_eq!("friday".parse::<Weekday>(), Ok(Weekday::Friday));
        assert_eq!("FRI".parse::<Weekday>(), Ok(Weekday::Friday));
        assert!("jumuah".parse::<Weekday>().is_err());
    }
}
