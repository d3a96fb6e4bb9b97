//! C-facing adapter types for the mizan timing rating engine.
//!
//! Enumerations cross the boundary as `i32` codes:
//! element 0..3 (fire, water, air, earth), planet 0..6 (Sun, Moon, Mars,
//! Mercury, Jupiter, Venus, Saturn), weekday 0..6 (Sunday first),
//! level 0..4 (veryWeak to excellent).

use mizan_base::{Element, HOURS_PER_DAY, OrdinalLevel, Planet, Weekday, hour_ruler};
use mizan_rating::{
    ElementRelation, ElementalModifier, RatingRequest, TransitData, TransitSnapshot,
    build_authentic_rating, classify_strength, compute_hour_ruler_strength, element_modifier,
    presentation_for,
};

/// ABI version for downstream bindings.
pub const MIZAN_API_VERSION: u32 = 1;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MizanStatus {
    Ok = 0,
    InvalidInput = 1,
    /// Required transit data was absent.
    Unavailable = 2,
    NullPointer = 7,
    Internal = 255,
}

/// C-compatible rating request.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MizanRatingRequest {
    pub hour_planet: i32,
    pub hour_element: i32,
    pub user_element: i32,
    pub planet_strength: f64,
}

/// C-compatible elemental modifier.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MizanModifier {
    /// -1, 0 or +1.
    pub adjustment: i32,
    /// 0 perfect alignment, 1 minor tension, 2 supportive flow, 3 neutral.
    pub relation: i32,
}

/// C-compatible rating result.
///
/// Stars and label text are left to the host; `final_level` selects them.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MizanRating {
    pub hour_planet: i32,
    pub hour_element: i32,
    pub user_element: i32,
    pub planet_strength: f64,
    pub primary_level: i32,
    pub modifier: MizanModifier,
    pub final_level: i32,
    /// Presentation color as `0xRRGGBB`.
    pub color_rgb: u32,
}

/// One planet's position in a C-compatible transit array.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MizanTransit {
    pub planet: i32,
    /// Tropical ecliptic longitude in degrees.
    pub longitude_deg: f64,
    /// Nonzero when retrograde.
    pub retrograde: u8,
}

fn element_from_code(code: i32) -> Result<Element, MizanStatus> {
    u8::try_from(code)
        .ok()
        .and_then(Element::from_index)
        .ok_or(MizanStatus::InvalidInput)
}

fn planet_from_code(code: i32) -> Result<Planet, MizanStatus> {
    u8::try_from(code)
        .ok()
        .and_then(Planet::from_index)
        .ok_or(MizanStatus::InvalidInput)
}

fn weekday_from_code(code: i32) -> Result<Weekday, MizanStatus> {
    u8::try_from(code)
        .ok()
        .and_then(Weekday::from_index)
        .ok_or(MizanStatus::InvalidInput)
}

fn level_code(level: OrdinalLevel) -> i32 {
    i32::from(level.index())
}

fn relation_code(relation: ElementRelation) -> i32 {
    match relation {
        ElementRelation::PerfectAlignment => 0,
        ElementRelation::MinorTension => 1,
        ElementRelation::SupportiveFlow => 2,
        ElementRelation::Neutral => 3,
    }
}

impl From<ElementalModifier> for MizanModifier {
    fn from(value: ElementalModifier) -> Self {
        Self {
            adjustment: i32::from(value.adjustment),
            relation: relation_code(value.note),
        }
    }
}

/// Build a rating from a C request.
pub fn mizan_build_rating_internal(
    request: &MizanRatingRequest,
) -> Result<MizanRating, MizanStatus> {
    let rating = build_authentic_rating(&RatingRequest {
        hour_planet: planet_from_code(request.hour_planet)?,
        hour_element: element_from_code(request.hour_element)?,
        user_element: element_from_code(request.user_element)?,
        planet_strength: request.planet_strength,
    });

    Ok(MizanRating {
        hour_planet: request.hour_planet,
        hour_element: request.hour_element,
        user_element: request.user_element,
        planet_strength: rating.planet_strength,
        primary_level: level_code(rating.primary.level),
        modifier: MizanModifier::from(rating.modifier),
        final_level: level_code(rating.final_level),
        color_rgb: presentation_for(rating.final_level).rgb(),
    })
}

/// Hour-ruler strength from a C transit array.
///
/// Entries with an unknown planet code are rejected. A later entry for the
/// same planet replaces an earlier one.
pub fn mizan_hour_ruler_strength_internal(
    planet_code: i32,
    transits: &[MizanTransit],
) -> Result<f64, MizanStatus> {
    let planet = planet_from_code(planet_code)?;
    let mut snapshot = TransitSnapshot::new();
    for t in transits {
        if !t.longitude_deg.is_finite() {
            return Err(MizanStatus::InvalidInput);
        }
        let p = planet_from_code(t.planet)?;
        snapshot.insert(
            p.name(),
            TransitData::from_longitude(t.longitude_deg, t.retrograde != 0),
        );
    }
    compute_hour_ruler_strength(planet, &snapshot).ok_or(MizanStatus::Unavailable)
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn mizan_api_version() -> u32 {
    MIZAN_API_VERSION
}

/// Build a full timing rating.
///
/// # Safety
/// `request` and `out` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mizan_build_rating(
    request: *const MizanRatingRequest,
    out: *mut MizanRating,
) -> MizanStatus {
    ffi_boundary(|| {
        if request.is_null() || out.is_null() {
            return MizanStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and only borrowed for this call.
        let request_ref = unsafe { &*request };

        match mizan_build_rating_internal(request_ref) {
            Ok(rating) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out = rating };
                MizanStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Classify a strength score into a level code (0..4).
///
/// # Safety
/// `out_level` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mizan_classify_strength(score: f64, out_level: *mut i32) -> MizanStatus {
    ffi_boundary(|| {
        if out_level.is_null() {
            return MizanStatus::NullPointer;
        }
        let level = classify_strength(score).level;
        // SAFETY: Pointer is checked for null; write one value.
        unsafe { *out_level = level_code(level) };
        MizanStatus::Ok
    })
}

/// Elemental modifier for a (user, hour) element pair.
///
/// # Safety
/// `out` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mizan_element_modifier(
    user_element: i32,
    hour_element: i32,
    out: *mut MizanModifier,
) -> MizanStatus {
    ffi_boundary(|| {
        if out.is_null() {
            return MizanStatus::NullPointer;
        }
        let user = element_from_code(user_element);
        let hour = element_from_code(hour_element);
        let (Ok(user), Ok(hour)) = (user, hour) else {
            return MizanStatus::InvalidInput;
        };
        // SAFETY: Pointer is checked for null; write one struct.
        unsafe { *out = MizanModifier::from(element_modifier(user, hour)) };
        MizanStatus::Ok
    })
}

/// Strength of the hour ruler from an array of transits, rounded.
///
/// Returns [`MizanStatus::Unavailable`] when the array has no entry for
/// `planet` or for the Sun.
///
/// # Safety
/// `out_strength` must be a valid, non-null pointer. `transits` must point to
/// `count` contiguous entries, or may be null when `count` is 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mizan_hour_ruler_strength(
    planet: i32,
    transits: *const MizanTransit,
    count: u32,
    out_strength: *mut f64,
) -> MizanStatus {
    ffi_boundary(|| {
        if out_strength.is_null() || (transits.is_null() && count > 0) {
            return MizanStatus::NullPointer;
        }

        let slice: &[MizanTransit] = if count == 0 {
            &[]
        } else {
            // SAFETY: Pointer is non-null and the caller guarantees `count` entries.
            unsafe { std::slice::from_raw_parts(transits, count as usize) }
        };

        match mizan_hour_ruler_strength_internal(planet, slice) {
            Ok(strength) => {
                // SAFETY: Pointer is checked for null; write one value.
                unsafe { *out_strength = strength };
                MizanStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Planet code ruling hour `hour_index` (0..23, sunrise first) of `weekday`.
///
/// # Safety
/// `out_planet` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mizan_hour_ruler(
    weekday: i32,
    hour_index: u32,
    out_planet: *mut i32,
) -> MizanStatus {
    ffi_boundary(|| {
        if out_planet.is_null() {
            return MizanStatus::NullPointer;
        }
        let Ok(day) = weekday_from_code(weekday) else {
            return MizanStatus::InvalidInput;
        };
        if hour_index >= u32::from(HOURS_PER_DAY) {
            return MizanStatus::InvalidInput;
        }
        let planet = hour_ruler(day, hour_index as u8);
        // SAFETY: Pointer is checked for null; write one value.
        unsafe { *out_planet = i32::from(planet.index()) };
        MizanStatus::Ok
    })
}

fn ffi_boundary(f: impl FnOnce() -> MizanStatus) -> MizanStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => MizanStatus::Internal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn codes_round_trip_through_base_indices() {
        assert_eq!(planet_from_code(6), Ok(Planet::Saturn));
        assert_eq!(element_from_code(3), Ok(Element::Earth));
        assert_eq!(weekday_from_code(5), Ok(Weekday::Friday));
    }

    #[test]
    fn negative_and_large_codes_rejected() {
        assert_eq!(planet_from_code(-1), Err(MizanStatus::InvalidInput));
        assert_eq!(planet_from_code(7), Err(MizanStatus::InvalidInput));
        assert_eq!(element_from_code(4), Err(MizanStatus::InvalidInput));
        assert_eq!(weekday_from_code(i32::MAX), Err(MizanStatus::InvalidInput));
    }

    #[test]
    fn relation_codes_are_distinct() {
        let codes = [
            ElementRelation::PerfectAlignment,
            ElementRelation::MinorTension,
            ElementRelation::SupportiveFlow,
            ElementRelation::Neutral,
        ]
        .map(relation_code);
        assert_eq!(codes, [0, 1, 2, 3]);
    }

    #[test]
    fn ffi_build_rating_rejects_null() {
        let req = MizanRatingRequest {
            hour_planet: 2,
            hour_element: 0,
            user_element: 0,
            planet_strength: 95.0,
        };
        // SAFETY: Null output pointer is intentional for validation.
        let status = unsafe { mizan_build_rating(&req, ptr::null_mut()) };
        assert_eq!(status, MizanStatus::NullPointer);
    }

    #[test]
    fn ffi_hour_ruler_rejects_hour_out_of_range() {
        let mut out = -1;
        // SAFETY: Output pointer is a valid stack reference.
        let status = unsafe { mizan_hour_ruler(0, 24, &mut out) };
        assert_eq!(status, MizanStatus::InvalidInput);
        assert_eq!(out, -1);
    }

    #[test]
    fn internal_strength_rejects_non_finite_longitude() {
        let transits = [MizanTransit {
            planet: 0,
            longitude_deg: f64::NAN,
            retrograde: 0,
        }];
        assert_eq!(
            mizan_hour_ruler_strength_internal(0, &transits),
            Err(MizanStatus::InvalidInput)
        );
    }
}
