//! Input checks run before any authentication or lookup.

use super::error::RegistryError;
use crate::model::text::{non_space_len, trim_blanks};

/// Lowest accepted rating.
pub const MIN_RATING: f32 = 0.0;
/// Highest accepted rating.
pub const MAX_RATING: f32 = 5.0;
/// Minimum secret length once surrounding blanks are removed.
pub const MIN_SECRET_LEN: usize = 4;

/// Borrow a required field, rejecting it when absent.
pub fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, RegistryError> {
    value
        .as_deref()
        .ok_or_else(|| RegistryError::invalid(format!("{field} is required")))
}

pub fn check_handle(handle: &str) -> Result<(), RegistryError> {
    if non_space_len(handle) < 1 {
        return Err(RegistryError::invalid(
            "handle must contain at least one character other than a space",
        ));
    }
    Ok(())
}

pub fn check_secret(secret: &str) -> Result<(), RegistryError> {
    if trim_blanks(secret).chars().count() < MIN_SECRET_LEN {
        return Err(RegistryError::invalid(format!(
            "secret must contain at least {MIN_SECRET_LEN} characters besides leading and trailing blanks"
        )));
    }
    Ok(())
}

pub fn check_title(title: &str) -> Result<(), RegistryError> {
    if non_space_len(title) < 1 {
        return Err(RegistryError::invalid(
            "title must contain at least one character other than a space",
        ));
    }
    Ok(())
}

/// Rejects ratings outside `[MIN_RATING, MAX_RATING]`, NaN included.
pub fn check_rating(rating: f32) -> Result<(), RegistryError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(RegistryError::invalid(format!(
            "rating must lie between {MIN_RATING:?} and {MAX_RATING:?}, got {rating}"
        )));
    }
    Ok(())
}

/// Converts a page count or duration, rejecting negative values and values
/// beyond `u32::MAX`.
pub fn check_count(value: i64, field: &str) -> Result<u32, RegistryError> {
    if value < 0 {
        return Err(RegistryError::invalid(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    u32::try_from(value).map_err(|_| {
        RegistryError::invalid(format!(
            "{field} must be at most {}, got {value}",
            u32::MAX
        ))
    })
}
