//! Coordinate triple for location records
//!
//! Axes are integers by construction. `x` and `y` span the traversed plane;
//! `z` is elevation and takes no part in distance or bearing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A point in the game world (`x`, `y` plane plus `z` elevation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Coordinates {
    /// Create coordinates on the plane, with `z` at ground level (0).
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y, z: 0 }
    }

    /// Set the elevation axis.
    pub fn with_z(mut self, z: i64) -> Self {
        self.z = z;
        self
    }

    /// Parse coordinates from raw text axes, as handed over by a chat front
    /// end that has not typed its arguments yet.
    ///
    /// Fails closed: a missing required axis or any non-integer text rejects
    /// the whole triple. A missing `z` defaults to 0.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a missing `x` or `y`, and
    /// `DomainError::Parse` naming the offending axis for non-integer text.
    pub fn parse(x: Option<&str>, y: Option<&str>, z: Option<&str>) -> Result<Self, DomainError> {
        let x = require_axis("x", x)?;
        let y = require_axis("y", y)?;
        let z = match z {
            Some(text) => Self::parse_axis("z", text)?,
            None => 0,
        };
        Ok(Self { x, y, z })
    }

    /// Parse one axis value, naming the axis in the error.
    ///
    /// Shared by the create and edit paths so both reject non-integer text
    /// with the same message.
    pub fn parse_axis(axis: &'static str, text: &str) -> Result<i64, DomainError> {
        text.trim()
            .parse::<i64>()
            .map_err(|_| DomainError::parse(format!("{} must be an integer, got '{}'", axis, text)))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

fn require_axis(axis: &'static str, value: Option<&str>) -> Result<i64, DomainError> {
    match value {
        Some(text) => Coordinates::parse_axis(axis, text),
        None => Err(DomainError::validation(format!("{} is required", axis))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_z_to_ground_level() {
        let coords = Coordinates::new(120, -340);
        assert_eq!(coords.x, 120);
        assert_eq!(coords.y, -340);
        assert_eq!(coords.z, 0);
    }

    #[test]
    fn with_z_sets_elevation() {
        let coords = Coordinates::new(1, 2).with_z(64);
        assert_eq!(coords.z, 64);
    }

    #[test]
    fn parse_all_axes() {
        let coords = Coordinates::parse(Some("10"), Some("-20"), Some("64")).unwrap();
        assert_eq!(coords, Coordinates::new(10, -20).with_z(64));
    }

    #[test]
    fn parse_defaults_missing_z() {
        let coords = Coordinates::parse(Some("3"), Some("4"), None).unwrap();
        assert_eq!(coords.z, 0);
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let coords = Coordinates::parse(Some(" 7 "), Some("8"), None).unwrap();
        assert_eq!(coords.x, 7);
    }

    #[test]
    fn missing_x_rejected() {
        let err = Coordinates::parse(None, Some("4"), None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("x is required"));
    }

    #[test]
    fn missing_y_rejected() {
        let err = Coordinates::parse(Some("3"), None, None).unwrap_err();
        assert!(err.to_string().contains("y is required"));
    }

    #[test]
    fn non_integer_axis_rejected() {
        let err = Coordinates::parse(Some("north"), Some("4"), None).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("north"));
        assert!(err.to_string().contains('x'));
    }

    #[test]
    fn fractional_axis_rejected() {
        let err = Coordinates::parse(Some("3"), Some("4.5"), None).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn bad_z_fails_the_whole_triple() {
        assert!(Coordinates::parse(Some("3"), Some("4"), Some("deep")).is_err());
    }

    #[test]
    fn display_renders_triple() {
        let coords = Coordinates::new(1, -2).with_z(3);
        assert_eq!(coords.to_string(), "(1, -2, 3)");
    }
}
