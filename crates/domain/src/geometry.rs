//! Derived navigation geometry over coordinate pairs
//!
//! Distance, travel-time estimates, and cardinal bearings between two points.
//! All of it works on the `x`/`y` plane only: `z` is elevation, not
//! traversed-plane displacement, and takes no part in any computation here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::Coordinates;

/// Width of one cardinal bucket in degrees.
const BUCKET_WIDTH: f64 = 45.0;

/// Planar Euclidean distance between two points, in abstract distance units.
///
/// Uses the `x` and `y` axes only; the points' `z` values are ignored.
pub fn planar_distance(from: Coordinates, to: Coordinates) -> f64 {
    let dx = to.x as f64 - from.x as f64;
    let dy = to.y as f64 - from.y as f64;
    dx.hypot(dy)
}

// ============================================================================
// TravelProfile
// ============================================================================

/// A named movement profile with a fixed speed constant.
///
/// Speeds are static configuration in distance units per second, taken from
/// the movement rates of the game world the directory serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TravelProfile {
    /// On foot, unhurried.
    Walking,
    /// On foot, flat out.
    Sprinting,
    /// On horseback.
    Mounted,
}

impl TravelProfile {
    /// Every supported profile, for enumeration and error messages.
    pub const ALL: [TravelProfile; 3] = [Self::Walking, Self::Sprinting, Self::Mounted];

    /// Speed in distance units per second.
    pub fn speed(&self) -> f64 {
        match self {
            Self::Walking => 4.317,
            Self::Sprinting => 5.612,
            Self::Mounted => 9.68,
        }
    }

    /// Seconds needed to cover `distance` at this profile's speed.
    pub fn estimate_seconds(&self, distance: f64) -> f64 {
        distance / self.speed()
    }

    /// Get the string representation for display and parsing
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Sprinting => "sprinting",
            Self::Mounted => "mounted",
        }
    }

    /// Parse a travel profile from a string (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` naming the supported profiles for any
    /// unrecognized input.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "walking" => Ok(Self::Walking),
            "sprinting" => Ok(Self::Sprinting),
            "mounted" => Ok(Self::Mounted),
            other => Err(DomainError::parse(format!(
                "Unknown travel profile '{}', expected one of: walking, sprinting, mounted",
                other
            ))),
        }
    }
}

impl fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CardinalDirection
// ============================================================================

/// One of the eight 45°-wide compass buckets.
///
/// Ordered counter-clockwise from East, matching the angle convention of
/// [`bearing`]: E at 0°, N at 90°, W at 180°, S at 270°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardinalDirection {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl CardinalDirection {
    /// Buckets in counter-clockwise order; index i covers angles near i*45°.
    const BUCKETS: [CardinalDirection; 8] = [
        Self::East,
        Self::NorthEast,
        Self::North,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// Classify an angle in degrees into its nearest bucket.
    ///
    /// Total over the full circle: the angle is first normalized into
    /// [0, 360), and 360° wraps back onto East. Ties exactly halfway between
    /// two buckets resolve toward the lower-valued bucket (22.5° is East,
    /// 337.5° is SouthEast).
    pub fn from_angle(angle_degrees: f64) -> Self {
        let angle = angle_degrees.rem_euclid(360.0);
        // Round to the nearest multiple of 45°, half-way cases down.
        let index = ((angle / BUCKET_WIDTH) - 0.5).ceil() as usize % 8;
        Self::BUCKETS[index]
    }

    /// Get a display-friendly name for this direction
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::East => "East",
            Self::NorthEast => "North-East",
            Self::North => "North",
            Self::NorthWest => "North-West",
            Self::West => "West",
            Self::SouthWest => "South-West",
            Self::South => "South",
            Self::SouthEast => "South-East",
        }
    }

    /// Short compass abbreviation (N, NE, ...)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::East => "E",
            Self::NorthEast => "NE",
            Self::North => "N",
            Self::NorthWest => "NW",
            Self::West => "W",
            Self::SouthWest => "SW",
            Self::South => "S",
            Self::SouthEast => "SE",
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Bearing
// ============================================================================

/// A classified direction from one point toward another.
///
/// Carries both the bucket label and the raw angle (rounded to whole
/// degrees, in [0, 360)) so a front end can render "North (N), 92°".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bearing {
    pub direction: CardinalDirection,
    pub angle_degrees: u16,
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), {}°",
            self.direction.display_name(),
            self.direction.abbreviation(),
            self.angle_degrees
        )
    }
}

/// Direction from `from` toward `to` on the x/y plane.
///
/// The angle convention is mathematical, not geographic: East is the 0°
/// reference axis and angles increase counter-clockwise, so due North is
/// 90° and due South 270°. Points sharing an x-coordinate land exactly on
/// North or South by the sign of the y displacement.
///
/// Returns `None` when the points coincide on the plane: two identical
/// points have no direction between them, whatever their elevations.
pub fn bearing(from: Coordinates, to: Coordinates) -> Option<Bearing> {
    let dx = to.x as f64 - from.x as f64;
    let dy = to.y as f64 - from.y as f64;
    if dx == 0.0 && dy == 0.0 {
        return None;
    }

    let mut angle = dy.atan2(dx).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }

    Some(Bearing {
        direction: CardinalDirection::from_angle(angle),
        angle_degrees: (angle.round() as u16) % 360,
    })
}
