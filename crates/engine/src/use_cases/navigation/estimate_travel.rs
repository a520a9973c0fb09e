//! Travel estimate use case.

use serde::Serialize;
use waypost_domain::TravelProfile;

/// Travel time over a distance at one profile's speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEstimate {
    pub profile: TravelProfile,
    pub seconds: f64,
}

/// Travel estimate use case.
///
/// Pure arithmetic over a precomputed distance. Profile speeds are static
/// configuration in the domain layer, not stored data.
#[derive(Debug, Default)]
pub struct EstimateTravel;

impl EstimateTravel {
    pub fn new() -> Self {
        Self
    }

    /// Estimate travel time for one profile.
    pub fn execute(&self, distance: f64, profile: TravelProfile) -> TravelEstimate {
        TravelEstimate {
            profile,
            seconds: profile.estimate_seconds(distance),
        }
    }

    /// One estimate per supported profile, in [`TravelProfile::ALL`] order.
    ///
    /// Front ends typically render the whole table under a distance result.
    pub fn all_profiles(&self, distance: f64) -> Vec<TravelEstimate> {
        TravelProfile::ALL
            .iter()
            .map(|profile| self.execute(distance, *profile))
            .collect()
    }
}
