//! Navigation use cases.
//!
//! Derived geometry between points in the directory: distance, travel-time
//! estimates, and cardinal bearings. All of it is read-only over the record
//! set.

mod estimate_travel;
mod measure_distance;
mod take_bearing;

pub use estimate_travel::{EstimateTravel, TravelEstimate};
pub use measure_distance::MeasureDistance;
pub use take_bearing::{BearingTarget, TakeBearing};

use std::sync::Arc;
use waypost_domain::Location;

use crate::infrastructure::ports::{LocationRecords, QueryField, RepoError};

/// Container for navigation use cases.
pub struct NavigationUseCases {
    pub distance: Arc<MeasureDistance>,
    pub travel: Arc<EstimateTravel>,
    pub bearing: Arc<TakeBearing>,
}

impl NavigationUseCases {
    pub fn new(
        distance: Arc<MeasureDistance>,
        travel: Arc<EstimateTravel>,
        bearing: Arc<TakeBearing>,
    ) -> Self {
        Self {
            distance,
            travel,
            bearing,
        }
    }
}

/// Errors that can occur during navigation operations.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("No location found named '{name}'")]
    EndpointNotFound { name: String },
    #[error("{count} locations share the name '{name}', be more specific")]
    AmbiguousEndpoint { name: String, count: usize },
    #[error("Both points are the same spot on the plane, bearing is undefined")]
    UndefinedBearing,
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Resolve a uniquely named record for use as a route endpoint.
///
/// This is shared logic between the distance and bearing use cases: an
/// endpoint name must match exactly one record, and both the no-match and
/// many-match cases report which name failed.
pub async fn resolve_endpoint(
    records: &dyn LocationRecords,
    name: &str,
) -> Result<Location, NavigationError> {
    let mut matches = records.select_by_exact(QueryField::Name, name).await?;
    match matches.len() {
        0 => Err(NavigationError::EndpointNotFound {
            name: name.to_string(),
        }),
        1 => Ok(matches.remove(0)),
        count => Err(NavigationError::AmbiguousEndpoint {
            name: name.to_string(),
            count,
        }),
    }
}
