//! Bearing use case.
//!
//! Classifies the direction from one point toward another into a cardinal
//! bucket plus raw angle, for "head North-East, 47 degrees" style guidance.

use std::sync::Arc;
use waypost_domain::{bearing, Bearing, Coordinates};

use crate::infrastructure::ports::LocationRecords;

use super::{resolve_endpoint, NavigationError};

/// One endpoint of a bearing request.
///
/// A route often starts from the requester's own position, which has no
/// stored record, so endpoints are either ad-hoc points or named records.
#[derive(Debug, Clone, PartialEq)]
pub enum BearingTarget {
    /// An ad-hoc point with no stored identity.
    Point(Coordinates),
    /// A stored record, resolved by exact name.
    Named(String),
}

/// Bearing use case.
///
/// Angles follow the domain convention: East is 0 degrees and angles grow
/// counter-clockwise, so this is not a geographic compass bearing.
pub struct TakeBearing {
    records: Arc<dyn LocationRecords>,
}

impl TakeBearing {
    pub fn new(records: Arc<dyn LocationRecords>) -> Self {
        Self { records }
    }

    /// Execute the bearing use case.
    ///
    /// # Returns
    /// The cardinal bucket and rounded angle from `from` toward `to`.
    /// Endpoints sharing a plane position have no direction between them and
    /// report [`NavigationError::UndefinedBearing`].
    pub async fn execute(
        &self,
        from: BearingTarget,
        to: BearingTarget,
    ) -> Result<Bearing, NavigationError> {
        let from = self.resolve(from).await?;
        let to = self.resolve(to).await?;

        bearing(from, to).ok_or(NavigationError::UndefinedBearing)
    }

    async fn resolve(&self, target: BearingTarget) -> Result<Coordinates, NavigationError> {
        match target {
            BearingTarget::Point(coords) => Ok(coords),
            BearingTarget::Named(name) => {
                let record = resolve_endpoint(self.records.as_ref(), &name).await?;
                Ok(record.coords)
            }
        }
    }
}
