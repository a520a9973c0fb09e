//! Distance measurement use case.

use std::sync::Arc;
use waypost_domain::planar_distance;

use crate::infrastructure::ports::LocationRecords;

use super::{resolve_endpoint, NavigationError};

/// Distance measurement use case.
///
/// Resolves two named records and measures the planar Euclidean distance
/// between them, in abstract distance units. Elevation does not contribute;
/// two points stacked on the same plane spot are zero units apart.
pub struct MeasureDistance {
    records: Arc<dyn LocationRecords>,
}

impl MeasureDistance {
    pub fn new(records: Arc<dyn LocationRecords>) -> Self {
        Self { records }
    }

    /// Execute the distance measurement use case.
    ///
    /// # Arguments
    /// * `name_a` - Exact name of the starting location
    /// * `name_b` - Exact name of the destination
    ///
    /// # Returns
    /// Non-negative distance in abstract units; the front end attaches
    /// labels.
    pub async fn execute(&self, name_a: &str, name_b: &str) -> Result<f64, NavigationError> {
        let from = resolve_endpoint(self.records.as_ref(), name_a).await?;
        let to = resolve_endpoint(self.records.as_ref(), name_b).await?;

        Ok(planar_distance(from.coords, to.coords))
    }
}
