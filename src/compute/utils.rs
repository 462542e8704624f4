use serde_json::Value;

use crate::error::Error;

use super::types::{PhysicalInfrastructureSummary, PhysicalSummaryList};

/// Project a '/compute/PhysicalSummaries' payload into flat summary records.
/// Fails if 'Results' or any projected field is missing from the payload.
pub fn summary_from_payload(
  payload: Value,
) -> Result<Vec<PhysicalInfrastructureSummary>, Error> {
  let summary_list: PhysicalSummaryList = serde_json::from_value(payload)?;

  Ok(
    summary_list
      .results
      .into_iter()
      .map(PhysicalInfrastructureSummary::from)
      .collect(),
  )
}
