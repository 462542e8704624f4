use crate::{
  common::{authentication::ApiCredentials, http_client},
  error::Error,
};

use super::{types::PhysicalInfrastructureSummary, utils};

/// Get a summary of the physical infrastructure: one flat record per server
/// with management mode/IP, name, CPU counts, power state, firmware, model
/// and serial.
pub fn get(
  credentials: &ApiCredentials,
) -> Result<Vec<PhysicalInfrastructureSummary>, Error> {
  log::info!("Get physical infrastructure summary");

  http_client::get(credentials, "/compute/PhysicalSummaries")
    .and_then(utils::summary_from_payload)
    .map_err(|error| {
      Error::PhysicalInfrastructureNotAvailable(Box::new(error))
    })
}
