use serde_json::Value;

use crate::{
  common::{authentication::ApiCredentials, http_client},
  error::Error,
};

use super::{types::OsVendorCompliance, utils};

/// Get the Hardware Compatibility List compliance data: the OS version and
/// vendor Moid of each operating system known to the HCL service.
pub fn get(
  credentials: &ApiCredentials,
) -> Result<Vec<OsVendorCompliance>, Error> {
  log::info!("Get HCL compliance");

  http_client::get(credentials, "/hcl/OperatingSystems")
    .and_then(utils::compliance_from_payload)
    .map_err(|error| Error::HclComplianceNotAvailable(Box::new(error)))
}

/// Get the details of one OS vendor by Moid.
pub fn get_vendor(
  credentials: &ApiCredentials,
  vendor_moid: &str,
) -> Result<Value, Error> {
  log::info!("Get HCL OS vendor '{}'", vendor_moid);

  http_client::get(
    credentials,
    &format!("/hcl/OperatingSystemVendors/{}", vendor_moid),
  )
  .map_err(|error| Error::HclComplianceNotAvailable(Box::new(error)))
}
