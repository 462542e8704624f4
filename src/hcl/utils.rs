use serde_json::Value;

use crate::error::Error;

use super::types::{OperatingSystemList, OsVendorCompliance};

/// Project a '/hcl/OperatingSystems' payload into {version, vendor_moid}
/// records.
pub fn compliance_from_payload(
  payload: Value,
) -> Result<Vec<OsVendorCompliance>, Error> {
  let os_list: OperatingSystemList = serde_json::from_value(payload)?;

  Ok(
    os_list
      .results
      .into_iter()
      .map(OsVendorCompliance::from)
      .collect(),
  )
}
