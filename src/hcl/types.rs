use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct OperatingSystemList {
  #[serde(rename = "Results")]
  pub results: Vec<OperatingSystem>,
}

#[derive(Debug, Deserialize)]
pub struct OperatingSystem {
  #[serde(rename = "Version")]
  pub version: String,
  #[serde(rename = "Vendor")]
  pub vendor: VendorRelationship,
}

#[derive(Debug, Deserialize)]
pub struct VendorRelationship {
  #[serde(rename = "Moid")]
  pub moid: String,
}

/// Flat record pairing an OS version with its vendor Moid.
#[derive(Debug, Serialize, PartialEq)]
pub struct OsVendorCompliance {
  pub version: String,
  pub vendor_moid: String,
}

impl From<OperatingSystem> for OsVendorCompliance {
  fn from(value: OperatingSystem) -> Self {
    OsVendorCompliance {
      version: value.version,
      vendor_moid: value.vendor.moid,
    }
  }
}
