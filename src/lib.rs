pub mod common;
pub mod compute;
pub mod cond;
pub mod error;
pub mod hcl;
pub mod kubernetes;
pub mod ntp;

use serde_json::Value;

use crate::{
  common::authentication::ApiCredentials,
  compute::types::PhysicalInfrastructureSummary, error::Error,
  hcl::types::OsVendorCompliance,
};

/// Connector bundling API credentials with the Intersight read operations.
/// Each method issues one signed GET request against the tenant.
#[derive(Clone)]
pub struct Intersight {
  credentials: ApiCredentials,
}

impl Intersight {
  pub fn new(credentials: ApiCredentials) -> Self {
    Self { credentials }
  }

  /// Build a connector from the user configuration file and 'INTERSIGHT_*'
  /// environment variables.
  pub fn from_configuration() -> Result<Self, Error> {
    Ok(Self::new(common::config::get_configuration()?))
  }

  pub fn get_ntp_policies(&self) -> Result<Value, Error> {
    ntp::http_client::get(&self.credentials)
  }

  pub fn get_alarms_description(&self) -> Result<Value, Error> {
    cond::http_client::get(&self.credentials)
  }

  pub fn get_summary_physical_infrastructure(
    &self,
  ) -> Result<Vec<PhysicalInfrastructureSummary>, Error> {
    compute::http_client::get(&self.credentials)
  }

  pub fn get_compliance_hcl(&self) -> Result<Vec<OsVendorCompliance>, Error> {
    hcl::http_client::get(&self.credentials)
  }

  pub fn get_vendor_info_compliance_hcl(
    &self,
    vendor_moid: &str,
  ) -> Result<Value, Error> {
    hcl::http_client::get_vendor(&self.credentials, vendor_moid)
  }

  pub fn get_list_name_kubernetes_cluster(
    &self,
  ) -> Result<Vec<String>, Error> {
    kubernetes::http_client::get_cluster_names(&self.credentials)
  }

  pub fn get_count_kubernetes_cluster(&self) -> Result<usize, Error> {
    kubernetes::http_client::get_cluster_count(&self.credentials)
  }
}
