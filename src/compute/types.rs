use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PhysicalSummaryList {
  #[serde(rename = "Results")]
  pub results: Vec<PhysicalSummary>,
}

/// Wire representation of a '/compute/PhysicalSummaries' entry. Only the
/// fields projected into the summary record are deserialized.
#[derive(Debug, Deserialize)]
pub struct PhysicalSummary {
  #[serde(rename = "ManagementMode")]
  pub management_mode: String,
  #[serde(rename = "MgmtIpAddress")]
  pub mgmt_ip_address: String,
  #[serde(rename = "Name")]
  pub name: String,
  #[serde(rename = "NumCpus")]
  pub num_cpus: i64,
  #[serde(rename = "NumCpuCores")]
  pub num_cpu_cores: i64,
  #[serde(rename = "OperPowerState")]
  pub oper_power_state: String,
  #[serde(rename = "Firmware")]
  pub firmware: String,
  #[serde(rename = "Model")]
  pub model: String,
  #[serde(rename = "Moid")]
  pub moid: String,
}

/// Flat record describing one physical server.
#[derive(Debug, Serialize, PartialEq)]
pub struct PhysicalInfrastructureSummary {
  pub management_mode: String,
  pub management_ip: String,
  pub name: String,
  pub cpu_count: i64,
  pub cpu_core_count: i64,
  pub power_state: String,
  pub firmware: String,
  pub model: String,
  pub serial: String,
}

impl From<PhysicalSummary> for PhysicalInfrastructureSummary {
  fn from(value: PhysicalSummary) -> Self {
    PhysicalInfrastructureSummary {
      management_mode: value.management_mode,
      management_ip: value.mgmt_ip_address,
      name: value.name,
      cpu_count: value.num_cpus,
      cpu_core_count: value.num_cpu_cores,
      power_state: value.oper_power_state,
      firmware: value.firmware,
      model: value.model,
      // Intersight reports the object Moid as the device serial here
      serial: value.moid,
    }
  }
}
