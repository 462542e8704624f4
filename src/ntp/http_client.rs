use serde_json::Value;

use crate::{
  common::{authentication::ApiCredentials, http_client},
  error::Error,
};

/// Get the NTP policies configured in the Intersight tenant.
pub fn get(credentials: &ApiCredentials) -> Result<Value, Error> {
  log::info!("Get NTP policies");

  http_client::get(credentials, "/ntp/Policies")
    .map_err(|error| Error::NtpPoliciesNotAvailable(Box::new(error)))
}
