use serde_json::Value;

use crate::{
  common::{authentication::ApiCredentials, http_client},
  error::Error,
};

/// Get the active alarms with their descriptions.
pub fn get(credentials: &ApiCredentials) -> Result<Value, Error> {
  log::info!("Get alarms");

  http_client::get(credentials, "/cond/Alarms")
    .map_err(|error| Error::AlarmsNotAvailable(Box::new(error)))
}
