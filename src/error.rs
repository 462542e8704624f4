use std::{env::VarError, io};

#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("Intersight > Generic error: {0}")]
  Message(String),
  #[error("Intersight > Environment variable: {0}")]
  EnvVarError(#[from] VarError),
  #[error("Intersight > IO: {0}")]
  IoError(#[from] io::Error),
  #[error("Intersight > Serde JSON: {0}")]
  SerdeJsonError(#[from] serde_json::Error),
  #[error("Intersight > Net: {0}")]
  NetError(#[from] reqwest::Error),
  #[error("Intersight > Config: {0}")]
  ConfigError(#[from] config::ConfigError),
  #[error("Intersight > Authentication: {0}")]
  AuthenticationError(String),
  #[error("http request:\nresponse: {response}\npayload: {payload}")]
  RequestError {
    response: reqwest::Error,
    payload: String, // NOTE: Intersight returns either plain text or a json
                     // error document, we just keep the raw body
  },
  #[error("No NTP policies are set")]
  NtpPoliciesNotAvailable(#[source] Box<Error>),
  #[error("Alarms are not supported")]
  AlarmsNotAvailable(#[source] Box<Error>),
  #[error("Physical infrastructures are not supported")]
  PhysicalInfrastructureNotAvailable(#[source] Box<Error>),
  #[error("Compliance with Hardware Compatibility List (HCL) is not supported")]
  HclComplianceNotAvailable(#[source] Box<Error>),
  #[error("Kubernetes clusters are not supported")]
  KubernetesClustersNotAvailable(#[source] Box<Error>),
}
