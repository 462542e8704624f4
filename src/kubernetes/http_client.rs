use crate::{
  common::{authentication::ApiCredentials, http_client},
  error::Error,
};

use super::utils;

/// Get the names of all Kubernetes cluster profiles in the tenant.
pub fn get_cluster_names(
  credentials: &ApiCredentials,
) -> Result<Vec<String>, Error> {
  log::info!("Get Kubernetes cluster names");

  http_client::get(credentials, "/kubernetes/ClusterProfiles")
    .and_then(utils::cluster_names_from_payload)
    .map_err(|error| Error::KubernetesClustersNotAvailable(Box::new(error)))
}

/// Get the number of Kubernetes cluster profiles in the tenant.
pub fn get_cluster_count(
  credentials: &ApiCredentials,
) -> Result<usize, Error> {
  let cluster_names = get_cluster_names(credentials)?;

  Ok(cluster_names.len())
}
