use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ClusterProfileList {
  #[serde(rename = "Results")]
  pub results: Vec<ClusterProfile>,
}

#[derive(Debug, Deserialize)]
pub struct ClusterProfile {
  #[serde(rename = "Name")]
  pub name: String,
}
