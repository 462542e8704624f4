use serde_json::Value;

use crate::error::Error;

use super::types::ClusterProfileList;

/// Extract the cluster profile names from a '/kubernetes/ClusterProfiles'
/// payload.
pub fn cluster_names_from_payload(
  payload: Value,
) -> Result<Vec<String>, Error> {
  let profile_list: ClusterProfileList = serde_json::from_value(payload)?;

  Ok(
    profile_list
      .results
      .into_iter()
      .map(|profile| profile.name)
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn extracts_names_in_order() {
    let payload = json!({
      "Results": [
        {"Name": "clusterA", "Moid": "k1"},
        {"Name": "clusterB", "Moid": "k2"}
      ]
    });

    let names = cluster_names_from_payload(payload).unwrap();

    assert_eq!(names, vec!["clusterA", "clusterB"]);
  }

  #[test]
  fn cluster_count_is_the_number_of_names() {
    let payload = json!({
      "Results": [
        {"Name": "clusterA"},
        {"Name": "clusterB"}
      ]
    });

    let names = cluster_names_from_payload(payload).unwrap();

    assert_eq!(names.len(), 2);
  }

  #[test]
  fn missing_name_fails() {
    let payload = json!({
      "Results": [
        {"Moid": "k1"}
      ]
    });

    let result = cluster_names_from_payload(payload);

    assert!(matches!(result, Err(Error::SerdeJsonError(_))));
  }

  #[test]
  fn empty_results_is_not_an_error() {
    let names = cluster_names_from_payload(json!({"Results": []})).unwrap();

    assert!(names.is_empty());
  }
}
