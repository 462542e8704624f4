use std::error::Error as StdError;

use intersight_rs::common::authentication::ApiCredentials;
use intersight_rs::error::Error;
use intersight_rs::Intersight;

const TEST_KEY_PEM: &str = include_str!("fixtures/test_rsa_key.pem");

// Signing succeeds against the fixture key, the request then fails fast on
// a closed loopback port, so every operation has to surface its own
// resource error without touching the network for real.
fn unreachable_connector() -> Intersight {
  Intersight::new(ApiCredentials::new(
    "https://127.0.0.1:1/api/v1",
    "abcd1234/abcd1234/abcd1234abcd",
    TEST_KEY_PEM,
  ))
}

#[test]
fn ntp_policies_failure_is_the_ntp_error() {
  let error = unreachable_connector().get_ntp_policies().unwrap_err();

  assert!(matches!(error, Error::NtpPoliciesNotAvailable(_)));
}

#[test]
fn alarms_failure_is_the_alarms_error() {
  let error = unreachable_connector().get_alarms_description().unwrap_err();

  assert!(matches!(error, Error::AlarmsNotAvailable(_)));
}

#[test]
fn physical_infrastructure_failure_is_the_compute_error() {
  let error = unreachable_connector()
    .get_summary_physical_infrastructure()
    .unwrap_err();

  assert!(matches!(error, Error::PhysicalInfrastructureNotAvailable(_)));
}

#[test]
fn hcl_compliance_failure_is_the_hcl_error() {
  let error = unreachable_connector().get_compliance_hcl().unwrap_err();

  assert!(matches!(error, Error::HclComplianceNotAvailable(_)));
}

#[test]
fn hcl_vendor_failure_is_the_hcl_error() {
  let error = unreachable_connector()
    .get_vendor_info_compliance_hcl("v1")
    .unwrap_err();

  assert!(matches!(error, Error::HclComplianceNotAvailable(_)));
}

#[test]
fn kubernetes_cluster_names_failure_is_the_kubernetes_error() {
  let error = unreachable_connector()
    .get_list_name_kubernetes_cluster()
    .unwrap_err();

  assert!(matches!(error, Error::KubernetesClustersNotAvailable(_)));
}

#[test]
fn kubernetes_cluster_count_follows_the_names_operation() {
  // The count is derived from the names listing, so it fails with the same
  // resource error when the listing does
  let error = unreachable_connector()
    .get_count_kubernetes_cluster()
    .unwrap_err();

  assert!(matches!(error, Error::KubernetesClustersNotAvailable(_)));
}

#[test]
fn resource_errors_preserve_the_underlying_cause() {
  let error = unreachable_connector().get_ntp_policies().unwrap_err();

  let cause = error.source().expect("cause must be preserved");

  // The transport failure stays diagnosable behind the coarse contract
  assert!(matches!(
    cause.downcast_ref::<Error>(),
    Some(Error::NetError(_))
  ));
}
