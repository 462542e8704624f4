use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use reqwest::header::{
  HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, DATE, HOST,
};
use rsa::{
  pkcs1::DecodeRsaPrivateKey, pkcs8::DecodePrivateKey, Pkcs1v15Sign,
  RsaPrivateKey,
};
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::error::Error;

/// Intersight API key credentials. The secret key is the PEM encoded RSA
/// private key downloaded from Intersight when the API key was generated
/// (v2 keys). Immutable for the process lifetime.
#[derive(Clone)]
pub struct ApiCredentials {
  pub base_url: String,
  pub api_key_id: String,
  secret_key: SecretString,
}

impl ApiCredentials {
  pub fn new(
    base_url: &str,
    api_key_id: &str,
    secret_key_pem: &str,
  ) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      api_key_id: api_key_id.to_string(),
      secret_key: SecretString::new(secret_key_pem.to_string()),
    }
  }

  /// Read the secret key PEM from disk.
  pub fn from_key_file(
    base_url: &str,
    api_key_id: &str,
    secret_key_file: &Path,
  ) -> Result<Self, Error> {
    let secret_key_pem = std::fs::read_to_string(secret_key_file)?;

    Ok(Self::new(base_url, api_key_id, &secret_key_pem))
  }
}

/// Sign a GET request following the HTTP Signature scheme used by Intersight
/// v2 API keys: SHA-256 body digest, RFC 7231 date and a rsa-sha256 signature
/// over '(request-target) host date digest'.
///
/// Returns the Date, Digest, Host and Authorization headers to attach to the
/// request.
pub fn sign_get(
  credentials: &ApiCredentials,
  url: &reqwest::Url,
) -> Result<HeaderMap, Error> {
  let private_key =
    private_key_from_pem(credentials.secret_key.expose_secret())?;

  let host = url
    .host_str()
    .ok_or_else(|| {
      Error::Message(format!("URL '{}' has no host", url))
    })?
    .to_string();

  let request_target = format!("get {}", url.path());
  let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();

  // GET requests carry an empty body
  let digest = format!("SHA-256={}", BASE64.encode(Sha256::digest(b"")));

  let string_to_sign = signature_string(&request_target, &host, &date, &digest);

  let hashed = Sha256::digest(string_to_sign.as_bytes());

  let signature = private_key
    .sign(Pkcs1v15Sign::new::<Sha256>(), &hashed)
    .map_err(|error| Error::AuthenticationError(error.to_string()))?;

  let authorization = format!(
    "Signature keyId=\"{}\",algorithm=\"rsa-sha256\",headers=\"(request-target) host date digest\",signature=\"{}\"",
    credentials.api_key_id,
    BASE64.encode(signature)
  );

  let mut headers = HeaderMap::new();
  headers.insert(DATE, header_value(&date)?);
  headers.insert(HOST, header_value(&host)?);
  headers.insert(HeaderName::from_static("digest"), header_value(&digest)?);
  headers.insert(AUTHORIZATION, header_value(&authorization)?);

  Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, Error> {
  HeaderValue::from_str(value)
    .map_err(|error| Error::AuthenticationError(error.to_string()))
}

fn signature_string(
  request_target: &str,
  host: &str,
  date: &str,
  digest: &str,
) -> String {
  format!(
    "(request-target): {}\nhost: {}\ndate: {}\ndigest: {}",
    request_target, host, date, digest
  )
}

fn private_key_from_pem(pem: &str) -> Result<RsaPrivateKey, Error> {
  // Intersight v2 keys may be exported as PKCS#1 ('BEGIN RSA PRIVATE KEY')
  // or PKCS#8 ('BEGIN PRIVATE KEY')
  if pem.contains("BEGIN RSA PRIVATE KEY") {
    RsaPrivateKey::from_pkcs1_pem(pem)
      .map_err(|error| Error::AuthenticationError(error.to_string()))
  } else {
    RsaPrivateKey::from_pkcs8_pem(pem)
      .map_err(|error| Error::AuthenticationError(error.to_string()))
  }
}
