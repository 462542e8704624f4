use serde_json::Value;

use crate::{
  common::authentication::{self, ApiCredentials},
  error::Error,
};

fn build_client() -> Result<reqwest::blocking::Client, Error> {
  let client_builder = reqwest::blocking::Client::builder().use_rustls_tls();

  // Build client
  if std::env::var("SOCKS5").is_ok() {
    // socks5 proxy
    log::debug!("SOCKS5 enabled");
    let socks5proxy = reqwest::Proxy::all(std::env::var("SOCKS5")?)?;
    Ok(client_builder.proxy(socks5proxy).build()?)
  } else {
    Ok(client_builder.build()?)
  }
}

/// Issue a signed GET request against '<base_url><path>' and return the
/// parsed JSON body.
pub fn get(
  credentials: &ApiCredentials,
  path: &str,
) -> Result<Value, Error> {
  let client = build_client()?;

  let api_url = format!("{}{}", credentials.base_url, path);

  let url = reqwest::Url::parse(&api_url).map_err(|error| {
    Error::Message(format!("Invalid URL '{}': {}", api_url, error))
  })?;

  let headers = authentication::sign_get(credentials, &url)?;

  log::debug!("GET {}", url);

  let response = client
    .get(url)
    .headers(headers)
    .send()
    .map_err(Error::NetError)?;

  let status = response.status();

  if status == reqwest::StatusCode::UNAUTHORIZED
    || status == reqwest::StatusCode::FORBIDDEN
  {
    let payload = response.text().map_err(Error::NetError)?;

    return Err(Error::AuthenticationError(payload));
  }

  if let Err(error) = response.error_for_status_ref() {
    let payload = response.text().map_err(Error::NetError)?;

    return Err(Error::RequestError {
      response: error,
      payload,
    });
  }

  response.json::<Value>().map_err(Error::NetError)
}
