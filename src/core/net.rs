// src/core/net.rs

// Blocking HTTP GET with a browser-like identity. One request, no retries.

use std::{net::IpAddr, time::Duration};

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::Url;

use crate::config::consts::{ACCEPT_LANGUAGE_VALUE, USER_AGENT};
use crate::error::{Result, ScrapeError};

pub fn http_get(url: &str, timeout: Duration) -> Result<String> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(timeout);
    // Never route a local mirror through an environment proxy.
    if is_loopback(url) {
        builder = builder.no_proxy();
    }
    let client = builder.build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status { status, url: s!(url) });
    }

    let body = resp.text()?;
    debug!("GET {url}: {status}, {} bytes", body.len());
    Ok(body)
}

fn is_loopback(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else { return false };
    match parsed.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_matches(|c| c == '[' || c == ']')
            .parse::<IpAddr>()
            .is_ok_and(|ip| ip.is_loopback()),
        None => false,
    }
}
