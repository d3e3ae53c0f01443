// src/core/net.rs
//
// Single-shot JSON GET. No retry; the caller decides what a failure means.

use std::error::Error;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::config::consts::USER_AGENT;

pub fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, Box<dyn Error>> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.json::<T>()?)
}
