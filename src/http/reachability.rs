//! Remote check of a deployed edge.
//!
//! Sends one GET, optionally with a credential, and reports how the filter
//! answered.

use std::fmt;

use reqwest::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use reqwest::StatusCode;

use crate::edge::Credential;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityReport {
    pub status: StatusCode,
    /// `www-authenticate` challenge, if the edge sent one.
    pub challenge: Option<String>,
}

impl fmt::Display for ReachabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}", self.status)?;
        if let Some(challenge) = &self.challenge {
            write!(f, "\nWWW-Authenticate: {challenge}")?;
        }
        Ok(())
    }
}

pub async fn check_reachability(
    client: &reqwest::Client,
    url: &str,
    credential: Option<&Credential>,
) -> Result<ReachabilityReport, reqwest::Error> {
    let mut request = client.get(url);
    if let Some(credential) = credential {
        request = request.header(AUTHORIZATION, credential.as_str());
    }

    let res = request.send().await?;
    let challenge = res
        .headers()
        .get(WWW_AUTHENTICATE)
        .map(|value| value.to_str().unwrap_or("<non-ascii>").to_string());

    Ok(ReachabilityReport {
        status: res.status(),
        challenge,
    })
}
