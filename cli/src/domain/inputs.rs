//! Action inputs — the configuration the setup phase forwards to the
//! provisioning script.

use serde::Deserialize;

/// Inputs exactly as the runner supplies them (`INPUT_*` variables).
///
/// The runner exports every declared input, including empty ones, so all
/// fields are optional strings.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawInputs {
    pub peer_issuer_url: Option<String>,
    pub ttl_seconds: Option<String>,
    pub attic_host: Option<String>,
    pub authentik_url: Option<String>,
    pub authentik_client_id: Option<String>,
}

/// Action inputs, trimmed. Nothing is interpreted here: every value is
/// forwarded to the provisioning script as given, empty strings included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseInputs {
    /// Base URL of the service that issues peer leases.
    pub peer_issuer_url: String,
    /// Requested lease lifetime in seconds, as written in the workflow.
    pub ttl_seconds: String,
    /// Binary cache host the leased peer should reach.
    pub attic_host: String,
    /// Identity provider base URL.
    pub authentik_url: String,
    /// Identity provider client id.
    pub authentik_client_id: String,
}

impl From<RawInputs> for LeaseInputs {
    fn from(raw: RawInputs) -> Self {
        Self {
            peer_issuer_url: trimmed(raw.peer_issuer_url),
            ttl_seconds: trimmed(raw.ttl_seconds),
            attic_host: trimmed(raw.attic_host),
            authentik_url: trimmed(raw.authentik_url),
            authentik_client_id: trimmed(raw.authentik_client_id),
        }
    }
}

impl LeaseInputs {
    /// Environment passed to the provisioning script, minus the output file
    /// path which only exists once setup has created its scratch directory.
    #[must_use]
    pub fn script_env(&self) -> Vec<(String, String)> {
        vec![
            ("PEER_ISSUER_URL".into(), self.peer_issuer_url.clone()),
            ("TTL_SECONDS".into(), self.ttl_seconds.clone()),
            ("ATTIC_HOST".into(), self.attic_host.clone()),
            ("AUTHENTIK_URL".into(), self.authentik_url.clone()),
            ("AUTHENTIK_CLIENT_ID".into(), self.authentik_client_id.clone()),
        ]
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
