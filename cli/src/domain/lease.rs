//! Lease metadata: the provisioning script's `KEY=VALUE` record and the
//! state carried from the setup phase to the teardown phase.

use super::inputs::LeaseInputs;

/// State and output names shared by both phases.
pub mod state_key {
    pub const LEASE_ID: &str = "lease-id";
    pub const CLIENT_IP: &str = "client-ip";
    pub const PEER_ISSUER_URL: &str = "peer-issuer-url";
    pub const AUTHENTIK_URL: &str = "authentik-url";
    pub const AUTHENTIK_CLIENT_ID: &str = "authentik-client-id";
}

/// Keys the provisioning script may write to its output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKey {
    LeaseId,
    ClientIp,
}

impl OutputKey {
    /// Match a raw record key. Unknown keys yield `None`.
    #[must_use]
    pub fn from_record_key(key: &str) -> Option<Self> {
        match key {
            "LEASE_ID" => Some(Self::LeaseId),
            "CLIENT_IP" => Some(Self::ClientIp),
            _ => None,
        }
    }

    /// Name used for both the job output and the persisted state entry.
    #[must_use]
    pub fn output_name(self) -> &'static str {
        match self {
            Self::LeaseId => state_key::LEASE_ID,
            Self::ClientIp => state_key::CLIENT_IP,
        }
    }
}

/// Parse the provisioning script's output file.
///
/// Each line is split on its first `=`; the rest of the line, further `=`
/// included, is the value. A line without `=` is a key with an empty value.
/// Unknown keys are skipped. Entries are returned in file order, duplicates
/// included.
#[must_use]
pub fn parse_output_record(text: &str) -> Vec<(OutputKey, String)> {
    text.lines()
        .filter_map(|line| {
            let (key, value) = line.split_once('=').unwrap_or((line, ""));
            let key = OutputKey::from_record_key(key)?;
            Some((key, value.to_string()))
        })
        .collect()
}

/// Configuration the teardown phase needs, as `(state key, value)` pairs.
#[must_use]
pub fn persisted_config(inputs: &LeaseInputs) -> [(&'static str, &str); 3] {
    [
        (state_key::PEER_ISSUER_URL, inputs.peer_issuer_url.as_str()),
        (state_key::AUTHENTIK_URL, inputs.authentik_url.as_str()),
        (state_key::AUTHENTIK_CLIENT_ID, inputs.authentik_client_id.as_str()),
    ]
}

/// A lease recorded by the setup phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedLease {
    pub lease_id: String,
    pub peer_issuer_url: String,
    pub authentik_url: String,
    pub authentik_client_id: String,
}

impl PersistedLease {
    /// Rebuild the lease from persisted state.
    ///
    /// Returns `None` when no lease id was recorded; an empty id counts as
    /// absent. Missing configuration entries become empty strings.
    pub fn from_state(get: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let lease_id = get(state_key::LEASE_ID).filter(|id| !id.is_empty())?;
        Some(Self {
            lease_id,
            peer_issuer_url: get(state_key::PEER_ISSUER_URL).unwrap_or_default(),
            authentik_url: get(state_key::AUTHENTIK_URL).unwrap_or_default(),
            authentik_client_id: get(state_key::AUTHENTIK_CLIENT_ID).unwrap_or_default(),
        })
    }

    /// Environment passed to the cleanup script.
    #[must_use]
    pub fn script_env(&self) -> Vec<(String, String)> {
        vec![
            ("LEASE_ID".into(), self.lease_id.clone()),
            ("PEER_ISSUER_URL".into(), self.peer_issuer_url.clone()),
            ("AUTHENTIK_URL".into(), self.authentik_url.clone()),
            ("AUTHENTIK_CLIENT_ID".into(), self.authentik_client_id.clone()),
        ]
    }
}
