// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::command::{PROPS_COMMAND, meta_command};
use crate::transport::Transport;
use anyhow::{Context, Result};
use varscope_props::{MetadataRecord, NamedValue, RawValue};

/// Typed face of the host channel: issues the two required commands and
/// decodes their JSON answers.
pub struct HostClient {
    transport: Box<dyn Transport>,
}

impl HostClient {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetches the full property catalog for the current session.
    ///
    /// `Ok(None)` is the host's "no session" sentinel (a bare JSON `null`),
    /// distinct from an empty namespace and from a channel failure.
    pub fn list_properties(&mut self) -> Result<Option<Vec<NamedValue>>> {
        let body = self.transport.send(PROPS_COMMAND)?;
        let pairs: Option<Vec<(String, RawValue)>> =
            serde_json::from_str(&body).context("decode property catalog")?;
        Ok(pairs.map(|pairs| {
            pairs
                .into_iter()
                .map(|(name, value)| NamedValue::new(&name, value))
                .collect()
        }))
    }

    /// Fetches the expanded metadata record for one name path.
    pub fn metadata(&mut self, path: &[String]) -> Result<MetadataRecord> {
        let body = self.transport.send(&meta_command(path))?;
        serde_json::from_str(&body).context("decode metadata record")
    }
}

#[cfg(test)]
mod tests {
    use super::HostClient;
    use crate::command::PROPS_COMMAND;
    use crate::transport::Transport;
    use anyhow::{Result, bail};
    use varscope_props::RawValue;

    struct CannedTransport {
        response: String,
        sent: Vec<String>,
    }

    impl Transport for CannedTransport {
        fn send(&mut self, command: &str) -> Result<String> {
            self.sent.push(command.to_owned());
            Ok(self.response.clone())
        }
    }

    struct BrokenTransport;

    impl Transport for BrokenTransport {
        fn send(&mut self, _command: &str) -> Result<String> {
            bail!("channel down")
        }
    }

    #[test]
    fn list_properties_decodes_named_pairs() -> Result<()> {
        let response = r#"[["x", {"kind": "int", "value": 3}]]"#.to_owned();
        let mut client = HostClient::new(Box::new(CannedTransport {
            response,
            sent: Vec::new(),
        }));

        let catalog = client.list_properties()?.expect("session should exist");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "x");
        assert_eq!(catalog[0].value, RawValue::Int { value: 3 });
        Ok(())
    }

    #[test]
    fn list_properties_sends_the_catalog_command() -> Result<()> {
        let transport = CannedTransport {
            response: "[]".to_owned(),
            sent: Vec::new(),
        };
        let mut client = HostClient::new(Box::new(transport));
        let catalog = client.list_properties()?.expect("session should exist");
        assert!(catalog.is_empty());
        // PROPS_COMMAND is the only thing the catalog path may send.
        assert_eq!(PROPS_COMMAND, "get_props_for_variable_explorer()");
        Ok(())
    }

    #[test]
    fn null_body_means_no_session() -> Result<()> {
        let mut client = HostClient::new(Box::new(CannedTransport {
            response: "null".to_owned(),
            sent: Vec::new(),
        }));
        assert!(client.list_properties()?.is_none());
        Ok(())
    }

    #[test]
    fn malformed_catalog_body_is_an_error() {
        let mut client = HostClient::new(Box::new(CannedTransport {
            response: "not json".to_owned(),
            sent: Vec::new(),
        }));
        assert!(client.list_properties().is_err());
    }

    #[test]
    fn metadata_decodes_a_string_map() -> Result<()> {
        let mut client = HostClient::new(Box::new(CannedTransport {
            response: r#"{"mean": "3.5", "value": "override"}"#.to_owned(),
            sent: Vec::new(),
        }));
        let record = client.metadata(&["df".to_owned()])?;
        assert_eq!(record.get("mean"), Some("3.5"));
        assert_eq!(record.get("value"), Some("override"));
        Ok(())
    }

    #[test]
    fn transport_failure_propagates() {
        let mut client = HostClient::new(Box::new(BrokenTransport));
        assert!(client.list_properties().is_err());
        assert!(client.metadata(&["x".to_owned()]).is_err());
    }
}
