//! The MCP server entry this installer owns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::package::PACKAGE_NAME;

/// Top-level key holding the MCP server entries.
pub const SERVERS_KEY: &str = "mcpServers";

/// Key of this installer's entry inside [`SERVERS_KEY`].
pub const SERVER_KEY: &str = "ambivo";

/// Environment variable that carries the auth token to the server.
pub const TOKEN_ENV_VAR: &str = "AMBIVO_AUTH_TOKEN";

/// One `mcpServers` entry: how Claude launches the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub command: String,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
}

impl ServerEntry {
    /// The entry that runs the installed package with `python`.
    pub fn ambivo(python: &str, token: &str) -> Self {
        Self {
            command: python.to_string(),
            args: vec!["-m".to_string(), PACKAGE_NAME.to_string()],
            env: BTreeMap::from([(TOKEN_ENV_VAR.to_string(), token.to_string())]),
        }
    }

    /// The entry as a JSON value, fields in `command`, `args`, `env` order.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "command": self.command,
            "args": self.args,
            "env": self.env,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambivo_entry_has_three_fields() {
        let value = ServerEntry::ambivo("python3", "tok-123").to_value();
        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["command", "args", "env"]);
        assert_eq!(value["command"], "python3");
        assert_eq!(value["args"], serde_json::json!(["-m", "ambivo-mcp-server"]));
        assert_eq!(value["env"]["AMBIVO_AUTH_TOKEN"], "tok-123");
        assert_eq!(value["env"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn entry_round_trips_through_json() {
        let entry = ServerEntry::ambivo("py -3", "secret");
        let parsed: ServerEntry = serde_json::from_value(entry.to_value()).unwrap();
        assert_eq!(parsed, entry);
    }
}
