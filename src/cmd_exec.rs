//! One-shot `exec` and `actions` subcommands.

use serde_json::{Map, Value};

use deskpilot_config::Config;
use deskpilot_tools_computer::RequestBuilder;

use crate::server::{check_config, computer_tool};

/// Parse `KEY=VALUE` pairs. Values that parse as JSON keep their type; anything else
/// is passed as a string.
pub(crate) fn parse_params(pairs: &[String]) -> Result<Map<String, Value>, String> {
    let mut params = Map::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("Invalid parameter {:?}, expected KEY=VALUE", pair))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("Invalid parameter {:?}, empty key", pair));
        }
        let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
        params.insert(key.to_string(), value);
    }
    Ok(params)
}

pub(crate) async fn run_exec(
    config: Config,
    action: String,
    pairs: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    check_config(&config)?;
    let params = parse_params(&pairs)?;
    let tool = computer_tool(&config);
    let output = tool.run(&action, Value::Object(params)).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub(crate) fn list_actions() {
    for action in RequestBuilder::global().actions() {
        println!("{}", action);
    }
}
