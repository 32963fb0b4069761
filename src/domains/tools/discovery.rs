//! Discovery manifest served to the tool-orchestration host.
//!
//! The host fetches `GET /discovery` and expects a list of functions, each
//! with its declared parameters and the endpoint used to invoke it.

use serde::{Deserialize, Serialize};

/// Prefix shared by every invocation endpoint.
pub const TOOLS_PATH_PREFIX: &str = "/tools/";

/// Parameter types understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterManifest {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    pub description: String,
    pub required: bool,
}

impl ParameterManifest {
    pub fn new(
        name: impl Into<String>,
        param_type: ParameterType,
        required: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type,
            description: description.into(),
            required,
        }
    }
}

/// A callable function as advertised to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionManifest {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterManifest>,
    pub endpoint: String,
    pub http_method: String,
}

/// Body of the discovery endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryDocument {
    pub functions: Vec<FunctionManifest>,
}

/// Invocation endpoint for a tool: `get_news` is served at `/tools/get-news`.
pub fn endpoint_for(tool_name: &str) -> String {
    format!("{}{}", TOOLS_PATH_PREFIX, tool_name.replace('_', "-"))
}
