//! Parsed specification model.
//!
//! Value objects shared by the parser and the generator. A model is
//! constructed once per invocation, consumed by [`crate::generate`], and
//! discarded; nothing mutates it after construction.

use serde::Serialize;

/// Primitive kinds a tool parameter or return field may carry.
///
/// This is a closed enumeration; list lines naming any other kind keyword
/// do not parse and are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    List,
}

impl PrimitiveKind {
    /// Parse a source keyword (`string`, `number`, `boolean`, `list`).
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "list" => Some(Self::List),
            _ => None,
        }
    }

    /// JSON Schema type name used in the generated list-tools response.
    pub fn json_schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::List => "array",
        }
    }

    /// TypeScript type used in generated input/output interfaces.
    pub fn ts_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::List => "unknown[]",
        }
    }

    /// Placeholder literal returned by generated stub bodies.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::String => "\"\"",
            Self::Number => "0",
            Self::Boolean => "false",
            Self::List => "[]",
        }
    }
}

/// One declared tool parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolParameter {
    pub name: String,
    pub kind: PrimitiveKind,
    pub required: bool,
    pub description: String,
}

/// One declared return field. Return fields carry no `required` flag;
/// every field is present in a successful response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolReturnField {
    pub name: String,
    pub kind: PrimitiveKind,
    pub description: String,
}

/// The parsed contract of one tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ToolParameter>,
    pub returns: Vec<ToolReturnField>,
    pub implementation_hint: String,
}

/// Server metadata emitted alongside the tool set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerMetadata {
    pub name: String,
    pub version: String,
    pub transport: String,
}

impl Default for ServerMetadata {
    fn default() -> Self {
        Self {
            name: "generated-mcp-server".to_string(),
            version: "0.1.0".to_string(),
            transport: "stdio".to_string(),
        }
    }
}

/// Root aggregate: server metadata plus the ordered tool set.
///
/// Tool order is preserved from source text and determines generation
/// order, which in turn determines dispatch-table order in emitted code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecificationModel {
    pub server: ServerMetadata,
    pub tools: Vec<ToolDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_keywords_round_trip() {
        assert_eq!(PrimitiveKind::from_keyword("string"), Some(PrimitiveKind::String));
        assert_eq!(PrimitiveKind::from_keyword("number"), Some(PrimitiveKind::Number));
        assert_eq!(PrimitiveKind::from_keyword("boolean"), Some(PrimitiveKind::Boolean));
        assert_eq!(PrimitiveKind::from_keyword("list"), Some(PrimitiveKind::List));
        assert_eq!(PrimitiveKind::from_keyword("object"), None);
        assert_eq!(PrimitiveKind::from_keyword("String"), None);
    }

    #[test]
    fn list_maps_to_array_schema_type() {
        assert_eq!(PrimitiveKind::List.json_schema_type(), "array");
        assert_eq!(PrimitiveKind::List.ts_type(), "unknown[]");
        assert_eq!(PrimitiveKind::List.placeholder(), "[]");
    }

    #[test]
    fn metadata_defaults() {
        let meta = ServerMetadata::default();
        assert_eq!(meta.name, "generated-mcp-server");
        assert_eq!(meta.version, "0.1.0");
        assert_eq!(meta.transport, "stdio");
    }

    #[test]
    fn descriptor_serialises_with_camel_case_hint() {
        let tool = ToolDescriptor {
            name: "echo_tool".to_string(),
            description: "Echo".to_string(),
            parameters: vec![],
            returns: vec![],
            implementation_hint: "echo input as output".to_string(),
        };
        let json = serde_json::to_value(&tool).expect("serialize");
        assert_eq!(json["implementationHint"], "echo input as output");
        assert_eq!(json["name"], "echo_tool");
    }
}
