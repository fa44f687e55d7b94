//! Specification parser.
//!
//! Two stages: [`lexer`] classifies lines and groups them into tagged
//! blocks, and [`parse`] walks the blocks, extracts fields, and fills
//! defaults for absent optional sub-sections. Lenience is deliberate:
//! list lines that do not match the expected shape and unknown labels are
//! skipped, so the compiler favors producing something runnable over
//! strict rejection. Only the server configuration block is mandatory.

mod lexer;

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::model::{
    PrimitiveKind, ServerMetadata, SpecificationModel, ToolDescriptor, ToolParameter,
    ToolReturnField,
};
use lexer::{Block, Line};

/// Parse a specification source text into its model.
///
/// Fails with [`Error::MalformedSpecification`] when the `SERVER_CONFIG`
/// block is absent and with [`Error::DuplicateToolName`] when two tool
/// blocks share a name. An empty tool set is permitted; the generator
/// still emits a valid empty-dispatch server for it.
pub fn parse(source: &str) -> Result<SpecificationModel> {
    let mut tools: Vec<ToolDescriptor> = Vec::new();
    let mut server: Option<ServerMetadata> = None;

    for block in lexer::blocks(source) {
        match block {
            Block::Tool { name, lines } => tools.push(parse_tool(name, &lines)),
            Block::ServerConfig { lines } => {
                // The first SERVER_CONFIG block wins; later ones are ignored.
                if server.is_none() {
                    server = Some(parse_server(&lines));
                }
            }
        }
    }

    let server = server.ok_or_else(|| {
        Error::MalformedSpecification("missing SERVER_CONFIG block".to_string())
    })?;

    let mut seen = HashSet::new();
    for tool in &tools {
        if !seen.insert(tool.name.as_str()) {
            return Err(Error::DuplicateToolName(tool.name.clone()));
        }
    }

    Ok(SpecificationModel { server, tools })
}

/// Tool sub-sections. Unknown labels map to no section, which parks the
/// parser until the next recognised label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Description,
    Parameters,
    Returns,
    ImplementationPattern,
}

impl Section {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "DESCRIPTION" => Some(Self::Description),
            "PARAMETERS" => Some(Self::Parameters),
            "RETURNS" => Some(Self::Returns),
            "IMPLEMENTATION_PATTERN" => Some(Self::ImplementationPattern),
            _ => None,
        }
    }
}

fn parse_tool(name: &str, lines: &[Line<'_>]) -> ToolDescriptor {
    let mut description: Option<String> = None;
    let mut implementation_hint: Option<String> = None;
    let mut parameters = Vec::new();
    let mut returns = Vec::new();
    let mut section: Option<Section> = None;

    for line in lines {
        match line {
            Line::Label { name: label, rest } => {
                section = Section::from_label(label);
                match section {
                    Some(Section::Description) if description.is_none() => {
                        description = quoted(rest);
                    }
                    Some(Section::ImplementationPattern) if implementation_hint.is_none() => {
                        implementation_hint = quoted(rest);
                    }
                    _ => {}
                }
            }
            Line::ListItem(item) => match section {
                Some(Section::Parameters) => parameters.extend(parse_parameter(item)),
                Some(Section::Returns) => returns.extend(parse_return(item)),
                _ => {}
            },
            // The quoted value may land on a line after its label.
            Line::Text(text) => match section {
                Some(Section::Description) if description.is_none() => {
                    description = quoted(text);
                }
                Some(Section::ImplementationPattern) if implementation_hint.is_none() => {
                    implementation_hint = quoted(text);
                }
                _ => {}
            },
            Line::ToolHeader(_) | Line::ServerHeader => {}
        }
    }

    ToolDescriptor {
        name: name.to_string(),
        description: description.unwrap_or_default(),
        parameters,
        returns,
        implementation_hint: implementation_hint.unwrap_or_default(),
    }
}

fn parse_server(lines: &[Line<'_>]) -> ServerMetadata {
    let defaults = ServerMetadata::default();
    ServerMetadata {
        name: server_field(lines, "NAME").unwrap_or(defaults.name),
        version: server_field(lines, "VERSION").unwrap_or(defaults.version),
        transport: server_field(lines, "TRANSPORT").unwrap_or(defaults.transport),
    }
}

/// First quoted string following the given label within the block.
fn server_field(lines: &[Line<'_>], wanted: &str) -> Option<String> {
    let mut in_field = false;
    for line in lines {
        match line {
            Line::Label { name, rest } => {
                in_field = *name == wanted;
                if in_field {
                    if let Some(value) = quoted(rest) {
                        return Some(value);
                    }
                }
            }
            Line::Text(text) if in_field => {
                if let Some(value) = quoted(text) {
                    return Some(value);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse `<name>: <kind> (required|optional) "<description>"`.
/// Returns `None` for lines that do not match; the caller skips them.
fn parse_parameter(item: &str) -> Option<ToolParameter> {
    let (name, rest) = item.split_once(':')?;
    let name = name.trim();
    if !lexer::is_identifier(name) {
        return None;
    }
    let (kind, rest) = split_kind(rest.trim_start())?;
    let rest = rest.trim_start().strip_prefix('(')?;
    let (flag, rest) = rest.split_once(')')?;
    let required = match flag.trim() {
        "required" => true,
        "optional" => false,
        _ => return None,
    };
    Some(ToolParameter {
        name: name.to_string(),
        kind,
        required,
        description: quoted(rest).unwrap_or_default(),
    })
}

/// Parse `<name>: <kind> "<description>"`.
fn parse_return(item: &str) -> Option<ToolReturnField> {
    let (name, rest) = item.split_once(':')?;
    let name = name.trim();
    if !lexer::is_identifier(name) {
        return None;
    }
    let (kind, rest) = split_kind(rest.trim_start())?;
    Some(ToolReturnField {
        name: name.to_string(),
        kind,
        description: quoted(rest).unwrap_or_default(),
    })
}

/// Split the leading kind keyword off a list-item remainder.
fn split_kind(text: &str) -> Option<(PrimitiveKind, &str)> {
    let end = text
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(text.len());
    let kind = PrimitiveKind::from_keyword(&text[..end])?;
    Some((kind, &text[end..]))
}

/// Extract the first double-quoted string from a line, if any.
fn quoted(text: &str) -> Option<String> {
    let start = text.find('"')?;
    let rest = &text[start + 1..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_SPEC: &str = r#"
Some surrounding prose that the parser must ignore.

TOOL echo_tool:
  DESCRIPTION: "Echo a message back to the caller"
  PARAMETERS:
    - message: string (required) "Message to echo back"
    - repeat: number (optional) "Times to repeat"
  RETURNS:
    - response: string "Echoed response"
  IMPLEMENTATION_PATTERN: "echo input as output"

TOOL list_turtles:
  DESCRIPTION: "List known turtles"
  RETURNS:
    - names: list "Turtle names"
    - count: number "How many"

SERVER_CONFIG:
  NAME: "turtle-server"
  VERSION: "1.2.3"
  TRANSPORT: "stdio"
"#;

    #[test]
    fn parses_full_specification() {
        let model = parse(FULL_SPEC).expect("parse");
        assert_eq!(model.server.name, "turtle-server");
        assert_eq!(model.server.version, "1.2.3");
        assert_eq!(model.tools.len(), 2);

        let echo = &model.tools[0];
        assert_eq!(echo.name, "echo_tool");
        assert_eq!(echo.description, "Echo a message back to the caller");
        assert_eq!(echo.implementation_hint, "echo input as output");
        assert_eq!(echo.parameters.len(), 2);
        assert_eq!(echo.parameters[0].name, "message");
        assert_eq!(echo.parameters[0].kind, PrimitiveKind::String);
        assert!(echo.parameters[0].required);
        assert!(!echo.parameters[1].required);
        assert_eq!(echo.returns.len(), 1);
        assert_eq!(echo.returns[0].name, "response");
    }

    #[test]
    fn tool_order_is_preserved() {
        let model = parse(FULL_SPEC).expect("parse");
        let names: Vec<&str> = model.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["echo_tool", "list_turtles"]);
    }

    #[test]
    fn missing_optional_sections_default_to_empty() {
        let source = "TOOL bare:\nSERVER_CONFIG:\n";
        let model = parse(source).expect("parse");
        let tool = &model.tools[0];
        assert_eq!(tool.description, "");
        assert_eq!(tool.implementation_hint, "");
        assert!(tool.parameters.is_empty());
        assert!(tool.returns.is_empty());
    }

    #[test]
    fn server_fields_default_when_absent() {
        let model = parse("SERVER_CONFIG:\n").expect("parse");
        assert_eq!(model.server.name, "generated-mcp-server");
        assert_eq!(model.server.version, "0.1.0");
        assert_eq!(model.server.transport, "stdio");
        assert!(model.tools.is_empty());
    }

    #[test]
    fn missing_server_config_is_malformed() {
        let err = parse("TOOL t:\n  DESCRIPTION: \"x\"\n").unwrap_err();
        assert!(matches!(err, Error::MalformedSpecification(_)));
    }

    #[test]
    fn duplicate_tool_names_are_rejected() {
        let source = "TOOL t:\nTOOL t:\nSERVER_CONFIG:\n";
        let err = parse(source).unwrap_err();
        match err {
            Error::DuplicateToolName(name) => assert_eq!(name, "t"),
            other => panic!("expected DuplicateToolName, got {other:?}"),
        }
    }

    #[test]
    fn first_server_config_wins() {
        let source = "SERVER_CONFIG:\n  NAME: \"first\"\nSERVER_CONFIG:\n  NAME: \"second\"\n";
        let model = parse(source).expect("parse");
        assert_eq!(model.server.name, "first");
    }

    #[test]
    fn malformed_list_lines_are_skipped() {
        let source = r#"
TOOL t:
  PARAMETERS:
    - ok: string (required) "fine"
    - bad kind: object (required) "unknown kind"
    - noflag: string "missing requiredness"
    just prose in the middle
    - also_ok: boolean (optional) "fine too"
SERVER_CONFIG:
"#;
        let model = parse(source).expect("parse");
        let params = &model.tools[0].parameters;
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "ok");
        assert_eq!(params[1].name, "also_ok");
    }

    #[test]
    fn list_lines_outside_known_section_are_ignored() {
        let source = r#"
TOOL t:
  NOTES:
    - stray: string (required) "not a parameter"
  PARAMETERS:
    - real: string (required) "a parameter"
SERVER_CONFIG:
"#;
        let model = parse(source).expect("parse");
        let params = &model.tools[0].parameters;
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "real");
    }

    #[test]
    fn quoted_value_may_follow_label_on_next_line() {
        let source = "TOOL t:\n  DESCRIPTION:\n    \"on the next line\"\nSERVER_CONFIG:\n";
        let model = parse(source).expect("parse");
        assert_eq!(model.tools[0].description, "on the next line");
    }

    #[test]
    fn description_without_quotes_defaults_to_empty() {
        let source = "TOOL t:\n  DESCRIPTION: unquoted prose\nSERVER_CONFIG:\n";
        let model = parse(source).expect("parse");
        assert_eq!(model.tools[0].description, "");
    }

    #[test]
    fn parameter_description_defaults_when_missing() {
        let source = "TOOL t:\n  PARAMETERS:\n    - p: number (required)\nSERVER_CONFIG:\n";
        let model = parse(source).expect("parse");
        let params = &model.tools[0].parameters;
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].description, "");
    }
}
