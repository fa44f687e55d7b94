//! Generates one `src/tools/<name>.ts` stub per tool.
//!
//! A stub declares the input and output shapes and returns a mechanical
//! placeholder for every return field, so the generated server runs
//! before a human fills in real logic. The implementation hint is carried
//! as a comment only; it is never interpreted.

use std::fmt::Write;

use crate::model::ToolDescriptor;

use super::GENERATED_HEADER;
use super::naming::{doc_text, to_camel_case, to_pascal_case};

/// Generate the contents of one tool stub module.
pub fn tool_stub(tool: &ToolDescriptor) -> String {
    let ty = to_pascal_case(&tool.name);
    let func = to_camel_case(&tool.name);

    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');

    if tool.parameters.is_empty() {
        writeln!(out, "export interface {ty}Input {{}}").unwrap();
    } else {
        writeln!(out, "export interface {ty}Input {{").unwrap();
        for param in &tool.parameters {
            if !param.description.is_empty() {
                writeln!(out, "  /** {} */", doc_text(&param.description)).unwrap();
            }
            writeln!(
                out,
                "  {}{}: {};",
                param.name,
                if param.required { "" } else { "?" },
                param.kind.ts_type(),
            )
            .unwrap();
        }
        writeln!(out, "}}").unwrap();
    }
    out.push('\n');

    if tool.returns.is_empty() {
        writeln!(out, "export interface {ty}Output {{}}").unwrap();
    } else {
        writeln!(out, "export interface {ty}Output {{").unwrap();
        for field in &tool.returns {
            if !field.description.is_empty() {
                writeln!(out, "  /** {} */", doc_text(&field.description)).unwrap();
            }
            writeln!(out, "  {}: {};", field.name, field.kind.ts_type()).unwrap();
        }
        writeln!(out, "}}").unwrap();
    }
    out.push('\n');

    if !tool.description.is_empty() || !tool.implementation_hint.is_empty() {
        out.push_str("/**\n");
        if !tool.description.is_empty() {
            writeln!(out, " * {}", doc_text(&tool.description)).unwrap();
        }
        if !tool.implementation_hint.is_empty() {
            if !tool.description.is_empty() {
                out.push_str(" *\n");
            }
            writeln!(out, " * Implementation pattern: {}", doc_text(&tool.implementation_hint))
                .unwrap();
        }
        out.push_str(" */\n");
    }
    writeln!(
        out,
        "export async function {func}(input: {ty}Input): Promise<{ty}Output> {{"
    )
    .unwrap();
    writeln!(out, "  // TODO: implement {}", tool.name).unwrap();
    if tool.returns.is_empty() {
        out.push_str("  return {};\n");
    } else {
        out.push_str("  return {\n");
        for field in &tool.returns {
            writeln!(out, "    {}: {},", field.name, field.kind.placeholder()).unwrap();
        }
        out.push_str("  };\n");
    }
    out.push_str("}\n");

    out
}
