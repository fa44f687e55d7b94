//! Generates `src/index.ts`, the server entry point.
//!
//! The entry point imports every tool module in model order, answers
//! list-tools with each tool's name, description and parameter schema,
//! and dispatches call-tool over an exhaustive switch that throws for
//! unknown names.

use std::fmt::Write;

use crate::model::{SpecificationModel, ToolDescriptor};

use super::GENERATED_HEADER;
use super::naming::{to_camel_case, to_pascal_case, ts_string};

/// Generate the contents of `src/index.ts`.
pub fn entry_point(model: &SpecificationModel) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');

    out.push_str("import { Server } from \"@modelcontextprotocol/sdk/server/index.js\";\n");
    out.push_str(
        "import { StdioServerTransport } from \"@modelcontextprotocol/sdk/server/stdio.js\";\n",
    );
    out.push_str("import {\n");
    out.push_str("  CallToolRequestSchema,\n");
    out.push_str("  ListToolsRequestSchema,\n");
    out.push_str("} from \"@modelcontextprotocol/sdk/types.js\";\n");

    if !model.tools.is_empty() {
        out.push('\n');
        for tool in &model.tools {
            writeln!(
                out,
                "import {{ {func}, type {ty}Input }} from \"./tools/{file}.js\";",
                func = to_camel_case(&tool.name),
                ty = to_pascal_case(&tool.name),
                file = tool.name,
            )
            .unwrap();
        }
    }

    out.push('\n');
    out.push_str("const server = new Server(\n");
    writeln!(
        out,
        "  {{ name: \"{}\", version: \"{}\" }},",
        ts_string(&model.server.name),
        ts_string(&model.server.version),
    )
    .unwrap();
    out.push_str("  { capabilities: { tools: {} } }\n");
    out.push_str(");\n");

    out.push('\n');
    out.push_str("server.setRequestHandler(ListToolsRequestSchema, async () => ({\n");
    if model.tools.is_empty() {
        out.push_str("  tools: [],\n");
    } else {
        out.push_str("  tools: [\n");
        for tool in &model.tools {
            push_tool_listing(&mut out, tool);
        }
        out.push_str("  ],\n");
    }
    out.push_str("}));\n");

    out.push('\n');
    out.push_str("server.setRequestHandler(CallToolRequestSchema, async (request) => {\n");
    out.push_str("  switch (request.params.name) {\n");
    for tool in &model.tools {
        writeln!(out, "    case \"{}\": {{", ts_string(&tool.name)).unwrap();
        writeln!(
            out,
            "      const input = (request.params.arguments ?? {{}}) as {}Input;",
            to_pascal_case(&tool.name),
        )
        .unwrap();
        writeln!(out, "      const result = await {}(input);", to_camel_case(&tool.name)).unwrap();
        out.push_str(
            "      return { content: [{ type: \"text\", text: JSON.stringify(result, null, 2) }] };\n",
        );
        out.push_str("    }\n");
    }
    out.push_str("    default:\n");
    out.push_str("      throw new Error(`Unknown tool: ${request.params.name}`);\n");
    out.push_str("  }\n");
    out.push_str("});\n");

    out.push('\n');
    out.push_str("async function main(): Promise<void> {\n");
    if model.server.transport != "stdio" {
        writeln!(
            out,
            "  // Transport \"{}\" is not supported by the scaffold; falling back to stdio.",
            ts_string(&model.server.transport),
        )
        .unwrap();
    }
    out.push_str("  const transport = new StdioServerTransport();\n");
    out.push_str("  await server.connect(transport);\n");
    out.push_str("}\n");
    out.push('\n');
    out.push_str("main().catch((error) => {\n");
    out.push_str("  console.error(error);\n");
    out.push_str("  process.exit(1);\n");
    out.push_str("});\n");

    out
}

/// One entry of the list-tools response: name, description, and the
/// parameter schema with its required-name array.
fn push_tool_listing(out: &mut String, tool: &ToolDescriptor) {
    out.push_str("    {\n");
    writeln!(out, "      name: \"{}\",", ts_string(&tool.name)).unwrap();
    writeln!(out, "      description: \"{}\",", ts_string(&tool.description)).unwrap();
    out.push_str("      inputSchema: {\n");
    out.push_str("        type: \"object\",\n");
    if tool.parameters.is_empty() {
        out.push_str("        properties: {},\n");
    } else {
        out.push_str("        properties: {\n");
        for param in &tool.parameters {
            writeln!(
                out,
                "          {}: {{ type: \"{}\", description: \"{}\" }},",
                param.name,
                param.kind.json_schema_type(),
                ts_string(&param.description),
            )
            .unwrap();
        }
        out.push_str("        },\n");
    }
    let required: Vec<String> = tool
        .parameters
        .iter()
        .filter(|p| p.required)
        .map(|p| format!("\"{}\"", p.name))
        .collect();
    if !required.is_empty() {
        writeln!(out, "        required: [{}],", required.join(", ")).unwrap();
    }
    out.push_str("      },\n");
    out.push_str("    },\n");
}
