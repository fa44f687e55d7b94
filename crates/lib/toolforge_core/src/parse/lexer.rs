//! Line-level tokenizer for the block grammar.
//!
//! Each source line is classified into exactly one [`Line`] variant, and
//! header lines group the stream into tagged [`Block`]s. Lines before the
//! first header (surrounding prose) are dropped.

/// One classified source line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    /// `TOOL <name>:` — opens a tool block. The name is a valid identifier
    /// by construction; anything else fails to lex as a header.
    ToolHeader(&'a str),
    /// `SERVER_CONFIG:` — opens the server configuration block.
    ServerHeader,
    /// `<LABEL>: <rest>` — an uppercase section or field label.
    Label { name: &'a str, rest: &'a str },
    /// `- <rest>` — a list item inside a section.
    ListItem(&'a str),
    /// Anything else, blanks included. The parser skips these unless a
    /// section is waiting for a quoted value.
    Text(&'a str),
}

/// A top-level specification block.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    Tool { name: &'a str, lines: Vec<Line<'a>> },
    ServerConfig { lines: Vec<Line<'a>> },
}

/// Lex the source into its block sequence, preserving source order.
pub fn blocks(source: &str) -> Vec<Block<'_>> {
    let mut blocks: Vec<Block<'_>> = Vec::new();

    for raw in source.lines() {
        match classify(raw) {
            Line::ToolHeader(name) => blocks.push(Block::Tool {
                name,
                lines: Vec::new(),
            }),
            Line::ServerHeader => blocks.push(Block::ServerConfig { lines: Vec::new() }),
            line => match blocks.last_mut() {
                Some(Block::Tool { lines, .. }) | Some(Block::ServerConfig { lines }) => {
                    lines.push(line);
                }
                None => {}
            },
        }
    }

    blocks
}

/// Classify a single raw line.
fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();

    if let Some(rest) = line.strip_prefix("TOOL") {
        if rest.starts_with(char::is_whitespace) {
            if let Some(name) = rest.trim_start().strip_suffix(':') {
                let name = name.trim_end();
                if is_identifier(name) {
                    return Line::ToolHeader(name);
                }
            }
        }
    }

    if line.starts_with("SERVER_CONFIG:") {
        return Line::ServerHeader;
    }

    if let Some((label, rest)) = line.split_once(':') {
        if is_label(label) {
            return Line::Label {
                name: label,
                rest: rest.trim(),
            };
        }
    }

    if let Some(rest) = line.strip_prefix("- ") {
        return Line::ListItem(rest.trim());
    }

    Line::Text(line)
}

/// `[A-Za-z_][A-Za-z0-9_]*` — valid tool and field names.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `[A-Z][A-Z0-9_]*` — section and field labels.
fn is_label(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
