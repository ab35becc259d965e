#![allow(clippy::module_inception)]

use std::{fs, path::Path};

use crate::errors::errors::SourceError;

pub mod errors;
pub mod lexer;
pub mod macros;

/// A line/column pair. Lines start at 1; the column counts characters
/// consumed on the current line, so it is 0 before the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 0 }
    }

    /// The position of the character about to be consumed.
    pub fn next_column(self) -> Self {
        Position {
            line: self.line,
            column: self.column + 1,
        }
    }
}

/// Reads the whole source file. The handle is closed before this returns,
/// on success and on failure.
pub fn read_source(path: &Path) -> Result<Vec<u8>, SourceError> {
    fs::read(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the text of the line `position` points into, without its line
/// terminator.
pub fn get_line_at_position(source: &[u8], position: Position) -> Option<String> {
    let index = (position.line as usize).checked_sub(1)?;
    let line = source.split(|byte| *byte == b'\n').nth(index)?;
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    Some(line.iter().map(|x| *x as char).collect::<String>())
}

/// Renders the offending line with a caret under the error column.
///
/// ```text
///    |
/// 20 | var a := @;
///    | ---------^
/// ```
pub fn render_snippet(source: &[u8], position: Position) -> Option<String> {
    let line_text = get_line_at_position(source, position)?;

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    let arrows = (position.column as usize).max(1);

    Some(format!(
        "{:>padding$}\n{} | {}\n{:>padding$} {:->arrows$}",
        "|", line_string, line_text, "|", "^"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = b"var x := 1;\r\nprint x\n";

        let line = get_line_at_position(source, Position { line: 1, column: 3 });
        assert_eq!(line.as_deref(), Some("var x := 1;"));

        let line = get_line_at_position(source, Position { line: 2, column: 1 });
        assert_eq!(line.as_deref(), Some("print x"));

        assert_eq!(get_line_at_position(source, Position { line: 0, column: 1 }), None);
        assert_eq!(get_line_at_position(source, Position { line: 9, column: 1 }), None);
    }

    #[test]
    fn test_render_snippet() {
        let snippet = render_snippet(b"var a := @;", Position { line: 1, column: 10 }).unwrap();

        assert_eq!(snippet, "  |\n1 | var a := @;\n  | ---------^");
    }

    #[test]
    fn test_read_source_missing_file() {
        let result = read_source(Path::new("definitely/not/here.src"));

        assert!(matches!(result, Err(SourceError::Open { .. })));
    }
}
