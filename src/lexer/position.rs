use crate::{LinePosition, Position};

/// Maps absolute character offsets to 1-based line/column pairs using a
/// table of newline offsets built once per scan.
pub struct LinePositionCalculator {
    newlines: Vec<usize>,
}

impl LinePositionCalculator {
    pub fn new(expression: &str) -> LinePositionCalculator {
        LinePositionCalculator {
            newlines: expression
                .chars()
                .enumerate()
                .filter(|(_, c)| *c == '\n')
                .map(|(offset, _)| offset)
                .collect(),
        }
    }

    pub fn calculate(&self, position: Position) -> LinePosition {
        let offset = position.0 as usize;

        let line = self.newlines.partition_point(|&newline| newline < offset);
        let line_start = match line {
            0 => 0,
            _ => self.newlines[line - 1] + 1,
        };

        LinePosition {
            line: line + 1,
            column: offset - line_start + 1,
        }
    }
}
