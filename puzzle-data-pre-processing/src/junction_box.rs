/// Junction box parsing from puzzle input lines
use thiserror::Error;

/// Integer junction box position as written in the puzzle input.
pub type JunctionBox = (i32, i32, i32);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid junction box position on line {line_number}: {line}")]
    InvalidLine { line_number: usize, line: String },
}

/// Parse every non-empty `x,y,z` line of the input.
pub fn parse_junction_boxes(input: &str) -> Result<Vec<JunctionBox>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_junction_box(idx + 1, line))
        .collect()
}

fn parse_junction_box(line_number: usize, line: &str) -> Result<JunctionBox, ParseError> {
    let coords = line
        .trim()
        .splitn(3, ',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>();

    match coords.as_deref() {
        Ok([x, y, z]) => Ok((*x, *y, *z)),
        _ => Err(ParseError::InvalidLine {
            line_number,
            line: line.to_string(),
        }),
    }
}
