/// Puzzle input to stage dataset converter entry point
mod converter;
mod junction_box;
mod neighbours;
mod puzzle_data;

use converter::PuzzleDataConverter;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <input.txt> [output.json]", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = args.get(2).map(String::as_str);

    let converter = PuzzleDataConverter::new(input_path, output_path);
    converter.convert()?;

    Ok(())
}
