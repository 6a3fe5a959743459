use std::io::Read;

use crate::error::{Error, Result};
use crate::views::{average_from_lines, format_views};

pub fn run(file: Option<&str>) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if input.lines().all(|line| line.trim().is_empty()) {
        return Err(Error::Validation(
            "Please enter at least one view count.".to_string(),
        ));
    }

    let Some((parsed, average)) = average_from_lines(&input) else {
        return Err(Error::Validation(
            "Could not parse any view counts.".to_string(),
        ));
    };

    println!("Parsed {} view count(s):\n", parsed.len());
    for (i, views) in parsed.iter().enumerate() {
        println!("{}. {}", i + 1, format_views(*views));
    }
    println!("\nAverage views: {} ({})", average, format_views(average));

    Ok(())
}
