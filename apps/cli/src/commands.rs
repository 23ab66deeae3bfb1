use entitext::EntityTable;
use std::io::Read;
use std::path::Path;

pub fn escape_text(
    parts: &[String],
    ascii: bool,
    registry: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = gather_input(parts)?;
    let output = match load_table(registry)? {
        Some(table) => table.escape(&input, ascii),
        None => entitext::escape(&input, ascii),
    };
    println!("{output}");
    Ok(())
}

pub fn unescape_text(
    parts: &[String],
    registry: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = gather_input(parts)?;
    let output = match load_table(registry)? {
        Some(table) => table.unescape(&input),
        None => entitext::unescape(&input),
    };
    println!("{output}");
    Ok(())
}

fn load_table(registry: Option<&Path>) -> Result<Option<EntityTable>, Box<dyn std::error::Error>> {
    match registry {
        Some(path) => Ok(Some(EntityTable::from_path(path)?)),
        None => Ok(None),
    }
}

fn gather_input(parts: &[String]) -> Result<String, Box<dyn std::error::Error>> {
    if parts.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        let trimmed = buffer.trim_end_matches(['\n', '\r']).len();
        buffer.truncate(trimmed);
        Ok(buffer)
    } else {
        Ok(parts.join(" "))
    }
}
