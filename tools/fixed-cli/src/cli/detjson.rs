use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn write_text(path: &Path, content: &str) -> Result<(), String> {
    fs::write(path, content).map_err(|e| format!("E_CLI_IO {}: {}", path.display(), e))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("E_CLI_JSON {}", e))?;
    write_text(path, &format!("{json}\n"))
}
