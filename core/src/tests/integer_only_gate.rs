use std::fs;
use std::path::Path;

const ALLOW_MARKER: &str = "INTEGER_ONLY_ALLOW";
const INTEGER_ONLY_FILES: &[&str] = &["ops.rs"];

#[test]
fn integer_only_gate_no_float_in_arithmetic() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();
    for name in INTEGER_ONLY_FILES {
        scan_file(&root.join(name), &mut violations);
    }

    if !violations.is_empty() {
        let mut message = String::from("integer-only gate violation:\n");
        for line in violations {
            message.push_str(&line);
            message.push('\n');
        }
        panic!("{message}");
    }
}

#[test]
fn token_matching_respects_identifier_boundaries() {
    assert!(contains_token("let x: f64 = 1.0;", "f64"));
    assert!(contains_token("(f32)", "f32"));
    assert!(!contains_token("let y = x.to_f64();", "f64"));
    assert!(!contains_token("let f64_bits = 0;", "f64"));
}

fn scan_file(path: &Path, violations: &mut Vec<String>) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            violations.push(format!("{}: unreadable: {}", path.display(), err));
            return;
        }
    };
    for (idx, line) in content.lines().enumerate() {
        if line.contains(ALLOW_MARKER) {
            continue;
        }
        if contains_token(line, "f32") || contains_token(line, "f64") {
            violations.push(format!(
                "{}:{}: {}",
                path.display(),
                idx + 1,
                line.trim_end()
            ));
        }
    }
}

fn contains_token(line: &str, token: &str) -> bool {
    let mut offset = 0usize;
    while let Some(pos) = line[offset..].find(token) {
        let idx = offset + pos;
        let before = line[..idx].chars().last();
        let after = line[idx + token.len()..].chars().next();
        let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
        if !before.map_or(false, is_ident) && !after.map_or(false, is_ident) {
            return true;
        }
        offset = idx + token.len();
    }
    false
}
