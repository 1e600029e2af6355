use more_fixed_core::{determinism_vector_v1, DETERMINISM_SCHEMA_V1, DETERMINISM_VECTOR_V1_EXPECTED};

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn vector_hash(values: &[i32]) -> String {
    let mut hasher = blake3::Hasher::new();
    for value in values {
        hasher.update(&value.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

/// `key=value` lines for the determinism vector of this build.
pub fn vector_lines() -> (bool, Vec<String>) {
    let actual = determinism_vector_v1();
    let pass = actual == DETERMINISM_VECTOR_V1_EXPECTED;
    let lines = vec![
        format!("schema={}", DETERMINISM_SCHEMA_V1),
        format!("status={}", if pass { "pass" } else { "fail" }),
        format!("blake3={}", vector_hash(&actual)),
        format!("raw_i32={}", join(&actual)),
        format!("expected_raw_i32={}", join(&DETERMINISM_VECTOR_V1_EXPECTED)),
    ];
    (pass, lines)
}

pub fn run_vector() -> Result<bool, String> {
    let (pass, lines) = vector_lines();
    for line in lines {
        println!("{}", line);
    }
    if !pass {
        tracing::warn!("determinism vector mismatch");
    }
    Ok(pass)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_passes_on_this_build() {
        let (pass, lines) = vector_lines();
        assert!(pass);
        assert_eq!(lines[0], format!("schema={}", DETERMINISM_SCHEMA_V1));
        assert_eq!(lines[1], "status=pass");
        assert_eq!(lines[3]["raw_i32=".len()..], lines[4]["expected_raw_i32=".len()..]);
    }

    #[test]
    fn hash_depends_on_order() {
        assert_eq!(vector_hash(&[1, 2]), vector_hash(&[1, 2]));
        assert_ne!(vector_hash(&[1, 2]), vector_hash(&[2, 1]));
        assert_eq!(vector_hash(&[]).len(), 64);
    }
}
