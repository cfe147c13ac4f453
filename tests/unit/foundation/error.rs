use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StrokeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StrokeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StrokeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: StrokeError = serde_json::from_str::<Vec<f32>>("[1, oops]")
        .unwrap_err()
        .into();
    assert!(matches!(err, StrokeError::Serde(_)));
}
