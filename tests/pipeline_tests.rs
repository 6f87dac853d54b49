use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use sample_tagger::{LocalFileSystem, Provenance, Tagger, TaggerError, FilenameDecoder};
use serde_json::{json, Value};
use tempfile::TempDir;

fn touch(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn read_metadata(bundle: &Path) -> Value {
    serde_json::from_slice(&fs::read(bundle.join("metadata.json")).unwrap()).unwrap()
}

fn bundle_names(output: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(output)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_single_and_combo_bundles() {
    let temp_dir = TempDir::new().unwrap();
    let raw = temp_dir.path().join("raw");
    let output = temp_dir.path().join("out");
    touch(&raw.join("voiceA/Pitch/Low Pitch.wav"), b"low");
    touch(&raw.join("voiceA/Combos/Medium-Neutral-Thick.wav"), b"combo");

    let summary = Tagger::new(LocalFileSystem::new()).run(&raw, &output).unwrap();
    assert_eq!(summary.bundles.len(), 2);

    assert_eq!(
        bundle_names(&output),
        vec!["voiceA_Low Pitch", "voiceA_Medium-Neutral-Thick"]
    );

    let single = output.join("voiceA_Low Pitch");
    assert_eq!(fs::read(single.join("sample.wav")).unwrap(), b"low");
    assert_eq!(
        read_metadata(&single),
        json!({
            "metadata_version": "0.0.1",
            "whose_voice_is_it": "Chloe",
            "who_evaluated_the_dimensions": "Chloe",
            "content_descriptor": "voiceA",
            "Pitch": 30,
            "Resonance": "Unlabeled",
            "Weight": "Unlabeled",
        })
    );

    let combo = output.join("voiceA_Medium-Neutral-Thick");
    assert_eq!(fs::read(combo.join("sample.wav")).unwrap(), b"combo");
    assert_eq!(
        read_metadata(&combo),
        json!({
            "metadata_version": "0.0.1",
            "whose_voice_is_it": "Chloe",
            "who_evaluated_the_dimensions": "Chloe",
            "content_descriptor": "voiceA",
            "Pitch": 50,
            "Resonance": 50,
            "Weight": 50,
        })
    );
}

#[test]
fn test_rerun_removes_stale_bundles() {
    let temp_dir = TempDir::new().unwrap();
    let raw = temp_dir.path().join("raw");
    let output = temp_dir.path().join("out");
    touch(&raw.join("voiceA/Pitch/High Pitch.wav"), b"x");
    touch(&output.join("stale_bundle/sample.wav"), b"old");

    let tagger = Tagger::new(LocalFileSystem::new());
    tagger.run(&raw, &output).unwrap();
    tagger.run(&raw, &output).unwrap();

    // A second run must not collide with the first run's bundle
    assert_eq!(bundle_names(&output), vec!["voiceA_High Pitch"]);
}

#[test]
fn test_duplicate_names_across_nested_dirs_get_suffixes() {
    let temp_dir = TempDir::new().unwrap();
    let raw = temp_dir.path().join("raw");
    let output = temp_dir.path().join("out");
    touch(&raw.join("voiceA/Resonance/session1/Bright Resonance.wav"), b"first");
    touch(&raw.join("voiceA/Resonance/session2/Bright Resonance.wav"), b"second");

    Tagger::new(LocalFileSystem::new()).run(&raw, &output).unwrap();

    assert_eq!(
        bundle_names(&output),
        vec!["voiceA_Bright Resonance", "voiceA_Bright Resonance_1"]
    );
    // Entries are visited in name order, so session1 claims the unsuffixed name
    assert_eq!(fs::read(output.join("voiceA_Bright Resonance/sample.wav")).unwrap(), b"first");
    assert_eq!(fs::read(output.join("voiceA_Bright Resonance_1/sample.wav")).unwrap(), b"second");
}

#[test]
fn test_unknown_term_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    let raw = temp_dir.path().join("raw");
    touch(&raw.join("voiceA/Pitch/Loud Pitch.wav"), b"x");

    let result = Tagger::new(LocalFileSystem::new()).run(&raw, &temp_dir.path().join("out"));
    match result {
        Err(TaggerError::UnrecognizedTerm { dimension, term }) => {
            assert_eq!(dimension, "Pitch");
            assert_eq!(term, "Loud");
        }
        other => panic!("Expected UnrecognizedTerm, got {:?}", other),
    }
}

#[test]
fn test_malformed_combo_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    let raw = temp_dir.path().join("raw");
    touch(&raw.join("voiceB/Combos/High-Dark.wav"), b"x");

    let result = Tagger::new(LocalFileSystem::new()).run(&raw, &temp_dir.path().join("out"));
    match result {
        Err(TaggerError::UnrecognizedFilename { filename, .. }) => assert_eq!(filename, "High-Dark.wav"),
        other => panic!("Expected UnrecognizedFilename, got {:?}", other),
    }
}

#[test]
fn test_custom_provenance_is_recorded() {
    let temp_dir = TempDir::new().unwrap();
    let raw = temp_dir.path().join("raw");
    let output = temp_dir.path().join("out");
    touch(&raw.join("voiceC/Weight/Thin Weight.wav"), b"x");

    let provenance = Provenance {
        whose_voice_is_it: "Sam".to_string(),
        who_evaluated_the_dimensions: "Alex".to_string(),
        ..Provenance::default()
    };
    Tagger::with_parts(LocalFileSystem::new(), FilenameDecoder::default(), provenance)
        .run(&raw, &output)
        .unwrap();

    let metadata = read_metadata(&output.join("voiceC_Thin Weight"));
    assert_eq!(metadata["whose_voice_is_it"], json!("Sam"));
    assert_eq!(metadata["who_evaluated_the_dimensions"], json!("Alex"));
    assert_eq!(metadata["metadata_version"], json!("0.0.1"));
    assert_eq!(metadata["Weight"], json!(30));
}
