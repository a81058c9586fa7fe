use std::fs;
use std::path::PathBuf;

/// Helper to create a temp directory that is cleaned up on drop.
struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(name: &str) -> Self {
        let path =
            std::env::temp_dir().join(format!("schema_cli_test_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("failed to create temp dir");
        Self { path }
    }

    fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[test]
fn export_writes_one_file_per_document_type() {
    let dir = TempDir::new("export_per_type");
    let bin = env!("CARGO_BIN_EXE_schema-export");

    let status = std::process::Command::new(bin)
        .args(["export", "--output", dir.path.to_str().unwrap()])
        .status()
        .expect("failed to run schema-export");
    assert!(status.success());

    for name in ["faq", "press", "blogPost", "banner"] {
        let path = dir.join(&format!("{name}.json"));
        assert!(path.exists(), "{name}.json should be written");
        let raw = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["name"], name);
    }
}

#[test]
fn bundle_writes_a_single_registry_file() {
    let dir = TempDir::new("bundle_registry");
    let output = dir.join("registry.json");
    let bin = env!("CARGO_BIN_EXE_schema-export");

    let status = std::process::Command::new(bin)
        .args(["bundle", "--output", output.to_str().unwrap()])
        .status()
        .expect("failed to run schema-export");
    assert!(status.success());

    let raw = fs::read_to_string(&output).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["types"].as_array().unwrap().len(), 8);
    assert_eq!(json["types"][0]["name"], "blogPost");
}

#[test]
fn validate_reports_clean_registry() {
    let bin = env!("CARGO_BIN_EXE_schema-export");
    let out = std::process::Command::new(bin)
        .arg("validate")
        .output()
        .expect("failed to run schema-export");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Validated 8 document type(s)."));
}

#[test]
fn check_fails_on_missing_required_fields() {
    let dir = TempDir::new("check_missing");
    let doc_path = dir.join("doc.json");
    fs::write(&doc_path, r#"{"answer": []}"#).unwrap();

    let bin = env!("CARGO_BIN_EXE_schema-export");
    let out = std::process::Command::new(bin)
        .args(["check", "--type", "faq", doc_path.to_str().unwrap()])
        .output()
        .expect("failed to run schema-export");

    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("error: question: Question is required"));
    assert!(stdout.contains("error: answer: Answer is required"));
}

#[test]
fn check_passes_with_warnings_only() {
    let dir = TempDir::new("check_warnings");
    let doc_path = dir.join("doc.json");
    let doc = serde_json::json!({
        "title": "Launch",
        "slug": "launch",
        "metaDescription": "too short to be a good meta description",
    });
    fs::write(&doc_path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();

    let bin = env!("CARGO_BIN_EXE_schema-export");
    let out = std::process::Command::new(bin)
        .args(["check", "--type", "press", doc_path.to_str().unwrap()])
        .output()
        .expect("failed to run schema-export");

    // Soft warnings never block the save.
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("warning: metaDescription"));
    assert!(stdout.contains("Document is valid for type 'press' (1 warning(s))."));
}

#[test]
fn check_rejects_unknown_document_type() {
    let dir = TempDir::new("check_unknown_type");
    let doc_path = dir.join("doc.json");
    fs::write(&doc_path, "{}").unwrap();

    let bin = env!("CARGO_BIN_EXE_schema-export");
    let out = std::process::Command::new(bin)
        .args(["check", "--type", "podcast", doc_path.to_str().unwrap()])
        .output()
        .expect("failed to run schema-export");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unknown document type 'podcast'"));
}

#[test]
fn list_prints_every_type() {
    let bin = env!("CARGO_BIN_EXE_schema-export");
    let out = std::process::Command::new(bin)
        .arg("list")
        .output()
        .expect("failed to run schema-export");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    for name in [
        "blogPost",
        "blogCategory",
        "teamMember",
        "testimonial",
        "faq",
        "youTube",
        "banner",
        "press",
    ] {
        assert!(stdout.contains(name), "list output should mention {name}");
    }
}
