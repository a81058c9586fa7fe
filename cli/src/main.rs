use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use content_schema_catalog::schema_types;
use content_schema_core::{
    DocumentType, Severity, TypeRegistry, validate_document, validate_registry,
};

/// Output format for exported descriptors.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "schema-export")]
#[command(about = "Export and check CMS content schema definitions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write one descriptor file per document type.
    Export(ExportArgs),
    /// Write the whole registry as a single descriptor file.
    Bundle(BundleArgs),
    /// Validate the registry structure.
    Validate,
    /// Check a document JSON file against a named type.
    Check(CheckArgs),
    /// List registered document types.
    List,
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// Output directory for per-type descriptor files.
    #[arg(long)]
    output: PathBuf,
    /// Output format (default: json).
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct BundleArgs {
    /// Output descriptor file path.
    #[arg(long)]
    output: PathBuf,
    /// Output format (default: json).
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Document type to check against (e.g. faq, press).
    #[arg(long = "type")]
    doc_type: String,
    /// Path to the candidate document JSON file.
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let registry = schema_types();

    let result = match cli.command {
        Command::Export(args) => run_export(&registry, args),
        Command::Bundle(args) => run_bundle(&registry, args),
        Command::Validate => run_validate(&registry),
        Command::Check(args) => run_check(&registry, args),
        Command::List => run_list(&registry),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_export(registry: &TypeRegistry, args: ExportArgs) -> Result<(), String> {
    ensure_no_structural_errors(registry)?;

    fs::create_dir_all(&args.output).map_err(|err| {
        format!(
            "Failed to create output directory '{}': {err}",
            args.output.display()
        )
    })?;

    let ext = format_extension(args.format);
    let mut written = 0usize;
    for doc_type in registry.iter() {
        let path = args.output.join(format!("{}.{ext}", doc_type.name));
        let raw = format_document_type(doc_type, args.format)?;
        tracing::debug!(doc_type = %doc_type.name, path = %path.display(), "exporting descriptor");
        fs::write(&path, raw)
            .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
        written += 1;
    }

    println!("Exported {written} descriptor file(s).");
    Ok(())
}

fn run_bundle(registry: &TypeRegistry, args: BundleArgs) -> Result<(), String> {
    ensure_no_structural_errors(registry)?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!(
                    "Failed to create output directory '{}': {err}",
                    parent.display()
                )
            })?;
        }
    }

    let raw = format_registry(registry, args.format)?;
    fs::write(&args.output, raw)
        .map_err(|err| format!("Failed to write '{}': {err}", args.output.display()))?;

    println!(
        "Bundled {} document type(s) into '{}'.",
        registry.len(),
        args.output.display()
    );
    Ok(())
}

fn run_validate(registry: &TypeRegistry) -> Result<(), String> {
    ensure_no_structural_errors(registry)?;
    println!("Validated {} document type(s).", registry.len());
    Ok(())
}

fn run_check(registry: &TypeRegistry, args: CheckArgs) -> Result<(), String> {
    let doc_type = registry
        .get(&args.doc_type)
        .ok_or_else(|| format!("Unknown document type '{}'", args.doc_type))?;

    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    let doc: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|err| format!("Failed to parse '{}': {err}", args.input.display()))?;

    let issues = validate_document(doc_type, &doc);
    tracing::debug!(doc_type = %doc_type.name, issues = issues.len(), "checked document");

    for issue in &issues {
        let severity = match issue.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        println!("{severity}: {}: {}", issue.field, issue.message);
    }

    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        // Warnings are advisory; only hard failures block the save.
        return Err(format!(
            "{errors} error(s) and {warnings} warning(s) in '{}'",
            args.input.display()
        ));
    }

    println!(
        "Document is valid for type '{}' ({warnings} warning(s)).",
        doc_type.name
    );
    Ok(())
}

fn run_list(registry: &TypeRegistry) -> Result<(), String> {
    println!("{:<16} {:<20} {:>6}", "NAME", "TITLE", "FIELDS");
    for doc_type in registry.iter() {
        println!(
            "{:<16} {:<20} {:>6}",
            doc_type.name,
            doc_type.title,
            doc_type.fields.len()
        );
    }
    Ok(())
}

fn ensure_no_structural_errors(registry: &TypeRegistry) -> Result<(), String> {
    let errors = validate_registry(registry);
    if errors.is_empty() {
        return Ok(());
    }
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    Err(format!("Registry is invalid: {}", messages.join("; ")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Returns the file extension for the given output format.
fn format_extension(format: CliOutputFormat) -> &'static str {
    match format {
        CliOutputFormat::Json => "json",
        CliOutputFormat::Yaml => "yaml",
    }
}

fn format_document_type(doc_type: &DocumentType, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(doc_type)
            .map_err(|err| format!("JSON serialization failed: {err}")),
        CliOutputFormat::Yaml => serde_yaml::to_string(doc_type)
            .map_err(|err| format!("YAML serialization failed: {err}")),
    }
}

fn format_registry(registry: &TypeRegistry, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(registry)
            .map_err(|err| format!("JSON serialization failed: {err}")),
        CliOutputFormat::Yaml => serde_yaml::to_string(registry)
            .map_err(|err| format!("YAML serialization failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extension() {
        assert_eq!(format_extension(CliOutputFormat::Json), "json");
        assert_eq!(format_extension(CliOutputFormat::Yaml), "yaml");
    }

    #[test]
    fn test_builtin_registry_has_no_structural_errors() {
        assert!(ensure_no_structural_errors(&schema_types()).is_ok());
    }

    #[test]
    fn test_format_document_type_json_contains_name() {
        let registry = schema_types();
        let faq = registry.get("faq").unwrap();
        let raw = format_document_type(faq, CliOutputFormat::Json).unwrap();
        assert!(raw.contains("\"name\": \"faq\""));
    }
}
