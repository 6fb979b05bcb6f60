//! Validate command implementation.
//!
//! Loads each manifest and prints every diagnostic without exporting
//! anything. Exits non-zero when any manifest has errors.

use std::path::PathBuf;

use clap::Args;

use crate::error::{P2dError, Result};
use crate::manifest::AtlasManifest;
use crate::output::{display_path, plural, Printer};
use crate::validation::{validate_manifest, Severity};

/// Validate atlas manifests without exporting
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Manifest files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let printer = Printer::new();
    let mut total_errors = 0;

    for file in &args.files {
        let manifest = AtlasManifest::load(file)?;
        let result = validate_manifest(&manifest);

        if result.is_ok() {
            printer.status("Validated", &display_path(file));
            continue;
        }

        for diagnostic in result.iter() {
            let is_error = diagnostic.severity == Severity::Error;
            let label = printer.severity(&diagnostic.severity.to_string(), is_error);
            eprintln!(
                "{}: {} {}",
                label,
                diagnostic.message,
                printer.dim(&format!("[{}]", diagnostic.code))
            );
            if let Some(help) = &diagnostic.help {
                eprintln!("  {} {}", printer.dim("help:"), help);
            }
        }

        printer.warning(
            "Checked",
            &format!("{} ({})", display_path(file), result.summary()),
        );
        total_errors += result.error_count();
    }

    if total_errors > 0 {
        return Err(P2dError::Validation {
            message: format!(
                "{} across {}",
                plural(total_errors, "error", "errors"),
                plural(args.files.len(), "manifest", "manifests"),
            ),
            help: None,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_clean_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atlas.yaml");
        fs::write(
            &path,
            r#"
name: atlas
images:
  - width: 16
    height: 16
sprites:
  - name: a
    rect: { x: 0, y: 0, width: 8, height: 8 }
"#,
        )
        .unwrap();

        run(ValidateArgs { files: vec![path] }).unwrap();
    }

    #[test]
    fn test_validate_fails_on_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atlas.yaml");
        fs::write(
            &path,
            r#"
name: atlas
images:
  - width: 0
    height: 16
"#,
        )
        .unwrap();

        let err = run(ValidateArgs { files: vec![path] }).unwrap_err();
        assert!(matches!(err, P2dError::Validation { .. }));
    }

    #[test]
    fn test_validate_warnings_only_passes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atlas.yaml");
        // No pages at all is only a warning
        fs::write(&path, "name: atlas").unwrap();

        run(ValidateArgs { files: vec![path] }).unwrap();
    }

    #[test]
    fn test_validate_missing_file() {
        let err = run(ValidateArgs {
            files: vec![PathBuf::from("/nonexistent/atlas.yaml")],
        })
        .unwrap_err();
        assert!(matches!(err, P2dError::Io { .. }));
    }
}
