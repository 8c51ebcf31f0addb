//! Layering guardrails for the workspace crates.
//!
//! - `cminus_core` is a pure vocabulary crate: it must not grow a `[dependencies]` table.
//! - `cminus_syntax` is a library: it may emit `tracing` events but must not pull in the CLI or a subscriber.

/// Entries of the `[dependencies]` table of a manifest, by crate name.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/cminus_core/Cargo.toml");
    let deps = dependency_names(manifest);
    assert!(deps.is_empty(), "cminus_core must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_crate_does_not_depend_on_cli_stack() {
    let manifest = include_str!("../crates/cminus_syntax/Cargo.toml");
    let deps = dependency_names(manifest);
    for forbidden in ["clap", "tracing-subscriber", "cminus"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in cminus_syntax [dependencies]"
        );
    }
    assert!(deps.iter().any(|d| d == "cminus_core"));
}

#[test]
fn dependency_names_reads_only_the_dependencies_table() {
    let manifest = "[package]\nname = \"x\"\n\n[dependencies]\na = \"1\" # comment\nb = { path = \"../b\" }\n\n[dev-dependencies]\nc = \"1\"\n";
    assert_eq!(dependency_names(manifest), vec!["a".to_string(), "b".to_string()]);
}
