use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use rstviz_cli::{Args, run};

const BASE_SUFFIX: &str = ".base.xml";
const RST_SUFFIX: &str = ".rst.xml";

/// Collects `(name, base, rst)` for every `<name>.base.xml` with a matching
/// `<name>.rst.xml` in a directory
fn collect_layer_pairs(dir: &Path) -> Vec<(String, PathBuf, PathBuf)> {
    let mut pairs: Vec<_> = if let Ok(entries) = fs::read_dir(dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter_map(|base| {
                let name = base
                    .file_name()?
                    .to_str()?
                    .strip_suffix(BASE_SUFFIX)?
                    .to_string();
                let rst = dir.join(format!("{name}{RST_SUFFIX}"));
                rst.is_file().then_some((name, base, rst))
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    pairs.sort();
    pairs
}

fn demos_path() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(base: &Path, rst: &Path, output: &Path) -> Args {
    Args {
        base: base.to_string_lossy().to_string(),
        rst: rst.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        image: None,
        highlight: None,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_layer_pairs(&demos_path());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for (name, base, rst) in &valid_demos {
        let output_path = temp_dir.path().join(format!("{name}.dot"));

        match run(&args_for(base, rst, &output_path)) {
            Ok(()) => {
                let dot = fs::read_to_string(&output_path).expect("Output should exist");
                assert!(dot.starts_with("digraph "), "{name}: not a digraph");
                assert!(dot.ends_with("}\n"), "{name}: incomplete output");
            }
            Err(e) => failed_demos.push((name.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (name, err) in &failed_demos {
            eprintln!("  - {name}: {err}");
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_layer_pairs(&demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for (name, base, rst) in &error_demos {
        let output_path = temp_dir.path().join(format!("error_{name}.dot"));

        if run(&args_for(base, rst, &output_path)).is_ok() {
            unexpectedly_succeeded.push(name.clone());
        } else {
            assert!(
                !output_path.exists(),
                "{name}: failed run left an output behind"
            );
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for name in &unexpectedly_succeeded {
            eprintln!("  - {name}");
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_highlight_override() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = demos_path();
    let output_path = temp_dir.path().join("museum.dot");

    let mut args = args_for(
        &demos.join("museum.base.xml"),
        &demos.join("museum.rst.xml"),
        &output_path,
    );
    args.highlight = Some("Elaboration".to_string());

    run(&args).expect("museum demo should convert");

    let dot = fs::read_to_string(&output_path).unwrap();
    assert!(dot.contains("[label=\"ELABORATION\", shape=\"plaintext\", fontcolor=\"#d62728\""));
}

#[test]
fn e2e_missing_input_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.dot");

    let args = args_for(
        &temp_dir.path().join("absent.base.xml"),
        &temp_dir.path().join("absent.rst.xml"),
        &output_path,
    );

    assert!(run(&args).is_err());
    assert!(!output_path.exists());
}
