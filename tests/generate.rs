use std::{env, fs, path::PathBuf, process};

use slidetab::{
    generator::{self, Config},
    parse, BySlider, Format, GenerateError, Tables,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("slidetab-{}-{name}", process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_generate_writes_artifact() {
    let dir = scratch_dir("rust");
    let config = Config::default().with_output(dir.join("nested/slider_tables.rs"));

    let report = generator::generate(&config).expect("generate");
    assert_eq!(report.output, config.output);
    assert_eq!(report.max_relevant_bits, BySlider { rook: 12, bishop: 9 });
    assert_eq!(
        report.entries,
        BySlider {
            rook: 102_400,
            bishop: 5_248
        }
    );

    let text = fs::read_to_string(&config.output).expect("read artifact");
    assert_eq!(text.len(), report.bytes);
    assert_eq!(
        parse::read_tables(&text).expect("parse"),
        Tables::build().expect("tables")
    );

    // No temporary file is left behind.
    let leftovers: Vec<_> = fs::read_dir(dir.join("nested"))
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(leftovers, ["slider_tables.rs"]);

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn test_generate_cpp_overwrites() {
    let dir = scratch_dir("cpp");
    let config = Config::default()
        .with_output(dir.join("tables.rs"))
        .with_format(Format::Cpp);
    assert_eq!(config.output, dir.join("tables.hpp"));

    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(&config.output, "stale").expect("write stale");

    generator::generate(&config).expect("generate");
    let text = fs::read_to_string(&config.output).expect("read artifact");
    assert!(text.contains("#pragma once"));
    assert!(text.contains("inline constexpr uint64_t ROOK_ATTACKS[64][4096] = {"));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn test_generate_reports_io_error() {
    let dir = scratch_dir("io");
    fs::create_dir_all(&dir).expect("mkdir");
    // A directory cannot be replaced by the artifact.
    let blocked = dir.join("occupied");
    fs::create_dir_all(blocked.join("child")).expect("mkdir");

    let config = Config::default().with_output(&blocked);
    match generator::generate(&config) {
        Err(GenerateError::Io { path, .. }) => assert_eq!(path, blocked),
        other => panic!("expected i/o error, got {other:?}"),
    }
    assert!(!dir.join("occupied.tmp").exists());

    fs::remove_dir_all(&dir).expect("cleanup");
}
