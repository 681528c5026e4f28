//! Writes `$OUT_DIR/fixture_tests.rs` for `tests/html_fixtures.rs`.
//!
//! Every `tests/fixtures/<name>.md` becomes a `#[test] fn <name>()` inside a
//! `mod html_fixtures` that calls `fixture_test("<name>")`, so each document
//! shows up as its own test. A fixture without its `<name>.html` expectation
//! fails the build instead of failing at test time.

use std::fmt::Write as _;
use std::path::Path;

const FIXTURE_DIR: &str = "tests/fixtures";

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("fixture_tests.rs");

    let mut names: Vec<String> = std::fs::read_dir(FIXTURE_DIR)
        .unwrap()
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .map(|path| {
            let expected = path.with_extension("html");
            assert!(
                expected.is_file(),
                "fixture {} has no {}",
                path.display(),
                expected.display()
            );
            path.file_stem().unwrap().to_string_lossy().into_owned()
        })
        .collect();
    names.sort();

    let mut code = String::from("mod html_fixtures {\n    use super::fixture_test;\n");
    for name in &names {
        write!(
            code,
            "\n    #[test]\n    fn {name}() {{\n        fixture_test(\"{name}\");\n    }}\n"
        )
        .unwrap();
    }
    code.push_str("}\n");
    std::fs::write(&dest, code).unwrap();

    println!("cargo::rerun-if-changed={FIXTURE_DIR}");
}
