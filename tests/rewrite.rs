use std::fs;

use excise::rewrite_file;
use excise::Excision;
use excise::LineMode;
use excise::RewriteOpts;
use excise::RewriteSummary;
use excise::TargetPath;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

/// `count` lines, each containing its own one-based line number.
fn numbered_lines(count: usize) -> String {
    (1..=count).map(|n| format!("{n}\n")).collect()
}

fn opts(dir: &tempfile::TempDir, name: &str, line_mode: LineMode) -> RewriteOpts {
    RewriteOpts {
        path: TargetPath::new(name, dir.path()).unwrap(),
        excision: Excision::default(),
        line_mode,
    }
}

/// Test that the duplicated function's lines are replaced with the fragment.
#[test]
fn can_rewrite_hundred_lines() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts(&dir, "Cash.tsx", LineMode::KeepEndings);
    fs::write(&opts.path, numbered_lines(100)).unwrap();

    let summary = rewrite_file(&opts).unwrap();

    assert_eq!(
        summary,
        RewriteSummary {
            lines_before: 100,
            lines_removed: 35,
            lines_after: 68,
            clamped: false,
        }
    );
    let expected = format!(
        "{}    // --- CALCULATIONS (from hook) ---\n    const totals = calculateTotals();\n\n{}",
        numbered_lines(56),
        (92..=100).map(|n| format!("{n}\n")).collect::<String>(),
    );
    assert_eq!(fs::read_to_string(&opts.path).unwrap(), expected);
}

/// Test that a file shorter than the excised range gets the fragment appended.
#[test]
#[traced_test]
fn short_file_gets_fragment_appended() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts(&dir, "Cash.tsx", LineMode::KeepEndings);
    fs::write(&opts.path, numbered_lines(10)).unwrap();

    let summary = rewrite_file(&opts).unwrap();

    assert!(summary.clamped);
    assert_eq!(summary.lines_removed, 0);
    assert_eq!(
        fs::read_to_string(&opts.path).unwrap(),
        format!(
            "{}    // --- CALCULATIONS (from hook) ---\n    const totals = calculateTotals();\n\n",
            numbered_lines(10)
        )
    );
    assert!(logs_contain("File ends before the excised range does"));
    assert!(logs_contain("Rewrote file"));
}

/// Test that an empty file ends up containing just the fragment.
#[test]
fn empty_file_gets_fragment() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts(&dir, "Cash.tsx", LineMode::KeepEndings);
    fs::write(&opts.path, "").unwrap();

    let summary = rewrite_file(&opts).unwrap();

    assert_eq!(
        summary,
        RewriteSummary {
            lines_before: 0,
            lines_removed: 0,
            lines_after: 3,
            clamped: true,
        }
    );
    assert_eq!(
        fs::read_to_string(&opts.path).unwrap(),
        "    // --- CALCULATIONS (from hook) ---\n    const totals = calculateTotals();\n\n"
    );
}

/// Test that a short file without a final newline has the fragment glued onto its last line.
#[test]
fn unterminated_short_file() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts(&dir, "Cash.tsx", LineMode::KeepEndings);
    fs::write(&opts.path, "1\n2\n3").unwrap();

    rewrite_file(&opts).unwrap();

    assert_eq!(
        fs::read_to_string(&opts.path).unwrap(),
        "1\n2\n3    // --- CALCULATIONS (from hook) ---\n    const totals = calculateTotals();\n\n"
    );
}

/// Test that rewriting twice removes a second range.
#[test]
fn rewriting_twice_removes_more() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts(&dir, "Cash.tsx", LineMode::KeepEndings);
    fs::write(&opts.path, numbered_lines(150)).unwrap();

    rewrite_file(&opts).unwrap();
    let once = fs::read_to_string(&opts.path).unwrap();
    let summary = rewrite_file(&opts).unwrap();
    let twice = fs::read_to_string(&opts.path).unwrap();

    assert_ne!(once, twice);
    assert_eq!(summary.lines_before, 118);
    assert_eq!(summary.lines_after, 86);
}

/// Test that the newline-joined mode splits and joins on `\n` alone.
#[test]
fn can_rewrite_newline_joined() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts(&dir, "Cash.tsx", LineMode::NewlineJoined);
    fs::write(&opts.path, numbered_lines(100)).unwrap();

    let summary = rewrite_file(&opts).unwrap();

    // The trailing newline is an extra, empty line.
    assert_eq!(summary.lines_before, 101);
    assert_eq!(summary.lines_after, 69);
    let contents = fs::read_to_string(&opts.path).unwrap();
    assert!(contents.starts_with(&numbered_lines(56)));
    assert!(contents.ends_with("const totals = calculateTotals();\n\n92\n93\n94\n95\n96\n97\n98\n99\n100\n"));
}

/// Test that a missing file is an error naming the file.
#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts(&dir, "Missing.tsx", LineMode::KeepEndings);

    let err = rewrite_file(&opts).unwrap_err();

    assert_eq!(err.to_string(), "Failed to read Missing.tsx");
    assert!(!dir.path().join("Missing.tsx").exists());
}

/// Test that a file which isn't UTF-8 is left alone.
#[test]
fn invalid_utf8_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts(&dir, "Cash.tsx", LineMode::KeepEndings);
    let contents = [b'1', b'\n', 0xff, 0xfe, b'\n'];
    fs::write(&opts.path, contents).unwrap();

    let err = rewrite_file(&opts).unwrap_err();

    assert_eq!(err.to_string(), "Failed to read Cash.tsx");
    assert_eq!(fs::read(&opts.path).unwrap(), contents);
}
