use std::path::PathBuf;
use std::process::Command;

fn blot_opt_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_blot-opt"))
}

fn write_input(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("blot_opt_cli_{}_{}.txt", std::process::id(), name));
    std::fs::write(&path, content).expect("write test input");
    path
}

const ALL_ONES: &str = "A, 1, 1, 1, 0\nB, 1, 1, 1, 0\nC, 1, 1, 1, 0\nD, 1, 1, 1, 0\n";

#[test]
fn optimize_all_ones_finds_the_single_zero_grouping() {
    let input = write_input("all_ones", ALL_ONES);
    let output = blot_opt_cmd()
        .args(["optimize", input.to_str().unwrap(), "--format", "json"])
        .output()
        .expect("failed to run blot-opt");

    assert!(
        output.status.success(),
        "optimize should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let ranking: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be a JSON ranking");
    assert_eq!(ranking["k"], 3);
    assert_eq!(ranking["total_candidates"], 1296);
    assert_eq!(ranking["complete"], true);
    let results = ranking["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["sum_sd"], 0.0);
}

#[test]
fn optimize_text_report_lists_ranks() {
    let input = write_input("text", "A, 1, 2\nB, 1, 2\n");
    let output = blot_opt_cmd()
        .args(["optimize", input.to_str().unwrap()])
        .output()
        .expect("failed to run blot-opt");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rank 1"), "got: {stdout}");
    assert!(stdout.contains("sum_sd = 0.0000"), "got: {stdout}");
    assert!(stdout.contains("unique groupings = 2"), "got: {stdout}");
}

#[test]
fn invalid_value_exits_2_with_parse_code() {
    let input = write_input("bad_value", "A, 1, oops\n");
    let output = blot_opt_cmd()
        .args(["optimize", input.to_str().unwrap()])
        .output()
        .expect("failed to run blot-opt");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("BLOTOPT_PARSE_001"), "got: {stderr}");
}

#[test]
fn all_zero_row_exits_2_with_search_code() {
    let input = write_input("zero_row", "A, 1, 2\nB, 0, 0\n");
    let output = blot_opt_cmd()
        .args(["optimize", input.to_str().unwrap()])
        .output()
        .expect("failed to run blot-opt");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("BLOTOPT_SEARCH_002"), "got: {stderr}");
}

#[test]
fn candidate_limit_blocks_unless_forced() {
    let input = write_input(
        "limit",
        "A, 1, 2, 3, 4\nB, 5, 6, 7, 8\nC, 9, 10, 11, 12\nD, 13, 14, 15, 16\n",
    );

    let refused = blot_opt_cmd()
        .args([
            "optimize",
            input.to_str().unwrap(),
            "--max-candidates",
            "1000",
        ])
        .output()
        .expect("failed to run blot-opt");
    assert_eq!(refused.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&refused.stderr).contains("BLOTOPT_SEARCH_003"),
        "got: {}",
        String::from_utf8_lossy(&refused.stderr)
    );

    let forced = blot_opt_cmd()
        .args([
            "optimize",
            input.to_str().unwrap(),
            "--max-candidates",
            "1000",
            "--force",
            "--quiet",
        ])
        .output()
        .expect("failed to run blot-opt");
    assert!(forced.status.success());
    assert!(
        String::from_utf8_lossy(&forced.stderr).contains("Warning:"),
        "forced run should warn on stderr"
    );
}

#[test]
fn info_reports_volume_without_searching() {
    let input = write_input("info", "A, 1, 2, 3\nB, 4, 5, 6, 7\nC, 1, 2, 3, 4, 5\n");
    let output = blot_opt_cmd()
        .args(["info", input.to_str().unwrap()])
        .output()
        .expect("failed to run blot-opt");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("k (arrangement length): 3"), "got: {stdout}");
    assert!(stdout.contains("Raw candidates: 8640"), "got: {stdout}");
}

#[test]
fn xlsx_export_writes_a_workbook() {
    let input = write_input("xlsx_in", "A, 1, 2\nB, 1, 2\n");
    let out_path = std::env::temp_dir().join(format!(
        "blot_opt_cli_{}_export.xlsx",
        std::process::id()
    ));

    let output = blot_opt_cmd()
        .args([
            "optimize",
            input.to_str().unwrap(),
            "--xlsx",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("failed to run blot-opt");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let bytes = std::fs::read(&out_path).expect("workbook should exist");
    // XLSX is a zip container.
    assert_eq!(&bytes[..2], b"PK");
    let _ = std::fs::remove_file(&out_path);
}

#[test]
fn stdin_input_is_accepted() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = blot_opt_cmd()
        .args(["optimize", "-", "--quiet"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn blot-opt");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"A, 2, 4\nB, 1, 2\n")
        .unwrap();
    let output = child.wait_with_output().expect("wait for blot-opt");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Rank 1"));
}
