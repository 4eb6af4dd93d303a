use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn tambang(args: &[&str], stdin: &str, dir: &TempDir) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tambang"))
        .args(args)
        .current_dir(dir.path())
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_list_prints_numbered_menu() {
    let dir = TempDir::new().unwrap();
    let output = tambang(&["list"], "", &dir);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Available Car Models:\n1. Perodua Bezza - 1.0 G (M)"));
    assert_eq!(stdout.lines().count(), 8);
}

#[test]
fn test_interactive_session_writes_receipt_in_working_dir() {
    let dir = TempDir::new().unwrap();
    let output = tambang(&[], "1\n10\n15\ny\ny\n", &dir);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total Fare   : RM21.06\n"));
    assert!(stdout.ends_with("Receipt saved as receipt.txt\n"));

    let receipt = fs::read_to_string(dir.path().join("receipt.txt")).unwrap();
    assert!(receipt.contains("Total Fare   : RM21.06\n"));
}

#[test]
fn test_quote_with_custom_receipt_path() {
    let dir = TempDir::new().unwrap();
    let output = tambang(
        &[
            "quote",
            "--model",
            "Perodua Bezza",
            "--variant",
            "1.3 X (A)",
            "--distance",
            "10",
            "--time",
            "15",
            "--traffic-jam",
            "--receipt",
            "trip.txt",
        ],
        "",
        &dir,
    );
    assert!(output.status.success());
    let receipt = fs::read_to_string(dir.path().join("trip.txt")).unwrap();
    assert!(receipt.contains("Variant      : 1.3 X (A)\n"));
    assert!(receipt.contains("Total Fare   : RM16.20\n"));
    assert!(!dir.path().join("receipt.txt").exists());
}

#[test]
fn test_no_receipt_flag_skips_file() {
    let dir = TempDir::new().unwrap();
    let output = tambang(
        &[
            "--no-receipt", "quote", "--model", "Toyota Vios", "--variant", "1.3 XLE CVT",
            "--distance", "2", "--time", "0",
        ],
        "",
        &dir,
    );
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("RM3.00"));
    assert!(!dir.path().join("receipt.txt").exists());
}

#[test]
fn test_negative_distance_fails_without_receipt() {
    let dir = TempDir::new().unwrap();
    let output = tambang(
        &[
            "quote", "--model", "Proton Saga", "--variant", "1.3 Standard M/T", "--distance",
            "-1", "--time", "5",
        ],
        "",
        &dir,
    );
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("Invalid input"));
    assert!(!dir.path().join("receipt.txt").exists());
}

#[test]
fn test_unknown_variant_is_reported() {
    let dir = TempDir::new().unwrap();
    let output = tambang(
        &[
            "quote", "--model", "Proton Saga", "--variant", "2.0 Turbo", "--distance", "1",
            "--time", "1",
        ],
        "",
        &dir,
    );
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("Not found"));
}

#[test]
fn test_catalog_file_replaces_builtin_table() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("fleet.toml"),
        "[[variants]]\nmodel = \"Honda City\"\nvariant = \"1.5 V\"\nengine_cc = 1498\n\
         fuel_efficiency_km_per_litre = 17.8\nrate_per_km = 1.60\n",
    )
    .unwrap();

    let output = tambang(&["--catalog", "fleet.toml", "list"], "", &dir);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Available Car Models:\n1. Honda City - 1.5 V (1498cc, 17.8 km/L, Rate: RM1.60/km)\n"
    );
}

#[test]
fn test_verbose_flag_logs_console_events_without_rust_log() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_tambang"))
        .args([
            "-v", "--no-receipt", "quote", "--model", "Toyota Vios", "--variant", "1.3 XLE CVT",
            "--distance", "2", "--time", "0",
        ])
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("catalog ready"), "stderr: {stderr}");
    assert!(stderr.contains("computed fare"), "stderr: {stderr}");
}

#[test]
fn test_default_level_keeps_console_info_events() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_tambang"))
        .args(["list"])
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("catalog ready"), "stderr: {stderr}");
    assert!(!stderr.contains("loading catalog"), "debug events stay hidden: {stderr}");
}
