use assert_cmd::cargo;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn setup_document(temp_dir: &TempDir) -> std::path::PathBuf {
    let config_path = temp_dir.path().join("releaselogs.toml");
    let log_file = temp_dir.path().join("ReleaseLogs.md");

    cargo::cargo_bin_cmd!("releaselogs")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success();

    let config_content = fs::read_to_string(&config_path).unwrap();
    let updated_config = config_content.replace(
        "log_file = \"./ReleaseLogs.md\"",
        &format!(
            "log_file = \"{}\"",
            log_file.display().to_string().replace('\\', "/")
        ),
    );
    fs::write(&config_path, updated_config).unwrap();

    fs::write(
        &log_file,
        "# Releaselogs\n\n## v1.0.0\n\n### Added\n\n- First release of the test scripts.\n\n### Fixed\n\n### Important Notes\n\n- **ATRTR** run twice for stable results.\n\n### Included Files\n\n- **STN_Scripts/** Individual command scripts.\n",
    )
    .unwrap();

    config_path
}

#[test]
#[serial]
fn test_show_latest_with_no_color() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = setup_document(&temp_dir);

    std::env::set_var("NO_COLOR", "1");

    let mut cmd = cargo::cargo_bin_cmd!("releaselogs");
    cmd.arg("show")
        .arg("latest")
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .assert()
        .success();

    std::env::remove_var("NO_COLOR");
}

#[test]
#[serial]
fn test_show_latest_with_clicolor_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = setup_document(&temp_dir);

    std::env::set_var("CLICOLOR_FORCE", "1");

    let mut cmd = cargo::cargo_bin_cmd!("releaselogs");
    cmd.arg("show")
        .arg("latest")
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .assert()
        .success();

    std::env::remove_var("CLICOLOR_FORCE");
}
