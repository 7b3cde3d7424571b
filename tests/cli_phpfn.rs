use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn basename_and_string_commands() {
    cargo_bin_cmd!("phpfn")
        .args(["basename", "/var/log/syslog"])
        .assert()
        .success()
        .stdout("syslog\n");

    cargo_bin_cmd!("phpfn")
        .args(["bin2hex", "11111111"])
        .assert()
        .success()
        .stdout("ff\n");

    cargo_bin_cmd!("phpfn")
        .args(["rtrim", "xxabcxx", "x"])
        .assert()
        .success()
        .stdout("xxabc\n");
}

#[test]
fn bin2hex_with_bad_input_fails_fast() {
    cargo_bin_cmd!("phpfn")
        .args(["bin2hex", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a base-2 integer"));
}

#[test]
fn copy_and_predicates_on_a_temp_tree() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let src = tmp.child("src.txt");
    src.write_str("hello world").unwrap();
    let dst = tmp.child("dst.txt");

    cargo_bin_cmd!("phpfn")
        .arg("copy")
        .arg(src.path())
        .arg(dst.path())
        .assert()
        .success()
        .stdout("11\n");
    dst.assert("hello world");

    cargo_bin_cmd!("phpfn")
        .arg("is-file")
        .arg(dst.path())
        .assert()
        .success()
        .stdout("true\n");

    cargo_bin_cmd!("phpfn")
        .arg("is-dir")
        .arg(dst.path())
        .assert()
        .success()
        .stdout("false\n");

    cargo_bin_cmd!("phpfn")
        .arg("copy")
        .arg(tmp.path())
        .arg(tmp.child("x").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a regular file"));
}

#[test]
fn dirname_lists_entries() {
    let tmp = assert_fs::TempDir::new().unwrap();
    tmp.child("b").touch().unwrap();
    tmp.child("a").touch().unwrap();

    cargo_bin_cmd!("phpfn")
        .arg("dirname")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn disk_free_space_json_and_silent_failure() {
    let tmp = assert_fs::TempDir::new().unwrap();
    cargo_bin_cmd!("phpfn")
        .args(["disk-free-space", "--json"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"Free\":\""));

    cargo_bin_cmd!("phpfn")
        .arg("disk-free-space")
        .arg(tmp.child("missing").path())
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn settings_file_is_honoured_and_validated() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let cfg = tmp.child("settings.toml");
    cfg.write_str("copy_buffer_size = 3\n").unwrap();
    let src = tmp.child("s");
    src.write_str("abcdefg").unwrap();

    cargo_bin_cmd!("phpfn")
        .arg("--config")
        .arg(cfg.path())
        .arg("copy")
        .arg(src.path())
        .arg(tmp.child("d").path())
        .assert()
        .success()
        .stdout("7\n");

    cfg.write_str("nonsense = true\n").unwrap();
    cargo_bin_cmd!("phpfn")
        .arg("--config")
        .arg(cfg.path())
        .args(["trim", " x "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid settings"));
}

#[test]
fn verbose_run_logs_settings_source() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let cfg = tmp.child("settings.toml");
    cfg.write_str("log_filter = \"warn\"\n").unwrap();

    cargo_bin_cmd!("phpfn")
        .env_remove("RUST_LOG")
        .arg("-vv")
        .arg("--config")
        .arg(cfg.path())
        .args(["trim", " x "])
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::contains("loaded settings from"))
        .stderr(predicate::str::contains("running Trim"));
}

#[test]
fn quiet_run_keeps_stderr_empty() {
    cargo_bin_cmd!("phpfn")
        .env_remove("RUST_LOG")
        .args(["--config", "/dev/null", "basename", "/a/b"])
        .assert()
        .success()
        .stderr("");
}
