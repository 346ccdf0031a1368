#![allow(missing_docs)]
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn cipher_cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cipher-cli"));
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn test_shift_encrypt_and_decrypt() {
    cipher_cli()
        .args(["shift", "encrypt", "--message", "cifrul cezar", "--key1", "3"])
        .assert()
        .success()
        .stdout("FLIUXOFHCDU\n");

    cipher_cli()
        .args(["shift", "decrypt", "--message", "FLIUXOFHCDU", "--key1", "3"])
        .assert()
        .success()
        .stdout("CIFRULCEZAR\n");
}

#[test]
fn test_shift_with_keyed_alphabet() {
    cipher_cli()
        .args([
            "shift", "encrypt", "--message", "BRUTEFORCEATTACK", "--key1", "3", "--key2",
            "cryptography",
        ])
        .assert()
        .success()
        .stdout("FTXAJKHTPJDAADPN\n");

    cipher_cli()
        .args([
            "shift", "decrypt", "--message", "FTXAJKHTPJDAADPN", "--key1", "3", "--key2",
            "CRYPTOGRAPHY",
        ])
        .assert()
        .success()
        .stdout("BRUTEFORCEATTACK\n");
}

#[test]
fn test_shift_dash_disables_key2() {
    cipher_cli()
        .args(["shift", "encrypt", "--message", "CIFRULCEZAR", "--key1", "3", "--key2", "-"])
        .assert()
        .success()
        .stdout("FLIUXOFHCDU\n");
}

#[test]
fn test_shift_rejects_invalid_input() {
    cipher_cli()
        .args(["shift", "encrypt", "--message", "HELLO", "--key1", "26"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the range 1-25"));

    cipher_cli()
        .args(["shift", "encrypt", "--message", "HELLO", "--key1", "-2"])
        .assert()
        .failure();

    cipher_cli()
        .args(["shift", "encrypt", "--message", "HELLO!", "--key1", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid message"));

    cipher_cli()
        .args(["shift", "encrypt", "--message", "HELLO", "--key1", "3", "--key2", "short"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid key"));
}

#[test]
fn test_playfair_roundtrip() {
    let output = cipher_cli()
        .args(["playfair", "encrypt", "--message", "Balonul zboară sus", "--key", "criptografie"])
        .output()
        .expect("Failed to run playfair encrypt");
    assert!(output.status.success());
    let ciphertext = String::from_utf8(output.stdout)
        .expect("Ciphertext is not UTF-8")
        .trim()
        .to_string();
    assert_eq!(ciphertext.chars().count() % 2, 0);

    cipher_cli()
        .args(["playfair", "decrypt", "--message", &ciphertext, "--key", "criptografie"])
        .assert()
        .success()
        .stdout("BALONULZBOARĂSUS\n");
}

#[test]
fn test_playfair_known_ciphertext() {
    cipher_cli()
        .args(["playfair", "encrypt", "--message", "atac la zori", "--key", "criptografie"])
        .assert()
        .success()
        .stdout("ĂRGRDÂOÂIP\n");

    cipher_cli()
        .args(["playfair", "decrypt", "--message", "ĂRGRDÂOÂIP", "--key", "criptografie"])
        .assert()
        .success()
        .stdout("ATACLAZORI\n");
}

#[test]
fn test_playfair_rejects_invalid_input() {
    cipher_cli()
        .args(["playfair", "encrypt", "--message", "salut", "--key", "scurt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid key"));

    cipher_cli()
        .args(["playfair", "decrypt", "--message", "JOCURI", "--key", "criptografie"])
        .assert()
        .failure();

    cipher_cli()
        .args(["playfair", "decrypt", "--message", "ABC", "--key", "criptografie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("odd length"));
}

#[test]
fn test_matrix_command() {
    cipher_cli()
        .args(["matrix", "--key", "criptografie"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("C R I P T O\nG A F E Ă Â\n"))
        .stdout(predicate::str::contains("U V W X Y Z"));
}

#[test]
fn test_config_file_overrides_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("cipher.json");
    fs::write(&config_path, r#"{"min_key_length": 15}"#).expect("Failed to write config");

    cipher_cli()
        .arg("--config")
        .arg(&config_path)
        .args(["matrix", "--key", "criptografie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 15"));

    cipher_cli()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"min_key_length\": 15"))
        .stdout(predicate::str::contains("\"terminal_filler\": \"V\""));
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("broken.json");
    fs::write(&config_path, r#"{"digraph": {"rows": 4}}"#).expect("Failed to write config");

    cipher_cli()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}
