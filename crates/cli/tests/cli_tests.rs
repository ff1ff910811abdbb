//! End-to-end tests of the `taco` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn registry(address: &str) -> Value {
    json!({
        "1": {
            "Foo": {
                "address": address,
                "abi": [],
                "tx_hash": "0x01",
                "block_number": 17,
                "deployer": "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"
            }
        }
    })
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_vec_pretty(value).expect("encode")).expect("write");
}

fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&fs::read(path).expect("read")).expect("json")
}

fn taco(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taco").expect("binary");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn merge_prompts_and_keeps_chosen_entry() {
    let dir = TempDir::new().expect("temp dir");
    write_json(&dir.path().join("a.json"), &registry("0xAA"));
    write_json(&dir.path().join("b.json"), &registry("0xBB"));

    taco(&dir)
        .args(["merge", "a.json", "b.json", "--output", "merged.json"])
        .write_stdin("maybe\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Conflict detected for Foo"))
        .stdout(predicate::str::contains("[1]: Foo at 0xAA for a.json"))
        .stdout(predicate::str::contains("Created registry"));

    let merged = read_json(&dir.path().join("merged.json"));
    assert_eq!(merged["1"]["Foo"]["address"], "0xAA");
}

#[test]
fn merge_abort_exits_nonzero_without_output() {
    let dir = TempDir::new().expect("temp dir");
    write_json(&dir.path().join("a.json"), &registry("0xAA"));
    write_json(&dir.path().join("b.json"), &registry("0xBB"));

    taco(&dir)
        .args(["merge", "a.json", "b.json", "-o", "merged.json"])
        .write_stdin("A\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Merge Aborted!"))
        .stderr(predicate::str::contains("merge aborted by operator"));

    assert!(!dir.path().join("merged.json").exists());
    assert!(!dir.path().join("merged.unmerged.json").exists());
}

#[test]
fn merge_drops_deprecated_contracts() {
    let dir = TempDir::new().expect("temp dir");
    write_json(&dir.path().join("a.json"), &registry("0xAA"));
    write_json(&dir.path().join("b.json"), &registry("0xBB"));

    taco(&dir)
        .args(["merge", "a.json", "b.json", "-o", "merged.json", "--deprecated", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries provided"));

    assert!(!dir.path().join("merged.json").exists());
}

#[test]
fn import_creates_registry_with_renames() {
    let dir = TempDir::new().expect("temp dir");
    write_json(
        &dir.path().join("deployments.json"),
        &json!([{
            "contract_type": "LynxRitualToken",
            "address": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "abi": [{"type": "function", "name": "totalSupply"}],
            "receipt": {
                "chain_id": 80002,
                "tx_hash": "0xfeed",
                "block_number": 123,
                "sender": "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
            }
        }]),
    );

    taco(&dir)
        .args([
            "import",
            "--deployments",
            "deployments.json",
            "--output",
            "artifacts/lynx.json",
            "--rename",
            "LynxRitualToken=RitualToken",
        ])
        .assert()
        .success();

    let registry = read_json(&dir.path().join("artifacts").join("lynx.json"));
    let token = &registry["80002"]["RitualToken"];
    assert_eq!(token["address"], "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    assert_eq!(token["deployer"], "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
    assert_eq!(token["block_number"], 123);
}

#[test]
fn list_filters_by_chain() {
    let dir = TempDir::new().expect("temp dir");
    let mut value = registry("0xAA");
    value["137"] = json!({
        "Coordinator": {
            "address": "0xCC",
            "abi": [],
            "tx_hash": "0x02",
            "block_number": 99,
            "deployer": "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"
        }
    });
    write_json(&dir.path().join("mainnet.json"), &value);

    taco(&dir)
        .args(["list", "mainnet.json", "--chain-id", "137"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coordinator"))
        .stdout(predicate::str::contains("0xCC"))
        .stdout(predicate::str::contains("Foo").not());
}

#[test]
fn list_rejects_malformed_registry() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("broken.json"), r#"{"1": []}"#).expect("write");

    taco(&dir)
        .args(["list", "broken.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed registry"));
}

#[test]
fn lookup_reads_domain_registry() {
    let dir = TempDir::new().expect("temp dir");
    fs::create_dir_all(dir.path().join("artifacts")).expect("mkdir");
    write_json(&dir.path().join("artifacts").join("tapir.json"), &registry("0xAA"));

    taco(&dir)
        .args(["--artifacts-dir", "artifacts", "lookup", "--domain", "tapir", "--name", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0xAA"))
        .stdout(predicate::str::contains("17"));

    taco(&dir)
        .args(["--artifacts-dir", "artifacts", "lookup", "--domain", "devnet", "--name", "Foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported domain 'devnet'"));
}

#[test]
fn config_file_sets_artifacts_dir() {
    let dir = TempDir::new().expect("temp dir");
    fs::create_dir_all(dir.path().join("published")).expect("mkdir");
    write_json(&dir.path().join("published").join("lynx.json"), &registry("0xAB"));
    fs::write(
        dir.path().join("taco.toml"),
        "artifacts_dir = \"published\"\n\n[logging]\nlevel = \"warn\"\n",
    )
    .expect("write config");

    taco(&dir)
        .args(["lookup", "-d", "lynx", "-n", "Foo", "--chain-id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0xAB"));
}

#[test]
fn log_level_flag_overrides_config() {
    let dir = TempDir::new().expect("temp dir");
    write_json(&dir.path().join("tapir.json"), &registry("0xAA"));
    fs::write(dir.path().join("taco.toml"), "[logging]\nlevel = \"warn\"\n").expect("write config");

    taco(&dir)
        .args(["list", "tapir.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("starting").not());

    taco(&dir)
        .args(["--log-level", "debug", "list", "tapir.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("starting"));
}
