// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

//! Error paths that must resolve before any network traffic.

use std::process::Command;

use assert_cmd::cargo::CommandCargoExt;

fn polyjuice_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("polyjuice").unwrap();
    cmd.current_dir(dir)
        .env_remove("TREASURY_ADDRESS")
        .env_remove("DEPLOYER_PRIVATE_KEY")
        .env_remove("WEB3_PROVIDER_URL")
        .env_remove("DEPLOYED_CONTRACT_ADDRESS")
        .env_remove("ROLLUP_TYPE_HASH")
        .env_remove("ETH_ACCOUNT_LOCK_CODE_HASH");
    cmd
}

#[test]
fn deploy_without_contract_name_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = polyjuice_cmd(dir.path()).arg("deploy").output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no compiled contract specified"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn deploy_with_absent_artifact_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = polyjuice_cmd(dir.path())
        .args(["deploy", "Slammie"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unable to find contract file"),
        "unexpected stderr: {stderr}"
    );
    assert!(stderr.contains("Slammie.json"), "unexpected stderr: {stderr}");
}

#[test]
fn deploy_rejects_non_http_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("build/contracts")).unwrap();
    std::fs::write(
        dir.path().join("build/contracts/Slammie.json"),
        r#"{ "contractName": "Slammie", "abi": [], "bytecode": "0x00" }"#,
    )
    .unwrap();

    let output = polyjuice_cmd(dir.path())
        .args(["deploy", "Slammie", "--endpoint", "ws://localhost:8024"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unsupported web3 endpoint"),
        "unexpected stderr: {stderr}"
    );
}
