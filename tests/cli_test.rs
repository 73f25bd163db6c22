use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_create_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("mintproxy"));
    cmd.args(["create", "europe", "greece", "--quantity", "5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"pending\""))
        .stdout(predicate::str::contains("\"amount\": 995"))
        .stdout(predicate::str::contains("\"quantity\": 5"))
        .stdout(predicate::str::contains("proxy_"));

    Ok(())
}

#[test]
fn test_cli_create_clamps_oversized_quantity() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("mintproxy"));
    cmd.args(["create", "europe", "greece", "--quantity", "25"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"quantity\": 20"));

    Ok(())
}

#[test]
fn test_cli_create_defaults_malformed_quantity() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("mintproxy"));
    cmd.args(["create", "asia", "japan", "--quantity", "lots"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"quantity\": 1"))
        .stdout(predicate::str::contains("\"amount\": 299"));

    Ok(())
}

#[test]
fn test_cli_create_rejects_unknown_selection() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("mintproxy"));
    cmd.args(["create", "europe", "atlantis"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown region or country"));

    Ok(())
}

#[test]
fn test_cli_catalog_listing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("mintproxy"));
    cmd.arg("catalog");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("europe,greece,Greece,199"))
        .stdout(predicate::str::contains("asia,japan,Japan,299"));

    Ok(())
}

#[test]
fn test_cli_status_of_unknown_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("mintproxy"));
    cmd.args(["status", "proxy_00000"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no order found for proxy_00000"));

    Ok(())
}
