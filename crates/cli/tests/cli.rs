use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn meiosim() -> Command {
    Command::cargo_bin("meiosim").unwrap()
}

#[test]
fn test_run_default_text_report() {
    meiosim()
        .arg("run")
        .arg("--seed")
        .arg("42")
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulating Male + Female"))
        .stdout(predicate::str::contains("Gamete 1 (Egg)"))
        .stdout(predicate::str::contains("Gamete 2 (Sperm)"))
        .stdout(predicate::str::contains("Child DNA:"));
}

#[test]
fn test_run_pairing_modes() {
    meiosim()
        .args(["run", "--pairing", "two_males", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulating Two Males (Sperm + Sperm)"));

    meiosim()
        .args(["run", "--pairing", "two_females", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Egg 2"));
}

#[test]
fn test_run_unknown_pairing_fails_without_output() {
    meiosim()
        .args(["run", "--pairing", "three_way"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid pairing type 'three_way'"));
}

#[test]
fn test_run_invalid_mutation_rate() {
    meiosim()
        .args(["run", "--mutation-rate", "1.5"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid mating configuration"));
}

#[test]
fn test_run_length_too_short() {
    meiosim()
        .args(["run", "--length", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sequence_length must be at least 2"));
}

#[test]
fn test_run_json_is_deterministic() {
    let run = || {
        let output = meiosim()
            .args(["run", "--format", "json", "--seed", "7", "--length", "30"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    let first = run();
    assert_eq!(first, run());

    let doc: serde_json::Value = serde_json::from_str(&first).unwrap();
    let result = &doc["results"][0];
    assert_eq!(doc["config"]["sequence_length"], 30);
    assert_eq!(result["gamete1"]["sequence"].as_str().unwrap().len(), 30);
    assert_eq!(result["child"].as_str().unwrap().len(), 60);

    let crossover = result["gamete1"]["crossover"].as_u64().unwrap();
    assert!((1..30).contains(&crossover));
}

#[test]
fn test_run_zero_rate_child_is_gamete_concatenation() {
    let output = meiosim()
        .args(["run", "-f", "json", "--seed", "3", "-m", "0", "-l", "25"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let result = &doc["results"][0];
    let g1 = result["gamete1"]["sequence"].as_str().unwrap();
    let g2 = result["gamete2"]["sequence"].as_str().unwrap();
    assert_eq!(result["child"].as_str().unwrap(), format!("{g1}{g2}"));
    assert_eq!(result["mutations"].as_array().unwrap().len(), 0);
}

#[test]
fn test_run_fasta_output_file() {
    let temp = tempdir().unwrap();
    let out_path = temp.path().join("mating.fa");

    meiosim()
        .args(["run", "--format", "fasta", "--seed", "5"])
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let fasta = std::fs::read_to_string(&out_path).unwrap();
    assert!(fasta.starts_with(">mom1\n"));
    assert!(fasta.contains(">gamete2 label=Sperm crossover="));
    assert!(fasta.contains(">child mutations="));
}

#[test]
fn test_run_unknown_format() {
    meiosim()
        .args(["run", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format 'xml'"));
}

#[test]
fn test_run_replicates() {
    let output = meiosim()
        .args(["-t", "2", "run", "-f", "json", "--seed", "9", "-l", "10", "-r", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["results"].as_array().unwrap().len(), 4);

    meiosim()
        .args(["run", "--seed", "9", "-l", "10", "-r", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replicate 2"));
}

#[test]
fn test_single_run_matches_first_replicate() {
    let results = |replicates: &str| {
        let output = meiosim()
            .args(["run", "-f", "json", "--seed", "21", "-l", "15", "-r", replicates])
            .output()
            .unwrap();
        assert!(output.status.success());
        let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        doc["results"].as_array().unwrap().clone()
    };

    let single = results("1");
    let batch = results("3");
    assert_eq!(single.len(), 1);
    assert_eq!(batch.len(), 3);
    assert_eq!(single[0], batch[0]);
}

#[test]
fn test_init_then_run_from_config() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("mating.json");

    meiosim()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .args(["--pairing", "two_females", "--length", "40", "--seed", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mating configuration initialized successfully!",
        ));

    assert!(config_path.exists());
    let text = std::fs::read_to_string(&config_path).unwrap();
    assert!(text.contains("\"two_females\""));

    let run = || {
        meiosim()
            .arg("run")
            .arg("--config")
            .arg(&config_path)
            .args(["--format", "json"])
            .output()
            .unwrap()
    };
    let first = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, run().stdout);

    let doc: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(doc["config"]["pairing"], "two_females");
    assert_eq!(doc["results"][0]["child"].as_str().unwrap().len(), 80);
}

#[test]
fn test_run_flags_override_config() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("mating.json");
    std::fs::write(
        &config_path,
        r#"{ "pairing": "two_males", "sequence_length": 40, "mutation_rate": 0.01, "seed": 1 }"#,
    )
    .unwrap();

    let output = meiosim()
        .arg("run")
        .arg("--config")
        .arg(&config_path)
        .args(["--length", "12", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["config"]["pairing"], "two_males");
    assert_eq!(doc["config"]["sequence_length"], 12);
}

#[test]
fn test_run_config_with_unknown_pairing() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("bad.json");
    std::fs::write(&config_path, r#"{ "pairing": "hermaphrodite" }"#).unwrap();

    meiosim()
        .arg("run")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("hermaphrodite"));
}

#[test]
fn test_init_rejects_unknown_pairing() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("mating.json");

    meiosim()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .args(["--pairing", "nope"])
        .assert()
        .failure();

    assert!(!config_path.exists());
}

#[test]
fn test_modes_lists_all() {
    meiosim()
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("male_female"))
        .stdout(predicate::str::contains("two_males"))
        .stdout(predicate::str::contains("two_females"))
        .stdout(predicate::str::contains("mom1 × mom2"));
}
