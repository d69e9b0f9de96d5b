use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE: &str = "product_id,customer_id,customer_rating,feedback,timestamp,responses_from_customer_support,interaction_type,message
100,1,5,Great service,2024-02-01T10:00:00Z,Thank you,CHAT,Hi there
101,1,3,,2024-02-02T11:30:00Z,,EMAIL,Invoice question
102,2,1,Too slow,,Sorry about that,CALL,
";

fn run_cmd_json(db_path: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("workbench")
        .args(["--db-path", db_path.to_str().expect("db path"), "--json"])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_import_then_search_flow() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("workbench.sqlite3");
    let csv_path = temp.path().join("interactions.csv");
    fs::write(&csv_path, SAMPLE).expect("write csv");

    let report = run_cmd_json(&db_path, &["import", csv_path.to_str().expect("csv path")]);
    assert_eq!(report["inserted"], 3);

    let page = run_cmd_json(&db_path, &["search", "--customer-id", "1"]);
    assert_eq!(page["totalElements"], 2);
    let content = page["content"].as_array().expect("content");
    assert_eq!(content.len(), 2);
    assert_eq!(content[0]["feedback"], "Great service");

    let page = run_cmd_json(&db_path, &["search", "--type", "call"]);
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["content"][0]["productId"], 102);

    let page = run_cmd_json(&db_path, &["search", "--page", "1", "--size", "2"]);
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["content"].as_array().expect("content").len(), 1);
}

#[test]
fn cli_rejects_bad_rows_with_invalid_input_code() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("workbench.sqlite3");
    let csv_path = temp.path().join("bad.csv");
    fs::write(&csv_path, "product_id,customer_id\n1,1\n2,abc\n").expect("write csv");

    let output = cargo_bin_cmd!("workbench")
        .args(["--db-path", db_path.to_str().expect("db path")])
        .args(["import", csv_path.to_str().expect("csv path")])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("error:"));

    let page = run_cmd_json(&db_path, &["search"]);
    assert_eq!(page["totalElements"], 0);
}

#[test]
fn cli_rejects_zero_page_size() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("workbench.sqlite3");

    let output = cargo_bin_cmd!("workbench")
        .args(["--db-path", db_path.to_str().expect("db path")])
        .args(["search", "--size", "0"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}
