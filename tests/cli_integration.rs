// CLI integration tests for the `oura` binary.
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::process::Command;
use std::thread;

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_oura");
    let mut command = Command::new(exe);
    command.env_remove("OURA_ACCESS_TOKEN").env_remove("OURA_BASE_URL");
    command
}

fn parse_json_line(output: &[u8]) -> Value {
    let text = String::from_utf8_lossy(output);
    let line = text
        .lines()
        .rev()
        .find(|line| line.starts_with('{'))
        .expect("json line");
    serde_json::from_str(line).expect("valid json")
}

/// One-shot HTTP server on loopback; returns its base URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone"));
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).expect("read") == 0 || line == "\r\n" {
                break;
            }
        }
        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write");
    });
    format!("http://{addr}/v2")
}

fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}/v2")
}

#[test]
fn missing_token_is_a_usage_error() {
    let output = cmd().args(["personal-info"]).output().expect("run");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("access token"));
}

#[test]
fn unreachable_server_exits_with_transport_code() {
    let output = cmd()
        .args(["--token", "t", "--base-url", &unused_base_url(), "personal-info"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(3));
    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"], "Transport");
}

#[test]
fn get_prints_decoded_record() {
    let base_url = serve_once("200 OK", include_str!("fixtures/daily_readiness.json"));
    let output = cmd()
        .env("OURA_ACCESS_TOKEN", "t")
        .args(["--base-url", &base_url, "get", "daily-readiness", "abc"])
        .output()
        .expect("run");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let value = parse_json_line(&output.stdout);
    assert_eq!(value["score"], 63);
    assert_eq!(value["day"], "2024-01-01");
    assert_eq!(value["contributors"].as_object().expect("contributors").len(), 8);
}

#[test]
fn list_prints_page_with_token() {
    let base_url = serve_once(
        "200 OK",
        include_str!("fixtures/heartrate_page.json"),
    );
    let output = cmd()
        .args([
            "--token",
            "t",
            "--base-url",
            &base_url,
            "list",
            "heartrate",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-02T00:00:00Z",
        ])
        .output()
        .expect("run");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let value = parse_json_line(&output.stdout);
    assert_eq!(value["data"].as_array().expect("data").len(), 3);
    assert_eq!(value["next_token"], "abc");
}

#[test]
fn upstream_status_exits_with_upstream_code() {
    let base_url = serve_once("401 Unauthorized", r#"{"detail":"bad token"}"#);
    let output = cmd()
        .args(["--token", "t", "--base-url", &base_url, "get", "workout", "w1"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(4));
    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["status"], 401);
    assert_eq!(err["error"]["message"], "401 Unauthorized");
}

#[test]
fn incomplete_payload_exits_with_decode_code() {
    let base_url = serve_once("200 OK", r#"{"message":"invalid"}"#);
    let output = cmd()
        .args(["--token", "t", "--base-url", &base_url, "get", "sleep", "s1"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(5));
    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"], "Decode");
    assert_eq!(err["error"]["field"], "id");
}

#[test]
fn heartrate_has_no_get_one() {
    let output = cmd()
        .args(["--token", "t", "get", "heartrate", "x"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn bad_date_bound_is_a_usage_error() {
    let output = cmd()
        .args([
            "--token",
            "t",
            "--base-url",
            &unused_base_url(),
            "list",
            "sleep",
            "--start",
            "01/02/2024",
            "--end",
            "2024-01-03",
        ])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn completions_need_no_token() {
    let output = cmd().args(["completions", "bash"]).output().expect("run");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("oura"));
}
