mod common;

use assert_cmd::Command;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) {
    std::fs::write(dir.path().join(name), contents).unwrap();
}

fn grader(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("html-grader").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn grades_local_file_with_default_paths() {
    let td = TempDir::new().expect("temp");
    write(&td, "index.html", r#"<html><body><div id="x">hi</div></body></html>"#);
    write(&td, "checks.json", r##"["div", "#x", "span"]"##);

    let output = grader(&td).output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "{\n    \"#x\": true,\n    \"div\": true,\n    \"span\": false\n}\n"
    );
}

#[test]
fn grades_explicit_paths() {
    let td = TempDir::new().expect("temp");
    write(&td, "page.html", "<title>T</title><p>text</p>");
    write(&td, "my-checks.json", r#"["p", "title", "h1"]"#);

    let output = grader(&td)
        .arg("--checks")
        .arg("my-checks.json")
        .arg("--file")
        .arg("page.html")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"h1": false, "p": true, "title": true})
    );
}

#[test]
fn permuted_checks_print_identical_output() {
    let td = TempDir::new().expect("temp");
    write(&td, "index.html", "<ul><li>a</li></ul><footer></footer>");

    write(&td, "a.json", r#"["li", "footer", "header", "ul"]"#);
    let first = grader(&td).args(["-c", "a.json"]).output().unwrap();

    write(&td, "b.json", r#"["ul", "header", "li", "footer"]"#);
    let second = grader(&td).args(["-c", "b.json"]).output().unwrap();

    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_html_file_fails_without_output() {
    let td = TempDir::new().expect("temp");
    write(&td, "checks.json", r#"["div"]"#);

    let output = grader(&td).args(["--file", "nope.html"]).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("nope.html"));
}

#[test]
fn missing_checks_file_fails_without_output() {
    let td = TempDir::new().expect("temp");
    write(&td, "index.html", "<div></div>");

    let output = grader(&td).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("checks.json"));
}

#[test]
fn malformed_checks_file_fails_cleanly() {
    let td = TempDir::new().expect("temp");
    write(&td, "index.html", "<div></div>");
    write(&td, "checks.json", r#"{"div": true}"#);

    let output = grader(&td).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("checks.json"));
}

#[test]
fn invalid_url_fails_before_any_request() {
    let td = TempDir::new().expect("temp");
    write(&td, "checks.json", r#"["title"]"#);
    let server = common::html_server::start("<title>T</title>");

    // A live address that a prefix search would find, but the whole
    // value is not a URL
    let bad_url = format!("see {}", server.url);
    let output = grader(&td).args(["--url", bad_url.as_str()]).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("is not a valid URL"));
    assert_eq!(server.hits(), 0);

    let output = grader(&td).args(["--url", "not-a-url"]).output().unwrap();
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("not-a-url"));
}

#[test]
fn empty_check_list_prints_empty_object() {
    let td = TempDir::new().expect("temp");
    write(&td, "index.html", "<div></div>");
    write(&td, "checks.json", "[]");

    let output = grader(&td).output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "{}\n");
    assert!(stderr_of(&output).contains("has no checks"));
}

#[test]
fn grades_remote_page() {
    let td = TempDir::new().expect("temp");
    write(&td, "checks.json", r#"["title"]"#);
    let server = common::html_server::start("<html><head><title>T</title></head></html>");

    // --file points nowhere: --url wins and the file is never looked at
    let output = grader(&td)
        .args(["--url", server.url.as_str(), "--file", "missing.html"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "{\n    \"title\": true\n}\n");
    assert_eq!(server.hits(), 1);
}

#[test]
fn unreachable_url_is_an_error() {
    let td = TempDir::new().expect("temp");
    write(&td, "checks.json", r#"["title"]"#);

    // Bind and drop to get a port with nothing listening on it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let url = format!("http://127.0.0.1:{}/", port);

    let output = grader(&td).args(["--url", url.as_str()]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains(&url));
}
