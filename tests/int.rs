use assert_cmd::prelude::*;
use std::process::Command;
use std::str;

#[test]
fn render_file() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::cargo_bin("psview")?
        .arg("--width")
        .arg("800")
        .arg("--input")
        .arg("tests/int/ps.json")
        .output()?;
    assert!(output.status.success());

    let svg = str::from_utf8(&output.stdout)?;
    let mut lines = svg.lines();
    assert_eq!(
        lines.next().unwrap(),
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="560">"#
    );
    assert_eq!(svg.matches("<g ").count(), 3);
    assert!(svg.contains(r#"<g transform="translate(100, 390)">"#));
    assert!(svg.contains(r#"fill="green"/>"#));
    assert!(svg.contains(">worker1(idle)</text>"));
    assert!(svg.contains(">worker3(syscall)</text>"));

    Ok(())
}

#[test]
fn render_empty() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::cargo_bin("psview")?
        .arg("--input")
        .arg("tests/int/empty.json")
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        str::from_utf8(&output.stdout)?,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1024\" height=\"50\">\n</svg>\n"
    );
    Ok(())
}

#[test]
fn write_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join(format!("psview-{}.svg", std::process::id()));
    let output = Command::cargo_bin("psview")?
        .arg("--input")
        .arg("tests/int/ps.json")
        .arg("-o")
        .arg(&path)
        .output()?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let svg = std::fs::read_to_string(&path)?;
    std::fs::remove_file(&path)?;
    assert!(svg.contains(">worker2(running)</text>"));
    Ok(())
}

#[test]
fn missing_input() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::cargo_bin("psview")?
        .arg("--input")
        .arg("tests/int/nonexistent.json")
        .output()?;
    assert_eq!(output.status.code(), Some(exitcode::NOINPUT));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn fetch_failure() -> Result<(), Box<dyn std::error::Error>> {
    // Bind and release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let output = Command::cargo_bin("psview")?
        .env_remove("PSVIEW_URL")
        .arg("--url")
        .arg(format!("http://{}", addr))
        .output()?;
    assert_eq!(output.status.code(), Some(exitcode::UNAVAILABLE));
    assert!(output.stdout.is_empty());
    assert!(str::from_utf8(&output.stderr)?.contains("failed to load /runtime/ps"));
    Ok(())
}

#[test]
fn non_unicode_environment() -> Result<(), Box<dyn std::error::Error>> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = Command::cargo_bin("psview")?
        .env_remove("PSVIEW_URL")
        .env("PSVIEW_JUNK", OsStr::from_bytes(b"\xff\xfe"))
        .arg("--input")
        .arg("tests/int/ps.json")
        .output()?;
    assert!(output.status.success());
    assert_eq!(str::from_utf8(&output.stdout)?.matches("<g ").count(), 3);
    Ok(())
}

#[test]
fn invalid_url() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::cargo_bin("psview")?
        .arg("--url")
        .arg("not a url")
        .output()?;
    assert_eq!(output.status.code(), Some(exitcode::USAGE));
    assert!(output.stdout.is_empty());
    Ok(())
}
