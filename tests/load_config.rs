use std::error::Error;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use renderbot::config::load_and_validate;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("renderbot.json");
    fs::write(&path, contents).expect("writing config fixture");
    path
}

#[test]
fn loads_a_minimal_config() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        r#"{"render-exe":"echo","takes":[{"name":"t1","file":"f.ma","start":1,"end":1}]}"#,
    );

    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.render_exe, "echo");
    assert_eq!(cfg.root_dir, None);
    assert_eq!(cfg.takes.len(), 1);
    assert_eq!(cfg.takes[0].name.as_deref(), Some("t1"));
    assert_eq!(cfg.takes[0].file.as_deref(), Some("f.ma"));
    assert_eq!(cfg.takes[0].start, Some(1));
    assert_eq!(cfg.takes[0].end, Some(1));

    Ok(())
}

#[test]
fn loads_defaults_and_optional_keys() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        r#"{
            "render-exe": "Render",
            "root-dir": "shots/ep01",
            "defaults": { "renderer": "vray", "output": "frames", "skipExisting": true },
            "takes": [
                { "name": "hero", "file": "hero.ma", "start": 1, "end": 240 },
                { "name": "bg", "file": "bg.ma", "start": 1, "end": 240, "step": 2 }
            ]
        }"#,
    );

    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.root_dir.as_deref(), Some("shots/ep01"));
    assert_eq!(cfg.defaults.renderer.as_deref(), Some("vray"));
    assert_eq!(cfg.defaults.output.as_deref(), Some("frames"));
    assert_eq!(cfg.defaults.skip_existing, Some(true));
    assert_eq!(cfg.takes[1].step, Some(2));

    Ok(())
}

#[test]
fn missing_takes_key_is_a_parse_error() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(&dir, r#"{"render-exe":"echo"}"#);

    assert!(load_and_validate(&path).is_err());

    Ok(())
}

#[test]
fn rejects_empty_render_exe() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        r#"{"render-exe":"  ","takes":[{"name":"t1","file":"f.ma","start":1,"end":1}]}"#,
    );

    assert!(load_and_validate(&path).is_err());

    Ok(())
}

#[test]
fn rejects_duplicate_take_names() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        r#"{
            "render-exe": "echo",
            "takes": [
                { "name": "t1", "file": "a.ma", "start": 1, "end": 1 },
                { "name": "t1", "file": "b.ma", "start": 1, "end": 1 }
            ]
        }"#,
    );

    let err = load_and_validate(&path).expect_err("duplicate names should be rejected");
    assert!(err.to_string().contains("duplicate take name 't1'"));

    Ok(())
}

#[test]
fn rejects_step_below_one() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        r#"{
            "render-exe": "echo",
            "takes": [{ "name": "t1", "file": "f.ma", "start": 1, "end": 10, "step": 0 }]
        }"#,
    );

    let err = load_and_validate(&path).expect_err("step 0 should be rejected");
    assert!(err.to_string().contains("step"));

    Ok(())
}

#[test]
fn empty_takes_list_is_allowed() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(&dir, r#"{"render-exe":"echo","takes":[]}"#);

    let cfg = load_and_validate(&path)?;
    assert!(cfg.takes.is_empty());

    Ok(())
}
