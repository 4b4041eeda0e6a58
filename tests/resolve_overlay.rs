use std::error::Error;
use std::path::PathBuf;

use renderbot::config::TakeOverlay;
use renderbot::errors::AttemptError;
use renderbot::take::resolve;

type TestResult = Result<(), Box<dyn Error>>;

fn full_take() -> TakeOverlay {
    TakeOverlay {
        name: Some("t1".into()),
        file: Some("f.ma".into()),
        start: Some(1),
        end: Some(10),
        step: None,
        renderer: None,
        output: None,
        skip_existing: None,
        root_dir: None,
    }
}

#[test]
fn take_fields_win_over_defaults() -> TestResult {
    let defaults = TakeOverlay {
        renderer: Some("vray".into()),
        output: Some("default_out".into()),
        step: Some(3),
        skip_existing: Some(true),
        ..TakeOverlay::default()
    };
    let take = TakeOverlay {
        renderer: Some("arnold".into()),
        output: Some("take_out".into()),
        ..full_take()
    };

    let spec = resolve(&defaults, &take, None, None)?;

    assert_eq!(spec.renderer, "arnold");
    assert_eq!(spec.output_dir, PathBuf::from("take_out"));
    // Fields the take left alone come from the defaults.
    assert_eq!(spec.step, 3);
    assert!(spec.skip_existing);

    Ok(())
}

#[test]
fn hard_defaults_apply_when_absent_everywhere() -> TestResult {
    let spec = resolve(&TakeOverlay::default(), &full_take(), None, None)?;

    assert_eq!(spec.renderer, "arnold");
    assert_eq!(spec.step, 1);
    assert_eq!(spec.output_dir, PathBuf::from("."));
    assert!(!spec.skip_existing);
    assert_eq!(spec.root, PathBuf::from("."));

    Ok(())
}

#[test]
fn defaults_may_supply_required_fields() -> TestResult {
    let defaults = TakeOverlay {
        file: Some("shared.ma".into()),
        start: Some(100),
        end: Some(200),
        ..TakeOverlay::default()
    };
    let take = TakeOverlay {
        name: Some("only-a-name".into()),
        ..TakeOverlay::default()
    };

    let spec = resolve(&defaults, &take, None, None)?;

    assert_eq!(spec.name, "only-a-name");
    assert_eq!(spec.file, PathBuf::from("shared.ma"));
    assert_eq!(spec.start_frame, 100);
    assert_eq!(spec.end_frame, 200);

    Ok(())
}

#[test]
fn missing_required_field_is_reported_by_name() -> TestResult {
    let take = TakeOverlay {
        end: None,
        ..full_take()
    };

    let err = resolve(&TakeOverlay::default(), &take, None, None)
        .expect_err("resolve should fail without 'end'");
    assert!(matches!(err, AttemptError::MissingField("end")));

    let err = resolve(&TakeOverlay::default(), &TakeOverlay::default(), None, None)
        .expect_err("resolve should fail on an empty take");
    assert!(matches!(err, AttemptError::MissingField("name")));

    Ok(())
}

#[test]
fn root_precedence_is_cli_then_take_then_config() -> TestResult {
    let take = TakeOverlay {
        root_dir: Some("/take".into()),
        ..full_take()
    };

    let spec = resolve(&TakeOverlay::default(), &take, Some("/config"), Some("/cli"))?;
    assert_eq!(spec.root, PathBuf::from("/cli"));

    let spec = resolve(&TakeOverlay::default(), &take, Some("/config"), None)?;
    assert_eq!(spec.root, PathBuf::from("/take"));

    let spec = resolve(&TakeOverlay::default(), &full_take(), Some("/config"), None)?;
    assert_eq!(spec.root, PathBuf::from("/config"));

    let spec = resolve(&TakeOverlay::default(), &full_take(), None, None)?;
    assert_eq!(spec.root, PathBuf::from("."));

    Ok(())
}

#[test]
fn resolving_twice_yields_identical_specs() -> TestResult {
    let defaults = TakeOverlay {
        renderer: Some("vray".into()),
        step: Some(2),
        ..TakeOverlay::default()
    };
    let take = full_take();

    let first = resolve(&defaults, &take, Some("/shots"), None)?;
    let second = resolve(&defaults, &take, Some("/shots"), None)?;

    assert_eq!(first, second);

    Ok(())
}
