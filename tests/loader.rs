use relaunch_test_utils::builders::TempProject;
use relaunch_test_utils::init_tracing;

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use relaunch::config::overrides::env_key;
use relaunch::config::{PartialBuild, PartialConfig, PartialLog};
use relaunch::errors::ConfigError;
use relaunch::types::{KillDelay, Platform};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn toml_source_only_sets_written_fields() -> TestResult {
    init_tracing();
    let project = TempProject::new();
    let path = project.write(
        ".relaunch.toml",
        r#"
root = "app"

[build]
cmd = "make"
stop_on_error = false
exclude_dir = ["node_modules"]
"#,
    );

    let partial = project.resolver(Platform::Unix).load(&path)?;

    assert_eq!(partial.root.as_deref(), Some(std::path::Path::new("app")));
    assert_eq!(partial.build.cmd.as_deref(), Some("make"));
    assert_eq!(partial.build.stop_on_error, Some(false));
    assert_eq!(
        partial.build.exclude_dir,
        Some(vec!["node_modules".to_string()])
    );
    assert_eq!(partial.tmp_dir, None);
    assert_eq!(partial.build.bin, None);
    assert_eq!(partial.build.delay, None);
    assert_eq!(partial.color.main, None);
    assert_eq!(partial.log.time, None);
    assert_eq!(partial.misc.clean_on_exit, None);

    Ok(())
}

#[test]
fn yaml_source_is_parsed() -> TestResult {
    let project = TempProject::new();
    let path = project.write(
        ".relaunch.yaml",
        r#"
tmp_dir: build
build:
  bin: ./build/server
  delay: 250
  kill_delay: 2s
color:
  app: blue
log:
  time: true
"#,
    );

    let partial = project.resolver(Platform::Unix).load(&path)?;

    assert_eq!(partial.tmp_dir.as_deref(), Some("build"));
    assert_eq!(partial.build.bin.as_deref(), Some("./build/server"));
    assert_eq!(partial.build.delay, Some(250));
    assert_eq!(
        partial.build.kill_delay,
        Some(KillDelay(Duration::from_secs(2)))
    );
    assert_eq!(partial.color.app.as_deref(), Some("blue"));
    assert_eq!(partial.log.time, Some(true));
    assert_eq!(partial.build.cmd, None);

    Ok(())
}

#[test]
fn yaml_sections_without_body_are_treated_as_absent() -> TestResult {
    let project = TempProject::new();
    let path = project.write(".relaunch.yaml", "root: .\nbuild:\ncolor:\n  main: red\nlog:\n");

    let partial = project.resolver(Platform::Unix).load(&path)?;

    assert_eq!(partial.root, Some(PathBuf::from(".")));
    assert_eq!(partial.build, PartialBuild::default());
    assert_eq!(partial.log, PartialLog::default());
    assert_eq!(partial.color.main.as_deref(), Some("red"));
    Ok(())
}

#[test]
fn empty_sources_load_as_empty_partials() -> TestResult {
    let project = TempProject::new();
    let resolver = project.resolver(Platform::Unix);

    let toml = project.write("empty.toml", "");
    let yaml = project.write("empty.yaml", "");

    assert_eq!(resolver.load(&toml)?, PartialConfig::default());
    assert_eq!(resolver.load(&yaml)?, PartialConfig::default());
    Ok(())
}

#[test]
fn legacy_conf_extension_is_read_as_toml() -> TestResult {
    let project = TempProject::new();
    let path = project.write(".relaunch.conf", "[build]\ncmd = \"make legacy\"\n");

    let partial = project.resolver(Platform::Unix).load(&path)?;
    assert_eq!(partial.build.cmd.as_deref(), Some("make legacy"));
    Ok(())
}

#[test]
fn kill_delay_accepts_nanoseconds_and_duration_strings() -> TestResult {
    let project = TempProject::new();
    let resolver = project.resolver(Platform::Unix);

    let nanos = project.write("nanos.toml", "[build]\nkill_delay = 500\n");
    let millis = project.write("millis.toml", "[build]\nkill_delay = \"500ms\"\n");

    assert_eq!(
        resolver.load(&nanos)?.build.kill_delay,
        Some(KillDelay(Duration::from_nanos(500)))
    );
    assert_eq!(
        resolver.load(&millis)?.build.kill_delay,
        Some(KillDelay(Duration::from_millis(500)))
    );

    let compound = project.write("compound.toml", "[build]\nkill_delay = \"1m30s\"\n");
    assert_eq!(
        resolver.load(&compound)?.build.kill_delay,
        Some(KillDelay(Duration::from_secs(90)))
    );

    let negative = project.write("negative.toml", "[build]\nkill_delay = -1\n");
    assert!(matches!(
        resolver.load(&negative),
        Err(ConfigError::Parse { .. })
    ));
    Ok(())
}

#[test]
fn missing_file_is_a_read_error() {
    let project = TempProject::new();
    let path = project.path().join("missing.toml");

    match project.resolver(Platform::Unix).load(&path) {
        Err(err @ ConfigError::Read { .. }) => {
            assert!(err.is_parse_error());
            assert!(err.to_string().contains("error read config"));
            assert!(err.source().is_some());
        }
        Err(e) => panic!("Expected Read error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let project = TempProject::new();
    let path = project.write("bad.toml", "[build\ncmd = ");

    match project.resolver(Platform::Unix).load(&path) {
        Err(err @ ConfigError::Parse { .. }) => {
            assert!(err.to_string().contains("error parse config"));
        }
        Err(e) => panic!("Expected Parse error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn schema_mismatch_is_a_parse_error() {
    let project = TempProject::new();
    let resolver = project.resolver(Platform::Unix);

    let wrong_type = project.write("wrong.toml", "[build]\ndelay = \"soon\"\n");
    assert!(matches!(
        resolver.load(&wrong_type),
        Err(ConfigError::Parse { .. })
    ));

    let not_a_table = project.write("list.yaml", "- a\n- b\n");
    assert!(matches!(
        resolver.load(&not_a_table),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn unknown_extension_is_unsupported() {
    let project = TempProject::new();
    let path = project.write("config.json", "{}");

    match project.resolver(Platform::Unix).load(&path) {
        Err(err @ ConfigError::Unsupported { .. }) => assert!(err.is_parse_error()),
        Err(e) => panic!("Expected Unsupported error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn env_key_uppercases_and_replaces_dots() {
    assert_eq!(env_key("build.cmd"), "BUILD__CMD");
    assert_eq!(env_key("build.stop_on_error"), "BUILD__STOP_ON_ERROR");
    assert_eq!(env_key("tmp_dir"), "TMP_DIR");
    assert_eq!(env_key("misc.clean_on_exit"), "MISC__CLEAN_ON_EXIT");
}

#[test]
fn environment_overrides_file_and_absent_fields() -> TestResult {
    let project = TempProject::new();
    project.env().set_var("BUILD__CMD", "cargo build");
    project.env().set_var("BUILD__DELAY", "42");
    project.env().set_var("BUILD__EXCLUDE_DIR", "target  .git");
    project.env().set_var("LOG__TIME", "TRUE");
    project.env().set_var("BUILD__KILL_DELAY", "1s");
    project.env().set_var("COLOR__MAIN", "");
    let path = project.write(
        ".relaunch.toml",
        "[build]\ncmd = \"make\"\n[color]\nmain = \"red\"\n",
    );

    let partial = project.resolver(Platform::Unix).load(&path)?;

    assert_eq!(partial.build.cmd.as_deref(), Some("cargo build"));
    assert_eq!(partial.build.delay, Some(42));
    assert_eq!(
        partial.build.exclude_dir,
        Some(vec!["target".to_string(), ".git".to_string()])
    );
    assert_eq!(partial.log.time, Some(true));
    assert_eq!(
        partial.build.kill_delay,
        Some(KillDelay(Duration::from_secs(1)))
    );
    // Empty variables are ignored.
    assert_eq!(partial.color.main.as_deref(), Some("red"));

    Ok(())
}

#[test]
fn invalid_environment_override_is_reported() {
    let project = TempProject::new();
    project.env().set_var("BUILD__STOP_ON_ERROR", "maybe");
    let path = project.write(".relaunch.toml", "");

    match project.resolver(Platform::Unix).load(&path) {
        Err(err @ ConfigError::EnvOverride { .. }) => {
            assert!(err.is_parse_error());
            assert!(err.to_string().contains("BUILD__STOP_ON_ERROR"));
        }
        Err(e) => panic!("Expected EnvOverride error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}
