use promptvars_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_full_config_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[logging]
level = "debug"
file_level = "trace"
file = "/tmp/pvars.log"

[scan]
extensions = ["md", "tmpl"]
exclude = ["drafts"]
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(cfg_path.as_path())).expect("should load");
    assert_eq!(rc.source.as_deref(), Some(cfg_path.as_path()));
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/pvars.log")));
    assert_eq!(rc.scan.extensions, vec!["md", "tmpl"]);
    assert_eq!(rc.scan.exclude, vec!["drafts"]);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("promptvars/config.toml");
    write_file(&cfg_path, "version = 1\n");

    let rc = ConfigLoader::load(Some(cfg_path.as_path())).expect("should load");
    assert_eq!(rc.logging.level, "info");
    assert!(rc.logging.file.is_none());
    assert_eq!(rc.scan.extensions, vec!["md", "txt", "prompt"]);
    assert!(rc.scan.exclude.contains(&".git".to_string()));
}

#[test]
fn log_file_path_is_expanded() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    // SAFETY: the variable is unique to this test.
    unsafe { std::env::set_var("PVARS_TEST_LOG_DIR", tmp.path()) };
    write_file(&cfg_path, "version = 1\n[logging]\nfile = \"$PVARS_TEST_LOG_DIR/out.log\"\n");

    let rc = ConfigLoader::load(Some(cfg_path.as_path())).expect("should load");
    assert_eq!(rc.logging.file, Some(tmp.path().join("out.log")));
}
