use promptvars_core::config::loader::default_config_path;
use promptvars_core::config::types::ResolvedConfig;

pub fn run(rc: &ResolvedConfig) {
    println!("OK   pvars doctor");
    match &rc.source {
        Some(path) => println!("path: {}", path.display()),
        None => println!("path: (defaults; looked for {})", default_config_path().display()),
    }
    println!("logging.level: {}", rc.logging.level);
    println!("logging.file_level: {}", rc.logging.file_level.as_deref().unwrap_or("-"));
    println!(
        "logging.file: {}",
        rc.logging.file.as_ref().map_or_else(|| "-".to_string(), |p| p.display().to_string())
    );
    println!("scan.extensions: {}", rc.scan.extensions.join(", "));
    println!("scan.exclude: {}", rc.scan.exclude.join(", "));
}
