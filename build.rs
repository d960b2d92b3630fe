use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let mut f = File::create(Path::new(&out_dir).join("build_info.rs")).unwrap();

    let now = chrono::Utc::now();
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    writeln!(f, "pub const BUILD_DATE: &str = \"{}\";", now.format("%Y-%m-%d")).unwrap();
    writeln!(f, "pub const BUILD_YEAR: &str = \"{}\";", now.format("%Y")).unwrap();
    writeln!(f, "pub const BUILD_PROFILE: &str = \"{}\";", profile).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
