use std::env;
use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
    println!("cargo:rerun-if-env-changed=GIT_HASH");

    if let Ok(date) = env::var("BUILD_DATE") {
        println!("cargo:rustc-env=HELP_BUILD_DATE={date}");
    }

    if env::var_os("GIT_HASH").is_none() && Path::new("../.git/HEAD").exists() {
        println!("cargo:rerun-if-changed=../.git/HEAD");
    }
    if let Some(hash) = env::var("GIT_HASH").ok().or_else(git_short_hash) {
        println!("cargo:rustc-env=HELP_GIT_HASH={hash}");
    }
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!hash.is_empty()).then_some(hash)
}
