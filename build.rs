//! Stamps the binary with a version string and commit hash.
//!
//! `THEME_SWITCHER_VERSION` and `THEME_SWITCHER_GIT_SHA` win when set.
//! Otherwise both come from the enclosing git checkout, and builds outside
//! one fall back to the crate version and `"unknown"`.

use std::env;
use std::process::Command;

const VERSION_VAR: &str = "THEME_SWITCHER_VERSION";
const SHA_VAR: &str = "THEME_SWITCHER_GIT_SHA";

fn main() {
    let version = env_override(VERSION_VAR)
        .or_else(|| git(&["describe", "--tags", "--abbrev=0"]).map(strip_tag_prefix))
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    let sha = env_override(SHA_VAR)
        .or_else(|| git(&["rev-parse", "--short=7", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={}={}", VERSION_VAR, version);
    println!("cargo:rustc-env={}={}", SHA_VAR, sha);

    for var in [VERSION_VAR, SHA_VAR] {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    // New commits and tags move HEAD or the packed refs
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/packed-refs");
}

fn env_override(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn strip_tag_prefix(tag: String) -> String {
    tag.strip_prefix('v').map(str::to_string).unwrap_or(tag)
}
