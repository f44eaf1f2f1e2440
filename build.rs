// build.rs
use std::process::Command;

fn git_output(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let git_branch = git_output(&["rev-parse", "--abbrev-ref", "HEAD"]);
    let git_commit = git_output(&["rev-parse", "--short", "HEAD"]);

    println!("cargo:rustc-env=PROMPTDASH_BUILD={}@{}", git_branch, git_commit);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-changed=data");
}
