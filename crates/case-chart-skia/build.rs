// File: crates/case-chart-skia/build.rs
// Summary: Links the Windows system libraries Skia/ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW and friends.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
