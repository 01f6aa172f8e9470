//! Version command implementation.

use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct VersionOutput {
    name: &'static str,
    version: &'static str,
    profile: &'static str,
}

const fn build_profile() -> &'static str {
    if cfg!(debug_assertions) { "dev" } else { "release" }
}

/// Print the package name, version, and build profile.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let output = VersionOutput {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        profile: build_profile(),
    };

    if json {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{} {} ({})", output.name, output.version, output.profile);
    }
    Ok(())
}
