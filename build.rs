use std::env;
use std::path::PathBuf;

use anyhow::Result;
use fs_extra::{copy_items, dir::CopyOptions};

// Ship the texture assets next to the build output so the binary finds them
// at its runtime lookup path.
fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=assets/*");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let assets = manifest_dir.join("assets");
    if assets.exists() {
        let out_dir = env::var("OUT_DIR")?;
        let mut options = CopyOptions::new();
        options.overwrite = true;
        copy_items(&[assets], out_dir, &options)?;
    }

    Ok(())
}
