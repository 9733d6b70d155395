use std::path::PathBuf;

/// Converts the catalogued material design icons from SVG into PNGs suitable
/// to bundle as image assets.
///
/// Clone https://github.com/google/material-design-icons/ somewhere, cd to
/// the root of this source tree, and pass the checkout location as MD_DIR.
/// Outputs land in res/images/md-icons and res/images/md-symbols.
#[derive(clap::Parser)]
pub struct Cli {
    /// Base directory of an unpacked material-design-icons checkout
    #[arg(value_name = "MD_DIR")]
    pub md_dir: PathBuf,

    /// Sets the convert binary to use
    #[arg(long, default_value = "convert")]
    pub convert_binary: PathBuf,

    /// Sets the mogrify binary to use
    #[arg(long, default_value = "mogrify")]
    pub mogrify_binary: PathBuf,
}
