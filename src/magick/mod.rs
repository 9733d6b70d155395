use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::process::Command;

pub use process::*;

mod process;

/// Render density passed to `convert`. The source icons are 24px viewboxes;
/// this yields an output sharp enough to survive downscaling in the app.
pub const DENSITY: &str = "576";

#[derive(Debug, Default, Copy, Clone)]
pub enum Output {
    #[default]
    Null,
    Inherit,
    Capture,
}

impl From<Output> for Stdio {
    fn from(v: Output) -> Self {
        match v {
            Output::Null => Stdio::null(),
            Output::Inherit => Stdio::inherit(),
            Output::Capture => Stdio::piped(),
        }
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Options {
    pub stdout: Output,
    pub stderr: Output,
}

impl Options {
    pub fn inherit_output() -> Options {
        Options {
            stdout: Output::Inherit,
            stderr: Output::Inherit,
        }
    }
}

#[derive(Debug)]
pub struct CommandConfig {
    pub path: PathBuf,
}

impl CommandConfig {
    pub fn from_path(path: PathBuf) -> Self {
        CommandConfig { path }
    }

    fn to_command(&self) -> Command {
        Command::new(&self.path)
    }
}

#[derive(Debug)]
pub struct Config {
    pub convert: CommandConfig,
    pub mogrify: CommandConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to start image tool process")]
    FailedToStartProcess(#[source] std::io::Error),
    #[error("error getting subprocess status")]
    SubprocessStatusError(#[source] std::io::Error),
    #[error("{}", .0.message())]
    ImageToolError(ExitStatus),
}

/// Wrapper around the ImageMagick command-line tools.
#[derive(Debug)]
pub struct Magick {
    config: Config,
}

impl Magick {
    pub fn new(config: Config) -> Self {
        Magick { config }
    }

    pub fn new_with_paths(convert: impl Into<PathBuf>, mogrify: impl Into<PathBuf>) -> Self {
        Self::new(Config {
            convert: CommandConfig::from_path(convert.into()),
            mogrify: CommandConfig::from_path(mogrify.into()),
        })
    }

    /// Renders an SVG to a PNG with a transparent background. The source
    /// icons are authored dark-on-transparent; `-negate` flips them to
    /// light-on-transparent to match the target theme.
    pub fn rasterize(
        &self,
        source: &Path,
        output: &Path,
        options: &Options,
    ) -> Result<MagickProcess, Error> {
        let args = [
            source.as_os_str(),
            OsStr::new("-density"),
            OsStr::new(DENSITY),
            OsStr::new("-background"),
            OsStr::new("none"),
            OsStr::new("-negate"),
            output.as_os_str(),
        ];
        self.run_with_config(&self.config.convert, &args, options)
    }

    /// Strips non-essential embedded metadata from a PNG, in place.
    pub fn strip_metadata(&self, target: &Path, options: &Options) -> Result<MagickProcess, Error> {
        let args = [OsStr::new("-strip"), target.as_os_str()];
        self.run_with_config(&self.config.mogrify, &args, options)
    }

    fn run_with_config(
        &self,
        config: &CommandConfig,
        args: &[impl AsRef<OsStr>],
        options: &Options,
    ) -> Result<MagickProcess, Error> {
        let mut cmd = config.to_command();
        cmd.stdin(Stdio::null())
            .stdout(options.stdout)
            .stderr(options.stderr)
            // kill-on-drop is a final fallback, normally the process is awaited to completion
            .kill_on_drop(true);

        for arg in args {
            cmd.arg(arg.as_ref());
        }

        let child = cmd.spawn().map_err(Error::FailedToStartProcess)?;
        Ok(MagickProcess(child))
    }
}
