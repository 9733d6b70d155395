use super::Error;
use tokio::process::Child;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum ExitStatus {
    Successful,
    Failed(Option<i32>),
}

impl ExitStatus {
    pub fn success(&self) -> bool {
        self == &ExitStatus::Successful
    }

    pub fn check_status(&self) -> Result<(), Error> {
        match self {
            ExitStatus::Successful => Ok(()),
            ExitStatus::Failed(_) => Err(Error::ImageToolError(*self)),
        }
    }

    pub fn message(&self) -> String {
        match self {
            ExitStatus::Successful => "image tool exited successfully".to_owned(),
            ExitStatus::Failed(Some(code)) => {
                format!("image tool exited with error status {}", code)
            }
            ExitStatus::Failed(None) => "image tool exited with unknown error status".to_owned(),
        }
    }
}

#[derive(Debug)]
pub struct MagickProcess(pub(crate) Child);

impl MagickProcess {
    pub async fn wait(&mut self) -> Result<ExitStatus, Error> {
        let proc_status = self.0.wait().await.map_err(Error::SubprocessStatusError)?;
        if proc_status.success() {
            Ok(ExitStatus::Successful)
        } else {
            Ok(ExitStatus::Failed(proc_status.code()))
        }
    }

    pub async fn check_wait(&mut self) -> Result<(), Error> {
        self.wait().await?.check_status()
    }
}
