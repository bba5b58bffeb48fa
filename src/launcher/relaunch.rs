use std::convert::Infallible;
use std::env;
use std::process::Command;

use crate::error::Result;

/// Replace the running installer with a fresh copy started with `args`.
///
/// On Unix the process image is replaced. Elsewhere the new process is
/// waited on and this one exits with its status. Only returns on failure.
pub fn relaunch(args: &[String]) -> Result<Infallible> {
    let exe = env::current_exe()?;
    tracing::info!("relaunching {} {:?}", exe.display(), args);

    let mut command = Command::new(&exe);
    command.args(args);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        Err(command.exec().into())
    }

    #[cfg(not(unix))]
    {
        let status = command.status()?;
        std::process::exit(status.code().unwrap_or(1))
    }
}
