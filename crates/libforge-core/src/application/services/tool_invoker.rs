//! Exit-code policy for external tools.
//!
//! Runners only spawn processes. Whether a non-zero exit is fatal is decided
//! here, once, for every invocation.

use tracing::{debug, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ToolInvocation, ToolOutput, ToolRunner},
    },
    error::LibforgeResult,
};

/// Run `invocation` and fail on a non-zero exit unless it tolerates failure.
pub fn run_checked(runner: &dyn ToolRunner, invocation: &ToolInvocation) -> LibforgeResult<ToolOutput> {
    debug!(
        command = %invocation,
        cwd = %invocation.working_dir().display(),
        "Running tool"
    );

    let output = runner.run(invocation)?;

    debug!(command = %invocation, exit_code = output.exit_code, "Tool finished");

    if !output.success() && !invocation.tolerates_failure() {
        warn!(command = %invocation, exit_code = output.exit_code, "Tool failed");
        return Err(ApplicationError::ToolInvocation {
            command: invocation.to_string(),
            exit_code: output.exit_code,
            stderr: output.stderr,
        }
        .into());
    }

    Ok(output)
}
