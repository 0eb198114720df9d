//! Subprocess execution and the final handoff to the runtime.

pub mod command;
pub mod handoff;

pub use command::{
    execute, execute_streaming, indent, CommandOptions, CommandResult, CommandSpec,
    OutputCallback, OutputLine,
};
pub use handoff::{build_child_environment, handoff_for, ExecutionPlan, Handoff, SpawnAndWait};

#[cfg(unix)]
pub use handoff::ReplaceImage;
