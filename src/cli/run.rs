//! Run command — resolves the station and dispatches its evaluation.

use anyhow::Result;
use clap::{Args, Parser};

use crate::cli::{MessageArgs, SettingsArgs};
use crate::dispatch::{Dispatcher, EvaluatorCommand, ProcessRunner};

/// Evaluator command-line overrides.
#[derive(Args, Debug, Default)]
pub struct EvaluatorArgs {
    /// Evaluator program.
    #[arg(long, value_name = "PROGRAM")]
    pub program: Option<String>,

    /// Evaluator argument placed before the station flag (repeatable,
    /// replaces the configured list).
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Flag that introduces the station argument.
    #[arg(long, value_name = "FLAG", allow_hyphen_values = true)]
    pub station_flag: Option<String>,
}

impl EvaluatorArgs {
    /// Applies these overrides to a configured evaluator command.
    pub fn apply(&self, mut command: EvaluatorCommand) -> EvaluatorCommand {
        if let Some(program) = &self.program {
            command.program.clone_from(program);
        }
        if !self.args.is_empty() {
            command.args.clone_from(&self.args);
        }
        if let Some(flag) = &self.station_flag {
            command.station_flag.clone_from(flag);
        }
        command
    }
}

/// Run command options.
#[derive(Parser)]
pub struct RunCommand {
    /// Settings file selection.
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Commit message source.
    #[command(flatten)]
    pub message: MessageArgs,

    /// Evaluator overrides.
    #[command(flatten)]
    pub evaluator: EvaluatorArgs,

    /// Extra arguments appended after the station argument.
    #[arg(last = true, value_name = "EXTRA_ARGS")]
    pub extra_args: Vec<String>,
}

impl RunCommand {
    /// Executes the run command and returns the exit code to report.
    pub fn execute(self) -> Result<i32> {
        let settings = self.settings.load()?;
        let inputs = self.message.read_inputs(&settings)?;

        let command = self.evaluator.apply(settings.evaluator);
        let runner = ProcessRunner::new(command).with_extra_args(self.extra_args);

        let outcome = Dispatcher::new(runner).dispatch(&inputs)?;
        Ok(outcome.exit_code())
    }
}
