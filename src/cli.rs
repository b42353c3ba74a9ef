//! Command Line Interface.

use crate::led::State;
use clap::{ArgEnum, StructOpt};
use std::path::PathBuf;

/// LED strip controller signalling the phases of a voice-interaction cycle
#[derive(StructOpt, Debug)]
#[clap(about, version)]
pub struct Cli {
    /// LED action to perform.
    #[structopt(short = 'a', long, arg_enum)]
    pub action: Action,
    /// Clear the display on exit.
    #[structopt(short = 'c', long)]
    pub clear: bool,
    /// Load config from file.
    #[structopt(long)]
    pub config: Option<PathBuf>,
}

/// Target state selected on the command line.
///
/// A closed set: an unrecognized action name is rejected at parse time and
/// never reaches the controller.
#[allow(missing_docs)]
#[derive(ArgEnum, Clone, Copy, Debug)]
pub enum Action {
    Idle,
    Listening,
    Thinking,
    Responding,
    Clear,
}

impl From<Action> for State {
    fn from(action: Action) -> Self {
        match action {
            Action::Idle => State::Idle,
            Action::Listening => State::Listening,
            Action::Thinking => State::Thinking,
            Action::Responding => State::Responding,
            Action::Clear => State::Cleared,
        }
    }
}
