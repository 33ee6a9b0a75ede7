/// Adapters driving the Power Platform CLI as an external process
mod command_runner;
mod pac_client;

pub use command_runner::CommandRunner;
pub use pac_client::PacCliClient;
