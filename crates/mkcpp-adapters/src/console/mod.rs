//! Console adapters.

mod scripted;
mod stdin;

pub use scripted::ScriptedConsole;
pub use stdin::StdinConsole;
