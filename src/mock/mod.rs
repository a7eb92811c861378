mod oracle;
mod terminal;

pub use oracle::{OracleError, ScriptError, ScriptedOracle};
pub use terminal::run_interactive_terminal;
