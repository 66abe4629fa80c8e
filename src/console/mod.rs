pub mod options;
pub mod parser;
pub mod session;

pub use options::{ConsoleOptions, OptionError};
pub use parser::{parse_command, Command};
pub use session::{parse_coordinate_move, process_line, run_console_loop, Console, ConsoleState};
