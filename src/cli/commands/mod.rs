mod process;

pub use process::handle_process_command;
