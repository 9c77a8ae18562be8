use timetrace::commands::Cli;
use timetrace::libs::messages::Message;
use timetrace::msg_error;

fn main() {
    if let Err(err) = Cli::menu() {
        msg_error!(Message::CommandFailed(format!("{:#}", err)));
        std::process::exit(1);
    }
}
