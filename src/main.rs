use std::io;

use coffee_machine::logger::{LogLevel, Logger};
use coffee_machine::{session, CoffeeMachine};

fn main() {
    let logger = Logger::new(LogLevel::Warning);
    let mut machine = CoffeeMachine::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(err) = session::run(&mut machine, stdin.lock(), &mut stdout, &logger) {
        logger.error(&format!("Session aborted: {}", err));
        std::process::exit(1);
    }
}
