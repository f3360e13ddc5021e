use std::io::{BufRead, Write};

use crate::logger::{LogLevel, Logger};
use crate::model::action::Reply;
use crate::model::machine::CoffeeMachine;

/// Drive `machine` from `input` until it is switched off.
///
/// Each round writes the prompt, reads one line, and writes the reply (if
/// any) on its own line. Running out of input ends the session quietly.
/// A rejected line stops the session and is returned to the caller.
pub fn run(
    machine: &mut CoffeeMachine,
    mut input: impl BufRead,
    output: &mut impl Write,
    logger: &Logger,
) -> Result<(), Box<dyn std::error::Error>> {
    logger.info("Coffee machine session started");

    let mut line = String::new();
    while !machine.is_done() {
        write!(output, "{}", machine.prompt())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            logger.warning(&format!(
                "Input ended while in state {:?}; closing session",
                machine.state()
            ));
            return Ok(());
        }

        let before = machine.state();
        let reply = match machine.consume(&line) {
            Ok(reply) => reply,
            Err(err) => {
                logger.error(&format!(
                    "Rejected input {:?} in state {:?}: {}",
                    line.trim(),
                    before,
                    err
                ));
                return Err(err.into());
            }
        };
        logger.debug(&format!("{:?} -> {:?}", before, machine.state()));

        if let Some(reply) = reply {
            log_reply(logger, &reply);
            writeln!(output, "{}", reply)?;
        }

        if logger.enabled(LogLevel::Debug) {
            logger.debug(&format!("ledger {}", serde_json::to_string(&machine.snapshot())?));
        }
    }

    // always empty once Done
    write!(output, "{}", machine.prompt())?;
    output.flush()?;
    logger.info("Coffee machine switched off");
    Ok(())
}

fn log_reply(logger: &Logger, reply: &Reply) {
    match reply {
        Reply::Making(name) => logger.info(&format!("Sold one {}", name)),
        Reply::Shortage(shortage) => logger.warning(&format!("Purchase refused: {}", shortage)),
        Reply::Gave(amount) => logger.info(&format!("Till emptied, ${} handed out", amount)),
        Reply::Report(_) => {}
    }
}
