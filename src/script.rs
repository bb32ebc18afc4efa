use crate::render;

use tbs::input::{InputRow, Instruction};
use tbs::{Bank, Result};

use std::{
    io::{Read, Write},
    path::PathBuf,
};

use csv::{Reader, ReaderBuilder, Trim};

pub fn run_file(path: PathBuf, bank: &mut Bank, output: &mut impl Write) -> Result {
    let reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;

    return run(reader, bank, output);
}

/// Executes every row of a session script, writing each outcome to `output`.
/// Rows that fail to parse are logged and skipped.
pub fn run<R: Read>(mut reader: Reader<R>, bank: &mut Bank, output: &mut impl Write) -> Result {
    log::debug!("Deserializing script...");

    for record in reader.deserialize::<InputRow>() {
        log::debug!("Parsing record into InputRow: {record:?}");
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let command = match row.parse_instruction() {
            Ok(Instruction::Execute(command)) => command,
            Ok(Instruction::Quit) => {
                log::debug!("Quit requested by script");
                break;
            }
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let result = bank.execute(command);
        writeln!(output, "{}", render::result(&result))?;
    }

    output.flush()?;

    Ok(())
}
