use crate::processor::{LineProcessor, ProcessedLine};
use anyhow::{Result, bail};
use std::io::{BufRead, Read, Write};

/// largest single input line accepted before the run aborts
pub const MAX_LINE_BYTES: usize = 10 * 1024 * 1024;

/// blocking read-process-write loop, one pass over the input
///
/// Lines are read newline-delimited with the trailing `\n` / `\r\n`
/// stripped. Reads go through `Read::take` so a runaway line never buffers
/// more than the cap plus one byte. Pass-through lines are echoed from the
/// original bytes, so input that is not valid UTF-8 survives unmodified.
///
/// # Errors
///
/// Fails on the first read error or on a line whose payload exceeds
/// [`MAX_LINE_BYTES`]; output produced so far is flushed before returning.
pub fn run<R, W>(mut input: R, mut output: W, processor: &LineProcessor) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf: Vec<u8> = Vec::new();
    loop {
        buf.clear();
        let read = input
            .by_ref()
            .take(MAX_LINE_BYTES as u64 + 1)
            .read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        if buf.len() > MAX_LINE_BYTES {
            output.flush()?;
            bail!("input line exceeds the {MAX_LINE_BYTES} byte buffer limit");
        }

        let text = String::from_utf8_lossy(&buf);
        match processor.process(&text) {
            ProcessedLine::Dropped => {}
            ProcessedLine::PassThrough => {
                output.write_all(&buf)?;
                output.write_all(b"\n")?;
            }
            ProcessedLine::Formatted(line) => {
                output.write_all(line.as_bytes())?;
                output.write_all(b"\n")?;
            }
        }
    }
    output.flush()?;
    Ok(())
}
