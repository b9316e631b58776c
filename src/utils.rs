use std::io::{self, Write};

use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, QueueableCommand};

/// Writes `msg` and puts the cursor back, so the next message replaces it.
pub fn rewrite_message<W: Write>(mut out: W, msg: &str) -> io::Result<()> {
    out.queue(cursor::SavePosition)?;
    out.write_all(msg.as_bytes())?;
    out.queue(Clear(ClearType::UntilNewLine))?;
    out.queue(cursor::RestorePosition)?;
    out.flush()?;
    Ok(())
}
