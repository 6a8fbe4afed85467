use crate::consts;
use crate::game::Direction;
use std::io::{self, BufRead, Write};

/// Source of the player's moves: one line of text per move
#[derive(Debug)]
pub(crate) struct Controls<R> {
    input: R,
    line: String,
}

impl<R: BufRead> Controls<R> {
    pub(crate) fn new(input: R) -> Controls<R> {
        Controls {
            input,
            line: String::new(),
        }
    }

    /// Prompt on `out` until the player enters a valid move and return it.
    /// Returns `None` once the input is exhausted.
    pub(crate) fn next_direction<W: Write>(
        &mut self,
        out: &mut W,
    ) -> io::Result<Option<Direction>> {
        loop {
            write!(out, "{}", consts::MOVE_PROMPT)?;
            out.flush()?;
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                tracing::debug!("Reached end of input");
                return Ok(None);
            }
            match self.line.parse::<Direction>() {
                Ok(d) => return Ok(Some(d)),
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected move");
                    writeln!(out, "{}", consts::INVALID_MOVE_MESSAGE)?;
                }
            }
        }
    }
}
