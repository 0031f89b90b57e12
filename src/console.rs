//! Line-based terminal console.

use crate::config::{GameConfig, PlayerNames};
use crate::render;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use noughts_core::{Board, Console, ConsoleError, GameStatus, MoveError, Player};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument};

/// Console reading moves from `input` and drawing on `output`.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    names: PlayerNames,
    clear_screen: bool,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio(config: &GameConfig) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), config)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Creates a console over arbitrary streams.
    pub fn new(input: R, output: W, config: &GameConfig) -> Self {
        Self {
            input,
            output,
            names: config.player_names().clone(),
            clear_screen: *config.clear_screen(),
        }
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, handing back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Waits for the user to press Enter.
    #[instrument(skip(self))]
    pub fn pause(&mut self) -> Result<(), ConsoleError> {
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Reads one line, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// garbled line is just another unparseable move.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn render_board<const N: usize>(&mut self, board: &Board<N>) -> Result<(), ConsoleError> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(self.output, "\n\n{}", render::board(board, &self.names))?;
        self.output.flush()?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn read_move(&mut self, player: Player) -> Result<isize, ConsoleError> {
        loop {
            write!(self.output, "\n{}", render::prompt(player, &self.names))?;
            self.output.flush()?;

            let line = self.read_line()?.ok_or(ConsoleError::InputClosed)?;
            match line.trim().parse::<isize>() {
                Ok(index) => return Ok(index),
                Err(err) => {
                    debug!(input = line.trim(), error = %err, "Ignoring non-numeric input");
                    writeln!(self.output, "'{}' is not a cell number.", line.trim())?;
                }
            }
        }
    }

    fn reject_move(&mut self, _player: Player, error: &MoveError) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}. Choose another cell.", error)?;
        Ok(())
    }

    fn render_result(&mut self, status: GameStatus) -> Result<(), ConsoleError> {
        write!(self.output, "\n\n{}\n\n", render::result(status, &self.names))?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::ClassicBoard;
    use std::io::Cursor;

    fn console(input: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        console_bytes(input.as_bytes())
    }

    fn console_bytes(input: &[u8]) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        let config = GameConfig::default().with_clear_screen(false);
        TerminalConsole::new(Cursor::new(input.to_vec()), Vec::new(), &config)
    }

    fn written(console: TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_move_parses_number() {
        let mut console = console(" 7 \n");
        assert_eq!(console.read_move(Player::One).unwrap(), 7);
        assert!(written(console).contains("Player 1, enter a number: "));
    }

    #[test]
    fn test_read_move_reprompts_on_garbage() {
        let mut console = console("centre\n\n-1\n");
        assert_eq!(console.read_move(Player::Two).unwrap(), -1);
        let out = written(console);
        assert!(out.contains("'centre' is not a cell number."));
        assert_eq!(out.matches("Player 2, enter a number: ").count(), 3);
    }

    #[test]
    fn test_read_move_reprompts_on_invalid_utf8() {
        let mut console = console_bytes(b"\xff\xfe\n7\n");
        assert_eq!(console.read_move(Player::One).unwrap(), 7);
        let out = written(console);
        assert!(out.contains("'\u{fffd}\u{fffd}' is not a cell number."));
        assert_eq!(out.matches("Player 1, enter a number: ").count(), 2);
    }

    #[test]
    fn test_pause_prompts_and_waits_for_enter() {
        let mut console = console("\n");
        console.pause().unwrap();
        assert_eq!(written(console), "Press Enter to continue...");
    }

    #[test]
    fn test_pause_at_eof() {
        let mut console = console("");
        assert!(console.pause().is_ok());
        assert!(written(console).contains("Press Enter to continue..."));
    }

    #[test]
    fn test_read_move_at_eof() {
        let mut console = console("");
        assert!(matches!(console.read_move(Player::One), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn test_render_board_without_clear() {
        let mut console = console("");
        console.render_board(&ClassicBoard::new()).unwrap();
        let out = written(console);
        assert!(out.starts_with("\n\nTic Tac Toe\n"));
        assert!(out.contains("| 3 | 4 | 5 |"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_render_board_clears_screen() {
        let config = GameConfig::default();
        let mut console = TerminalConsole::new(Cursor::new(Vec::new()), Vec::new(), &config);
        console.render_board(&ClassicBoard::new()).unwrap();
        assert!(written(console).starts_with('\u{1b}'));
    }

    #[test]
    fn test_reject_move_message() {
        let mut console = console("");
        console.reject_move(Player::One, &MoveError::Occupied(4)).unwrap();
        assert_eq!(written(console), "Cell 4 is already taken. Choose another cell.\n");
    }
}
