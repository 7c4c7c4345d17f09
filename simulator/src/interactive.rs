use std::io::{BufRead, Write};

use shut_the_box::{visualize_tiles, DieSource, Game, Move, Roll, TurnOutcome};
use tracing::debug;

/// Plays one game where the moves are read from `input`.
///
/// An invalid move is reported and asked for again, for the same roll.
pub fn play_interactive<R, W, D>(input: &mut R, output: &mut W, dice: &mut D) -> anyhow::Result<Game>
where
    R: BufRead,
    W: Write,
    D: DieSource + ?Sized,
{
    let mut game = Game::new();
    writeln!(output, "Welcome to Shut the Box!")?;
    while !game.is_over() {
        writeln!(output)?;
        writeln!(output, "{}", visualize_tiles(game.tiles()))?;
        let roll = Roll::from_source(dice)?;
        writeln!(output, "Rolled: {}", roll)?;
        let legal = game.take_roll(roll);
        if legal.is_empty() {
            writeln!(output, "No possible moves. Game over!")?;
            break;
        }
        let legal: Vec<String> = legal.iter().map(Move::to_string).collect();
        writeln!(output, "Possible moves: {}", legal.join(", "))?;

        loop {
            write!(output, "Enter your move (e.g., '1 2' to shut tiles 1 and 2): ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                anyhow::bail!("Input ended before the game was over");
            }
            let result = line
                .trim()
                .parse::<Move>()
                .and_then(|mv| game.close_tiles(mv));
            match result {
                Ok(TurnOutcome::BoxShut(_)) => {
                    writeln!(output, "Congratulations! You've shut the box!")?;
                    break;
                }
                Ok(outcome) => {
                    debug!(?outcome, "Tiles closed");
                    break;
                }
                Err(err) => writeln!(output, "Invalid move: {}. Try again.", err)?,
            }
        }
    }
    writeln!(
        output,
        "Your final score: {} with {} tiles closed",
        game.score(),
        game.tiles_closed()
    )?;
    Ok(game)
}
