/// The error type for submitting a move, i.e. closing tiles for a roll.
///
/// Autonomous play through a [`Strategy`](crate::Strategy) never produces these; they
/// guard moves entered by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    /// The move does not close any tile.
    NoTiles,
    WrongSum { expected: u8, actual: u32 },
    TileNotOpen { tile: u8 },
    DuplicateTile { tile: u8 },
    /// The textual form of a move could not be parsed.
    Malformed { input: String },
    DieOutOfRange { value: u8 },
    /// Tiles were submitted before a roll was taken.
    NoPendingRoll,
    GameOver,
}

impl std::error::Error for InvalidMove {}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::NoTiles => write!(f, "A move has to close at least one tile"),
            InvalidMove::WrongSum { expected, actual } => write!(
                f,
                "The tiles add up to {}, but the roll was {}",
                actual, expected
            ),
            InvalidMove::TileNotOpen { tile } => write!(f, "Tile {} is not open", tile),
            InvalidMove::DuplicateTile { tile } => {
                write!(f, "Tile {} was given more than once", tile)
            }
            InvalidMove::Malformed { input } => {
                write!(f, "Could not read '{}' as a list of tiles", input)
            }
            InvalidMove::DieOutOfRange { value } => {
                write!(f, "A die showed {}, which is not between 1 and 6", value)
            }
            InvalidMove::NoPendingRoll => write!(f, "Tiles can only be closed after a roll"),
            InvalidMove::GameOver => write!(f, "The game is already over"),
        }
    }
}

/// A strategy tag outside of the supported range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownStrategy {
    pub tag: u8,
}

impl std::error::Error for UnknownStrategy {}

impl std::fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Strategy #{} does not exist, supported strategies are 0 to 5",
            self.tag
        )
    }
}

/// A strategy was asked to choose from zero moves.
///
/// Callers are expected to check for the end of the game first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyLegalMoveSet;

impl std::error::Error for EmptyLegalMoveSet {}

impl std::fmt::Display for EmptyLegalMoveSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Asked to choose a move, but there are no legal moves")
    }
}

/// The error type for one autonomously played turn.
#[derive(Debug)]
pub enum TurnError {
    InvalidMove(InvalidMove),
    EmptyLegalMoveSet(EmptyLegalMoveSet),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::InvalidMove(err) => Some(err),
            TurnError::EmptyLegalMoveSet(err) => Some(err),
        }
    }
}

impl std::fmt::Display for TurnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnError::InvalidMove(_) => write!(f, "The player chose an invalid move"),
            TurnError::EmptyLegalMoveSet(_) => {
                write!(f, "The player was asked for a move without any legal moves")
            }
        }
    }
}

impl From<InvalidMove> for TurnError {
    fn from(err: InvalidMove) -> Self {
        TurnError::InvalidMove(err)
    }
}

impl From<EmptyLegalMoveSet> for TurnError {
    fn from(err: EmptyLegalMoveSet) -> Self {
        TurnError::EmptyLegalMoveSet(err)
    }
}
