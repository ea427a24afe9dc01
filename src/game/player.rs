use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// The player who opens every game
    pub const FIRST: Player = Player::Red;

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Blue => Cell::Blue,
        }
    }

    /// Default display name, used when no name is configured
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Red.other(), Player::Blue);
        assert_eq!(Player::Blue.other(), Player::Red);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::Red.to_cell(), Cell::Red);
        assert_eq!(Player::Blue.to_cell(), Cell::Blue);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Red.name(), "Red");
        assert_eq!(Player::Blue.name(), "Blue");
    }
}
