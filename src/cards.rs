//! Ranks, suits and four-card hands.
//!
//! Ranks carry their poker value as the discriminant (Two = 2 .. Ace = 14),
//! so ordering and comparisons follow conventional rank order. Suits carry
//! the single-letter code used by the assignment table (g/r/b/y) and the
//! colour they are drawn with.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    /// Uppercase display symbol. Ten is written `T`.
    pub fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_char(c: char) -> ChartResult<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(ChartError::InvalidRank(c.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parse a run of rank symbols. Accepts `T` or `10` for ten, any case.
pub fn parse_ranks(s: &str) -> ChartResult<Vec<Rank>> {
    let mut ranks = Vec::with_capacity(4);
    let mut chars = s.trim().chars().peekable();
    while let Some(c) = chars.next() {
        if c == '1' {
            if chars.peek() == Some(&'0') {
                chars.next();
                ranks.push(Rank::Ten);
                continue;
            }
            return Err(ChartError::InvalidRank(c.to_string()));
        }
        ranks.push(Rank::from_char(c)?);
    }
    Ok(ranks)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Club,
    Heart,
    Diamond,
    Spade,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Heart, Suit::Diamond, Suit::Spade];

impl Suit {
    /// Letter used in assignment-table codes, named after the display colour.
    pub fn code(self) -> char {
        match self {
            Suit::Club => 'g',
            Suit::Heart => 'r',
            Suit::Diamond => 'b',
            Suit::Spade => 'y',
        }
    }

    pub fn from_code(c: char) -> Option<Suit> {
        match c {
            'g' => Some(Suit::Club),
            'r' => Some(Suit::Heart),
            'b' => Some(Suit::Diamond),
            'y' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Suit::Club => '\u{2663}',
            Suit::Heart => '\u{2665}',
            Suit::Diamond => '\u{2666}',
            Suit::Spade => '\u{2660}',
        }
    }

    /// Display colour as RGB, tuned for contrast on dark terminals.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Suit::Club => (0x6F, 0xBD, 0x66),
            Suit::Heart => (0xFF, 0x6B, 0x70),
            Suit::Diamond => (0x5B, 0x9F, 0xF7),
            Suit::Spade => (0xFF, 0xD8, 0x66),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Club => "club",
            Suit::Heart => "heart",
            Suit::Diamond => "diamond",
            Suit::Spade => "spade",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Four ranks in the order they were given. Repeats are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    ranks: [Rank; 4],
}

impl Hand {
    pub fn new(ranks: [Rank; 4]) -> Self {
        Hand { ranks }
    }

    pub fn from_ranks(ranks: &[Rank]) -> ChartResult<Hand> {
        let ranks: [Rank; 4] = ranks.try_into().map_err(|_| {
            ChartError::InvalidHand(ranks.iter().map(|r| r.symbol()).collect())
        })?;
        Ok(Hand { ranks })
    }

    pub fn parse(s: &str) -> ChartResult<Hand> {
        let ranks = parse_ranks(s)?;
        if ranks.len() != 4 {
            return Err(ChartError::InvalidHand(s.to_string()));
        }
        Hand::from_ranks(&ranks)
    }

    pub fn ranks(&self) -> &[Rank; 4] {
        &self.ranks
    }

    /// Positions ordered by rank, highest first. Ties keep input order.
    pub fn descending_order(&self) -> [usize; 4] {
        let mut order = [0, 1, 2, 3];
        order.sort_by(|&a, &b| self.ranks[b].cmp(&self.ranks[a]));
        order
    }
}

impl FromStr for Hand {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.ranks {
            write!(f, "{}", r)?;
        }
        Ok(())
    }
}
