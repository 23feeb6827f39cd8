//! Seat identification, turn markers and per-seat storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Tarok is played by 3 or 4 seats, numbered
//! from 0 in dealing order.
//!
//! ## Turn
//!
//! Who acts next: the chance node (the deal), a seat, or nobody once the
//! game is over.
//!
//! ## PlayerMap
//!
//! Per-seat data backed by `Vec` for O(1) access, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Seat 0 is the first seat after the dealer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat `offset` places after this one, wrapping around the table.
    ///
    /// ```
    /// use open_tarok::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).offset(1, 3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).offset(2, 3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn offset(self, offset: usize, player_count: usize) -> Self {
        Self(((self.index() + offset) % player_count) as u8)
    }

    /// Seats of a table in dealing order.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who is to act in a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// A chance node: the next action is drawn from `chance_outcomes`.
    Chance,
    /// A seat chooses the next action.
    Player(PlayerId),
    /// The game is over.
    Terminal,
}

impl Turn {
    /// The acting seat, if a seat is to act.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Turn::Player(player) => Some(player),
            Turn::Chance | Turn::Terminal => None,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Chance => write!(f, "Chance"),
            Turn::Player(player) => write!(f, "{}", player),
            Turn::Terminal => write!(f, "Terminal"),
        }
    }
}

/// One value per seat, indexable by `PlayerId`.
///
/// Indexing with a seat outside the table panics; `get` does not.
///
/// ```
/// use open_tarok::core::{PlayerId, PlayerMap};
///
/// let mut collected: PlayerMap<Vec<u8>> = PlayerMap::with_default(3);
/// collected[PlayerId::new(1)].push(20);
///
/// assert!(collected[PlayerId::new(0)].is_empty());
/// assert_eq!(collected[PlayerId::new(1)], vec![20]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build each seat's value from its id.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "a table needs at least one seat");
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Every seat starts with a clone of `value`.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data, or `None` for a seat outside the table.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Seats with their values, in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.data.len()).zip(self.data.iter())
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
