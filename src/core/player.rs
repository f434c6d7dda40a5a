//! Seats and per-seat storage.
//!
//! ## PlayerId
//!
//! Seat identifier, 0-based. Shown as `p1`, `p2`, ... the way move logs
//! name players.
//!
//! ## PlayerMap
//!
//! One value per seat backed by a `Vec`, indexed by `PlayerId`. Each
//! player's [`TriggerLedger`](crate::triggers::TriggerLedger) lives in one.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Most players a game seats.
pub const MAX_PLAYERS: usize = 4;

/// Seat identifier. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every seat of a `player_count`-player game.
    ///
    /// ```
    /// use gaia_events::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, [PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.0 + 1)
    }
}

/// One value per seat.
///
/// ```
/// use gaia_events::core::{PlayerId, PlayerMap};
///
/// let mut passed: PlayerMap<bool> = PlayerMap::with_default(2);
/// passed[PlayerId::new(1)] = true;
/// assert!(!passed[PlayerId::new(0)]);
/// assert!(passed[PlayerId::new(1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build one value per seat with `factory`.
    ///
    /// # Panics
    ///
    /// If `player_count` is 0 or above [`MAX_PLAYERS`].
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= MAX_PLAYERS, "At most {MAX_PLAYERS} players supported");

        Self {
            seats: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }

    /// Iterate `(seat, value)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(self.seats.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all(self.seats.len()).zip(self.seats.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
