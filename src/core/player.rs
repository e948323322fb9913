//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! A participant's seat at the table. Seat order is the turn order for the
//! whole game and never changes between rounds.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier.
///
/// Seats are 0-based: the first participant is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a table of `player_count` participants.
    ///
    /// ```
    /// use president::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Iterate over every seat once, starting at `self` and going around
    /// the table in turn order.
    pub fn clockwise(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        let start = self.index();
        (0..player_count).map(move |offset| PlayerId(((start + offset) % player_count) as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use president::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// scores[PlayerId::new(1)] += 2;
/// assert_eq!(scores[PlayerId::new(1)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Wrap an existing vector, one entry per seat in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Mutable access to two distinct seats at once.
    ///
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "pair_mut requires two distinct seats");
        if a.index() < b.index() {
            let (low, high) = self.data.split_at_mut(b.index());
            (&mut low[a.index()], &mut high[0])
        } else {
            let (low, high) = self.data.split_at_mut(a.index());
            (&mut high[0], &mut low[b.index()])
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_clockwise_from_seat() {
        let order: Vec<_> = PlayerId::new(2).clockwise(4).collect();
        assert_eq!(
            order,
            vec![PlayerId::new(2), PlayerId::new(3), PlayerId::new(0), PlayerId::new(1)]
        );
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.index() * 10);
        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
    }

    #[test]
    fn test_pair_mut_either_order() {
        let mut map: PlayerMap<i32> = PlayerMap::new(5, |p| p.index() as i32);

        {
            let (a, b) = map.pair_mut(PlayerId::new(4), PlayerId::new(1));
            assert_eq!((*a, *b), (4, 1));
            std::mem::swap(a, b);
        }

        assert_eq!(map[PlayerId::new(1)], 4);
        assert_eq!(map[PlayerId::new(4)], 1);
    }

    #[test]
    #[should_panic(expected = "two distinct seats")]
    fn test_pair_mut_same_seat() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(3, 0);
        let _ = map.pair_mut(PlayerId::new(1), PlayerId::new(1));
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::from_vec(vec![7, 8, 9]);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[2], (PlayerId::new(2), &9));
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }
}
