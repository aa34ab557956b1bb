use smallvec::{IntoIter, SmallVec};
use std::iter::{Cycle, Peekable};

pub type PlayerId = u8;

pub trait WithPlayerId {
    fn get_id(&self) -> PlayerId;
}

/// Cyclic queue that owns the players of a match and tracks whose turn it is.
#[derive(Debug)]
pub struct PlayerPool<T: Clone> {
    players: SmallVec<[T; 2]>,
    players_queue: Peekable<Cycle<IntoIter<[T; 2]>>>,
}

impl<T: Clone> PlayerPool<T> {
    pub fn new(players: Vec<T>) -> Self {
        let players = SmallVec::from_vec(players);
        Self {
            players: players.clone(),
            players_queue: players.into_iter().cycle().peekable(),
        }
    }

    /// Returns the players in registration order, unaffected by rotation.
    pub fn as_slice(&self) -> &[T] {
        self.players.as_slice()
    }

    /// Get the active player without advancing the queue.
    /// &mut self is needed because Peekable can call next() on the underlying iterator.
    pub fn get_current(&mut self) -> Option<&T> {
        self.players_queue.peek()
    }

    /// Advance the queue by one and return the new active player.
    pub fn next(&mut self) -> Option<&T> {
        self.players_queue.next()?;
        self.players_queue.peek()
    }

    pub fn find_if<F>(&self, f: F) -> Option<&T>
    where
        F: FnMut(&&T) -> bool,
    {
        self.players.iter().find(f)
    }
}

impl<T: Clone + WithPlayerId> PlayerPool<T> {
    pub fn find(&self, id: PlayerId) -> Option<&T> {
        self.players.iter().find(|player| player.get_id() == id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct DummyPlayer {
        id: PlayerId,
        some_data: usize,
    }

    impl DummyPlayer {
        pub fn new(id: PlayerId, some_data: usize) -> Self {
            Self { id, some_data }
        }
    }

    impl WithPlayerId for DummyPlayer {
        fn get_id(&self) -> PlayerId {
            self.id
        }
    }

    #[test]
    fn test_find() {
        let pool = PlayerPool::new(vec![
            DummyPlayer::new(0, 45),
            DummyPlayer::new(1, 9),
            DummyPlayer::new(7, 42),
        ]);

        assert_eq!(pool.find(0).cloned(), Some(DummyPlayer::new(0, 45)));
        assert_eq!(pool.find(7).cloned(), Some(DummyPlayer::new(7, 42)));
        assert_eq!(pool.find(3), None);
    }

    #[test]
    fn test_find_if() {
        let pool = PlayerPool::new(vec![
            DummyPlayer::new(0, 12),
            DummyPlayer::new(1, 256),
            DummyPlayer::new(2, 256),
        ]);

        assert_eq!(
            pool.find_if(|&&p| p.some_data == 256).cloned(),
            Some(DummyPlayer::new(1, 256))
        );
        assert_eq!(pool.find_if(|&&p| p.some_data == 1), None);
    }

    #[test]
    fn test_get_current() {
        let mut pool = PlayerPool::new(vec![DummyPlayer::new(0, 0), DummyPlayer::new(1, 0)]);

        // starting with the first player
        assert_eq!(pool.get_current().map(|p| p.id), Some(0));
        // calling multiple times doesn't change anything
        assert_eq!(pool.get_current().map(|p| p.id), Some(0));

        let _ = pool.next();
        assert_eq!(pool.get_current().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_cyclic_iteration() {
        let mut pool = PlayerPool::new(vec![DummyPlayer::new(0, 0), DummyPlayer::new(1, 0)]);

        assert_eq!(pool.get_current().map(|p| p.id), Some(0));
        // the two players alternate endlessly
        itertools::assert_equal(
            std::iter::from_fn(|| pool.next().map(|p| p.id)).take(7),
            [1, 0, 1, 0, 1, 0, 1],
        );
    }

    #[test]
    fn test_as_slice() {
        let mut pool = PlayerPool::new(vec![DummyPlayer::new(0, 1), DummyPlayer::new(1, 2)]);

        itertools::assert_equal(
            pool.as_slice(),
            &[DummyPlayer::new(0, 1), DummyPlayer::new(1, 2)],
        );

        // advancing the queue doesn't affect as_slice
        pool.next();
        itertools::assert_equal(
            pool.as_slice(),
            &[DummyPlayer::new(0, 1), DummyPlayer::new(1, 2)],
        );
    }
}
