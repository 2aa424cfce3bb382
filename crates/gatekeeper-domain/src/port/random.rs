//! Random Source - Injected randomness for visitor draws
//!
//! The queue never touches a global RNG. Whoever builds the engine
//! passes a source in, so a seed (or a script) fully determines which
//! visitors arrive.

/// Uniform index picker
pub trait RandomSource: Send {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Replays a fixed sequence of picks, wrapping around at the end
///
/// Values larger than `len` are reduced modulo `len`.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: 0,
        }
    }

    /// Always pick the same index
    pub fn constant(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() || len == 0 {
            return 0;
        }
        let value = self.picks[self.cursor % self.picks.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_random_replays_and_wraps() {
        let mut rng = ScriptedRandom::new(vec![0, 2, 4]);
        let picks: Vec<_> = (0..5).map(|_| rng.pick(3)).collect();
        assert_eq!(picks, vec![0, 2, 1, 0, 2]);
    }

    #[test]
    fn test_empty_script_picks_zero() {
        let mut rng = ScriptedRandom::new(Vec::new());
        assert_eq!(rng.pick(9), 0);
    }

    #[test]
    fn test_boxed_source() {
        let mut rng: Box<dyn RandomSource> = Box::new(ScriptedRandom::constant(7));
        assert_eq!(rng.pick(10), 7);
    }
}
