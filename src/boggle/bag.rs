use rand::Rng;

/// Letter frequencies used when rolling a random board
#[derive(Debug, Clone)]
pub struct LetterBag {
    /// Every letter repeated by its weight
    pub distribution: Vec<char>,
}

impl Default for LetterBag {
    fn default() -> LetterBag {
        let alph = [
            'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q',
            'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
        ];
        let amts = [
            9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
        ];
        Self::from_weights(alph.iter().copied().zip(amts.iter().copied()))
    }
}

impl LetterBag {
    pub fn from_weights(weights: impl IntoIterator<Item = (char, usize)>) -> LetterBag {
        let mut distribution = Vec::new();
        for (c, n) in weights {
            distribution.extend(std::iter::repeat(c).take(n));
        }
        LetterBag { distribution }
    }

    pub fn is_empty(&self) -> bool {
        self.distribution.is_empty()
    }

    /// Draws `n` letters with replacement, so any board size can be filled.
    /// An empty bag draws nothing.
    pub fn draw<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<char> {
        if self.is_empty() {
            return Vec::new();
        }
        (0..n)
            .map(|_| self.distribution[rng.gen_range(0..self.distribution.len())])
            .collect()
    }
}
