/// How well a finished session went, which picks the closing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// Every question answered correctly.
    Perfect,
    /// At least half correct.
    Good,
    /// Fewer than half correct.
    Encouragement,
}

impl ScoreTier {
    /// An empty session counts as perfect, since nothing was missed.
    pub fn from_score(score: usize, total: usize) -> Self {
        if score == total {
            ScoreTier::Perfect
        } else if score * 2 >= total {
            ScoreTier::Good
        } else {
            ScoreTier::Encouragement
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Perfect => "Perfect score! You're amazing!",
            ScoreTier::Good => "Great work! You're learning so fast!",
            ScoreTier::Encouragement => "Nice try! Let's play again soon and learn even more!",
        }
    }
}
