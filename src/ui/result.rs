use std::io::{self, Write};

use crate::models::ScoreTier;

/// Print the final score and the closing line for its tier.
pub fn render<O: Write + ?Sized>(output: &mut O, score: usize, total: usize) -> io::Result<()> {
    writeln!(output, "All done! Here's how you did:")?;
    writeln!(
        output,
        "You answered {} out of {} questions correctly!",
        score, total
    )?;
    writeln!(output, "{}", ScoreTier::from_score(score, total).message())
}
