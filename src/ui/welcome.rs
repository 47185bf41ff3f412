use std::io::{self, Write};

pub const GREETING: &str = "Hello, little explorer! Let's play a quiz together!";

pub fn render<O: Write + ?Sized>(output: &mut O) -> io::Result<()> {
    writeln!(output, "{}", GREETING)?;
    writeln!(output)
}
