use std::io::{BufRead, Stdin, Stdout, Write};

use trunfo::Prompter;

/// Talks to the person at the human seat through a terminal.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading answers.
    buf: String,
}

impl ConsolePrompter<std::io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn show(&mut self, message: &str) -> std::io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    fn ask(&mut self, question: &str) -> std::io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = self.input.read_line(&mut self.buf)?;
        if num_bytes_read == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        Ok(String::from(self.buf.trim_end()))
    }
}
