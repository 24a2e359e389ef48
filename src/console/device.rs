use std::io::{self, BufRead, Stdin, Stdout, Write};

/// Line-oriented text I/O used by the console game.
pub trait Console {
    /// Print one line.
    fn output(&mut self, message: &str) -> io::Result<()>;

    /// Print `prompt` without a newline and read one line of input.
    /// End of input is reported as [`io::ErrorKind::UnexpectedEof`].
    fn request(&mut self, prompt: &str) -> io::Result<String>;

    /// Print a final message and wait for the user to acknowledge it.
    fn accept(&mut self, message: &str) -> io::Result<()>;
}

/// A [`Console`] over any reader/writer pair, normally stdin/stdout.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        StdConsole::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        StdConsole { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn output(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    fn request(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }

    fn accept(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        // Closed input counts as acknowledged
        self.read_line().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> StdConsole<Cursor<Vec<u8>>, Vec<u8>> {
        StdConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(console: StdConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn request_prints_prompt_and_strips_newline() {
        let mut c = console("3\r\n4\n");
        assert_eq!(c.request("Player Red's turn: ").unwrap(), "3");
        assert_eq!(c.request("again: ").unwrap(), "4");
        assert_eq!(written(c), "Player Red's turn: again: ");
    }

    #[test]
    fn request_at_end_of_input_fails() {
        let mut c = console("");
        let err = c.request("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn output_and_accept_write_lines() {
        let mut c = console("");
        c.output("hello").unwrap();
        c.accept("bye").unwrap();
        assert_eq!(written(c), "hello\nbye\n");
    }
}
