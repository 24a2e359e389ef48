//! Console front end: text I/O, the human and computer contestants, and the
//! turn loop that plays one game between them.

mod contestant;
mod device;
mod game;

pub use contestant::{prompt_column, Contestant};
pub use device::{Console, StdConsole};
pub use game::ConsoleGame;

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::io;

    use super::Console;

    /// Console fed from a fixed list of input lines, recording everything
    /// written to it. Prompts are recorded as their own lines.
    pub struct ScriptedConsole {
        inputs: VecDeque<String>,
        lines: Vec<String>,
    }

    impl ScriptedConsole {
        pub fn new(inputs: &[&str]) -> Self {
            ScriptedConsole {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                lines: Vec::new(),
            }
        }

        pub fn lines(&self) -> &[String] {
            &self.lines
        }
    }

    impl Console for ScriptedConsole {
        fn output(&mut self, message: &str) -> io::Result<()> {
            self.lines.push(message.to_string());
            Ok(())
        }

        fn request(&mut self, prompt: &str) -> io::Result<String> {
            self.lines.push(prompt.to_string());
            self.inputs
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn accept(&mut self, message: &str) -> io::Result<()> {
            self.lines.push(message.to_string());
            Ok(())
        }
    }
}
