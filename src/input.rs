//! Command input for the session loop. This is the stand-in
//! for the graphical event layer: it turns stdin lines into
//! the same click, key and quit events a window would emit.
use std::io::{self, Stdin, Write};

use crate::graph::Placement;

/// One event from the external layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// A click at a board position.
    Click(Placement),
    /// Run the colourability search on the active graph.
    Colour,
    /// Run the isomorphism check between both graphs.
    Isomorphic,
    /// Switch the active graph.
    Toggle,
    /// Create the second graph with the given budget.
    NewGraph(usize),
    /// Dump the adjacency matrix of the active graph.
    ShowMatrix,
    /// End the session.
    Quit,
}

const USAGE: &str = "Commands: `click X Y`, `colour`, `iso`, `toggle`, \
`graph K`, `adj`, `quit`";

pub fn read_command(stdin: &Stdin) -> Result<Command, io::Error> {
    let mut line_buffer = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line_buffer.clear();
        if stdin.read_line(&mut line_buffer)? == 0 {
            // EOF counts as quitting.
            return Ok(Command::Quit);
        }

        match parse_command(&line_buffer) {
            Some(command) => return Ok(command),
            None => println!("{}", USAGE),
        }
    }
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();

    let command = match parts.next()? {
        "click" => {
            let x = parts.next()?.parse::<f64>().ok()?;
            let y = parts.next()?.parse::<f64>().ok()?;
            Command::Click(Placement::new(x, y))
        }
        "colour" | "color" => Command::Colour,
        "iso" => Command::Isomorphic,
        "toggle" => Command::Toggle,
        "graph" => Command::NewGraph(parts.next()?.parse::<usize>().ok()?),
        "adj" => Command::ShowMatrix,
        "quit" | "." => Command::Quit,
        _ => return None,
    };

    // Trailing garbage invalidates the whole line.
    if parts.next().is_some() {
        return None;
    }

    Some(command)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_all_commands() {
        assert_eq!(
            Some(Command::Click(Placement::new(120.0, 45.5))),
            parse_command("click 120 45.5")
        );
        assert_eq!(Some(Command::Colour), parse_command("colour"));
        assert_eq!(Some(Command::Colour), parse_command("color"));
        assert_eq!(Some(Command::Isomorphic), parse_command("iso"));
        assert_eq!(Some(Command::Toggle), parse_command("toggle"));
        assert_eq!(Some(Command::NewGraph(3)), parse_command("graph 3"));
        assert_eq!(Some(Command::ShowMatrix), parse_command("adj"));
        assert_eq!(Some(Command::Quit), parse_command("quit"));
        assert_eq!(Some(Command::Quit), parse_command("."));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(None, parse_command(""));
        assert_eq!(None, parse_command("click"));
        assert_eq!(None, parse_command("click 10"));
        assert_eq!(None, parse_command("click ten twenty"));
        assert_eq!(None, parse_command("graph"));
        assert_eq!(None, parse_command("graph -2"));
        assert_eq!(None, parse_command("colour now"));
        assert_eq!(None, parse_command("launch"));
    }
}
