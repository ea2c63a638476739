use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tracing::warn;
use tw_fiction::{GameSession, SessionConfig};

pub fn run(story: Option<&Path>, hide_commands: bool) -> Result<(), String> {
    let story = super::load_story(story)?;
    let config = SessionConfig::default().with_print_commands(!hide_commands);

    let mut session =
        GameSession::new(story, config).map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {}", session.title().bold());
    println!("  Type 'exit' or 'q' to stop.\n");
    print_lines(session.opening());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match session.process(input) {
            Ok(turn) => {
                print_lines(&turn.lines);
                if turn.game_over {
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, input, "turn failed");
                println!("{}", e.to_string().yellow());
            }
        }
    }

    println!("THE GAME HAS ENDED.");
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
