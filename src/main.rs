use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent, Stylize},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use tictactoe_engine::board::{Cell, Marker, MatchSpan};
use tictactoe_engine::session::{GameSession, Mode, Outcome};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stdin = stdin();

    println!("Welcome to Tic-Tac-Toe\n");

    // choose the play mode
    let mode = loop {
        let mut buffer = String::new();
        print!("Play against the computer? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => break Mode::SinglePlayer,
            Some(_letter @ 'n') => break Mode::MultiPlayer,
            _ => println!("Unknown answer given"),
        }
    };

    let mut session = GameSession::new(mode);

    // game loop
    loop {
        draw(&session).expect("Failed to draw board!");

        match session.outcome() {
            Outcome::InProgress => {
                // the computer's move, paced by this loop
                if session.mode() == Mode::SinglePlayer && session.active_marker() == Marker::O {
                    session.tick();
                    continue;
                }

                // human move
                print!("Move input (col row) > ");
                stdout().flush().expect("Failed to flush to stdout!");
                let mut input_str = String::new();
                stdin.read_line(&mut input_str)?;

                let cells: Vec<usize> = input_str
                    .split_whitespace()
                    .filter_map(|token| token.parse().ok())
                    .collect();
                let (col, row) = match cells.as_slice() {
                    [col, row] => (*col, *row),
                    _ => {
                        println!("Invalid input: {}", input_str.trim());
                        continue;
                    }
                };
                if col >= session.board().cols() || row >= session.board().rows() {
                    println!("Cell ({}, {}) is off the board", col, row);
                    continue;
                }

                // drive the pointer path through the cell's pixel centre
                let (x, y) = session.board().cell_center(col, row);
                if !session.handle_pointer(x, y).accepted {
                    println!("Cell ({}, {}) is taken", col, row);
                }
            }

            // end states
            Outcome::Win(Marker::X) => {
                println!("Player 1 wins!");
                if !next_round(&mut session)? {
                    break;
                }
            }
            Outcome::Win(Marker::O) => {
                println!("Player 2 wins!");
                if !next_round(&mut session)? {
                    break;
                }
            }
            Outcome::Tie => {
                println!("Tie game!");
                if !next_round(&mut session)? {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// End-of-round prompt; resets for another round, optionally switching
/// the play mode (which zeroes the scoreboard)
fn next_round(session: &mut GameSession) -> Result<bool> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!("Play another round? y/n (m switches mode): ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                session.reset();
                return Ok(true);
            }
            Some(_letter @ 'm') => {
                match session.mode() {
                    Mode::SinglePlayer => session.set_mode(Mode::MultiPlayer),
                    Mode::MultiPlayer => session.set_mode(Mode::SinglePlayer),
                }
                return Ok(true);
            }
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn draw(session: &GameSession) -> Result<()> {
    let snapshot = session.snapshot();
    let mut stdout = stdout();

    // reserve a blank block for the grid, then paint cells into it
    for _ in 0..=snapshot.rows {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (_, cursor_y) = crossterm::cursor::position()?;
    let origin_y = cursor_y - snapshot.rows as u16;
    let origin_x = 2u16;

    for row in 0..snapshot.rows {
        for col in 0..snapshot.cols {
            let cell = snapshot.grid[row * snapshot.cols + col];
            let symbol = match cell {
                Cell::Marked(Marker::X) => "X",
                Cell::Marked(Marker::O) => "O",
                Cell::Empty => ".",
            };
            let mut content = style(symbol).with(match cell {
                Cell::Marked(Marker::X) => Color::Red,
                Cell::Marked(Marker::O) => Color::Yellow,
                Cell::Empty => Color::DarkGrey,
            });
            // highlight the winning run
            if snapshot
                .match_span
                .map_or(false, |span| span_covers(span, col, row))
            {
                content = content.attribute(Attribute::Bold).on(Color::DarkBlue);
            }

            stdout
                .queue(MoveTo(origin_x + col as u16 * 2, origin_y + row as u16))?
                .queue(PrintStyledContent(content))?;
        }
    }
    stdout.queue(MoveTo(0, origin_y + snapshot.rows as u16))?;
    stdout.flush()?;

    match snapshot.outcome {
        Outcome::InProgress => match snapshot.active_marker {
            Marker::X => println!("Player 1's Turn - X"),
            Marker::O => println!("Player 2's Turn - O"),
        },
        Outcome::Win(Marker::X) => println!("Player 1 Wins"),
        Outcome::Win(Marker::O) => println!("Player 2 Wins"),
        Outcome::Tie => println!("Tie game"),
    }
    println!("Player 1 Wins (Hum): {}", snapshot.scores.x_wins);
    match session.mode() {
        Mode::SinglePlayer => println!("Player 2 Wins (Cpu): {}", snapshot.scores.o_wins),
        Mode::MultiPlayer => println!("Player 2 Wins (Hum): {}", snapshot.scores.o_wins),
    }
    println!("Tie Games: {}", snapshot.scores.ties);

    Ok(())
}

/// Whether (col, row) lies on the straight run between the span's
/// endpoints
fn span_covers(span: MatchSpan, col: usize, row: usize) -> bool {
    let (start_col, start_row) = (span.start.0 as i32, span.start.1 as i32);
    let (end_col, end_row) = (span.end.0 as i32, span.end.1 as i32);
    let step_col = (end_col - start_col).signum();
    let step_row = (end_row - start_row).signum();

    let (mut c, mut r) = (start_col, start_row);
    loop {
        if c == col as i32 && r == row as i32 {
            return true;
        }
        if c == end_col && r == end_row {
            return false;
        }
        c += step_col;
        r += step_row;
    }
}
