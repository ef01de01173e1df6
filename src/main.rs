use std::env;
use std::io::{self, Write};

use anyhow::{bail, ensure, Context, Result};
use pleco::{BitMove, Board, Player};

use checkmate_lib::processing::{
    board_handles::{game_over, parse_move},
    searching::{select_best_move, MAX_PLY},
};

// Console palette for the interactive client.
const HEADER: &str = "\x1b[95m";
const OKBLUE: &str = "\x1b[94m";
const OKGREEN: &str = "\x1b[92m";
const FAIL: &str = "\x1b[91m";
const ENDC: &str = "\x1b[0m";

static SEARCH_DEPTH: u8 = 3;

fn main() -> Result<()> {
    let depth = match env::args().nth(1) {
        Some(raw) => raw
            .parse::<u8>()
            .with_context(|| format!("`{raw}` is not a valid search depth"))?,
        None => SEARCH_DEPTH,
    };
    ensure!(
        depth >= 1 && depth <= MAX_PLY,
        "search depth must be between 1 and {MAX_PLY}"
    );

    println!("{HEADER}=================================================={ENDC}");
    println!("{HEADER}                   Checkmate AI                   {ENDC}");
    println!("{HEADER}=================================================={ENDC}");
    println!();

    let human_is_white = prompt_side()?;
    let mut board = Board::start_pos();

    println!();
    print_board(&board);

    play(&mut board, human_is_white, depth)
}

fn play(board: &mut Board, human_is_white: bool, depth: u8) -> Result<()> {
    while !game_over(board) {
        let white_to_move = board.turn() == Player::White;

        if white_to_move == human_is_white {
            println!();
            let mv = prompt_move(board)?;
            board.apply_move(mv);
        } else {
            let Some(mv) = select_best_move(board, white_to_move, depth) else {
                break;
            };
            board.apply_move(mv);

            let mover = if white_to_move { "White" } else { "Black" };
            println!();
            println!("{FAIL}{mover} made the move: {}{ENDC}", mv.stringify());
            println!();
            print_board(board);
        }
    }

    println!();
    println!("{HEADER}The game is over!{ENDC}");
    Ok(())
}

fn prompt_side() -> Result<bool> {
    loop {
        let answer = prompt(&format!(
            "{OKBLUE}Will you be playing as white or black (white/black)? {ENDC}"
        ))?;
        match answer.trim().chars().next() {
            Some('w') | Some('W') => return Ok(true),
            Some('b') | Some('B') => return Ok(false),
            _ => println!("{FAIL}Please answer white or black.{ENDC}"),
        }
    }
}

fn prompt_move(board: &Board) -> Result<BitMove> {
    loop {
        let text = prompt(&format!("{OKGREEN}Enter your move: {ENDC}"))?;
        match parse_move(board, text.trim()) {
            Ok(mv) => return Ok(mv),
            Err(_) => println!("{FAIL}That is not a valid move!{ENDC}"),
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("input closed before the game finished");
    }
    Ok(line)
}

fn print_board(board: &Board) {
    println!("{HEADER}= Board State ={ENDC}");
    println!("{}", board.pretty_string());
}
