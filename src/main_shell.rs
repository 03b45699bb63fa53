// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use flexi_logger::Logger;
use rand::prelude::*;
use wordgrid::{alphabet, display, error, game_config, game_state, lexicon, placement};

#[derive(Parser, Debug)]
#[command(name = "shell", about = "Play a game in the terminal")]
struct Args {
    /// Word list or .kwg file
    #[arg(default_value = "words.txt")]
    lexicon: String,

    /// Seed for reproducible games
    #[arg(short, long)]
    seed: Option<u64>,

    /// single_player, single_bot, pvp, pvb or bvb
    #[arg(short, long, default_value = "pvb")]
    mode: game_config::GameMode,
}

const HELP: &str = "\
place WORD ROW COL h|v   place WORD starting at ROW,COL (0-based)
pass                     skip this turn
board                    show the board
rack                     show the rack of the player to move
scores                   show the scores
source FILE              run commands from FILE
exit                     quit";

fn print_status(game_state: &game_state::GameState) {
    let alphabet = game_state.game_config.alphabet();
    display::print_board(
        alphabet,
        game_state.game_config.board_layout(),
        &game_state.board,
    );
    for (i, player) in (1..).zip(game_state.players.iter()) {
        print!("player {}: {}, ", i, player.score);
    }
    println!("bag: {}", game_state.bag.len());
    if game_state.is_over() {
        println!("game over");
    } else {
        println!(
            "player {} to move, rack: {}",
            game_state.turn + 1,
            alphabet.fmt_rack(&game_state.current_player().rack)
        );
    }
}

// Bots move until a human is to move or the game ends.
fn play_bots<'a>(
    lexicon: &lexicon::Lexicon,
    mut game_state: game_state::GameState<'a>,
) -> error::Returns<game_state::GameState<'a>> {
    let alphabet = game_state.game_config.alphabet();
    while !game_state.is_over()
        && game_state.current_player().seat_kind == game_config::SeatKind::Bot
    {
        let turn = game_state.turn + 1;
        game_state = match game_state.play_bot_turn(lexicon)? {
            game_state::BotTurn::Played(accepted) => {
                println!(
                    "player {} plays {} for {}",
                    turn,
                    display::fmt_placement(alphabet, &game_state.board, &accepted.placement),
                    accepted.score
                );
                accepted.game_state
            }
            game_state::BotTurn::Passed(next) => {
                println!("player {} passes", turn);
                next
            }
        };
    }
    Ok(game_state)
}

fn parse_place(
    strings: &[String],
) -> Result<(&str, i8, i8, placement::Direction), String> {
    if strings.len() != 5 {
        return Err("usage: place WORD ROW COL h|v".into());
    }
    let row = strings[2]
        .parse::<i8>()
        .map_err(|err| format!("bad row {:?}: {}", strings[2], err))?;
    let col = strings[3]
        .parse::<i8>()
        .map_err(|err| format!("bad col {:?}: {}", strings[3], err))?;
    let direction = strings[4].parse::<placement::Direction>()?;
    Ok((&strings[1], row, col, direction))
}

fn main() -> error::Returns<()> {
    let args = Args::parse();
    Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;
    let lexicon = lexicon::Lexicon::load(&alphabet::ENGLISH_ALPHABET, &args.lexicon)?;
    let game_config = &game_config::make_english_game_config(args.mode);
    let mut rng = match args.seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };
    let mut game_state = play_bots(&lexicon, game_state::GameState::new(game_config, &mut rng))?;
    print_status(&game_state);

    let mut rl = rustyline::DefaultEditor::new()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if !strings.is_empty() {
                        match strings[0].as_str() {
                            "help" => {
                                println!("{}", HELP);
                            }
                            "exit" => {
                                break;
                            }
                            "board" | "scores" => {
                                print_status(&game_state);
                            }
                            "rack" => {
                                println!(
                                    "{}",
                                    game_config
                                        .alphabet()
                                        .fmt_rack(&game_state.current_player().rack)
                                );
                            }
                            "place" => match parse_place(&strings) {
                                Ok((word, row, col, direction)) => {
                                    match game_state.attempt_turn(
                                        &lexicon,
                                        word,
                                        row,
                                        col,
                                        direction,
                                        game_state.turn as usize,
                                    ) {
                                        Ok(accepted) => {
                                            println!(
                                                "scored {}, drew {}",
                                                accepted.score,
                                                game_config.alphabet().fmt_rack(&accepted.drawn)
                                            );
                                            game_state = play_bots(&lexicon, accepted.game_state)?;
                                            print_status(&game_state);
                                        }
                                        Err(err) => {
                                            println!("rejected: {}", err);
                                        }
                                    }
                                }
                                Err(err) => {
                                    println!("{}", err);
                                }
                            },
                            "pass" => match game_state.pass_turn(game_state.turn as usize) {
                                Ok(next) => {
                                    game_state = play_bots(&lexicon, next)?;
                                    print_status(&game_state);
                                }
                                Err(err) => {
                                    println!("rejected: {}", err);
                                }
                            },
                            "source" => {
                                if strings.len() > 1 {
                                    match std::fs::read_to_string(&strings[1]) {
                                        Ok(whole_file) => {
                                            let v = cmd_stack.len();
                                            for (line_num, line) in whole_file.lines().enumerate() {
                                                cmd_stack.push((
                                                    line.to_string(),
                                                    Some((strings[1].clone(), line_num + 1)),
                                                ));
                                            }
                                            cmd_stack[v..].reverse();
                                        }
                                        Err(err) => {
                                            println!("cannot open file: {:?}", err);
                                        }
                                    }
                                } else {
                                    println!("need another arg");
                                }
                            }
                            _ => {
                                println!("invalid input, help for help");
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
