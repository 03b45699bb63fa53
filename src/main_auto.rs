// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use flexi_logger::Logger;
use rand::prelude::*;
use wordgrid::{alphabet, display, error, game_config, game_state, lexicon};

#[derive(Parser, Debug)]
#[command(name = "auto", about = "Let bots play each other")]
struct Args {
    /// Word list or .kwg file
    #[arg(default_value = "words.txt")]
    lexicon: String,

    /// Seed for reproducible games
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: usize,

    /// single_bot or bvb
    #[arg(short, long, default_value = "bvb")]
    mode: game_config::GameMode,
}

fn main() -> error::Returns<()> {
    let args = Args::parse();
    Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;
    if args
        .mode
        .seats()
        .contains(&game_config::SeatKind::Human)
    {
        wordgrid::return_error!(format!("{:?} needs a human player", args.mode));
    }
    let lexicon = lexicon::Lexicon::load(&alphabet::ENGLISH_ALPHABET, &args.lexicon)?;
    let game_config = &game_config::make_english_game_config(args.mode);
    let alphabet = game_config.alphabet();
    let mut rng = match args.seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };
    let mut wins = vec![0usize; game_config.num_players() as usize];

    for game_num in 1..=args.games {
        println!("\ngame {}", game_num);
        let mut game_state = game_state::GameState::new(game_config, &mut rng);
        println!("bag: {}", alphabet.fmt_rack(&game_state.bag.0));
        while !game_state.is_over() {
            let turn = game_state.turn as usize;
            println!(
                "player {} rack: {}",
                turn + 1,
                alphabet.fmt_rack(&game_state.current_player().rack)
            );
            game_state = match game_state.play_bot_turn(&lexicon)? {
                game_state::BotTurn::Played(accepted) => {
                    println!(
                        "player {} plays {} for {}, draws {}{}",
                        turn + 1,
                        display::fmt_placement(alphabet, &game_state.board, &accepted.placement),
                        accepted.score,
                        alphabet.fmt_rack(&accepted.drawn),
                        if accepted.bag_exhausted {
                            " (bag is empty)"
                        } else {
                            ""
                        }
                    );
                    accepted.game_state
                }
                game_state::BotTurn::Passed(next) => {
                    println!("player {} passes", turn + 1);
                    next
                }
            };
            display::print_board(alphabet, game_config.board_layout(), &game_state.board);
            for (i, player) in (1..).zip(game_state.players.iter()) {
                print!("player {}: {}, ", i, player.score);
            }
            println!("bag: {}", game_state.bag.len());
        }

        let best_score = game_state
            .players
            .iter()
            .map(|player| player.score)
            .max()
            .unwrap_or(0);
        for (i, player) in game_state.players.iter().enumerate() {
            if player.score == best_score {
                wins[i] += 1;
            }
        }
        log::info!(
            "game {} over, scores {:?}",
            game_num,
            game_state
                .players
                .iter()
                .map(|player| player.score)
                .collect::<Vec<_>>()
        );
    }

    println!("\nwins (ties count for everyone): {:?}", wins);
    Ok(())
}
