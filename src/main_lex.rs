// Copyright (C) 2020-2026 Andy Kurnia.

use clap::{Parser, Subcommand};
use flexi_logger::Logger;
use wordgrid::{alphabet, error, lexicon};

#[derive(Parser, Debug)]
#[command(name = "lex", about = "Build and query word lexicons")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a newline-delimited word list into a .kwg file
    Build { words: String, kwg: String },
    /// Report whether each word is in the lexicon
    Check { lexicon: String, words: Vec<String> },
    /// List the lexicon words spelled by some of the letters ('_' or '?' is a blank)
    Arrange { lexicon: String, letters: String },
}

fn main() -> error::Returns<()> {
    let args = Args::parse();
    Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;
    let alphabet = &alphabet::ENGLISH_ALPHABET;
    match args.command {
        Command::Build { words, kwg } => {
            let lexicon = lexicon::Lexicon::load(alphabet, &words)?;
            let bytes = lexicon.to_kwg_bytes();
            std::fs::write(&kwg, &bytes)?;
            println!(
                "{}: {} words, {} bytes",
                kwg,
                lexicon.len(),
                bytes.len()
            );
        }
        Command::Check { lexicon, words } => {
            let lexicon = lexicon::Lexicon::load(alphabet, &lexicon)?;
            for word in &words {
                println!(
                    "{} {}",
                    word,
                    if lexicon.contains(word) { "valid" } else { "invalid" }
                );
            }
        }
        Command::Arrange { lexicon, letters } => {
            let lexicon = lexicon::Lexicon::load(alphabet, &lexicon)?;
            let Some(rack) = alphabet.parse_rack(&letters) else {
                wordgrid::return_error!(format!("invalid letters {:?}", letters));
            };
            let words = lexicon.arrangements(&rack);
            for word in &words {
                println!("{}", alphabet.fmt_word(word));
            }
            log::info!("{} words from {}", words.len(), letters);
        }
    }
    Ok(())
}
