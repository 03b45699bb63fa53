// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, build, error, kwg};

// Read-only word list, safe to share between games and threads.
pub struct Lexicon<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    kwg: kwg::Kwg,
    num_words: u32,
}

impl<'a> Lexicon<'a> {
    pub fn from_kwg(alphabet: &'a alphabet::Alphabet<'a>, kwg: kwg::Kwg) -> Self {
        let num_words = kwg.count_words();
        Self {
            alphabet,
            kwg,
            num_words,
        }
    }

    // Blank lines are skipped. Anything other than A-Z (either case) is an error.
    pub fn from_words<I: IntoIterator<Item = S>, S: AsRef<str>>(
        alphabet: &'a alphabet::Alphabet<'a>,
        words: I,
    ) -> error::Returns<Self> {
        let mut machine_words = Vec::new();
        for (line_num, word) in (1..).zip(words) {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            match alphabet.word_tiles(word) {
                Some(tiles) => machine_words.push(tiles),
                None => {
                    return_error!(format!("invalid word {:?} at line {}", word, line_num));
                }
            }
        }
        machine_words.sort_unstable();
        machine_words.dedup();
        let kwg = kwg::Kwg::from_bytes_alloc(&build::build_dawg(&machine_words)?)?;
        Ok(Self::from_kwg(alphabet, kwg))
    }

    pub fn from_text(alphabet: &'a alphabet::Alphabet<'a>, text: &str) -> error::Returns<Self> {
        Self::from_words(alphabet, text.lines())
    }

    pub fn from_kwg_bytes(
        alphabet: &'a alphabet::Alphabet<'a>,
        buf: &[u8],
    ) -> error::Returns<Self> {
        Ok(Self::from_kwg(alphabet, kwg::Kwg::from_bytes_alloc(buf)?))
    }

    pub fn to_kwg_bytes(&self) -> Vec<u8> {
        self.kwg.to_bytes()
    }

    // "*.kwg" is a prebuilt lexicon, anything else is a word list.
    pub fn load<P: AsRef<std::path::Path>>(
        alphabet: &'a alphabet::Alphabet<'a>,
        path: P,
    ) -> error::Returns<Self> {
        let path = path.as_ref();
        let t0 = std::time::Instant::now();
        let lexicon = if path.extension().is_some_and(|ext| ext == "kwg") {
            Self::from_kwg_bytes(alphabet, &std::fs::read(path)?)?
        } else {
            Self::from_text(alphabet, &std::fs::read_to_string(path)?)?
        };
        log::info!(
            "loaded {} words from {} in {:?}",
            lexicon.len(),
            path.display(),
            t0.elapsed()
        );
        Ok(lexicon)
    }

    #[inline(always)]
    pub fn alphabet(&self) -> &'a alphabet::Alphabet<'a> {
        self.alphabet
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_words as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    pub fn contains(&self, word: &str) -> bool {
        match self.alphabet.word_tiles(word) {
            Some(tiles) => self.contains_tiles(&tiles),
            None => false,
        }
    }

    #[inline(always)]
    pub fn contains_tiles(&self, word: &[u8]) -> bool {
        self.kwg.accepts_word(word)
    }

    // Distinct words of length >= 2 that can be spelled from the rack, in the
    // order a depth-first permutation walk over the rack first reaches them.
    // Branches with no word below them are skipped. Blanks never match.
    pub fn arrangements(&self, rack: &[u8]) -> Vec<Box<[u8]>> {
        struct Env<'a> {
            kwg: &'a kwg::Kwg,
            rack: &'a [u8],
            used: Vec<bool>,
            word: Vec<u8>,
            found: Vec<Box<[u8]>>,
        }

        fn iter(env: &mut Env, p: i32) {
            if env.word.len() >= 2 && env.kwg[p].accepts() {
                env.found.push(env.word.clone().into_boxed_slice());
            }
            // a repeated tile at the same depth would only repeat words.
            let mut tried = 0u64;
            for i in 0..env.rack.len() {
                let tile = env.rack[i];
                if env.used[i] || tried & (1 << tile) != 0 {
                    continue;
                }
                tried |= 1 << tile;
                let q = env.kwg.seek(p, tile);
                if q <= 0 {
                    continue;
                }
                env.used[i] = true;
                env.word.push(tile);
                iter(env, q);
                env.word.pop();
                env.used[i] = false;
            }
        }

        let mut env = Env {
            kwg: &self.kwg,
            rack,
            used: vec![false; rack.len()],
            word: Vec::with_capacity(rack.len()),
            found: Vec::new(),
        };
        iter(&mut env, 0);
        env.found
    }
}
