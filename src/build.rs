// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, fash};

// Unconfirmed entries.
struct Transition {
    tile: u8,
    accepts: bool,
    arc_index: u32, // Refers to states.
}

struct TransitionStack<'a> {
    transitions: &'a mut Vec<Transition>,
    indexes: &'a mut Vec<usize>,
}

impl TransitionStack<'_> {
    fn push(&mut self, tile: u8) {
        self.transitions.push(Transition {
            tile,
            accepts: false,
            arc_index: 0, // Filled up later.
        });
        self.indexes.push(self.transitions.len());
    }

    fn pop(&mut self, state_maker: &mut StateMaker) {
        if let Some(start_of_batch) = self.indexes.pop() {
            let new_arc_index = state_maker.make_state(&self.transitions[start_of_batch..]);
            self.transitions[start_of_batch - 1].arc_index = new_arc_index;
            self.transitions.truncate(start_of_batch);
        }
    }
}

// Deduplicated entries. Equal suffixes share one state.
#[derive(Clone, Eq, Hash, PartialEq)]
struct State {
    tile: u8,
    accepts: bool,
    arc_index: u32,  // Refers to states.
    next_index: u32, // Refers to states.
}

struct StateMaker<'a> {
    states: &'a mut Vec<State>,
    states_finder: &'a mut fash::MyHashMap<State, u32>,
}

impl StateMaker<'_> {
    fn make_state(&mut self, node_transitions: &[Transition]) -> u32 {
        let mut ret = 0;
        for node_transition in node_transitions.iter().rev() {
            let state = State {
                tile: node_transition.tile,
                accepts: node_transition.accepts,
                arc_index: node_transition.arc_index,
                next_index: ret,
            };
            use std::collections::hash_map::Entry::{Occupied, Vacant};
            match self.states_finder.entry(state) {
                Occupied(entry) => {
                    ret = *entry.get();
                }
                Vacant(entry) => {
                    ret = self.states.len() as u32;
                    self.states.push(entry.key().clone());
                    entry.insert(ret);
                }
            }
        }
        ret
    }

    // sorted_machine_words must be sorted and deduplicated.
    fn make_dawg(&mut self, sorted_machine_words: &[Box<[u8]>]) -> u32 {
        let mut transition_stack = TransitionStack {
            transitions: &mut Vec::new(),
            indexes: &mut Vec::new(),
        };
        for machine_word_index in 0..sorted_machine_words.len() {
            let this_word = &sorted_machine_words[machine_word_index];
            let this_word_len = this_word.len();
            let mut prefix_len = 0;
            if machine_word_index > 0 {
                let prev_word = &sorted_machine_words[machine_word_index - 1];
                let prev_word_len = transition_stack.indexes.len();
                let min_word_len = std::cmp::min(this_word_len, prev_word_len);
                while prefix_len < min_word_len && prev_word[prefix_len] == this_word[prefix_len] {
                    prefix_len += 1;
                }
                for _ in prefix_len..prev_word_len {
                    transition_stack.pop(self);
                }
            }
            for &tile in &this_word[prefix_len..this_word_len] {
                transition_stack.push(tile);
            }
            let transitions_len = transition_stack.transitions.len();
            transition_stack.transitions[transitions_len - 1].accepts = true;
        }
        for _ in 0..transition_stack.indexes.len() {
            transition_stack.pop(self);
        }
        self.make_state(&transition_stack.transitions[..])
    }
}

// zero-cost type-safety
struct IsEnd(bool);
struct Accepts(bool);

struct StatesDefragger<'a> {
    states: &'a [State],
    prev_indexes: &'a [u32],
    destination: &'a mut Vec<u32>,
    num_written: u32,
}

impl StatesDefragger<'_> {
    // lay out each sibling list contiguously, depth-first.
    fn defrag(&mut self, mut p: u32) {
        loop {
            let prev = self.prev_indexes[p as usize];
            if prev == 0 {
                break;
            }
            p = prev;
        }
        if self.destination[p as usize] != 0 {
            return;
        }
        // temp value to break self-cycles.
        self.destination[p as usize] = !0;
        let mut write_p = p;
        let mut num = 0u32;
        loop {
            num += 1;
            let a = self.states[p as usize].arc_index;
            if a != 0 {
                self.defrag(a);
            }
            p = self.states[p as usize].next_index;
            if p == 0 {
                break;
            }
        }
        for ofs in 0..num {
            self.destination[write_p as usize] = self.num_written + ofs;
            write_p = self.states[write_p as usize].next_index;
        }
        self.num_written += num;
    }

    fn write_node(
        &self,
        out: &mut [u8],
        arc_index: u32,
        is_end: IsEnd,
        accepts: Accepts,
        tile: u8,
    ) {
        let defragged_arc_index = self.destination[arc_index as usize];
        out[0] = defragged_arc_index as u8;
        out[1] = (defragged_arc_index >> 8) as u8;
        out[2] = ((defragged_arc_index >> 16) & 0x3f
            | if is_end.0 { 0x40 } else { 0 }
            | if accepts.0 { 0x80 } else { 0 }) as u8;
        out[3] = tile;
    }

    fn to_vec(&self, dawg_start_state: u32) -> Vec<u8> {
        let mut ret = vec![0; (self.num_written as usize) << 2];
        self.write_node(
            &mut ret[0..],
            dawg_start_state,
            IsEnd(true),
            Accepts(false),
            0,
        );
        for mut p in 1..self.states.len() {
            if self.prev_indexes[p] != 0 {
                continue;
            }
            let mut dp = self.destination[p] as usize;
            if dp == 0 {
                continue;
            }
            dp <<= 2;
            loop {
                let np = self.states[p].next_index;
                self.write_node(
                    &mut ret[dp..],
                    self.states[p].arc_index,
                    IsEnd(np == 0),
                    Accepts(self.states[p].accepts),
                    self.states[p].tile,
                );
                if np == 0 {
                    break;
                }
                p = np as usize;
                dp += 4;
            }
        }
        ret
    }
}

fn gen_prev_indexes(states: &[State]) -> Vec<u32> {
    let states_len = states.len();
    let mut prev_indexes = vec![0u32; states_len];
    for p in (1..states_len).rev() {
        prev_indexes[states[p].next_index as usize] = p as u32;
    }
    // prev_indexes[0] is garbage, does not matter.

    prev_indexes
}

// Builds the kwg bytes of a dawg. Node 0 points to the root sibling list.
pub fn build_dawg(sorted_machine_words: &[Box<[u8]>]) -> error::Returns<Vec<u8>> {
    // The sink state always exists.
    let mut states = vec![State {
        tile: 0,
        accepts: false,
        arc_index: 0,
        next_index: 0,
    }];

    let mut states_finder = fash::MyHashMap::default();
    states_finder.insert(states[0].clone(), 0);

    let mut state_maker = StateMaker {
        states: &mut states,
        states_finder: &mut states_finder,
    };
    let dawg_start_state = state_maker.make_dawg(sorted_machine_words);

    let prev_indexes = gen_prev_indexes(&states);
    let mut states_defragger = StatesDefragger {
        states: &states,
        prev_indexes: &prev_indexes,
        destination: &mut vec![0u32; states.len()],
        num_written: 1, // Convention: [0] points to the dawg.
    };
    states_defragger.destination[0] = !0; // useful for empty lexicon
    if dawg_start_state != 0 {
        states_defragger.defrag(dawg_start_state);
    }
    states_defragger.destination[0] = 0; // useful for empty lexicon

    if states_defragger.num_written > 0x400000 {
        // the format can only have 0x400000 elements, each has 4 bytes
        return_error!(format!(
            "this format cannot have {} nodes",
            states_defragger.num_written
        ));
    }

    Ok(states_defragger.to_vec(dawg_start_state))
}
