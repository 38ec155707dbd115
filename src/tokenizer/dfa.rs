use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use tracing::trace;

use super::{nfa::NFA, token::{Token, TokenType}};
use crate::error::CalcError;

// NFA vertex sets keyed in a stable order so equal sets hash equally
type VertexSet = BTreeSet<u32>;

/// Lexer automaton built from an [`NFA`] by subset construction.
/// Vertex `0` is the start.
#[derive(Debug)]
pub struct DFA<AcceptEnum> {
    edges: HashMap<(u32, char), u32>,
    states: HashMap<u32, AcceptEnum>,
}

impl<Ac: Copy> DFA<Ac> {
    fn next(&self, vertex: u32, symbol: char) -> Option<u32> {
        self.edges.get(&(vertex, symbol)).copied()
    }
    /// The accepting state for the whole of `words`, if any.
    #[cfg(test)]
    pub fn match_one(&self, words: &str) -> Option<Ac> {
        let mut current_vertex = 0;
        for symbol in words.chars() {
            current_vertex = self.next(current_vertex, symbol)?;
        }
        self.states.get(&current_vertex).copied()
    }
    pub fn subset_construct(nfa: &NFA<Ac>) -> Self {
        let mut dfa_edges = HashMap::new();
        let mut dfa_states = HashMap::new();

        let init: VertexSet = nfa.e_closure_with_vertex(0).into_iter().collect();
        if let Some(state) = nfa.get_state(&init.iter().copied().collect()) {
            dfa_states.insert(0, state);
        }
        let mut nfa_vertex_sets = vec![init.clone()];
        let mut table = HashMap::from([(init, 0_u32)]);

        let mut unmarked_pos = 0;
        while unmarked_pos < nfa_vertex_sets.len() {
            let current: HashSet<u32> = nfa_vertex_sets[unmarked_pos].iter().copied().collect();
            let start = unmarked_pos as u32;
            for symbol in nfa.symbol_set() {
                let moved = nfa.move_set(&current, *symbol);
                if moved.is_empty() {
                    continue;
                }
                let key: VertexSet = moved.iter().copied().collect();
                let end = match table.get(&key) {
                    Some(&dfa_vertex) => dfa_vertex,
                    None => {
                        let dfa_vertex = nfa_vertex_sets.len() as u32;
                        if let Some(state) = nfa.get_state(&moved) {
                            dfa_states.insert(dfa_vertex, state);
                        }
                        table.insert(key.clone(), dfa_vertex);
                        nfa_vertex_sets.push(key);
                        dfa_vertex
                    }
                };
                dfa_edges.insert((start, *symbol), end);
            }
            unmarked_pos += 1;
        }
        DFA { edges: dfa_edges, states: dfa_states }
    }
}

impl<Ac: TokenType + std::fmt::Debug> DFA<Ac> {
    /// Splits `origin` into tokens by longest match, dropping ignored ones.
    pub fn tokenize(&self, origin: &str) -> Result<VecDeque<Token<Ac>>, CalcError> {
        let mut result = VecDeque::new();
        let mut current_vertex = 0;
        let mut val = String::new();
        let mut token_pos = 0;
        let chars = origin.chars().collect::<Vec<_>>();
        let mut current_pos = 0;
        while current_pos < chars.len() {
            let symbol = chars[current_pos];
            if let Some(next) = self.next(current_vertex, symbol) {
                val.push(symbol);
                current_vertex = next;
                current_pos += 1;
                continue;
            }
            // no move: emit what we have and restart on the same symbol
            match self.states.get(&current_vertex) {
                Some(ac) if current_vertex != 0 => {
                    if !ac.is_ignored() {
                        result.push_back(Token::new(std::mem::take(&mut val), *ac, token_pos));
                    } else {
                        val.clear();
                    }
                    current_vertex = 0;
                    token_pos = current_pos;
                }
                _ => return Err(CalcError::UnexpectedSymbol { symbol, position: current_pos }),
            }
        }
        if current_vertex != 0 {
            match self.states.get(&current_vertex) {
                Some(ac) => {
                    if !ac.is_ignored() {
                        result.push_back(Token::new(val, *ac, token_pos));
                    }
                }
                None => return Err(CalcError::UnexpectedEnd),
            }
        }
        trace!(tokens = ?result, "tokenized");
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use crate::link_nfa;
    use crate::tokenizer::nfa::NFA;
    use crate::tokenizer::dfa::DFA;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Token {
        Num,
        Alp,
    }

    #[test]
    fn test_match() {
        let digit = NFA::from_symbol_range('0'..='9');
        let dot = NFA::from_symbol('.');
        let float = (digit.clone() & dot) & digit.clone().closure();
        let no_zero = NFA::from_symbol_range('1'..='9');
        let int = no_zero & digit.clone().closure();
        let mut num = float | int;
        num.set_state(Token::Num);

        let alp_upcase = NFA::from_symbol_range('A'..='Z');
        let alp_downcase = NFA::from_symbol_range('a'..='z');
        let mut alp_nfa = (alp_upcase | alp_downcase).closure();
        alp_nfa.set_state(Token::Alp);

        let tokenizer_nfa = link_nfa!(num, alp_nfa);

        let tokenizer = DFA::subset_construct(&tokenizer_nfa);
        assert_eq!(tokenizer.match_one("edqdsafwSWfwf"), Some(Token::Alp));
        assert_eq!(tokenizer.match_one("120"), Some(Token::Num));
        assert_eq!(tokenizer.match_one("1.25"), Some(Token::Num));
        assert_eq!(tokenizer.match_one("012"), None);
        assert_eq!(tokenizer.match_one("12a"), None);
    }
}
