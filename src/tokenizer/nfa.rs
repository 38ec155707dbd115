//! Thompson construction: small NFAs over `char` glued together with
//! `&` (concatenation), `|` (alternation) and [`NFA::closure`] (Kleene star).
//!
//! Vertex `0` is always the start and `vertex_num - 1` the end. Every
//! constructor keeps `edges` sorted by start vertex, which the closure
//! walks below rely on to stop early.

use std::collections::{HashMap, HashSet};
use std::ops::{BitAnd, BitOr, RangeInclusive};

#[derive(Debug, Clone, Copy)]
pub enum Condition {
    Epsilon,
    Symbol(char),
}

impl Condition {
    fn is_epsilon(&self) -> bool {
        matches!(self, Condition::Epsilon)
    }
    fn is_match(&self, symbol: char) -> bool {
        matches!(self, Condition::Symbol(s) if *s == symbol)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NFAEdge(pub u32, pub u32, pub Condition);

#[derive(Debug, Clone)]
pub struct NFA<AcceptEnum> {
    edges: Vec<NFAEdge>,
    vertex_num: u32,
    states: HashMap<u32, AcceptEnum>,
    symbol_set: HashSet<char>,
}

impl<Ac> NFA<Ac> {
    pub fn new(
        edges: Vec<NFAEdge>,
        vertex_num: u32,
        states: HashMap<u32, Ac>,
        symbol_set: HashSet<char>,
    ) -> NFA<Ac> {
        NFA { edges, vertex_num, states, symbol_set }
    }
    pub fn from_symbol(symbol: char) -> NFA<Ac> {
        let edges = vec![NFAEdge(0, 1, Condition::Symbol(symbol))];
        let symbol_set = HashSet::from([symbol]);
        NFA { edges, vertex_num: 2, states: HashMap::new(), symbol_set }
    }
    pub fn from_symbol_range(symbol_rng: RangeInclusive<char>) -> NFA<Ac> {
        Self::from_symbols(symbol_rng)
    }
    pub fn from_symbol_set(s: &str) -> NFA<Ac> {
        Self::from_symbols(s.chars())
    }
    // 0 -sym-> k -e-> end, one branch per symbol
    fn from_symbols(symbols: impl IntoIterator<Item = char>) -> NFA<Ac> {
        let mut edges = Vec::new();
        let mut symbol_set = HashSet::new();
        let mut vertex_num = 0;
        for symbol in symbols {
            vertex_num += 1;
            edges.push(NFAEdge(0, vertex_num, Condition::Symbol(symbol)));
            symbol_set.insert(symbol);
        }
        let end = vertex_num + 1;
        for vertex in 1..end {
            edges.push(NFAEdge(vertex, end, Condition::Epsilon));
        }
        NFA { edges, vertex_num: end + 1, states: HashMap::new(), symbol_set }
    }
    /// Marks the end vertex as accepting with `state`.
    pub fn set_state(&mut self, state: Ac) {
        self.states.clear();
        self.states.insert(self.vertex_num - 1, state);
    }
    pub fn e_closure_with_vertex(&self, vertex: u32) -> HashSet<u32> {
        self.e_closure(&HashSet::from([vertex]))
    }
    pub fn e_closure(&self, vertexs: &HashSet<u32>) -> HashSet<u32> {
        let mut result = HashSet::new();
        let mut stack: Vec<u32> = vertexs.iter().copied().collect();
        while let Some(current_vertex) = stack.pop() {
            if !result.insert(current_vertex) {
                continue;
            }
            for NFAEdge(start, end, condition) in &self.edges {
                if *start > current_vertex {
                    break;
                }
                if *start == current_vertex && condition.is_epsilon() && !result.contains(end) {
                    stack.push(*end);
                }
            }
        }
        result
    }
    pub fn move_set(&self, nfa_vertexs: &HashSet<u32>, symbol: char) -> HashSet<u32> {
        let mut targets = HashSet::new();
        for vertex in nfa_vertexs {
            for NFAEdge(start, end, condition) in &self.edges {
                if *start > *vertex {
                    break;
                }
                if *start == *vertex && condition.is_match(symbol) {
                    targets.insert(*end);
                }
            }
        }
        self.e_closure(&targets)
    }
    pub fn get_states(&self) -> &HashMap<u32, Ac> {
        &self.states
    }
    pub fn get_vertex_num(&self) -> u32 {
        self.vertex_num
    }
    pub fn symbol_set(&self) -> &HashSet<char> {
        &self.symbol_set
    }
    pub fn get_edges(&self) -> &Vec<NFAEdge> {
        &self.edges
    }
    /// Kleene star: zero or more repetitions.
    pub fn closure(mut self) -> NFA<Ac> {
        self.edges.insert(0, NFAEdge(0, self.vertex_num - 1, Condition::Epsilon));
        self.edges.push(NFAEdge(self.vertex_num - 1, 0, Condition::Epsilon));
        self
    }
}

impl<Ac: Copy> NFA<Ac> {
    pub fn get_state(&self, vertexs: &HashSet<u32>) -> Option<Ac> {
        vertexs.iter().find_map(|v| self.states.get(v).copied())
    }
    // carries an accepting state over to the end vertex of a combined NFA
    fn merged_states(self_states: &HashMap<u32, Ac>, rhs_states: &HashMap<u32, Ac>, new_end: u32) -> HashMap<u32, Ac> {
        self_states
            .values()
            .chain(rhs_states.values())
            .map(|state| (new_end, *state))
            .collect()
    }
}

impl<Ac: Copy> BitOr for NFA<Ac> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        let tvn = self.vertex_num;
        let ovn = rhs.vertex_num;

        let new_end = tvn + ovn + 1;
        let new_symbol_set = &self.symbol_set | &rhs.symbol_set;
        let new_states = Self::merged_states(&self.states, &rhs.states, new_end);

        //              -> self(1 .. tvn)          -> new_end
        // new_start(0)
        //              -> rhs(tvn + 1 .. tvn+ovn) -> new_end
        let mut edges = Vec::with_capacity(self.edges.len() + rhs.edges.len() + 4);
        edges.push(NFAEdge(0, 1, Condition::Epsilon));
        edges.push(NFAEdge(0, tvn + 1, Condition::Epsilon));
        edges.extend(self.edges.iter().map(|NFAEdge(s, e, c)| NFAEdge(s + 1, e + 1, *c)));
        edges.push(NFAEdge(tvn, new_end, Condition::Epsilon));
        edges.extend(rhs.edges.iter().map(|NFAEdge(s, e, c)| NFAEdge(s + tvn + 1, e + tvn + 1, *c)));
        edges.push(NFAEdge(ovn + tvn, new_end, Condition::Epsilon));

        NFA { edges, vertex_num: new_end + 1, states: new_states, symbol_set: new_symbol_set }
    }
}

impl<Ac: Copy> BitAnd for NFA<Ac> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        let tvn = self.vertex_num;
        let ovn = rhs.vertex_num;

        let new_end = tvn + ovn + 1;
        let new_symbol_set = &self.symbol_set | &rhs.symbol_set;
        let new_states = Self::merged_states(&self.states, &rhs.states, new_end);

        // new_start(0) -> self(1 .. tvn) -> rhs(tvn + 1 .. tvn+ovn) -> new_end
        let mut edges = Vec::with_capacity(self.edges.len() + rhs.edges.len() + 3);
        edges.push(NFAEdge(0, 1, Condition::Epsilon));
        edges.extend(self.edges.iter().map(|NFAEdge(s, e, c)| NFAEdge(s + 1, e + 1, *c)));
        edges.push(NFAEdge(tvn, tvn + 1, Condition::Epsilon));
        edges.extend(rhs.edges.iter().map(|NFAEdge(s, e, c)| NFAEdge(s + tvn + 1, e + tvn + 1, *c)));
        edges.push(NFAEdge(ovn + tvn, new_end, Condition::Epsilon));

        NFA { edges, vertex_num: new_end + 1, states: new_states, symbol_set: new_symbol_set }
    }
}

/// Joins token NFAs under a fresh start vertex, keeping each one's accepting state.
#[macro_export]
macro_rules! link_nfa {
    ($($nfa: expr), *) => {
        {
            use std::collections::{HashMap, HashSet};
            use $crate::tokenizer::nfa::*;
            let mut vertex_num = 1;
            let mut edges = Vec::new();
            let mut symbol_set = HashSet::new();
            let mut states = HashMap::new();
            let mut vertex_num_epsilon = 1;
            $(
                edges.push(NFAEdge(0, vertex_num_epsilon, Condition::Epsilon));
                vertex_num_epsilon += $nfa.get_vertex_num();
            )*
            let _ = vertex_num_epsilon;
            $(
                let current_vertex = vertex_num;
                for NFAEdge(start, end, condition) in $nfa.get_edges() {
                    edges.push(NFAEdge(*start + current_vertex, *end + current_vertex, *condition));
                }
                vertex_num += $nfa.get_vertex_num();
                symbol_set = &symbol_set | $nfa.symbol_set();
                $nfa.get_states().iter().for_each(|(v, s)| { states.insert(v + current_vertex, *s); } );
            )*
            NFA::new(edges, vertex_num, states, symbol_set)
        }
    };
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use crate::tokenizer::nfa::NFA;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Token {
        Num,
        Op,
    }

    #[test]
    fn test_or() {
        let mut nfa = NFA::from_symbol('1') | NFA::from_symbol('2');
        nfa.set_state(Token::Num);
        let start = nfa.e_closure_with_vertex(0);
        assert_eq!(nfa.get_state(&nfa.move_set(&start, '1')), Some(Token::Num));
        assert_eq!(nfa.get_state(&nfa.move_set(&start, '2')), Some(Token::Num));
        assert!(nfa.move_set(&start, '3').is_empty());
    }

    #[test]
    fn test_and() {
        let mut nfa = NFA::from_symbol('1') & NFA::from_symbol('2');
        nfa.set_state(Token::Num);
        let start = nfa.e_closure_with_vertex(0);
        let after_one = nfa.move_set(&start, '1');
        assert_eq!(nfa.get_state(&after_one), None);
        assert_eq!(nfa.get_state(&nfa.move_set(&after_one, '2')), Some(Token::Num));
    }

    #[test]
    fn test_link() {
        let mut num = NFA::from_symbol_range('0'..='9');
        num.set_state(Token::Num);
        let mut op = NFA::from_symbol_set("+*");
        op.set_state(Token::Op);
        let nfa = link_nfa!(num, op);
        let start = nfa.e_closure_with_vertex(0);
        assert_eq!(nfa.get_state(&nfa.move_set(&start, '7')), Some(Token::Num));
        assert_eq!(nfa.get_state(&nfa.move_set(&start, '*')), Some(Token::Op));
        assert_eq!(nfa.symbol_set().len(), 12);
    }

    #[test]
    fn test_e_closure() {
        //
        // 0 -> 1 - 'a' -> 2 -> 3 - 'b' -> 4 -> 5
        //              <-
        let nfa = (NFA::<Token>::from_symbol('a') & NFA::from_symbol('b')).closure();
        assert_eq!(nfa.e_closure_with_vertex(0), HashSet::from([0, 1, 5]));
        assert_eq!(nfa.e_closure_with_vertex(2), HashSet::from([2, 3]));
        assert_eq!(nfa.e_closure_with_vertex(4), HashSet::from([4, 5, 0, 1]));
    }
}
