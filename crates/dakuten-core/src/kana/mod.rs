//! Bidirectional kana ↔ voiced/semi-voiced lookup tables.
//!
//! Each [`Voicing`] owns one [`KanaTable`]: a forward map from a bare kana to
//! its precomposed form and the exact reverse. Tables are built once from the
//! static pairs in `table.rs` and shared process-wide.

mod table;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use table::{DAKUON_PAIRS, HANDAKUON_PAIRS};

/// Which diacritic a conversion applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voicing {
    /// Dakuten (゛), e.g. か → が.
    Dakuon,
    /// Handakuten (゜), e.g. は → ぱ.
    Handakuon,
}

impl Voicing {
    /// Lookup order used when decomposing: dakuon first.
    pub const ALL: [Voicing; 2] = [Voicing::Dakuon, Voicing::Handakuon];

    pub fn table(self) -> &'static KanaTable {
        static DAKUON: OnceLock<KanaTable> = OnceLock::new();
        static HANDAKUON: OnceLock<KanaTable> = OnceLock::new();
        match self {
            Voicing::Dakuon => DAKUON.get_or_init(|| KanaTable::build(self, DAKUON_PAIRS)),
            Voicing::Handakuon => {
                HANDAKUON.get_or_init(|| KanaTable::build(self, HANDAKUON_PAIRS))
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Voicing::Dakuon => "dakuon",
            Voicing::Handakuon => "handakuon",
        }
    }
}

impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct KanaTable {
    pairs: &'static [(char, char)],
    forward: HashMap<char, char>,
    reverse: HashMap<char, char>,
}

impl KanaTable {
    fn build(voicing: Voicing, pairs: &'static [(char, char)]) -> Self {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut reverse = HashMap::with_capacity(pairs.len());
        for &(base, marked) in pairs {
            let dup_base = forward.insert(base, marked);
            let dup_marked = reverse.insert(marked, base);
            debug_assert!(dup_base.is_none(), "duplicate base {base:?} in {voicing}");
            debug_assert!(dup_marked.is_none(), "duplicate form {marked:?} in {voicing}");
        }
        debug!(%voicing, entries = pairs.len(), "kana table built");
        KanaTable {
            pairs,
            forward,
            reverse,
        }
    }

    /// Precomposed form of a bare kana, if it has one in this table.
    pub fn forward(&self, base: char) -> Option<char> {
        self.forward.get(&base).copied()
    }

    /// Bare kana behind a precomposed form, if `c` is one in this table.
    pub fn reverse(&self, c: char) -> Option<char> {
        self.reverse.get(&c).copied()
    }

    /// (base, precomposed) pairs in authoring order.
    pub fn pairs(&self) -> &'static [(char, char)] {
        self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Strip any precomposed voicing from `c`, checking dakuon before handakuon.
pub fn decompose(c: char) -> char {
    Voicing::ALL
        .iter()
        .find_map(|v| v.table().reverse(c))
        .unwrap_or(c)
}
