//! The twenty-two paths between sephiroth.
//!
//! Paths are numbered 11 through 32 and each carries a Hebrew letter. A
//! path's value is derived only from its two endpoint values.

use anka_math::{SpecialPolicy, reduce_digit};
use tracing::debug;

use crate::sephirah::Sephirah::{self, *};
use crate::sephirah::SephirothValues;

/// Number of paths.
pub const PATH_COUNT: usize = 22;

/// Number of the first path.
pub const FIRST_PATH: u8 = 11;

/// Fixed catalogue entry for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathDef {
    pub number: u8,
    pub letter: &'static str,
    pub from: Sephirah,
    pub to: Sephirah,
}

const fn def(number: u8, letter: &'static str, from: Sephirah, to: Sephirah) -> PathDef {
    PathDef {
        number,
        letter,
        from,
        to,
    }
}

/// All paths in numeric order.
pub const PATHS: [PathDef; PATH_COUNT] = [
    def(11, "Aleph", Kether, Chokmah),
    def(12, "Beth", Kether, Binah),
    def(13, "Gimel", Kether, Tiphareth),
    def(14, "Daleth", Chokmah, Binah),
    def(15, "Heh", Chokmah, Tiphareth),
    def(16, "Vav", Chokmah, Chesed),
    def(17, "Zayin", Binah, Tiphareth),
    def(18, "Cheth", Binah, Geburah),
    def(19, "Teth", Chesed, Geburah),
    def(20, "Yod", Chesed, Tiphareth),
    def(21, "Kaph", Chesed, Netzach),
    def(22, "Lamed", Geburah, Tiphareth),
    def(23, "Mem", Geburah, Hod),
    def(24, "Nun", Tiphareth, Netzach),
    def(25, "Samekh", Tiphareth, Yesod),
    def(26, "Ayin", Tiphareth, Hod),
    def(27, "Peh", Netzach, Hod),
    def(28, "Tzaddi", Netzach, Yesod),
    def(29, "Qoph", Netzach, Malkuth),
    def(30, "Resh", Hod, Yesod),
    def(31, "Shin", Hod, Malkuth),
    def(32, "Tav", Yesod, Malkuth),
];

impl PathDef {
    /// Look up a path by its number (11..=32).
    pub fn by_number(number: u8) -> Option<&'static PathDef> {
        let i = number.checked_sub(FIRST_PATH)? as usize;
        PATHS.get(i)
    }

    /// Value of this path: `reduce(from + to)` with masters collapsed.
    pub fn evaluate(&self, nodes: &SephirothValues) -> TreePath {
        let sum = nodes.get(self.from) + nodes.get(self.to);
        TreePath {
            def: *self,
            value: reduce_digit(sum, SpecialPolicy::Collapse),
        }
    }
}

/// A path and its computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreePath {
    pub def: PathDef,
    pub value: u32,
}

impl TreePath {
    pub const fn number(&self) -> u8 {
        self.def.number
    }

    pub const fn letter(&self) -> &'static str {
        self.def.letter
    }
}

/// Evaluate every path against the node values.
pub fn compute_paths(nodes: &SephirothValues) -> [TreePath; PATH_COUNT] {
    PATHS.map(|d| d.evaluate(nodes))
}

/// The `n` highest-valued paths.
///
/// Sorted by value descending, then by path number ascending. `n` larger
/// than the catalogue returns every path.
pub fn significant_paths(paths: &[TreePath], n: usize) -> Vec<TreePath> {
    if n > paths.len() {
        debug!(requested = n, available = paths.len(), "clamping significant path count");
    }
    let mut ranked = paths.to_vec();
    ranked.sort_by(|a, b| b.value.cmp(&a.value).then(a.number().cmp(&b.number())));
    ranked.truncate(n);
    ranked
}
