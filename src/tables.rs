// This is a part of textcode.
// Copyright (c) 2026, the textcode developers.
// See README.md and LICENSE.txt for details.

/*!
 * Shared code point tables.
 *
 * Each double-byte character set is a `PairTable`: an immutable mapping
 * from a 94×94 pointer (`(row - 1) * 94 + (cell - 1)`) to a single UTF-16
 * unit, a surrogate pair, or a base+mark composite. Tables are expanded
 * from the static run/single lists in the `textcode-index-*` crates once
 * per process and shared read-only between all codec instances; lookups
 * are total functions with `Mapped::Unmapped` as the sentinel.
 *
 * Duplicate pointers in the static data indicate a corrupt index crate,
 * which is a build defect rather than bad input; construction panics.
 */

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::util;
use textcode_index_japanese as japanese;
use textcode_index_korean as korean;
use textcode_index_simpchinese as simpchinese;
use textcode_index_tradchinese as tradchinese;

/// The target of a pointer lookup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mapped {
    /// No assignment for this pointer.
    Unmapped,
    /// A single UTF-16 unit.
    One(u16),
    /// A surrogate pair for a supplementary-plane code point.
    Pair(u16, u16),
    /// A base character plus a combining mark.
    Composite(u16, u16),
}

/// An immutable pointer ↔ code point table for one 94×94 character set.
pub struct PairTable {
    name: &'static str,
    forward: FxHashMap<u16, Mapped>,
    back_one: FxHashMap<u16, u16>,
    back_wide: FxHashMap<u32, u16>,
    back_comp: FxHashMap<(u16, u16), u16>,
    comp_bases: FxHashSet<u16>,
}

impl PairTable {
    fn new(name: &'static str) -> PairTable {
        PairTable {
            name,
            forward: FxHashMap::default(),
            back_one: FxHashMap::default(),
            back_wide: FxHashMap::default(),
            back_comp: FxHashMap::default(),
            comp_bases: FxHashSet::default(),
        }
    }

    fn insert(&mut self, ptr: u16, mapped: Mapped) {
        if self.forward.insert(ptr, mapped).is_some() {
            panic!("duplicate pointer {:#x} in index data for {}", ptr, self.name);
        }
        match mapped {
            Mapped::Unmapped => unreachable!(),
            Mapped::One(unit) => {
                self.back_one.entry(unit).or_insert(ptr);
            }
            Mapped::Pair(hi, lo) => {
                self.back_wide.entry(util::combine_surrogates(hi, lo)).or_insert(ptr);
            }
            Mapped::Composite(base, mark) => {
                self.back_comp.entry((base, mark)).or_insert(ptr);
                self.comp_bases.insert(base);
            }
        }
    }

    fn insert_code_point(&mut self, ptr: u16, cp: u32) {
        if cp > 0xFFFF {
            let (hi, lo) = util::split_supplementary(cp);
            self.insert(ptr, Mapped::Pair(hi, lo));
        } else {
            self.insert(ptr, Mapped::One(cp as u16));
        }
    }

    fn add_runs(&mut self, runs: &[(u16, u16, u32)]) {
        for &(ptr, len, first) in runs {
            for i in 0..len {
                self.insert_code_point(ptr + i, first + i as u32);
            }
        }
    }

    fn add_singles(&mut self, singles: &[(u16, u32)]) {
        for &(ptr, cp) in singles {
            self.insert_code_point(ptr, cp);
        }
    }

    fn add_composites(&mut self, composites: &[(u16, u16, u16)]) {
        for &(ptr, base, mark) in composites {
            self.insert(ptr, Mapped::Composite(base, mark));
        }
    }

    fn finish(self) -> PairTable {
        log::trace!("built table {} ({} pointers)", self.name, self.forward.len());
        self
    }

    /// Looks up a pointer. Total; unassigned pointers yield `Unmapped`.
    pub fn forward(&self, ptr: u16) -> Mapped {
        self.forward.get(&ptr).copied().unwrap_or(Mapped::Unmapped)
    }

    /// The pointer encoding a single BMP unit, if any.
    pub fn backward(&self, unit: u16) -> Option<u16> {
        self.back_one.get(&unit).copied()
    }

    /// The pointer encoding a supplementary-plane code point, if any.
    pub fn backward_wide(&self, cp: u32) -> Option<u16> {
        self.back_wide.get(&cp).copied()
    }

    /// The pointer encoding a base+mark composite, if any.
    pub fn backward_composite(&self, base: u16, mark: u16) -> Option<u16> {
        self.back_comp.get(&(base, mark)).copied()
    }

    /// True when `unit` opens at least one composite sequence, i.e. an
    /// encoder must hold it back and inspect the following character.
    pub fn is_composite_base(&self, unit: u16) -> bool {
        self.comp_bases.contains(&unit)
    }

    /// All assigned pointers and their targets, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (u16, Mapped)> + '_ {
        self.forward.iter().map(|(&p, &m)| (p, m))
    }
}

pub fn jis0208() -> &'static PairTable {
    static TABLE: Lazy<PairTable> = Lazy::new(|| {
        let mut t = PairTable::new("jis0208");
        t.add_runs(japanese::jis0208::RUNS);
        t.add_singles(japanese::jis0208::SINGLES);
        t.finish()
    });
    &TABLE
}

pub fn jis0212() -> &'static PairTable {
    static TABLE: Lazy<PairTable> = Lazy::new(|| {
        let mut t = PairTable::new("jis0212");
        t.add_runs(japanese::jis0212::RUNS);
        t.add_singles(japanese::jis0212::SINGLES);
        t.finish()
    });
    &TABLE
}

/// JIS X 0213 plane 1, layered over the JIS X 0208 assignments.
pub fn jis0213_plane1() -> &'static PairTable {
    static TABLE: Lazy<PairTable> = Lazy::new(|| {
        let mut t = PairTable::new("jis0213-plane1");
        t.add_runs(japanese::jis0208::RUNS);
        t.add_singles(japanese::jis0208::SINGLES);
        t.add_singles(japanese::jis0213::P1_SINGLES);
        t.add_singles(japanese::jis0213::P1_WIDE);
        t.add_composites(japanese::jis0213::P1_COMPOSITES);
        t.finish()
    });
    &TABLE
}

pub fn jis0213_plane2() -> &'static PairTable {
    static TABLE: Lazy<PairTable> = Lazy::new(|| {
        let mut t = PairTable::new("jis0213-plane2");
        t.add_runs(japanese::jis0213::P2_RUNS);
        t.add_singles(japanese::jis0213::P2_SINGLES);
        t.add_singles(japanese::jis0213::P2_WIDE);
        t.finish()
    });
    &TABLE
}

pub fn gb2312() -> &'static PairTable {
    static TABLE: Lazy<PairTable> = Lazy::new(|| {
        let mut t = PairTable::new("gb2312");
        t.add_runs(simpchinese::gb2312::RUNS);
        t.add_singles(simpchinese::gb2312::SINGLES);
        t.finish()
    });
    &TABLE
}

pub fn ksc5601() -> &'static PairTable {
    static TABLE: Lazy<PairTable> = Lazy::new(|| {
        let mut t = PairTable::new("ksc5601");
        t.add_runs(korean::ksc5601::RUNS);
        t.add_singles(korean::ksc5601::SINGLES);
        t.finish()
    });
    &TABLE
}

pub fn cns11643_plane1() -> &'static PairTable {
    static TABLE: Lazy<PairTable> = Lazy::new(|| {
        let mut t = PairTable::new("cns11643-plane1");
        t.add_runs(tradchinese::cns11643::P1_RUNS);
        t.add_singles(tradchinese::cns11643::P1_SINGLES);
        t.finish()
    });
    &TABLE
}

pub fn cns11643_plane2() -> &'static PairTable {
    static TABLE: Lazy<PairTable> = Lazy::new(|| {
        let mut t = PairTable::new("cns11643-plane2");
        t.add_runs(tradchinese::cns11643::P2_RUNS);
        t.add_singles(tradchinese::cns11643::P2_SINGLES);
        t.finish()
    });
    &TABLE
}

pub fn cns11643_plane3() -> &'static PairTable {
    static TABLE: Lazy<PairTable> = Lazy::new(|| {
        let mut t = PairTable::new("cns11643-plane3");
        t.add_runs(tradchinese::cns11643::P3_RUNS);
        t.add_singles(tradchinese::cns11643::P3_SINGLES);
        t.finish()
    });
    &TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> Vec<&'static PairTable> {
        vec![
            jis0208(),
            jis0212(),
            jis0213_plane1(),
            jis0213_plane2(),
            gb2312(),
            ksc5601(),
            cns11643_plane1(),
            cns11643_plane2(),
            cns11643_plane3(),
        ]
    }

    #[test]
    fn test_tables_build() {
        for table in all_tables() {
            // touching `entries` forces full construction
            let _ = table.entries().count();
        }
    }

    #[test]
    fn test_forward_backward_agree() {
        for table in all_tables() {
            for (ptr, mapped) in table.entries() {
                match mapped {
                    Mapped::Unmapped => unreachable!(),
                    Mapped::One(unit) => {
                        assert_eq!(table.forward(table.backward(unit).unwrap()), Mapped::One(unit));
                    }
                    Mapped::Pair(hi, lo) => {
                        let cp = crate::util::combine_surrogates(hi, lo);
                        assert_eq!(table.backward_wide(cp), Some(ptr));
                    }
                    Mapped::Composite(base, mark) => {
                        assert_eq!(table.backward_composite(base, mark), Some(ptr));
                        assert!(table.is_composite_base(base));
                    }
                }
            }
        }
    }

    #[test]
    fn test_jis0208_spot_checks() {
        let t = jis0208();
        assert_eq!(t.forward(283), Mapped::One(0x3042)); // row 4 cell 2
        assert_eq!(t.forward(3569), Mapped::One(0x65E5)); // row 38 cell 92
        assert_eq!(t.backward(0x672C), Some(4007)); // row 43 cell 60
        assert_eq!(t.forward(94 * 94 - 1), Mapped::Unmapped);
    }

    #[test]
    fn test_jis0213_extends_0208() {
        let t = jis0213_plane1();
        assert_eq!(t.forward(283), Mapped::One(0x3042));
        assert_eq!(t.forward(368), Mapped::Composite(0x304B, 0x309A));
        assert_eq!(t.forward(4375), Mapped::Pair(0xD842, 0xDF9F)); // U+20B9F
        assert!(t.is_composite_base(0x304B));
        assert!(!t.is_composite_base(0x3042));
    }

    #[test]
    fn test_gb2312_spot_checks() {
        let t = gb2312();
        assert_eq!(t.forward(1410), Mapped::One(0x554A)); // row 16 cell 1
        assert_eq!(t.backward(0x4E2D), Some(5029)); // row 54 cell 48
    }

    #[test]
    #[should_panic(expected = "duplicate pointer")]
    fn test_duplicate_pointer_is_fatal() {
        let mut t = PairTable::new("broken");
        t.add_singles(&[(10, 0x3042), (10, 0x3043)]);
    }
}
