use crate::{
    Location,
    failure::build_failure_array,
};

/// Knuth-Morris-Pratt searcher for a single pattern.
///
/// The failure array is built once in [`Kmp::new`] and reused by every
/// search, so one pattern can be matched against many haystacks.
#[derive(Clone, Debug)]
pub struct Kmp<'p, T> {
    /// The symbols to match.
    pattern: &'p [T],
    /// Longest proper border of each pattern prefix.
    failure: Vec<usize>,
}

impl<'p, T: PartialEq> Kmp<'p, T> {
    /// Return a new searcher for pattern.
    pub fn new(pattern: &'p [T]) -> Self {
        let failure = build_failure_array(pattern);
        tracing::trace!(
            pattern_len = pattern.len(),
            longest_border = failure.last().copied().unwrap_or(0),
            "compiled kmp searcher"
        );
        Self { pattern, failure }
    }

    /// Return the pattern this searcher matches.
    pub fn pattern(&self) -> &'p [T] {
        self.pattern
    }

    /// Return the failure array built for the pattern.
    pub fn failure(&self) -> &[usize] {
        &self.failure
    }

    /// Return the [`Location`] of the leftmost match in the haystack.
    pub fn find(&self, haystack: &[T]) -> Option<Location> {
        self.find_at(haystack, 0)
    }

    /// Return the [`Location`] of the leftmost match starting at or after start.
    /// Returns None if start is past the end of the haystack.
    pub fn find_at(&self, haystack: &[T], start: usize) -> Option<Location> {
        if start > haystack.len() || self.pattern.len() > haystack.len() - start {
            return None;
        }
        Matches::new(self, haystack, start, false).next()
    }

    /// Return true if the pattern occurs anywhere in the haystack.
    pub fn is_match(&self, haystack: &[T]) -> bool {
        self.find(haystack).is_some()
    }

    /// Number of non-overlapping matches in the haystack.
    pub fn count(&self, haystack: &[T]) -> usize {
        self.find_iter(haystack).count()
    }

    /// Iterate over non-overlapping matches, leftmost first.
    pub fn find_iter<'k, 'h>(&'k self, haystack: &'h [T]) -> Matches<'k, 'p, 'h, T> {
        Matches::new(self, haystack, 0, false)
    }

    /// Iterate over every match, including ones that overlap a previous match.
    pub fn find_overlapping_iter<'k, 'h>(&'k self, haystack: &'h [T]) -> Matches<'k, 'p, 'h, T> {
        Matches::new(self, haystack, 0, true)
    }
} // impl Kmp

/// Iterator over the matches of a [`Kmp`] searcher in one haystack.
///
/// Each haystack symbol is visited once; progress through the pattern
/// survives from one match to the next.
#[derive(Clone, Debug)]
pub struct Matches<'k, 'p, 'h, T> {
    kmp: &'k Kmp<'p, T>,
    haystack: &'h [T],
    /// Next haystack index to compare.
    at: usize,
    /// Length of the pattern prefix matched so far.
    matched: usize,
    overlapping: bool,
}

impl<'k, 'p, 'h, T> Matches<'k, 'p, 'h, T> {
    fn new(kmp: &'k Kmp<'p, T>, haystack: &'h [T], at: usize, overlapping: bool) -> Self {
        Self { kmp, haystack, at, matched: 0, overlapping }
    }
}

impl<'k, 'p, 'h, T: PartialEq> Iterator for Matches<'k, 'p, 'h, T> {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let pattern = self.kmp.pattern;
        let m = pattern.len();

        // The empty pattern matches once at every position, end included.
        if m == 0 {
            if self.at > self.haystack.len() {
                return None;
            }
            let location = Location { start: self.at, end: self.at };
            self.at += 1;
            return Some(location);
        }

        while self.at < self.haystack.len() {
            if pattern[self.matched] == self.haystack[self.at] {
                if self.matched == m - 1 {
                    let start = self.at - self.matched;
                    self.at += 1;
                    self.matched = if self.overlapping { self.kmp.failure[m - 1] } else { 0 };
                    return Some(Location { start, end: self.at });
                }
                self.matched += 1;
            } else if self.matched > 0 {
                // Retry the same haystack symbol against a shorter prefix.
                self.matched = self.kmp.failure[self.matched - 1];
                continue;
            }
            self.at += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kmp_first_match() {
        t(b"ababc", b"abdabababc", Some(5));
        t(b"a", b"aaaaaaaaaaaaaaaaaa", Some(0));
        t(b"zxywsijdfosdfnso", b"zxywsijdfosdfnso", Some(0));
        t(b"fofosdfo", b"abdabababc", None);
        t(b"AAAB", b"ABAAAAAB", Some(4));
        t(b"ABABX", b"ABABZABABYABABX", Some(10));
        t(b"abc1abc12", b"alskfjaldsabc1abc1abc12k23adsfabcabc", Some(14));
        t(b"abc1abc12", b"alskfjaldsk23adsfabcabc", None);
        t(b"abcdabcy", b"abcxabcdabxabcdabcdabcy", Some(15));
    }

    #[test]
    fn kmp_edges() {
        t(b"", b"", Some(0));
        t(b"", b"anything", Some(0));
        t(b"a", b"", None);
        t(b"abc", b"ab", None);
        t(b"b", b"ab", Some(1));
        t(b"aab", b"aaab", Some(1));
    }

    #[test]
    fn kmp_location() {
        let kmp = Kmp::new(&b"ABABX"[..]);
        assert_eq!(kmp.find(b"ABABZABABYABABX"), Some(Location { start: 10, end: 15 }));
        assert_eq!(kmp.failure(), &[0, 0, 1, 2, 0]);
        assert_eq!(kmp.pattern(), b"ABABX");
    }

    #[test]
    fn kmp_find_at() {
        let kmp = Kmp::new(&b"ab"[..]);
        let haystack = b"ab_ab_ab";
        assert_eq!(kmp.find_at(haystack, 0).map(|l| l.start), Some(0));
        assert_eq!(kmp.find_at(haystack, 1).map(|l| l.start), Some(3));
        assert_eq!(kmp.find_at(haystack, 6).map(|l| l.start), Some(6));
        assert_eq!(kmp.find_at(haystack, 7), None);
        assert_eq!(kmp.find_at(haystack, 8), None);
        assert_eq!(kmp.find_at(haystack, 100), None);

        let empty = Kmp::new(&b""[..]);
        assert_eq!(empty.find_at(haystack, 8), Some(Location { start: 8, end: 8 }));
        assert_eq!(empty.find_at(haystack, 9), None);
    }

    #[test]
    fn kmp_find_at_falls_back_without_skipping() {
        // Each mismatch after a partial match must retry the same symbol.
        let kmp = Kmp::new(&b"AAAB"[..]);
        assert_eq!(kmp.find_at(b"ABAAAAAB", 1), Some(Location { start: 4, end: 8 }));
        assert_eq!(kmp.find_at(b"ABAAAAAB", 4), Some(Location { start: 4, end: 8 }));
        assert_eq!(kmp.find_at(b"ABAAAAAB", 5), None);

        let kmp = Kmp::new(&b"ABABX"[..]);
        let haystack = b"ABABZABABYABABX";
        for start in 0..=10 {
            assert_eq!(kmp.find_at(haystack, start).map(|l| l.start), Some(10), "start {start}");
        }
        assert_eq!(kmp.find_at(haystack, 11), None);
    }

    #[test]
    fn kmp_reuse_across_haystacks() {
        let kmp = Kmp::new(&b"needle"[..]);
        assert!(kmp.is_match(b"haystack with a needle in it"));
        assert!(!kmp.is_match(b"haystack without one"));
        assert!(kmp.is_match(b"needle"));
        assert!(!kmp.is_match(b"needl"));
    }

    #[test]
    fn kmp_find_iter() {
        all(b"the", b"the cat sat on the mat with the bat", false, &[0, 15, 28]);
        all(b"aa", b"aaaaa", false, &[0, 2]);
        all(b"aa", b"aaaaa", true, &[0, 1, 2, 3]);
        all(b"aba", b"ababababa", false, &[0, 4]);
        all(b"aba", b"ababababa", true, &[0, 2, 4, 6]);
        all(b"xyz", b"ababababa", true, &[]);
        all(b"", b"abc", false, &[0, 1, 2, 3]);
        all(b"", b"", true, &[0]);
    }

    #[test]
    fn kmp_count() {
        let kmp = Kmp::new(&b"aa"[..]);
        assert_eq!(kmp.count(b"aaaaa"), 2);
        assert_eq!(kmp.find_overlapping_iter(b"aaaaa").count(), 4);
        assert_eq!(kmp.count(b"bbb"), 0);
    }

    #[track_caller]
    fn t(pattern: &[u8], haystack: &[u8], expected: Option<usize>) {
        let kmp = Kmp::new(pattern);
        let location = kmp.find(haystack);
        assert_eq!(expected, location.map(|l| l.start));
        if let Some(location) = location {
            assert_eq!(pattern, &haystack[location.start..location.end]);
        }
        assert_eq!(expected, crate::find_first_match(pattern, haystack));
    }

    #[track_caller]
    fn all(pattern: &[u8], haystack: &[u8], overlapping: bool, expected: &[usize]) {
        let kmp = Kmp::new(pattern);
        let starts: Vec<usize> = if overlapping {
            kmp.find_overlapping_iter(haystack).map(|l| l.start).collect()
        } else {
            kmp.find_iter(haystack).map(|l| l.start).collect()
        };
        assert_eq!(expected, starts.as_slice());
    }
}
