/// Build the failure array (partial-match table) for a pattern.
///
/// `failure[j]` is the length of the longest proper prefix of `pattern[..=j]`
/// that is also a suffix of it. `failure[0]` is always 0, and an empty pattern
/// yields an empty array.
///
/// Every step either advances `j` or shrinks `i`, and `i` can only shrink as
/// much as it has grown, so the whole build is O(m).
pub fn build_failure_array<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut failure = Vec::with_capacity(pattern.len());
    if pattern.is_empty() {
        return failure;
    }
    failure.push(0);

    // Length of the border currently being extended.
    let mut i = 0;
    for j in 1..pattern.len() {
        // Fall back to the next-longest border until one can be extended.
        while i > 0 && pattern[i] != pattern[j] {
            i = failure[i - 1];
        }
        if pattern[i] == pattern[j] {
            i += 1;
        }
        failure.push(i);
    }
    failure
}
