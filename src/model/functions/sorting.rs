use crate::model::types::*;
use std::cmp::Ordering;

/// Rows before this index never take part in picking a [`SortingFn`].
const SORTING_FN_SAMPLE_START: usize = 10;

pub fn column_value(user: &User, column: ColumnId) -> &str {
    match column {
        ColumnId::Name => &user.name,
        ColumnId::Email => &user.email,
        ColumnId::Company => &user.company.name,
    }
}

/// Picks the comparison for a column from its values, skipping the first ten
/// rows. Any sampled value with a digit selects [`SortingFn::Alphanumeric`],
/// other sampled values select [`SortingFn::Text`], and a table of ten rows or
/// fewer falls back to [`SortingFn::Basic`].
pub fn sorting_fn_for(users: &[User], column: ColumnId) -> SortingFn {
    let mut sorting_fn = SortingFn::Basic;
    for user in users.iter().skip(SORTING_FN_SAMPLE_START) {
        if column_value(user, column).chars().any(|c| c.is_ascii_digit()) {
            return SortingFn::Alphanumeric;
        }
        sorting_fn = SortingFn::Text;
    }
    sorting_fn
}

pub fn compare_values(sorting_fn: SortingFn, a: &str, b: &str) -> Ordering {
    match sorting_fn {
        SortingFn::Basic => basic_cmp(a, b),
        SortingFn::Text => basic_cmp(&a.to_lowercase(), &b.to_lowercase()),
        SortingFn::Alphanumeric => alphanumeric_cmp(a, b),
    }
}

/// Returns the users ordered by `state`. Equal rows keep their source order.
pub fn sort_users(users: &[User], state: &SortState) -> Vec<User> {
    let mut rows: Vec<&User> = users.iter().collect();
    if !state.is_empty() {
        let sorts: Vec<(ColumnSort, SortingFn)> = state
            .entries()
            .iter()
            .map(|sort| (*sort, sorting_fn_for(users, sort.column)))
            .collect();

        // sort_by is stable, which gives the source-order tie break
        rows.sort_by(|a, b| {
            sorts
                .iter()
                .map(|(sort, sorting_fn)| {
                    let ordering = compare_values(
                        *sorting_fn,
                        column_value(a, sort.column),
                        column_value(b, sort.column),
                    );
                    match sort.direction {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });
    }
    rows.into_iter().cloned().collect()
}

/// Code unit order, the way `<` orders two strings in a browser.
pub fn basic_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Lowercases both sides, splits them into digit and non-digit chunks and
/// compares chunk by chunk. Two digit chunks compare by value, two text chunks
/// by code unit order, and a text chunk sorts before a digit chunk. When one
/// side runs out of chunks, the side with fewer chunks comes first.
pub fn alphanumeric_cmp(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let a = chunks(&a);
    let b = chunks(&b);

    for (x, y) in a.iter().zip(b.iter()) {
        let ordering = match (is_digits(x), is_digits(y)) {
            (true, true) => compare_digit_runs(x, y),
            (false, false) => basic_cmp(x, y),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
        };
        if ordering.is_ne() {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}

fn chunks(s: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_digits = None;
    for (index, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        if in_digits.is_some_and(|in_digits| in_digits != digit) {
            chunks.push(&s[start..index]);
            start = index;
        }
        in_digits = Some(digit);
    }
    if start < s.len() {
        chunks.push(&s[start..]);
    }
    chunks
}

fn is_digits(chunk: &str) -> bool {
    chunk.starts_with(|c: char| c.is_ascii_digit())
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
