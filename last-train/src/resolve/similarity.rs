//! Gestalt pattern matching (Ratcliff/Obershelp) similarity.
//!
//! The ratio is `2·M / T`, where `T` is the total length of both strings and
//! `M` the number of characters matched by repeatedly taking the longest
//! common block and recursing on what lies to its left and right. Lengths are
//! counted in Unicode scalar values.
//!
//! Resolution thresholds are tuned against this exact metric, so it must not
//! be swapped for an edit distance.

use std::sync::Arc;

use crate::domain::Station;

/// A station with its similarity to a query.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub station: Arc<Station>,
    /// Similarity in `[0, 1]`; `1.0` only for an identical name.
    pub score: f64,
}

/// Similarity ratio between two strings, in `[0, 1]`.
///
/// Two empty strings are identical and score `1.0`.
///
/// # Examples
///
/// ```
/// use last_train::resolve::ratio;
///
/// assert_eq!(ratio("Jurong East", "Jurong East"), 1.0);
/// assert_eq!(ratio("abcdefghij", "abcdefgxyz"), 0.7);
/// assert_eq!(ratio("Expo", "Bishan"), 0.0);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Score every station name against `query`, best first.
///
/// Returns one candidate per station. Equal scores keep the order of
/// `stations`.
pub fn rank(query: &str, stations: &[Arc<Station>]) -> Vec<RankedCandidate> {
    let query: Vec<char> = query.chars().collect();

    let mut ranked: Vec<RankedCandidate> = stations
        .iter()
        .map(|station| {
            let name: Vec<char> = station.name().chars().collect();
            RankedCandidate {
                station: Arc::clone(station),
                score: ratio_chars(&name, &query),
            }
        })
        .collect();

    // sort_by is stable, so ties stay in catalog order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // The longest-block tie rule prefers earlier positions in the first
    // argument, which can make the count depend on argument order. Taking
    // the larger count keeps the ratio symmetric.
    let matched = matched_chars(a, b).max(matched_chars(b, a));
    2.0 * matched as f64 / total as f64
}

/// Total characters covered by the recursively matched blocks.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        total += k;

        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }

    total
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, len)`. Among equally long blocks, the one starting
/// earliest in `a` wins, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    if alo >= ahi || blo >= bhi {
        return best;
    }

    // run[col] = length of the common suffix ending at a[i - 1], b[blo + col - 1]
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut run = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            if a[i] == b[j] {
                let k = prev[col - 1] + 1;
                run[col] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            } else {
                run[col] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut run);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StationCatalog;

    fn catalog(names: &[&str]) -> StationCatalog {
        let records: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                format!(
                    r#"{{"name": "{name}", "code": ["EW{}"], "lines": [
                        {{"line": "EW", "timings": [{{"dest": "Pasir Ris", "last": "23:15"}}]}}
                    ]}}"#,
                    i + 1
                )
            })
            .collect();
        StationCatalog::from_json_str(&format!("[{}]", records.join(","))).unwrap()
    }

    #[test]
    fn identical_strings() {
        assert_eq!(ratio("Jurong East", "Jurong East"), 1.0);
        assert_eq!(ratio("", ""), 1.0);
    }

    #[test]
    fn disjoint_strings() {
        assert_eq!(ratio("Expo", "Bishan"), 0.0);
        assert_eq!(ratio("", "Bishan"), 0.0);
        assert_eq!(ratio("Bishan", ""), 0.0);
    }

    #[test]
    fn known_ratios() {
        // "ng East" then "Jur": 10 of 21 characters matched on each side
        assert_eq!(ratio("Jurong East", "Jurng East"), 20.0 / 21.0);
        assert_eq!(ratio("Bishan", "Bishn"), 10.0 / 11.0);
        assert_eq!(ratio("Outram Park", "Outram"), 12.0 / 17.0);
        assert_eq!(ratio("Jurong East", "jurong east"), 18.0 / 22.0);
    }

    #[test]
    fn exact_band_edges() {
        assert_eq!(ratio("abcdefghij", "abcdefgxyz"), 0.7);
        assert_eq!(ratio("abcdefghij", "abcdefghiz"), 0.9);
        assert_eq!(ratio("Punggol", "Punggol Coast"), 0.7);
        assert_eq!(ratio("Tanah Merah", "Tana Mera"), 0.9);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Each "é" is one character; only "caf" and "e" can match.
        assert_eq!(ratio("café", "cafe"), 0.75);
        assert_eq!(ratio("日本", "日本"), 1.0);
    }

    #[test]
    fn matches_are_not_reused_across_blocks() {
        // "ab" matches once; the remainders "" and "ab" cannot match.
        assert_eq!(ratio("ab", "abab"), 4.0 / 6.0);
    }

    #[test]
    fn rank_orders_best_first() {
        let catalog = catalog(&["Clementi", "Jurong East", "Buona Vista"]);
        let ranked = rank("Jurng East", catalog.stations());

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].station.name(), "Jurong East");
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn rank_ties_keep_catalog_order() {
        let catalog = catalog(&["Aaa", "Bbb", "Ccc", "Ddd"]);
        let ranked = rank("xyz", catalog.stations());

        let names: Vec<_> = ranked.iter().map(|c| c.station.name()).collect();
        assert_eq!(names, vec!["Aaa", "Bbb", "Ccc", "Ddd"]);
        assert!(ranked.iter().all(|c| c.score == 0.0));
    }

    #[test]
    fn rank_empty_query() {
        let catalog = catalog(&["Clementi", "Bishan"]);
        let ranked = rank("", catalog.stations());
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|c| c.score == 0.0));
    }

    #[test]
    fn rank_very_long_query() {
        let catalog = catalog(&["Clementi", "Bishan"]);
        let query = "Clementi ".repeat(100);
        let ranked = rank(&query, catalog.stations());
        assert_eq!(ranked[0].station.name(), "Clementi");
        assert!(ranked[0].score > 0.0 && ranked[0].score < 1.0);
    }
}
