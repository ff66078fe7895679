use super::draw::Draw;

/// Size of the intersection of two draws.
pub fn match_count(a: &Draw, b: &Draw) -> usize {
    // Both sides are sorted, so a merge walk is enough
    let (a, b) = (a.numbers(), b.numbers());
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// One row of the comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetComparison {
    /// 1-based set number
    pub set: usize,
    pub draw: Draw,
    pub matches: usize,
}

impl SetComparison {
    pub fn note(&self) -> String {
        format!("{} matched", self.matches)
    }
}

pub fn compare_sets(draws: &[Draw], reference: &Draw) -> Vec<SetComparison> {
    draws
        .iter()
        .enumerate()
        .map(|(idx, draw)| SetComparison {
            set: idx + 1,
            draw: *draw,
            matches: match_count(draw, reference),
        })
        .collect()
}
