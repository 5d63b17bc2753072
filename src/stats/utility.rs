use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Counts each distinct value, most frequent first.
///
/// Values with equal counts keep the order in which they were first seen.
pub fn frequency_table<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut table: Vec<(T, usize)> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&i) => table[i].1 += 1,
            None => {
                index.insert(value.clone(), table.len());
                table.push((value, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

/// Most frequent value; ties go to the value seen first. `None` for no input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    frequency_table(values).into_iter().next().map(|(v, _)| v)
}

/// Most frequent start hour.
///
/// Groups by hour in ascending order, then stable-sorts by count descending and
/// takes the first group, so ties resolve to the lowest hour.
pub fn hour_mode<I>(hours: I) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    let mut groups: BTreeMap<u32, usize> = BTreeMap::new();
    for hour in hours {
        *groups.entry(hour).or_default() += 1;
    }

    let mut sizes: Vec<(u32, usize)> = groups.into_iter().collect();
    sizes.sort_by(|a, b| b.1.cmp(&a.1));
    sizes.first().map(|(hour, _)| *hour)
}

/// Arithmetic mean, or `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
