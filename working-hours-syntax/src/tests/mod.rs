mod transition;

use crate::range::RangePair;

/// Render a list of pairs as `[(1 - 5, 9.00 - 19.00), (6 - 6, None)]`.
fn render(pairs: &[RangePair]) -> String {
    let items: Vec<_> = pairs.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
