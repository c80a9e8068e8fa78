//! Plain-text summary report over the aggregate statistics.

use crate::stats::StatsSnapshot;

/// Render the operational summary in the fixed report order: processed
/// count, total volume, total profit/loss, top winners, top losers, and a
/// review count line only when at least one bet has been flagged.
pub fn render(snapshot: &StatsSnapshot, review_count: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total bets processed: {}\n", snapshot.processed));
    out.push_str(&format!(
        "Total bets amount: {}\n",
        fmt_amount(snapshot.total_volume)
    ));
    out.push_str(&format!(
        "Total result (profit/loss): {}\n",
        fmt_amount(snapshot.total_profit_loss)
    ));

    out.push_str("Top 5 customers with the highest winnings: \n");
    for (client, profit) in &snapshot.top_winners {
        out.push_str(&format!("{}: {}\n", client, fmt_amount(*profit)));
    }

    out.push_str("Top 5 customers with the highest losses: \n");
    for (client, loss) in &snapshot.top_losers {
        out.push_str(&format!("{}: {}\n", client, fmt_amount(*loss)));
    }

    if review_count > 0 {
        out.push_str(&format!("Bets flagged for review: {}\n", review_count));
    }

    out
}

// Debug formatting keeps the trailing ".0" on whole numbers ("100.0" rather
// than "100"), which is the numeric style of the report format.
fn fmt_amount(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> StatsSnapshot {
        StatsSnapshot {
            processed: 2,
            total_volume: 100.0,
            total_profit_loss: 50.0,
            top_winners: vec![("C1".to_string(), 50.0)],
            top_losers: vec![],
        }
    }

    #[test]
    fn renders_fixed_field_order() {
        let text = render(&snapshot(), 0);
        assert_eq!(
            text,
            "Total bets processed: 2\n\
             Total bets amount: 100.0\n\
             Total result (profit/loss): 50.0\n\
             Top 5 customers with the highest winnings: \n\
             C1: 50.0\n\
             Top 5 customers with the highest losses: \n"
        );
    }

    #[test]
    fn review_line_only_when_flagged() {
        assert!(!render(&snapshot(), 0).contains("flagged for review"));
        assert!(render(&snapshot(), 3).ends_with("Bets flagged for review: 3\n"));
    }

    #[test]
    fn whole_amounts_keep_decimal_point() {
        assert_eq!(fmt_amount(100.0), "100.0");
        assert_eq!(fmt_amount(-150.0), "-150.0");
        assert_eq!(fmt_amount(50.25), "50.25");
    }

    #[test]
    fn rendering_is_deterministic() {
        let snap = snapshot();
        assert_eq!(render(&snap, 1), render(&snap, 1));
    }
}
