//! Depth aggregation - raw price/volume maps to renderable rows
//!
//! `aggregate` is a pure function of its single input: every snapshot is a
//! full replacement, nothing is diffed against previous state. Statefulness
//! (the carried-over spread) lives in [`crate::view::BookView`].

use crate::model::{RenderModel, Row};
use ladder_core::{Price, Side};
use ladder_gateway::DepthSnapshot;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Build the render model for one snapshot
///
/// Per side: rows sorted strictly descending by price, each with its volume
/// expressed as a percentage of the side's maximum volume. The spread is
/// set only when both sides are non-empty.
pub fn aggregate(snapshot: &DepthSnapshot) -> RenderModel {
    RenderModel {
        asks: build_side(&snapshot.asks, Side::Ask),
        bids: build_side(&snapshot.bids, Side::Bid),
        spread: spread(snapshot),
    }
}

/// Rows for one side, descending by price, with width scaling applied
fn build_side(levels: &BTreeMap<Price, u32>, side: Side) -> Vec<Row> {
    let mut max_volume: u32 = 0;
    let mut rows: Vec<Row> = levels
        .iter()
        .rev()
        .map(|(&price, &volume)| {
            max_volume = max_volume.max(volume);
            Row {
                price: price.as_decimal(),
                volume,
                side,
                width: 0,
            }
        })
        .collect();

    // Width pass is skipped entirely when the side has no volume at all;
    // rows keep the fallback width of 0.
    if max_volume > 0 {
        for row in &mut rows {
            row.width = (u64::from(row.volume) * 100 / u64::from(max_volume)) as u8;
        }
    }

    rows
}

/// Best-ask minus best-bid in cents, at display scale 2
fn spread(snapshot: &DepthSnapshot) -> Option<Decimal> {
    match (snapshot.best_ask(), snapshot.best_bid()) {
        (Some(ask), Some(bid)) => Some(Decimal::new(ask.diff_cents(bid) * 100, 2)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot(asks: &[(u32, u32)], bids: &[(u32, u32)]) -> DepthSnapshot {
        let mut snap = DepthSnapshot::new();
        for &(price, volume) in asks {
            snap.asks.insert(Price::from_cents(price), volume);
        }
        for &(price, volume) in bids {
            snap.bids.insert(Price::from_cents(price), volume);
        }
        snap
    }

    #[test]
    fn test_rows_sorted_descending() {
        let snap = snapshot(&[(103, 2), (101, 5), (105, 9)], &[(97, 8), (99, 3)]);
        let model = aggregate(&snap);

        let ask_prices: Vec<_> = model.asks.iter().map(|r| r.price).collect();
        assert_eq!(ask_prices, vec![dec!(1.05), dec!(1.03), dec!(1.01)]);

        let bid_prices: Vec<_> = model.bids.iter().map(|r| r.price).collect();
        assert_eq!(bid_prices, vec![dec!(0.99), dec!(0.97)]);
    }

    #[test]
    fn test_width_scaling() {
        let snap = snapshot(&[(101, 5), (103, 2), (105, 0)], &[]);
        let model = aggregate(&snap);

        // Widths relative to the side maximum (5): floor semantics
        let by_price: Vec<(Decimal, u8)> =
            model.asks.iter().map(|r| (r.price, r.width)).collect();
        assert_eq!(
            by_price,
            vec![(dec!(1.05), 0), (dec!(1.03), 40), (dec!(1.01), 100)]
        );
    }

    #[test]
    fn test_width_is_floored() {
        let snap = snapshot(&[(101, 3), (102, 7)], &[]);
        let model = aggregate(&snap);

        // 3 * 100 / 7 = 42.857.. -> 42
        assert_eq!(model.asks[1].width, 42);
        assert_eq!(model.asks[0].width, 100);
    }

    #[test]
    fn test_all_zero_volume_side_keeps_zero_widths() {
        // max volume 0: the scaling pass must be skipped, not divide
        let snap = snapshot(&[(101, 0), (103, 0)], &[]);
        let model = aggregate(&snap);
        assert!(model.asks.iter().all(|r| r.width == 0));
    }

    #[test]
    fn test_spread_law() {
        let snap = snapshot(&[(101, 5)], &[(99, 3)]);
        let model = aggregate(&snap);

        assert_eq!(model.spread, Some(dec!(2.00)));
        assert_eq!(model.spread.unwrap().to_string(), "2.00");
        assert_eq!(model.best_ask().unwrap().price.to_string(), "1.01");
        assert_eq!(model.best_bid().unwrap().price.to_string(), "0.99");
    }

    #[test]
    fn test_empty_side_law() {
        let snap = snapshot(&[], &[(99, 3)]);
        let model = aggregate(&snap);

        assert!(model.asks.is_empty());
        assert_eq!(model.bids.len(), 1);
        assert_eq!(model.spread, None);
    }

    #[test]
    fn test_both_sides_empty() {
        let model = aggregate(&DepthSnapshot::new());
        assert!(model.is_empty());
        assert_eq!(model.spread, None);
    }

    #[test]
    fn test_idempotent() {
        let snap = snapshot(&[(101, 5), (103, 2)], &[(99, 3), (97, 8)]);
        assert_eq!(aggregate(&snap), aggregate(&snap));
    }

    #[test]
    fn test_full_replacement_semantics() {
        // Two different snapshots through the same function share no state
        let first = snapshot(&[(101, 5)], &[(99, 3)]);
        let second = snapshot(&[(201, 1)], &[]);

        let _ = aggregate(&first);
        let model = aggregate(&second);

        assert_eq!(model.asks.len(), 1);
        assert_eq!(model.asks[0].price, dec!(2.01));
        assert!(model.bids.is_empty());
    }
}
