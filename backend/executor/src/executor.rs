//! Applies interpreted mutations to the table.

use repricer_core::{Cell, Mutation, PriceTable, RepriceError, PRICE_COLUMN};

/// Apply a mutation in place. All-or-nothing: every affected value is
/// computed and validated before the first write, so a failed call leaves
/// the table exactly as it was.
///
/// Percentage mutations do not round; repeated operations accumulate
/// floating-point drift, and only an explicit `RoundAll` rounds.
pub fn apply(mutation: &Mutation, table: &mut PriceTable) -> Result<(), RepriceError> {
    let col = table
        .price_column()
        .ok_or_else(|| RepriceError::MissingField(PRICE_COLUMN.to_string()))?;

    if let Mutation::SetRow { row, value } = mutation {
        if *row >= table.row_count() {
            return Err(RepriceError::InvalidMutation(format!(
                "row {} out of range ({} rows)",
                row,
                table.row_count()
            )));
        }
        validate_price(*row, *value)?;
        table.set_cell(*row, col, Cell::Number(*value));
        return Ok(());
    }

    let mut updates: Vec<(usize, f64)> = Vec::new();
    for row in 0..table.row_count() {
        let current = table
            .cell(row, col)
            .and_then(Cell::as_number)
            .ok_or_else(|| {
                RepriceError::InvalidMutation(format!("row {} has a non-numeric price", row))
            })?;

        let next = match mutation {
            Mutation::IncreaseAll { pct } => Some(current * (1.0 + pct)),
            Mutation::DecreaseAll { pct } => Some(current * (1.0 - pct)),
            Mutation::RoundAll { decimals } => Some(round_to(current, *decimals)),
            Mutation::DiscountBelow { threshold, pct } => {
                (current < *threshold).then(|| current * (1.0 - pct))
            }
            Mutation::SetRow { .. } => unreachable!("handled above"),
        };

        if let Some(next) = next {
            validate_price(row, next)?;
            updates.push((row, next));
        }
    }

    for (row, value) in updates {
        table.set_cell(row, col, Cell::Number(value));
    }
    Ok(())
}

/// Prices stay finite and non-negative after every mutation.
fn validate_price(row: usize, value: f64) -> Result<(), RepriceError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RepriceError::InvalidMutation(format!(
            "row {} would get invalid price {}",
            row, value
        )))
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(prices: &[f64]) -> PriceTable {
        PriceTable::from_prices(prices.to_vec())
    }

    fn prices(table: &PriceTable) -> Vec<f64> {
        (0..table.row_count()).map(|r| table.price(r).unwrap()).collect()
    }

    #[test]
    fn increase_all_multiplies_every_row() {
        let mut t = table(&[100.0, 50.0]);
        apply(&Mutation::IncreaseAll { pct: 0.10 }, &mut t).unwrap();
        assert_eq!(prices(&t), vec![110.00000000000001, 55.00000000000001]);
    }

    #[test]
    fn decrease_all_multiplies_every_row() {
        let mut t = table(&[100.0]);
        apply(&Mutation::DecreaseAll { pct: 0.15 }, &mut t).unwrap();
        assert_eq!(prices(&t), vec![85.0]);
    }

    #[test]
    fn round_all_is_idempotent() {
        let mut t = table(&[10.005, 3.3333]);
        apply(&Mutation::RoundAll { decimals: 2 }, &mut t).unwrap();
        let once = prices(&t);
        apply(&Mutation::RoundAll { decimals: 2 }, &mut t).unwrap();
        assert_eq!(prices(&t), once);
    }

    #[test]
    fn set_row_targets_a_single_price() {
        let mut t = table(&[10.0, 20.0]);
        apply(&Mutation::SetRow { row: 1, value: 500.0 }, &mut t).unwrap();
        assert_eq!(prices(&t), vec![10.0, 500.0]);
    }

    #[test]
    fn set_row_out_of_range_changes_nothing() {
        let mut t = table(&[10.0]);
        let err = apply(&Mutation::SetRow { row: 5, value: 1.0 }, &mut t).unwrap_err();
        assert!(matches!(err, RepriceError::InvalidMutation(_)));
        assert_eq!(prices(&t), vec![10.0]);
    }

    #[test]
    fn discount_below_only_touches_rows_under_threshold() {
        let mut t = table(&[50.0, 100.0, 150.0]);
        apply(&Mutation::DiscountBelow { threshold: 100.0, pct: 0.20 }, &mut t).unwrap();
        assert_eq!(prices(&t), vec![40.0, 100.0, 150.0]);
    }

    #[test]
    fn missing_price_column_is_reported() {
        let mut t = PriceTable::from_rows(
            vec!["name".into(), "amount".into()],
            vec![vec!["pan".into(), 2.0.into()]],
        );
        let before = t.clone();
        let err = apply(&Mutation::IncreaseAll { pct: 0.10 }, &mut t).unwrap_err();
        assert!(matches!(err, RepriceError::MissingField(_)));
        assert_eq!(t, before);
    }

    #[test]
    fn mutation_driving_prices_negative_is_rejected_whole() {
        let mut t = table(&[100.0, 50.0]);
        let before = t.clone();
        let err = apply(&Mutation::DecreaseAll { pct: 1.5 }, &mut t).unwrap_err();
        assert!(matches!(err, RepriceError::InvalidMutation(_)));
        assert_eq!(t, before);
    }

    #[test]
    fn non_numeric_price_cell_fails_without_partial_writes() {
        let mut t = PriceTable::from_rows(
            vec!["price".into()],
            vec![vec![100.0.into()], vec!["n/a".into()], vec![50.0.into()]],
        );
        let before = t.clone();
        assert!(apply(&Mutation::IncreaseAll { pct: 0.10 }, &mut t).is_err());
        assert_eq!(t, before);
    }
}
