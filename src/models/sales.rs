//! Fixed demo sales table

/// One row of the demo sales table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    pub day: i32,
    pub sales: i32,
}

/// Build the fixed five-day demo table.
///
/// Day numbers match row position (1..=5) and the table is identical on
/// every call.
pub fn demo_sales() -> Vec<SalesRecord> {
    vec![
        SalesRecord { day: 1, sales: 10 },
        SalesRecord { day: 2, sales: 15 },
        SalesRecord { day: 3, sales: 7 },
        SalesRecord { day: 4, sales: 20 },
        SalesRecord { day: 5, sales: 18 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_table_is_fixed() {
        let table = demo_sales();
        assert_eq!(table.len(), 5);

        let days: Vec<i32> = table.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5]);

        let sales: Vec<i32> = table.iter().map(|r| r.sales).collect();
        assert_eq!(sales, vec![10, 15, 7, 20, 18]);
    }

    #[test]
    fn test_demo_table_is_deterministic() {
        assert_eq!(demo_sales(), demo_sales());
    }
}
