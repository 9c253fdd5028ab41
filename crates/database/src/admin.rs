use crate::entities::reservation::Column;
use sea_orm::{IdenStatic, Order};

/// Sort direction of an admin ordering column
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for Order {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

/// Declarative description of the operator listing for a table
#[derive(Debug)]
pub struct AdminConfig {
    /// Columns shown for each row, in display order
    pub list_display: &'static [Column],
    /// Columns that can be filtered by exact value
    pub list_filter: &'static [Column],
    /// Columns matched by the free-text search
    pub search_fields: &'static [Column],
    /// Date column supporting year / month / day drill-down
    pub date_hierarchy: Option<Column>,
    pub ordering: &'static [(Column, Direction)],
}

pub const RESERVATION_ADMIN: AdminConfig = AdminConfig {
    list_display: &[
        Column::Name,
        Column::Email,
        Column::Phone,
        Column::Date,
        Column::Time,
        Column::Message,
    ],
    list_filter: &[Column::Date, Column::Time],
    search_fields: &[Column::Name, Column::Email],
    date_hierarchy: Some(Column::Date),
    ordering: &[(Column::Date, Direction::Desc), (Column::Time, Direction::Desc)],
};

impl AdminConfig {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.list_display.iter().map(|column| column.as_str()).collect()
    }

    pub fn filters_on(&self, column: Column) -> bool {
        self.list_filter
            .iter()
            .any(|filter| filter.as_str() == column.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reservation_admin_columns() {
        assert_eq!(
            RESERVATION_ADMIN.column_names(),
            vec!["name", "email", "phone", "date", "time", "message"]
        );
    }

    #[test]
    fn test_reservation_admin_filters() {
        assert!(RESERVATION_ADMIN.filters_on(Column::Date));
        assert!(RESERVATION_ADMIN.filters_on(Column::Time));
        assert!(!RESERVATION_ADMIN.filters_on(Column::Name));
    }

    #[test]
    fn test_reservation_admin_orders_newest_first() {
        let ordering: Vec<_> = RESERVATION_ADMIN
            .ordering
            .iter()
            .map(|(column, direction)| (column.as_str(), *direction))
            .collect();
        assert_eq!(
            ordering,
            vec![("date", Direction::Desc), ("time", Direction::Desc)]
        );
    }
}
