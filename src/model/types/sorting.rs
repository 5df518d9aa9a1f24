use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Name,
    Email,
    Company,
}

impl ColumnId {
    pub fn as_str(&self) -> &'static str {
        match *self {
            ColumnId::Name => "name",
            ColumnId::Email => "email",
            ColumnId::Company => "companyName",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn aria(direction: Option<SortDirection>) -> &'static str {
        match direction {
            Some(SortDirection::Ascending) => "ascending",
            Some(SortDirection::Descending) => "descending",
            None => "none",
        }
    }

    pub fn glyph(direction: Option<SortDirection>) -> &'static str {
        match direction {
            Some(SortDirection::Ascending) => " ▲",
            Some(SortDirection::Descending) => " ▼",
            None => "",
        }
    }
}

/// How two cell values are compared.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortingFn {
    /// Case-sensitive, UTF-16 code unit order.
    Basic,
    /// Basic order on the lowercased values.
    Text,
    /// Lowercased, digit runs compared as numbers.
    Alphanumeric,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSort {
    pub column: ColumnId,
    pub direction: SortDirection,
}

/// Ordered (column, direction) pairs. The first entry is the primary sort key.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState(Vec<ColumnSort>);

impl SortState {
    pub fn new(sorts: Vec<ColumnSort>) -> Self {
        Self(sorts)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[ColumnSort] {
        &self.0
    }

    pub fn direction_of(&self, column: ColumnId) -> Option<SortDirection> {
        self.0
            .iter()
            .find(|sort| sort.column == column)
            .map(|sort| sort.direction)
    }

    /// unsorted -> ascending -> descending -> unsorted
    fn next_direction(&self, column: ColumnId) -> Option<SortDirection> {
        match self.direction_of(column) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        }
    }

    /// Applies a header click. `multi` is set when the click should extend the
    /// current sort instead of replacing it (shift held).
    pub fn toggle(&mut self, column: ColumnId, multi: bool) {
        let next = self.next_direction(column);
        let position = self.0.iter().position(|sort| sort.column == column);

        let toggle_in_place = match position {
            Some(index) if multi => Some(index),
            Some(index) if index + 1 == self.0.len() => Some(index),
            _ => None,
        };

        match (toggle_in_place, next) {
            (Some(index), Some(direction)) => self.0[index].direction = direction,
            (Some(index), None) => {
                self.0.remove(index);
            }
            (None, direction) if multi => self.0.push(ColumnSort {
                column,
                direction: direction.unwrap_or(SortDirection::Ascending),
            }),
            (None, direction) => {
                self.0 = vec![ColumnSort {
                    column,
                    direction: direction.unwrap_or(SortDirection::Ascending),
                }]
            }
        }
    }
}
