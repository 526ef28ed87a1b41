//! Actions-table columns and their visibility toggles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    Index,
    Action,
    Amount,
    Total,
    CostOne,
    CostAmount,
    CostStack,
    Time,
}

impl Column {
    /// Display order.
    pub const ALL: [Column; 8] = [
        Column::Index,
        Column::Action,
        Column::Amount,
        Column::Total,
        Column::CostOne,
        Column::CostAmount,
        Column::CostStack,
        Column::Time,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Column::Index      => "index",
            Column::Action     => "action",
            Column::Amount     => "amount",
            Column::Total      => "total",
            Column::CostOne    => "cost-one",
            Column::CostAmount => "cost-amount",
            Column::CostStack  => "cost-stack",
            Column::Time       => "time",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Column::Index      => "#",
            Column::Action     => "Action",
            Column::Amount     => "Amount",
            Column::Total      => "Total",
            Column::CostOne    => "Cost One",
            Column::CostAmount => "Cost Amount",
            Column::CostStack  => "Cost Stack",
            Column::Time       => "Time",
        }
    }

    /// Settings key for this column's toggle.
    pub fn setting_key(&self) -> String {
        format!("toggle-{}", self.id())
    }

    pub fn from_id(id: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.id() == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnVisibility {
    visible: BTreeMap<Column, bool>,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self { visible: Column::ALL.into_iter().map(|c| (c, true)).collect() }
    }
}

impl ColumnVisibility {
    /// Restore from persisted toggle values. A column is hidden only when
    /// its stored value is exactly `"false"`.
    pub fn restore<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let visible = Column::ALL
            .into_iter()
            .map(|c| (c, lookup(&c.setting_key()).as_deref() != Some("false")))
            .collect();
        Self { visible }
    }

    pub fn is_visible(&self, column: Column) -> bool {
        self.visible.get(&column).copied().unwrap_or(true)
    }

    pub fn set(&mut self, column: Column, visible: bool) {
        self.visible.insert(column, visible);
    }

    /// Flip one column. Returns its new visibility.
    pub fn toggle(&mut self, column: Column) -> bool {
        let next = !self.is_visible(column);
        self.set(column, next);
        next
    }

    /// Hide everything if all columns are visible, otherwise show everything.
    /// Returns the visibility applied to every column.
    pub fn toggle_all(&mut self) -> bool {
        let next = !self.all_visible();
        for column in Column::ALL {
            self.set(column, next);
        }
        next
    }

    pub fn all_visible(&self) -> bool {
        Column::ALL.into_iter().all(|c| self.is_visible(c))
    }

    pub fn visible_count(&self) -> usize {
        Column::ALL.into_iter().filter(|c| self.is_visible(*c)).count()
    }

    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL.into_iter().filter(|c| self.is_visible(*c)).collect()
    }

    /// Key/value pairs to persist.
    pub fn to_persisted(&self) -> Vec<(String, String)> {
        Column::ALL
            .into_iter()
            .map(|c| (c.setting_key(), self.is_visible(c).to_string()))
            .collect()
    }
}
