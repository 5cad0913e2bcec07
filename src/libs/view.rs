use super::activity::Activity;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the activity table: id, name and the acronym usable as a query.
    pub fn activities_table(activities: &[Activity]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "ACRONYM"]);
        for activity in activities {
            table.add_row(row![activity.id, activity.name, activity.acronym()]);
        }
        table
    }

    pub fn activities(activities: &[Activity]) {
        Self::activities_table(activities).printstd();
    }
}
