use super::report::{DailyReport, LogLine, SummaryLine};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn log(report: &DailyReport<LogLine>) {
        let mut table = Table::new();

        table.add_row(row!["TASK", "START", "DURATION", ""]);
        for line in &report.lines {
            table.add_row(row![line.task, line.start, line.duration, line.state.label()]);
        }
        table.printstd();
    }

    pub fn summary(report: &DailyReport<SummaryLine>) {
        let mut table = Table::new();

        table.add_row(row!["TASK", "DURATION", ""]);
        for line in &report.lines {
            table.add_row(row![line.task, line.duration, if line.active { "active" } else { "" }]);
        }
        table.printstd();
    }

    pub fn tasks(tasks: &[(String, String)]) {
        let mut table = Table::new();

        table.add_row(row!["KEY", "SUMMARY"]);
        for (key, summary) in tasks {
            table.add_row(row![key, summary]);
        }
        table.printstd();
    }
}
