use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone};

use crate::scan::ScanRecord;

pub const TODAY_LABEL: &str = "Today";
pub const YESTERDAY_LABEL: &str = "Yesterday";

/// One display section of the history: all records captured on `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryGroup {
    pub label: String,
    pub date: NaiveDate,
    /// Newest first.
    pub records: Vec<ScanRecord>,
}

/// Group records by the calendar day of their capture time in `tz`.
///
/// Ordering: the "Today" group, then "Yesterday", then every other day
/// strictly descending by date. Records inside a group are sorted newest
/// first; records with equal timestamps keep their insertion order.
/// Empty groups are never produced.
pub fn group_by_day<Tz: TimeZone>(
    records: &[ScanRecord],
    today: NaiveDate,
    tz: &Tz,
) -> Vec<HistoryGroup> {
    let yesterday = today.pred_opt();

    let mut by_day: BTreeMap<NaiveDate, Vec<ScanRecord>> = BTreeMap::new();
    for record in records {
        let day = record.captured_at.date_in(tz).unwrap_or(NaiveDate::MIN);
        by_day.entry(day).or_default().push(record.clone());
    }

    let mut groups: Vec<HistoryGroup> = by_day
        .into_iter()
        .map(|(date, mut records)| {
            records.sort_by_key(|r| Reverse(r.captured_at));
            HistoryGroup {
                label: day_label(date, today, yesterday),
                date,
                records,
            }
        })
        .collect();

    groups.sort_by_key(|g| {
        let pinned = if g.date == today {
            0
        } else if Some(g.date) == yesterday {
            1
        } else {
            2
        };
        (pinned, Reverse(g.date))
    });

    groups
}

fn day_label(date: NaiveDate, today: NaiveDate, yesterday: Option<NaiveDate>) -> String {
    if date == today {
        TODAY_LABEL.to_string()
    } else if Some(date) == yesterday {
        YESTERDAY_LABEL.to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}
