//! Grouping of table rows into sections
//!
//! The benchmark tables are flat: a row marked as a field start carries the
//! toggle, and the rows after it up to the next field start are its details.

use crate::section::Section;

/// A table row as seen by the grouping logic
pub trait FieldRow {
    /// Row opens a new field (`data-field-start="true"`)
    fn is_field_start(&self) -> bool;

    /// Row holds a chart placeholder
    fn has_chart(&self) -> bool;
}

/// Rows following a toggle row up to, not including, the next field start
pub fn detail_run<R: FieldRow>(following: impl IntoIterator<Item = R>) -> Vec<R> {
    following
        .into_iter()
        .take_while(|row| !row.is_field_start())
        .collect()
}

/// Build the section for a toggle from the rows that follow its row
pub fn build_section<R: FieldRow>(
    name: impl Into<String>,
    following: impl IntoIterator<Item = R>,
) -> Section<R> {
    let details = detail_run(following).into_iter().map(|row| {
        let has_chart = row.has_chart();
        (row, has_chart)
    });
    Section::new(name, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionEffect;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        start: bool,
        chart: bool,
    }

    impl FieldRow for Row {
        fn is_field_start(&self) -> bool {
            self.start
        }

        fn has_chart(&self) -> bool {
            self.chart
        }
    }

    fn row(id: &'static str, start: bool, chart: bool) -> Row {
        Row { id, start, chart }
    }

    #[test]
    fn test_run_stops_at_next_field() {
        let rows = vec![
            row("low", false, false),
            row("high", false, false),
            row("chart", false, true),
            row("next.csb", true, false),
            row("next-low", false, false),
        ];
        let ids: Vec<_> = detail_run(rows).into_iter().map(|r| r.id).collect();

        assert_eq!(ids, vec!["low", "high", "chart"]);
    }

    #[test]
    fn test_run_to_end_of_table() {
        let rows = vec![row("low", false, false), row("chart", false, true)];
        assert_eq!(detail_run(rows).len(), 2);
    }

    #[test]
    fn test_adjacent_fields_have_no_details() {
        let rows = vec![row("next.ini", true, false), row("x", false, false)];
        assert!(detail_run(rows).is_empty());
    }

    #[test]
    fn test_build_section_marks_chart_rows() {
        let rows = vec![
            row("low", false, false),
            row("chart", false, true),
            row("next", true, true),
        ];
        let mut section = build_section("cut.ini", rows);

        assert_eq!(section.name(), "cut.ini");
        assert_eq!(section.len(), 2);
        let effects = section.set_open(true);
        assert!(effects.contains(&SectionEffect::LoadChart {
            detail: 1,
            generation: 1
        }));
    }
}
