//! Hand-off to a renderer: named series grouped into titled charts.
//!
//! The crate draws nothing. A chart is exported either as JSON (one object per
//! chart, each series as parallel `x`/`y` arrays) or as long-format CSV with the
//! columns `chart,series,x,y`.

use std::io::{self, Write};

use serde::Serialize;

use crate::core::series::SampleSeries;

/// A curve with a display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    pub name: String,
    pub points: SampleSeries,
}

/// A titled group of curves meant to be drawn on the same axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub series: Vec<NamedSeries>,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
        }
    }

    /// Append a curve.
    pub fn with_series(mut self, name: impl Into<String>, points: SampleSeries) -> Self {
        self.series.push(NamedSeries {
            name: name.into(),
            points,
        });
        self
    }

    pub fn series(&self, name: &str) -> Option<&SampleSeries> {
        self.series.iter().find(|s| s.name == name).map(|s| &s.points)
    }
}

/// Pretty-printed JSON array of charts.
pub fn to_json(charts: &[Chart]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(charts)
}

/// Long-format CSV, one row per sample, with a header line.
pub fn write_csv<W: Write>(charts: &[Chart], mut w: W) -> io::Result<()> {
    writeln!(w, "chart,series,x,y")?;
    for chart in charts {
        for named in &chart.series {
            for p in &named.points {
                writeln!(
                    w,
                    "{},{},{},{}",
                    csv_field(&chart.title),
                    csv_field(&named.name),
                    p.x,
                    p.y
                )?;
            }
        }
    }
    Ok(())
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    fn sample_chart() -> Chart {
        let grid = Grid::new(0.0, 1.0, 2).unwrap();
        let line = crate::compute_euler(&grid).reference;
        Chart::new("Demo, quoted").with_series("line", line)
    }

    #[test]
    fn looks_up_series_by_name() {
        let chart = sample_chart();
        assert_eq!(chart.series("line").map(|s| s.len()), Some(3));
        assert!(chart.series("missing").is_none());
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let mut buf = Vec::new();
        write_csv(&[sample_chart()], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "chart,series,x,y");
        assert_eq!(lines[1], "\"Demo, quoted\",line,0,0");
    }

    #[test]
    fn json_nests_series_arrays() {
        let json = to_json(&[sample_chart()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["title"], "Demo, quoted");
        assert_eq!(value[0]["series"][0]["name"], "line");
        assert_eq!(value[0]["series"][0]["points"]["x"][2], 1.0);
    }
}
