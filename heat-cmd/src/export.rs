use anyhow::Context;
use heat_data::HeatmapView;
use log::info;
use std::io::Write;

pub fn to_json(view: &HeatmapView<'_>, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(view)?
    } else {
        serde_json::to_string(view)?
    };
    Ok(json)
}

/// Write the view to `output`, or to stdout when no path is given.
pub fn write_view(view: &HeatmapView<'_>, output: Option<&str>, pretty: bool) -> anyhow::Result<()> {
    let json = to_json(view, pretty)?;
    match output {
        Some(path) => {
            std::fs::write(path, json.as_bytes()).with_context(|| format!("failed to write {}", path))?;
            info!(
                "Wrote {} summary and {} detail cells to {}",
                view.summary.cells.len(),
                view.detail.cells.len(),
                path
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::build_model;
    use heat_data::HeatmapModel;
    use heat_record::{parse_records, Mode, ParseOptions};

    const FIXTURE: &str = include_str!("../../fixtures/temperature_daily.csv");

    fn model() -> HeatmapModel {
        build_model(parse_records(FIXTURE.as_bytes(), &ParseOptions::default()).unwrap(), 10)
    }

    #[test]
    fn json_carries_both_grids() {
        let model = model();
        let json: serde_json::Value = serde_json::from_str(&to_json(&model.view(Mode::Max), false).unwrap()).unwrap();
        assert_eq!(json["mode"], "max");
        assert_eq!(json["extents"]["summary"], serde_json::json!([7.0, 35.0]));
        assert_eq!(json["summary"]["cells"].as_array().unwrap().len(), 6);
        assert_eq!(json["detail"]["years"], serde_json::json!([2012, 2020, 2021]));
        // missing maximum serializes as null, not zero
        let february = json["summary"]["cells"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["year"] == 2020 && c["month"] == 2)
            .unwrap();
        assert!(february["max"].is_null());
    }

    #[test]
    fn pretty_output_is_multiline() {
        let model = model();
        let compact = to_json(&model.view(Mode::Min), false).unwrap();
        let pretty = to_json(&model.view(Mode::Min), true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
        );
    }

    #[test]
    fn write_view_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("view.json");
        let model = model();
        write_view(&model.view(Mode::Max), path.to_str(), false).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\"mode\":\"max\""));
    }
}
