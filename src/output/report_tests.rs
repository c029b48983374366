use super::*;
use crate::framework::Framework;
use crate::measure::SizeMetrics;
use crate::output::svg::layout;
use crate::ranking::rank;

fn frameworks() -> FrameworkSet {
    FrameworkSet::new(vec![
        Framework::new("coi").with_color("#9477ff"),
        Framework::new("react").with_color("#00d8ff"),
        Framework::new("vue").with_color("#42b883"),
    ])
}

fn emit(metrics: &[(&str, u64)]) -> Report {
    let set = frameworks();
    let metrics: SizeMetrics = metrics.iter().map(|(n, b)| ((*n).to_string(), *b)).collect();
    let entries = rank(&set, &metrics);
    let config = ReportConfig::default();
    ReportEmitter::new(&set, &config)
        .emit(&entries, &layout(&entries))
        .unwrap()
}

#[test]
fn renditions_share_ranked_order() {
    let report = emit(&[("coi", 3072), ("react", 1024), ("vue", 2048)]);

    let table_rows: Vec<&str> = report.table.lines().skip(3).collect();
    assert!(table_rows[0].starts_with("React"));
    assert!(table_rows[1].starts_with("Vue"));
    assert!(table_rows[2].starts_with("Coi"));

    let react = report.record.find("\"react\"").unwrap();
    let vue = report.record.find("\"vue\"").unwrap();
    let coi = report.record.find("\"coi\"").unwrap();
    assert!(react < vue && vue < coi);
}

#[test]
fn markup_uses_report_config_text() {
    let set = frameworks();
    let entries = rank(&set, &SizeMetrics::new());
    let config = ReportConfig {
        title: "Hello <World>".to_string(),
        subtitle: "Sub".to_string(),
    };
    let report = ReportEmitter::new(&set, &config)
        .emit(&entries, &layout(&entries))
        .unwrap();

    assert!(report.markup.starts_with("<svg"));
    assert!(report.markup.contains("Hello &lt;World&gt;"));
    assert!(report.markup.contains(">Sub</text>"));
    assert!(report.markup.trim_end().ends_with("</svg>"));
}

#[test]
fn table_is_plain_by_default() {
    let report = emit(&[("coi", 1024), ("react", 2048), ("vue", 4096)]);
    assert!(!report.table.contains('\x1b'));
}

#[test]
fn table_colors_winner_when_enabled() {
    let set = frameworks();
    let metrics: SizeMetrics = [("coi".to_string(), 10), ("react".to_string(), 20)]
        .into_iter()
        .collect();
    let entries = rank(&set, &metrics);
    let config = ReportConfig::default();
    let report = ReportEmitter::new(&set, &config)
        .with_color(ColorMode::Always)
        .emit(&entries, &layout(&entries))
        .unwrap();
    assert!(report.table.contains("\x1b[32m"));
}

#[test]
fn write_to_creates_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let report = emit(&[("coi", 1234)]);

    let written = report.write_to(dir.path()).unwrap();

    assert_eq!(
        written,
        vec![dir.path().join(JSON_REPORT_FILE), dir.path().join(SVG_REPORT_FILE)]
    );
    let json = std::fs::read_to_string(dir.path().join(JSON_REPORT_FILE)).unwrap();
    assert_eq!(json, report.record);
    let svg = std::fs::read_to_string(dir.path().join(SVG_REPORT_FILE)).unwrap();
    assert_eq!(svg, report.markup);
}

#[test]
fn write_to_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(JSON_REPORT_FILE), "stale content that is longer").unwrap();

    let report = emit(&[("coi", 1)]);
    report.write_to(dir.path()).unwrap();

    let json = std::fs::read_to_string(dir.path().join(JSON_REPORT_FILE)).unwrap();
    assert!(!json.contains("stale"));
}

#[test]
fn write_to_missing_dir_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let report = emit(&[("coi", 1)]);

    let err = report.write_to(&missing).unwrap_err();
    match err {
        BenchError::FileWrite { path, .. } => {
            assert_eq!(path, missing.join(JSON_REPORT_FILE));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn summary_names_both_files() {
    assert_eq!(
        Report::summary(),
        "Reports generated: benchmark_results.json, benchmark_results.svg"
    );
}
