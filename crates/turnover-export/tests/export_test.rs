use turnover_core::config::ParserConfig;
use turnover_core::errors::ExportError;
use turnover_core::types::{ReactionIndex, TargetCodes};
use turnover_export::{Cell, MemorySink, TableExporter, TableSink, XlsxSink, COLUMNS};
use turnover_parser::parse_reader;

const DATABASE: &str = "\
ID\t1.1.1.1
PROTEIN
PR\t#1# Escherichia coli <1>
TURNOVER_NUMBER
TN\t#1# 2.5-4.0 {ethanol} pH 6.5-7.5 #1# wild-type 30°C
///
ID\t1.1.1.2
PROTEIN
PR\t#1# Homo sapiens <2>
PR\t#2# Mus musculus <3>
TURNOVER_NUMBER
TN\t#1,2# 7 {glucose}  (#1# pH 7.4 <2>; #2# pH 8, mutant <3>) <2,3>
///
ID\t1.1.1.3
PROTEIN
PR\t#4# Bos taurus <4>
///
";

fn index_for(targets: &TargetCodes) -> ReactionIndex {
    parse_reader(DATABASE.as_bytes(), targets, &ParserConfig::default())
        .unwrap()
        .index
}

#[test]
fn test_example_row() {
    let targets: TargetCodes = ["1.1.1.1"].into_iter().collect();
    let index = index_for(&targets);
    let mut sink = MemorySink::new();
    let summary = TableExporter::new(&index, &targets).export(1, &mut sink).unwrap();

    assert_eq!(summary.pages_written, 1);
    assert_eq!(summary.rows_written, 1);
    let row = &sink.pages()[0].rows[0];
    let text = |column: &str| row.get(column).and_then(Cell::as_text).map(str::to_string);
    assert_eq!(text("EC number").as_deref(), Some("1.1.1.1"));
    assert_eq!(text("Species").as_deref(), Some("Escherichia coli"));
    assert_eq!(text("Number").as_deref(), Some("1"));
    assert_eq!(text("Tn [mmol subs/(mmol enz * s)]").as_deref(), Some("2.5-4.0"));
    assert_eq!(text("Substrate").as_deref(), Some("ethanol"));
    assert_eq!(text("pH").as_deref(), Some("6.5-7.5"));
    assert_eq!(row.get("Temperature [°C]").and_then(Cell::as_number), Some(30.0));
    assert_eq!(text("Wild-type").as_deref(), Some("Yes"));
    assert!(row.get("Mutant").unwrap().is_empty());
}

#[test]
fn test_rows_follow_registration_then_clause_order() {
    let targets: TargetCodes = ["1.1.1.2"].into_iter().collect();
    let index = index_for(&targets);
    let exporter = TableExporter::new(&index, &targets);
    let rows = exporter.rows_for("1.1.1.2");

    let ids: Vec<&str> = rows
        .iter()
        .filter_map(|r| r.get("Number").and_then(Cell::as_text))
        .collect();
    assert_eq!(ids, vec!["1", "1", "2", "2"]);
    assert_eq!(rows[0].get("pH").and_then(Cell::as_number), Some(7.4));
    assert!(rows[1].get("pH").unwrap().is_empty());
    assert!(rows[2].get("pH").unwrap().is_empty());
    assert_eq!(rows[3].get("pH").and_then(Cell::as_number), Some(8.0));
    assert_eq!(rows[3].get("Mutant").and_then(Cell::as_text), Some("Yes"));
    for row in &rows {
        assert_eq!(row.get("Tn [mmol subs/(mmol enz * s)]").and_then(Cell::as_number), Some(7.0));
    }
}

#[test]
fn test_pages_follow_target_order() {
    let targets: TargetCodes = ["1.1.1.3", "1.1.1.1", "9.9.9.9", "1.1.1.2"]
        .into_iter()
        .collect();
    let index = index_for(&targets);
    let mut sink = MemorySink::new();
    let summary = TableExporter::new(&index, &targets).export(3, &mut sink).unwrap();

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.pages()[0].number, 1);
    assert_eq!(sink.pages()[0].codes, vec!["1.1.1.3", "1.1.1.1"]);
    assert_eq!(sink.pages()[1].codes, vec!["9.9.9.9", "1.1.1.2"]);
    assert_eq!(sink.pages()[0].rows.len(), 1);
    assert_eq!(sink.pages()[1].rows.len(), 4);
    assert_eq!(summary.missing_codes, vec!["9.9.9.9"]);
    assert_eq!(summary.rows_written, 5);
}

#[test]
fn test_zero_pages_rejected() {
    let targets: TargetCodes = ["1.1.1.1"].into_iter().collect();
    let index = index_for(&targets);
    let mut sink = MemorySink::new();
    let err = TableExporter::new(&index, &targets)
        .export(0, &mut sink)
        .unwrap_err();
    assert!(matches!(err, ExportError::InvalidPageCount { pages: 0 }));
    assert!(sink.is_empty());
}

#[test]
fn test_no_targets_writes_nothing() {
    let targets = TargetCodes::new();
    let index = ReactionIndex::new();
    let mut sink = MemorySink::new();
    let summary = TableExporter::new(&index, &targets).export(2, &mut sink).unwrap();
    assert_eq!(summary.pages_written, 0);
    assert!(sink.is_empty());
}

#[test]
fn test_xlsx_sink_writes_one_workbook_per_page() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");
    let targets: TargetCodes = ["1.1.1.1", "1.1.1.2"].into_iter().collect();
    let index = index_for(&targets);

    let mut sink = XlsxSink::new(&output_dir, "EC_numbers", "Enzymes");
    let summary = TableExporter::new(&index, &targets).export(2, &mut sink).unwrap();

    assert_eq!(summary.pages_written, 2);
    assert_eq!(
        sink.written(),
        &[output_dir.join("EC_numbers1.xlsx"), output_dir.join("EC_numbers2.xlsx")]
    );
    for path in sink.written() {
        let bytes = std::fs::read(path).unwrap();
        // xlsx files are zip archives.
        assert_eq!(&bytes[..2], b"PK");
    }
}

#[test]
fn test_xlsx_sink_rejects_bad_sheet_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = XlsxSink::new(dir.path(), "page", "bad[name]");
    let page = turnover_export::TablePage {
        number: 1,
        codes: vec![],
        rows: vec![],
    };
    let err = sink.write_page(&page).unwrap_err();
    assert!(matches!(err, ExportError::Spreadsheet { .. }));
    assert_eq!(COLUMNS.len(), 10);
}
