//! Tests for the parser orchestration and collapsing entry point

use super::{create_temp_zrxp, create_test_zrxp};
use crate::app::services::stream_reader::StreamReader;
use crate::app::services::zrxp_parser::parser::{ZrxpParser, read_stations};
use crate::config::ParserConfig;

#[test]
fn test_single_station_scenario() {
    let file = create_temp_zrxp(
        b"#SANR1|*|SNAME|*|CNAMEFlow\r\n20240101000000 1.23 0\r\n20240101010000 1.30 0\r\n",
    );

    let result = ZrxpParser::new().parse_file(file.path()).unwrap();

    assert_eq!(result.stations.len(), 1);

    let station = &result.stations[0];
    assert_eq!(station.number(), Some("1"));
    assert_eq!(station.name(), Some(""));
    assert_eq!(
        station.rows(),
        &[
            vec!["20240101000000", "1.23", "0"],
            vec!["20240101010000", "1.30", "0"],
        ]
    );
}

#[test]
fn test_two_station_fixture() {
    let file = create_temp_zrxp(&create_test_zrxp());

    let result = ZrxpParser::new().parse_file(file.path()).unwrap();

    assert_eq!(result.stations.len(), 2);
    assert_eq!(result.stats.stations_emitted, 2);
    assert_eq!(result.stats.lines_read, 9);
    assert_eq!(result.stats.metadata_lines, 4);
    assert_eq!(result.stats.data_lines, 5);
    assert!(result.stats.is_clean());

    let upper = &result.stations[0];
    assert_eq!(upper.number(), Some("395201"));
    assert_eq!(upper.name(), Some("Upper Gauge"));
    assert_eq!(upper.water(), Some("Inn"));
    assert_eq!(upper.unit(), Some("m3/s"));
    assert_eq!(upper.invalid_value_marker(), Some("-777"));
    assert_eq!(
        upper.layout(),
        Some(vec![
            "timestamp".to_string(),
            "value".to_string(),
            "status".to_string(),
        ])
    );
    assert_eq!(upper.rows().len(), 3);

    let lower = &result.stations[1];
    assert_eq!(lower.number(), Some("395202"));
    assert_eq!(lower.time_zone(), Some("UTC+1"));
    assert_eq!(lower.unit(), Some("cm"));
    assert_eq!(lower.rows().len(), 2);
}

#[test]
fn test_empty_file_yields_no_stations() {
    let file = create_temp_zrxp(b"");

    let result = ZrxpParser::new().parse_file(file.path()).unwrap();

    assert!(result.stations.is_empty());
    assert_eq!(result.stats.lines_read, 0);
}

#[test]
fn test_station_count_equals_block_transitions() {
    // Three metadata blocks, the last one trailing at end of input.
    let file = create_temp_zrxp(
        b"#SANR1\r\n20240101000000 1.0\r\n#SANR2\r\n20240101000000 2.0\r\n#SANR3\r\n",
    );

    let result = ZrxpParser::new().parse_file(file.path()).unwrap();

    assert_eq!(result.stations.len(), 3);
    assert!(result.stations[2].rows().is_empty());
}

#[test]
fn test_small_chunks_parse_identically() {
    let content = create_test_zrxp();
    let file = create_temp_zrxp(&content);

    let default_result = ZrxpParser::new().parse_file(file.path()).unwrap();

    let tiny_chunks = ZrxpParser::with_config(ParserConfig {
        chunk_size: 1,
        ..Default::default()
    })
    .unwrap();
    let tiny_result = tiny_chunks.parse_file(file.path()).unwrap();

    assert_eq!(default_result.stations, tiny_result.stations);
    assert_eq!(default_result.stats, tiny_result.stats);
}

#[test]
fn test_rewind_and_reparse_is_idempotent() {
    let file = create_temp_zrxp(&create_test_zrxp());
    let config = ParserConfig::default();
    let parser = ZrxpParser::new();

    let mut reader = StreamReader::open(file.path(), &config).unwrap();

    let first = parser.parse_stream(&mut reader).unwrap();
    reader.rewind().unwrap();
    let second = parser.parse_stream(&mut reader).unwrap();

    assert_eq!(first.stations, second.stations);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_undecodable_metadata_line_is_skipped() {
    // 0x81 has no mapping in windows-1252, so the second station's metadata
    // line is dropped and its rows merge into the first station's block.
    let mut content = Vec::new();
    content.extend_from_slice(b"#SANR1\r\n20240101000000 1.0\r\n");
    content.extend_from_slice(b"#SANR2\x81\r\n20240101010000 2.0\r\n");
    let file = create_temp_zrxp(&content);

    let result = ZrxpParser::new().parse_file(file.path()).unwrap();

    assert_eq!(result.stats.lines_skipped, 1);
    assert!(!result.stats.is_clean());
    assert_eq!(result.stations.len(), 1);
    assert_eq!(result.stations[0].number(), Some("1"));
    assert_eq!(result.stations[0].rows().len(), 2);
}

#[test]
fn test_read_stations_collapses_open_failure() {
    let stations = read_stations("/nonexistent/path/stations.zrx");

    assert!(stations.is_empty());
}

#[test]
fn test_read_stations_returns_parsed_stations() {
    let file = create_temp_zrxp(&create_test_zrxp());

    let stations = read_stations(file.path());

    assert_eq!(stations.len(), 2);
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = ZrxpParser::with_config(ParserConfig {
        chunk_size: 0,
        ..Default::default()
    });

    assert!(result.is_err());
}
