//! Basic tests for byteframe

use byteframe::{split, split_reader, ApiError, Bytes, Config, Records, Splitter};
use std::io::Cursor;

#[test]
fn test_newline_stream_end_to_end() {
    let mut splitter = Splitter::with_delimiter("\n").unwrap();
    let mut records = splitter.feed(b"foo\nb");
    records.extend(splitter.feed(b"ar\n"));
    records.extend(splitter.feed(b"baz"));
    records.push(splitter.finish());

    assert_eq!(records, [&b"foo"[..], b"bar", b"baz"]);
}

#[test]
fn test_include_mode_end_to_end() {
    let config = Config::builder()
        .delimiter("||")
        .include_delimiter(true)
        .build()
        .unwrap();
    let mut splitter = Splitter::new(config).unwrap();
    let mut records = splitter.feed(b"a||b||");
    records.push(splitter.finish());

    assert_eq!(records, [&b"a||"[..], b"b||", b""]);
}

#[test]
fn test_adjacent_delimiters() {
    let records = split(b"A\n\nB", "\n").unwrap();
    assert_eq!(records, [&b"A"[..], b"", b"B"]);
}

#[test]
fn test_empty_chunk_between_chunks_is_noop() {
    let mut with_empty = Splitter::with_delimiter(";").unwrap();
    let mut without = Splitter::with_delimiter(";").unwrap();

    let mut a = with_empty.feed(b"x;y");
    a.extend(with_empty.feed(b""));
    a.extend(with_empty.feed(b";z"));
    a.push(with_empty.finish());

    let mut b = without.feed(b"x;y");
    b.extend(without.feed(b";z"));
    b.push(without.finish());

    assert_eq!(a, b);
}

#[test]
fn test_builder_requires_delimiter() {
    let err = Config::builder().build().unwrap_err();
    assert!(matches!(err, ApiError::Config { .. }));

    let err = Config::builder().delimiter("").build().unwrap_err();
    assert!(matches!(err, ApiError::Config { .. }));
}

#[test]
fn test_builder_rejects_zero_read_buffer() {
    let err = Config::builder()
        .delimiter("\n")
        .read_buffer_size(0)
        .build()
        .unwrap_err();
    assert!(matches!(err, ApiError::Config { .. }));
}

#[test]
fn test_empty_delimiter_rejected_at_splitter_construction() {
    let err = Splitter::new(Config::new(Vec::new())).unwrap_err();
    assert!(matches!(err, ApiError::Scanner(_)));
}

#[test]
fn test_stats_accounting() {
    let mut splitter = Splitter::with_delimiter("\n").unwrap();
    splitter.feed(b"one\ntwo");
    splitter.feed(b"\nthree");
    splitter.finish();

    let stats = splitter.stats();
    assert_eq!(stats.chunks_fed, 2);
    assert_eq!(stats.bytes_fed, 13);
    assert_eq!(stats.records_emitted, 3);
    // "two" was retained after the first chunk, "three" after the second
    assert_eq!(stats.max_buffered, 5);
}

#[test]
fn test_reader_matches_one_shot_split() {
    let data = b"alpha--beta----gamma--tail";
    let expected = split(data, "--").unwrap();

    // A tiny scratch buffer forces delimiters to straddle read boundaries
    let config = Config::builder()
        .delimiter("--")
        .read_buffer_size(3)
        .build()
        .unwrap();
    let records: Vec<Bytes> = Records::new(Cursor::new(data.to_vec()), config)
        .unwrap()
        .collect::<byteframe::Result<_>>()
        .unwrap();

    assert_eq!(records, expected);
}

#[test]
fn test_reader_empty_source_yields_single_empty_record() {
    let records = split_reader(Cursor::new(Vec::new()), Config::new("\n")).unwrap();
    assert_eq!(records, [&b""[..]]);
}

#[test]
fn test_reader_exposes_stats_and_inner() {
    let config = Config::new(";");
    let mut records = Records::new(Cursor::new(b"a;b".to_vec()), config).unwrap();
    assert_eq!(records.next().unwrap().unwrap().as_ref(), b"a");
    assert_eq!(records.next().unwrap().unwrap().as_ref(), b"b");
    assert!(records.next().is_none());
    assert_eq!(records.stats().records_emitted, 2);

    let cursor = records.into_inner();
    assert_eq!(cursor.position(), 3);
}

#[test]
fn test_splitter_into_records() {
    let splitter = Splitter::with_delimiter("\n").unwrap();
    let records: Vec<Bytes> = splitter
        .into_records(Cursor::new(b"x\ny".to_vec()))
        .collect::<byteframe::Result<_>>()
        .unwrap();
    assert_eq!(records, [&b"x"[..], b"y"]);
}

#[test]
fn test_error_conversions() {
    use std::io;

    let io_error = io::Error::new(io::ErrorKind::NotFound, "port gone");
    let api_error: ApiError = io_error.into();
    assert!(matches!(api_error, ApiError::Io(_)));
}

#[test]
#[cfg(feature = "serde")]
fn test_config_serialization_round_trip() {
    let config = Config::builder()
        .delimiter("\r\n")
        .include_delimiter(true)
        .read_buffer_size(4096)
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let restored: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(config, restored);
}

#[test]
#[cfg(feature = "serde")]
fn test_stats_serialization() {
    let mut splitter = Splitter::with_delimiter("\n").unwrap();
    splitter.feed(b"a\nb");
    splitter.finish();

    let json = serde_json::to_string(&splitter.stats()).unwrap();
    let restored: byteframe::SplitStats = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, splitter.stats());
}
