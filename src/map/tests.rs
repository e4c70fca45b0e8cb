use super::*;
use crate::numeric::format_decimal;

/// Build map text whose record `i` is `[i, i/10, i+0.5, i/20]`
fn sample_text(line_ending: &str) -> String {
    (0..RECORD_COUNT)
        .flat_map(|i| {
            let i = i as f64;
            [i, i / 10.0, i + 0.5, i / 20.0]
        })
        .map(format_decimal)
        .collect::<Vec<_>>()
        .join(line_ending)
}

fn repeated_record(record: &str) -> String {
    vec![record; RECORD_COUNT].join("\n")
}

#[test]
fn test_parse_preserves_row_order() {
    let map = parse(&sample_text("\n")).unwrap();
    assert_eq!(map.primary().len(), RECORD_COUNT);
    assert_eq!(map.secondary().len(), RECORD_COUNT);
    for i in 0..RECORD_COUNT {
        let f = i as f64;
        assert_eq!(map.primary()[i], Point::new(f, f / 10.0));
        assert_eq!(map.secondary()[i], Point::new(f + 0.5, f / 20.0));
    }
}

#[test]
fn test_parse_reduced_example_record() {
    let map = parse(&repeated_record("100,0\n5,2\n90,5\n4,8")).unwrap();
    assert_eq!(map.primary()[0], Point::new(100.0, 5.2));
    assert_eq!(map.secondary()[0], Point::new(90.5, 4.8));
    assert_eq!(map.primary()[RECORD_COUNT - 1], Point::new(100.0, 5.2));
}

#[test]
fn test_parse_accepts_crlf_and_trailing_whitespace() {
    let lf = parse(&sample_text("\n")).unwrap();
    let crlf = parse(&sample_text("\r\n")).unwrap();
    assert_eq!(lf, crlf);

    let padded = format!("{}\r\n\n  \t", sample_text("\r\n"));
    assert_eq!(parse(&padded).unwrap(), lf);
}

#[test]
fn test_parse_rejects_wrong_line_count() {
    for count in [0, 4, 476, 479, 481, 484] {
        let text = vec!["1,0"; count].join("\n");
        let err = parse(&text).unwrap_err();
        assert_eq!(
            err.as_layout(),
            Some(&LayoutError::LineCount {
                expected: LINE_COUNT,
                found: count,
            }),
            "count {count}"
        );
    }
}

#[test]
fn test_parse_reports_record_line_range() {
    let mut lines: Vec<String> = sample_text("\n").lines().map(String::from).collect();
    lines[6] = "12,x".to_string();
    let err = parse(&lines.join("\n")).unwrap_err();
    match err {
        MapError::Layout(LayoutError::Record {
            first_line,
            last_line,
            source,
        }) => {
            assert_eq!((first_line, last_line), (5, 8));
            assert_eq!(source.token, "12,x");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(parse(&lines.join("\n"))
        .unwrap_err()
        .to_string()
        .contains("lines 5-8"));
}

#[test]
fn test_parse_rejects_blank_line_inside_input() {
    let mut lines: Vec<String> = sample_text("\n").lines().map(String::from).collect();
    lines[0] = String::new();
    let err = parse(&lines.join("\n")).unwrap_err();
    assert!(matches!(
        err,
        MapError::Layout(LayoutError::Record { first_line: 1, last_line: 4, .. })
    ));
}

#[test]
fn test_leading_blank_lines_are_counted() {
    let text = format!("\n\n{}", sample_text("\n"));
    let err = parse(&text).unwrap_err();
    assert!(matches!(
        err,
        MapError::Layout(LayoutError::LineCount { expected: 480, found: 482 })
    ));
}

#[test]
fn test_from_str() {
    let map: FuelMap = sample_text("\n").parse().unwrap();
    assert_eq!(map.series(SeriesKind::Secondary)[3], Point::new(3.5, 0.15));
}

#[test]
fn test_merge_reduced_example_record() {
    let source = parse(&repeated_record("100,0\n5,2\n90,5\n4,8")).unwrap();
    let merged = merge(&source, &source).unwrap();
    let lines: Vec<&str> = merged.lines().collect();
    assert_eq!(lines.len(), LINE_COUNT);
    assert_eq!(&lines[..4], &["100", "5,2", "90,5", "4,8"]);
    assert!(!merged.ends_with('\n'));
    assert_eq!(parse(&merged).unwrap(), source);
}

#[test]
fn test_merge_cross_splices_sources() {
    let a = parse(&sample_text("\n")).unwrap();
    let b = parse(&repeated_record("1\n2\n3\n4")).unwrap();

    let merged = parse(&merge(&a, &b).unwrap()).unwrap();
    assert_eq!(merged.primary(), a.primary());
    assert_eq!(merged.secondary(), b.secondary());

    let reversed = parse(&merge(&b, &a).unwrap()).unwrap();
    assert_eq!(reversed.primary(), b.primary());
    assert_eq!(reversed.secondary(), a.secondary());
}

#[test]
fn test_merge_rejects_length_mismatch() {
    let long = FuelMap::new(
        Series::new(vec![Point::new(1.0, 1.0); 3]),
        Series::default(),
    );
    let short = FuelMap::new(
        Series::default(),
        Series::new(vec![Point::new(1.0, 1.0); 2]),
    );
    let err = merge(&long, &short).unwrap_err();
    assert!(matches!(
        err,
        MapError::LengthMismatch {
            primary: 3,
            secondary: 2
        }
    ));
}

#[test]
fn test_merge_series_of_any_equal_length() {
    let primary = Series::new(vec![Point::new(0.5, 1.25)]);
    let secondary = Series::new(vec![Point::new(-2.0, 3.0)]);
    assert_eq!(merge_series(&primary, &secondary).unwrap(), "0,5\n1,25\n-2\n3");
    assert_eq!(merge_series(&Series::default(), &Series::default()).unwrap(), "");
}

#[test]
fn test_series_stats() {
    let series = Series::new(vec![
        Point::new(200.0, 3.0),
        Point::new(100.0, 7.5),
        Point::new(150.0, -1.0),
    ]);
    let stats = series.stats();
    assert_eq!(stats.min_x, 100.0);
    assert_eq!(stats.max_x, 200.0);
    assert_eq!(stats.min_y, -1.0);
    assert_eq!(stats.max_y, 7.5);
    assert_eq!(stats.count, 3);

    assert_eq!(Series::default().stats(), SeriesStats::default());
}

#[test]
fn test_map_file_helpers() {
    assert!(is_map_file("maps/winter.map"));
    assert!(is_map_file("WINTER.MAP"));
    assert!(!is_map_file("winter.txt"));
    assert!(!is_map_file("map"));

    assert_eq!(merged_file_name("winter.map"), "winterM.map");
    assert_eq!(merged_file_name("Winter.Map"), "WinterM.map");
    assert_eq!(merged_file_name("winter"), "winterM.map");
    assert_eq!(merged_file_name(".map"), "M.map");
    assert_eq!(merged_file_name("зима.map"), "зимаM.map");
}

#[test]
fn test_visible_candidates_follow_visibility() {
    let map = parse(&sample_text("\n")).unwrap();
    let files = vec![
        MapFile::new("a.map", map.clone()),
        MapFile::new("b.map", map.clone())
            .with_visibility(Visibility::default().with_series(SeriesKind::Primary, false)),
        MapFile::new("c.map", map).with_visibility(Visibility::default().with_file(false)),
    ];

    let labels: Vec<SeriesRef> = visible_candidates(&files)
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(
        labels,
        vec![
            SeriesRef { file_index: 0, kind: SeriesKind::Primary },
            SeriesRef { file_index: 0, kind: SeriesKind::Secondary },
            SeriesRef { file_index: 1, kind: SeriesKind::Secondary },
        ]
    );
    assert_eq!(files[2].visible_series().count(), 0);
}
