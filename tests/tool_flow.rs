use devtoolshub::highlight::escape_markup;
use devtoolshub::report::Report;
use devtoolshub::{find_matches, highlight_matches, render, FlagSet};

#[test]
fn evaluate_render_report_flow() {
    let pattern = r"(\d{4})-(\d{2})-(\d{2})";
    let input = "released 2023-01-15, patched 2023-02-01";

    let matches = find_matches(pattern, "g", input).unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].matched_text, "2023-01-15");
    assert_eq!(matches[0].captured_groups[0].text.as_deref(), Some("2023"));
    assert_eq!(matches[0].captured_groups[0].start_offset, 9);

    let marked = render(input, &matches);
    assert_eq!(marked.text(), escape_markup(input));
    assert_eq!(marked.markup().matches("<mark>").count(), 2);

    let flags = FlagSet::parse("g").unwrap();
    let json = Report::new(pattern, flags, input, matches).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["flags"], "g");
    assert_eq!(value["testString"], input);
    assert_eq!(value["matches"][1]["matchedText"], "2023-02-01");
    assert_eq!(value["matches"][1]["capturedGroups"][2]["endOffset"], 39);
}

#[test]
fn identical_inputs_give_identical_output() {
    let first = highlight_matches(r"\w+", "g", "one two").unwrap();
    let second = highlight_matches(r"\w+", "g", "one two").unwrap();
    assert_eq!(first, second);
}

#[test]
fn round_trip_holds_across_flag_combinations() {
    let cases = [
        (r"^\w+", "gm", "alpha\nbeta\ngamma"),
        (r"a*", "g", "bbb"),
        (r"<\w+>", "gi", "<A> & <b>"),
        (r"\d+", "y", "42 then 7"),
        (r"nomatch", "", "plain text"),
    ];
    for (pattern, flags, input) in cases {
        let matches = find_matches(pattern, flags, input).unwrap();
        let marked = render(input, &matches);
        assert_eq!(
            marked.text(),
            escape_markup(input),
            "round trip failed for pattern {pattern:?} on {input:?}"
        );
    }
}

#[test]
fn pattern_errors_surface_as_values_everywhere() {
    assert!(find_matches("[", "", "abc").is_err());
    assert!(find_matches(r"\d", "q", "abc").is_err());
    assert!(highlight_matches("(", "g", "abc").is_err());
}
