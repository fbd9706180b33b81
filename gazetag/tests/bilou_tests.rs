//! Integration tests for BILOU projection

use gazetag::GazetagError;
use gazetag::span::{OutsideTag, Span, TagOptions, resolve, tag, tag_with};

#[test]
fn test_spain_and_south_korea() {
    let tokens = ["Spain", "and", "South", "Korea"];
    let candidates = vec![
        Span::new("Spain", 0, 1, ["GPE"]),
        Span::new("South Korea", 2, 4, ["GPE"]),
    ];

    let spans = resolve(&candidates).unwrap();
    assert_eq!(spans, candidates);

    assert_eq!(
        tag(&tokens, &spans).unwrap(),
        vec!["U-GPE", "O", "B-GPE", "L-GPE"]
    );

    let zero = TagOptions::new().with_outside(OutsideTag::Zero);
    assert_eq!(
        tag_with(&tokens, &spans, &zero).unwrap(),
        vec!["U-GPE", "0", "B-GPE", "L-GPE"]
    );
}

#[test]
fn test_new_york_city() {
    let tokens = ["New", "York", "City"];
    let candidates = vec![
        Span::new("New York", 0, 2, ["GPE"]),
        Span::new("New York City", 0, 3, ["GPE"]),
    ];

    let spans = resolve(&candidates).unwrap();
    assert_eq!(
        tag(&tokens, &spans).unwrap(),
        vec!["B-GPE", "I-GPE", "L-GPE"]
    );
}

#[test]
fn test_long_span_has_inside_tags() {
    let tokens = ["the", "Democratic", "Republic", "of", "the", "Congo", "today"];
    let spans = vec![Span::new(
        "Democratic Republic of the Congo",
        1,
        6,
        ["COUNTRY"],
    )];

    assert_eq!(
        tag(&tokens, &spans).unwrap(),
        vec![
            "O",
            "B-COUNTRY",
            "I-COUNTRY",
            "I-COUNTRY",
            "I-COUNTRY",
            "L-COUNTRY",
            "O"
        ]
    );
}

#[test]
fn test_multi_label_tags_are_sorted_and_joined() {
    let tokens = ["Georgia", "on", "my", "mind"];
    let spans = vec![Span::new("Georgia", 0, 1, ["US_STATE", "COUNTRY"])];

    assert_eq!(
        tag(&tokens, &spans).unwrap(),
        vec!["U-COUNTRY, U-US_STATE", "O", "O", "O"]
    );

    let options = TagOptions::new().with_label_separator("|");
    assert_eq!(
        tag_with(&tokens, &spans, &options).unwrap()[0],
        "U-COUNTRY|U-US_STATE"
    );
}

#[test]
fn test_no_spans_and_no_tokens() {
    let tokens = ["nothing", "here"];
    assert_eq!(tag(&tokens, &[]).unwrap(), vec!["O", "O"]);

    let empty: [&str; 0] = [];
    assert!(tag(&empty, &[]).unwrap().is_empty());
}

#[test]
fn test_invalid_spans_are_rejected() {
    let tokens = ["South", "Korea"];

    let out_of_bounds = vec![Span::new("Korea x", 1, 3, ["GPE"])];
    assert!(matches!(
        tag(&tokens, &out_of_bounds),
        Err(GazetagError::InvalidInput(_))
    ));

    let overlapping = vec![
        Span::new("South Korea", 0, 2, ["GPE"]),
        Span::new("Korea", 1, 2, ["GPE"]),
    ];
    assert!(matches!(
        tag(&tokens, &overlapping),
        Err(GazetagError::InvalidInput(_))
    ));

    let wrong_text = vec![Span::new("North Korea", 0, 2, ["GPE"])];
    assert!(matches!(
        tag(&tokens, &wrong_text),
        Err(GazetagError::InvalidInput(_))
    ));
}
