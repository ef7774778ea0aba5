mod common;

use common::{MissingGlyph, ORACLE};
use text_fit::layout::{
    estimate_pitch, fit_single_line, fit_with_wrap, split_word, wrap, Fit, LayoutResult, Region,
    SizeBounds,
};
use text_fit::{measure, Diagnostics, FitError, Measure, Px};

fn region(width: f32, height: f32) -> Region {
    Region::new(Px(width), Px(height))
}

fn quiet() -> Diagnostics {
    Diagnostics::disabled()
}

fn fit_wrapped<M: Measure>(
    oracle: &M,
    text: &str,
    target: Region,
    bounds: SizeBounds,
) -> Result<LayoutResult, FitError> {
    fit_with_wrap(oracle, text, 0.0, target, bounds, &mut quiet())
}

fn fit_line(text: &str, angle: f32, target: Region, bounds: SizeBounds) -> Result<Fit, FitError> {
    fit_single_line(&ORACLE, text, angle, target, bounds, &mut quiet())
}

/// Checks that `lines` hold the words of `paragraph` in order, where a word
/// may have been broken into chunks spread over consecutive lines
fn assert_reconstructs(paragraph: &str, lines: &[String]) {
    let joined = lines.join(" ");
    let mut tokens = joined.split_whitespace();
    for word in paragraph.split_whitespace() {
        let mut rebuilt = String::new();
        while rebuilt.len() < word.len() {
            let token = tokens
                .next()
                .unwrap_or_else(|| panic!("ran out of tokens rebuilding {word:?}"));
            rebuilt.push_str(token);
            assert!(word.starts_with(&rebuilt), "{rebuilt:?} is not a prefix of {word:?}");
        }
        assert_eq!(rebuilt, word);
    }
    assert_eq!(tokens.next(), None, "lines hold extra text");
}

#[test]
fn scenario_short_text_in_a_large_region() {
    let target = region(2000.0, 400.0);
    let layout = fit_wrapped(&ORACLE, "Hello World", target, SizeBounds::new(24, 120)).unwrap();

    assert_eq!(layout.fit, Fit::Fitted(120));
    assert_eq!(layout.wrap.lines, vec!["Hello World"]);
}

#[test]
fn scenario_one_long_token() {
    let token: String = ('a'..='z').cycle().take(50).collect();
    // at size 10 a character is 5px wide, so 50px holds 10 of them
    let lines = wrap(&ORACLE, &token, 0.0, 10, Px(50.0)).unwrap();

    assert!(lines.len() >= 5);
    for line in &lines {
        assert!(measure(&ORACLE, 10, 0.0, line).unwrap().width <= Px(50.0));
    }
    assert_eq!(lines.concat(), token);
}

#[test]
fn scenario_region_shorter_than_a_line() {
    let target = region(500.0, 8.0);
    let layout =
        fit_wrapped(&ORACLE, "too tall to fit anywhere", target, SizeBounds::new(10, 60)).unwrap();

    assert_eq!(layout.fit, Fit::Overflowed(10));
    assert_eq!(layout.size(), 10);
    assert!(!layout.wrap.lines.is_empty());
    assert!(layout.wrap.height() > Px(8.0));
}

#[test]
fn sizes_stay_within_bounds() {
    let texts = ["x", "Hello World", "a much longer sentence that will need to wrap", "   "];
    let regions = [region(30.0, 30.0), region(300.0, 90.0), region(1440.0, 740.0)];
    let bounds = [SizeBounds::new(1, 1), SizeBounds::new(8, 16), SizeBounds::new(24, 120)];

    for text in texts {
        for target in regions {
            for b in bounds {
                let layout = fit_wrapped(&ORACLE, text, target, b).unwrap();
                assert!((b.min..=b.max).contains(&layout.size()));

                let single = fit_line(text, 0.0, target, b).unwrap();
                assert!((b.min..=b.max).contains(&single.size()));
            }
        }
    }
}

#[test]
fn wrapped_fit_is_the_largest_feasible_size() {
    let text = lipsum::lipsum(40);
    let bounds = SizeBounds::new(6, 90);

    for (width, height) in [(200.0, 200.0), (640.0, 360.0), (1440.0, 740.0), (90.0, 600.0)] {
        let target = region(width, height);
        let feasible = |size: u32| {
            let lines = wrap(&ORACLE, &text, 0.0, size, target.width).unwrap();
            let pitch = estimate_pitch(&ORACLE, size, 0.0).unwrap();
            pitch * lines.len() as f32 <= target.height
        };
        let expected = (bounds.min..=bounds.max).rev().find(|&size| feasible(size));

        let layout = fit_wrapped(&ORACLE, &text, target, bounds).unwrap();
        match expected {
            Some(size) => assert_eq!(layout.fit, Fit::Fitted(size), "region {width}x{height}"),
            None => assert_eq!(layout.fit, Fit::Overflowed(bounds.min), "region {width}x{height}"),
        }
    }
}

#[test]
fn single_line_fit_is_the_largest_feasible_size() {
    let bounds = SizeBounds::new(4, 200);
    for text in ["a", "Hello World", "the quick brown fox jumps over the lazy dog"] {
        for (width, height) in [(100.0, 100.0), (1440.0, 60.0), (50.0, 500.0)] {
            let expected = (bounds.min..=bounds.max).rev().find(|&size| {
                let m = measure(&ORACLE, size, 0.0, text).unwrap();
                m.width <= Px(width) && m.height <= Px(height)
            });

            let fit = fit_line(text, 0.0, region(width, height), bounds).unwrap();
            match expected {
                Some(size) => assert_eq!(fit, Fit::Fitted(size)),
                None => assert_eq!(fit, Fit::Overflowed(bounds.min)),
            }
        }
    }
}

#[test]
fn wrapped_lines_keep_every_word_in_order() {
    let text = format!(
        "{}\nsupercalifragilisticexpialidocious is one word\n\n{}",
        lipsum::lipsum(30),
        "antidisestablishmentarianism"
    );

    for max_width in [35.0, 60.0, 150.0] {
        let lines = wrap(&ORACLE, &text, 0.0, 10, Px(max_width)).unwrap();
        assert_reconstructs(&text, &lines);
        for line in &lines {
            assert!(measure(&ORACLE, 10, 0.0, line).unwrap().width <= Px(max_width));
        }
    }
}

#[test]
fn split_chunks_rebuild_the_word() {
    let words = [
        "pneumonoultramicroscopicsilicovolcanoconiosis",
        "日本語のテキストも分割できる",
        "x",
    ];
    for word in words {
        for max_width in [1.0, 12.0, 33.0] {
            let chunks = split_word(&ORACLE, word, 0.0, 6, Px(max_width)).unwrap();
            assert!(chunks.iter().all(|c| !c.is_empty()));
            assert_eq!(chunks.concat(), word);
        }
    }
}

#[test]
fn whitespace_only_text_is_kept_as_is() {
    let text = " \n \r\n\t";
    let lines = wrap(&ORACLE, text, 0.0, 12, Px(100.0)).unwrap();
    assert_eq!(lines, vec![text.to_string()]);

    let layout = fit_wrapped(&ORACLE, text, region(100.0, 100.0), SizeBounds::new(8, 20)).unwrap();
    assert_eq!(layout.wrap.lines, vec![text.to_string()]);
}

#[test]
fn fitting_is_deterministic() {
    let text = lipsum::lipsum(80);
    let target = region(900.0, 500.0);
    let run = || fit_wrapped(&ORACLE, &text, target, SizeBounds::new(12, 96)).unwrap();
    let first = run();
    let second = run();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn measurement_failures_abort_the_fit() {
    let oracle = MissingGlyph { bad: '☃' };
    let err = fit_wrapped(&oracle, "let it ☃ snow", region(500.0, 500.0), SizeBounds::new(10, 40))
        .unwrap_err();
    assert_eq!(
        err,
        FitError::MeasurementUnavailable {
            ch: '☃',
            reason: "no glyph".into()
        }
    );
}

#[test]
fn contract_violations_are_reported() {
    let err = fit_wrapped(&ORACLE, "text", region(100.0, 100.0), SizeBounds::new(50, 10));
    assert!(matches!(err, Err(FitError::InvalidBounds(_))));

    let err = fit_wrapped(&ORACLE, "text", region(100.0, f32::NAN), SizeBounds::new(10, 50));
    assert!(matches!(err, Err(FitError::InvalidBounds(_))));

    let err = fit_line("text", 0.0, region(-1.0, 100.0), SizeBounds::new(10, 50));
    assert!(matches!(err, Err(FitError::InvalidBounds(_))));
}

#[test]
fn rotation_is_measured_as_a_bounding_box() {
    // a quarter turn swaps the text's width and height
    let bounds = SizeBounds::new(4, 200);
    let flat = fit_line("abcdefgh", 0.0, region(400.5, 60.5), bounds).unwrap();
    let upright = fit_line("abcdefgh", 90.0, region(60.5, 400.5), bounds).unwrap();
    assert_eq!(flat, Fit::Fitted(60));
    assert_eq!(flat, upright);
}
