// profanity-core/tests/pipeline_integration_tests.rs
use profanity_core::{
    FilterOptions, FilterPipeline, FilterTarget, ProfanityEngine, ProfanityError,
    ReplacementStrategy, WordSource, BUILTIN_SOURCE_FILES, CENSOR_EMOJI,
};

fn options(strategy: ReplacementStrategy) -> FilterOptions {
    FilterOptions::new(strategy, FilterTarget::Body)
}

#[test_log::test(tokio::test)]
async fn test_filter_profanity_asterisk_inputs() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let cases = [
        ("This is a clean sentence.", "This is a clean sentence."),
        (
            "This is a sentence with the word crap.",
            "This is a sentence with the word ****.",
        ),
        (
            "This is a sentence with the word CrAp.",
            "This is a sentence with the word ****.",
        ),
        (
            "This is a sentence with the word crap and shit.",
            "This is a sentence with the word **** and ****.",
        ),
        (
            "This is a sentence with the word crap and shit and fuck.",
            "This is a sentence with the word **** and **** and ****.",
        ),
        (
            "This is a sentence with the word crap and shit and fuck and ass.",
            "This is a sentence with the word **** and **** and **** and ***.",
        ),
    ];

    for (input, expected) in cases {
        let result = pipeline
            .filter_profanity(Some(input), &options(ReplacementStrategy::Asterisk))
            .await?;
        assert_eq!(result.output(), expected, "input: {input}");
        if result.is_filtered {
            assert!(result.match_count() > 0);
        } else {
            assert!(result.matches.is_none());
            assert_eq!(result.output(), input);
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_null_and_empty_input_are_untouched() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    for strategy in [
        ReplacementStrategy::Asterisk,
        ReplacementStrategy::Bleep,
        ReplacementStrategy::Emoji,
        ReplacementStrategy::MiddleAsterisk,
    ] {
        let none = pipeline.filter_profanity(None, &options(strategy)).await?;
        assert!(none.final_output.is_none());
        assert!(!none.is_filtered);
        assert!(none.matches.is_none());

        let empty = pipeline.filter_profanity(Some(""), &options(strategy)).await?;
        assert_eq!(empty.final_output.as_deref(), Some(""));
        assert!(!empty.is_filtered);
        assert!(empty.matches.is_none());
        assert!(empty.steps.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test_additional_source_with_bleep_and_emoji() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let input = "I love WebForms!";
    let custom = vec![WordSource::new("Custom", ["WebForms"])];

    let title = pipeline
        .filter_profanity(
            Some(input),
            &FilterOptions::new(ReplacementStrategy::Bleep, FilterTarget::Title)
                .with_additional_sources(custom.clone()),
        )
        .await?;
    assert_eq!(title.output(), "I love bleep!");
    assert!(title.is_filtered);
    assert_eq!(title.match_count(), 1);

    let body = pipeline
        .filter_profanity(
            Some(input),
            &FilterOptions::new(ReplacementStrategy::Emoji, FilterTarget::Body)
                .with_additional_sources(custom),
        )
        .await?;
    assert_ne!(body.output(), input);
    assert_eq!(body.output(), format!("I love {CENSOR_EMOJI}!"));
    assert!(body.is_filtered);
    assert_eq!(body.match_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_emoji_strategy_counts_each_word_once() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let input = "This is fucking bullshit!";
    let result = pipeline
        .filter_profanity(Some(input), &options(ReplacementStrategy::Emoji))
        .await?;
    assert_ne!(result.output(), input);
    assert!(result.is_filtered);
    assert_eq!(result.match_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_manual_source_with_middle_asterisk() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let input = "Does this get filtered if I say WebForms?! Well, does it?";
    let result = pipeline
        .filter_profanity(
            Some(input),
            &options(ReplacementStrategy::MiddleAsterisk)
                .with_additional_sources([WordSource::new("ManualProfaneWords", ["WebForms"])]),
        )
        .await?;
    assert!(result.is_filtered);
    assert_eq!(
        result.output(),
        "Does this get filtered if I say W******s?! Well, does it?"
    );
    let last = result.steps.last().expect("custom source step");
    assert_eq!(last.profane_source_data, "ManualProfaneWords");
    assert!(last.is_filtered);
    Ok(())
}

#[tokio::test]
async fn test_multi_step_middle_asterisk() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let input = "Lots of fucking words like manky and arrusa!";
    let result = pipeline
        .filter_profanity(Some(input), &options(ReplacementStrategy::MiddleAsterisk))
        .await?;

    assert!(result.is_filtered);
    assert_eq!(result.output(), "Lots of f*****g words like m***y and a****a!");
    assert_eq!(result.steps.len(), BUILTIN_SOURCE_FILES.len());
    assert_eq!(result.filtered_steps().count(), 3);

    let filtered: Vec<&str> = result
        .filtered_steps()
        .map(|s| s.profane_source_data.as_str())
        .collect();
    assert_eq!(
        filtered,
        vec![
            "BritishSwearWords.txt",
            "GoogleBannedWords.txt",
            "ItalianSwearWords.txt"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_single_word_filters_exactly_one_step() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let input = "Well that was bollocks, honestly.";
    let result = pipeline
        .filter_profanity(Some(input), &options(ReplacementStrategy::Asterisk))
        .await?;

    assert_eq!(result.steps.len(), BUILTIN_SOURCE_FILES.len());
    let filtered: Vec<_> = result.filtered_steps().collect();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].matches.len(), 1);
    assert_eq!(result.output(), "Well that was ********, honestly.");
    Ok(())
}

#[tokio::test]
async fn test_redacted_text_is_a_clean_pass() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let first = pipeline
        .filter_profanity(Some("crap and arse"), &options(ReplacementStrategy::Asterisk))
        .await?;
    assert_eq!(first.output(), "**** and ****");

    let second = pipeline
        .filter_profanity(first.final_output.as_deref(), &options(ReplacementStrategy::Asterisk))
        .await?;
    assert!(!second.is_filtered);
    assert!(second.matches.is_none());
    assert_eq!(second.output(), "**** and ****");
    Ok(())
}

#[tokio::test]
async fn test_substrings_never_match() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let input = "The class hired an assassin to pass the bass.";
    let result = pipeline
        .filter_profanity(Some(input), &options(ReplacementStrategy::Asterisk))
        .await?;
    assert!(!result.is_filtered);
    assert_eq!(result.output(), input);
    Ok(())
}

#[tokio::test]
async fn test_case_insensitive_shapes_match() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let lower = pipeline
        .filter_profanity(Some("crap"), &options(ReplacementStrategy::MiddleAsterisk))
        .await?;
    let mixed = pipeline
        .filter_profanity(Some("CrAp"), &options(ReplacementStrategy::MiddleAsterisk))
        .await?;
    assert_eq!(lower.output(), "c**p");
    assert_eq!(mixed.output(), "C**p");
    assert_eq!(mixed.matches.as_ref().map(|m| m[0].value.as_str()), Some("CrAp"));
    Ok(())
}

#[tokio::test]
async fn test_pull_request_template_is_not_flagged() -> Result<(), ProfanityError> {
    let input = r#"
## Purpose
<!-- Describe the intention of the changes being proposed. What problem does it solve or functionality does it add? -->
* ...

## Does this introduce a breaking change?
<!-- Mark one with an "x". -->
```
[ ] Yes
[ ] No
```

## Pull Request Type
What kind of change does this Pull Request introduce?

<!-- Please check the one that applies to this PR using "x". -->
```
[ ] Bugfix
[ ] Feature
[ ] Code style update (formatting, local variables)
[ ] Refactoring (no functional changes, no api changes)
[ ] Documentation content changes
[ ] Other... Please describe:
```

## How to Test
*  Get the code

```
git clone [repo-address]
cd [repo-name]
git checkout [branch-name]
npm install
```

* Test the code
<!-- Add steps to run the tests suite and/or manually test -->
```
```

## What to Check
Verify that the following are valid
* ...

## Other Information
<!-- Add any other helpful information that may be needed here. -->
"#;
    let pipeline = FilterPipeline::with_builtin_sources();
    let result = pipeline
        .filter_profanity(Some(input), &options(ReplacementStrategy::MiddleAsterisk))
        .await?;
    assert!(!result.is_filtered);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_additional_source_is_dropped() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let result = pipeline
        .filter_profanity(
            Some("I love WebForms and Silverlight"),
            &options(ReplacementStrategy::Bleep).with_additional_sources([
                WordSource::new("Custom", ["WebForms"]),
                WordSource::new("Custom", ["Silverlight"]),
            ]),
        )
        .await?;
    assert_eq!(result.steps.len(), BUILTIN_SOURCE_FILES.len() + 1);
    assert_eq!(result.output(), "I love bleep and Silverlight");
    Ok(())
}

#[tokio::test]
async fn test_empty_additional_source_is_configuration_error() {
    let pipeline = FilterPipeline::with_builtin_sources();
    let err = pipeline
        .filter_profanity(
            Some("crap"),
            &options(ReplacementStrategy::Asterisk)
                .with_additional_sources([WordSource::new("Custom", Vec::<String>::new())]),
        )
        .await
        .unwrap_err();
    assert!(err.is_configuration_error());
}

#[tokio::test]
async fn test_duplicate_with_empty_words_is_configuration_error() {
    let pipeline = FilterPipeline::with_builtin_sources();
    let err = pipeline
        .filter_profanity(
            Some("crap"),
            &options(ReplacementStrategy::Asterisk).with_additional_sources([
                WordSource::new("Custom", ["WebForms"]),
                WordSource::new("Custom", Vec::<String>::new()),
            ]),
        )
        .await
        .unwrap_err();
    assert!(err.is_configuration_error());
}

#[test]
fn test_analyze_for_stats_reports_sources() -> Result<(), ProfanityError> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let summary = pipeline.analyze_for_stats(
        "crap, shit and WebForms",
        &[WordSource::new("Custom", ["WebForms"])],
    )?;
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].source_name, "AmericanCurseWords.txt");
    assert_eq!(summary[0].occurrences, 2);
    assert_eq!(summary[1].source_name, "Custom");
    assert_eq!(summary[1].matched_words, vec!["WebForms".to_string()]);
    assert_eq!(pipeline.registry().builtin_sources().len(), BUILTIN_SOURCE_FILES.len());
    Ok(())
}
