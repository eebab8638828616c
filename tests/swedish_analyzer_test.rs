use stemma::analysis::analyzer::{Analyzer, SwedishAnalyzer};
use stemma::{Result, WordSet};

fn terms(analyzer: &dyn Analyzer, text: &str) -> Result<Vec<String>> {
    Ok(analyzer.analyze(text)?.map(|t| t.text).collect())
}

fn check_one_term(analyzer: &dyn Analyzer, input: &str, expected: &str) -> Result<()> {
    assert_eq!(terms(analyzer, input)?, vec![expected.to_string()], "analyzing {input:?}");
    Ok(())
}

#[test]
fn test_default_analyzer_builds() -> Result<()> {
    let analyzer = SwedishAnalyzer::new()?;
    assert!(analyzer.stop_words().contains("och"));
    Ok(())
}

#[test]
fn test_basics() -> Result<()> {
    let a = SwedishAnalyzer::new()?;
    // stemming
    check_one_term(&a, "jaktkarlarne", "jaktkarl")?;
    check_one_term(&a, "jaktkarlens", "jaktkarl")?;
    // stop word
    assert!(terms(&a, "och")?.is_empty());
    Ok(())
}

#[test]
fn test_exclude() -> Result<()> {
    let exclusions = WordSet::new(["jaktkarlarne"], false);
    let stop_words = (*SwedishAnalyzer::default_stop_set()).clone();
    let a = SwedishAnalyzer::with_stop_words_and_exclusions(stop_words, exclusions)?;
    check_one_term(&a, "jaktkarlarne", "jaktkarlarne")?;
    check_one_term(&a, "jaktkarlens", "jaktkarl")?;
    Ok(())
}

#[test]
fn test_case_sensitive_exclusion_misses_folded_token() -> Result<()> {
    let a = SwedishAnalyzer::with_stop_words_and_exclusions(
        WordSet::empty(),
        WordSet::new(["Jaktkarlarne"], false),
    )?;
    check_one_term(&a, "Jaktkarlarne", "jaktkarl")?;

    let a = SwedishAnalyzer::with_stop_words_and_exclusions(
        WordSet::empty(),
        WordSet::new(["Jaktkarlarne"], true),
    )?;
    check_one_term(&a, "Jaktkarlarne", "jaktkarlarne")
}

#[test]
fn test_position_gaps() -> Result<()> {
    let a = SwedishAnalyzer::new()?;
    let tokens: Vec<_> = a.analyze("jag och du jaktkarlarne")?.collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "jaktkarl");
    assert_eq!(tokens[0].position_increment, 4);
    assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (11, 23));
    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    let a = SwedishAnalyzer::new()?;
    assert!(terms(&a, "")?.is_empty());
    Ok(())
}

#[test]
fn test_reusable_token_stream() -> Result<()> {
    let a = SwedishAnalyzer::new()?;
    let text = "Jaktkarlarne och jaktkarlens hundar";
    let first: Vec<_> = a.analyze(text)?.collect();
    let second: Vec<_> = a.analyze(text)?.collect();
    assert_eq!(first, second);
    Ok(())
}
