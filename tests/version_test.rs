use stemma::analysis::analyzer::{Analyzer, ArabicAnalyzer, SwedishAnalyzer};
use stemma::{Result, Version};

fn terms(analyzer: &dyn Analyzer, text: &str) -> Result<Vec<String>> {
    Ok(analyzer.analyze(text)?.map(|t| t.text).collect())
}

#[test]
fn test_arabic_backcompat_46() -> Result<()> {
    let legacy = ArabicAnalyzer::builder().version(Version::V4_6).build()?;
    assert_eq!(terms(&legacy, "א\"א")?, vec!["א", "א"]);

    let current = ArabicAnalyzer::new()?;
    assert_eq!(terms(&current, "א\"א")?, vec!["א\"א"]);
    Ok(())
}

#[test]
fn test_swedish_backcompat_46() -> Result<()> {
    let legacy = SwedishAnalyzer::builder().version(Version::V4_6).build()?;
    assert_eq!(terms(&legacy, "א\"א")?, vec!["א", "א"]);

    let current = SwedishAnalyzer::new()?;
    assert_eq!(terms(&current, "א\"א")?, vec!["א\"א"]);
    Ok(())
}

#[test]
fn test_arabic_backcompat_30() -> Result<()> {
    let legacy = ArabicAnalyzer::builder().version(Version::V3_0).build()?;
    assert_eq!(terms(&legacy, "א\"א")?, vec!["א", "א"]);
    assert_eq!(terms(&legacy, "كبيرة the quick")?, vec!["كبير", "the", "quick"]);
    Ok(())
}

#[test]
fn test_every_version_stems_the_same_words() -> Result<()> {
    for version in Version::ALL {
        let arabic = ArabicAnalyzer::builder().version(version).build()?;
        assert_eq!(
            terms(&arabic, "الكتاب مشروبات أمريكيين")?,
            vec!["كتاب", "مشروب", "امريك"],
            "version {version}"
        );
        assert!(terms(&arabic, "")?.is_empty());

        let swedish = SwedishAnalyzer::builder().version(version).build()?;
        assert_eq!(
            terms(&swedish, "jaktkarlarne och jaktkarlens")?,
            vec!["jaktkarl", "jaktkarl"],
            "version {version}"
        );
        assert!(terms(&swedish, "")?.is_empty());
    }
    Ok(())
}

#[test]
fn test_version_is_fixed_at_construction() -> Result<()> {
    let legacy = ArabicAnalyzer::builder().version(Version::V4_6).build()?;
    assert_eq!(legacy.version(), Version::V4_6);
    assert_eq!(terms(&legacy, "٣")?, vec!["٣"]);
    assert_eq!(terms(&legacy, "٣")?, vec!["٣"]);
    Ok(())
}
