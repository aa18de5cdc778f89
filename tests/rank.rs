use std::fs;
use std::path::{Path, PathBuf};

use pir::actions::{frequencies, rank};
use pir::scorer::{ScoreConfig, ScoreMode};

struct Fixture {
    corpus: PathBuf,
    profiles: PathBuf,
    dictionary: PathBuf,
}

fn fixture(dir: &Path) -> Fixture {
    let corpus = dir.join("corpus");
    fs::create_dir(&corpus).unwrap();
    fs::write(corpus.join("blade-runner.txt"), "Blade Runner blade runner").unwrap();
    fs::write(corpus.join("congress-vote.txt"), "Congress passed a new law").unwrap();
    fs::write(corpus.join("press-release.pdf"), "not eligible").unwrap();

    let profiles = dir.join("profiles");
    fs::write(
        &profiles,
        "User1#movies\nUser2#movies#politics\nUser3#politics\nUser4#soccer\n",
    )
    .unwrap();

    let dictionary = dir.join("dictionary");
    fs::write(
        &dictionary,
        "movies#blade#runner\npolitics#congress#law\nsoccer#league#goal\n",
    )
    .unwrap();

    Fixture {
        corpus,
        profiles,
        dictionary,
    }
}

fn cosine_only() -> ScoreConfig {
    ScoreConfig {
        threshold: 0.0,
        mode: ScoreMode::CosineOnly,
    }
}

fn execute(fixture: &Fixture, config: &ScoreConfig) -> Vec<rank::ProfileReport> {
    rank::execute(
        &fixture.corpus,
        &fixture.profiles,
        &fixture.dictionary,
        '#',
        false,
        config,
    )
    .unwrap()
}

#[test]
fn cosine_only_ranking_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture(dir.path());

    let reports = execute(&fixture, &cosine_only());

    assert_eq!(reports.len(), 4);

    // a profile aligned with everything a document is about scores 1
    let user1 = &reports[0];
    assert_eq!(user1.name, "User1");
    assert_eq!(user1.recommendations.len(), 1);
    assert_eq!(user1.recommendations[0].document, "blade-runner");
    assert_eq!(user1.recommendations[0].score, 1.0);

    // half-overlapping interests land at cos 45 for both documents
    let user2 = &reports[1];
    assert_eq!(user2.recommendations.len(), 2);
    for recommendation in &user2.recommendations {
        assert!((recommendation.score - 45f64.to_radians().cos()).abs() < 1e-10);
    }

    // no overlap means no entry at all, even with the threshold at zero
    let user4 = &reports[3];
    assert!(user4.recommendations.is_empty());
}

#[test]
fn coverage_weighting_scales_by_token_share() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture(dir.path());

    let reports = execute(&fixture, &ScoreConfig::default());

    // every token of blade-runner matches User1's interests: ratio 1,
    // cosine 1, times the default multiplier of 5
    let user1 = &reports[0];
    assert_eq!(user1.recommendations[0].document, "blade-runner");
    assert!((user1.recommendations[0].score - 5.0).abs() < 1e-10);

    // congress-vote has 2 matching tokens out of 5
    let user3 = &reports[2];
    assert_eq!(user3.recommendations[0].document, "congress-vote");
    assert!((user3.recommendations[0].score - 2.0).abs() < 1e-10);
}

#[test]
fn ineligible_files_are_not_ranked() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture(dir.path());

    let reports = execute(&fixture, &cosine_only());

    for report in &reports {
        for recommendation in &report.recommendations {
            assert_ne!(recommendation.document, "press-release");
        }
    }
}

#[test]
fn reruns_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture(dir.path());
    let config = ScoreConfig::default();

    let first = serde_json::to_value(execute(&fixture, &config)).unwrap();
    let second = serde_json::to_value(execute(&fixture, &config)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn dictionary_vocabulary_spans_the_same_space_here() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture(dir.path());

    // the dictionary's canonical terms coincide with the stemmed
    // interests, so both vocabulary sources must agree
    let from_interests = serde_json::to_value(execute(&fixture, &cosine_only())).unwrap();
    let from_dictionary = serde_json::to_value(
        rank::execute(
            &fixture.corpus,
            &fixture.profiles,
            &fixture.dictionary,
            '#',
            true,
            &cosine_only(),
        )
        .unwrap(),
    )
    .unwrap();

    assert_eq!(from_interests, from_dictionary);
}

#[test]
fn frequency_table_is_zero_filled_over_the_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture(dir.path());

    let table = frequencies::execute(
        &fixture.corpus,
        &fixture.profiles,
        &fixture.dictionary,
        '#',
        false,
    )
    .unwrap();

    let blade_runner = &table["blade-runner"];
    assert_eq!(blade_runner["movi"], 4);
    assert_eq!(blade_runner["politic"], 0);
    assert_eq!(blade_runner["soccer"], 0);

    let congress_vote = &table["congress-vote"];
    assert_eq!(congress_vote["politic"], 2);
    assert!(!table.contains_key("press-release"));
}
