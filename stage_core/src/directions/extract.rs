//! Token extraction from raw scene text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{SleepSubject, StageDirection};

/// Every surface form a direction can take, most specific first so that
/// named exits win over the bare "Exit." / "Exeunt." forms.
static DIRECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"Enter [A-Za-z,:; \n’]+\.",
        r"|[A-Z]+\.",
        r"|Exit [A-Za-z, \n]+\.",
        r"|Exit\.",
        r"|Exeunt [A-Za-z, \n]+\.",
        r"|Exeunt\.",
        r"|\[_.*[Ss]leep.*_\]",
    ))
    .expect("direction regex")
});

static SCENE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([IVX]+)\.$").expect("scene marker regex"));

static SPEAKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z]+)\.").expect("speaker regex"));

static PROPER_NOUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]+").expect("proper noun regex"));

/// Capitalized words that are part of a direction rather than a name.
const KEYWORDS: &[&str] = &["Enter", "Exit", "Exeunt"];

const SPEAKER_SLEEPS: &[&str] = &["Sleeps.", "Lies down and sleeps."];
const PAIR_SLEEPS: &str = "They sleep";
const ALL_BUT: &str = "Exeunt all but";

/// Lazy iterator over the stage directions of one scene.
///
/// Matches the text left to right. Matches that fit no direction shape are
/// skipped.
pub struct Directions<'t> {
    matches: regex::Matches<'static, 't>,
}

impl Iterator for Directions<'_> {
    type Item = StageDirection;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let found = self.matches.next()?;
            match classify(found.as_str()) {
                Some(direction) => return Some(direction),
                None => log::trace!("ignoring unclassified match {:?}", found.as_str()),
            }
        }
    }
}

/// Extract the stage directions of a scene in textual order.
pub fn extract(scene_text: &str) -> Directions<'_> {
    Directions {
        matches: DIRECTION.find_iter(scene_text),
    }
}

/// Text before the first entrance, which may describe who is already on
/// stage when the scene opens.
pub fn scene_intro(scene_text: &str) -> &str {
    scene_text.split("Enter").next().unwrap_or("").trim()
}

/// Capitalized words in a piece of direction text, minus direction keywords.
pub fn proper_nouns(text: &str) -> Vec<String> {
    PROPER_NOUN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|word| !KEYWORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Classify one matched piece of text.
pub fn classify(raw: &str) -> Option<StageDirection> {
    let text = raw.trim_matches(|c: char| c == '[' || c == '_' || c == ']');

    if let Some(caps) = SCENE_MARKER.captures(text) {
        return Some(StageDirection::SceneMarker {
            numeral: caps[1].to_string(),
        });
    }

    if let Some(rest) = text.strip_prefix("Enter") {
        return Some(StageDirection::Entrance {
            phrase: rest.trim().trim_end_matches('.').trim().to_string(),
            names: proper_nouns(rest),
        });
    }

    if let Some(caps) = SPEAKER.captures(text) {
        return Some(StageDirection::Speaker {
            name: title_case(&caps[1]),
        });
    }

    match text {
        "Exit." => return Some(StageDirection::Exit),
        "Exeunt." => return Some(StageDirection::ExeuntAll),
        _ => {}
    }

    if let Some(index) = text.find(ALL_BUT) {
        return Some(StageDirection::ExeuntAllBut {
            names: proper_nouns(&text[index + ALL_BUT.len()..]),
        });
    }

    if text.contains("Exit") || text.contains("Exeunt") {
        if text.contains("sleep") {
            return Some(split_exit_and_sleep(text));
        }
        return Some(StageDirection::NamedExit {
            names: proper_nouns(text),
        });
    }

    if SPEAKER_SLEEPS.iter().any(|phrase| text.contains(phrase)) {
        return Some(StageDirection::Sleep {
            subject: SleepSubject::Speaker,
        });
    }

    if text.contains(PAIR_SLEEPS) {
        return Some(StageDirection::Sleep {
            subject: SleepSubject::SpeakerAndPrevious,
        });
    }

    None
}

/// Split "Exeunt Fairies. Titania sleeps." into its two halves.
fn split_exit_and_sleep(text: &str) -> StageDirection {
    let mut exiting = Vec::new();
    let mut sleepers = Vec::new();

    for sentence in text.split(". ") {
        if sentence.contains("Exit") || sentence.contains("Exeunt") {
            exiting.extend(proper_nouns(sentence));
        } else if sentence.contains("sleep") {
            sleepers.extend(proper_nouns(sentence));
        }
    }

    StageDirection::ExitAndSleep { exiting, sleepers }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_in_order() {
        let directions: Vec<_> =
            extract("I. Enter Romeo and Juliet. ROMEO. Hi. Exit Romeo. Exeunt.").collect();

        assert_eq!(
            directions,
            vec![
                StageDirection::SceneMarker {
                    numeral: "I".into()
                },
                StageDirection::Entrance {
                    phrase: "Romeo and Juliet".into(),
                    names: names(&["Romeo", "Juliet"]),
                },
                StageDirection::Speaker {
                    name: "Romeo".into()
                },
                StageDirection::NamedExit {
                    names: names(&["Romeo"])
                },
                StageDirection::ExeuntAll,
            ]
        );
    }

    #[test]
    fn test_entrance_names() {
        let d = classify("Enter Theseus, Hippolyta, Philostrate, with Attendants.");
        assert_eq!(
            d,
            Some(StageDirection::Entrance {
                phrase: "Theseus, Hippolyta, Philostrate, with Attendants".into(),
                names: names(&["Theseus", "Hippolyta", "Philostrate", "Attendants"]),
            })
        );
    }

    #[test]
    fn test_four_fairies_phrase() {
        match classify("Enter four Fairies.") {
            Some(StageDirection::Entrance { phrase, names: n }) => {
                assert_eq!(phrase, "four Fairies");
                assert_eq!(n, names(&["Fairies"]));
            }
            other => panic!("unexpected direction {:?}", other),
        }
    }

    #[test]
    fn test_scene_marker_and_speaker() {
        assert_eq!(
            classify("II."),
            Some(StageDirection::SceneMarker {
                numeral: "II".into()
            })
        );
        assert_eq!(
            classify("QUINCE."),
            Some(StageDirection::Speaker {
                name: "Quince".into()
            })
        );
    }

    #[test]
    fn test_bare_and_named_exits() {
        assert_eq!(classify("Exit."), Some(StageDirection::Exit));
        assert_eq!(classify("Exeunt."), Some(StageDirection::ExeuntAll));
        assert_eq!(
            classify("Exeunt Lysander and Hermia."),
            Some(StageDirection::NamedExit {
                names: names(&["Lysander", "Hermia"])
            })
        );
    }

    #[test]
    fn test_exeunt_all_but() {
        assert_eq!(
            classify("Exeunt all but Bottom."),
            Some(StageDirection::ExeuntAllBut {
                names: names(&["Bottom"])
            })
        );
    }

    #[test]
    fn test_bracketed_sleep_directions() {
        assert_eq!(
            classify("[_Sleeps._]"),
            Some(StageDirection::Sleep {
                subject: SleepSubject::Speaker
            })
        );
        assert_eq!(
            classify("[_Lies down and sleeps._]"),
            Some(StageDirection::Sleep {
                subject: SleepSubject::Speaker
            })
        );
        assert_eq!(
            classify("[_They sleep._]"),
            Some(StageDirection::Sleep {
                subject: SleepSubject::SpeakerAndPrevious
            })
        );
    }

    #[test]
    fn test_exit_and_sleep_split() {
        assert_eq!(
            classify("[_Exeunt Fairies. Titania sleeps._]"),
            Some(StageDirection::ExitAndSleep {
                exiting: names(&["Fairies"]),
                sleepers: names(&["Titania"]),
            })
        );
    }

    #[test]
    fn test_unclassified_match_is_skipped() {
        assert_eq!(classify("[_Lysander sleeps._]"), None);

        let directions: Vec<_> = extract("HERMIA. Be it so. [_Lysander sleeps._] Exeunt.").collect();
        assert_eq!(directions.len(), 2);
        assert_eq!(directions[1], StageDirection::ExeuntAll);
    }

    #[test]
    fn test_bracket_wins_over_inner_exit() {
        let directions: Vec<_> =
            extract("FAIRY. Sing. [_Exeunt Fairies. Titania sleeps._]\n\nEnter Oberon.").collect();
        assert!(matches!(directions[1], StageDirection::ExitAndSleep { .. }));
        assert!(matches!(directions[2], StageDirection::Entrance { .. }));
    }

    #[test]
    fn test_scene_intro() {
        let text = "II.\n\nAnother part of the wood.\nLysander and Hermia lie asleep.\n\nEnter Puck.";
        assert_eq!(
            scene_intro(text),
            "II.\n\nAnother part of the wood.\nLysander and Hermia lie asleep."
        );
        assert_eq!(scene_intro("  I. A room.  "), "I. A room.");
    }

    #[test]
    fn test_proper_nouns_skip_keywords() {
        assert_eq!(proper_nouns("Exit Puck and Oberon"), names(&["Puck", "Oberon"]));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("PEASEBLOSSOM"), "Peaseblossom");
        assert_eq!(title_case(""), "");
    }
}
