//! Property tests for segmentation, model building and the NoContent guard.

use proptest::prelude::*;
use tutorly_guide::model::{ContentBlock, TOPICS_CAPTION, TRANSCRIPT_CAPTION};
use tutorly_guide::{build, ensure_content, GuideError, StudyGuideRequest};

fn paragraph() -> impl Strategy<Value = String> {
    "[a-z%&#]{1,8}( [a-z]{1,8}){0,3}(\n[a-z]{1,8}){0,2}"
}

fn blank_run() -> impl Strategy<Value = String> {
    prop::collection::vec("[ \t]{0,3}", 1..4).prop_map(|lines| {
        let mut gap = String::from("\n");
        for line in lines {
            gap.push_str(&line);
            gap.push('\n');
        }
        gap
    })
}

proptest! {
    #[test]
    fn paragraphs_follow_blank_line_runs(
        paragraphs in prop::collection::vec(paragraph(), 0..6),
        gaps in prop::collection::vec(blank_run(), 6),
    ) {
        let mut notes = String::new();
        for (i, paragraph) in paragraphs.iter().enumerate() {
            if i > 0 {
                notes.push_str(&gaps[i]);
            }
            notes.push_str(paragraph);
        }

        let doc = build(&StudyGuideRequest::new("T", "", notes));
        let built: Vec<&str> = doc.paragraphs().collect();
        prop_assert_eq!(built, paragraphs.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn list_holds_exactly_the_non_blank_topic_lines(
        lines in prop::collection::vec("[ \t]{0,2}[a-zA-Z]{0,6}[ \t]{0,2}", 0..8),
    ) {
        let topics = lines.join("\n");
        let expected: Vec<String> = lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let doc = build(&StudyGuideRequest::new("T", topics, ""));
        let blocks = doc.blocks();

        if expected.is_empty() {
            prop_assert!(doc.topics().is_none());
            prop_assert_eq!(&blocks[1], &ContentBlock::Subheader(TRANSCRIPT_CAPTION));
        } else {
            prop_assert_eq!(&blocks[1], &ContentBlock::Subheader(TOPICS_CAPTION));
            prop_assert_eq!(&blocks[2], &ContentBlock::List(expected));
        }
    }

    #[test]
    fn structure_invariants_hold(
        title in "[ a-zA-Z]{0,10}",
        topics in "[ \na-z]{0,20}",
        notes in "[ \na-z]{0,40}",
    ) {
        let request = StudyGuideRequest::new(title.clone(), topics, notes);
        let doc = build(&request);
        let blocks = doc.blocks();

        prop_assert_eq!(&blocks[0], &ContentBlock::Title(title));
        prop_assert!(matches!(blocks.last(), Some(ContentBlock::Attribution(_))));
        let subheaders = blocks
            .iter()
            .filter(|block| matches!(block, ContentBlock::Subheader(_)))
            .count();
        prop_assert_eq!(subheaders, 1);
        prop_assert_eq!(build(&request), doc);
    }

    #[test]
    fn guard_rejects_only_when_both_fields_are_blank(
        topics in "[ \t\na]{0,6}",
        notes in "[ \t\nb]{0,6}",
    ) {
        let blank = topics.trim().is_empty() && notes.trim().is_empty();
        let result = ensure_content(&StudyGuideRequest::new("T", topics, notes));
        if blank {
            prop_assert_eq!(result, Err(GuideError::NoContent));
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
