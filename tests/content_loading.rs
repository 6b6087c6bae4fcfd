use std::fs;
use std::path::PathBuf;

use nihongo_quiz::data::ContentError;
use nihongo_quiz::{LoadError, QuestionKind, load_lessons_from_json};

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("nihongo-quiz-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_every_variant() {
    let path = write_temp(
        "variants.json",
        r#"[{
            "id": 10,
            "title": "Mixed",
            "questions": [
                { "type": "choice", "question": "q", "explanation": "e", "options": ["a"], "correct": 0 },
                { "type": "translation", "question": "q", "explanation": "e", "options": ["a", "b"], "correct": 1 },
                { "type": "dialogue", "question": "q", "explanation": "e", "options": ["a"], "correct": 0 },
                { "type": "video-choice", "question": "q", "explanation": "e", "video": "v.mp4",
                  "sentence": { "prefix": "p" }, "options": ["a"], "correct": 0 },
                { "type": "word-order", "question": "q", "explanation": "e",
                  "words": [{ "text": "b", "order": 1 }, { "text": "a", "order": 0 }], "correct": "ab" }
            ]
        }]"#,
    );

    let repo = load_lessons_from_json(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let labels: Vec<&str> = repo.lessons()[0]
        .questions
        .iter()
        .map(|question| question.kind_label())
        .collect();
    assert_eq!(
        labels,
        vec!["choice", "translation", "dialogue", "video-choice", "word-order"]
    );
    assert!(matches!(
        repo.question(0, 4).unwrap().kind,
        QuestionKind::WordOrder { .. }
    ));
}

#[test]
fn unsolvable_word_order_is_rejected_at_load() {
    let path = write_temp(
        "unsolvable.json",
        r#"[{
            "id": 1,
            "title": "Broken",
            "questions": [
                { "type": "word-order", "question": "q", "explanation": "e",
                  "words": [{ "text": "です", "order": 1 }, { "text": "学生", "order": 0 }],
                  "correct": "私は学生です" }
            ]
        }]"#,
    );

    let err = load_lessons_from_json(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    match err {
        LoadError::Content { source, .. } => assert_eq!(
            source,
            ContentError::UnsolvableWordOrder {
                lesson_id: 1,
                question: 0,
                assembled: "学生です".to_string(),
                correct: "私は学生です".to_string(),
            }
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_choice_index_is_rejected_at_load() {
    let path = write_temp(
        "bad-index.json",
        r#"[{ "id": 1, "title": "Broken", "questions": [
            { "type": "video-choice", "question": "q", "explanation": "e", "video": "v.mp4",
              "options": ["田中", "山田"], "correct": 4 }
        ]}]"#,
    );

    let err = load_lessons_from_json(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(err.to_string().contains("correct index 4"));
}
