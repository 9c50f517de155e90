use campusdesk::attachment::AttachmentRegistry;
use campusdesk::catalog::report::{self, ReportView};
use campusdesk::catalog::{presets, seed, SelfStudyMaterial, TestBuilder, Taxonomy, Topic};
use campusdesk::error::DeskError;
use campusdesk::filter::FilterValue;
use campusdesk::screen::{ScreenAction, ScreenOutcome, ViewStatus};
use campusdesk::store::CollectionStore;

fn set_filter<R>(key: &str, value: FilterValue) -> ScreenAction<R> {
    ScreenAction::SetFilter {
        key: key.to_string(),
        value,
    }
}

#[test]
fn moving_a_question_to_another_subject() {
    let tax = Taxonomy::question_bank();
    let mut screen = presets::questions().unwrap();
    screen
        .apply(set_filter("subject", FilterValue::one("Mathematics")))
        .unwrap();
    let id = screen.view().id_at(1).unwrap();

    screen.apply(ScreenAction::StartEdit { id }).unwrap();
    screen
        .edit_draft(|q| tax.set_question_subject(q, "Physics"))
        .unwrap();

    // chapter and topic were cleared with the subject
    let err = screen.apply(ScreenAction::CommitEdit).unwrap_err();
    assert!(matches!(err, DeskError::Validation(ref e) if e.has("chapter") && e.has("topic")));
    assert!(screen.edit_state().is_editing());

    screen
        .edit_draft(|q| {
            tax.set_question_chapters(q, vec!["Optics".into()]);
            q.topic = vec!["Refraction".into()];
        })
        .unwrap();
    let outcome = screen.apply(ScreenAction::CommitEdit).unwrap();
    assert_eq!(
        outcome,
        ScreenOutcome::Committed {
            id,
            filters_cleared: true
        }
    );
    assert_eq!(screen.store().get(&id).unwrap().subject, "Physics");
    assert_eq!(screen.view().page.total_items, 10);
}

#[test]
fn topic_editor_follows_subject_change() {
    let tax = Taxonomy::syllabus();
    let mut screen = presets::topics().unwrap();
    screen
        .apply(ScreenAction::Add {
            record: Topic {
                subject: "Math".into(),
                chapter: "Geometry".into(),
                topic: "Triangles".into(),
            },
        })
        .unwrap();
    let id = screen.view().id_at(1).unwrap();

    screen.apply(ScreenAction::StartEdit { id }).unwrap();
    screen
        .edit_draft(|t| tax.set_topic_subject(t, "History"))
        .unwrap();
    assert_eq!(screen.draft().unwrap().chapter, "Ancient");

    screen.apply(ScreenAction::CancelEdit).unwrap();
    assert_eq!(screen.store().get(&id).unwrap().chapter, "Geometry");
}

#[test]
fn self_study_uploads_are_released_with_their_records() {
    let registry = AttachmentRegistry::new();
    let mut screen = presets::self_study().unwrap();

    let material = |file| SelfStudyMaterial {
        name: "Optics notes".into(),
        chapter: "Optics".into(),
        class: "2 PU".into(),
        college: "Harvard".into(),
        file,
    };

    let missing = screen.apply(ScreenAction::Add {
        record: material(None),
    });
    assert!(matches!(missing, Err(DeskError::Validation(_))));

    let first = registry.upload("optics.pdf", b"%PDF-1.4").unwrap();
    screen
        .apply(ScreenAction::Add {
            record: material(Some(first)),
        })
        .unwrap();
    assert_eq!(registry.live(), 1);

    let id = screen.view().id_at(1).unwrap();
    screen.apply(ScreenAction::StartEdit { id }).unwrap();
    let second = registry.upload("optics-v2.pdf", b"%PDF-1.7").unwrap();
    screen
        .apply(ScreenAction::UpdateDraft {
            record: material(Some(second)),
        })
        .unwrap();
    assert_eq!(registry.live(), 2);

    screen.apply(ScreenAction::CommitEdit).unwrap();
    assert_eq!(registry.live(), 1);

    screen.apply(ScreenAction::Remove { id }).unwrap();
    assert_eq!(registry.live(), 0);
    assert_eq!(screen.view().status, ViewStatus::Empty);
}

#[test]
fn non_pdf_upload_is_rejected() {
    let registry = AttachmentRegistry::new();
    let err = registry.upload("notes.docx", b"").unwrap_err();
    assert!(matches!(err, DeskError::Validation(ref e) if e.has("file")));
    assert_eq!(registry.live(), 0);
}

#[test]
fn building_a_test_from_filtered_questions() {
    let mut screen = presets::questions().unwrap();
    screen
        .apply(set_filter("subject", FilterValue::one("Physics")))
        .unwrap();
    screen
        .apply(set_filter("chapter", FilterValue::many(["Mechanics"])))
        .unwrap();

    let mut builder = TestBuilder::new();
    builder.set_title("Mechanics quiz");
    for row in screen.view().rows {
        builder.toggle(&row.record.id);
    }
    let paper = builder.build(&seed::questions().unwrap()).unwrap();
    let ids: Vec<_> = paper.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["6", "7", "10"]);
}

#[test]
fn student_report_drills_into_a_subject() {
    let report = report::sample("John Doe");
    assert_eq!(report.subject_names(), vec!["Mathematics", "Physics", "English"]);
    match report.view(Some("Mathematics")) {
        ReportView::Chapters { subject } => assert_eq!(subject.chapters.len(), 2),
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn assign_screen_cascades_three_levels() {
    let mut screen = presets::assign().unwrap();
    screen
        .apply(set_filter("subject", FilterValue::one("Physics")))
        .unwrap();
    assert_eq!(screen.options("chapter").unwrap(), vec!["Mechanics"]);
    screen
        .apply(set_filter("chapter", FilterValue::many(["Mechanics"])))
        .unwrap();
    assert_eq!(screen.options("topic").unwrap(), vec!["Newton's Laws"]);

    let outcome = screen
        .apply(set_filter("subject", FilterValue::one("Mathematics")))
        .unwrap();
    assert_eq!(
        outcome,
        ScreenOutcome::FiltersChanged {
            cleared: vec!["chapter".to_string()]
        }
    );
    assert_eq!(screen.view().rows.len(), 1);
}
