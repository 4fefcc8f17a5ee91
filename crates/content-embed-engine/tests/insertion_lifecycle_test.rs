//! End-to-end insertion: registry → command → document → renderers

use content_embed_engine::{
    BlockInput, DisplayNode, DocumentSink, DocumentTree, HtmlRenderer, InsertCommand, InsertError,
    KeywordBlock, MdxRenderer, PropertyValue, PublishError, Registry, Renderer, SharedDocument,
    TextRenderer, VideoBlock,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn teacher_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register(
            KeywordBlock::new(
                "teacher-profile",
                ["filip", "ahilleas"],
                "teacherInput",
                "Teacher profile",
            )
            .accepting(["filip", "ahilleas"]),
        )
        .unwrap();
    registry
}

#[test]
fn teacher_profile_scenario() {
    let registry = teacher_registry();
    let command = InsertCommand::new(&registry);
    let mut doc = DocumentTree::new();

    // Given a known teacher name typed in mixed case
    let inserted = command.attempt_insert(&mut doc, "Filip").unwrap();

    // Then the document holds exactly one teacher-profile node
    assert_eq!(doc.len(), 1);
    let node = doc.nodes()[0].as_block().expect("structured node");
    assert_eq!(node.id(), inserted.id);
    assert_eq!(node.kind(), "teacher-profile");
    assert_eq!(
        node.properties().iter().collect::<Vec<_>>(),
        vec![(&"teacherInput".to_string(), &PropertyValue::from("filip"))]
    );
    assert_eq!(node.children(), [DisplayNode::text("Teacher profile filip")]);

    // And an unknown name leaves it untouched
    let before = doc.clone();
    let err = command.attempt_insert(&mut doc, "socrates").unwrap_err();
    assert!(matches!(err, InsertError::UnrecognizedInput { .. }));
    assert_eq!(doc, before);
}

#[rstest]
#[case::video_first(&["video", "teacher-profile"], "video")]
#[case::teacher_first(&["teacher-profile", "video"], "teacher-profile")]
fn ambiguous_input_picks_first_registered(#[case] order: &[&str], #[case] expected: &str) {
    let mut registry = Registry::new();
    for kind in order {
        match *kind {
            "video" => registry.register(VideoBlock::new()).unwrap(),
            _ => registry.register(KeywordBlock::teacher_profile()).unwrap(),
        }
    }
    let command = InsertCommand::new(&registry);

    for _ in 0..5 {
        let mut doc = DocumentTree::new();
        let kind = match command.attempt_insert(&mut doc, "filip yt") {
            Ok(inserted) => inserted.kind,
            Err(InsertError::InvalidProperties { kind, .. }) => kind,
            Err(other) => panic!("unexpected error: {other}"),
        };
        assert_eq!(kind, expected);
        assert_eq!(
            registry.resolve_input(&BlockInput::new("filip yt")).map(|d| d.kind()),
            Some(expected)
        );
    }
}

#[test]
fn failed_inserts_never_touch_the_document() {
    let registry = Registry::with_builtin_blocks();
    let command = InsertCommand::new(&registry);
    let mut doc = DocumentTree::from_nodes(vec![DisplayNode::text("Welcome")]);
    doc.move_cursor(0);
    let cursor = doc.cursor();

    for raw in ["", "plato", "yt", "YouTube: coming soon", "teacher"] {
        assert!(command.attempt_insert(&mut doc, raw).is_err(), "{raw:?}");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.cursor(), cursor);
    }
}

#[test]
fn each_success_grows_document_by_one_and_advances_cursor() {
    let registry = Registry::with_builtin_blocks();
    let command = InsertCommand::new(&registry);
    let mut doc = DocumentTree::new();

    for (i, raw) in ["filip", "https://youtu.be/w-kwUHMYIfk", "Ahilleas"]
        .into_iter()
        .enumerate()
    {
        let before = doc.len();
        let inserted = command.attempt_insert(&mut doc, raw).unwrap();
        assert_eq!(doc.len(), before + 1);
        assert_eq!(inserted.patch.inserted_at, i);
        assert_eq!(doc.cursor().position, i + 1);
    }
}

#[test]
fn racing_channels_on_shared_document_never_lose_or_misplace_inserts() {
    let registry = Registry::with_builtin_blocks();
    let doc = SharedDocument::default();

    std::thread::scope(|scope| {
        for name in ["filip", "ahilleas"] {
            let mut channel = doc.clone();
            let registry = &registry;
            scope.spawn(move || {
                let command = InsertCommand::new(registry);
                for _ in 0..20 {
                    loop {
                        match command.attempt_insert(&mut channel, name) {
                            Ok(_) => break,
                            Err(e) if e.is_retryable() => continue,
                            Err(e) => panic!("unexpected error: {e}"),
                        }
                    }
                }
            });
        }
    });

    let snapshot = doc.snapshot();
    assert_eq!(snapshot.nodes.len(), 40);
    assert_eq!(snapshot.version, 40);
    assert_eq!(snapshot.cursor.position, 40);
    assert_eq!(
        snapshot
            .blocks()
            .filter(|node| node.text_property("teacherInput") == Some("filip"))
            .count(),
        20
    );
}

#[test]
fn stale_cursor_from_second_channel() {
    let registry = Registry::with_builtin_blocks();
    let doc = SharedDocument::default();
    let mut editor = doc.clone();
    let mut sync = doc.clone();

    // Editor captures its cursor, then background sync lands first
    let captured = editor.cursor();
    let live = sync.cursor();
    sync.publish(DisplayNode::text("synced paragraph"), live)
        .unwrap();

    let err = editor
        .publish(DisplayNode::text("stale"), captured)
        .unwrap_err();
    assert!(matches!(err, PublishError::StaleCursor { .. }));

    // A fresh command run picks up the new cursor
    let inserted = InsertCommand::new(&registry)
        .attempt_insert(&mut editor, "filip")
        .unwrap();
    assert_eq!(inserted.patch.inserted_at, 1);
    assert_eq!(doc.len(), 2);
}

#[test]
fn every_renderer_displays_every_node() {
    let mut registry = Registry::with_builtin_blocks();
    registry
        .register(KeywordBlock::new("quote-card", ["quote"], "text", "Quote:"))
        .unwrap();
    let command = InsertCommand::new(&registry);
    let mut doc = DocumentTree::new();
    for raw in ["filip", "yt https://youtu.be/w-kwUHMYIfk Intro", "quote of the week"] {
        command.attempt_insert(&mut doc, raw).unwrap();
    }
    let snapshot = doc.snapshot();

    let text = TextRenderer::new().render_document(&snapshot.nodes);
    assert_eq!(
        text,
        "🧑‍🏫 Teacher profile: filip\n▶ Intro <https://youtu.be/w-kwUHMYIfk>\nQuote: quote of the week"
    );

    let html = HtmlRenderer::new().render_document(&snapshot.nodes);
    assert!(html.contains(r#"<div data-block-kind="quote-card"><p>Quote: quote of the week</p></div>"#));

    let email = HtmlRenderer::email().render_document(&snapshot.nodes);
    assert!(email.contains(">Intro</a>"));

    let mdx = MdxRenderer::new().render_document(&snapshot.nodes);
    assert!(mdx.starts_with(
        r#"<EmbedTeacherProfile teacherInput="filip">Teacher profile filip</EmbedTeacherProfile>"#
    ));
    assert!(mdx.ends_with(
        r#"<EmbedQuoteCard text="quote of the week">Quote: quote of the week</EmbedQuoteCard>"#
    ));

    // Rendering is read-only
    assert_eq!(doc.snapshot(), snapshot);
}

#[test]
fn nodes_serialize_as_wire_contract() {
    let registry = Registry::with_builtin_blocks();
    let mut doc = DocumentTree::new();
    InsertCommand::new(&registry)
        .attempt_insert(&mut doc, "https://www.youtube.com/watch?v=w-kwUHMYIfk")
        .unwrap();

    let value = serde_json::to_value(doc.nodes()).unwrap();
    assert_eq!(value[0]["type"], "block");
    assert_eq!(value[0]["kind"], "video");
    assert_eq!(value[0]["properties"]["videoId"], "w-kwUHMYIfk");
    assert_eq!(
        value[0]["children"][0]["value"],
        "Watch on YouTube: https://youtu.be/w-kwUHMYIfk"
    );
}
