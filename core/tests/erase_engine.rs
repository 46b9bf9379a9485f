//! Erase engine against an in-memory host.

use libsinhala_core::{
    erase_count, erase_one, Editor, EditorResult, ImeSession, PhoneticEditor, SinglishKeymap,
    TextBuffer, TextHost,
};

#[test]
fn erasing_a_conjunct_restores_prior_text() {
    let mut editor = PhoneticEditor::new(SinglishKeymap::new());
    let mut session = ImeSession::default();
    let mut buf = TextBuffer::new();

    editor.process_key("k", &mut session, &mut buf);
    let before_conjunct = buf.text();
    assert_eq!(before_conjunct, "ක්");

    let result = editor.process_key("r", &mut session, &mut buf);
    assert_eq!(
        result,
        EditorResult::Commit { text: "\u{200D}ර්".into(), erased: 0 }
    );

    assert_eq!(erase_one(&mut buf).unwrap(), 1);
    assert_eq!(erase_one(&mut buf).unwrap(), 2);
    assert_eq!(buf.text(), before_conjunct);
}

#[test]
fn erase_one_never_splits_surrogates() {
    for text in ["😀", "ක😀", "😀😀", "ක්😀"] {
        let mut buf = TextBuffer::from_text(text);
        let len = buf.len();
        assert_eq!(erase_one(&mut buf).unwrap(), 2, "{:?}", text);
        assert_eq!(buf.len(), len - 2);
        // what is left is still valid UTF-16
        let rest = buf.units_before_cursor(len).unwrap();
        assert!(String::from_utf16(&rest).is_ok());
        assert_eq!(buf.text(), text.strip_suffix('😀').unwrap());
    }
}

#[test]
fn erase_one_takes_joiner_left_before_emoji() {
    let mut buf = TextBuffer::from_text("a\u{200D}😀");
    assert_eq!(erase_one(&mut buf).unwrap(), 3);
    assert_eq!(buf.text(), "a");
}

#[test]
fn erase_in_middle_of_text() {
    let mut buf = TextBuffer::from_text("ක්\u{200D}රකා");
    assert!(buf.set_cursor(4));
    assert_eq!(erase_one(&mut buf).unwrap(), 2);
    assert_eq!(buf.text(), "ක්කා");
    assert_eq!(buf.cursor(), 2);
}

#[test]
fn erase_count_is_exact() {
    let mut buf = TextBuffer::from_text("ක්\u{200D}ර");
    assert_eq!(erase_count(&mut buf, 3).unwrap(), 3);
    assert_eq!(buf.text(), "ක");
    assert_eq!(erase_count(&mut buf, 0).unwrap(), 0);
    assert_eq!(buf.text(), "ක");
}

#[test]
fn erase_on_detached_host_fails_without_change() {
    let mut buf = TextBuffer::from_text("ක්");
    buf.detach();
    assert!(erase_one(&mut buf).is_err());
    buf.attach();
    assert_eq!(buf.text(), "ක්");
}
