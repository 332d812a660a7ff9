use bashlex::lexer::{HeredocQueue, InvariantViolation};

#[test]
fn empty_queue_expects_nothing() {
    let queue = HeredocQueue::new();
    assert!(queue.is_empty());
    assert!(!queue.is_next_marker("EOF\n"));
    assert!(!queue.is_expecting_evaluating_heredoc());
    assert!(!queue.is_ignoring_tabs());
}

#[test]
fn markers_are_closed_in_encounter_order() {
    let mut queue = HeredocQueue::new();
    queue.push_marker("A", false);
    queue.push_marker("'B'", false);
    assert_eq!(queue.len(), 2);

    assert!(queue.is_next_marker("A\n"));
    assert!(!queue.is_next_marker("B\n"));
    assert!(queue.is_expecting_evaluating_heredoc());

    let first = queue.pop_marker("A\n").expect("A is next");
    assert_eq!(first.marker, "A");
    assert!(first.evaluating);

    assert!(queue.is_next_marker("B"));
    assert!(!queue.is_expecting_evaluating_heredoc());
    let second = queue.pop_marker("B").expect("B is next");
    assert_eq!(second.marker, "B");
    assert!(queue.is_empty());
}

#[test]
fn quoted_and_escaped_markers_match_their_clean_text() {
    let mut queue = HeredocQueue::new();
    queue.push_marker("\"END\"", false);
    assert!(queue.is_next_marker("END\n"));
    assert!(!queue.is_next_marker("\"END\"\n"));

    let mut queue = HeredocQueue::new();
    queue.push_marker("\\END\n", false);
    assert!(queue.is_next_marker("END"));
}

#[test]
fn dash_heredoc_accepts_tab_indented_terminator() {
    let mut queue = HeredocQueue::new();
    queue.push_marker("\tEOF", true);
    assert!(queue.is_ignoring_tabs());
    assert!(queue.is_next_marker("\t\tEOF\n"));
    assert!(!queue.is_next_marker("  EOF\n"));
}

#[test]
fn plain_heredoc_rejects_tab_indented_terminator() {
    let mut queue = HeredocQueue::new();
    queue.push_marker("EOF", false);
    assert!(!queue.is_ignoring_tabs());
    assert!(!queue.is_next_marker("\tEOF\n"));
}

#[test]
fn terminator_must_match_the_whole_line() {
    let mut queue = HeredocQueue::new();
    queue.push_marker("EOF", false);
    assert!(!queue.is_next_marker("EOF \n"));
    assert!(!queue.is_next_marker("EOFX\n"));
}

#[test]
fn popping_an_unexpected_marker_is_rejected() {
    let mut queue = HeredocQueue::new();
    queue.push_marker("A", false);
    assert_eq!(
        queue.pop_marker("B\n"),
        Err(InvariantViolation::UnexpectedHeredocMarker {
            expected: "A".to_string(),
            found: "B".to_string(),
        })
    );
    assert_eq!(queue.len(), 1);
}

#[test]
fn popping_from_empty_queue_is_rejected() {
    let mut queue = HeredocQueue::new();
    assert_eq!(
        queue.pop_marker("EOF"),
        Err(InvariantViolation::NoPendingHeredoc)
    );
}
