//! Session save/load and dirty-flag tests.

use turtle_canvas::BufferCanvas;
use turtle_session::{MemoryStore, NullImageStore, Session};

fn session_with_memory_store() -> Session<BufferCanvas> {
    Session::with_stores(
        BufferCanvas::default(),
        Box::new(MemoryStore::new()),
        Box::new(NullImageStore),
    )
}

fn run(session: &mut Session<BufferCanvas>, lines: &[&str]) {
    for line in lines {
        session
            .execute(line)
            .unwrap_or_else(|e| panic!("{line:?} rejected: {e}"));
    }
}

#[test]
fn save_then_load_reproduces_the_drawing_history() {
    let mut session = session_with_memory_store();
    run(
        &mut session,
        &[
            "forward 50",
            "green",
            "circle 30",
            "penup",
            "reverse 10",
            "save commands",
        ],
    );
    let drawn: Vec<String> = session
        .drawing_history()
        .commands()
        .map(String::from)
        .collect();
    let logged = session.command_log().lines().to_vec();

    run(&mut session, &["load commands"]);
    let reloaded: Vec<String> = session
        .drawing_history()
        .commands()
        .map(String::from)
        .collect();
    assert_eq!(reloaded, drawn);
    assert_eq!(session.command_log().lines(), logged);
    assert!(!session.commands_unsaved());
}

#[test]
fn meta_commands_are_never_persisted() {
    let mut session = session_with_memory_store();
    run(
        &mut session,
        &["forward 10", "save commands", "left 45", "save commands"],
    );
    // The log (and therefore the saved file) holds only real commands.
    assert_eq!(session.command_log().lines(), ["forward 10", "left 45"]);

    run(&mut session, &["load commands"]);
    assert_eq!(session.command_log().lines(), ["forward 10", "left 45"]);
}

#[test]
fn replay_is_sequential_reentry_not_a_snapshot() {
    let mut session = session_with_memory_store();
    run(&mut session, &["forward 50", "save commands"]);
    let first_run = session.canvas().segments().to_vec();

    // Move the turtle somewhere else, then reload: the file replays from
    // the current pose, so the segment starts where the turtle now is.
    run(&mut session, &["left 90", "forward 100"]);
    run(&mut session, &["load commands"]);
    let reloaded = session.canvas().segments().to_vec();
    assert_eq!(reloaded.len(), 1);
    assert_ne!(reloaded, first_run);
    assert_eq!(session.command_log().lines(), ["forward 50"]);
}

#[test]
fn malformed_lines_fail_individually_without_aborting_the_load() {
    let mut session = session_with_memory_store();
    let lines = vec![
        "forward 30".to_string(),
        String::new(),
        "gallop 7".to_string(),
        "   ".to_string(),
        "left 45".to_string(),
    ];
    session.replay_lines(&lines);
    assert_eq!(session.command_log().lines(), ["forward 30", "left 45"]);
    assert_eq!(session.drawing_history().len(), 1);
}

#[test]
fn load_discards_the_previous_session_state() {
    let mut session = session_with_memory_store();
    run(&mut session, &["forward 10", "circle 5", "save commands"]);

    // Build up unrelated state, then reload the two-command file.
    run(&mut session, &["forward 20", "forward 20", "forward 20"]);
    assert_eq!(session.drawing_history().len(), 5);

    run(&mut session, &["load commands"]);
    assert_eq!(session.drawing_history().len(), 2);
    assert_eq!(session.command_log().len(), 2);

    // Undo now walks the reloaded history only.
    session.undo();
    assert_eq!(session.drawing_history().len(), 1);
    assert_eq!(
        session.drawing_history().last().unwrap().command,
        "forward 10"
    );
}

#[test]
fn image_save_clears_the_drawing_flag() {
    let mut session = session_with_memory_store();
    run(&mut session, &["forward 10"]);
    assert!(session.drawing_unsaved());

    run(&mut session, &["save image"]);
    assert!(!session.drawing_unsaved());
    // The meta line was not recorded.
    assert_eq!(session.command_log().lines(), ["forward 10"]);
}

#[test]
fn commands_flag_follows_save_and_new_input() {
    let mut session = session_with_memory_store();
    run(&mut session, &["forward 10"]);
    assert!(session.commands_unsaved());

    run(&mut session, &["save commands"]);
    assert!(!session.commands_unsaved());

    run(&mut session, &["penup"]);
    assert!(session.commands_unsaved());
}
