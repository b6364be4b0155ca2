//! Integration tests for restart: the whole progression state is replaced
//! and previously-unlocked secrets disappear from the start scene.

use std::sync::Arc;

use questfolio::engine::Session;
use questfolio::story::{portfolio_story, START_SCENE_ID};

const ALL_BASE_ITEMS: [&str; 6] = [
    "electric_beat",
    "soul_melody",
    "romantic_note",
    "code_fragment",
    "wisdom_crystal",
    "creative_spark",
];

fn new_session() -> Session {
    let story = portfolio_story().unwrap();
    let mut session = Session::new(Arc::new(story)).unwrap();
    session.begin();
    session
}

#[test]
fn restart_resets_all_progression_state() {
    let mut session = new_session();
    session.go_to("interests").unwrap();
    session.go_to("music_taste").unwrap();
    for item in ALL_BASE_ITEMS {
        session.collect_item(item);
    }
    assert_eq!(session.state().unlocked.len(), 2);

    let turn = session.restart();

    let state = session.state();
    assert_eq!(state.current, START_SCENE_ID);
    assert!(state.history.is_empty());
    assert!(state.collected.is_empty());
    assert!(state.collection_log.is_empty());
    assert!(state.unlocked.is_empty());
    // Only the freshly-entered start scene is visited.
    assert_eq!(state.visited.len(), 1);
    assert!(state.visited.contains(START_SCENE_ID));

    let view = turn.view.unwrap();
    assert!(view.at_home);
    assert!(!view.can_go_back);
}

#[test]
fn restart_hides_previously_unlocked_choices() {
    let mut session = new_session();
    for item in ALL_BASE_ITEMS {
        session.collect_item(item);
    }
    let unlocked_view = session.go_home().view.unwrap();
    assert_eq!(unlocked_view.choices.len(), 6);

    let fresh_view = session.restart().view.unwrap();
    assert_eq!(fresh_view.choices.len(), 4);
    assert!(!fresh_view
        .choices
        .iter()
        .any(|c| c.text.contains("Hidden area") || c.text.contains("Ultimate secret")));
}

#[test]
fn full_playthrough_ends_with_the_restart_choice() {
    let mut session = new_session();
    for item in ALL_BASE_ITEMS {
        session.collect_item(item);
    }

    session.go_to("hidden_scene").unwrap();
    session.handle_command("1"); // Light of Inspiration
    assert!(session.state().collected.contains("inspiration_light"));

    session.go_home();
    let view = session.go_to("ultimate_scene").unwrap().view.unwrap();
    assert_eq!(view.choices.len(), 2);

    session.handle_command("1"); // Wings of Dreams
    assert_eq!(session.state().collected_count(), 8);

    // Choice 2 restarts the adventure in place.
    let turn = session.handle_command("2");
    assert_eq!(session.state().current, START_SCENE_ID);
    assert!(session.state().collected.is_empty());
    assert!(turn.view.unwrap().at_home);
}
