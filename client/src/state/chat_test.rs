use super::*;

fn reply(text: &str, sources: Vec<Source>) -> ChatResponse {
    ChatResponse {
        message: text.to_owned(),
        thread_id: "user-1-abc".to_owned(),
        sources,
        processing_time: Some(1.5),
        search_queries_used: Vec::new(),
        is_clarification: false,
    }
}

fn source(title: &str) -> Source {
    Source { title: title.to_owned(), url: format!("https://example.com/{title}"), short_url: None }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_state_starts_with_greeting() {
    let state = ChatState::new();
    assert_eq!(state.messages.len(), 1);
    let greeting = &state.messages[0];
    assert_eq!(greeting.id, 1);
    assert!(greeting.is_bot);
    assert_eq!(greeting.message, GREETING);
    assert_eq!(greeting.timestamp, JUST_NOW);
    assert!(greeting.sources.is_empty());
}

#[test]
fn new_state_is_idle() {
    let state = ChatState::default();
    assert!(!state.loading);
    assert!(!state.has_interacted);
    assert!(!state.should_autoscroll());
}

// =============================================================
// Sending
// =============================================================

#[test]
fn begin_send_appends_user_message_and_sets_loading() {
    let mut state = ChatState::new();
    let sent = state.begin_send("gaming mouse");
    assert_eq!(sent.as_deref(), Some("gaming mouse"));
    assert!(state.loading);
    assert!(state.has_interacted);
    let last = state.messages.last().unwrap();
    assert_eq!(last.id, 2);
    assert!(!last.is_bot);
    assert_eq!(last.message, "gaming mouse");
}

#[test]
fn begin_send_keeps_text_as_typed() {
    let mut state = ChatState::new();
    assert_eq!(state.begin_send("  spaced  ").as_deref(), Some("  spaced  "));
    assert_eq!(state.messages[1].message, "  spaced  ");
}

#[test]
fn begin_send_rejects_blank_input() {
    let mut state = ChatState::new();
    assert_eq!(state.begin_send("   \n"), None);
    assert_eq!(state.messages.len(), 1);
    assert!(!state.loading);
    assert!(!state.has_interacted);
}

#[test]
fn begin_send_rejects_while_loading() {
    let mut state = ChatState::new();
    state.begin_send("first");
    assert_eq!(state.begin_send("second"), None);
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn can_send_requires_text_and_idle() {
    let mut state = ChatState::new();
    assert!(state.can_send("hi"));
    assert!(!state.can_send(""));
    state.loading = true;
    assert!(!state.can_send("hi"));
}

// =============================================================
// Replies and errors
// =============================================================

#[test]
fn receive_reply_appends_bot_message_with_sources() {
    let mut state = ChatState::new();
    state.begin_send("keyboard");
    state.receive_reply(reply("**K552** is a solid pick", vec![source("review")]));
    assert!(!state.loading);
    let last = state.messages.last().unwrap();
    assert_eq!(last.id, 3);
    assert!(last.is_bot);
    assert_eq!(last.message, "**K552** is a solid pick");
    assert_eq!(last.sources, vec![source("review")]);
    assert!(state.should_autoscroll());
}

#[test]
fn receive_error_appends_bot_message_and_clears_loading() {
    let mut state = ChatState::new();
    state.begin_send("keyboard");
    state.receive_error(&ChatApiError::Unreachable);
    assert!(!state.loading);
    let last = state.messages.last().unwrap();
    assert!(last.is_bot);
    assert!(last.message.contains("cannot reach the assistant server"));
    assert!(last.sources.is_empty());
}

#[test]
fn message_ids_strictly_increase_and_history_is_preserved() {
    let mut state = ChatState::new();
    for (i, text) in ["one", "two", "three"].iter().enumerate() {
        state.begin_send(text);
        if i % 2 == 0 {
            state.receive_reply(reply("ok", Vec::new()));
        } else {
            state.receive_error(&ChatApiError::Unavailable);
        }
    }
    assert_eq!(state.messages.len(), 7);
    assert_eq!(state.messages[0].message, GREETING);
    let ids: Vec<u64> = state.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(state.next_id(), 8);
}
