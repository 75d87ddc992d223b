//! Property-based tests for the dialogue state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::naming::{GenerationRequest, Style};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_style() -> impl Strategy<Value = Style> {
    prop_oneof![Just(Style::Serious), Just(Style::NonSerious)]
}

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Random), Just(Mode::Keywords), Just(Mode::Example)]
}

fn arb_request() -> impl Strategy<Value = GenerationRequest> {
    prop_oneof![
        arb_style().prop_map(|style| GenerationRequest::Random { style }),
        (arb_style(), "[a-z ]{0,20}")
            .prop_map(|(style, keywords)| GenerationRequest::Keywords { style, keywords }),
        "[A-Za-z ]{0,20}".prop_map(|example| GenerationRequest::Example { example }),
    ]
}

fn arb_phase() -> impl Strategy<Value = Phase> {
    prop_oneof![
        Just(Phase::Idle),
        Just(Phase::ChoosingStyle {
            mode: StyledMode::Random
        }),
        Just(Phase::ChoosingStyle {
            mode: StyledMode::Keywords
        }),
        arb_style().prop_map(|style| Phase::EnteringKeywords { style }),
        Just(Phase::EnteringExample),
    ]
}

fn arb_state() -> impl Strategy<Value = ConversationState> {
    (arb_phase(), proptest::option::of(arb_request()))
        .prop_map(|(phase, last_request)| ConversationState { phase, last_request })
}

fn arb_callback() -> impl Strategy<Value = Callback> {
    prop_oneof![
        arb_mode().prop_map(Callback::Mode),
        arb_style().prop_map(Callback::Style),
        Just(Callback::BackToMain),
        Just(Callback::GenerateMore),
    ]
}

fn arb_user_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Start),
        Just(Event::Help),
        "(?s).{0,40}".prop_map(|text| Event::Text { text }),
        arb_callback().prop_map(Event::Button),
    ]
}

/// Apply an event the way the runtime does: on rejection the state stays
fn step(state: &ConversationState, event: Event) -> ConversationState {
    transition(state, event).map_or_else(|_| state.clone(), |r| r.new_state)
}

proptest! {
    #[test]
    fn back_to_main_resets_from_anywhere(state in arb_state()) {
        let once = step(&state, Event::Button(Callback::BackToMain));
        let twice = step(&once, Event::Button(Callback::BackToMain));
        prop_assert_eq!(&once, &ConversationState::default());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn example_mode_always_enters_example(last in proptest::option::of(arb_request())) {
        let state = ConversationState { phase: Phase::Idle, last_request: last };
        let result = transition(&state, Event::Button(Callback::Mode(Mode::Example))).unwrap();
        prop_assert_eq!(&result.new_state.phase, &Phase::EnteringExample);
        prop_assert_eq!(result.new_state.style(), None);
    }

    #[test]
    fn user_events_never_touch_last_request_except_resets(
        state in arb_state(),
        event in arb_user_event(),
    ) {
        let resets = matches!(event, Event::Start | Event::Button(Callback::BackToMain));
        let next = step(&state, event);
        if resets {
            prop_assert_eq!(next.last_request, None);
        } else {
            prop_assert_eq!(next.last_request, state.last_request);
        }
    }

    #[test]
    fn generate_effects_only_follow_their_triggers(
        state in arb_state(),
        event in arb_user_event(),
    ) {
        let Ok(result) = transition(&state, event.clone()) else {
            return Ok(());
        };
        for effect in &result.effects {
            if let Effect::Generate { request, replay, .. } = effect {
                match (&state.phase, &event) {
                    (_, Event::Button(Callback::GenerateMore)) => {
                        prop_assert!(*replay);
                        prop_assert_eq!(Some(request), state.last_request.as_ref());
                    }
                    (Phase::ChoosingStyle { mode: StyledMode::Random }, Event::Button(Callback::Style(style))) => {
                        prop_assert!(!*replay);
                        prop_assert_eq!(request, &GenerationRequest::Random { style: *style });
                    }
                    (Phase::EnteringKeywords { style }, Event::Text { text }) => {
                        prop_assert_eq!(
                            request,
                            &GenerationRequest::Keywords { style: *style, keywords: text.trim().to_string() }
                        );
                    }
                    (Phase::EnteringExample, Event::Text { text }) => {
                        prop_assert_eq!(
                            request,
                            &GenerationRequest::Example { example: text.trim().to_string() }
                        );
                    }
                    other => prop_assert!(false, "unexpected generate for {:?}", other),
                }
            }
        }
    }

    #[test]
    fn completion_records_unless_replay(
        state in arb_state(),
        request in arb_request(),
        replay in any::<bool>(),
    ) {
        let result = transition(&state, Event::GenerationComplete {
            request: request.clone(),
            names: vec!["Name".to_string()],
            delivery: Delivery::Edit,
            replay,
        }).unwrap();

        if replay {
            prop_assert_eq!(result.new_state.last_request, state.last_request);
        } else {
            prop_assert_eq!(result.new_state.last_request, Some(request));
        }
        prop_assert_eq!(result.new_state.phase, state.phase);
    }

    #[test]
    fn accepted_transitions_always_answer(
        state in arb_state(),
        event in arb_user_event(),
    ) {
        if let Ok(result) = transition(&state, event) {
            prop_assert_eq!(result.effects.len(), 1);
        }
    }
}
