use std::time::Duration;

use tokio::time::Instant;

use greenpath::app::AppEvent;
use greenpath::intent::{CARBON_REPLY, FALLBACK_REPLY};
use greenpath::prompts::STARTER_PROMPTS;
use greenpath::session::{Author, RejectReason, SessionPhase};
use greenpath::widgets::WidgetId;

use super::harness::Harness;

#[tokio::test(start_paused = true)]
async fn submit_reply_then_trigger_in_causal_order() {
    let mut h = Harness::start();
    let started = Instant::now();
    h.app
        .submit("Help me calculate my company's carbon footprint")
        .await
        .unwrap();

    let AppEvent::TurnAppended { turn } = h.next_event().await else {
        panic!("expected the user turn first");
    };
    assert_eq!(turn.author, Author::User);
    assert_eq!(turn.triggered_widget, None);
    assert!(h.app.snapshot().is_thinking());

    let AppEvent::TurnAppended { turn } = h.next_event().await else {
        panic!("expected the assistant turn second");
    };
    assert_eq!(turn.author, Author::Assistant);
    assert_eq!(turn.text, CARBON_REPLY);
    assert_eq!(turn.triggered_widget, Some(WidgetId::CarbonCalculator));
    assert!(started.elapsed() >= Duration::from_millis(1_500));
    // The panel does not switch in the same step as the reply.
    assert_eq!(h.app.snapshot().active_widget, None);

    let event = h.next_event().await;
    assert_eq!(
        event,
        AppEvent::WidgetActivated {
            widget: WidgetId::CarbonCalculator,
            replaced: None,
        }
    );
    assert!(started.elapsed() >= Duration::from_millis(2_000));

    let snapshot = h.app.snapshot();
    assert_eq!(snapshot.active_widget, Some(WidgetId::CarbonCalculator));
    assert_eq!(snapshot.phase, SessionPhase::Idle);
    assert_eq!(snapshot.transcript.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn fallback_reply_opens_no_panel() {
    let mut h = Harness::start();
    h.app.submit("hello there").await.unwrap();

    let events = h
        .until(|e| matches!(e, AppEvent::TurnAppended { turn } if turn.author == Author::Assistant))
        .await;
    let Some(AppEvent::TurnAppended { turn }) = events.last() else {
        panic!("expected a reply");
    };
    assert_eq!(turn.text, FALLBACK_REPLY);
    assert_eq!(turn.triggered_widget, None);

    assert_eq!(h.quiet_for(Duration::from_secs(2)).await, None);
    assert_eq!(h.app.snapshot().active_widget, None);
}

#[tokio::test(start_paused = true)]
async fn whitespace_submission_is_rejected_without_a_turn() {
    let mut h = Harness::start();
    h.app.submit("   \t ").await.unwrap();

    assert_eq!(
        h.next_event().await,
        AppEvent::SubmissionRejected {
            reason: RejectReason::Empty
        }
    );
    assert!(h.app.snapshot().transcript.is_empty());
    assert_eq!(h.app.snapshot().phase, SessionPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn submission_while_thinking_is_rejected() {
    let mut h = Harness::start();
    h.app.submit("What about solar energy?").await.unwrap();
    h.app.submit("And LED bulbs?").await.unwrap();

    assert!(matches!(h.next_event().await, AppEvent::TurnAppended { .. }));
    assert_eq!(
        h.next_event().await,
        AppEvent::SubmissionRejected {
            reason: RejectReason::Busy
        }
    );

    // Only one reply arrives, for the first question.
    let events = h
        .until(|e| matches!(e, AppEvent::WidgetActivated { .. }))
        .await;
    let replies: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, AppEvent::TurnAppended { .. }))
        .collect();
    assert_eq!(replies.len(), 1);
    assert_eq!(
        events.last(),
        Some(&AppEvent::WidgetActivated {
            widget: WidgetId::EnergyCalculator,
            replaced: None
        })
    );
    assert_eq!(h.app.snapshot().transcript.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn next_question_is_accepted_once_idle() {
    let mut h = Harness::start();
    h.app.submit("first").await.unwrap();
    h.until(|e| matches!(e, AppEvent::TurnAppended { turn } if turn.author == Author::Assistant))
        .await;

    h.app.submit("second").await.unwrap();
    let AppEvent::TurnAppended { turn } = h.next_event().await else {
        panic!("second submission should be accepted");
    };
    assert_eq!(turn.text, "second");
}

#[tokio::test(start_paused = true)]
async fn clicking_a_starter_reveals_and_submits_it() {
    let mut h = Harness::start();
    h.app.click_prompt(2).await.unwrap();

    assert_eq!(h.next_event().await, AppEvent::ConversationShown);
    let AppEvent::TurnAppended { turn } = h.next_event().await else {
        panic!("expected the starter to be submitted");
    };
    assert_eq!(turn.text, STARTER_PROMPTS[2].prompt);

    let last = h
        .until(|e| matches!(e, AppEvent::WidgetActivated { .. }))
        .await
        .pop();
    assert_eq!(
        last,
        Some(AppEvent::WidgetActivated {
            widget: WidgetId::CompanyProfile,
            replaced: None
        })
    );
    assert!(h.app.snapshot().conversation_visible);
}

#[tokio::test(start_paused = true)]
async fn out_of_range_starter_is_ignored() {
    let mut h = Harness::start();
    h.app.click_prompt(STARTER_PROMPTS.len()).await.unwrap();
    assert_eq!(h.quiet_for(Duration::from_secs(3)).await, None);
    assert!(!h.app.snapshot().conversation_visible);
}

#[tokio::test(start_paused = true)]
async fn transcript_timestamps_strictly_increase() {
    let mut h = Harness::start();
    for text in ["carbon", "led", "hello"] {
        h.app.submit(text).await.unwrap();
        h.until(|e| matches!(e, AppEvent::TurnAppended { turn } if turn.author == Author::Assistant))
            .await;
    }

    let transcript = h.app.snapshot().transcript;
    assert_eq!(transcript.len(), 6);
    assert!(
        transcript
            .windows(2)
            .all(|pair| pair[0].created_at < pair[1].created_at)
    );
    let authors: Vec<_> = transcript.iter().map(|t| t.author).collect();
    assert_eq!(
        authors,
        [
            Author::User,
            Author::Assistant,
            Author::User,
            Author::Assistant,
            Author::User,
            Author::Assistant
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn voice_toggle_never_touches_the_transcript() {
    let mut h = Harness::start();
    h.app.toggle_voice().await.unwrap();
    let AppEvent::VoiceToggled { listening, notice } = h.next_event().await else {
        panic!("expected a voice notice");
    };
    assert!(listening);
    assert_eq!(notice.title, "Started listening");

    h.app.toggle_voice().await.unwrap();
    let AppEvent::VoiceToggled { listening, notice } = h.next_event().await else {
        panic!("expected a voice notice");
    };
    assert!(!listening);
    assert_eq!(notice.description, "Voice input disabled");
    assert!(h.app.snapshot().transcript.is_empty());
}
