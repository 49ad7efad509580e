use std::time::Duration;

use tokio::time::Instant;

use greenpath::app::AppEvent;
use greenpath::widgets::CHAMPION_TITLE;

use super::harness::Harness;

fn unlocked_titles(events: &[AppEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            AppEvent::AchievementUnlocked { achievement } => Some(achievement.title.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn fourth_completed_step_unlocks_champion_once() {
    let mut h = Harness::start();
    for step in [1, 2, 3, 4, 5] {
        h.app.toggle_step(step).await.unwrap();
    }
    let events = h
        .until(|e| matches!(e, AppEvent::StepToggled { completed: 5, .. }))
        .await;

    assert_eq!(unlocked_titles(&events), vec![CHAMPION_TITLE.to_string()]);
    let view = h.app.snapshot().achievement.unwrap();
    assert!(view.visible);
    assert_eq!(view.achievement.points, 50);
    assert_eq!(view.achievement.icon, "💡");
}

#[tokio::test(start_paused = true)]
async fn unticking_below_four_then_back_fires_again() {
    let mut h = Harness::start();
    for step in [1, 2, 3, 4] {
        h.app.toggle_step(step).await.unwrap();
    }
    let first = h
        .until(|e| matches!(e, AppEvent::AchievementUnlocked { .. }))
        .await;
    assert!(first.contains(&AppEvent::StepToggled {
        id: 4,
        completed: 4
    }));

    h.app.toggle_step(4).await.unwrap();
    h.app.toggle_step(4).await.unwrap();
    let second = h
        .until(|e| matches!(e, AppEvent::AchievementUnlocked { .. }))
        .await;
    assert_eq!(
        &second[..2],
        &[
            AppEvent::StepToggled {
                id: 4,
                completed: 3
            },
            AppEvent::StepToggled {
                id: 4,
                completed: 4
            },
        ]
    );
    assert_eq!(unlocked_titles(&second), vec![CHAMPION_TITLE.to_string()]);
}

#[tokio::test(start_paused = true)]
async fn auto_dismiss_hides_then_clears() {
    let mut h = Harness::start();
    let started = Instant::now();
    h.app.unlock_achievement("ESG Pioneer").await.unwrap();

    let AppEvent::AchievementUnlocked { achievement } = h.next_event().await else {
        panic!("expected the unlock");
    };
    assert!(achievement.description.starts_with("Your dedication to environmental"));
    assert_eq!(achievement.icon, "🏆");

    assert_eq!(
        h.next_event().await,
        AppEvent::AchievementHidden { id: achievement.id }
    );
    assert!(started.elapsed() >= Duration::from_millis(5_000));
    assert!(!h.app.snapshot().achievement.unwrap().visible);

    assert_eq!(
        h.next_event().await,
        AppEvent::AchievementCleared { id: achievement.id }
    );
    assert!(started.elapsed() >= Duration::from_millis(5_300));
    assert!(h.app.snapshot().achievement.is_none());
}

#[tokio::test(start_paused = true)]
async fn manual_dismiss_cancels_auto_dismiss() {
    let mut h = Harness::start();
    h.app.unlock_achievement("Custom Milestone").await.unwrap();
    let AppEvent::AchievementUnlocked { achievement } = h.next_event().await else {
        panic!("expected the unlock");
    };
    assert_eq!(achievement.icon, "🌟");

    tokio::time::sleep(Duration::from_secs(1)).await;
    let dismissed_at = Instant::now();
    h.app.dismiss_achievement().await.unwrap();
    h.app.dismiss_achievement().await.unwrap();

    assert_eq!(
        h.next_event().await,
        AppEvent::AchievementHidden { id: achievement.id }
    );
    assert_eq!(
        h.next_event().await,
        AppEvent::AchievementCleared { id: achievement.id }
    );
    let cleared_after = dismissed_at.elapsed();
    assert!(cleared_after >= Duration::from_millis(300));
    assert!(cleared_after < Duration::from_secs(1));

    // Nothing left to fire at the original five-second mark.
    assert_eq!(h.quiet_for(Duration::from_secs(10)).await, None);
}

#[tokio::test(start_paused = true)]
async fn dismiss_with_nothing_showing_is_a_no_op() {
    let mut h = Harness::start();
    h.app.dismiss_achievement().await.unwrap();
    assert_eq!(h.quiet_for(Duration::from_secs(1)).await, None);
}

#[tokio::test(start_paused = true)]
async fn newer_unlock_is_not_cleared_by_older_timers() {
    let mut h = Harness::start();
    let started = Instant::now();
    h.app.unlock_achievement("ESG Pioneer").await.unwrap();
    let AppEvent::AchievementUnlocked { achievement: first } = h.next_event().await else {
        panic!("expected the first unlock");
    };

    tokio::time::sleep(Duration::from_secs(3)).await;
    h.app.unlock_achievement(CHAMPION_TITLE).await.unwrap();
    let AppEvent::AchievementUnlocked { achievement: second } = h.next_event().await else {
        panic!("expected the second unlock");
    };
    assert_ne!(first.id, second.id);

    // The first unlock's five-second timer passes without effect; the second
    // hides at 3s + 5s.
    assert_eq!(
        h.next_event().await,
        AppEvent::AchievementHidden { id: second.id }
    );
    assert!(started.elapsed() >= Duration::from_secs(8));
    assert_eq!(
        h.next_event().await,
        AppEvent::AchievementCleared { id: second.id }
    );
}

#[tokio::test(start_paused = true)]
async fn unlock_during_exit_replaces_the_closing_one() {
    let mut h = Harness::start();
    h.app.unlock_achievement("ESG Pioneer").await.unwrap();
    h.next_event().await;
    h.app.dismiss_achievement().await.unwrap();
    h.app.unlock_achievement(CHAMPION_TITLE).await.unwrap();

    let events = h
        .until(|e| matches!(e, AppEvent::AchievementUnlocked { .. }))
        .await;
    assert!(matches!(events[0], AppEvent::AchievementHidden { .. }));

    // The pending clear for the first was cancelled; the second stays up.
    tokio::time::sleep(Duration::from_secs(1)).await;
    let view = h.app.snapshot().achievement.unwrap();
    assert_eq!(view.achievement.title, CHAMPION_TITLE);
    assert!(view.visible);
}
