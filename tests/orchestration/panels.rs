use greenpath::app::AppEvent;
use greenpath::session::Author;
use greenpath::widgets::{CarbonField, CompanyField, FieldRef, WidgetId};

use super::harness::Harness;

async fn ask_and_wait_for_panel(h: &mut Harness, text: &str) -> AppEvent {
    h.app.submit(text).await.unwrap();
    h.until(|e| matches!(e, AppEvent::WidgetActivated { .. }))
        .await
        .pop()
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn newer_trigger_replaces_the_active_panel() {
    let mut h = Harness::start();
    assert_eq!(
        ask_and_wait_for_panel(&mut h, "What are my emissions?").await,
        AppEvent::WidgetActivated {
            widget: WidgetId::CarbonCalculator,
            replaced: None
        }
    );
    assert_eq!(
        ask_and_wait_for_panel(&mut h, "How do I switch bulbs?").await,
        AppEvent::WidgetActivated {
            widget: WidgetId::LedGuide,
            replaced: Some(WidgetId::CarbonCalculator)
        }
    );
    assert_eq!(h.app.snapshot().active_widget, Some(WidgetId::LedGuide));
}

#[tokio::test(start_paused = true)]
async fn same_panel_twice_stays_single() {
    let mut h = Harness::start();
    ask_and_wait_for_panel(&mut h, "solar").await;
    assert_eq!(
        ask_and_wait_for_panel(&mut h, "renewable").await,
        AppEvent::WidgetActivated {
            widget: WidgetId::EnergyCalculator,
            replaced: Some(WidgetId::EnergyCalculator)
        }
    );
    assert_eq!(
        h.app.snapshot().active_widget,
        Some(WidgetId::EnergyCalculator)
    );
}

#[tokio::test(start_paused = true)]
async fn edits_recompute_metrics_and_survive_panel_switches() {
    let mut h = Harness::start();
    ask_and_wait_for_panel(&mut h, "carbon").await;

    h.app
        .edit_field(FieldRef::Carbon(CarbonField::Electricity), "100")
        .await
        .unwrap();
    h.app
        .edit_field(FieldRef::Carbon(CarbonField::Gas), "10")
        .await
        .unwrap();
    h.until(|e| {
        *e == AppEvent::FieldEdited {
            field: FieldRef::Carbon(CarbonField::Gas),
        }
    })
    .await;

    // 100 * 0.82 + 10 * 2.3 = 105 tons.
    let carbon = h.app.snapshot().panels.carbon;
    assert!((carbon.estimate.total_tons - 105.0).abs() < 1e-9);
    assert_eq!(carbon.estimate.trees_to_offset, 263);
    assert_eq!(carbon.estimate.annual_cost_usd, 13_125);

    ask_and_wait_for_panel(&mut h, "company").await;
    let panels = h.app.snapshot().panels;
    assert!((panels.carbon.inputs.electricity_kwh_per_month - 100.0).abs() < 1e-9);
}

#[tokio::test(start_paused = true)]
async fn malformed_numbers_store_zero() {
    let mut h = Harness::start();
    h.app
        .edit_field(FieldRef::Carbon(CarbonField::Transport), "lots")
        .await
        .unwrap();
    h.app
        .edit_field(FieldRef::Carbon(CarbonField::Waste), "-40")
        .await
        .unwrap();
    h.app
        .edit_field(FieldRef::Company(CompanyField::RenewableEnergy), "250")
        .await
        .unwrap();
    h.until(|e| {
        *e == AppEvent::FieldEdited {
            field: FieldRef::Company(CompanyField::RenewableEnergy),
        }
    })
    .await;

    let panels = h.app.snapshot().panels;
    assert!(panels.carbon.inputs.transport_miles_per_week.abs() < f64::EPSILON);
    assert!(panels.carbon.inputs.waste_lbs_per_week.abs() < f64::EPSILON);
    assert_eq!(panels.company.profile.renewable_energy_pct, 100);
    // 50 + 30 + 0
    assert_eq!(panels.company.assessment.score, 80);
    assert_eq!(panels.company.assessment.vs_benchmark, 15);
}

#[tokio::test(start_paused = true)]
async fn editing_never_opens_a_panel_or_touches_the_conversation() {
    let mut h = Harness::start();
    h.app
        .edit_field(FieldRef::Company(CompanyField::Industry), "Retail")
        .await
        .unwrap();
    h.next_event().await;

    let snapshot = h.app.snapshot();
    assert_eq!(snapshot.active_widget, None);
    assert_eq!(snapshot.panels.company.profile.industry, "Retail");
    assert!(
        !snapshot
            .transcript
            .iter()
            .any(|turn| turn.author == Author::Assistant)
    );
}
