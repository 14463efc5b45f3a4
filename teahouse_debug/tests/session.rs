// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives the page state machines through a `Tracer` and checks what a
//! recorder captures, the way the site script reports a visit.

use teahouse_core::chrome::{ChromeState, ClickOrigin, MenuState};
use teahouse_core::config::SiteConfig;
use teahouse_core::form::{FormInput, validate_form};
use teahouse_core::marker::{MarkerRoute, NavigationLatch};
use teahouse_core::reveal::{RevealKind, RevealTracker, VisibilitySample};
use teahouse_core::tea::TeaCycle;
use teahouse_core::trace::{
    ChromeEvent, FieldEvent, MarkerEvent, MenuEvent, RevealEvent, SubmissionEvent, TeaCycleEvent,
    TraceSink, Tracer,
};
use teahouse_debug::pretty::PrettyPrintSink;
use teahouse_debug::recorder::{RecordedEvent, RecorderSink};

fn report_submission(tracer: &mut Tracer<'_>, input: &FormInput<'_>) -> bool {
    let report = validate_form(input);
    let mut invalid = 0;
    for (field, outcome) in report.outcomes() {
        if let Some(outcome) = outcome {
            invalid += usize::from(!outcome.is_valid());
            tracer.field(&FieldEvent {
                field: *field,
                valid: outcome.is_valid(),
            });
        }
    }
    tracer.submission(&SubmissionEvent {
        success: report.is_success(),
        invalid_fields: invalid,
    });
    report.is_success()
}

#[test]
fn visit_is_recorded_in_order() {
    let config = SiteConfig::standard();
    let mut rec = RecorderSink::new();
    {
        let mut tracer = Tracer::new(&mut rec);

        // Scroll past the threshold.
        let mut chrome = ChromeState::default();
        for offset in [0.0, 50.0, 100.0, 140.0, 180.0] {
            let next = ChromeState::from_offset(offset, config.scroll_threshold);
            if next != chrome {
                chrome = next;
                tracer.chrome(&ChromeEvent {
                    state: chrome,
                    offset,
                });
            }
        }

        // Two sections enter the viewport; the first one twice.
        let mut fades = RevealTracker::new(RevealKind::FadeIn, 2, config.fade_in_threshold);
        for sample in [
            VisibilitySample {
                slot: 0,
                intersecting: true,
                ratio: 0.3,
            },
            VisibilitySample {
                slot: 0,
                intersecting: true,
                ratio: 0.9,
            },
            VisibilitySample {
                slot: 1,
                intersecting: true,
                ratio: 0.05,
            },
            VisibilitySample {
                slot: 1,
                intersecting: true,
                ratio: 0.5,
            },
        ] {
            if fades.observe(&sample) {
                tracer.reveal(&RevealEvent {
                    kind: fades.kind(),
                    slot: sample.slot,
                    remaining: fades.pending(),
                });
            }
        }

        // Open and dismiss the menu.
        let mut menu = MenuState::new();
        for origin in [ClickOrigin::Toggle, ClickOrigin::Menu, ClickOrigin::Outside] {
            if menu.click(origin) {
                tracer.menu(&MenuEvent {
                    origin,
                    open: menu.is_open(),
                });
            }
        }

        // Bad email first, then a clean submission.
        let first = report_submission(
            &mut tracer,
            &FormInput {
                name: Some("陆羽"),
                email: Some("luyu"),
                message: Some("茶经"),
            },
        );
        assert!(!first, "bad email fails the submission");
        let second = report_submission(
            &mut tracer,
            &FormInput {
                name: Some("陆羽"),
                email: Some("luyu@chajing.cn"),
                message: Some("茶经"),
            },
        );
        assert!(second, "fixed email passes");

        // One leaf click.
        let mut cycle = TeaCycle::new();
        let tea = cycle.advance();
        tracer.tea_cycle(&TeaCycleEvent {
            index: cycle.index(),
            name: tea.name,
        });

        // Impatient double click on a marker.
        let route = MarkerRoute::from_attributes(Some("wuyi".into()), Some("🍵".into()))
            .expect("complete marker");
        let destination = route.detail_page(&config);
        let mut latch = NavigationLatch::new();
        for _ in 0..2 {
            tracer.marker(&MarkerEvent {
                area: route.area(),
                destination: &destination,
                scheduled: latch.try_schedule(),
            });
        }
    }

    let names: Vec<_> = rec.events().map(RecordedEvent::name).collect();
    assert_eq!(
        names,
        [
            "chrome",
            "reveal",
            "reveal",
            "menu",
            "menu",
            "field",
            "field",
            "field",
            "submission",
            "field",
            "field",
            "field",
            "submission",
            "tea_cycle",
            "marker",
            "marker",
        ]
    );

    let json = rec.to_json();
    assert_eq!(json[0]["state"], "scrolled");
    assert_eq!(json[0]["offset"], 140.0);
    assert_eq!(json[1]["remaining"], 1);
    assert_eq!(json[2]["slot"], 1);
    assert_eq!(json[4]["origin"], "outside");
    assert_eq!(json[4]["open"], false);
    assert_eq!(json[6]["field"], "email");
    assert_eq!(json[6]["valid"], false);
    assert_eq!(json[8]["invalid_fields"], 1);
    assert_eq!(json[12]["success"], true);
    assert_eq!(json[13]["name"], "黄茶");
    assert_eq!(json[14]["destination"], "subpages/wuyi-detail.html");
    assert_eq!(json[14]["scheduled"], true);
    assert_eq!(json[15]["scheduled"], false);
}

#[test]
fn pretty_and_recorder_see_the_same_events() {
    let mut rec = RecorderSink::new();
    let mut pretty = PrettyPrintSink::with_writer(Vec::<u8>::new());
    let mut cycle = TeaCycle::new();

    let sinks: [&mut dyn TraceSink; 2] = [&mut rec, &mut pretty];
    for sink in sinks {
        let mut tracer = Tracer::new(sink);
        let mut local = cycle;
        for _ in 0..6 {
            let tea = local.advance();
            tracer.tea_cycle(&TeaCycleEvent {
                index: local.index(),
                name: tea.name,
            });
        }
    }
    for _ in 0..6 {
        cycle.advance();
    }
    assert_eq!(cycle.index(), 0, "six clicks wrap around");

    let text = String::from_utf8(pretty.into_inner()).unwrap();
    assert_eq!(text.lines().count(), rec.len());
    assert!(text.lines().last().unwrap().contains("name=绿茶"), "got: {text}");
}
