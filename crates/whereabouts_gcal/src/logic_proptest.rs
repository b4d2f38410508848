#[cfg(test)]
mod tests {
    use crate::logic::{
        select_working_location, NO_EVENTS_FALLBACK, NO_SUMMARY_FALLBACK,
        NO_WORKING_LOCATION_EVENTS_FALLBACK, WORKING_LOCATION_EVENT_TYPE,
    };
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use whereabouts_common::services::UpcomingEvent;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap()
    }

    fn arb_event_type() -> impl Strategy<Value = Option<String>> {
        // Weighted so working-location declarations show up often enough to
        // exercise the selection path, not just the fallbacks.
        prop::option::weighted(
            0.8,
            prop_oneof![
                3 => Just(WORKING_LOCATION_EVENT_TYPE.to_string()),
                1 => Just("default".to_string()),
                1 => Just("outOfOffice".to_string()),
            ],
        )
    }

    fn arb_summary() -> impl Strategy<Value = Option<String>> {
        // Includes the empty string so the summary fallback gets exercised
        prop::option::of("[A-Za-z ]{0,12}")
    }

    fn arb_updated() -> impl Strategy<Value = Option<DateTime<Utc>>> {
        // A narrow window makes duplicate stamps likely
        prop::option::of((0i64..600).prop_map(|minutes| base_time() + Duration::minutes(minutes)))
    }

    fn arb_event() -> impl Strategy<Value = UpcomingEvent> {
        (arb_event_type(), arb_summary(), arb_updated()).prop_map(
            |(event_type, summary, updated)| UpcomingEvent {
                event_type,
                summary,
                updated,
                start_time: None,
            },
        )
    }

    /// Straightforward index scan used as an oracle for the iterator-based
    /// selection: first declaration with the strictly greatest update stamp,
    /// then summary or fallback.
    fn reference_selection(events: &[UpcomingEvent]) -> String {
        if events.is_empty() {
            return NO_EVENTS_FALLBACK.to_string();
        }

        let mut best: Option<&UpcomingEvent> = None;
        for event in events {
            if event.event_type.as_deref() != Some(WORKING_LOCATION_EVENT_TYPE) {
                continue;
            }
            let fresher = match best {
                None => true,
                Some(current) => event.updated > current.updated,
            };
            if fresher {
                best = Some(event);
            }
        }

        match best {
            None => NO_WORKING_LOCATION_EVENTS_FALLBACK.to_string(),
            Some(winner) => match winner.summary.as_deref().filter(|s| !s.is_empty()) {
                Some(summary) => summary.to_string(),
                None => NO_SUMMARY_FALLBACK.to_string(),
            },
        }
    }

    proptest! {
        // Property: the selection agrees with the reference scan on any input
        #[test]
        fn test_selection_matches_reference_scan(
            events in prop::collection::vec(arb_event(), 0..12)
        ) {
            prop_assert_eq!(
                select_working_location(&events),
                reference_selection(&events),
                "selection diverged from the reference scan for {:?}",
                events
            );
        }

        // Property: the label is always either a declared summary or one of
        // the three fixed fallbacks, never something invented
        #[test]
        fn test_result_is_a_known_fallback_or_a_declared_summary(
            events in prop::collection::vec(arb_event(), 0..12)
        ) {
            let label = select_working_location(&events);

            let is_fallback = label == NO_EVENTS_FALLBACK
                || label == NO_WORKING_LOCATION_EVENTS_FALLBACK
                || label == NO_SUMMARY_FALLBACK;
            let is_declared_summary = events.iter().any(|event| {
                event.event_type.as_deref() == Some(WORKING_LOCATION_EVENT_TYPE)
                    && event.summary.as_deref().filter(|s| !s.is_empty())
                        == Some(label.as_str())
            });

            prop_assert!(
                is_fallback || is_declared_summary,
                "unexpected label {:?} for {:?}",
                label,
                events
            );
        }

        // Property: events that are not declarations never change the outcome
        // once at least one declaration is present
        #[test]
        fn test_non_declarations_never_change_the_outcome(
            events in prop::collection::vec(arb_event(), 0..12)
        ) {
            let declarations: Vec<UpcomingEvent> = events
                .iter()
                .filter(|event| {
                    event.event_type.as_deref() == Some(WORKING_LOCATION_EVENT_TYPE)
                })
                .cloned()
                .collect();
            prop_assume!(!declarations.is_empty());

            prop_assert_eq!(
                select_working_location(&events),
                select_working_location(&declarations),
                "non-declaration events influenced the result for {:?}",
                events
            );
        }

        // Property: when every declaration shares one update stamp, the first
        // one in response order wins
        #[test]
        fn test_shared_update_stamp_keeps_the_first_declaration(
            summaries in prop::collection::vec(arb_summary(), 1..6),
            minute in 0i64..600,
        ) {
            let updated = Some(base_time() + Duration::minutes(minute));
            let events: Vec<UpcomingEvent> = summaries
                .iter()
                .cloned()
                .map(|summary| UpcomingEvent {
                    event_type: Some(WORKING_LOCATION_EVENT_TYPE.to_string()),
                    summary,
                    updated,
                    start_time: None,
                })
                .collect();

            let expected = match summaries[0].as_deref().filter(|s| !s.is_empty()) {
                Some(summary) => summary.to_string(),
                None => NO_SUMMARY_FALLBACK.to_string(),
            };

            prop_assert_eq!(select_working_location(&events), expected);
        }
    }
}
