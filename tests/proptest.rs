//! Property-based tests for chatpulse.
//!
//! These tests generate random exports to find edge cases.

use proptest::prelude::*;

use chatpulse::{compute_statistics, parse_exported_text};

/// One export entry: (day, hour, minute, sender, body lines).
type Entry = (u32, u32, u32, Option<String>, Vec<String>);

/// Generate a random entry using fast strategies (no regex!)
fn arb_entry() -> impl Strategy<Value = Entry> {
    (
        1u32..=28,
        0u32..24,
        0u32..60,
        prop::option::weighted(
            0.85,
            prop::sample::select(vec![
                "Ana".to_string(),
                "Bia".to_string(),
                "Carlos Eduardo".to_string(),
                "+55 11 98765-4321".to_string(),
                "Иван".to_string(),
            ]),
        ),
        prop::collection::vec(
            prop::sample::select(vec![
                "bom dia amor 😍".to_string(),
                "Que saudade!".to_string(),
                "fiquei triste".to_string(),
                "<imagem omitida>".to_string(),
                "ok".to_string(),
                "   ".to_string(),
                String::new(),
                "horario: 10:30".to_string(),
                "🎉🔥❤️ emoji".to_string(),
                "Привет мир".to_string(),
            ]),
            1..4,
        ),
    )
}

fn render_entry((day, hour, minute, sender, body): &Entry) -> String {
    let header = format!("{day}/03/2024, {hour:02}:{minute:02} - ");
    let first = match sender {
        Some(name) => format!("{header}{name}: {}", body[0]),
        None => format!("{header}someone joined using this group's invite link"),
    };
    let mut lines = vec![first];
    lines.extend(body.iter().skip(1).cloned());
    lines.join("\n")
}

fn arb_export(max_len: usize) -> impl Strategy<Value = (Vec<Entry>, String)> {
    prop::collection::vec(arb_entry(), 0..max_len).prop_map(|entries| {
        let text = entries.iter().map(render_entry).collect::<Vec<_>>().join("\n");
        (entries, text)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// The parser never panics, whatever the input
    #[test]
    fn parse_never_panics(text in "\\PC{0,200}") {
        let _ = parse_exported_text(&text);
    }

    /// One message per header line
    #[test]
    fn message_count_equals_header_count((entries, text) in arb_export(30)) {
        let conversation = parse_exported_text(&text).unwrap();
        prop_assert_eq!(conversation.messages.len(), entries.len());
    }

    /// System messages never carry a sender, and every sender is a participant
    #[test]
    fn senders_are_participants((_, text) in arb_export(30)) {
        let conversation = parse_exported_text(&text).unwrap();
        for message in &conversation.messages {
            prop_assert_eq!(message.is_system(), message.sender().is_none());
            if let Some(sender) = message.sender() {
                prop_assert!(conversation.participants.iter().any(|p| p == sender));
            }
        }
        let mut sorted = conversation.participants.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted, conversation.participants.clone());
    }

    /// Content is always trimmed
    #[test]
    fn content_is_trimmed((_, text) in arb_export(30)) {
        let conversation = parse_exported_text(&text).unwrap();
        for message in &conversation.messages {
            prop_assert_eq!(message.content().trim(), message.content());
        }
    }

    // ============================================
    // STATISTICS PROPERTIES
    // ============================================

    /// Computing twice gives the same report
    #[test]
    fn statistics_are_idempotent((_, text) in arb_export(30)) {
        let conversation = parse_exported_text(&text).unwrap();
        prop_assert_eq!(compute_statistics(&conversation), compute_statistics(&conversation));
    }

    /// Totals add up and the score stays on its scale
    #[test]
    fn statistics_are_consistent((_, text) in arb_export(30)) {
        let report = compute_statistics(&parse_exported_text(&text).unwrap());

        prop_assert_eq!(report.total_messages, report.system_messages + report.participant_messages);
        prop_assert_eq!(
            report.messages_per_participant.values().sum::<usize>(),
            report.participant_messages
        );
        prop_assert_eq!(
            report.messages_per_day.values().sum::<usize>(),
            report.participant_messages
        );
        prop_assert_eq!(
            report.hourly_distribution.values().sum::<usize>(),
            report.participant_messages
        );

        let share_sum: f64 = report.participant_share.values().sum();
        prop_assert!(share_sum <= 100.0 + 1e-9);

        let score = report.relationship_score.score;
        prop_assert!((0.0..=100.0).contains(&score), "score {}", score);
        if let Some(components) = report.relationship_score.components {
            for (name, value) in components.iter() {
                prop_assert!((0.0..=100.0).contains(&value), "{} = {}", name, value);
            }
        }

        for sentiment in report.sentiment_per_participant.values() {
            prop_assert!((-1.0..=1.0).contains(&sentiment.sentiment_score));
        }
        for minutes in report.average_response_time_minutes.values() {
            prop_assert!(*minutes >= 0.0);
        }
        prop_assert!(report.emoji_counts.len() <= 15);
        prop_assert!(report.emoji_counts.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
