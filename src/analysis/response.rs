//! Reply latency between participants.

use indexmap::IndexMap;
use tracing::debug;

use super::round_to;
use crate::Message;

/// Average reply latency, in minutes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseTimes {
    /// Mean latency per sender, rounded to 2 places. Senders that never
    /// answered someone else are absent.
    pub per_sender: IndexMap<String, f64>,
    /// Mean of the per-sender means, rounded to 2 places.
    pub overall: Option<f64>,
}

/// Raw latencies: minutes between a message and the previous one whenever
/// the sender changes, attributed to the replying sender.
///
/// Messages without a sender are skipped. Replies timestamped before the
/// message they answer are dropped.
pub fn reply_latencies<'a, I>(messages: I) -> IndexMap<String, Vec<f64>>
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut latencies: IndexMap<String, Vec<f64>> = IndexMap::new();
    let mut previous: Option<(&str, chrono::NaiveDateTime)> = None;

    for message in messages {
        let Some(sender) = message.sender() else {
            continue;
        };

        if let Some((previous_sender, previous_at)) = previous {
            if previous_sender != sender {
                let minutes = (message.timestamp() - previous_at).num_seconds() as f64 / 60.0;
                if minutes >= 0.0 {
                    latencies.entry(sender.to_string()).or_default().push(minutes);
                } else {
                    debug!(
                        sender,
                        minutes,
                        at = %message.timestamp(),
                        "discarding negative response time"
                    );
                }
            }
        }

        previous = Some((sender, message.timestamp()));
    }

    latencies
}

/// Computes per-sender and overall average response times.
///
/// The overall figure weights every sender equally, however many replies
/// they sent.
pub fn response_times<'a, I>(messages: I) -> ResponseTimes
where
    I: IntoIterator<Item = &'a Message>,
{
    let per_sender: IndexMap<String, f64> = reply_latencies(messages)
        .into_iter()
        .filter(|(_, deltas)| !deltas.is_empty())
        .map(|(sender, deltas)| {
            let mean = deltas.iter().sum::<f64>() / deltas.len() as f64;
            (sender, round_to(mean, 2))
        })
        .collect();

    let overall = if per_sender.is_empty() {
        None
    } else {
        let mean = per_sender.values().sum::<f64>() / per_sender.len() as f64;
        Some(round_to(mean, 2))
    };

    ResponseTimes {
        per_sender,
        overall,
    }
}
