use std::io::Write;

use acheron_core::{Counter, IdRange};

use crate::errors::GenerationError;
use crate::generators::{RunContext, date};
use crate::output::sql::SqlValue;

/// Complaint volume is not corpus-driven; each run draws a uniform count.
const COMPLAINT_VOLUME: (u64, u64) = (100, 500);

// Status ids are positional: the first status means "unprocessed", the
// second "approved". The corpus guarantees both exist.
fn unprocessed(statuses: IdRange) -> u64 {
    statuses.low
}

fn approved(statuses: IdRange) -> u64 {
    statuses.low + 1
}

pub fn complaints<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    let souls = ctx.ids.valid_range(Counter::TorturedSouls)?;
    let statuses = ctx.ids.valid_range(Counter::Statuses)?;
    let amount = ctx.sampler.int_in(COMPLAINT_VOLUME.0, COMPLAINT_VOLUME.1);
    for _ in 0..amount {
        ctx.ids.commit(Counter::Complaints)?;
        let index = ctx.sampler.index(corpus.complaint_titles.len());
        let soul_id = ctx.sampler.pick(souls);
        ctx.sink.insert(
            "complaint",
            &["title", "body", "soul_id", "status_id"],
            &[
                SqlValue::Text(&corpus.complaint_titles[index]),
                SqlValue::Text(&corpus.complaint_bodies[index]),
                SqlValue::Id(soul_id),
                SqlValue::Id(unprocessed(statuses)),
            ],
        )?;
    }
    Ok(ctx.ids.committed(Counter::Complaints))
}

/// Distributed events: the action x subject x condition cross product, each
/// event approved and assigned a handler.
pub fn distributed_events<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    let souls = ctx.ids.valid_range(Counter::TorturedSouls)?;
    let statuses = ctx.ids.valid_range(Counter::Statuses)?;
    let users = ctx.ids.valid_range(Counter::Users)?;
    for action in &corpus.event_actions {
        for subject in &corpus.event_subjects_distributed {
            for condition in &corpus.event_conditions {
                ctx.ids.commit(Counter::DistributedEvents)?;
                let text = format!("{action} {subject} {condition}");
                let soul_id = ctx.sampler.pick(souls);
                let happened = ctx.sampler.date_in(date(1943, 1, 1), date(1973, 1, 1));
                let handler_id = ctx.sampler.pick(users);
                ctx.sink.insert(
                    "_event",
                    &["_text", "soul_id", "_date", "status_id", "handler_id"],
                    &[
                        SqlValue::Text(&text),
                        SqlValue::Id(soul_id),
                        SqlValue::Date(happened),
                        SqlValue::Id(approved(statuses)),
                        SqlValue::Id(handler_id),
                    ],
                )?;
            }
        }
    }
    Ok(ctx.ids.committed(Counter::DistributedEvents))
}

/// Split-policy cohort: the same cross product over its own subject list,
/// left unprocessed and without a handler.
pub fn nondistributed_events<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    let souls = ctx.ids.valid_range(Counter::TorturedSouls)?;
    let statuses = ctx.ids.valid_range(Counter::Statuses)?;
    for action in &corpus.event_actions {
        for subject in &corpus.event_subjects_nondistributed {
            for condition in &corpus.event_conditions {
                ctx.ids.commit(Counter::NondistributedEvents)?;
                let text = format!("{action} {subject} {condition}");
                let soul_id = ctx.sampler.pick(souls);
                let happened = ctx.sampler.date_in(date(1943, 1, 1), date(1973, 1, 1));
                ctx.sink.insert(
                    "_event",
                    &["_text", "soul_id", "_date", "status_id"],
                    &[
                        SqlValue::Text(&text),
                        SqlValue::Id(soul_id),
                        SqlValue::Date(happened),
                        SqlValue::Id(unprocessed(statuses)),
                    ],
                )?;
            }
        }
    }
    Ok(ctx.ids.committed(Counter::NondistributedEvents))
}

/// One distribution row per distributed event, enumerating the event range
/// in order so the mapping is a bijection onto it.
pub fn sin_assignments<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let events = ctx.ids.valid_range(Counter::DistributedEvents)?;
    let sins = ctx.ids.valid_range(Counter::SinTypes)?;
    for event_id in events.ids() {
        ctx.ids.commit(Counter::SinAssignments)?;
        let sin_type_id = ctx.sampler.pick(sins);
        ctx.sink.insert(
            "sin_type_distribution_list",
            &["event_id", "sin_type_id"],
            &[SqlValue::Id(event_id), SqlValue::Id(sin_type_id)],
        )?;
    }
    Ok(ctx.ids.committed(Counter::SinAssignments))
}
