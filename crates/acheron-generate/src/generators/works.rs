use std::io::Write;

use acheron_core::Counter;

use crate::errors::GenerationError;
use crate::generators::RunContext;
use crate::output::sql::SqlValue;

/// Roster volume under the sampled policy.
const ROSTER_VOLUME: (u64, u64) = (100, 500);

/// Works are staffed outside the pit: their location foreign key is drawn
/// from the outer sub-range only.
pub fn works<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    let outer = ctx.ids.valid_range(Counter::OuterLocations)?;
    let users = ctx.ids.valid_range(Counter::Users)?;
    for name in &corpus.work_names {
        ctx.ids.commit(Counter::Works)?;
        let location_id = ctx.sampler.pick(outer);
        let creator_id = ctx.sampler.pick(users);
        ctx.sink.insert(
            "work",
            &["_name", "location_id", "creator_id"],
            &[
                SqlValue::Text(name),
                SqlValue::Id(location_id),
                SqlValue::Id(creator_id),
            ],
        )?;
    }
    Ok(ctx.ids.committed(Counter::Works))
}

/// Enumerating policy: one roster row per working soul, covering the whole
/// working-soul range in order.
pub fn enumerate_roster<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let souls = ctx.ids.valid_range(Counter::WorkingSouls)?;
    let works = ctx.ids.valid_range(Counter::Works)?;
    for soul_id in souls.ids() {
        ctx.ids.commit(Counter::WorkAssignments)?;
        let work_id = ctx.sampler.pick(works);
        ctx.sink.insert(
            "work_list",
            &["soul_id", "work_id"],
            &[SqlValue::Id(soul_id), SqlValue::Id(work_id)],
        )?;
    }
    Ok(ctx.ids.committed(Counter::WorkAssignments))
}

/// Sampling policy: a uniform number of rows, soul and work drawn
/// independently for each.
pub fn sample_roster<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let souls = ctx.ids.valid_range(Counter::WorkingSouls)?;
    let works = ctx.ids.valid_range(Counter::Works)?;
    let amount = ctx.sampler.int_in(ROSTER_VOLUME.0, ROSTER_VOLUME.1);
    for _ in 0..amount {
        ctx.ids.commit(Counter::WorkAssignments)?;
        let soul_id = ctx.sampler.pick(souls);
        let work_id = ctx.sampler.pick(works);
        ctx.sink.insert(
            "work_list",
            &["soul_id", "work_id"],
            &[SqlValue::Id(soul_id), SqlValue::Id(work_id)],
        )?;
    }
    Ok(ctx.ids.committed(Counter::WorkAssignments))
}
