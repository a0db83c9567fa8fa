use std::io::Write;

use acheron_core::Counter;

use crate::errors::GenerationError;
use crate::generators::RunContext;
use crate::output::sql::SqlValue;

pub fn tortures<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    let users = ctx.ids.valid_range(Counter::Users)?;
    let monsters = ctx.ids.valid_range(Counter::Monsters)?;
    for name in &corpus.torture_names {
        ctx.ids.commit(Counter::Tortures)?;
        let monster_id = ctx.sampler.pick(monsters);
        let creator_id = ctx.sampler.pick(users);
        let handler_id = ctx.sampler.pick(users);
        ctx.sink.insert(
            "torture",
            &["_name", "monster_id", "creator_id", "handler_id"],
            &[
                SqlValue::Text(name),
                SqlValue::Id(monster_id),
                SqlValue::Id(creator_id),
                SqlValue::Id(handler_id),
            ],
        )?;
    }
    Ok(ctx.ids.committed(Counter::Tortures))
}

/// Each sin type carries an independent uniform weight alongside its
/// handler, creator, and torture references.
pub fn sin_types<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    let users = ctx.ids.valid_range(Counter::Users)?;
    let tortures = ctx.ids.valid_range(Counter::Tortures)?;
    for name in &corpus.sin_type_names {
        ctx.ids.commit(Counter::SinTypes)?;
        let weight = ctx.sampler.weight();
        let creator_id = ctx.sampler.pick(users);
        let handler_id = ctx.sampler.pick(users);
        let torture_id = ctx.sampler.pick(tortures);
        ctx.sink.insert(
            "sin_type",
            &["_name", "_weight", "creator_id", "handler_id", "torture_id"],
            &[
                SqlValue::Text(name),
                SqlValue::Weight(weight),
                SqlValue::Id(creator_id),
                SqlValue::Id(handler_id),
                SqlValue::Id(torture_id),
            ],
        )?;
    }
    Ok(ctx.ids.committed(Counter::SinTypes))
}

pub fn statuses<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    for name in &ctx.corpus.status_names {
        ctx.ids.commit(Counter::Statuses)?;
        ctx.sink
            .insert("_status", &["_name"], &[SqlValue::Text(name)])?;
    }
    Ok(ctx.ids.committed(Counter::Statuses))
}
