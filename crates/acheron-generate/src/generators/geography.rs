use std::io::Write;

use acheron_core::Counter;

use crate::errors::GenerationError;
use crate::generators::RunContext;
use crate::output::sql::SqlValue;

pub fn levels<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    for level in &ctx.corpus.levels {
        ctx.ids.commit(Counter::Levels)?;
        ctx.sink
            .insert("_level", &["_name"], &[SqlValue::Text(&level.level)])?;
    }
    Ok(ctx.ids.committed(Counter::Levels))
}

/// Pit-level locations come first so the pit/outer split of the location
/// space is fixed before anything samples from it.
pub fn pit_locations<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    let levels = ctx.ids.valid_range(Counter::Levels)?;
    let pit = corpus
        .levels
        .first()
        .ok_or_else(|| acheron_core::Error::InvalidCorpus("levels must not be empty".to_string()))?;
    for place in &pit.places {
        ctx.ids.commit(Counter::PitLocations)?;
        ctx.sink.insert(
            "_location",
            &["_name", "level_id"],
            &[SqlValue::Text(place), SqlValue::Id(levels.low)],
        )?;
    }
    Ok(ctx.ids.committed(Counter::PitLocations))
}

pub fn outer_locations<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    let levels = ctx.ids.valid_range(Counter::Levels)?;
    for (index, level) in corpus.levels.iter().enumerate().skip(1) {
        // Level ids are positional: the levels step committed them in order.
        let level_id = levels.low + index as u64;
        for place in &level.places {
            ctx.ids.commit(Counter::OuterLocations)?;
            ctx.sink.insert(
                "_location",
                &["_name", "level_id"],
                &[SqlValue::Text(place), SqlValue::Id(level_id)],
            )?;
        }
    }
    Ok(ctx.ids.committed(Counter::OuterLocations))
}
