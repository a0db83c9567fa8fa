use std::io::Write;

use acheron_core::{Counter, SENTINEL_ROWS};

use crate::errors::GenerationError;
use crate::generators::{RunContext, date};
use crate::output::sql::SqlValue;

/// Fixed system identities occupying the reserved person ids.
const SENTINEL_NAMES: [&str; SENTINEL_ROWS as usize] = ["DELETED", "AUTO"];

/// Emits the sentinel rows, then one person + user pair per corpus name.
/// Every handler and creator foreign key downstream is drawn from the user
/// range, which starts right after the sentinels.
pub fn users<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    for (offset, name) in SENTINEL_NAMES.iter().enumerate() {
        let person_id = offset as u64 + 1;
        ctx.sink.insert("person", &["_name"], &[SqlValue::Text(name)])?;
        ctx.sink
            .insert("_user", &["person_id"], &[SqlValue::Id(person_id)])?;
    }
    for name in &ctx.corpus.user_names {
        let person_id = ctx.ids.commit(Counter::Users)?;
        ctx.sink.insert("person", &["_name"], &[SqlValue::Text(name)])?;
        ctx.sink
            .insert("_user", &["person_id"], &[SqlValue::Id(person_id)])?;
    }
    Ok(ctx.ids.committed(Counter::Users))
}

/// Monsters live in the pit: both location foreign keys come from the pit
/// sub-range only.
pub fn monsters<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let users = ctx.ids.valid_range(Counter::Users)?;
    let pit = ctx.ids.valid_range(Counter::PitLocations)?;
    for name in &ctx.corpus.monster_names {
        let person_id = ctx.ids.commit(Counter::Monsters)?;
        let location_id = ctx.sampler.pick(pit);
        let motherland_id = ctx.sampler.pick(pit);
        let creator_id = ctx.sampler.pick(users);
        let handler_id = ctx.sampler.pick(users);
        ctx.sink.insert("person", &["_name"], &[SqlValue::Text(name)])?;
        ctx.sink.insert(
            "monster",
            &["person_id", "location_id", "motherland_id", "creator_id", "handler_id"],
            &[
                SqlValue::Id(person_id),
                SqlValue::Id(location_id),
                SqlValue::Id(motherland_id),
                SqlValue::Id(creator_id),
                SqlValue::Id(handler_id),
            ],
        )?;
    }
    Ok(ctx.ids.committed(Counter::Monsters))
}

pub fn tortured_souls<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    soul_cohort(ctx, Counter::TorturedSouls, &corpus.tortured_surnames, false)
}

pub fn working_souls<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    soul_cohort(ctx, Counter::WorkingSouls, &corpus.working_surnames, true)
}

/// Souls never distributed to a handler; the handler column is omitted.
pub fn nondistributed_souls<W: Write>(ctx: &mut RunContext<'_, W>) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    let tortures = ctx.ids.valid_range(Counter::Tortures)?;
    for first in &corpus.first_names {
        for surname in &corpus.nondistributed_surnames {
            for patronymic in &corpus.patronymics {
                let person_id = ctx.ids.commit(Counter::NondistributedSouls)?;
                let name = format!("{first} {patronymic} {surname}");
                let born = ctx.sampler.date_in(date(1903, 1, 1), date(1923, 1, 1));
                let died = ctx.sampler.date_in(date(1973, 1, 1), date(2022, 1, 1));
                let torture_id = ctx.sampler.pick(tortures);
                ctx.sink
                    .insert("person", &["_name"], &[SqlValue::Text(&name)])?;
                ctx.sink.insert(
                    "soul",
                    &[
                        "person_id",
                        "birth_date",
                        "date_of_death",
                        "is_working",
                        "is_distributed",
                        "torture_id",
                    ],
                    &[
                        SqlValue::Id(person_id),
                        SqlValue::Date(born),
                        SqlValue::Date(died),
                        SqlValue::Bool(false),
                        SqlValue::Bool(false),
                        SqlValue::Id(torture_id),
                    ],
                )?;
            }
        }
    }
    Ok(ctx.ids.committed(Counter::NondistributedSouls))
}

/// Distributed soul cohort: the full first-name x patronymic x surname cross
/// product, each soul handled by a user and assigned a torture.
fn soul_cohort<W: Write>(
    ctx: &mut RunContext<'_, W>,
    counter: Counter,
    surnames: &[String],
    working: bool,
) -> Result<u64, GenerationError> {
    let corpus = ctx.corpus;
    let users = ctx.ids.valid_range(Counter::Users)?;
    let tortures = ctx.ids.valid_range(Counter::Tortures)?;
    for first in &corpus.first_names {
        for surname in surnames {
            for patronymic in &corpus.patronymics {
                let person_id = ctx.ids.commit(counter)?;
                let name = format!("{first} {patronymic} {surname}");
                let born = ctx.sampler.date_in(date(1903, 1, 1), date(1923, 1, 1));
                let died = ctx.sampler.date_in(date(1973, 1, 1), date(2022, 1, 1));
                let handler_id = ctx.sampler.pick(users);
                let torture_id = ctx.sampler.pick(tortures);
                ctx.sink
                    .insert("person", &["_name"], &[SqlValue::Text(&name)])?;
                ctx.sink.insert(
                    "soul",
                    &[
                        "person_id",
                        "birth_date",
                        "date_of_death",
                        "is_working",
                        "is_distributed",
                        "handler_id",
                        "torture_id",
                    ],
                    &[
                        SqlValue::Id(person_id),
                        SqlValue::Date(born),
                        SqlValue::Date(died),
                        SqlValue::Bool(working),
                        SqlValue::Bool(true),
                        SqlValue::Id(handler_id),
                        SqlValue::Id(torture_id),
                    ],
                )?;
            }
        }
    }
    Ok(ctx.ids.committed(counter))
}
