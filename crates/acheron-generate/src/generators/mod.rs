use std::io::Write;

use chrono::NaiveDate;

use acheron_core::{Corpus, IdAllocator};

use crate::output::sql::SqlEmitter;
use crate::sampler::Sampler;

pub mod discipline;
pub mod geography;
pub mod persons;
pub mod records;
pub mod works;

/// Mutable run state threaded through the pipeline steps. The allocator is
/// owned here and only the currently executing step touches it.
pub struct RunContext<'a, W: Write> {
    pub corpus: &'a Corpus,
    pub ids: &'a mut IdAllocator,
    pub sampler: &'a mut Sampler,
    pub sink: &'a mut SqlEmitter<W>,
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
