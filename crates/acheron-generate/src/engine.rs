use std::io::Write;
use std::time::Instant;

use tracing::info;

use acheron_core::{Corpus, IdAllocator};

use crate::errors::GenerationError;
use crate::generators::RunContext;
use crate::model::{EventPolicy, GenerateOptions, GenerationReport};
use crate::output::sql::SqlEmitter;
use crate::pipeline::Pipeline;
use crate::sampler::Sampler;

/// Entry point for generating a seed script from a corpus.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Runs the full pipeline once, writing statements into `sink` in
    /// production order.
    pub fn run<W: Write>(
        &self,
        corpus: &Corpus,
        sink: W,
    ) -> Result<GenerationReport, GenerationError> {
        let start = Instant::now();
        corpus.validate()?;
        self.validate_policies(corpus)?;

        let pipeline = Pipeline::for_options(&self.options);
        pipeline.check()?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self.options.seed.unwrap_or_else(rand::random);
        let mut report = GenerationReport::new(run_id.clone(), seed);

        info!(run_id = %run_id, seed, steps = pipeline.steps().len(), "generation started");

        let mut ids = IdAllocator::new();
        let mut sampler = Sampler::seeded(seed);
        let mut sink = SqlEmitter::new(sink);
        let mut ctx = RunContext {
            corpus,
            ids: &mut ids,
            sampler: &mut sampler,
            sink: &mut sink,
        };
        pipeline.run(&mut ctx, &mut report)?;
        sink.flush()?;

        report.statements = sink.statements();
        report.bytes_written = sink.bytes_written();
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            statements = report.statements,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(report)
    }

    /// Policy-dependent corpus requirements, checked before any output.
    fn validate_policies(&self, corpus: &Corpus) -> Result<(), GenerationError> {
        if self.options.events == EventPolicy::Split
            && corpus.event_subjects_nondistributed.is_empty()
        {
            return Err(acheron_core::Error::InvalidCorpus(
                "event_subjects_nondistributed must not be empty under the split event policy"
                    .to_string(),
            )
            .into());
        }
        if self.options.nondistributed_souls && corpus.nondistributed_surnames.is_empty() {
            return Err(acheron_core::Error::InvalidCorpus(
                "nondistributed_surnames must not be empty when the cohort is enabled".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
