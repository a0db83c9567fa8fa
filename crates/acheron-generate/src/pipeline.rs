use std::collections::BTreeSet;
use std::io::Write;

use tracing::info;

use acheron_core::Counter;

use crate::errors::GenerationError;
use crate::generators::{RunContext, discipline, geography, persons, records, works};
use crate::model::{EventPolicy, GenerateOptions, GenerationReport, WorkRosterPolicy};

/// One pipeline step: a generator plus the counters it touches, declared up
/// front so the driver can verify the order before any row is emitted.
pub struct Step<W: Write> {
    pub name: &'static str,
    pub reads: &'static [Counter],
    pub writes: Counter,
    run: fn(&mut RunContext<'_, W>) -> Result<u64, GenerationError>,
}

/// The ordered list of generator steps for one run.
pub struct Pipeline<W: Write> {
    steps: Vec<Step<W>>,
}

impl<W: Write> Pipeline<W> {
    /// Assembles the step list for the selected policies.
    pub fn for_options(options: &GenerateOptions) -> Self {
        let mut steps = vec![
            Step {
                name: "users",
                reads: &[],
                writes: Counter::Users,
                run: persons::users,
            },
            Step {
                name: "levels",
                reads: &[],
                writes: Counter::Levels,
                run: geography::levels,
            },
            Step {
                name: "pit_locations",
                reads: &[Counter::Levels],
                writes: Counter::PitLocations,
                run: geography::pit_locations,
            },
            Step {
                name: "outer_locations",
                reads: &[Counter::Levels, Counter::PitLocations],
                writes: Counter::OuterLocations,
                run: geography::outer_locations,
            },
            Step {
                name: "monsters",
                reads: &[Counter::Users, Counter::PitLocations],
                writes: Counter::Monsters,
                run: persons::monsters,
            },
            Step {
                name: "tortures",
                reads: &[Counter::Users, Counter::Monsters],
                writes: Counter::Tortures,
                run: discipline::tortures,
            },
            Step {
                name: "tortured_souls",
                reads: &[Counter::Users, Counter::Tortures],
                writes: Counter::TorturedSouls,
                run: persons::tortured_souls,
            },
            Step {
                name: "working_souls",
                reads: &[Counter::Users, Counter::Tortures],
                writes: Counter::WorkingSouls,
                run: persons::working_souls,
            },
        ];
        if options.nondistributed_souls {
            steps.push(Step {
                name: "nondistributed_souls",
                reads: &[Counter::Tortures],
                writes: Counter::NondistributedSouls,
                run: persons::nondistributed_souls,
            });
        }
        steps.push(Step {
            name: "sin_types",
            reads: &[Counter::Users, Counter::Tortures],
            writes: Counter::SinTypes,
            run: discipline::sin_types,
        });
        steps.push(Step {
            name: "statuses",
            reads: &[],
            writes: Counter::Statuses,
            run: discipline::statuses,
        });
        steps.push(Step {
            name: "complaints",
            reads: &[Counter::TorturedSouls, Counter::Statuses],
            writes: Counter::Complaints,
            run: records::complaints,
        });
        steps.push(Step {
            name: "distributed_events",
            reads: &[Counter::TorturedSouls, Counter::Statuses, Counter::Users],
            writes: Counter::DistributedEvents,
            run: records::distributed_events,
        });
        if options.events == EventPolicy::Split {
            steps.push(Step {
                name: "nondistributed_events",
                reads: &[Counter::TorturedSouls, Counter::Statuses],
                writes: Counter::NondistributedEvents,
                run: records::nondistributed_events,
            });
        }
        steps.push(Step {
            name: "works",
            reads: &[Counter::OuterLocations, Counter::Users],
            writes: Counter::Works,
            run: works::works,
        });
        steps.push(Step {
            name: "sin_assignments",
            reads: &[Counter::DistributedEvents, Counter::SinTypes],
            writes: Counter::SinAssignments,
            run: records::sin_assignments,
        });
        steps.push(Step {
            name: "work_roster",
            reads: &[Counter::WorkingSouls, Counter::Works],
            writes: Counter::WorkAssignments,
            run: match options.work_roster {
                WorkRosterPolicy::Enumerate => works::enumerate_roster,
                WorkRosterPolicy::Sample => works::sample_roster,
            },
        });
        Self { steps }
    }

    pub fn steps(&self) -> &[Step<W>] {
        &self.steps
    }

    /// Verifies every step reads only counters an earlier step wrote, and
    /// that no counter has two writers.
    pub fn check(&self) -> Result<(), GenerationError> {
        let mut written = BTreeSet::new();
        for step in &self.steps {
            for read in step.reads {
                if !written.contains(read) {
                    return Err(GenerationError::InvalidPipeline(format!(
                        "step '{}' reads {} before any step writes it",
                        step.name, read
                    )));
                }
            }
            if !written.insert(step.writes) {
                return Err(GenerationError::InvalidPipeline(format!(
                    "counter {} has more than one writing step",
                    step.writes
                )));
            }
        }
        Ok(())
    }

    /// Runs the steps in order, recording per-step row counts.
    pub fn run(
        &self,
        ctx: &mut RunContext<'_, W>,
        report: &mut GenerationReport,
    ) -> Result<(), GenerationError> {
        for step in &self.steps {
            let rows = (step.run)(ctx)?;
            info!(step = step.name, rows, "step completed");
            report.record_step(step.name, rows);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pipeline_passes_the_dependency_check() {
        let pipeline: Pipeline<Vec<u8>> = Pipeline::for_options(&GenerateOptions::default());
        pipeline.check().expect("default pipeline is well ordered");
    }

    #[test]
    fn every_policy_combination_passes_the_dependency_check() {
        for events in [EventPolicy::Split, EventPolicy::Unified] {
            for work_roster in [WorkRosterPolicy::Enumerate, WorkRosterPolicy::Sample] {
                for nondistributed_souls in [false, true] {
                    let options = GenerateOptions {
                        seed: None,
                        events,
                        work_roster,
                        nondistributed_souls,
                    };
                    let pipeline: Pipeline<Vec<u8>> = Pipeline::for_options(&options);
                    pipeline.check().expect("pipeline is well ordered");
                }
            }
        }
    }

    #[test]
    fn a_read_before_its_writer_is_rejected() {
        let mut pipeline: Pipeline<Vec<u8>> = Pipeline::for_options(&GenerateOptions::default());
        pipeline.steps.swap(0, 5);
        let err = pipeline.check().expect_err("misordered pipeline rejected");
        assert!(matches!(err, GenerationError::InvalidPipeline(_)));
    }
}
