use crate::errors::TleError;
use crate::models::{DerivedElements, OrbitGeometry, TleRecord};
use crate::physics::{derive_with, KeplerSolver};
use crate::report::OrbitRenderer;
use crate::tle::parse;
use tracing::{debug, warn};

/// Outcome counts of one catalog run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    pub processed: usize,
    pub invalid: usize,
    pub malformed: usize,
    pub out_of_domain: usize,
    pub render_failures: usize,
}

impl PipelineSummary {
    pub fn skipped(&self) -> usize {
        self.invalid + self.malformed + self.out_of_domain
    }

    fn count(&mut self, error: &TleError) {
        match error {
            TleError::InvalidRecord(_) => self.invalid += 1,
            TleError::Format { .. } => self.malformed += 1,
            TleError::Domain(_) => self.out_of_domain += 1,
        }
    }
}

pub struct PipelineRun {
    pub summary: PipelineSummary,
    pub elements: Vec<(TleRecord, DerivedElements)>,
}

/// Parses and derives element sets one block at a time.
pub struct Pipeline {
    solver: KeplerSolver,
}

impl Pipeline {
    pub fn new(solver: KeplerSolver) -> Self {
        Self { solver }
    }

    pub fn process_block(&self, block: &str) -> Result<(TleRecord, DerivedElements), TleError> {
        let record = parse(block)?;
        let derived = derive_with(&record, &self.solver)?;
        Ok((record, derived))
    }

    /// Runs every block. A failing block is logged, counted and skipped; the
    /// renderer only sees records that derived cleanly.
    pub fn process<S: AsRef<str>>(
        &self,
        blocks: &[S],
        mut renderer: Option<&mut dyn OrbitRenderer>,
    ) -> PipelineRun {
        let mut summary = PipelineSummary::default();
        let mut elements = Vec::with_capacity(blocks.len());

        for block in blocks {
            let block = block.as_ref();
            let (record, derived) = match self.process_block(block) {
                Ok(pair) => pair,
                Err(e) => {
                    let title = block.lines().next().unwrap_or("").trim();
                    warn!(title, error = %e, "Skipping element set");
                    summary.count(&e);
                    continue;
                }
            };

            if let Some(renderer) = renderer.as_deref_mut() {
                let geometry = OrbitGeometry::from_parts(&record, &derived);
                if let Err(e) = renderer.render(&geometry, &record.title) {
                    warn!(title = %record.title, error = %e, "Rendering failed");
                    summary.render_failures += 1;
                }
            }

            debug!(
                satellite = record.satellite_number,
                semi_major_axis_km = derived.semi_major_axis_km,
                "derived elements"
            );
            summary.processed += 1;
            elements.push((record, derived));
        }

        PipelineRun { summary, elements }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(KeplerSolver::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::samples::{DRAGON_CRS2, ISS_ZARYA};
    use crate::errors::PipelineErrors;

    #[derive(Default)]
    struct Recorder {
        labels: Vec<String>,
        fail: bool,
    }

    impl OrbitRenderer for Recorder {
        fn render(&mut self, _geometry: &OrbitGeometry, label: &str) -> Result<(), PipelineErrors> {
            if self.fail {
                return Err(PipelineErrors::EmptyCatalog(label.to_string()));
            }
            self.labels.push(label.to_string());
            Ok(())
        }
    }

    #[test]
    fn bad_blocks_are_skipped_and_counted() {
        let tampered = ISS_ZARYA.replace("51.6416", "51.6417");
        let blocks = vec![
            ISS_ZARYA.to_string(),
            tampered,
            "JUNK\nnot a tle".to_string(),
            DRAGON_CRS2.to_string(),
        ];
        let mut recorder = Recorder::default();
        let run = Pipeline::default().process(&blocks, Some(&mut recorder));

        assert_eq!(run.summary.processed, 2);
        assert_eq!(run.summary.invalid, 2);
        assert_eq!(run.summary.skipped(), 2);
        assert_eq!(recorder.labels, vec!["ISS (ZARYA)", "DRAGON CRS-2"]);
        assert_eq!(run.elements.len(), 2);
    }

    #[test]
    fn domain_errors_are_counted_separately() {
        let pipeline = Pipeline::new(KeplerSolver::default());
        let (record, _) = pipeline.process_block(ISS_ZARYA).unwrap();
        assert_eq!(record.satellite_number, 25544);

        let mut summary = PipelineSummary::default();
        summary.count(&TleError::Domain("mean motion".into()));
        summary.count(&TleError::format("bstar", "x"));
        assert_eq!(summary.out_of_domain, 1);
        assert_eq!(summary.malformed, 1);
    }

    #[test]
    fn render_failure_does_not_drop_record() {
        let mut recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let run = Pipeline::default().process(&[ISS_ZARYA], Some(&mut recorder));
        assert_eq!(run.summary.processed, 1);
        assert_eq!(run.summary.render_failures, 1);
    }

    #[test]
    fn runs_without_renderer() {
        let run = Pipeline::default().process(&[ISS_ZARYA, DRAGON_CRS2], None);
        assert_eq!(run.summary.processed, 2);
    }
}
