//! Per-frame orchestration of the adjacency → closure → cluster pipeline.
//!
//! The driver walks a trajectory in chunks: at each chunk boundary the
//! adjacency is rebuilt from raw distances, and intermediate frames only
//! relax the carried adjacency (pairs break, never re-form, until the next
//! rebuild). Closure and reduction are recomputed per frame and hold no
//! cross-frame state.

use pairing_core::{
    AdjacencyMatrix, AnalysisConfig, FrameRecord, FrameSeries, PairingError, TrajectoryProvider,
};

use crate::adjacency::AdjacencyBuilder;
use crate::closure::ClosureEngine;
use crate::cluster::ClusterReducer;

/// Drives pairing analysis across the frames of a trajectory.
pub struct TrajectoryDriver {
    builder: AdjacencyBuilder,
    engine: ClosureEngine,
    reducer: ClusterReducer,
    chunk_size: usize,
}

impl TrajectoryDriver {
    /// Creates a driver from a validated configuration.
    pub fn new(config: &AnalysisConfig) -> Result<Self, PairingError> {
        config.validate()?;
        Ok(Self {
            builder: AdjacencyBuilder::new(config.cutoff)?,
            engine: ClosureEngine::new(),
            reducer: ClusterReducer::new(),
            chunk_size: config.chunk_size,
        })
    }

    /// Analyzes every frame of the trajectory, returning the full series.
    pub fn run<T: TrajectoryProvider>(&self, trajectory: &T) -> Result<FrameSeries, PairingError> {
        let mut series = FrameSeries::new();
        self.run_into(trajectory, &mut series)?;
        Ok(series)
    }

    /// Analyzes every frame, pushing records into a caller-owned series.
    ///
    /// On a frame failure the error carries the frame index and the series
    /// keeps every record emitted before it; nothing is retried or rolled
    /// back.
    pub fn run_into<T: TrajectoryProvider>(
        &self,
        trajectory: &T,
        series: &mut FrameSeries,
    ) -> Result<(), PairingError> {
        let frames = trajectory.frame_count();
        let mut carried: Option<AdjacencyMatrix> = None;

        for frame in 0..frames {
            let adjacency = self
                .advance(trajectory, frame, carried.take())
                .map_err(|e| PairingError::at_frame(frame, e))?;

            let closure = self
                .engine
                .close(&adjacency)
                .map_err(|e| PairingError::at_frame(frame, e))?;
            let clusters = self.reducer.reduce(&closure);

            log::debug!(
                "frame {frame}: {} clusters, mean size {:.3}",
                clusters.len(),
                clusters.statistics.mean
            );

            carried = Some(adjacency.clone());
            series.push(FrameRecord {
                frame,
                adjacency,
                closure,
                clusters,
            });
        }

        log::info!(
            "analyzed {} frames ({} sites, chunk size {})",
            frames,
            trajectory.site_count(),
            self.chunk_size
        );
        Ok(())
    }

    /// Pair persistence mode: captures the adjacency at a reference frame
    /// and only ever relaxes it over the following frames, answering "are
    /// the originally-paired sites still paired at frame t". Returns one
    /// adjacency per frame from the reference frame to the end; no closure
    /// or reduction is involved.
    pub fn pair_persistence<T: TrajectoryProvider>(
        &self,
        trajectory: &T,
        reference_frame: usize,
    ) -> Result<Vec<AdjacencyMatrix>, PairingError> {
        let frames = trajectory.frame_count();
        if reference_frame >= frames {
            return Err(PairingError::domain(format!(
                "reference frame {reference_frame} out of range for {frames} frames"
            )));
        }

        let distances = trajectory
            .distance_matrix(reference_frame)
            .map_err(|e| PairingError::at_frame(reference_frame, e))?;
        let mut current = self
            .builder
            .build(&distances)
            .map_err(|e| PairingError::at_frame(reference_frame, e))?;

        let mut per_frame = Vec::with_capacity(frames - reference_frame);
        per_frame.push(current.clone());

        for frame in (reference_frame + 1)..frames {
            let distances = trajectory
                .distance_matrix(frame)
                .map_err(|e| PairingError::at_frame(frame, e))?;
            current = self
                .builder
                .update(current, &distances)
                .map_err(|e| PairingError::at_frame(frame, e))?;
            per_frame.push(current.clone());
        }
        Ok(per_frame)
    }

    /// One step of the chunked state machine: rebuild from raw distances
    /// at chunk boundaries, relax the carried adjacency otherwise.
    fn advance<T: TrajectoryProvider>(
        &self,
        trajectory: &T,
        frame: usize,
        carried: Option<AdjacencyMatrix>,
    ) -> Result<AdjacencyMatrix, PairingError> {
        let distances = trajectory.distance_matrix(frame)?;
        match carried {
            Some(previous) if frame % self.chunk_size != 0 => {
                log::trace!("frame {frame}: incremental update");
                self.builder.update(previous, &distances)
            }
            _ => {
                log::trace!("frame {frame}: chunk rebuild");
                self.builder.build(&distances)
            }
        }
    }
}
