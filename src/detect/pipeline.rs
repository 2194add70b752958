//! Background detection worker with a single-slot in-flight mailbox.
//!
//! At most one detection request is outstanding at a time. The acceptance
//! check and the slot write happen on the UI-owning thread in `try_submit`;
//! the release happens on the worker thread when the request completes, on
//! every exit path, via the slot guard's `Drop`. Frames arriving while busy
//! are dropped, never queued: the pipeline always processes the most recent
//! frame it is free to process.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{error, trace, warn};

use crate::session::{ArSession, FrameImage, HitTestTarget, ImageOrientation};

use super::{InferenceEngine, Viewport, best_observation};

/// Final label/confidence handed back to the UI-owning thread for display.
///
/// An empty label means "nothing detected"; the UI shows nothing for it.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUpdate {
    pub label: String,
    pub confidence: f32,
}

impl DisplayUpdate {
    fn cleared() -> Self {
        Self {
            label: String::new(),
            confidence: 0.0,
        }
    }

    /// Whether this update carries a qualifying detection.
    pub fn is_detection(&self) -> bool {
        !self.label.is_empty()
    }
}

/// Single-slot occupancy flag shared between the UI thread and the worker.
#[derive(Clone)]
struct InFlightSlot(Arc<AtomicBool>);

impl InFlightSlot {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Claim the slot if it is free. The returned guard releases it on drop.
    fn try_acquire(&self) -> Option<SlotGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SlotGuard(Arc::clone(&self.0)))
    }

    fn is_free(&self) -> bool {
        !self.0.load(Ordering::Acquire)
    }
}

/// Releases the in-flight slot when dropped, on success and failure alike.
struct SlotGuard(Arc<AtomicBool>);

impl Drop for SlotGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

struct Job {
    image: FrameImage,
    orientation: ImageOrientation,
    guard: SlotGuard,
}

/// Detection pipeline running an [`InferenceEngine`] on a dedicated worker
/// thread, hit-testing qualifying results against the AR session.
pub struct DetectionPipeline {
    jobs: Sender<Job>,
    updates: Receiver<DisplayUpdate>,
    slot: InFlightSlot,
    worker: Option<JoinHandle<()>>,
}

impl DetectionPipeline {
    /// Spawn the worker thread around an engine and a shared session handle.
    pub fn spawn<E, S>(mut engine: E, session: Arc<S>, viewport: Viewport) -> Self
    where
        E: InferenceEngine + Send + 'static,
        S: ArSession + 'static,
    {
        let (job_tx, job_rx) = unbounded::<Job>();
        let (update_tx, update_rx) = unbounded();
        let slot = InFlightSlot::new();

        let worker = thread::spawn(move || {
            while let Ok(job) = job_rx.recv() {
                process(&mut engine, session.as_ref(), viewport, job, &update_tx);
            }
        });

        Self {
            jobs: job_tx,
            updates: update_rx,
            slot,
            worker: Some(worker),
        }
    }

    /// Submit a frame for detection, unless one is already in flight.
    ///
    /// Returns whether the frame was accepted. Rejection is the backpressure
    /// policy, not an error: the frame is silently dropped.
    pub fn try_submit(&self, image: FrameImage, orientation: ImageOrientation) -> bool {
        let Some(guard) = self.slot.try_acquire() else {
            trace!("detection in flight, dropping frame");
            return false;
        };

        let job = Job {
            image,
            orientation,
            guard,
        };
        // A send failure means the worker is gone; the guard reopens the
        // slot as the job is dropped.
        self.jobs.send(job).is_ok()
    }

    /// Whether the pipeline is free to accept a frame.
    pub fn is_idle(&self) -> bool {
        self.slot.is_free()
    }

    /// Display updates to be drained on the UI-owning thread.
    pub fn updates(&self) -> &Receiver<DisplayUpdate> {
        &self.updates
    }
}

impl Drop for DetectionPipeline {
    fn drop(&mut self) {
        // Closing the job channel ends the worker loop.
        let (closed, _) = unbounded();
        self.jobs = closed;
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn process<E, S>(
    engine: &mut E,
    session: &S,
    viewport: Viewport,
    job: Job,
    updates: &Sender<DisplayUpdate>,
) where
    E: InferenceEngine,
    S: ArSession,
{
    let Job {
        image,
        orientation,
        guard,
    } = job;

    let observations = match engine.detect(&image, orientation) {
        Ok(observations) => observations,
        Err(err) => {
            // Logged, slot released, no UI change.
            error!("inference request failed: {err}");
            return;
        }
    };

    if observations.is_empty() {
        warn!("unable to detect objects on frame");
    }

    let update = match best_observation(&observations) {
        Some(best) => {
            let point = best.bounding_box.screen_center(viewport);
            let hits = session.hit_test(
                point,
                &[
                    HitTestTarget::FeaturePoint,
                    HitTestTarget::EstimatedHorizontalPlane,
                ],
            );
            // Anchor creation happens here on the worker thread, before the
            // UI handoff.
            if let Some(hit) = hits.first() {
                session.add_anchor(hit.world_transform);
            }
            DisplayUpdate {
                label: best.label.clone(),
                confidence: best.confidence,
            }
        }
        None => DisplayUpdate::cleared(),
    };

    // The request is complete: reopen the slot before the UI handoff.
    drop(guard);
    let _ = updates.send(update);
}
