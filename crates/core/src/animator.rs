//! Pull-based per-frame driver for a superposition session.
//!
//! An [`Animator`] owns a validated wave list and the session grid, and maps
//! any frame index to simulation time and field values on demand. There is no
//! hidden frame-to-frame state: `run_frame(n)` is pure arithmetic, callable
//! in any order, so the external animation clock owns looping and cadence.

use crate::error::WaveError;
use crate::grid::SampleGrid;
use crate::scene::Scene;
use crate::trace::Trace;
use crate::wave::WaveParameters;
use serde::Serialize;

/// Simulation time step per frame, scaled by the maximum configured frequency.
pub const FRAME_STEP: f64 = 0.025;

/// Frame count of the reference animation.
pub const DEFAULT_FRAME_COUNT: usize = 200;

/// Nominal external clock interval of the reference animation, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 25;

/// One computed animation frame: per-wave traces plus their superposition.
///
/// All traces have the session grid's length. Fresh values every frame;
/// the rendering collaborator owns any mutable display buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutput {
    /// Frame index this output was computed for.
    pub frame: usize,
    /// Simulation time of the frame (s).
    pub time: f64,
    /// One evaluated trace per configured wave, in configuration order.
    pub waves: Vec<Trace>,
    /// Element-wise sum of all wave traces.
    pub resultant: Trace,
}

/// Receiver for computed frames — the rendering-sink seam.
///
/// Object-safe so drivers can push to `&mut dyn FrameSink` without caring
/// whether the sink draws, serializes, or discards.
pub trait FrameSink {
    /// Accepts one computed frame.
    fn accept(&mut self, frame: &FrameOutput) -> Result<(), WaveError>;
}

/// Frame driver for one animation session.
///
/// Construction validates every wave and derives the [`SampleGrid`]; after
/// that, [`Animator::run_frame`] cannot fail. The driver holds no notion of
/// an animation having ended — once the external clock passes `frame_count`
/// it simply starts asking from zero again.
#[derive(Debug, Clone)]
pub struct Animator {
    waves: Vec<WaveParameters>,
    grid: SampleGrid,
    frame_count: usize,
    interval_ms: u64,
    max_frequency: f64,
}

impl Animator {
    /// Creates a driver for the given waves.
    ///
    /// Fails eagerly, before any frame can be computed, if the wave list is
    /// empty or any wave has a non-positive wavelength or frequency.
    pub fn new(
        waves: Vec<WaveParameters>,
        frame_count: usize,
        interval_ms: u64,
    ) -> Result<Self, WaveError> {
        if waves.is_empty() {
            return Err(WaveError::NoWaves);
        }
        for wave in &waves {
            wave.validate()?;
        }
        let grid = SampleGrid::from_waves(&waves)?;
        let max_frequency = waves
            .iter()
            .map(|w| w.frequency)
            .fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            waves,
            grid,
            frame_count,
            interval_ms,
            max_frequency,
        })
    }

    /// Creates a driver from a scene configuration.
    pub fn from_scene(scene: &Scene) -> Result<Self, WaveError> {
        scene.validate()?;
        let waves = scene.waves.iter().map(|w| w.to_params()).collect();
        Self::new(waves, scene.frames, scene.interval_ms)
    }

    /// The configured waves, in order.
    pub fn waves(&self) -> &[WaveParameters] {
        &self.waves
    }

    /// The session position grid.
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    /// Number of frames in one loop of the animation.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Nominal external clock interval (ms); metadata only, never slept on.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Largest frequency among the configured waves (Hz).
    pub fn max_frequency(&self) -> f64 {
        self.max_frequency
    }

    /// Simulation time for a frame index: `frame * FRAME_STEP / max_frequency`.
    pub fn time_at(&self, frame: usize) -> f64 {
        frame as f64 * FRAME_STEP / self.max_frequency
    }

    /// Computes one frame from scratch.
    ///
    /// Evaluates every wave over the grid at the frame's simulation time and
    /// superposes the results. Stateless and deterministic: the same index
    /// always yields bit-identical output, independent of call order.
    pub fn run_frame(&self, frame: usize) -> FrameOutput {
        let time = self.time_at(frame);
        let positions = self.grid.positions();
        let waves: Vec<Trace> = self
            .waves
            .iter()
            .map(|w| w.evaluate(positions, time))
            .collect();
        let mut resultant = Trace::zeros(positions.len());
        for trace in &waves {
            // Lengths match by construction; superposition cannot fail here.
            let _ = resultant.add_assign(trace);
        }
        FrameOutput {
            frame,
            time,
            waves,
            resultant,
        }
    }

    /// Pushes frames `0..frame_count` to a sink, once each.
    ///
    /// Convenience loop for non-interactive collaborators; an interactive
    /// clock calls [`Animator::run_frame`] itself.
    pub fn play(&self, sink: &mut dyn FrameSink) -> Result<(), WaveError> {
        for frame in 0..self.frame_count {
            sink.accept(&self.run_frame(frame))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::{Direction, Polarity};

    /// Sink that records every accepted frame index.
    struct RecordingSink {
        frames: Vec<usize>,
    }

    impl FrameSink for RecordingSink {
        fn accept(&mut self, frame: &FrameOutput) -> Result<(), WaveError> {
            self.frames.push(frame.frame);
            Ok(())
        }
    }

    /// Sink that fails on the nth accepted frame.
    struct FailingSink {
        accepted: usize,
        fail_at: usize,
    }

    impl FrameSink for FailingSink {
        fn accept(&mut self, _frame: &FrameOutput) -> Result<(), WaveError> {
            if self.accepted == self.fail_at {
                return Err(WaveError::Io("sink closed".into()));
            }
            self.accepted += 1;
            Ok(())
        }
    }

    fn two_wave_animator() -> Animator {
        let mut left = WaveParameters::new(5.0, 10.0, 90.0);
        left.direction = Direction::Left;
        let waves = vec![WaveParameters::new(5.0, 10.0, 90.0), left];
        Animator::new(waves, DEFAULT_FRAME_COUNT, DEFAULT_INTERVAL_MS).unwrap()
    }

    // ---- Construction and validation ----

    #[test]
    fn new_with_empty_wave_list_fails() {
        assert!(matches!(
            Animator::new(vec![], 200, 25),
            Err(WaveError::NoWaves)
        ));
    }

    #[test]
    fn new_with_zero_wavelength_fails_before_any_frame() {
        let waves = vec![WaveParameters::new(1.0, 0.0, 1.0)];
        assert!(matches!(
            Animator::new(waves, 200, 25),
            Err(WaveError::InvalidWavelength(_))
        ));
    }

    #[test]
    fn new_with_negative_frequency_fails() {
        let waves = vec![WaveParameters::new(1.0, 10.0, -1.0)];
        assert!(matches!(
            Animator::new(waves, 200, 25),
            Err(WaveError::InvalidFrequency(_))
        ));
    }

    #[test]
    fn new_reports_first_invalid_wave() {
        let waves = vec![
            WaveParameters::new(1.0, 10.0, 1.0),
            WaveParameters::new(1.0, -2.0, 1.0),
        ];
        assert!(matches!(
            Animator::new(waves, 200, 25),
            Err(WaveError::InvalidWavelength(v)) if v == -2.0
        ));
    }

    #[test]
    fn new_derives_grid_from_max_wavelength() {
        let waves = vec![
            WaveParameters::new(1.0, 4.0, 1.0),
            WaveParameters::new(1.0, 10.0, 2.0),
        ];
        let animator = Animator::new(waves, 200, 25).unwrap();
        assert_eq!(animator.grid().span(), 80.0);
        assert_eq!(animator.grid().len(), crate::grid::GRID_SAMPLES);
        assert_eq!(animator.max_frequency(), 2.0);
    }

    #[test]
    fn accessors_expose_session_metadata() {
        let animator = two_wave_animator();
        assert_eq!(animator.waves().len(), 2);
        assert_eq!(animator.frame_count(), DEFAULT_FRAME_COUNT);
        assert_eq!(animator.interval_ms(), DEFAULT_INTERVAL_MS);
    }

    // ---- Frame computation ----

    #[test]
    fn time_at_scales_frame_step_by_max_frequency() {
        let animator = two_wave_animator();
        // max frequency 90: t = n * 0.025 / 90
        assert_eq!(animator.time_at(0), 0.0);
        assert!((animator.time_at(1) - 0.025 / 90.0).abs() < 1e-15);
        assert!((animator.time_at(40) - 1.0 / 90.0).abs() < 1e-12);
    }

    #[test]
    fn run_frame_outputs_match_grid_length() {
        let animator = two_wave_animator();
        let out = animator.run_frame(17);
        assert_eq!(out.frame, 17);
        assert_eq!(out.waves.len(), 2);
        for trace in &out.waves {
            assert_eq!(trace.len(), animator.grid().len());
        }
        assert_eq!(out.resultant.len(), animator.grid().len());
    }

    #[test]
    fn resultant_is_element_wise_sum_of_waves() {
        let waves = vec![
            WaveParameters::new(10.0, 6.0, 90.0),
            WaveParameters::new(5.0, 10.0, 110.0),
        ];
        let animator = Animator::new(waves, 200, 25).unwrap();
        let out = animator.run_frame(33);
        for i in 0..out.resultant.len() {
            let sum = out.waves[0].data()[i] + out.waves[1].data()[i];
            assert_eq!(out.resultant.data()[i], sum, "index {i}");
        }
    }

    #[test]
    fn run_frame_is_bit_for_bit_deterministic() {
        let animator = two_wave_animator();
        let a = animator.run_frame(123);
        let b = animator.run_frame(123);
        assert!(a
            .resultant
            .data()
            .iter()
            .zip(b.resultant.data().iter())
            .all(|(x, y)| x.to_bits() == y.to_bits()));
        assert_eq!(a, b);
    }

    #[test]
    fn run_frame_is_independent_of_call_order() {
        let animator = two_wave_animator();
        let forward = animator.run_frame(7);
        animator.run_frame(199);
        animator.run_frame(0);
        let again = animator.run_frame(7);
        assert_eq!(forward, again);
    }

    #[test]
    fn run_frame_past_frame_count_keeps_answering() {
        // Looping is the external clock's business; large indices still work.
        let animator = two_wave_animator();
        let out = animator.run_frame(DEFAULT_FRAME_COUNT + 50);
        assert!(out.resultant.data().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn opposite_polarity_waves_cancel_at_every_frame() {
        let wave = WaveParameters::new(10.0, 10.0, 90.0);
        let mut flipped = wave;
        flipped.polarity = Polarity::Negative;
        let animator = Animator::new(vec![wave, flipped], 200, 25).unwrap();
        for frame in [0, 1, 50, 137, 199, 500] {
            let out = animator.run_frame(frame);
            assert!(
                out.resultant.data().iter().all(|v| v.abs() < 1e-9),
                "nonzero resultant at frame {frame}"
            );
        }
    }

    #[test]
    fn pi_phase_shift_cancels_equal_waves() {
        // The original gallery's perfect destructive interference case.
        let wave = WaveParameters::new(10.0, 10.0, 90.0);
        let mut shifted = wave;
        shifted.phase_offset = std::f64::consts::PI;
        let animator = Animator::new(vec![wave, shifted], 200, 25).unwrap();
        let out = animator.run_frame(42);
        assert!(out.resultant.data().iter().all(|v| v.abs() < 1e-9));
    }

    #[test]
    fn identical_waves_double_the_amplitude() {
        let wave = WaveParameters::new(5.0, 10.0, 90.0);
        let animator = Animator::new(vec![wave, wave], 200, 25).unwrap();
        let out = animator.run_frame(11);
        for (sum, single) in out.resultant.data().iter().zip(out.waves[0].data()) {
            assert!((sum - 2.0 * single).abs() < 1e-12);
        }
    }

    #[test]
    fn single_wave_resultant_equals_the_wave() {
        let animator = Animator::new(vec![WaveParameters::new(5.0, 4.0, 10.0)], 200, 25).unwrap();
        let out = animator.run_frame(25);
        assert_eq!(out.resultant, out.waves[0]);
    }

    // ---- Sinks ----

    #[test]
    fn play_pushes_every_frame_once_in_order() {
        let animator = Animator::new(vec![WaveParameters::new(1.0, 10.0, 1.0)], 5, 25).unwrap();
        let mut sink = RecordingSink { frames: vec![] };
        animator.play(&mut sink).unwrap();
        assert_eq!(sink.frames, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn play_stops_at_first_sink_failure() {
        let animator = Animator::new(vec![WaveParameters::new(1.0, 10.0, 1.0)], 10, 25).unwrap();
        let mut sink = FailingSink {
            accepted: 0,
            fail_at: 3,
        };
        assert!(matches!(
            animator.play(&mut sink),
            Err(WaveError::Io(_))
        ));
        assert_eq!(sink.accepted, 3);
    }

    #[test]
    fn frame_sink_is_object_safe() {
        let mut sink = RecordingSink { frames: vec![] };
        let dyn_sink: &mut dyn FrameSink = &mut sink;
        let animator = two_wave_animator();
        dyn_sink.accept(&animator.run_frame(0)).unwrap();
        assert_eq!(sink.frames, vec![0]);
    }

    #[test]
    fn frame_output_serializes_with_traces_as_arrays() {
        let animator = Animator::new(vec![WaveParameters::new(1.0, 1.0, 1.0)], 1, 25).unwrap();
        let out = animator.run_frame(0);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["frame"], 0);
        assert!(json["waves"][0].is_array());
        assert!(json["resultant"].is_array());
    }

    // ---- Property-based tests ----

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn wave() -> impl Strategy<Value = WaveParameters> {
            (
                -20.0_f64..=20.0,
                0.5_f64..=50.0,
                0.5_f64..=200.0,
                -6.3_f64..=6.3,
                prop::bool::ANY,
                prop::bool::ANY,
            )
                .prop_map(|(a, wl, f, phi, left, negative)| {
                    let mut w = WaveParameters::new(a, wl, f);
                    w.phase_offset = phi;
                    if left {
                        w.direction = Direction::Left;
                    }
                    if negative {
                        w.polarity = Polarity::Negative;
                    }
                    w
                })
        }

        proptest! {
            #[test]
            fn resultant_always_sums_waves(
                waves in prop::collection::vec(wave(), 1..=4),
                frame in 0_usize..=400,
            ) {
                let animator = Animator::new(waves, 200, 25).unwrap();
                let out = animator.run_frame(frame);
                for i in 0..out.resultant.len() {
                    let sum: f64 = out.waves.iter().map(|t| t.data()[i]).sum();
                    prop_assert!((out.resultant.data()[i] - sum).abs() < 1e-9);
                }
            }

            #[test]
            fn repeated_frames_are_bit_identical(
                waves in prop::collection::vec(wave(), 1..=3),
                frame in 0_usize..=1000,
            ) {
                let animator = Animator::new(waves, 200, 25).unwrap();
                let a = animator.run_frame(frame);
                let b = animator.run_frame(frame);
                for (x, y) in a.resultant.data().iter().zip(b.resultant.data()) {
                    prop_assert_eq!(x.to_bits(), y.to_bits());
                }
            }

            #[test]
            fn opposite_polarity_pair_cancels(
                base in wave(),
                frame in 0_usize..=400,
            ) {
                let mut flipped = base;
                flipped.polarity = match base.polarity {
                    Polarity::Positive => Polarity::Negative,
                    Polarity::Negative => Polarity::Positive,
                };
                let animator = Animator::new(vec![base, flipped], 200, 25).unwrap();
                let out = animator.run_frame(frame);
                for &v in out.resultant.data() {
                    prop_assert!(v.abs() < 1e-9, "residual {v}");
                }
            }

            #[test]
            fn no_nans_for_valid_configurations(
                waves in prop::collection::vec(wave(), 1..=4),
                frame in 0_usize..=2000,
            ) {
                let animator = Animator::new(waves, 200, 25).unwrap();
                let out = animator.run_frame(frame);
                for &v in out.resultant.data() {
                    prop_assert!(v.is_finite());
                }
            }
        }
    }
}
