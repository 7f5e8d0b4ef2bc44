//! Textual frame sinks: the CLI's stand-ins for a rendering surface.
//!
//! Both sinks write through any `io::Write` and implement the core's
//! [`FrameSink`] seam, so the animator stays unaware of the output format.

use std::io::Write;
use wave_engine_core::{FrameOutput, FrameSink, WaveError};

/// Writes one serialized [`FrameOutput`] per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn accept(&mut self, frame: &FrameOutput) -> Result<(), WaveError> {
        let line =
            serde_json::to_string(frame).map_err(|e| WaveError::Io(e.to_string()))?;
        writeln!(self.writer, "{line}").map_err(|e| WaveError::Io(e.to_string()))
    }
}

/// Writes `frame,time,x,wave_1..wave_n,resultant` rows, one per grid position.
///
/// The header is emitted before the first row once the wave count is known.
pub struct CsvSink<W: Write> {
    writer: W,
    positions: Vec<f64>,
    wrote_header: bool,
}

impl<W: Write> CsvSink<W> {
    /// Creates a sink for a session over the given grid positions.
    pub fn new(writer: W, positions: &[f64]) -> Self {
        Self {
            writer,
            positions: positions.to_vec(),
            wrote_header: false,
        }
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self, wave_count: usize) -> std::io::Result<()> {
        write!(self.writer, "frame,time,x")?;
        for i in 1..=wave_count {
            write!(self.writer, ",wave_{i}")?;
        }
        writeln!(self.writer, ",resultant")
    }
}

impl<W: Write> FrameSink for CsvSink<W> {
    fn accept(&mut self, frame: &FrameOutput) -> Result<(), WaveError> {
        let io_err = |e: std::io::Error| WaveError::Io(e.to_string());
        if frame.resultant.len() != self.positions.len() {
            return Err(WaveError::LengthMismatch {
                lhs: self.positions.len(),
                rhs: frame.resultant.len(),
            });
        }
        if !self.wrote_header {
            self.write_header(frame.waves.len()).map_err(io_err)?;
            self.wrote_header = true;
        }
        for (i, &x) in self.positions.iter().enumerate() {
            write!(self.writer, "{},{},{}", frame.frame, frame.time, x).map_err(io_err)?;
            for trace in &frame.waves {
                write!(self.writer, ",{}", trace.data()[i]).map_err(io_err)?;
            }
            writeln!(self.writer, ",{}", frame.resultant.data()[i]).map_err(io_err)?;
        }
        Ok(())
    }
}
