//! HSV axis palettes.
//!
//! A palette is a fixed number of evenly spaced samples along one HSV axis.
//! The selected index is advisory: it names the sample nearest to the live
//! value, which after a regeneration need not sit exactly on a sample.

use super::{Color, Hsv};

/// Upper (exclusive) bound of the hue axis, in degrees.
///
/// Slightly past a full turn so the last swatches wrap back towards red.
pub const MAX_HUE: f64 = 380.0;

/// One of the three HSV axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Hue,
    Saturation,
    Value,
}

impl Axis {
    /// Exclusive upper bound of the sampled range.
    pub fn extent(self) -> f64 {
        match self {
            Axis::Hue => MAX_HUE,
            Axis::Saturation | Axis::Value => 1.0,
        }
    }

    /// Read this axis' component from an HSV triple.
    pub fn component(self, hsv: Hsv) -> f64 {
        match self {
            Axis::Hue => hsv.h,
            Axis::Saturation => hsv.s,
            Axis::Value => hsv.v,
        }
    }

    /// The HSV triple for sample `x` on this axis.
    ///
    /// Hue samples are fully saturated and bright. Saturation samples keep
    /// the hue of `live` at full value. Value samples keep both hue and
    /// saturation of `live`.
    fn sample(self, live: Hsv, x: f64) -> Hsv {
        match self {
            Axis::Hue => Hsv::new(x, 1.0, 1.0),
            Axis::Saturation => Hsv::new(live.h, x, 1.0),
            Axis::Value => Hsv::new(live.h, live.s, x),
        }
    }
}

/// A palette entry: the HSV triple it was generated from and its pixel colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub hsv: Hsv,
    pub color: Color,
}

/// Evenly spaced samples along one axis plus the selected sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    axis: Axis,
    swatches: Vec<Swatch>,
    selected: usize,
}

impl Palette {
    /// Sample `size` points of `axis`, taking the fixed components from
    /// `live`, and select the sample nearest to `live`'s own component.
    ///
    /// `size` must be non-zero; [`super::PenColor::new`] rejects zero before
    /// any palette is built.
    pub fn generate(axis: Axis, live: Hsv, size: usize) -> Self {
        debug_assert!(size > 0, "palette size must be non-zero");
        let step = axis.extent() / size as f64;
        let swatches = (0..size)
            .map(|i| {
                let hsv = axis.sample(live, i as f64 * step);
                Swatch {
                    hsv,
                    color: hsv.to_color(),
                }
            })
            .collect();
        let mut palette = Self {
            axis,
            swatches,
            selected: 0,
        };
        palette.select_nearest(axis.component(live));
        palette
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn swatch(&self, index: usize) -> Swatch {
        self.swatches[index]
    }

    /// Distance between two neighbouring samples.
    pub fn step(&self) -> f64 {
        self.axis.extent() / self.swatches.len() as f64
    }

    /// Axis values of every sample, in increasing order.
    pub fn samples(&self) -> Vec<f64> {
        self.swatches
            .iter()
            .map(|s| self.axis.component(s.hsv))
            .collect()
    }

    /// Re-derive the selected index from a live axis value.
    pub fn select_nearest(&mut self, value: f64) {
        self.selected = nearest_index(value, &self.samples());
    }
}

/// Index of the sample in `samples` (sorted ascending) nearest to `value`.
///
/// Finds the first sample greater than `value` and picks between it and its
/// predecessor; a tie goes to the larger sample. Values past the last sample
/// map to the last index, values below the first map to index 0.
pub fn nearest_index(value: f64, samples: &[f64]) -> usize {
    for (i, &sample) in samples.iter().enumerate() {
        if sample > value {
            if i == 0 {
                return 0;
            }
            let prev = samples[i - 1];
            return if (prev - value).abs() < (sample - value).abs() {
                i - 1
            } else {
                i
            };
        }
    }
    samples.len().saturating_sub(1)
}
