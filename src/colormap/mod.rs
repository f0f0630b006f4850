//! Named color palettes and continuous sampling.
//!
//! A palette maps an intensity in [0, 1] to an RGBA color. Ramp data is
//! bundled; sampling is piecewise linear.

mod data;

use thiserror::Error;

/// Error type for palette lookup.
#[derive(Debug, Error)]
pub enum ColormapError {
    /// The requested palette name is not bundled.
    #[error("unknown colormap: {0}")]
    UnknownColormap(String),
}

/// Per-channel ramp breakpoint: (position in [0, 1], channel value).
type Breakpoint = (f64, f64);

#[derive(Debug)]
enum Ramp {
    /// Evenly spaced anchor colors, linearly interpolated.
    Anchors(&'static [[u8; 3]]),
    /// Independent per-channel breakpoint ramps.
    Channels {
        red: &'static [Breakpoint],
        green: &'static [Breakpoint],
        blue: &'static [Breakpoint],
    },
}

/// A named continuous color map.
#[derive(Debug)]
pub struct Palette {
    pub name: &'static str,
    ramp: Ramp,
}

/// All bundled palettes, in table-output order.
pub const PALETTES: [Palette; 5] = [
    Palette {
        name: "cividis",
        ramp: Ramp::Anchors(data::CIVIDIS),
    },
    Palette {
        name: "jet",
        ramp: Ramp::Channels {
            red: data::JET_RED,
            green: data::JET_GREEN,
            blue: data::JET_BLUE,
        },
    },
    Palette {
        name: "coolwarm",
        ramp: Ramp::Anchors(data::COOLWARM),
    },
    Palette {
        name: "viridis",
        ramp: Ramp::Anchors(data::VIRIDIS),
    },
    Palette {
        name: "plasma",
        ramp: Ramp::Anchors(data::PLASMA),
    },
];

impl Palette {
    /// Look up a bundled palette by name.
    pub fn by_name(name: &str) -> Result<&'static Palette, ColormapError> {
        PALETTES
            .iter()
            .find(|palette| palette.name == name)
            .ok_or_else(|| ColormapError::UnknownColormap(name.to_string()))
    }

    /// Sample the palette at intensity `t`, clamped to [0, 1].
    ///
    /// Returns RGBA; the bundled ramps are fully opaque.
    pub fn sample(&self, t: f64) -> [f64; 4] {
        let t = t.clamp(0.0, 1.0);
        let [r, g, b] = match &self.ramp {
            Ramp::Anchors(anchors) => sample_anchors(anchors, t),
            Ramp::Channels { red, green, blue } => {
                [ramp_value(red, t), ramp_value(green, t), ramp_value(blue, t)]
            }
        };
        [r, g, b, 1.0]
    }
}

fn sample_anchors(anchors: &[[u8; 3]], t: f64) -> [f64; 3] {
    let last = anchors.len() - 1;
    let position = t * last as f64;
    let lo = (position.floor() as usize).min(last - 1);
    let frac = position - lo as f64;
    std::array::from_fn(|channel| {
        let a = anchors[lo][channel] as f64 / 255.0;
        let b = anchors[lo + 1][channel] as f64 / 255.0;
        a + (b - a) * frac
    })
}

fn ramp_value(ramp: &[Breakpoint], t: f64) -> f64 {
    for pair in ramp.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            return y0 + (y1 - y0) * (t - x0) / (x1 - x0);
        }
    }
    ramp[ramp.len() - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_all_bundled_names() {
        for name in ["cividis", "jet", "coolwarm", "viridis", "plasma"] {
            assert!(Palette::by_name(name).is_ok(), "missing palette {name}");
        }
    }

    #[test]
    fn lookup_rejects_unknown_name() {
        let err = Palette::by_name("magma").unwrap_err();
        assert_eq!(err.to_string(), "unknown colormap: magma");
    }

    #[test]
    fn anchor_palettes_hit_their_endpoints() {
        for palette in &PALETTES {
            if let Ramp::Anchors(anchors) = &palette.ramp {
                let first = palette.sample(0.0);
                let last = palette.sample(1.0);
                for channel in 0..3 {
                    assert_eq!(
                        first[channel],
                        anchors[0][channel] as f64 / 255.0,
                        "{} start channel {channel}",
                        palette.name
                    );
                    assert_eq!(
                        last[channel],
                        anchors[anchors.len() - 1][channel] as f64 / 255.0,
                        "{} end channel {channel}",
                        palette.name
                    );
                }
            }
        }
    }

    #[test]
    fn jet_follows_its_channel_ramps() {
        let jet = Palette::by_name("jet").unwrap();
        assert_eq!(jet.sample(0.0)[..3], [0.0, 0.0, 0.5]);
        assert_eq!(jet.sample(1.0)[..3], [0.5, 0.0, 0.0]);
        // the green plateau covers the middle of the map
        assert!((jet.sample(0.5)[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn samples_stay_in_unit_range_and_opaque() {
        for palette in &PALETTES {
            for k in 0..256 {
                let t = k as f64 / 255.0;
                let rgba = palette.sample(t);
                assert_eq!(rgba[3], 1.0);
                for (channel, value) in rgba.iter().enumerate() {
                    assert!(
                        (0.0..=1.0).contains(value),
                        "{} channel {channel} at {t}: {value}",
                        palette.name
                    );
                }
            }
        }
    }
}
