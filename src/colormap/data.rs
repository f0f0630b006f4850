//! Bundled palette ramp data.
//!
//! The perceptual maps (cividis, viridis, plasma) and the diverging coolwarm
//! map are stored as evenly spaced 8-bit anchor colors. Jet keeps its native
//! per-channel breakpoint form, since its channels break at unrelated
//! positions.

pub const CIVIDIS: &[[u8; 3]] = &[
    [0x00, 0x22, 0x4e], // #00224e
    [0x12, 0x35, 0x70], // #123570
    [0x3b, 0x49, 0x6c], // #3b496c
    [0x57, 0x5d, 0x6d], // #575d6d
    [0x70, 0x71, 0x73], // #707173
    [0x8a, 0x86, 0x78], // #8a8678
    [0xa5, 0x9c, 0x74], // #a59c74
    [0xc3, 0xb3, 0x69], // #c3b369
    [0xe1, 0xcc, 0x55], // #e1cc55
    [0xfd, 0xea, 0x45], // #fdea45
];

pub const VIRIDIS: &[[u8; 3]] = &[
    [0x44, 0x01, 0x54], // #440154
    [0x48, 0x28, 0x78], // #482878
    [0x3e, 0x4a, 0x89], // #3e4a89
    [0x31, 0x68, 0x8e], // #31688e
    [0x26, 0x82, 0x8e], // #26828e
    [0x1f, 0x9e, 0x89], // #1f9e89
    [0x35, 0xb7, 0x79], // #35b779
    [0x6e, 0xce, 0x58], // #6ece58
    [0xb5, 0xde, 0x2b], // #b5de2b
    [0xfd, 0xe7, 0x25], // #fde725
];

pub const PLASMA: &[[u8; 3]] = &[
    [0x0d, 0x08, 0x87], // #0d0887
    [0x46, 0x03, 0x9f], // #46039f
    [0x72, 0x01, 0xa8], // #7201a8
    [0x9c, 0x17, 0x9e], // #9c179e
    [0xbd, 0x37, 0x86], // #bd3786
    [0xd8, 0x57, 0x6b], // #d8576b
    [0xed, 0x79, 0x53], // #ed7953
    [0xfb, 0x9f, 0x3a], // #fb9f3a
    [0xfd, 0xca, 0x26], // #fdca26
    [0xf0, 0xf9, 0x21], // #f0f921
];

pub const COOLWARM: &[[u8; 3]] = &[
    [59, 76, 192],
    [98, 130, 234],
    [141, 176, 254],
    [184, 208, 249],
    [221, 221, 221],
    [245, 196, 173],
    [244, 154, 123],
    [222, 96, 77],
    [180, 4, 38],
];

pub const JET_RED: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.35, 0.0),
    (0.66, 1.0),
    (0.89, 1.0),
    (1.0, 0.5),
];

pub const JET_GREEN: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];

pub const JET_BLUE: &[(f64, f64)] = &[
    (0.0, 0.5),
    (0.11, 1.0),
    (0.34, 1.0),
    (0.65, 0.0),
    (1.0, 0.0),
];
