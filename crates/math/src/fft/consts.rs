//! Constant tables for the GF(2^12) additive FFT over 64 points.
//!
//! These encode the field polynomial `x^12 + x^3 + 1` and the evaluation
//! basis; they are data, reproduced bit-exact rather than derived.

use crate::{BitsliceVec, FFT_POINTS};

/// Radix-conversion bit masks, finest interleave first.
pub const RADIX_MASKS: [[u64; 2]; 5] = [
    [0x8888888888888888, 0x4444444444444444],
    [0xC0C0C0C0C0C0C0C0, 0x3030303030303030],
    [0xF000F000F000F000, 0x0F000F000F000F00],
    [0xFF000000FF000000, 0x00FF000000FF0000],
    [0xFFFF000000000000, 0x0000FFFF00000000],
];

/// Per-round scaling vectors applied after each radix-conversion round.
pub const RADIX_SCALARS: [BitsliceVec; 5] = [
    [
        0xF3CFC030FC30F003, 0x3FCF0F003C00C00C, 0x30033CC300C0C03C, 0xCCFF0F3C0F30F0C0,
        0x0300C03FF303C3F0, 0x3FFF3C0FF0CCCCC0, 0xF3FFF0C00F3C3CC0, 0x3003333FFFC3C000,
        0x0FF30FFFC3FFF300, 0xFFC0F300F0F0CC00, 0xC0CFF3FCCC3CFC00, 0xFC3C03F0F330C000,
    ],
    [
        0x000F00000000F00F, 0x00000F00F00000F0, 0x0F00000F00000F00, 0xF00F00F00F000000,
        0x00F00000000000F0, 0x0000000F00000000, 0xF00000000F00F000, 0x00F00F00000F0000,
        0x0000F00000F00F00, 0x000F00F00F00F000, 0x00F00F0000000000, 0x0000000000F00000,
    ],
    [
        0x0000FF00FF0000FF, 0x0000FF000000FF00, 0xFF0000FF00FF0000, 0xFFFF0000FF000000,
        0x00FF00FF00FF0000, 0x0000FFFFFF000000, 0x00FFFF00FF000000, 0xFFFFFF0000FF0000,
        0xFFFF00FFFF00FF00, 0x0000FF0000000000, 0xFFFFFF00FF000000, 0x00FF000000000000,
    ],
    [
        0x000000000000FFFF, 0x00000000FFFF0000, 0x0000000000000000, 0xFFFF000000000000,
        0x00000000FFFF0000, 0x0000FFFF00000000, 0x0000000000000000, 0x00000000FFFF0000,
        0x0000FFFF00000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ],
    [
        0x00000000FFFFFFFF, 0xFFFFFFFF00000000, 0xFFFFFFFF00000000, 0x0000000000000000,
        0x0000000000000000, 0xFFFFFFFF00000000, 0x0000000000000000, 0x0000000000000000,
        0xFFFFFFFF00000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ],
];

/// Twiddle vectors for the six butterfly stages, consumed in order
/// (1 + 2 + 4 + 8 + 16 + 32 = 63 entries).
pub const BUTTERFLY_CONSTS: [BitsliceVec; FFT_POINTS - 1] = [
    [
        0xF00F0FF0F00F0FF0, 0xF0F00F0F0F0FF0F0, 0x0FF00FF00FF00FF0, 0xAA5555AAAA5555AA,
        0xF00F0FF0F00F0FF0, 0x33CCCC33CC3333CC, 0xFFFF0000FFFF0000, 0xCC33CC3333CC33CC,
        0x33CC33CC33CC33CC, 0x5A5A5A5A5A5A5A5A, 0xFF00FF00FF00FF00, 0xF00F0FF0F00F0FF0,
    ],
    [
        0x3C3C3C3C3C3C3C3C, 0xF0F0F0F0F0F0F0F0, 0x5555AAAA5555AAAA, 0xCC3333CCCC3333CC,
        0xC33CC33CC33CC33C, 0x55555555AAAAAAAA, 0x33333333CCCCCCCC, 0x00FF00FFFF00FF00,
        0xF0F0F0F0F0F0F0F0, 0x0000000000000000, 0x0000FFFFFFFF0000, 0xF0F00F0F0F0FF0F0,
    ],
    [
        0x3C3C3C3C3C3C3C3C, 0x0F0F0F0F0F0F0F0F, 0xAAAA5555AAAA5555, 0xCC3333CCCC3333CC,
        0xC33CC33CC33CC33C, 0x55555555AAAAAAAA, 0x33333333CCCCCCCC, 0xFF00FF0000FF00FF,
        0x0F0F0F0F0F0F0F0F, 0x0000000000000000, 0x0000FFFFFFFF0000, 0xF0F00F0F0F0FF0F0,
    ],
    [
        0xAA55AA5555AA55AA, 0xCC33CC3333CC33CC, 0x33CCCC33CC3333CC, 0x55555555AAAAAAAA,
        0xFF0000FF00FFFF00, 0x3CC33CC3C33CC33C, 0x5555AAAA5555AAAA, 0x0FF00FF00FF00FF0,
        0xCCCC33333333CCCC, 0xF0F0F0F0F0F0F0F0, 0x00FFFF0000FFFF00, 0xC33CC33CC33CC33C,
    ],
    [
        0x55AA55AAAA55AA55, 0xCC33CC3333CC33CC, 0xCC3333CC33CCCC33, 0x55555555AAAAAAAA,
        0xFF0000FF00FFFF00, 0xC33CC33C3CC33CC3, 0xAAAA5555AAAA5555, 0xF00FF00FF00FF00F,
        0x3333CCCCCCCC3333, 0x0F0F0F0F0F0F0F0F, 0xFF0000FFFF0000FF, 0xC33CC33CC33CC33C,
    ],
    [
        0xAA55AA5555AA55AA, 0x33CC33CCCC33CC33, 0xCC3333CC33CCCC33, 0x55555555AAAAAAAA,
        0x00FFFF00FF0000FF, 0x3CC33CC3C33CC33C, 0x5555AAAA5555AAAA, 0x0FF00FF00FF00FF0,
        0x3333CCCCCCCC3333, 0xF0F0F0F0F0F0F0F0, 0x00FFFF0000FFFF00, 0xC33CC33CC33CC33C,
    ],
    [
        0x55AA55AAAA55AA55, 0x33CC33CCCC33CC33, 0x33CCCC33CC3333CC, 0x55555555AAAAAAAA,
        0x00FFFF00FF0000FF, 0xC33CC33C3CC33CC3, 0xAAAA5555AAAA5555, 0xF00FF00FF00FF00F,
        0xCCCC33333333CCCC, 0x0F0F0F0F0F0F0F0F, 0xFF0000FFFF0000FF, 0xC33CC33CC33CC33C,
    ],
    [
        0x6699669999669966, 0x33CCCC33CC3333CC, 0xA5A5A5A55A5A5A5A, 0x3C3CC3C3C3C33C3C,
        0xF00FF00F0FF00FF0, 0x55AA55AA55AA55AA, 0x3C3CC3C3C3C33C3C, 0x0F0F0F0FF0F0F0F0,
        0x55AA55AA55AA55AA, 0x33CCCC33CC3333CC, 0xF0F0F0F0F0F0F0F0, 0xA55A5AA55AA5A55A,
    ],
    [
        0x9966996666996699, 0x33CCCC33CC3333CC, 0xA5A5A5A55A5A5A5A, 0x3C3CC3C3C3C33C3C,
        0x0FF00FF0F00FF00F, 0xAA55AA55AA55AA55, 0x3C3CC3C3C3C33C3C, 0xF0F0F0F00F0F0F0F,
        0xAA55AA55AA55AA55, 0xCC3333CC33CCCC33, 0x0F0F0F0F0F0F0F0F, 0xA55A5AA55AA5A55A,
    ],
    [
        0x6699669999669966, 0x33CCCC33CC3333CC, 0x5A5A5A5AA5A5A5A5, 0xC3C33C3C3C3CC3C3,
        0x0FF00FF0F00FF00F, 0xAA55AA55AA55AA55, 0xC3C33C3C3C3CC3C3, 0x0F0F0F0FF0F0F0F0,
        0xAA55AA55AA55AA55, 0x33CCCC33CC3333CC, 0xF0F0F0F0F0F0F0F0, 0xA55A5AA55AA5A55A,
    ],
    [
        0x9966996666996699, 0x33CCCC33CC3333CC, 0x5A5A5A5AA5A5A5A5, 0xC3C33C3C3C3CC3C3,
        0xF00FF00F0FF00FF0, 0x55AA55AA55AA55AA, 0xC3C33C3C3C3CC3C3, 0xF0F0F0F00F0F0F0F,
        0x55AA55AA55AA55AA, 0xCC3333CC33CCCC33, 0x0F0F0F0F0F0F0F0F, 0xA55A5AA55AA5A55A,
    ],
    [
        0x6699669999669966, 0xCC3333CC33CCCC33, 0x5A5A5A5AA5A5A5A5, 0x3C3CC3C3C3C33C3C,
        0x0FF00FF0F00FF00F, 0x55AA55AA55AA55AA, 0x3C3CC3C3C3C33C3C, 0x0F0F0F0FF0F0F0F0,
        0x55AA55AA55AA55AA, 0x33CCCC33CC3333CC, 0xF0F0F0F0F0F0F0F0, 0xA55A5AA55AA5A55A,
    ],
    [
        0x9966996666996699, 0xCC3333CC33CCCC33, 0x5A5A5A5AA5A5A5A5, 0x3C3CC3C3C3C33C3C,
        0xF00FF00F0FF00FF0, 0xAA55AA55AA55AA55, 0x3C3CC3C3C3C33C3C, 0xF0F0F0F00F0F0F0F,
        0xAA55AA55AA55AA55, 0xCC3333CC33CCCC33, 0x0F0F0F0F0F0F0F0F, 0xA55A5AA55AA5A55A,
    ],
    [
        0x6699669999669966, 0xCC3333CC33CCCC33, 0xA5A5A5A55A5A5A5A, 0xC3C33C3C3C3CC3C3,
        0xF00FF00F0FF00FF0, 0xAA55AA55AA55AA55, 0xC3C33C3C3C3CC3C3, 0x0F0F0F0FF0F0F0F0,
        0xAA55AA55AA55AA55, 0x33CCCC33CC3333CC, 0xF0F0F0F0F0F0F0F0, 0xA55A5AA55AA5A55A,
    ],
    [
        0x9966996666996699, 0xCC3333CC33CCCC33, 0xA5A5A5A55A5A5A5A, 0xC3C33C3C3C3CC3C3,
        0x0FF00FF0F00FF00F, 0x55AA55AA55AA55AA, 0xC3C33C3C3C3CC3C3, 0xF0F0F0F00F0F0F0F,
        0x55AA55AA55AA55AA, 0xCC3333CC33CCCC33, 0x0F0F0F0F0F0F0F0F, 0xA55A5AA55AA5A55A,
    ],
    [
        0x9669699696696996, 0x6996699669966996, 0x6996699669966996, 0x00FFFF0000FFFF00,
        0xFF00FF00FF00FF00, 0xF00FF00F0FF00FF0, 0xF0F00F0F0F0FF0F0, 0xC33C3CC33CC3C33C,
        0xC33C3CC33CC3C33C, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x6996699669966996, 0x6996699669966996, 0x00FFFF0000FFFF00,
        0x00FF00FF00FF00FF, 0x0FF00FF0F00FF00F, 0x0F0FF0F0F0F00F0F, 0x3CC3C33CC33C3CC3,
        0x3CC3C33CC33C3CC3, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x6996699669966996, 0x6996699669966996, 0xFF0000FFFF0000FF,
        0x00FF00FF00FF00FF, 0x0FF00FF0F00FF00F, 0x0F0FF0F0F0F00F0F, 0xC33C3CC33CC3C33C,
        0xC33C3CC33CC3C33C, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x6996699669966996, 0x6996699669966996, 0xFF0000FFFF0000FF,
        0xFF00FF00FF00FF00, 0xF00FF00F0FF00FF0, 0xF0F00F0F0F0FF0F0, 0x3CC3C33CC33C3CC3,
        0x3CC3C33CC33C3CC3, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x6996699669966996, 0x9669966996699669, 0xFF0000FFFF0000FF,
        0x00FF00FF00FF00FF, 0xF00FF00F0FF00FF0, 0xF0F00F0F0F0FF0F0, 0xC33C3CC33CC3C33C,
        0xC33C3CC33CC3C33C, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x6996699669966996, 0x9669966996699669, 0xFF0000FFFF0000FF,
        0xFF00FF00FF00FF00, 0x0FF00FF0F00FF00F, 0x0F0FF0F0F0F00F0F, 0x3CC3C33CC33C3CC3,
        0x3CC3C33CC33C3CC3, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x6996699669966996, 0x9669966996699669, 0x00FFFF0000FFFF00,
        0xFF00FF00FF00FF00, 0x0FF00FF0F00FF00F, 0x0F0FF0F0F0F00F0F, 0xC33C3CC33CC3C33C,
        0xC33C3CC33CC3C33C, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x6996699669966996, 0x9669966996699669, 0x00FFFF0000FFFF00,
        0x00FF00FF00FF00FF, 0xF00FF00F0FF00FF0, 0xF0F00F0F0F0FF0F0, 0x3CC3C33CC33C3CC3,
        0x3CC3C33CC33C3CC3, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x9669966996699669, 0x9669966996699669, 0x00FFFF0000FFFF00,
        0xFF00FF00FF00FF00, 0xF00FF00F0FF00FF0, 0xF0F00F0F0F0FF0F0, 0xC33C3CC33CC3C33C,
        0xC33C3CC33CC3C33C, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x9669966996699669, 0x9669966996699669, 0x00FFFF0000FFFF00,
        0x00FF00FF00FF00FF, 0x0FF00FF0F00FF00F, 0x0F0FF0F0F0F00F0F, 0x3CC3C33CC33C3CC3,
        0x3CC3C33CC33C3CC3, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x9669966996699669, 0x9669966996699669, 0xFF0000FFFF0000FF,
        0x00FF00FF00FF00FF, 0x0FF00FF0F00FF00F, 0x0F0FF0F0F0F00F0F, 0xC33C3CC33CC3C33C,
        0xC33C3CC33CC3C33C, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x9669966996699669, 0x9669966996699669, 0xFF0000FFFF0000FF,
        0xFF00FF00FF00FF00, 0xF00FF00F0FF00FF0, 0xF0F00F0F0F0FF0F0, 0x3CC3C33CC33C3CC3,
        0x3CC3C33CC33C3CC3, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x9669966996699669, 0x6996699669966996, 0xFF0000FFFF0000FF,
        0x00FF00FF00FF00FF, 0xF00FF00F0FF00FF0, 0xF0F00F0F0F0FF0F0, 0xC33C3CC33CC3C33C,
        0xC33C3CC33CC3C33C, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x9669966996699669, 0x6996699669966996, 0xFF0000FFFF0000FF,
        0xFF00FF00FF00FF00, 0x0FF00FF0F00FF00F, 0x0F0FF0F0F0F00F0F, 0x3CC3C33CC33C3CC3,
        0x3CC3C33CC33C3CC3, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x9669966996699669, 0x6996699669966996, 0x00FFFF0000FFFF00,
        0xFF00FF00FF00FF00, 0x0FF00FF0F00FF00F, 0x0F0FF0F0F0F00F0F, 0xC33C3CC33CC3C33C,
        0xC33C3CC33CC3C33C, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x9669699696696996, 0x9669966996699669, 0x6996699669966996, 0x00FFFF0000FFFF00,
        0x00FF00FF00FF00FF, 0xF00FF00F0FF00FF0, 0xF0F00F0F0F0FF0F0, 0x3CC3C33CC33C3CC3,
        0x3CC3C33CC33C3CC3, 0xA55A5AA55AA5A55A, 0xC33C3CC33CC3C33C, 0x3CC3C33C3CC3C33C,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF,
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF,
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000,
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000,
        0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0x0000000000000000,
        0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0x0000000000000000,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF,
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF,
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000,
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000,
        0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0x0000000000000000, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0x0000000000000000, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
    [
        0x0000000000000000, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFF00000000, 0xFFFF0000FFFF0000,
        0xFF00FF00FF00FF00, 0xF0F0F0F0F0F0F0F0, 0xCCCCCCCCCCCCCCCC, 0xAAAAAAAAAAAAAAAA,
    ],
];

/// 6-bit bit reversal: `REVERSAL[j]` is `j` with its six bits mirrored.
pub const REVERSAL: [u8; FFT_POINTS] = [
    0x00, 0x20, 0x10, 0x30, 0x08, 0x28, 0x18, 0x38,
    0x04, 0x24, 0x14, 0x34, 0x0C, 0x2C, 0x1C, 0x3C,
    0x02, 0x22, 0x12, 0x32, 0x0A, 0x2A, 0x1A, 0x3A,
    0x06, 0x26, 0x16, 0x36, 0x0E, 0x2E, 0x1E, 0x3E,
    0x01, 0x21, 0x11, 0x31, 0x09, 0x29, 0x19, 0x39,
    0x05, 0x25, 0x15, 0x35, 0x0D, 0x2D, 0x1D, 0x3D,
    0x03, 0x23, 0x13, 0x33, 0x0B, 0x2B, 0x1B, 0x3B,
    0x07, 0x27, 0x17, 0x37, 0x0F, 0x2F, 0x1F, 0x3F,
];
